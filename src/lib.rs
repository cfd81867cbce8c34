//! Detects crossings between axis-aligned wires on a single chip layer.
//!
//! Given a [`WireLayer`] of immutable horizontal and vertical wires,
//! [`CrossingVerifier`] enumerates or counts every pair of wires that
//! cross. It sweeps a conceptual vertical line left to right over the
//! layer: horizontal wires enter an ordered index (keyed by their Y
//! coordinate, ties broken by creation order) when the sweep reaches
//! their left end and leave it at their right end, and each vertical
//! wire triggers one inclusive range query over its Y span. This
//! replaces the brute-force O(n^2) pairwise test with an
//! O((n + k) log n) sweep for n wires and k crossings.
//!
//! Wires may cross but never overlap; touching at an endpoint counts
//! as crossing.
//!
//! # Usage
//!
//! ```rust
//! use wire_crossings::{CrossingVerifier, WireLayer};
//!
//! # fn main() -> wire_crossings::Result<()> {
//! let mut layer = WireLayer::new();
//! layer.add_wire("power", 0., 0., 10., 0.)?;
//! layer.add_wire("data", 5., -5., 5., 5.)?;
//!
//! let mut verifier = CrossingVerifier::new(&layer);
//! assert_eq!(verifier.count_crossings()?, 1);
//! # Ok(())
//! # }
//! ```
//!
//! A verifier is single-use; build a fresh one to re-run. Attach a
//! [`TraceLog`] via [`CrossingVerifier::with_sink`] to capture a
//! step-by-step trace for the external visualizer.
mod error;
pub use error::{Error, Result};

mod events;

pub mod wire;
pub use wire::{Orientation, Wire, WireId};

pub mod layer;
pub use layer::WireLayer;

pub mod index;
pub use index::{RangeIndex, SweepKey, Tiebreak};

pub mod results;
pub use results::ResultSet;

pub mod trace;
pub use trace::{NoTrace, TraceEvent, TraceLog, TraceSink};

pub mod verifier;
pub use verifier::CrossingVerifier;
