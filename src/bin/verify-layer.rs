//! Reads a wire layout from stdin and reports its crossings.
//!
//! Output is selected with the `TRACE` environment variable:
//! `list` prints one crossing pair per line, `jsonp` emits the layer
//! and a full execution trace for the visualizer, anything else
//! prints the crossing count.

use std::env;
use std::io::{self, Write};

use wire_crossings::{CrossingVerifier, TraceLog, WireLayer};

fn main() -> wire_crossings::Result<()> {
    env_logger::init();

    let stdin = io::stdin();
    let layer = WireLayer::from_reader(stdin.lock())?;
    let stdout = io::stdout();
    let mut out = stdout.lock();

    match env::var("TRACE").ok().as_deref() {
        Some("jsonp") => {
            let mut verifier = CrossingVerifier::with_sink(&layer, TraceLog::new());
            verifier.wire_crossings()?;
            let trace = verifier.into_sink();

            write!(out, "onJsonp(")?;
            serde_json::to_writer(&mut out, &serde_json::json!({ "layer": layer, "trace": trace }))?;
            writeln!(out, ");")?;
        }
        Some("list") => {
            let mut verifier = CrossingVerifier::new(&layer);
            verifier.wire_crossings()?.write_to(&mut out)?;
        }
        _ => {
            let mut verifier = CrossingVerifier::new(&layer);
            writeln!(out, "{}", verifier.count_crossings()?)?;
        }
    }
    Ok(())
}
