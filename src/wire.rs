use serde::ser::{Serialize, SerializeStruct, Serializer};

use crate::error::{Error, Result};

/// Creation-order identity of a wire.
///
/// Assigned sequentially by [`WireLayer`], and distinct from the
/// user-visible name. Its only job is to break ties deterministically
/// between wires that share a Y coordinate in the sweep index.
///
/// [`WireLayer`]: crate::WireLayer
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct WireId(pub usize);

/// Axis-alignment of a wire.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Orientation {
    Horizontal,
    Vertical,
}

/// An axis-aligned wire on a chip layer.
///
/// Wires are immutable once constructed. Endpoints are normalized so
/// that `x1 <= x2` and `y1 <= y2`. The geometry model assumes wires
/// may cross but never overlap.
#[derive(Debug, Clone, PartialEq)]
pub struct Wire {
    id: WireId,
    name: String,
    x1: f64,
    y1: f64,
    x2: f64,
    y2: f64,
}

impl Wire {
    /// Create a wire, normalizing the endpoint order.
    ///
    /// Fails if the endpoints describe neither a horizontal nor a
    /// vertical wire, if they coincide, or if any coordinate is not
    /// finite.
    pub fn new(
        id: WireId,
        name: impl Into<String>,
        x1: f64,
        y1: f64,
        x2: f64,
        y2: f64,
    ) -> Result<Self> {
        let name = name.into();
        if !(x1.is_finite() && y1.is_finite() && x2.is_finite() && y2.is_finite()) {
            return Err(Error::Geometry {
                name,
                reason: "coordinates must be finite",
            });
        }

        let (x1, x2) = if x1 <= x2 { (x1, x2) } else { (x2, x1) };
        let (y1, y2) = if y1 <= y2 { (y1, y2) } else { (y2, y1) };
        let wire = Wire {
            id,
            name,
            x1,
            y1,
            x2,
            y2,
        };

        match (wire.y1 == wire.y2, wire.x1 == wire.x2) {
            (true, true) => Err(Error::Geometry {
                name: wire.name,
                reason: "degenerate wire: endpoints coincide",
            }),
            (false, false) => Err(Error::Geometry {
                name: wire.name,
                reason: "neither horizontal nor vertical",
            }),
            _ => Ok(wire),
        }
    }

    pub fn id(&self) -> WireId {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn x1(&self) -> f64 {
        self.x1
    }

    pub fn y1(&self) -> f64 {
        self.y1
    }

    pub fn x2(&self) -> f64 {
        self.x2
    }

    pub fn y2(&self) -> f64 {
        self.y2
    }

    /// True if both endpoints share a Y coordinate.
    #[inline]
    pub fn is_horizontal(&self) -> bool {
        self.y1 == self.y2
    }

    /// True if both endpoints share an X coordinate.
    #[inline]
    pub fn is_vertical(&self) -> bool {
        self.x1 == self.x2
    }

    pub fn orientation(&self) -> Orientation {
        if self.is_horizontal() {
            Orientation::Horizontal
        } else {
            Orientation::Vertical
        }
    }

    /// True if this wire crosses `other`.
    ///
    /// Wires sharing an orientation never cross (the no-overlap
    /// assumption). Otherwise both containments are tested on closed
    /// intervals, so touching at an endpoint counts as crossing.
    pub fn intersects(&self, other: &Wire) -> bool {
        if self.is_horizontal() == other.is_horizontal() {
            return false;
        }

        let (h, v) = if self.is_horizontal() {
            (self, other)
        } else {
            (other, self)
        };
        v.y1 <= h.y1 && h.y1 <= v.y2 && h.x1 <= v.x1 && v.x1 <= h.x2
    }
}

/// The JSON shape consumed by the visualizer:
/// `{"id": name, "x": [x1, x2], "y": [y1, y2]}`.
impl Serialize for Wire {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        let mut s = serializer.serialize_struct("Wire", 3)?;
        s.serialize_field("id", &self.name)?;
        s.serialize_field("x", &[self.x1, self.x2])?;
        s.serialize_field("y", &[self.y1, self.y2])?;
        s.end()
    }
}
