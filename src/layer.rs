use std::collections::HashMap;
use std::io::BufRead;

use serde::ser::{Serialize, SerializeStruct, Serializer};

use crate::error::{Error, Result};
use crate::wire::{Wire, WireId};

/// The layout of one layer of wires on a chip.
///
/// Wire names are unique; wires are immutable once added and keep
/// their insertion order, which also fixes their creation-order ids.
#[derive(Debug, Default, Clone)]
pub struct WireLayer {
    wires: Vec<Wire>,
    by_name: HashMap<String, usize>,
}

impl WireLayer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a wire, assigning it the next creation-order id.
    ///
    /// Fails with [`Error::DuplicateName`] if the name is taken, or
    /// with [`Error::Geometry`] if the endpoints are not axis-aligned.
    pub fn add_wire(&mut self, name: &str, x1: f64, y1: f64, x2: f64, y2: f64) -> Result<WireId> {
        if self.by_name.contains_key(name) {
            return Err(Error::DuplicateName(name.to_owned()));
        }
        let id = WireId(self.wires.len());
        let wire = Wire::new(id, name, x1, y1, x2, y2)?;
        self.by_name.insert(name.to_owned(), self.wires.len());
        self.wires.push(wire);
        Ok(id)
    }

    pub fn get(&self, name: &str) -> Option<&Wire> {
        self.by_name.get(name).map(|&i| &self.wires[i])
    }

    /// Wires in insertion order.
    pub fn wires(&self) -> impl Iterator<Item = &Wire> {
        self.wires.iter()
    }

    pub fn len(&self) -> usize {
        self.wires.len()
    }

    pub fn is_empty(&self) -> bool {
        self.wires.is_empty()
    }

    /// Parse the line-oriented layout description:
    ///
    /// ```text
    /// wire <name> <x1> <y1> <x2> <y2>
    /// ...
    /// done
    /// ```
    ///
    /// Blank lines are skipped. Input ending before a `done` record is
    /// a parse error.
    pub fn from_reader(reader: impl BufRead) -> Result<WireLayer> {
        let mut layer = WireLayer::new();
        let mut lineno = 0;

        for line in reader.lines() {
            let line = line?;
            lineno += 1;
            let mut tokens = line.split_whitespace();
            match tokens.next() {
                None => continue,
                Some("done") => return Ok(layer),
                Some("wire") => {
                    let name = tokens.next().ok_or_else(|| Error::Parse {
                        line: lineno,
                        message: "wire record is missing a name".to_owned(),
                    })?;
                    let mut coords = [0f64; 4];
                    for c in coords.iter_mut() {
                        let token = tokens.next().ok_or_else(|| Error::Parse {
                            line: lineno,
                            message: "wire record needs four coordinates".to_owned(),
                        })?;
                        *c = token.parse().map_err(|_| Error::Parse {
                            line: lineno,
                            message: format!("bad coordinate {:?}", token),
                        })?;
                    }
                    if let Some(extra) = tokens.next() {
                        return Err(Error::Parse {
                            line: lineno,
                            message: format!("trailing token {:?} after wire record", extra),
                        });
                    }
                    layer.add_wire(name, coords[0], coords[1], coords[2], coords[3])?;
                }
                Some(other) => {
                    return Err(Error::Parse {
                        line: lineno,
                        message: format!("unknown record {:?}", other),
                    });
                }
            }
        }

        Err(Error::Parse {
            line: lineno,
            message: "input ended before a done record".to_owned(),
        })
    }
}

/// The JSON shape consumed by the visualizer: `{"wires": [...]}`.
impl Serialize for WireLayer {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        let mut s = serializer.serialize_struct("WireLayer", 1)?;
        s.serialize_field("wires", &self.wires)?;
        s.end()
    }
}
