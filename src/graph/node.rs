//! Node representation in the weighted graph

use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Unique integer key of a node
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct NodeKey(i32);

impl NodeKey {
    /// Create a key from its raw integer value
    pub const fn new(key: i32) -> Self {
        Self(key)
    }

    /// Get the raw integer value
    pub const fn get(self) -> i32 {
        self.0
    }
}

impl From<i32> for NodeKey {
    fn from(key: i32) -> Self {
        Self(key)
    }
}

impl std::fmt::Display for NodeKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A point in 3-D space attached to a node
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct GeoLocation {
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

impl GeoLocation {
    pub fn new(x: f64, y: f64, z: f64) -> Self {
        Self { x, y, z }
    }
}

/// Flattened `x,y,z` form used by snapshots.
///
/// Coordinates are plain decimals in shortest round-trip form, never in
/// exponent notation, and always carry a fractional part: `1` is written
/// as `1.0` and `1e20` as `100000000000000000000.0`.
impl std::fmt::Display for GeoLocation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write_coordinate(f, self.x)?;
        f.write_str(",")?;
        write_coordinate(f, self.y)?;
        f.write_str(",")?;
        write_coordinate(f, self.z)
    }
}

fn write_coordinate(f: &mut std::fmt::Formatter<'_>, value: f64) -> std::fmt::Result {
    let text = value.to_string();
    f.write_str(&text)?;
    if value.is_finite() && !text.contains('.') {
        f.write_str(".0")?;
    }
    Ok(())
}

/// Error returned when a flattened position cannot be parsed
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("expected three comma-separated coordinates, got {0:?}")]
pub struct ParseLocationError(pub String);

impl FromStr for GeoLocation {
    type Err = ParseLocationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || ParseLocationError(s.to_string());

        let mut coords = [0.0_f64; 3];
        let mut parts = s.split(',');
        for slot in coords.iter_mut() {
            let part = parts.next().ok_or_else(invalid)?;
            let value: f64 = part.trim().parse().map_err(|_| invalid())?;
            if !value.is_finite() {
                return Err(invalid());
            }
            *slot = value;
        }
        if parts.next().is_some() {
            return Err(invalid());
        }

        Ok(Self::new(coords[0], coords[1], coords[2]))
    }
}

/// A node in the graph
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Node {
    /// Unique key
    pub key: NodeKey,
    /// Optional position
    pub location: Option<GeoLocation>,
}

impl Node {
    /// Create a node without a location
    pub fn new(key: impl Into<NodeKey>) -> Self {
        Self {
            key: key.into(),
            location: None,
        }
    }

    /// Set the location
    pub fn with_location(mut self, location: GeoLocation) -> Self {
        self.location = Some(location);
        self
    }
}

impl std::fmt::Display for Node {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match &self.location {
            Some(pos) => write!(f, "{}@({})", self.key, pos),
            None => write!(f, "{}", self.key),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn location_display_keeps_fraction() {
        let pos = GeoLocation::new(1.0, 2.5, -3.0);
        assert_eq!(pos.to_string(), "1.0,2.5,-3.0");
    }

    #[test]
    fn location_parses_flattened_form() {
        let pos: GeoLocation = "35.212217299435025,32.106235628571426,0.0".parse().unwrap();
        assert_eq!(pos.x, 35.212217299435025);
        assert_eq!(pos.y, 32.106235628571426);
        assert_eq!(pos.z, 0.0);
    }

    #[test]
    fn location_display_parse_agree() {
        let pos = GeoLocation::new(0.1, 1e-9, 12345.678);
        let parsed: GeoLocation = pos.to_string().parse().unwrap();
        assert_eq!(pos, parsed);
    }

    #[test]
    fn location_rejects_wrong_arity() {
        assert!("1.0,2.0".parse::<GeoLocation>().is_err());
        assert!("1.0,2.0,3.0,4.0".parse::<GeoLocation>().is_err());
        assert!("".parse::<GeoLocation>().is_err());
    }

    #[test]
    fn location_rejects_non_numeric() {
        assert!("1.0,abc,3.0".parse::<GeoLocation>().is_err());
        assert!("NaN,0.0,0.0".parse::<GeoLocation>().is_err());
    }

    #[test]
    fn location_never_uses_exponent_form() {
        let pos = GeoLocation::new(1e20, 1e-7, -0.0);
        let text = pos.to_string();
        assert_eq!(text, "100000000000000000000.0,0.0000001,-0.0");
        assert!(!text.contains('e'));

        let parsed: GeoLocation = text.parse().unwrap();
        assert_eq!(parsed, pos);
        assert!(parsed.z.is_sign_negative());
    }

    #[test]
    fn node_key_orders_numerically() {
        assert!(NodeKey::new(-1) < NodeKey::new(0));
        assert_eq!(NodeKey::from(7).get(), 7);
    }
}
