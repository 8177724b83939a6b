//! Primitive geometry data structures derived from ISO 19107
//!
//! Only the direct-position primitive is modelled; geometry algorithms and
//! full geometric types are external collaborator territory.

use serde::{Deserialize, Serialize};

use crate::referencing::crs::CoordinateReferenceSystem;

/// The coordinates for a position within some coordinate reference system
/// (ISO 19107)
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct DirectPosition {
    /// Coordinate tuple; its length is the position's dimension
    pub coordinate: Vec<f64>,
    /// Reference system the coordinate tuple is given in, when the position
    /// does not inherit one from its container
    #[serde(skip_serializing_if = "Option::is_none")]
    pub coordinate_reference_system: Option<Box<CoordinateReferenceSystem>>,
}

impl DirectPosition {
    pub fn new(coordinate: Vec<f64>) -> Self {
        Self {
            coordinate,
            coordinate_reference_system: None,
        }
    }

    /// A two-dimensional position.
    pub fn xy(x: f64, y: f64) -> Self {
        Self::new(vec![x, y])
    }

    /// The length of the coordinate sequence.
    pub fn dimension(&self) -> usize {
        self.coordinate.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dimension_follows_coordinate() {
        assert_eq!(DirectPosition::xy(5.0, 45.0).dimension(), 2);
        assert_eq!(DirectPosition::new(vec![5.0, 45.0, 120.0]).dimension(), 3);
    }
}
