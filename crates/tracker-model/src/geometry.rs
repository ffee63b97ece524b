use serde::{Deserialize, Serialize};

/// A single longitude/latitude pair.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coordinate {
    pub longitude: f64,
    pub latitude: f64,
}

impl Coordinate {
    pub fn new(longitude: f64, latitude: f64) -> Self {
        Self {
            longitude,
            latitude,
        }
    }
}

/// Geometry attached to an enrollment.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", content = "coordinates")]
pub enum Geometry {
    Point(Coordinate),
    Polygon(Vec<Coordinate>),
    MultiPolygon(Vec<Vec<Coordinate>>),
}

impl Geometry {
    /// First vertex of the geometry, if it has any.
    pub fn coordinate(&self) -> Option<Coordinate> {
        match self {
            Geometry::Point(point) => Some(*point),
            Geometry::Polygon(ring) => ring.first().copied(),
            Geometry::MultiPolygon(rings) => rings.iter().find_map(|ring| ring.first().copied()),
        }
    }
}
