//! Delivery coverage zones around physical pickup stores.

use serde::{Deserialize, Serialize};

use crate::types::EntityId;

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GeoPoint {
    pub lat: f64,
    pub lng: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CoverageZone {
    pub id: EntityId,
    pub name: String,
    pub store_id: EntityId,
    pub city: String,
    /// Closed polygon; the last vertex connects back to the first.
    pub polygon: Vec<GeoPoint>,
    pub is_active: bool,
}

impl CoverageZone {
    /// Ray-casting point-in-polygon test. Degenerate polygons contain nothing.
    pub fn contains(&self, point: GeoPoint) -> bool {
        let vertices = &self.polygon;
        if vertices.len() < 3 {
            return false;
        }
        let mut inside = false;
        let mut j = vertices.len() - 1;
        for i in 0..vertices.len() {
            let (a, b) = (vertices[i], vertices[j]);
            if (a.lat > point.lat) != (b.lat > point.lat)
                && point.lng < (b.lng - a.lng) * (point.lat - a.lat) / (b.lat - a.lat) + a.lng
            {
                inside = !inside;
            }
            j = i;
        }
        inside
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateCoverageZone {
    pub name: String,
    pub store_id: EntityId,
    pub city: String,
    pub polygon: Vec<GeoPoint>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn square() -> CoverageZone {
        CoverageZone {
            id: "z1".into(),
            name: "Chapinero".into(),
            store_id: "store-1".into(),
            city: "Bogotá".into(),
            polygon: vec![
                GeoPoint { lat: 4.60, lng: -74.10 },
                GeoPoint { lat: 4.60, lng: -74.00 },
                GeoPoint { lat: 4.70, lng: -74.00 },
                GeoPoint { lat: 4.70, lng: -74.10 },
            ],
            is_active: true,
        }
    }

    #[test]
    fn test_point_inside_zone() {
        assert!(square().contains(GeoPoint { lat: 4.65, lng: -74.05 }));
    }

    #[test]
    fn test_point_outside_zone() {
        assert!(!square().contains(GeoPoint { lat: 4.80, lng: -74.05 }));
    }

    #[test]
    fn test_degenerate_polygon() {
        let mut zone = square();
        zone.polygon.truncate(2);
        assert!(!zone.contains(GeoPoint { lat: 4.65, lng: -74.05 }));
    }
}
