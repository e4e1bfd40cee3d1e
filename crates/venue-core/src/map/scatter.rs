// crates/venue-core/src/map/scatter.rs
use crate::geo::VenuePoint;
use crate::model::Venue;

/// Smallest lat/lng span of the fallback plot, in degrees. Keeps a single
/// point (or a tight cluster) from dividing by zero.
pub const MIN_SPAN: f64 = 0.02;

/// A point of the fallback scatter plot in unit coordinates:
/// `x` grows east, `y` grows south, both in `0.0..=1.0`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ScatterDot<'a> {
    pub venue: &'a Venue,
    pub x: f64,
    pub y: f64,
}

/// Lays out points proportionally inside their bounding box.
///
/// The box is widened around its middle to at least [`MIN_SPAN`] per axis.
pub fn scatter_layout<'a>(points: &[VenuePoint<'a>]) -> Vec<ScatterDot<'a>> {
    let Some(first) = points.first() else {
        return Vec::new();
    };

    let (mut min_lat, mut max_lat) = (first.position.lat, first.position.lat);
    let (mut min_lng, mut max_lng) = (first.position.lng, first.position.lng);
    for p in &points[1..] {
        min_lat = min_lat.min(p.position.lat);
        max_lat = max_lat.max(p.position.lat);
        min_lng = min_lng.min(p.position.lng);
        max_lng = max_lng.max(p.position.lng);
    }

    let (lat_lo, lat_span) = padded(min_lat, max_lat);
    let (lng_lo, lng_span) = padded(min_lng, max_lng);

    points
        .iter()
        .map(|p| ScatterDot {
            venue: p.venue,
            x: (p.position.lng - lng_lo) / lng_span,
            y: 1.0 - (p.position.lat - lat_lo) / lat_span,
        })
        .collect()
}

fn padded(min: f64, max: f64) -> (f64, f64) {
    let span = (max - min).max(MIN_SPAN);
    let mid = (min + max) / 2.0;
    (mid - span / 2.0, span)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geo::LatLng;
    use crate::model::OpeningHours;

    fn venue(id: &str) -> Venue {
        Venue {
            id: id.into(),
            name: id.into(),
            city: None,
            address: None,
            description: String::new(),
            price_per_hour: None,
            sports: vec![],
            amenities: vec![],
            opening_hours: OpeningHours::unknown(),
            external_url: None,
        }
    }

    #[test]
    fn single_point_lands_in_the_middle() {
        let v = venue("a");
        let dots = scatter_layout(&[VenuePoint {
            venue: &v,
            position: LatLng::new(49.5, 8.5),
        }]);
        assert_eq!(dots.len(), 1);
        assert!((dots[0].x - 0.5).abs() < 1e-9);
        assert!((dots[0].y - 0.5).abs() < 1e-9);
    }

    #[test]
    fn corners_map_to_unit_square_edges() {
        let (a, b) = (venue("sw"), venue("ne"));
        let dots = scatter_layout(&[
            VenuePoint { venue: &a, position: LatLng::new(49.0, 8.0) },
            VenuePoint { venue: &b, position: LatLng::new(50.0, 9.0) },
        ]);
        assert!((dots[0].x - 0.0).abs() < 1e-9 && (dots[0].y - 1.0).abs() < 1e-9);
        assert!((dots[1].x - 1.0).abs() < 1e-9 && (dots[1].y - 0.0).abs() < 1e-9);
    }

    #[test]
    fn empty_input_has_no_dots() {
        assert!(scatter_layout(&[]).is_empty());
    }
}
