// Geo service
// Great-circle distance and zoom planning for map fly-to transitions

use crate::models::geo::{GeoCoordinate, GeoError, ZoomPlan};

/// Mean Earth radius in kilometres, as used by the haversine formula
pub const EARTH_RADIUS_KM: f64 = 6371.0;

/// Great-circle distance between two coordinates in kilometres
///
/// Haversine formula; both inputs are validated so malformed coordinates
/// surface as an error instead of a NaN distance.
pub fn distance_km(a: GeoCoordinate, b: GeoCoordinate) -> Result<f64, GeoError> {
    a.validate()?;
    b.validate()?;

    let d_lat = (b.latitude - a.latitude).to_radians();
    let d_lon = (b.longitude - a.longitude).to_radians();

    let h = (d_lat / 2.0).sin().powi(2)
        + a.latitude.to_radians().cos()
            * b.latitude.to_radians().cos()
            * (d_lon / 2.0).sin().powi(2);

    Ok(2.0 * EARTH_RADIUS_KM * h.sqrt().atan2((1.0 - h).sqrt()))
}

/// Pick the zoom-out/zoom-in pair for a pan between two points
///
/// The map always zooms out before panning so the location change reads
/// clearly, even for short hops.
pub fn plan_zoom(a: GeoCoordinate, b: GeoCoordinate) -> Result<ZoomPlan, GeoError> {
    let distance = distance_km(a, b)?;

    let plan = if distance > 10.0 {
        ZoomPlan {
            zoom_out: 10,
            zoom_in: 14,
        }
    } else if distance > 5.0 {
        ZoomPlan {
            zoom_out: 11,
            zoom_in: 15,
        }
    } else {
        // Short hops, including zero distance, share one plan
        ZoomPlan {
            zoom_out: 12,
            zoom_in: 15,
        }
    };

    Ok(plan)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn coordinate(latitude: f64, longitude: f64) -> GeoCoordinate {
        GeoCoordinate {
            latitude,
            longitude,
        }
    }

    #[test]
    fn test_epping_to_marrickville_distance() {
        let epping = coordinate(-33.7667, 151.0833);
        let marrickville = coordinate(-33.9133, 151.1553);
        let distance = distance_km(epping, marrickville).unwrap();
        assert!(
            (distance - 17.6).abs() < 1.5,
            "unexpected distance: {distance}"
        );
    }

    #[test]
    fn test_identical_points_have_zero_distance() {
        let point = coordinate(-33.9198, 151.0346);
        assert_eq!(distance_km(point, point).unwrap(), 0.0);
    }

    #[test]
    fn test_far_pan_zooms_out_to_ten() {
        let epping = coordinate(-33.7667, 151.0833);
        let marrickville = coordinate(-33.9133, 151.1553);
        assert_eq!(
            plan_zoom(epping, marrickville).unwrap(),
            ZoomPlan {
                zoom_out: 10,
                zoom_in: 14
            }
        );
    }

    #[test]
    fn test_zero_distance_still_zooms_out() {
        let point = coordinate(-33.9198, 151.0346);
        assert_eq!(
            plan_zoom(point, point).unwrap(),
            ZoomPlan {
                zoom_out: 12,
                zoom_in: 15
            }
        );
    }

    #[test]
    fn test_malformed_coordinate_is_rejected() {
        let good = coordinate(0.0, 0.0);
        let bad = coordinate(95.0, 0.0);
        assert!(plan_zoom(good, bad).is_err());
        assert!(distance_km(bad, good).is_err());
    }
}
