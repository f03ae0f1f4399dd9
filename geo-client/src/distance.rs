use crate::error::GeodecodingError;

pub const EARTH_RADIUS_KM: f64 = 6371.0;

/// Great-circle distance in kilometers between two `"latitude,longitude"` points.
pub fn haversine(from_location: &str, to_location: &str) -> Result<f64, GeodecodingError> {
    let (from_latitude, from_longitude) = parse_coordinates(from_location)?;
    let (to_latitude, to_longitude) = parse_coordinates(to_location)?;

    let (from_latitude, from_longitude, to_latitude, to_longitude) = (
        from_latitude.to_radians(),
        from_longitude.to_radians(),
        to_latitude.to_radians(),
        to_longitude.to_radians(),
    );
    let latitude = to_latitude - from_latitude;
    let longitude = to_longitude - from_longitude;
    let haversine = (latitude * 0.5).sin().powi(2)
        + from_latitude.cos() * to_latitude.cos() * (longitude * 0.5).sin().powi(2);
    Ok(2.0 * EARTH_RADIUS_KM * haversine.sqrt().asin())
}

pub(crate) fn parse_coordinates(location: &str) -> Result<(f64, f64), GeodecodingError> {
    let invalid = || GeodecodingError::InvalidCoordinates(location.to_string());
    let (latitude, longitude) = location.split_once(',').ok_or_else(invalid)?;
    let latitude: f64 = latitude.trim().parse().map_err(|_| invalid())?;
    let longitude: f64 = longitude.trim().parse().map_err(|_| invalid())?;
    if !(-90.0..=90.0).contains(&latitude) || !(-180.0..=180.0).contains(&longitude) {
        return Err(invalid());
    }
    Ok((latitude, longitude))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn distance() {
        let berlin = "52.447240,13.416683";
        let kyiv = "50.450100,30.523400";
        let distance = haversine(berlin, kyiv).unwrap();
        assert!((distance - 1203.1).abs() < 0.1, "got {distance}");
        assert!((haversine(kyiv, berlin).unwrap() - distance).abs() < 1e-9);
        assert_eq!(haversine(berlin, berlin).unwrap(), 0.0);
    }

    #[test]
    fn invalid_coordinates() {
        for coords in ["49.227132,31852766", "-1235.4568,1873.78977", "onetwo,three", "52.4"] {
            assert!(matches!(
                haversine(coords, "0,0"),
                Err(GeodecodingError::InvalidCoordinates(_))
            ));
        }
    }
}
