use nalgebra::Vector3;

/// A geodetic position: latitude/longitude in degrees, altitude in meters
/// above the WGS84 ellipsoid.
#[derive(Debug, Clone, Copy)]
pub struct GeoPoint {
    pub latitude_deg: f64,
    pub longitude_deg: f64,
    pub altitude_m: f64,
}

// WGS84 ellipsoid parameters
const WGS84_A: f64 = 6378137.0; // semi-major axis (meters)
const WGS84_E2: f64 = 6.69437999014e-3; // eccentricity squared

impl GeoPoint {
    pub fn new(latitude_deg: f64, longitude_deg: f64, altitude_m: f64) -> Self {
        Self {
            latitude_deg,
            longitude_deg,
            altitude_m,
        }
    }

    /// Convert to ECEF coordinates (meters).
    ///
    /// Pure function; latitude/longitude are used as given (no clamping),
    /// so non-finite inputs propagate into the result.
    pub fn to_ecef(&self) -> Vector3<f64> {
        let lat_rad = self.latitude_deg.to_radians();
        let lon_rad = self.longitude_deg.to_radians();

        let sin_lat = lat_rad.sin();
        let cos_lat = lat_rad.cos();

        // Prime-vertical radius of curvature
        let n = WGS84_A / (1.0 - WGS84_E2 * sin_lat * sin_lat).sqrt();

        let x = (n + self.altitude_m) * cos_lat * lon_rad.cos();
        let y = (n + self.altitude_m) * cos_lat * lon_rad.sin();
        let z = (n * (1.0 - WGS84_E2) + self.altitude_m) * sin_lat;

        Vector3::new(x, y, z)
    }
}
