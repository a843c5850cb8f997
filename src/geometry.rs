use nalgebra::Vector3;

use crate::attitude::Attitude;
use crate::geo::GeoPoint;

/// Body-frame incidence and scatter directions for one transmitter /
/// receiver / target configuration, with their azimuth/elevation angles
/// in degrees. Recomputed per query, never stored.
#[derive(Debug, Clone)]
pub struct BistaticGeometry {
    pub incidence_dir_body: Vector3<f64>,
    pub scatter_dir_body: Vector3<f64>,
    pub incidence_az_deg: f64,
    pub incidence_el_deg: f64,
    pub scatter_az_deg: f64,
    pub scatter_el_deg: f64,
}

/// Normalize, but return the zero vector unchanged instead of dividing by
/// zero. A zero direction later yields NaN elevation (asin of 0/0), which
/// callers must treat as "undefined geometry".
pub fn normalize_or_zero(v: Vector3<f64>) -> Vector3<f64> {
    let n = v.norm();
    if n == 0.0 {
        v
    } else {
        v / n
    }
}

/// Compute bistatic look geometry in the target's body frame.
///
/// Incidence points from the target toward the transmitter, scatter from
/// the target toward the receiver. If a station coincides with the target
/// the corresponding elevation comes out NaN rather than an error.
pub fn geometry(
    transmitter: &GeoPoint,
    receiver: &GeoPoint,
    target: &GeoPoint,
    attitude: &Attitude,
) -> BistaticGeometry {
    let tx_ecef = transmitter.to_ecef();
    let rx_ecef = receiver.to_ecef();
    let tgt_ecef = target.to_ecef();

    let incidence_geo = normalize_or_zero(tx_ecef - tgt_ecef);
    let scatter_geo = normalize_or_zero(rx_ecef - tgt_ecef);

    let incidence_body = attitude.geocentric_to_body(&incidence_geo);
    let scatter_body = attitude.geocentric_to_body(&scatter_geo);

    let (incidence_az, incidence_el) = direction_angles(&incidence_body);
    let (scatter_az, scatter_el) = direction_angles(&scatter_body);

    BistaticGeometry {
        incidence_dir_body: incidence_body,
        scatter_dir_body: scatter_body,
        incidence_az_deg: incidence_az,
        incidence_el_deg: incidence_el,
        scatter_az_deg: scatter_az,
        scatter_el_deg: scatter_el,
    }
}

// Elevation divides by the actual norm rather than assuming a unit vector,
// so non-unit inputs still give the correct angle.
fn direction_angles(v: &Vector3<f64>) -> (f64, f64) {
    let azimuth = v.y.atan2(v.x).to_degrees();
    let elevation = (v.z / v.norm()).asin().to_degrees();
    (azimuth, elevation)
}
