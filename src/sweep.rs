use crate::model::bistatic_rcs;

/// Frequencies and RCS values from one sweep, index-aligned and ordered by
/// increasing frequency.
#[derive(Debug, Clone)]
pub struct SweepResult {
    pub freqs_ghz: Vec<f64>,
    pub rcs_values: Vec<f64>,
}

/// Evaluate the synthetic model over `points` evenly spaced frequencies
/// from `start_ghz` to `stop_ghz` inclusive, at a fixed bistatic geometry.
///
/// `points` below 2 is silently raised to 2 so the endpoints always exist.
pub fn sweep(
    start_ghz: f64,
    stop_ghz: f64,
    points: usize,
    incidence_az_deg: f64,
    incidence_el_deg: f64,
    scatter_az_deg: f64,
    scatter_el_deg: f64,
) -> SweepResult {
    let points = points.max(2);
    let step = (stop_ghz - start_ghz) / (points - 1) as f64;

    let mut freqs_ghz = Vec::with_capacity(points);
    let mut rcs_values = Vec::with_capacity(points);
    for i in 0..points {
        let freq = start_ghz + i as f64 * step;
        freqs_ghz.push(freq);
        rcs_values.push(bistatic_rcs(
            freq,
            incidence_az_deg,
            incidence_el_deg,
            scatter_az_deg,
            scatter_el_deg,
        ));
    }

    SweepResult {
        freqs_ghz,
        rcs_values,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn five_points_cover_the_band_inclusively() {
        let result = sweep(8.0, 12.0, 5, 35.0, 0.0, -20.0, 0.0);

        assert_eq!(result.freqs_ghz.len(), 5);
        assert_eq!(result.rcs_values.len(), 5);
        for (freq, expected) in result.freqs_ghz.iter().zip([8.0, 9.0, 10.0, 11.0, 12.0]) {
            assert_relative_eq!(*freq, expected, epsilon = 1e-12);
        }
        assert!(result
            .freqs_ghz
            .windows(2)
            .all(|pair| pair[0] < pair[1]));
        assert!(result.rcs_values.iter().all(|rcs| rcs.is_finite()));
    }

    #[test]
    fn single_point_request_is_clamped_to_two() {
        let result = sweep(9.0, 11.0, 1, 0.0, 0.0, 0.0, 0.0);

        assert_eq!(result.freqs_ghz.len(), 2);
        assert_relative_eq!(result.freqs_ghz[0], 9.0, epsilon = 1e-12);
        assert_relative_eq!(result.freqs_ghz[1], 11.0, epsilon = 1e-12);
    }

    #[test]
    fn zero_points_request_is_clamped_to_two() {
        let result = sweep(9.0, 11.0, 0, 0.0, 0.0, 0.0, 0.0);
        assert_eq!(result.freqs_ghz.len(), 2);
    }

    #[test]
    fn sweep_values_match_the_model() {
        let result = sweep(8.0, 12.0, 3, 10.0, 5.0, -30.0, 2.0);
        for (freq, rcs) in result.freqs_ghz.iter().zip(&result.rcs_values) {
            assert_relative_eq!(
                *rcs,
                bistatic_rcs(*freq, 10.0, 5.0, -30.0, 2.0),
                epsilon = 0.0
            );
        }
    }
}
