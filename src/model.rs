//! Synthetic bistatic RCS model.
//!
//! A smooth placeholder, not scattering physics: a frequency ripple plus two
//! Gaussian angular lobes and a weak incidence/scatter coupling term. Output
//! is a dBsm-like scalar. Every function here is total over finite inputs.

// Lobe placement for the synthetic response
const INCIDENCE_PREFERRED_AZ_DEG: f64 = 35.0;
const INCIDENCE_LOBE_WIDTH_DEG: f64 = 12.0;
const SCATTER_PREFERRED_AZ_DEG: f64 = -20.0;
const SCATTER_LOBE_WIDTH_DEG: f64 = 10.0;
const LOBE_PEAK_GAIN: f64 = 12.0;

/// Synthetic RCS value for one frequency and one incidence/scatter
/// direction pair (all angles in degrees, frequency in GHz).
pub fn bistatic_rcs(
    freq_ghz: f64,
    incidence_az_deg: f64,
    incidence_el_deg: f64,
    scatter_az_deg: f64,
    scatter_el_deg: f64,
) -> f64 {
    let base = 10.0 + 5.0 * (freq_ghz * 12.0).to_radians().sin();
    let incidence_term = angular_gain(
        incidence_az_deg,
        incidence_el_deg,
        INCIDENCE_PREFERRED_AZ_DEG,
        INCIDENCE_LOBE_WIDTH_DEG,
    );
    let scatter_term = angular_gain(
        scatter_az_deg,
        scatter_el_deg,
        SCATTER_PREFERRED_AZ_DEG,
        SCATTER_LOBE_WIDTH_DEG,
    );
    let cross_coupling = 3.0
        * (incidence_az_deg - scatter_az_deg).to_radians().cos()
        * (incidence_el_deg - scatter_el_deg).to_radians().cos();

    base + incidence_term + scatter_term + cross_coupling
}

/// Evaluate the model over an azimuth/elevation grid at a fixed reference
/// frequency, treating each grid point as the scatter direction while the
/// incidence direction stays at the reference angles.
///
/// Row-major: `grid[elevation_index][azimuth_index]`.
pub fn direction_grid(
    freq_ghz: f64,
    azimuths_deg: &[f64],
    elevations_deg: &[f64],
    ref_incidence_az: f64,
    ref_incidence_el: f64,
    _ref_scatter_az: f64,
    _ref_scatter_el: f64,
) -> Vec<Vec<f64>> {
    elevations_deg
        .iter()
        .map(|&el| {
            azimuths_deg
                .iter()
                .map(|&az| bistatic_rcs(freq_ghz, ref_incidence_az, ref_incidence_el, az, el))
                .collect()
        })
        .collect()
}

// Gaussian lobe around a preferred azimuth, peaked at zero elevation.
fn angular_gain(az_deg: f64, el_deg: f64, preferred_az_deg: f64, width_deg: f64) -> f64 {
    let az_delta = normalize_angle_deg(az_deg - preferred_az_deg);
    let el_delta = normalize_angle_deg(el_deg);
    let az_factor = (-(az_delta / width_deg).powi(2)).exp();
    let el_factor = (-(el_delta / width_deg).powi(2)).exp();
    LOBE_PEAK_GAIN * az_factor * el_factor
}

/// Wrap any degree value into (-180, 180].
pub fn normalize_angle_deg(angle: f64) -> f64 {
    let a = angle % 360.0;
    if a > 180.0 {
        a - 360.0
    } else if a < -180.0 {
        a + 360.0
    } else {
        a
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn angle_wrap_cases() {
        assert_relative_eq!(normalize_angle_deg(370.0), 10.0, epsilon = 1e-12);
        assert_relative_eq!(normalize_angle_deg(-190.0), 170.0, epsilon = 1e-12);
        assert_relative_eq!(normalize_angle_deg(180.0), 180.0, epsilon = 1e-12);
        assert_relative_eq!(normalize_angle_deg(0.0), 0.0, epsilon = 1e-12);
        assert_relative_eq!(normalize_angle_deg(540.0), 180.0, epsilon = 1e-12);
    }

    #[test]
    fn gain_peaks_at_preferred_azimuth_and_zero_elevation() {
        assert_relative_eq!(angular_gain(35.0, 0.0, 35.0, 12.0), 12.0, epsilon = 1e-12);
        // Off-peak must be strictly below the maximum
        assert!(angular_gain(40.0, 0.0, 35.0, 12.0) < 12.0);
        assert!(angular_gain(35.0, 5.0, 35.0, 12.0) < 12.0);
    }

    #[test]
    fn gain_sees_azimuth_through_the_wrap() {
        // 395 deg is the same direction as 35 deg
        assert_relative_eq!(
            angular_gain(395.0, 0.0, 35.0, 12.0),
            angular_gain(35.0, 0.0, 35.0, 12.0),
            epsilon = 1e-12
        );
    }

    #[test]
    fn rcs_is_finite_and_bounded_over_a_coarse_scan() {
        for freq in [1.0, 8.0, 10.5, 35.0] {
            for az in [-180.0, -20.0, 0.0, 35.0, 180.0] {
                for el in [-60.0, 0.0, 60.0] {
                    let rcs = bistatic_rcs(freq, az, el, -az, -el);
                    assert!(rcs.is_finite());
                    // every term is bounded: 5 + 12 + 12 + 3 around the base of 10
                    assert!((-22.0..=42.0).contains(&rcs));
                }
            }
        }
    }

    #[test]
    fn grid_cell_matches_direct_evaluation() {
        let azimuths = [-10.0, 0.0, 10.0];
        let elevations = [-5.0, 0.0];
        let grid = direction_grid(10.0, &azimuths, &elevations, 35.0, 0.0, -20.0, 0.0);

        assert_eq!(grid.len(), elevations.len());
        for row in &grid {
            assert_eq!(row.len(), azimuths.len());
        }
        for (i, &el) in elevations.iter().enumerate() {
            for (j, &az) in azimuths.iter().enumerate() {
                assert_relative_eq!(
                    grid[i][j],
                    bistatic_rcs(10.0, 35.0, 0.0, az, el),
                    epsilon = 0.0
                );
            }
        }
    }
}
