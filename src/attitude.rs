use nalgebra::{Matrix3, Vector3};
use serde::Deserialize;

/// Body attitude as aircraft-style yaw/pitch/roll in degrees
/// (intrinsic Z-Y-X Euler sequence).
#[derive(Debug, Clone, Copy, Deserialize)]
#[serde(default)]
pub struct Attitude {
    pub yaw_deg: f64,
    pub pitch_deg: f64,
    pub roll_deg: f64,
}

impl Default for Attitude {
    fn default() -> Self {
        Self {
            yaw_deg: 0.0,
            pitch_deg: 0.0,
            roll_deg: 0.0,
        }
    }
}

impl Attitude {
    pub fn new(yaw_deg: f64, pitch_deg: f64, roll_deg: f64) -> Self {
        Self {
            yaw_deg,
            pitch_deg,
            roll_deg,
        }
    }

    /// Rotation matrix mapping body-frame axes into the geocentric frame,
    /// R = Rz(yaw) * Ry(pitch) * Rx(roll). Orthonormal for all finite angles.
    pub fn body_to_geocentric_matrix(&self) -> Matrix3<f64> {
        let yaw = self.yaw_deg.to_radians();
        let pitch = self.pitch_deg.to_radians();
        let roll = self.roll_deg.to_radians();

        let (sy, cy) = yaw.sin_cos();
        let (sp, cp) = pitch.sin_cos();
        let (sr, cr) = roll.sin_cos();

        #[rustfmt::skip]
        let rz = Matrix3::new(
            cy, -sy, 0.0,
            sy,  cy, 0.0,
            0.0, 0.0, 1.0,
        );
        #[rustfmt::skip]
        let ry = Matrix3::new(
            cp,  0.0, sp,
            0.0, 1.0, 0.0,
            -sp, 0.0, cp,
        );
        #[rustfmt::skip]
        let rx = Matrix3::new(
            1.0, 0.0, 0.0,
            0.0, cr, -sr,
            0.0, sr,  cr,
        );

        rz * ry * rx
    }

    /// Inverse rotation (geocentric frame into body frame). The transpose,
    /// since the matrix is orthonormal.
    pub fn geocentric_to_body_matrix(&self) -> Matrix3<f64> {
        self.body_to_geocentric_matrix().transpose()
    }

    /// Express a geocentric-frame vector in the body frame.
    pub fn geocentric_to_body(&self, v: &Vector3<f64>) -> Vector3<f64> {
        self.geocentric_to_body_matrix() * v
    }
}
