//! Minimal pose/vector types. This engine only ever reads translation and
//! orientation components out of a device pose — it never needs a full
//! linear-algebra stack, so there is no dependency on a matrix/quaternion
//! crate.

/// A 3D vector (position, velocity, or angular velocity).
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct Vec3 {
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

impl Vec3 {
    pub const ZERO: Vec3 = Vec3 { x: 0.0, y: 0.0, z: 0.0 };

    pub fn new(x: f64, y: f64, z: f64) -> Self {
        Self { x, y, z }
    }

    /// Index by component: 0=x, 1=y, 2=z. Panics on out-of-range, matching
    /// the node constructors which validate the component index up front.
    #[inline]
    pub fn get(&self, component: usize) -> f64 {
        match component {
            0 => self.x,
            1 => self.y,
            2 => self.z,
            _ => panic!("Vec3 component index out of range: {component}"),
        }
    }
}

/// A device pose as a 3-row-by-4-column affine matrix: the left 3x3 block is
/// orientation, the rightmost column is translation. This mirrors the
/// `HmdMatrix34_t` layout OpenVR hands back from `TrackedDevicePose_t`.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Pose3x4 {
    pub m: [[f64; 4]; 3],
}

impl Default for Pose3x4 {
    fn default() -> Self {
        Self::IDENTITY
    }
}

impl Pose3x4 {
    pub const IDENTITY: Pose3x4 = Pose3x4 {
        m: [[1.0, 0.0, 0.0, 0.0], [0.0, 1.0, 0.0, 0.0], [0.0, 0.0, 1.0, 0.0]],
    };

    /// Translation component (the rightmost column).
    #[inline]
    pub fn translation(&self) -> Vec3 {
        Vec3::new(self.m[0][3], self.m[1][3], self.m[2][3])
    }

    /// Yaw, pitch, and roll in radians, decomposed from the orientation
    /// block the same way `steam_vr_wheel`'s `YawAxis`/`PitchAxis`/`RollAxis`
    /// do it directly off the raw matrix entries.
    pub fn euler_ypr(&self) -> (f64, f64, f64) {
        let m = &self.m;
        let yaw = -m[2][0].asin();
        let pitch = m[2][1].atan2(m[2][2]);
        let roll = m[1][0].atan2(m[0][0]);
        (yaw, pitch, roll)
    }
}

/// A single 2-axis analog input (trigger/trackpad/joystick), as reported by
/// OpenVR's `VRControllerAxis_t`.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct Axis2 {
    pub x: f64,
    pub y: f64,
}
