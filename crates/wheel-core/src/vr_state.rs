//! The per-tick snapshot produced by the VR State Source, and the
//! per-device view extracted from it.

use std::collections::{HashMap, HashSet};
use std::rc::Rc;

use crate::geometry::{Axis2, Pose3x4, Vec3};
use crate::ids::DeviceIndex;

/// The raw analog inputs a controller reports, indexed by OpenVR's
/// `rAxis[0..5]` slots (trigger, trackpad/thumbstick, and up to three more
/// depending on the controller model).
#[derive(Copy, Clone, Debug, Default)]
pub struct ControllerRawState {
    pub raxis: [Axis2; 5],
}

/// A device's pose and derived motion for the current tick.
#[derive(Copy, Clone, Debug, Default)]
pub struct DevicePoseState {
    pub pose: Pose3x4,
    pub velocity: Vec3,
    pub angular_velocity: Vec3,
    /// Whether the runtime reports this pose as currently valid (device
    /// tracking, not asleep or out of view of base stations).
    pub pose_is_valid: bool,
}

/// Which digital button ids are currently pressed/touched on a device.
/// Wrapped in `Rc` because the VR State Source owns the canonical per-tick
/// sets and every `DeviceView` extracted from the same snapshot shares them
/// rather than cloning.
#[derive(Clone, Debug, Default)]
pub struct DeviceButtonState {
    pub pressed: Rc<HashSet<u32>>,
    pub touched: Rc<HashSet<u32>>,
}

/// One full tick's worth of VR runtime state: every currently tracked
/// device's pose and, for controllers, raw analog and digital state.
#[derive(Clone, Debug, Default)]
pub struct VrStatePackage {
    pub poses: HashMap<DeviceIndex, DevicePoseState>,
    pub controller_state: HashMap<DeviceIndex, ControllerRawState>,
    pub button_state: HashMap<DeviceIndex, DeviceButtonState>,
}

/// The per-device slice of a [`VrStatePackage`] that leaf axis/button nodes
/// actually read. Produced by a `DeviceView` node so that N mapping entries
/// referencing the same device share one extraction per tick instead of
/// each re-deriving it from the full package.
#[derive(Clone, Debug, Default)]
pub struct DeviceSnapshot {
    pub device: DeviceIndex,
    pub pose: DevicePoseState,
    pub controller: ControllerRawState,
    pub buttons: DeviceButtonState,
}

impl VrStatePackage {
    /// Extract the per-device view for `device`. Devices absent from the
    /// package (not currently tracked) yield an all-default snapshot with
    /// `pose.pose_is_valid == false`.
    pub fn device_snapshot(&self, device: DeviceIndex) -> DeviceSnapshot {
        DeviceSnapshot {
            device,
            pose: self.poses.get(&device).copied().unwrap_or_default(),
            controller: self.controller_state.get(&device).copied().unwrap_or_default(),
            buttons: self.button_state.get(&device).cloned().unwrap_or_default(),
        }
    }
}
