//! A stand-in [`VrRuntime`]. `wheel-vr` names the runtime trait but never
//! implements it: spec.md treats the real VR runtime as an external
//! collaborator with a named interface only (§1, §6). Wiring an actual
//! OpenVR/SteamVR binding is an application-level integration, not part of
//! this engine — `StubRuntime` is the documented seam where that binding
//! would plug in, reporting the three devices `build_wheel_mapping` expects
//! with neutral poses and no input activity so the mapping can be
//! constructed and ticked end-to-end without real hardware.

use std::collections::HashMap;

use wheel_core::{ControllerRawState, ControllerRole, DeviceClass, DeviceIndex, DevicePoseState};
use wheel_vr::runtime::{VrEvent, VrRuntime};
use wheel_vr::VrResult;

pub const HMD: DeviceIndex = DeviceIndex(0);
pub const LEFT_CONTROLLER: DeviceIndex = DeviceIndex(1);
pub const RIGHT_CONTROLLER: DeviceIndex = DeviceIndex(2);

pub struct StubRuntime {
    devices: HashMap<DeviceIndex, (DeviceClass, ControllerRole)>,
}

impl StubRuntime {
    pub fn new() -> Self {
        let mut devices = HashMap::new();
        devices.insert(HMD, (DeviceClass::Hmd, ControllerRole::Unknown));
        devices.insert(LEFT_CONTROLLER, (DeviceClass::Controller, ControllerRole::LeftHand));
        devices.insert(RIGHT_CONTROLLER, (DeviceClass::Controller, ControllerRole::RightHand));
        Self { devices }
    }
}

impl VrRuntime for StubRuntime {
    fn max_tracked_devices(&self) -> u32 {
        64
    }

    fn device_class(&self, device: DeviceIndex) -> Option<DeviceClass> {
        self.devices.get(&device).map(|(class, _)| *class)
    }

    fn controller_role(&self, device: DeviceIndex) -> Option<ControllerRole> {
        self.devices.get(&device).map(|(_, role)| *role)
    }

    fn poll_events(&mut self) -> Vec<VrEvent> {
        Vec::new()
    }

    fn device_poses(&mut self) -> HashMap<DeviceIndex, DevicePoseState> {
        self.devices
            .keys()
            .map(|&device| (device, DevicePoseState { pose_is_valid: true, ..Default::default() }))
            .collect()
    }

    fn controller_state(&mut self, device: DeviceIndex) -> Option<ControllerRawState> {
        self.devices.get(&device).map(|_| ControllerRawState::default())
    }

    fn trigger_haptic_pulse(&mut self, _device: DeviceIndex, _axis_id: u32, _duration_us: u16) -> VrResult<()> {
        Ok(())
    }
}
