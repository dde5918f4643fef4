//! `VrRuntime` — the external collaborator this crate consumes.
//!
//! An application wires a concrete implementation (an OpenVR binding, a
//! replay-from-file harness for tests, …) and hands it to
//! [`crate::VrStateSource::new`]. This crate never talks to a specific VR
//! runtime directly; it only relies on this trait, named per spec.md §6's
//! "VR runtime consumed capability list".

use std::collections::HashMap;

use wheel_core::{ControllerRawState, ControllerRole, DeviceClass, DeviceIndex, DevicePoseState};

use crate::VrResult;

/// A single button edge reported by the runtime's event queue.
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
pub enum VrEventKind {
    ButtonTouch,
    ButtonUntouch,
    ButtonPress,
    ButtonUnpress,
}

#[derive(Copy, Clone, Debug)]
pub struct VrEvent {
    pub device: DeviceIndex,
    pub button_id: u32,
    pub kind: VrEventKind,
}

/// The capabilities the VR State Source needs from the underlying VR
/// runtime. Implementations own the connection to the actual hardware SDK.
pub trait VrRuntime {
    /// Upper bound on tracked device indices the runtime will ever report
    /// (OpenVR's `k_unMaxTrackedDeviceCount`, for instance).
    fn max_tracked_devices(&self) -> u32;

    /// The broad class of device at this index, if the runtime currently
    /// recognizes one there.
    fn device_class(&self, device: DeviceIndex) -> Option<DeviceClass>;

    /// Which hand (if any) this device is assigned to. Only meaningful for
    /// `DeviceClass::Controller`; runtimes should return `ControllerRole::Unknown`
    /// for everything else.
    fn controller_role(&self, device: DeviceIndex) -> Option<ControllerRole>;

    /// Drain and return every button edge event queued since the last call.
    fn poll_events(&mut self) -> Vec<VrEvent>;

    /// Fetch the current pose/velocity for every currently tracked device.
    fn device_poses(&mut self) -> HashMap<DeviceIndex, DevicePoseState>;

    /// Fetch the current raw analog state for a controller, if tracked.
    fn controller_state(&mut self, device: DeviceIndex) -> Option<ControllerRawState>;

    /// Fire a haptic pulse on the given device's given axis for
    /// `duration_us` microseconds. Non-blocking; the runtime queues it.
    fn trigger_haptic_pulse(&mut self, device: DeviceIndex, axis_id: u32, duration_us: u16) -> VrResult<()>;
}
