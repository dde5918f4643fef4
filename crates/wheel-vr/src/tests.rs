//! Unit tests for the VR State Source, against an in-memory fake runtime.

use std::cell::RefCell;
use std::collections::HashMap;
use std::time::Duration;

use wheel_core::{ControllerRawState, ControllerRole, DeviceClass, DeviceIndex, DevicePoseState};

use crate::runtime::{VrEvent, VrEventKind, VrRuntime};
use crate::source::{DeviceWaitPolicy, VrStateSource};
use crate::VrError;

struct FakeRuntime {
    devices: HashMap<DeviceIndex, (DeviceClass, ControllerRole)>,
    poses: HashMap<DeviceIndex, DevicePoseState>,
    pending_events: RefCell<Vec<VrEvent>>,
}

impl FakeRuntime {
    fn new() -> Self {
        Self { devices: HashMap::new(), poses: HashMap::new(), pending_events: RefCell::new(Vec::new()) }
    }

    fn with_device(mut self, idx: u32, class: DeviceClass, role: ControllerRole) -> Self {
        self.devices.insert(DeviceIndex(idx), (class, role));
        self.poses.insert(DeviceIndex(idx), DevicePoseState { pose_is_valid: true, ..Default::default() });
        self
    }

    fn queue(&self, event: VrEvent) {
        self.pending_events.borrow_mut().push(event);
    }
}

impl VrRuntime for FakeRuntime {
    fn max_tracked_devices(&self) -> u32 {
        16
    }

    fn device_class(&self, device: DeviceIndex) -> Option<DeviceClass> {
        self.devices.get(&device).map(|(c, _)| *c)
    }

    fn controller_role(&self, device: DeviceIndex) -> Option<ControllerRole> {
        self.devices.get(&device).map(|(_, r)| *r)
    }

    fn poll_events(&mut self) -> Vec<VrEvent> {
        self.pending_events.borrow_mut().drain(..).collect()
    }

    fn device_poses(&mut self) -> HashMap<DeviceIndex, DevicePoseState> {
        self.poses.clone()
    }

    fn controller_state(&mut self, device: DeviceIndex) -> Option<ControllerRawState> {
        self.devices.get(&device).map(|_| ControllerRawState::default())
    }

    fn trigger_haptic_pulse(&mut self, _device: DeviceIndex, _axis_id: u32, _duration_us: u16) -> crate::VrResult<()> {
        Ok(())
    }
}

#[test]
fn device_id_for_type_resolves_known_device() {
    let runtime = FakeRuntime::new().with_device(3, DeviceClass::Controller, ControllerRole::RightHand);
    let source = VrStateSource::new(Box::new(runtime));
    let id = source.device_id_for_type(DeviceClass::Controller, ControllerRole::RightHand).unwrap();
    assert_eq!(id, DeviceIndex(3));
}

#[test]
fn wait_for_required_devices_returns_immediately_when_present() {
    let runtime = FakeRuntime::new().with_device(0, DeviceClass::Hmd, ControllerRole::Unknown);
    let mut source = VrStateSource::new(Box::new(runtime));
    let policy = DeviceWaitPolicy { poll_interval: Duration::from_millis(1), timeout: Duration::from_millis(50) };
    source.wait_for_required_devices(&[(DeviceClass::Hmd, ControllerRole::Unknown)], policy).unwrap();
}

#[test]
fn wait_for_required_devices_times_out_when_absent() {
    let runtime = FakeRuntime::new();
    let mut source = VrStateSource::new(Box::new(runtime));
    let policy = DeviceWaitPolicy { poll_interval: Duration::from_millis(1), timeout: Duration::from_millis(10) };
    let err = source
        .wait_for_required_devices(&[(DeviceClass::Controller, ControllerRole::LeftHand)], policy)
        .unwrap_err();
    assert!(matches!(err, VrError::Core(wheel_core::WheelError::DeviceWaitTimeout(_))));
}

#[test]
fn sticky_press_state_survives_until_unpress_event() {
    let runtime = FakeRuntime::new().with_device(0, DeviceClass::Controller, ControllerRole::LeftHand);
    let device = DeviceIndex(0);
    runtime.queue(VrEvent { device, button_id: 7, kind: VrEventKind::ButtonPress });

    let mut source = VrStateSource::new(Box::new(runtime));
    let pkg = source.poll_tick();
    assert!(pkg.button_state[&device].pressed.contains(&7));

    let pkg2 = source.poll_tick();
    assert!(pkg2.button_state[&device].pressed.contains(&7), "press is sticky without an unpress event");
}
