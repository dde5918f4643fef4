//! End-to-end tests for the Mapping Host against an in-memory fake VR
//! runtime and `wheel_hid::MemoryDevice`. Mirrors the fake-runtime pattern
//! in `wheel-vr/src/tests.rs`.

use std::cell::RefCell;
use std::collections::HashMap;
use std::time::Duration;

use wheel_core::{ButtonEvent, ControllerRawState, ControllerRole, DeviceClass, DeviceIndex, DevicePoseState};
use wheel_hid::{MemoryDevice, StandardAxis};
use wheel_vr::runtime::{VrEvent, VrEventKind, VrRuntime};
use wheel_vr::DeviceWaitPolicy;

use crate::{MappingConfig, MappingHostBuilder, NoopObserver};

struct FakeRuntime {
    devices: HashMap<DeviceIndex, (DeviceClass, ControllerRole)>,
    poses: HashMap<DeviceIndex, DevicePoseState>,
    pending_events: RefCell<Vec<VrEvent>>,
}

impl FakeRuntime {
    fn new() -> Self {
        Self { devices: HashMap::new(), poses: HashMap::new(), pending_events: RefCell::new(Vec::new()) }
    }

    fn with_device(mut self, idx: u32, class: DeviceClass, role: ControllerRole, pose: DevicePoseState) -> Self {
        self.devices.insert(DeviceIndex(idx), (class, role));
        self.poses.insert(DeviceIndex(idx), pose);
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

    fn trigger_haptic_pulse(&mut self, _device: DeviceIndex, _axis_id: u32, _duration_us: u16) -> wheel_vr::VrResult<()> {
        Ok(())
    }
}

fn fast_config() -> MappingConfig {
    MappingConfig {
        tick_hz: 1000.0,
        device_wait: DeviceWaitPolicy { poll_interval: Duration::from_millis(1), timeout: Duration::from_millis(50) },
        required_devices: vec![(DeviceClass::Hmd, ControllerRole::Unknown)],
    }
}

#[test]
fn host_publishes_translation_axis_and_direct_button() {
    let runtime = FakeRuntime::new().with_device(
        0,
        DeviceClass::Hmd,
        ControllerRole::Unknown,
        DevicePoseState { pose_is_valid: true, ..Default::default() },
    );
    let hmd = DeviceIndex(0);
    runtime.queue(VrEvent { device: hmd, button_id: 1, kind: VrEventKind::ButtonPress });

    let mut builder = MappingHostBuilder::new(Box::new(runtime), MemoryDevice::new(), fast_config());
    let source = wheel_node::vr_source(builder.cache(), builder.source());
    let hmd_view = wheel_node::device_view(builder.cache(), &source, hmd);
    let x = wheel_node::translation_axis(builder.cache(), &hmd_view, 0);
    let scaled = wheel_node::scale_axis(builder.cache(), &x, 1.0, 0.0, 0.5);
    let button = wheel_node::direct_button(builder.cache(), &hmd_view, 1, ButtonEvent::Press);

    let mut host = builder.axis(StandardAxis::X, scaled).button(1, button).build(&mut NoopObserver).unwrap();

    assert_eq!(host.node_count(), 5);
    host.run_ticks(1, &mut NoopObserver).unwrap();

    // translation.x == 0.0 (default pose) scaled by out_zero 0.5 -> 0.5, then
    // clamped to [0,1] and scaled by AXIS_PRECISION.
    let expected = wheel_hid::scale_axis_value(0.5);
    assert_eq!(host.device().axis(StandardAxis::X), expected);
    assert!(host.device().button(1), "button 1 pressed on the runtime's queued event");
}

#[test]
fn device_wait_times_out_when_required_device_absent() {
    let runtime = FakeRuntime::new();
    let mut builder = MappingHostBuilder::new(Box::new(runtime), MemoryDevice::new(), fast_config());
    let always_on = wheel_node::always_on_button(builder.cache());
    let err = builder.button(1, always_on).build(&mut NoopObserver).unwrap_err();
    assert!(matches!(err, crate::MappingError::Vr(_)));
}

#[test]
fn build_rejects_mapping_with_no_bindings() {
    let runtime =
        FakeRuntime::new().with_device(0, DeviceClass::Hmd, ControllerRole::Unknown, DevicePoseState::default());
    let builder = MappingHostBuilder::new(Box::new(runtime), MemoryDevice::new(), fast_config());
    let err = builder.build(&mut NoopObserver).unwrap_err();
    assert!(matches!(err, crate::MappingError::Config(_)));
}
