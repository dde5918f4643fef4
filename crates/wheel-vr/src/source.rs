//! `VrStateSource` — the root of every node graph. Wraps a [`VrRuntime`],
//! accumulates sticky press/touch state from its event queue, and produces
//! one [`VrStatePackage`] per tick.

use std::collections::{HashMap, HashSet};
use std::rc::Rc;
use std::time::{Duration, Instant};

use tracing::{debug, info};

use wheel_core::{
    ControllerRole, DeviceButtonState, DeviceClass, DeviceIndex, VrStatePackage, WheelError,
};

use crate::device_index::DeviceIndexTable;
use crate::runtime::{VrEventKind, VrRuntime};
use crate::{VrError, VrResult};

/// Poll cadence and timeout for [`VrStateSource::wait_for_required_devices`].
/// Defaults match spec.md §4.1 (5 s poll / 120 s timeout).
#[derive(Copy, Clone, Debug)]
pub struct DeviceWaitPolicy {
    pub poll_interval: Duration,
    pub timeout: Duration,
}

impl Default for DeviceWaitPolicy {
    fn default() -> Self {
        Self { poll_interval: Duration::from_secs(5), timeout: Duration::from_secs(120) }
    }
}

pub struct VrStateSource {
    runtime: Box<dyn VrRuntime>,
    index: DeviceIndexTable,
    pressed: HashMap<DeviceIndex, Rc<HashSet<u32>>>,
    touched: HashMap<DeviceIndex, Rc<HashSet<u32>>>,
}

impl VrStateSource {
    pub fn new(runtime: Box<dyn VrRuntime>) -> Self {
        let mut index = DeviceIndexTable::new();
        index.rebuild(runtime.as_ref());
        Self { runtime, index, pressed: HashMap::new(), touched: HashMap::new() }
    }

    /// Resolve a (class, role) pair to a device index via the current
    /// index table (no rescan — call `rebuild_index` first if devices may
    /// have changed since construction).
    pub fn device_id_for_type(&self, class: DeviceClass, role: ControllerRole) -> VrResult<DeviceIndex> {
        self.index.device_for(class, role).map_err(VrError::Core)
    }

    /// Rescan all device slots. Called once at construction and again on
    /// every `wait_for_required_devices` poll, matching
    /// `load_devices_by_index` in the original source.
    pub fn rebuild_index(&mut self) {
        self.index.rebuild(self.runtime.as_ref());
    }

    /// Block (via `std::thread::sleep`) until every `(class, role)` in
    /// `required` resolves to a device, or `policy.timeout` elapses.
    ///
    /// This is the engine's single sanctioned blocking point outside the
    /// per-tick pacing sleep (spec.md §5).
    pub fn wait_for_required_devices(
        &mut self,
        required: &[(DeviceClass, ControllerRole)],
        policy: DeviceWaitPolicy,
    ) -> VrResult<()> {
        let started = Instant::now();
        loop {
            let missing: Vec<_> = required
                .iter()
                .copied()
                .filter(|&(class, role)| !self.index.is_present(class, role))
                .collect();

            if missing.is_empty() {
                return Ok(());
            }

            if started.elapsed() >= policy.timeout {
                return Err(VrError::Core(WheelError::DeviceWaitTimeout(policy.timeout)));
            }

            info!(?missing, "waiting for required VR device(s)");
            debug!(poll_interval = ?policy.poll_interval, "sleeping before next device poll");
            std::thread::sleep(policy.poll_interval);
            self.rebuild_index();
        }
    }

    /// Drain pending events into the sticky press/touch maps, fetch fresh
    /// poses and controller state, and assemble this tick's package.
    pub fn poll_tick(&mut self) -> VrStatePackage {
        for event in self.runtime.poll_events() {
            let set = match event.kind {
                VrEventKind::ButtonPress | VrEventKind::ButtonUnpress => &mut self.pressed,
                VrEventKind::ButtonTouch | VrEventKind::ButtonUntouch => &mut self.touched,
            };
            let is_set = matches!(event.kind, VrEventKind::ButtonPress | VrEventKind::ButtonTouch);

            let current = set.entry(event.device).or_insert_with(|| Rc::new(HashSet::new()));
            let mut next = (**current).clone();
            if is_set {
                next.insert(event.button_id);
            } else {
                next.remove(&event.button_id);
            }
            *current = Rc::new(next);
        }

        let poses = self.runtime.device_poses();
        let mut controller_state = HashMap::new();
        let mut button_state = HashMap::new();

        for &device in poses.keys() {
            if let Some(raw) = self.runtime.controller_state(device) {
                controller_state.insert(device, raw);
            }
            button_state.insert(
                device,
                DeviceButtonState {
                    pressed: self.pressed.get(&device).cloned().unwrap_or_default(),
                    touched: self.touched.get(&device).cloned().unwrap_or_default(),
                },
            );
        }

        VrStatePackage { poses, controller_state, button_state }
    }

    /// Fire a haptic pulse, for the `HapticPulseTrigger` node.
    pub fn trigger_haptic_pulse(&mut self, device: DeviceIndex, axis_id: u32, duration_us: u16) -> VrResult<()> {
        self.runtime.trigger_haptic_pulse(device, axis_id, duration_us).map_err(VrError::Core)
    }
}
