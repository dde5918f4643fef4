//! `MappingConfig` — the Mapping Host's equivalent of `dt_core::SimConfig`:
//! a small, all-`pub`-field, plain-data struct an application crate could
//! serialize if it ever needed to, even though spec.md's Non-goals exclude
//! persisting mappings to disk.

use wheel_core::{ControllerRole, DeviceClass};
use wheel_vr::DeviceWaitPolicy;

/// Top-level Mapping Host configuration.
#[derive(Clone, Debug)]
pub struct MappingConfig {
    /// Target ticks per second. Spec default: 30.
    pub tick_hz: f64,

    /// Poll interval / timeout for `wait_for_required_devices`.
    /// Spec default: 5 s / 120 s.
    pub device_wait: DeviceWaitPolicy,

    /// `(class, role)` pairs the mapping cannot run without. The host
    /// blocks on these (§4.1) before entering the tick loop.
    pub required_devices: Vec<(DeviceClass, ControllerRole)>,
}

impl Default for MappingConfig {
    fn default() -> Self {
        Self {
            tick_hz: 30.0,
            device_wait: DeviceWaitPolicy::default(),
            required_devices: Vec::new(),
        }
    }
}

impl MappingConfig {
    pub fn new(tick_hz: f64) -> Self {
        Self { tick_hz, ..Self::default() }
    }

    pub fn require(mut self, class: DeviceClass, role: ControllerRole) -> Self {
        self.required_devices.push((class, role));
        self
    }
}
