//! `(device class, controller role) -> device index` lookup, rebuilt by
//! scanning every tracked device slot. Mirrors
//! `VrSystemState.device_indexes` / `load_devices_by_index` from the
//! original Python source.

use std::collections::HashMap;

use wheel_core::{ControllerRole, DeviceClass, DeviceIndex, WheelError, WheelResult};

use crate::runtime::VrRuntime;

#[derive(Default)]
pub struct DeviceIndexTable {
    by_class_role: HashMap<(DeviceClass, ControllerRole), DeviceIndex>,
}

impl DeviceIndexTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Rebuild the table by scanning every device slot `0..max_tracked_devices`.
    /// Later slots win if two devices somehow share a (class, role) pair —
    /// matches the Python source's plain dict-overwrite semantics.
    pub fn rebuild(&mut self, runtime: &dyn VrRuntime) {
        self.by_class_role.clear();
        for i in 0..runtime.max_tracked_devices() {
            let device = DeviceIndex(i);
            let Some(class) = runtime.device_class(device) else { continue };
            let role = runtime.controller_role(device).unwrap_or(ControllerRole::Unknown);
            self.by_class_role.insert((class, role), device);
        }
    }

    pub fn device_for(&self, class: DeviceClass, role: ControllerRole) -> WheelResult<DeviceIndex> {
        self.by_class_role
            .get(&(class, role))
            .copied()
            .ok_or(WheelError::NoSuchDevice { class, role })
    }

    pub fn is_present(&self, class: DeviceClass, role: ControllerRole) -> bool {
        self.by_class_role.contains_key(&(class, role))
    }
}
