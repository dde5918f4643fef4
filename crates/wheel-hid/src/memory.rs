//! An in-memory [`VirtualDevice`] double: records every write instead of
//! talking to real hardware. Used by the mapping host's own tests and
//! available to application test suites.

use std::collections::HashMap;

use crate::device::{StandardAxis, VirtualDevice};
use crate::HidResult;

#[derive(Default)]
pub struct MemoryDevice {
    pub axes: HashMap<StandardAxis, i32>,
    pub buttons: HashMap<u32, bool>,
}

impl MemoryDevice {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn axis(&self, axis: StandardAxis) -> i32 {
        self.axes.get(&axis).copied().unwrap_or(0)
    }

    pub fn button(&self, button_id: u32) -> bool {
        self.buttons.get(&button_id).copied().unwrap_or(false)
    }
}

impl VirtualDevice for MemoryDevice {
    fn set_axis(&mut self, axis: StandardAxis, raw_value: i32) -> HidResult<()> {
        self.axes.insert(axis, raw_value);
        Ok(())
    }

    fn set_button(&mut self, button_id: u32, active: bool) -> HidResult<()> {
        self.buttons.insert(button_id, active);
        Ok(())
    }
}
