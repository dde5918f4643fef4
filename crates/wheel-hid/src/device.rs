//! `VirtualDevice` — the external collaborator the Mapping Host writes to
//! every tick. Named per spec.md §6's "Virtual HID device consumed ops".

use crate::HidResult;

/// Fixed-point scale a `[-1.0, 1.0]` axis value is converted to before being
/// written to the device, matching `ControllerMapping.AXIS_PRECISION` in
/// the original source.
pub const AXIS_PRECISION: i32 = 0x8000;

/// The standard axis identifiers a virtual joystick/gamepad device exposes.
/// Matches vJoy's conventional axis slots (X, Y, Z, RX, RY, RZ, two sliders).
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug)]
pub enum StandardAxis {
    X,
    Y,
    Z,
    Rx,
    Ry,
    Rz,
    Slider0,
    Slider1,
}

/// A virtual HID joystick/gamepad the Mapping Host writes axis and button
/// values to every tick.
pub trait VirtualDevice {
    /// Set axis `axis` to `raw_value`, already scaled by [`AXIS_PRECISION`].
    fn set_axis(&mut self, axis: StandardAxis, raw_value: i32) -> HidResult<()>;

    /// Set digital button `button_id` active/inactive.
    fn set_button(&mut self, button_id: u32, active: bool) -> HidResult<()>;
}

/// Scale a node's `[-1.0, 1.0]` axis output to the device's fixed-point
/// range, matching `int(axis_node.current_value * AXIS_PRECISION)`.
#[inline]
pub fn scale_axis_value(value: f64) -> i32 {
    (value * AXIS_PRECISION as f64) as i32
}
