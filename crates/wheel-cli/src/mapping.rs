//! A concrete steering-wheel mapping, grounded on
//! `steam_vr_wheel/mappings/wheel_mapping.py`: the left/right controllers
//! and the HMD combine into a wheel-steering axis, throttle/brake come from
//! each controller's trigger, and triple-clicking both grips toggles
//! whether steering is tracked and fires a haptic pulse on each hand.

use std::f64::consts::PI;

use wheel_core::{ButtonEvent, Comparator, ControllerRole, DeviceClass};
use wheel_hid::{StandardAxis, VirtualDevice};
use wheel_node::{AxisComponent, NodeResult};

use wheel_mapping::MappingHostBuilder;

/// OpenVR's `k_EButton_Grip`, the grip button id the triple-click gesture
/// below reads on both controllers.
const GRIP_BUTTON_ID: u32 = 2;
/// OpenVR's `k_EButton_SteamVR_Trigger`, read as an analog axis rather than
/// a digital button for throttle/brake.
const TRIGGER_AXIS_INDEX: usize = 1;
/// `k_EButton_SteamVR_Touchpad` thumbstick/trackpad slot.
const THUMBSTICK_AXIS_INDEX: usize = 0;

/// Scales a `[-pi, pi]` angle down to roughly `[-1, 1]`, matching
/// `steam_vr_wheel`'s `ATAN_AXIS_SCALAR`-derived rotation scaling.
const HALF_CIRCLE_ROTATION_SCALAR: f64 = 2.0 / PI;

/// Deadzone applied to HMD roll/pitch before they steer anything, so small
/// head wobble doesn't bleed into the Z/RX axes.
const HMD_DEADZONE_RADIANS: f64 = PI / 10.0;

// Output ids on the virtual device. These live in their own namespace from
// the VR runtime's raw OpenVR button ids above.
const OUTPUT_GRIPS_BUTTON_ID: u32 = 1;
const OUTPUT_LEFT_LEAN_BUTTON_ID: u32 = 2;
const OUTPUT_RIGHT_LEAN_BUTTON_ID: u32 = 3;

/// Wire the sample mapping's axis and button bindings onto `builder`.
/// Resolves the left/right controllers and the HMD by class and role via
/// the builder's VR State Source (`ControllerStateByType`). Callers must
/// have already run `builder.wait_for_required_devices` — this function
/// fails fast if a device isn't present yet, so polling for it belongs in
/// the wait step, not here.
pub fn wire_steering_wheel<D: VirtualDevice>(
    mut builder: MappingHostBuilder<D>,
) -> NodeResult<MappingHostBuilder<D>> {
    let vr_handle = builder.source();
    let source = wheel_node::vr_source(builder.cache(), vr_handle.clone());
    let hmd_view = wheel_node::device_view_for_type(builder.cache(), &source, &vr_handle, DeviceClass::Hmd, ControllerRole::Unknown)?;
    let left_view =
        wheel_node::device_view_for_type(builder.cache(), &source, &vr_handle, DeviceClass::Controller, ControllerRole::LeftHand)?;
    let right_view =
        wheel_node::device_view_for_type(builder.cache(), &source, &vr_handle, DeviceClass::Controller, ControllerRole::RightHand)?;

    let left = vr_handle.borrow().device_id_for_type(DeviceClass::Controller, ControllerRole::LeftHand)?;
    let right = vr_handle.borrow().device_id_for_type(DeviceClass::Controller, ControllerRole::RightHand)?;

    let cache = builder.cache();

    // X/Y: left thumbstick, halved.
    let stick_x = wheel_node::controller_axis(cache, &left_view, THUMBSTICK_AXIS_INDEX, AxisComponent::X);
    let stick_y = wheel_node::controller_axis(cache, &left_view, THUMBSTICK_AXIS_INDEX, AxisComponent::Y);
    let x_axis = wheel_node::scale_axis(cache, &stick_x, 0.5, 0.0, 0.5);
    let y_axis = wheel_node::scale_axis(cache, &stick_y, 0.5, 0.0, 0.5);

    // Z/RX: HMD roll/pitch, deadzoned then scaled.
    let hmd_roll = wheel_node::roll_axis(cache, &hmd_view);
    let hmd_roll_dz = wheel_node::deadzone_axis(cache, &hmd_roll, HMD_DEADZONE_RADIANS);
    let z_axis = wheel_node::scale_axis(cache, &hmd_roll_dz, HALF_CIRCLE_ROTATION_SCALAR, 0.0, 0.5);

    let hmd_pitch = wheel_node::pitch_axis(cache, &hmd_view);
    let hmd_pitch_dz = wheel_node::deadzone_axis(cache, &hmd_pitch, HMD_DEADZONE_RADIANS);
    let rx_axis = wheel_node::scale_axis(cache, &hmd_pitch_dz, HALF_CIRCLE_ROTATION_SCALAR, 0.0, 0.5);

    // RZ: the wheel-steering axis, gated by a triple-click-both-grips toggle.
    let left_grip = wheel_node::direct_button(cache, &left_view, GRIP_BUTTON_ID, ButtonEvent::Press);
    let right_grip = wheel_node::direct_button(cache, &right_view, GRIP_BUTTON_ID, ButtonEvent::Press);
    let both_grips = wheel_node::and_button(cache, &left_grip, &right_grip);
    let triple_click = wheel_node::multi_click_button(cache, &both_grips, 0.5, 3);
    let steering_disabled = wheel_node::toggle_button(cache, &triple_click);
    let steering_enabled = wheel_node::not_button(cache, &steering_disabled);

    let wheel = wheel_node::wheel_axis(cache, &left_view, &right_view);
    let steering_raw = wheel_node::difference_axis(cache, &wheel, &hmd_roll);
    let steering_scaled = wheel_node::scale_axis(cache, &steering_raw, HALF_CIRCLE_ROTATION_SCALAR, 0.0, 0.5);
    let rz_axis = wheel_node::gated_axis(cache, &steering_enabled, &steering_scaled, 0.5);

    // Slider0/Slider1: each controller's trigger, as throttle and brake.
    let left_trigger = wheel_node::controller_axis(cache, &left_view, TRIGGER_AXIS_INDEX, AxisComponent::X);
    let right_trigger = wheel_node::controller_axis(cache, &right_view, TRIGGER_AXIS_INDEX, AxisComponent::X);

    // Buttons: the grip toggle itself, plus a "lean forward" gesture per
    // hand comparing controller pitch against HMD pitch, matching
    // `sticky_forward_tilt` in the original mapping. Both thresholds are
    // ANDed with that hand's grip so the gesture can't latch on, or stay
    // latched, once grip is released, regardless of pitch.
    let left_pitch = wheel_node::pitch_axis(cache, &left_view);
    let left_lean = wheel_node::difference_axis(cache, &left_pitch, &hmd_pitch);
    let left_lean_engage_raw = wheel_node::axis_threshold_button(cache, &left_lean, -0.8, Comparator::LessThan);
    let left_lean_release_raw = wheel_node::axis_threshold_button(cache, &left_lean, -0.4, Comparator::GreaterThan);
    let left_lean_engage = wheel_node::and_button(cache, &left_lean_engage_raw, &left_grip);
    let left_lean_release = wheel_node::and_button(cache, &left_lean_release_raw, &left_grip);
    let left_lean_forward = wheel_node::sticky_pair_button(cache, &left_lean_engage, &left_lean_release);

    let right_pitch = wheel_node::pitch_axis(cache, &right_view);
    let right_lean = wheel_node::difference_axis(cache, &right_pitch, &hmd_pitch);
    let right_lean_engage_raw = wheel_node::axis_threshold_button(cache, &right_lean, -0.8, Comparator::LessThan);
    let right_lean_release_raw = wheel_node::axis_threshold_button(cache, &right_lean, -0.4, Comparator::GreaterThan);
    let right_lean_engage = wheel_node::and_button(cache, &right_lean_engage_raw, &right_grip);
    let right_lean_release = wheel_node::and_button(cache, &right_lean_release_raw, &right_grip);
    let right_lean_forward = wheel_node::sticky_pair_button(cache, &right_lean_engage, &right_lean_release);

    // Haptic pulse on both controllers when the steering toggle fires. Event
    // trigger nodes have no terminal value of their own — the scheduler
    // ticks them because they were constructed through this cache, not
    // because they're bound as a publishable axis or button.
    let left_pulse_events = [wheel_core::TickState::JustPressed].into_iter().collect();
    let right_pulse_events = [wheel_core::TickState::JustPressed].into_iter().collect();
    let _left_pulse = wheel_node::haptic_pulse_trigger(cache, &vr_handle, left, &triple_click, left_pulse_events, 4000);
    let _right_pulse = wheel_node::haptic_pulse_trigger(cache, &vr_handle, right, &triple_click, right_pulse_events, 4000);

    builder = builder
        .axis(StandardAxis::X, x_axis)
        .axis(StandardAxis::Y, y_axis)
        .axis(StandardAxis::Z, z_axis)
        .axis(StandardAxis::Rx, rx_axis)
        .axis(StandardAxis::Rz, rz_axis)
        .axis(StandardAxis::Slider0, left_trigger)
        .axis(StandardAxis::Slider1, right_trigger)
        .button(OUTPUT_GRIPS_BUTTON_ID, both_grips)
        .button(OUTPUT_LEFT_LEAN_BUTTON_ID, left_lean_forward)
        .button(OUTPUT_RIGHT_LEAN_BUTTON_ID, right_lean_forward);

    Ok(builder)
}
