//! Composed node constructors: functions that wire several primitive nodes
//! together rather than introducing their own `NodeKind` variant, exactly
//! mirroring how the originals are plain functions over other node
//! constructors rather than their own `Axis`/`Button` subclasses. Grounded
//! on `vr_to_joystick/mappings/nodes/composite/axis.py`,
//! `steam_vr_wheel/mappings/nodes/composite/button.py` and
//! `steam_vr_wheel/wheel.py`'s circle/sequential gesture mappings.

use wheel_core::Comparator;

use crate::axis::{self, AxisComponent};
use crate::button;
use crate::cache::{NodeCache, NodeRef};

/// `parent` while `button` is held, reset to zero on every fresh press —
/// `GatedAxis(0)(button, ResettableAxis(button, axis))` in the original.
pub fn delta_axis(cache: &NodeCache, button: &NodeRef, parent: &NodeRef) -> NodeRef {
    let resettable = axis::resettable_axis(cache, button, parent);
    axis::gated_axis(cache, button, &resettable, 0.0)
}

fn comparator_for_threshold(threshold: f64) -> Comparator {
    if threshold < 0.0 {
        Comparator::LessThan
    } else {
        Comparator::GreaterThan
    }
}

/// A button that becomes (and, if `sticky`, stays) active once
/// `gesture_axis`'s movement since `activation_button` was pressed crosses
/// `threshold` while `activation_button` is held.
pub fn gesture_button(
    cache: &NodeCache,
    activation_button: &NodeRef,
    gesture_axis: &NodeRef,
    threshold: f64,
    sticky: bool,
) -> NodeRef {
    let delta = delta_axis(cache, activation_button, gesture_axis);
    let comparator = comparator_for_threshold(threshold);
    let axis_action = button::axis_threshold_button(cache, &delta, threshold, comparator);
    if sticky {
        button::sticky_pair_button(cache, &axis_action, activation_button)
    } else {
        button::and_button(cache, &axis_action, activation_button)
    }
}

/// Chains gesture steps so each one only arms once the previous one has
/// fired, letting a mapping require a sequence of distinct movements (e.g.
/// the four legs of a circle) rather than any one of them.
pub fn sequential_gesture(cache: &NodeCache, activation_button: &NodeRef, steps: &[(NodeRef, f64)]) -> NodeRef {
    let mut current = activation_button.clone();
    for (axis_for_step, threshold) in steps {
        current = gesture_button(cache, &current, axis_for_step, *threshold, true);
    }
    current
}

/// A four-step sequential gesture over right/down/left/up movement,
/// matching `steam_vr_wheel`'s circular-motion mappings (used for e.g.
/// scroll-wheel-style gestures driven by controller translation).
pub fn circle_gesture(
    cache: &NodeCache,
    base: &NodeRef,
    activation_button: &NodeRef,
    clockwise: bool,
    size: f64,
) -> NodeRef {
    let sign = if clockwise { 1.0 } else { -1.0 };
    let x_axis = axis::translation_axis(cache, base, 0);
    let y_axis = axis::translation_axis(cache, base, 1);

    let steps: Vec<(NodeRef, f64)> = vec![
        (x_axis.clone(), sign * size),
        (y_axis.clone(), -size),
        (x_axis, -sign * size),
        (y_axis, size),
    ];
    sequential_gesture(cache, activation_button, &steps)
}

/// Looks up the right device-view helper for a controller's raw joystick
/// axis rather than the generic `controller_axis` constructor directly, so
/// mapping code reads "left stick X" instead of threading indices by hand.
pub fn left_stick(cache: &NodeCache, base: &NodeRef) -> (NodeRef, NodeRef) {
    (
        axis::controller_axis(cache, base, 0, AxisComponent::X),
        axis::controller_axis(cache, base, 0, AxisComponent::Y),
    )
}
