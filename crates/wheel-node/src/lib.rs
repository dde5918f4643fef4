//! The node-graph evaluation engine: one tagged-union `Node` type, a
//! construction-time multiton cache that doubles as the topological tick
//! order, and the per-category constructor functions mapping code calls to
//! wire a mapping together.
//!
//! | module | contents |
//! |---|---|
//! | [`value`] | `NodeValue`, the single output type every node kind produces |
//! | [`cache`] | the multiton constructor cache (`NodeCache`, `CacheKey`, `ParamKey`) |
//! | [`node`] | `Node`, its cross-tick state, and the `update()` dispatch |
//! | [`kind`] | `NodeKind`, the top-level tag distinguishing node categories |
//! | [`source`] | the VR source node and per-device view extraction |
//! | [`axis`] | every axis node kind: leaves, pure transforms, stateful transforms, pair combinators |
//! | [`button`] | every button node kind: leaves, stateful transforms, pair combinators |
//! | [`event`] | side-effecting event-trigger nodes (haptic pulses) |
//! | [`combinators`] | composed constructors (`delta_axis`, gestures) built from the above |
//! | [`scheduler`] | `TickScheduler`, which runs the frozen node list once per tick |

mod axis;
mod button;
mod cache;
mod combinators;
mod error;
mod event;
mod kind;
mod node;
mod scheduler;
mod source;
mod value;

#[cfg(test)]
mod tests;

pub use axis::AxisComponent;
pub use cache::{CacheKey, NodeCache, NodeRef, ParamKey};
pub use combinators::{circle_gesture, delta_axis, gesture_button, left_stick, sequential_gesture};
pub use error::{NodeError, NodeResult};
pub use event::haptic_pulse_trigger;
pub use scheduler::TickScheduler;
pub use source::{device_view, device_view_for_type, vr_source};
pub use value::NodeValue;

pub use axis::{
    axis_clamp, axis_shifter, controller_axis, deadzone_axis, difference_axis, gated_axis, inverted_axis, max_axis,
    mean_axis, min_axis, pitch_axis, product_axis, push_pull_axis, quotient_axis, resettable_axis, roll_axis,
    scale_axis, sum_axis, switch_axis, translation_axis, velocity_axis, wheel_axis, yaw_axis,
};
pub use button::{
    always_off_button, always_on_button, and_button, axis_threshold_button, direct_button, flick_button,
    flickering_button, multi_click_button, not_button, or_button, sticky_pair_button, switch_button, toggle_button,
    xor_button,
};
