//! Axis node kinds: everything that produces a single `f64` per tick, from
//! raw pose components up through pure transforms, stateful transforms, and
//! pair combinators. Grounded on `steam_vr_wheel/mappings/nodes/axis.py`,
//! `vr_to_joystick/mappings/nodes/axis_helpers.py` and
//! `vr_to_joystick/mappings/nodes/composite/axis.py`.

use wheel_core::TickState;

use crate::cache::{CacheKey, NodeCache, NodeRef, ParamKey};
use crate::kind::NodeKind;
use crate::node::{AxisExtra, Node, NodeState};

/// Which component of a controller's raw joystick/trackpad axis to read.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug)]
pub enum AxisComponent {
    X,
    Y,
}

pub enum AxisKind {
    Translation { base: NodeRef, component: usize },
    Velocity { base: NodeRef, component: usize },
    Yaw { base: NodeRef },
    Pitch { base: NodeRef },
    Roll { base: NodeRef },
    Controller { base: NodeRef, index: usize, component: AxisComponent },
    Wheel { left: NodeRef, right: NodeRef },
    Scale { factor: f64, zero: f64, out_zero: f64, parent: NodeRef },
    Shift { min: f64, max: f64, amount: f64, parent: NodeRef },
    Clamp { min: f64, max: f64, parent: NodeRef },
    Deadzone { deadzone: f64, parent: NodeRef },
    Inverted { parent: NodeRef },
    Resettable { reset_button: NodeRef, parent: NodeRef },
    Gated { disabled_value: f64, gate_button: NodeRef, parent: NodeRef },
    PushPull { enable_button: NodeRef, delta: NodeRef },
    Sum { a: NodeRef, b: NodeRef },
    Difference { a: NodeRef, b: NodeRef },
    Product { a: NodeRef, b: NodeRef },
    Quotient { a: NodeRef, b: NodeRef },
    Max { a: NodeRef, b: NodeRef },
    Min { a: NodeRef, b: NodeRef },
    Mean { a: NodeRef, b: NodeRef },
    Switch { switch: NodeRef, off: NodeRef, on: NodeRef },
}

pub(crate) fn eval(kind: &AxisKind, extra: &mut AxisExtra) -> f64 {
    match kind {
        AxisKind::Translation { base, component } => base.current_value().as_device().pose.pose.translation().get(*component),
        AxisKind::Velocity { base, component } => base.current_value().as_device().pose.velocity.get(*component),
        AxisKind::Yaw { base } => base.current_value().as_device().pose.pose.euler_ypr().0,
        AxisKind::Pitch { base } => base.current_value().as_device().pose.pose.euler_ypr().1,
        AxisKind::Roll { base } => base.current_value().as_device().pose.pose.euler_ypr().2,
        AxisKind::Controller { base, index, component } => {
            let raxis = base.current_value().as_device().controller.raxis[*index];
            match component {
                AxisComponent::X => raxis.x,
                AxisComponent::Y => raxis.y,
            }
        }
        AxisKind::Wheel { left, right } => {
            let l = left.current_value().as_device().pose.pose.translation();
            let r = right.current_value().as_device().pose.pose.translation();
            (r.y - l.y).atan2(r.x - l.x)
        }
        AxisKind::Scale { factor, zero, out_zero, parent } => {
            (parent.current_value().as_axis() - zero) * factor + out_zero
        }
        AxisKind::Shift { min, max, amount, parent } => {
            let range = max - min;
            let v = parent.current_value().as_axis();
            (v - min + amount).rem_euclid(range) + min
        }
        AxisKind::Clamp { min, max, parent } => parent.current_value().as_axis().clamp(*min, *max),
        AxisKind::Deadzone { deadzone, parent } => {
            let v = parent.current_value().as_axis();
            if v.abs() < *deadzone {
                0.0
            } else {
                v
            }
        }
        AxisKind::Inverted { parent } => -parent.current_value().as_axis(),
        AxisKind::Resettable { reset_button, parent } => {
            let baseline = match extra {
                AxisExtra::Resettable { baseline } => baseline,
                _ => unreachable!("Resettable axis without Resettable state"),
            };
            let parent_value = parent.current_value().as_axis();
            if reset_button.current_value().as_button().tick_state == TickState::JustPressed {
                *baseline = parent_value;
            }
            parent_value - *baseline
        }
        AxisKind::Gated { disabled_value, gate_button, parent } => {
            if gate_button.current_value().as_button().active {
                parent.current_value().as_axis()
            } else {
                *disabled_value
            }
        }
        AxisKind::PushPull { enable_button, delta } => {
            let (baseline, modified) = match extra {
                AxisExtra::PushPull { baseline, modified } => (baseline, modified),
                _ => unreachable!("PushPull axis without PushPull state"),
            };
            let button = enable_button.current_value().as_button();
            if button.tick_state == TickState::JustUnpressed {
                *baseline = *modified;
            } else if button.active {
                *modified = *baseline + delta.current_value().as_axis();
            }
            *modified
        }
        AxisKind::Sum { a, b } => a.current_value().as_axis() + b.current_value().as_axis(),
        AxisKind::Difference { a, b } => a.current_value().as_axis() - b.current_value().as_axis(),
        AxisKind::Product { a, b } => a.current_value().as_axis() * b.current_value().as_axis(),
        AxisKind::Quotient { a, b } => a.current_value().as_axis() / b.current_value().as_axis(),
        AxisKind::Max { a, b } => a.current_value().as_axis().max(b.current_value().as_axis()),
        AxisKind::Min { a, b } => a.current_value().as_axis().min(b.current_value().as_axis()),
        AxisKind::Mean { a, b } => (a.current_value().as_axis() + b.current_value().as_axis()) / 2.0,
        AxisKind::Switch { switch, off, on } => {
            if switch.current_value().as_button().active {
                on.current_value().as_axis()
            } else {
                off.current_value().as_axis()
            }
        }
    }
}

fn construct(cache: &NodeCache, label: &'static str, key: CacheKey, kind: AxisKind, extra: AxisExtra) -> NodeRef {
    cache.construct(key, move || Node::new(label, NodeKind::Axis(kind), NodeState::Axis(extra)))
}

pub fn translation_axis(cache: &NodeCache, base: &NodeRef, component: usize) -> NodeRef {
    let key = CacheKey::new("axis.translation", vec![ParamKey::from(component as u64)], &[base]);
    construct(cache, "translation_axis", key, AxisKind::Translation { base: base.clone(), component }, AxisExtra::None)
}

pub fn velocity_axis(cache: &NodeCache, base: &NodeRef, component: usize) -> NodeRef {
    let key = CacheKey::new("axis.velocity", vec![ParamKey::from(component as u64)], &[base]);
    construct(cache, "velocity_axis", key, AxisKind::Velocity { base: base.clone(), component }, AxisExtra::None)
}

pub fn yaw_axis(cache: &NodeCache, base: &NodeRef) -> NodeRef {
    let key = CacheKey::new("axis.yaw", vec![], &[base]);
    construct(cache, "yaw_axis", key, AxisKind::Yaw { base: base.clone() }, AxisExtra::None)
}

pub fn pitch_axis(cache: &NodeCache, base: &NodeRef) -> NodeRef {
    let key = CacheKey::new("axis.pitch", vec![], &[base]);
    construct(cache, "pitch_axis", key, AxisKind::Pitch { base: base.clone() }, AxisExtra::None)
}

pub fn roll_axis(cache: &NodeCache, base: &NodeRef) -> NodeRef {
    let key = CacheKey::new("axis.roll", vec![], &[base]);
    construct(cache, "roll_axis", key, AxisKind::Roll { base: base.clone() }, AxisExtra::None)
}

pub fn controller_axis(cache: &NodeCache, base: &NodeRef, index: usize, component: AxisComponent) -> NodeRef {
    let key = CacheKey::new(
        "axis.controller",
        vec![ParamKey::from(index as u64), ParamKey::from(component == AxisComponent::Y)],
        &[base],
    );
    construct(cache, "controller_axis", key, AxisKind::Controller { base: base.clone(), index, component }, AxisExtra::None)
}

pub fn wheel_axis(cache: &NodeCache, left: &NodeRef, right: &NodeRef) -> NodeRef {
    let key = CacheKey::new("axis.wheel", vec![], &[left, right]);
    construct(cache, "wheel_axis", key, AxisKind::Wheel { left: left.clone(), right: right.clone() }, AxisExtra::None)
}

pub fn scale_axis(cache: &NodeCache, parent: &NodeRef, factor: f64, zero: f64, out_zero: f64) -> NodeRef {
    let key = CacheKey::new(
        "axis.scale",
        vec![ParamKey::from(factor), ParamKey::from(zero), ParamKey::from(out_zero)],
        &[parent],
    );
    construct(cache, "scale_axis", key, AxisKind::Scale { factor, zero, out_zero, parent: parent.clone() }, AxisExtra::None)
}

pub fn axis_shifter(cache: &NodeCache, parent: &NodeRef, min: f64, max: f64, amount: f64) -> NodeRef {
    let key = CacheKey::new("axis.shift", vec![ParamKey::from(min), ParamKey::from(max), ParamKey::from(amount)], &[parent]);
    construct(cache, "axis_shifter", key, AxisKind::Shift { min, max, amount, parent: parent.clone() }, AxisExtra::None)
}

pub fn axis_clamp(cache: &NodeCache, parent: &NodeRef, min: f64, max: f64) -> NodeRef {
    let key = CacheKey::new("axis.clamp", vec![ParamKey::from(min), ParamKey::from(max)], &[parent]);
    construct(cache, "axis_clamp", key, AxisKind::Clamp { min, max, parent: parent.clone() }, AxisExtra::None)
}

pub fn deadzone_axis(cache: &NodeCache, parent: &NodeRef, deadzone: f64) -> NodeRef {
    let key = CacheKey::new("axis.deadzone", vec![ParamKey::from(deadzone)], &[parent]);
    construct(cache, "deadzone_axis", key, AxisKind::Deadzone { deadzone, parent: parent.clone() }, AxisExtra::None)
}

pub fn inverted_axis(cache: &NodeCache, parent: &NodeRef) -> NodeRef {
    let key = CacheKey::new("axis.inverted", vec![], &[parent]);
    construct(cache, "inverted_axis", key, AxisKind::Inverted { parent: parent.clone() }, AxisExtra::None)
}

pub fn resettable_axis(cache: &NodeCache, reset_button: &NodeRef, parent: &NodeRef) -> NodeRef {
    let key = CacheKey::new("axis.resettable", vec![], &[reset_button, parent]);
    construct(
        cache,
        "resettable_axis",
        key,
        AxisKind::Resettable { reset_button: reset_button.clone(), parent: parent.clone() },
        AxisExtra::Resettable { baseline: 0.0 },
    )
}

pub fn gated_axis(cache: &NodeCache, gate_button: &NodeRef, parent: &NodeRef, disabled_value: f64) -> NodeRef {
    let key = CacheKey::new("axis.gated", vec![ParamKey::from(disabled_value)], &[gate_button, parent]);
    construct(
        cache,
        "gated_axis",
        key,
        AxisKind::Gated { disabled_value, gate_button: gate_button.clone(), parent: parent.clone() },
        AxisExtra::None,
    )
}

pub fn push_pull_axis(cache: &NodeCache, enable_button: &NodeRef, parent: &NodeRef) -> NodeRef {
    let delta = crate::combinators::delta_axis(cache, enable_button, parent);
    let key = CacheKey::new("axis.push_pull", vec![], &[enable_button, &delta]);
    construct(
        cache,
        "push_pull_axis",
        key,
        AxisKind::PushPull { enable_button: enable_button.clone(), delta },
        AxisExtra::PushPull { baseline: 0.0, modified: 0.0 },
    )
}

macro_rules! pair_axis_fn {
    ($name:ident, $tag:literal, $variant:ident) => {
        pub fn $name(cache: &NodeCache, a: &NodeRef, b: &NodeRef) -> NodeRef {
            let key = CacheKey::new($tag, vec![], &[a, b]);
            construct(cache, stringify!($name), key, AxisKind::$variant { a: a.clone(), b: b.clone() }, AxisExtra::None)
        }
    };
}

pair_axis_fn!(sum_axis, "axis.sum", Sum);
pair_axis_fn!(difference_axis, "axis.difference", Difference);
pair_axis_fn!(product_axis, "axis.product", Product);
pair_axis_fn!(quotient_axis, "axis.quotient", Quotient);
pair_axis_fn!(max_axis, "axis.max", Max);
pair_axis_fn!(min_axis, "axis.min", Min);
pair_axis_fn!(mean_axis, "axis.mean", Mean);

pub fn switch_axis(cache: &NodeCache, switch: &NodeRef, off: &NodeRef, on: &NodeRef) -> NodeRef {
    let key = CacheKey::new("axis.switch", vec![], &[switch, off, on]);
    construct(cache, "switch_axis", key, AxisKind::Switch { switch: switch.clone(), off: off.clone(), on: on.clone() }, AxisExtra::None)
}
