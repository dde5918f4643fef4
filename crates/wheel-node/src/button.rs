//! Button node kinds: everything that produces a [`ButtonState`] per tick.
//! Grounded on `steam_vr_wheel/mappings/nodes/button.py`,
//! `steam_vr_wheel/mappings/nodes/composite/button.py`,
//! `steam_vr_wheel/mappings/nodes/emitter/button.py` and
//! `steam_vr_wheel/mappings/nodes/flick_button.py`.

use wheel_core::{tick_state_for, ButtonEvent, ButtonState, Comparator, TickContext, TickState};

use crate::cache::{CacheKey, NodeCache, NodeRef, ParamKey};
use crate::kind::NodeKind;
use crate::node::{ButtonExtra, Node, NodeState};

pub enum ButtonKind {
    Direct { base: NodeRef, button_id: u32, event: ButtonEvent },
    AlwaysOff,
    AlwaysOn,
    /// Emits `false` for one tick every `interval_secs` while its own
    /// previous state was active, `true` otherwise — a self-correcting
    /// single-tick blip rather than a parent-wrapping transform.
    Flickering { interval_secs: f64 },
    Toggle { parent: NodeRef },
    MultiClick { interval_secs: f64, required_clicks: u32, parent: NodeRef },
    And { a: NodeRef, b: NodeRef },
    Or { a: NodeRef, b: NodeRef },
    Xor { a: NodeRef, b: NodeRef },
    Not { parent: NodeRef },
    Switch { switch: NodeRef, off: NodeRef, on: NodeRef },
    StickyPair { a: NodeRef, b: NodeRef },
    AxisThreshold { threshold: f64, comparator: Comparator, parent: NodeRef },
    Flick { threshold: f64, base: NodeRef },
}

/// Evaluate this tick's raw active flag and derive the four-valued tick
/// state from the previous tick's raw active flag, which every button kind
/// carries in `NodeState::Button` regardless of whether the kind itself
/// needs extra state.
pub(crate) fn eval(kind: &ButtonKind, ctx: &TickContext, state: &mut NodeState) -> ButtonState {
    let (prev_active, extra) = match state {
        NodeState::Button { prev_active, extra } => (prev_active, extra),
        _ => unreachable!("button node without button state"),
    };
    let was_active = *prev_active;
    let now_active = now_active(kind, ctx, was_active, extra);
    let tick_state = tick_state_for(was_active, now_active);
    *prev_active = now_active;
    ButtonState::new(now_active, tick_state)
}

fn now_active(kind: &ButtonKind, ctx: &TickContext, prev_active: bool, extra: &mut ButtonExtra) -> bool {
    match kind {
        ButtonKind::Direct { base, button_id, event } => {
            let snapshot = base.current_value().as_device();
            match event {
                ButtonEvent::Press => snapshot.buttons.pressed.contains(button_id),
                ButtonEvent::Touch => snapshot.buttons.touched.contains(button_id),
            }
        }
        ButtonKind::AlwaysOff => false,
        ButtonKind::AlwaysOn => true,
        ButtonKind::Flickering { interval_secs } => {
            let last_flicker_secs = match extra {
                ButtonExtra::Flicker { last_flicker_secs } => last_flicker_secs,
                _ => unreachable!("Flickering button without Flicker state"),
            };
            if prev_active && (ctx.now_secs() - *last_flicker_secs) > *interval_secs {
                *last_flicker_secs = ctx.now_secs();
                false
            } else {
                true
            }
        }
        ButtonKind::Toggle { parent } => {
            if parent.current_value().as_button().tick_state == TickState::JustPressed {
                !prev_active
            } else {
                prev_active
            }
        }
        ButtonKind::MultiClick { interval_secs, required_clicks, parent } => {
            let (last_click_secs, count) = match extra {
                ButtonExtra::MultiClick { last_click_secs, count } => (last_click_secs, count),
                _ => unreachable!("MultiClick button without MultiClick state"),
            };
            let parent_value = parent.current_value().as_button();
            if parent_value.tick_state == TickState::JustPressed {
                if (ctx.now_secs() - *last_click_secs) > *interval_secs {
                    *count = 0;
                }
                *last_click_secs = ctx.now_secs();
                *count += 1;
            }
            *count >= *required_clicks && parent_value.active
        }
        ButtonKind::And { a, b } => a.current_value().as_button().active && b.current_value().as_button().active,
        ButtonKind::Or { a, b } => a.current_value().as_button().active || b.current_value().as_button().active,
        ButtonKind::Xor { a, b } => a.current_value().as_button().active ^ b.current_value().as_button().active,
        ButtonKind::Not { parent } => !parent.current_value().as_button().active,
        ButtonKind::Switch { switch, off, on } => {
            if switch.current_value().as_button().active {
                on.current_value().as_button().active
            } else {
                off.current_value().as_button().active
            }
        }
        ButtonKind::StickyPair { a, b } => {
            let active = match extra {
                ButtonExtra::Sticky { active } => active,
                _ => unreachable!("StickyPair button without Sticky state"),
            };
            let a_active = a.current_value().as_button().active;
            let b_active = b.current_value().as_button().active;
            *active = if *active { a_active || b_active } else { a_active && b_active };
            *active
        }
        ButtonKind::AxisThreshold { threshold, comparator, parent } => comparator.eval(parent.current_value().as_axis(), *threshold),
        ButtonKind::Flick { threshold, base } => {
            let v = base.current_value().as_device().pose.velocity;
            v.x.abs().max(v.y.abs()).max(v.z.abs()) > *threshold
        }
    }
}

fn construct(cache: &NodeCache, label: &'static str, key: CacheKey, kind: ButtonKind, extra: ButtonExtra) -> NodeRef {
    cache.construct(key, move || {
        Node::new(label, NodeKind::Button(kind), NodeState::Button { prev_active: false, extra })
    })
}

pub fn direct_button(cache: &NodeCache, base: &NodeRef, button_id: u32, event: ButtonEvent) -> NodeRef {
    let key = CacheKey::new(
        "button.direct",
        vec![ParamKey::from(button_id as u64), ParamKey::from(event == ButtonEvent::Touch)],
        &[base],
    );
    construct(cache, "direct_button", key, ButtonKind::Direct { base: base.clone(), button_id, event }, ButtonExtra::None)
}

pub fn always_off_button(cache: &NodeCache) -> NodeRef {
    let key = CacheKey::new("button.always_off", vec![], &[]);
    construct(cache, "always_off_button", key, ButtonKind::AlwaysOff, ButtonExtra::None)
}

pub fn always_on_button(cache: &NodeCache) -> NodeRef {
    let key = CacheKey::new("button.always_on", vec![], &[]);
    construct(cache, "always_on_button", key, ButtonKind::AlwaysOn, ButtonExtra::None)
}

pub fn flickering_button(cache: &NodeCache, interval_secs: f64) -> NodeRef {
    let key = CacheKey::new("button.flickering", vec![ParamKey::from(interval_secs)], &[]);
    construct(
        cache,
        "flickering_button",
        key,
        ButtonKind::Flickering { interval_secs },
        ButtonExtra::Flicker { last_flicker_secs: f64::NEG_INFINITY },
    )
}

pub fn toggle_button(cache: &NodeCache, parent: &NodeRef) -> NodeRef {
    let key = CacheKey::new("button.toggle", vec![], &[parent]);
    construct(cache, "toggle_button", key, ButtonKind::Toggle { parent: parent.clone() }, ButtonExtra::None)
}

pub fn multi_click_button(cache: &NodeCache, parent: &NodeRef, interval_secs: f64, required_clicks: u32) -> NodeRef {
    let key = CacheKey::new(
        "button.multi_click",
        vec![ParamKey::from(interval_secs), ParamKey::from(required_clicks as u64)],
        &[parent],
    );
    construct(
        cache,
        "multi_click_button",
        key,
        ButtonKind::MultiClick { interval_secs, required_clicks, parent: parent.clone() },
        ButtonExtra::MultiClick { last_click_secs: f64::NEG_INFINITY, count: 0 },
    )
}

macro_rules! pair_button_fn {
    ($name:ident, $tag:literal, $variant:ident) => {
        pub fn $name(cache: &NodeCache, a: &NodeRef, b: &NodeRef) -> NodeRef {
            let key = CacheKey::new($tag, vec![], &[a, b]);
            construct(cache, stringify!($name), key, ButtonKind::$variant { a: a.clone(), b: b.clone() }, ButtonExtra::None)
        }
    };
}

pair_button_fn!(and_button, "button.and", And);
pair_button_fn!(or_button, "button.or", Or);
pair_button_fn!(xor_button, "button.xor", Xor);

pub fn not_button(cache: &NodeCache, parent: &NodeRef) -> NodeRef {
    let key = CacheKey::new("button.not", vec![], &[parent]);
    construct(cache, "not_button", key, ButtonKind::Not { parent: parent.clone() }, ButtonExtra::None)
}

pub fn switch_button(cache: &NodeCache, switch: &NodeRef, off: &NodeRef, on: &NodeRef) -> NodeRef {
    let key = CacheKey::new("button.switch", vec![], &[switch, off, on]);
    construct(cache, "switch_button", key, ButtonKind::Switch { switch: switch.clone(), off: off.clone(), on: on.clone() }, ButtonExtra::None)
}

pub fn sticky_pair_button(cache: &NodeCache, a: &NodeRef, b: &NodeRef) -> NodeRef {
    let key = CacheKey::new("button.sticky_pair", vec![], &[a, b]);
    construct(cache, "sticky_pair_button", key, ButtonKind::StickyPair { a: a.clone(), b: b.clone() }, ButtonExtra::Sticky { active: false })
}

pub fn axis_threshold_button(cache: &NodeCache, parent: &NodeRef, threshold: f64, comparator: Comparator) -> NodeRef {
    let key = CacheKey::new("button.axis_threshold", vec![ParamKey::from(threshold), ParamKey::from(comparator as u64)], &[parent]);
    construct(
        cache,
        "axis_threshold_button",
        key,
        ButtonKind::AxisThreshold { threshold, comparator, parent: parent.clone() },
        ButtonExtra::None,
    )
}

pub fn flick_button(cache: &NodeCache, base: &NodeRef, threshold: f64) -> NodeRef {
    let key = CacheKey::new("button.flick", vec![ParamKey::from(threshold)], &[base]);
    construct(cache, "flick_button", key, ButtonKind::Flick { threshold, base: base.clone() }, ButtonExtra::None)
}
