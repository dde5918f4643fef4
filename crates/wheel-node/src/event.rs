//! Event-trigger nodes: side-effecting leaves that don't produce a value
//! consumed by anything else in the graph, but still need to run in tick
//! order so they see this tick's button edges. Grounded on
//! `steam_vr_wheel/mappings/nodes/event_triggers.py`.

use std::cell::RefCell;
use std::collections::HashSet;
use std::rc::Rc;

use tracing::warn;
use wheel_core::{DeviceIndex, TickState};
use wheel_vr::VrStateSource;

use crate::cache::{CacheKey, NodeCache, NodeRef};
use crate::kind::NodeKind;
use crate::node::{Node, NodeState};

pub enum EventTriggerKind {
    HapticPulse {
        device: DeviceIndex,
        pulse_events: HashSet<TickState>,
        duration_us: u16,
        source: Rc<RefCell<VrStateSource>>,
        parent: NodeRef,
    },
}

pub(crate) fn eval(kind: &EventTriggerKind) {
    match kind {
        EventTriggerKind::HapticPulse { device, pulse_events, duration_us, source, parent } => {
            let tick_state = parent.current_value().as_button().tick_state;
            if pulse_events.contains(&tick_state) {
                if let Err(err) = source.borrow_mut().trigger_haptic_pulse(*device, 0, *duration_us) {
                    warn!(?err, device = ?device, "haptic pulse trigger failed");
                }
            }
        }
    }
}

pub fn haptic_pulse_trigger(
    cache: &NodeCache,
    source: &Rc<RefCell<VrStateSource>>,
    device: DeviceIndex,
    parent: &NodeRef,
    pulse_events: HashSet<TickState>,
    duration_us: u16,
) -> NodeRef {
    let tag_params: Vec<_> = {
        let mut states: Vec<u64> = pulse_events.iter().map(|s| *s as u64).collect();
        states.sort_unstable();
        states.into_iter().map(crate::cache::ParamKey::from).collect()
    };
    let mut params = vec![crate::cache::ParamKey::from(device.index() as u64), crate::cache::ParamKey::from(duration_us as u64)];
    params.extend(tag_params);
    let key = CacheKey::new("event.haptic_pulse", params, &[parent]);
    let source = source.clone();
    let parent_clone = parent.clone();
    cache.construct(key, move || {
        Node::new(
            "haptic_pulse_trigger",
            NodeKind::EventTrigger(EventTriggerKind::HapticPulse {
                device,
                pulse_events,
                duration_us,
                source,
                parent: parent_clone,
            }),
            NodeState::None,
        )
    })
}
