//! `Node` — the one vertex type used for every kind of node in the graph
//! (VR source, device view, axis, button, event trigger). A single tagged
//! union (`NodeKind`) plus a single state cell keeps dispatch and the
//! constructor cache key construction simple, at the cost of a few
//! `panic!`s on internal mismatches that can only happen if a constructor
//! function is wired wrong — those are construction bugs, not data the
//! engine should ever need to recover from at runtime.

use std::cell::RefCell;

use wheel_core::TickContext;

use crate::kind::NodeKind;
use crate::value::NodeValue;
use crate::{axis, button, event};

/// Cross-tick private state for the handful of node kinds that need it.
/// Every button node carries `prev_active` regardless of kind, since every
/// button kind derives this tick's `TickState` from it.
pub enum NodeState {
    None,
    Axis(AxisExtra),
    Button { prev_active: bool, extra: ButtonExtra },
}

#[derive(Debug)]
pub enum AxisExtra {
    None,
    Resettable { baseline: f64 },
    PushPull { baseline: f64, modified: f64 },
}

#[derive(Debug)]
pub enum ButtonExtra {
    None,
    Flicker { last_flicker_secs: f64 },
    MultiClick { last_click_secs: f64, count: u32 },
    Sticky { active: bool },
}

pub struct Node {
    /// Human-readable label for logging/debugging; not part of the cache
    /// key (two nodes with the same kind+params+deps are the same node
    /// regardless of how they were labeled when built).
    pub label: &'static str,
    kind: NodeKind,
    state: RefCell<NodeState>,
    value: RefCell<NodeValue>,
    last_updated: RefCell<i64>,
}

impl Node {
    pub fn new(label: &'static str, kind: NodeKind, state: NodeState) -> Self {
        Self { label, kind, state: RefCell::new(state), value: RefCell::new(NodeValue::None), last_updated: RefCell::new(-1) }
    }

    pub fn current_value(&self) -> NodeValue {
        self.value.borrow().clone()
    }

    pub fn last_updated(&self) -> i64 {
        *self.last_updated.borrow()
    }

    /// Compute this tick's value from already-updated dependencies and
    /// store it. Must only be called in topological order (see
    /// `scheduler.rs`) so every dependency this node reads has already run
    /// this tick.
    pub fn update(&self, ctx: &TickContext) {
        let new_value = match &self.kind {
            NodeKind::VrSource(source) => NodeValue::VrPackage(std::rc::Rc::new(source.borrow_mut().poll_tick())),
            NodeKind::DeviceView { base, device } => {
                NodeValue::Device(base.current_value().as_vr_package().device_snapshot(*device))
            }
            NodeKind::Axis(kind) => {
                let mut state = self.state.borrow_mut();
                let extra = match &mut *state {
                    NodeState::Axis(extra) => extra,
                    _ => unreachable!("axis node without axis state"),
                };
                NodeValue::Axis(axis::eval(kind, extra))
            }
            NodeKind::Button(kind) => {
                let mut state = self.state.borrow_mut();
                NodeValue::Button(button::eval(kind, ctx, &mut state))
            }
            NodeKind::EventTrigger(kind) => {
                event::eval(kind);
                NodeValue::None
            }
            #[cfg(test)]
            NodeKind::Constant(value) => value.clone(),
            #[cfg(test)]
            NodeKind::TestInput(cell) => cell.borrow().clone(),
        };

        *self.value.borrow_mut() = new_value;
        *self.last_updated.borrow_mut() = ctx.tick.0 as i64;
    }

    /// Overwrite a `NodeKind::TestInput` node's stored value. Test-only
    /// harness seam for driving a leaf through a sequence of ticks without
    /// wiring a fake VR runtime underneath it.
    #[cfg(test)]
    pub fn set_test_input(&self, value: NodeValue) {
        match &self.kind {
            NodeKind::TestInput(cell) => *cell.borrow_mut() = value,
            _ => panic!("set_test_input called on a non-TestInput node"),
        }
    }
}

#[cfg(test)]
pub fn constant(label: &'static str, value: NodeValue) -> crate::cache::NodeRef {
    std::rc::Rc::new(Node::new(label, NodeKind::Constant(value), NodeState::None))
}

#[cfg(test)]
pub fn test_input(label: &'static str, initial: NodeValue) -> crate::cache::NodeRef {
    std::rc::Rc::new(Node::new(label, NodeKind::TestInput(RefCell::new(initial)), NodeState::None))
}
