//! The top-level tag distinguishing what a [`Node`](crate::node::Node) is.
//! Everything below this level (which axis transform, which button
//! combinator) lives in the per-category kind enums in `axis.rs`/
//! `button.rs`/`event.rs` — this enum only distinguishes the five broad
//! categories that need different `update()` dispatch.

use std::cell::RefCell;
use std::rc::Rc;

use wheel_core::DeviceIndex;
use wheel_vr::VrStateSource;

use crate::axis::AxisKind;
use crate::button::ButtonKind;
use crate::cache::NodeRef;
use crate::event::EventTriggerKind;
use crate::value::NodeValue;

pub enum NodeKind {
    /// The root of every mapping: polls the VR runtime once per tick and
    /// produces a [`wheel_core::VrStatePackage`]. Shared as `Rc<RefCell<_>>`
    /// rather than owned outright, so `HapticPulseTrigger` event nodes can
    /// hold the same handle and call back into it without reaching through
    /// `Node`/`NodeKind` pattern matching.
    VrSource(Rc<RefCell<VrStateSource>>),
    /// Extracts one device's pose/controller/button snapshot out of the VR
    /// package for a tick. Every leaf axis/button node depending on the same
    /// device shares one of these, so N mapping entries that reference e.g.
    /// "the right controller" only cost one extraction per tick.
    DeviceView { base: NodeRef, device: DeviceIndex },
    Axis(AxisKind),
    Button(ButtonKind),
    EventTrigger(EventTriggerKind),
    /// Holds a fixed value forever. Not produced by any mapping constructor
    /// — only by tests, to stand in for a leaf without wiring a whole
    /// fake VR runtime underneath it.
    #[cfg(test)]
    Constant(NodeValue),
    /// Like `Constant`, but mutable from outside between ticks, for tests
    /// that need a button or axis to change value over a sequence of
    /// ticks (e.g. press/release).
    #[cfg(test)]
    TestInput(RefCell<NodeValue>),
}
