//! Constructors for the two node kinds that sit between the raw VR runtime
//! and every leaf axis/button node: the VR source itself, and the
//! per-device view extracted from it once per tick.

use std::cell::RefCell;
use std::rc::Rc;

use wheel_core::{ControllerRole, DeviceClass, DeviceIndex};
use wheel_vr::VrStateSource;

use crate::cache::{CacheKey, NodeCache, NodeRef};
use crate::error::NodeResult;
use crate::kind::NodeKind;
use crate::node::{Node, NodeState};

/// The graph's root. There is exactly one of these per mapping; calling
/// this more than once with the same `source` handle returns the same
/// node, since two mappings never need two independent polls of the same
/// runtime in one tick.
pub fn vr_source(cache: &NodeCache, source: Rc<RefCell<VrStateSource>>) -> NodeRef {
    let key = CacheKey::new("source.vr", vec![crate::cache::ParamKey::from(Rc::as_ptr(&source) as u64)], &[]);
    cache.construct(key, move || Node::new("vr_source", NodeKind::VrSource(source), NodeState::None))
}

/// One device's pose/controller/button snapshot for this tick, shared by
/// every leaf node reading that device so N mapping entries referencing
/// "the right controller" collapse to one extraction per tick.
pub fn device_view(cache: &NodeCache, base: &NodeRef, device: DeviceIndex) -> NodeRef {
    let key = CacheKey::new("source.device_view", vec![crate::cache::ParamKey::from(device.index() as u64)], &[base]);
    let base = base.clone();
    cache.construct(key, move || Node::new("device_view", NodeKind::DeviceView { base, device }, NodeState::None))
}

/// Resolve `(class, role)` to a device index via the VR State Source's
/// current index and build the `DeviceView` for it in one call, so mapping
/// code can write "the right controller" instead of threading a resolved
/// `DeviceIndex` through by hand. Mirrors `vr_system_state.py`'s
/// `ControllerStateByType`.
pub fn device_view_for_type(
    cache: &NodeCache,
    base: &NodeRef,
    source: &Rc<RefCell<VrStateSource>>,
    class: DeviceClass,
    role: ControllerRole,
) -> NodeResult<NodeRef> {
    let device = source.borrow().device_id_for_type(class, role)?;
    Ok(device_view(cache, base, device))
}
