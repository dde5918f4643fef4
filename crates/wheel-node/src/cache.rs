//! The constructor/node cache: a multiton keyed by `(kind tag, canonical
//! params, dependency identity tuple)`. Calling a node constructor function
//! twice with the same kind and the same dependency handles returns the
//! same shared node instead of building a duplicate — this is how five
//! mapping entries that all reference "the right controller's X axis"
//! collapse into one node evaluated once per tick.
//!
//! Mirrors `MultitonNode` in the original Python source: that metaclass
//! hashes `(positional args, cls._parameterized_on(), kwargs)` per class
//! name. Here the "class name" is the kind tag, the positional/kwarg hash
//! is `params`, and Python's object identity hash for dependency arguments
//! becomes `Rc::as_ptr` identity for `deps`.

use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;

use tracing::debug;

use crate::node::Node;

pub type NodeRef = Rc<Node>;

/// One canonicalized constructor parameter. Floats are stored as their bit
/// pattern since `f64` is not `Hash`/`Eq` — exact because mapping
/// construction only ever passes literal constants (see SPEC_FULL.md's
/// "Cache key for floating-point parameters" note).
#[derive(Clone, PartialEq, Eq, Hash, Debug)]
pub enum ParamKey {
    Int(i64),
    UInt(u64),
    Float(u64),
    Bool(bool),
    Str(String),
}

impl From<f64> for ParamKey {
    fn from(v: f64) -> Self {
        ParamKey::Float(v.to_bits())
    }
}
impl From<u32> for ParamKey {
    fn from(v: u32) -> Self {
        ParamKey::UInt(v as u64)
    }
}
impl From<u64> for ParamKey {
    fn from(v: u64) -> Self {
        ParamKey::UInt(v)
    }
}
impl From<bool> for ParamKey {
    fn from(v: bool) -> Self {
        ParamKey::Bool(v)
    }
}
impl From<&str> for ParamKey {
    fn from(v: &str) -> Self {
        ParamKey::Str(v.to_string())
    }
}

#[derive(Clone, PartialEq, Eq, Hash, Debug)]
pub struct CacheKey {
    kind: &'static str,
    params: Vec<ParamKey>,
    deps: Vec<usize>,
}

impl CacheKey {
    pub fn new(kind: &'static str, params: Vec<ParamKey>, deps: &[&NodeRef]) -> Self {
        Self { kind, params, deps: deps.iter().map(|d| Rc::as_ptr(d) as usize).collect() }
    }
}

/// Builder-time node cache. Every node built while wiring a mapping goes
/// through [`NodeCache::construct`]; the order nodes were first built in
/// (cache misses only) is exactly a topological order over the graph,
/// because a node's dependencies must already exist as `NodeRef` handles
/// before it can be constructed. [`NodeCache::into_tick_order`] hands that
/// order to the scheduler and consumes the cache — no more nodes can be
/// constructed once a mapping starts running (spec.md §5: the graph is
/// frozen at runtime).
#[derive(Default)]
pub struct NodeCache {
    table: RefCell<HashMap<CacheKey, NodeRef>>,
    order: RefCell<Vec<NodeRef>>,
}

impl NodeCache {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn construct(&self, key: CacheKey, build: impl FnOnce() -> Node) -> NodeRef {
        if let Some(existing) = self.table.borrow().get(&key) {
            debug!(kind = key.kind, "node cache hit");
            return existing.clone();
        }

        debug!(kind = key.kind, "node cache miss, building");
        let node = Rc::new(build());
        self.table.borrow_mut().insert(key, node.clone());
        self.order.borrow_mut().push(node.clone());
        node
    }

    /// Consume the cache, returning nodes in first-construction (i.e.
    /// topological) order for the scheduler to iterate every tick.
    pub fn into_tick_order(self) -> Vec<NodeRef> {
        self.order.into_inner()
    }
}
