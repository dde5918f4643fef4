//! Fluent builder for [`MappingHost`], mirroring `dt_sim::SimBuilder`'s
//! required-inputs-in-`new`, optional-inputs-via-method shape.

use std::cell::RefCell;
use std::rc::Rc;

use tracing::info;

use wheel_core::TickClock;
use wheel_hid::{StandardAxis, VirtualDevice};
use wheel_node::{NodeCache, NodeRef, TickScheduler};
use wheel_vr::{VrRuntime, VrStateSource};

use crate::config::MappingConfig;
use crate::host::MappingHost;
use crate::observer::MappingObserver;
use crate::{MappingError, MappingResult};

/// Builds a [`MappingHost`]: owns the [`NodeCache`] mapping construction
/// wires nodes through, and accumulates the terminal axis/button bindings
/// the host writes to the virtual device every tick.
///
/// # Example
///
/// ```rust,ignore
/// let mut builder = MappingHostBuilder::new(Box::new(runtime), device, config);
/// let hmd = wheel_node::vr_source(builder.cache(), builder.source());
/// let pitch = wheel_node::pitch_axis(builder.cache(), &hmd_view);
/// let host = builder.axis(StandardAxis::Y, pitch).build(&mut NoopObserver)?;
/// ```
pub struct MappingHostBuilder<D: VirtualDevice> {
    config: MappingConfig,
    source: Rc<RefCell<VrStateSource>>,
    device: D,
    cache: NodeCache,
    axis_bindings: Vec<(StandardAxis, NodeRef)>,
    button_bindings: Vec<(u32, NodeRef)>,
}

impl<D: VirtualDevice> MappingHostBuilder<D> {
    /// Create a builder. `runtime` is wrapped in the VR State Source
    /// immediately so its handle is available for `vr_source`/`device_view`
    /// node construction before `build()` runs the device-wait.
    pub fn new(runtime: Box<dyn VrRuntime>, device: D, config: MappingConfig) -> Self {
        Self {
            source: Rc::new(RefCell::new(VrStateSource::new(runtime))),
            config,
            device,
            cache: NodeCache::new(),
            axis_bindings: Vec::new(),
            button_bindings: Vec::new(),
        }
    }

    /// The node cache mapping construction wires nodes through.
    pub fn cache(&self) -> &NodeCache {
        &self.cache
    }

    /// The VR State Source handle, shared with every `VrSource`/
    /// `HapticPulseTrigger` node built against this builder's cache.
    pub fn source(&self) -> Rc<RefCell<VrStateSource>> {
        self.source.clone()
    }

    /// Publish `node` as the terminal value for virtual-device axis `axis`.
    pub fn axis(mut self, axis: StandardAxis, node: NodeRef) -> Self {
        self.axis_bindings.push((axis, node));
        self
    }

    /// Publish `node` as the terminal value for virtual-device button
    /// `button_id`.
    pub fn button(mut self, button_id: u32, node: NodeRef) -> Self {
        self.button_bindings.push((button_id, node));
        self
    }

    /// Block until every device `config.required_devices` names is present.
    /// Mapping code that resolves devices by class/role (e.g.
    /// `wheel_node::device_view_for_type`) must call this before wiring any
    /// nodes, so a not-yet-connected device is retried here rather than
    /// failing construction outright (spec.md §4.6/§7).
    pub fn wait_for_required_devices<O: MappingObserver>(&self, observer: &mut O) -> MappingResult<()> {
        observer.on_device_wait_start(&self.config.required_devices);
        info!(required = self.config.required_devices.len(), "waiting for required VR devices");
        self.source.borrow_mut().wait_for_required_devices(&self.config.required_devices, self.config.device_wait)?;
        Ok(())
    }

    /// Freeze the node cache into a tick order and return a ready-to-run
    /// [`MappingHost`]. Callers should have already run
    /// `wait_for_required_devices` if any mapping node resolves a device by
    /// class/role; this is a cheap no-op re-check when they have.
    pub fn build<O: MappingObserver>(self, observer: &mut O) -> MappingResult<MappingHost<D>> {
        if self.axis_bindings.is_empty() && self.button_bindings.is_empty() {
            return Err(MappingError::Config("mapping publishes no axis or button bindings".into()));
        }

        self.wait_for_required_devices(observer)?;

        let order = self.cache.into_tick_order();
        info!(nodes = order.len(), "mapping node graph frozen");

        Ok(MappingHost {
            clock: TickClock::new(self.config.tick_hz),
            scheduler: TickScheduler::new(order),
            device: self.device,
            axis_bindings: self.axis_bindings,
            button_bindings: self.button_bindings,
        })
    }
}
