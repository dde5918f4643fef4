//! Mapping Host observer trait for progress reporting, mirroring
//! `dt_sim::SimObserver`'s all-default-no-op shape.

use wheel_core::{ControllerRole, DeviceClass, Tick};

/// Callbacks invoked by [`MappingHost`][crate::MappingHost] at key points
/// around device-wait and the tick loop. All methods default to doing
/// nothing, so an implementor only overrides what it cares about.
pub trait MappingObserver {
    /// Called once, before the device-wait loop starts polling.
    fn on_device_wait_start(&mut self, _required: &[(DeviceClass, ControllerRole)]) {}

    /// Called at the very start of each tick, before the graph is driven.
    fn on_tick_start(&mut self, _tick: Tick) {}

    /// Called at the end of each tick, after axis/button values have been
    /// written to the virtual device.
    fn on_tick_end(&mut self, _tick: Tick) {}

    /// Called once after a bounded `run_ticks` call completes. `run`'s
    /// unbounded loop only stops on a fatal error, so this never fires there.
    fn on_mapping_end(&mut self, _final_tick: Tick) {}
}

/// A [`MappingObserver`] that does nothing. Use when you need to call `run`
/// or `run_ticks` but don't want progress callbacks.
pub struct NoopObserver;

impl MappingObserver for NoopObserver {}
