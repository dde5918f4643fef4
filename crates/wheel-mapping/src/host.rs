//! `MappingHost` — drives the fixed-frequency tick loop and writes terminal
//! node values to the virtual device. See `builder.rs` for construction.

use tracing::error;

use wheel_core::{TickClock, TickContext};
use wheel_hid::{scale_axis_value, StandardAxis, VirtualDevice};
use wheel_node::{NodeRef, TickScheduler};

use crate::observer::MappingObserver;
use crate::{MappingError, MappingResult};

/// A running Mapping Host: a frozen node graph, a tick clock, the terminal
/// axis/button bindings, and the virtual device they write to. Built via
/// [`MappingHostBuilder`][crate::MappingHostBuilder].
pub struct MappingHost<D: VirtualDevice> {
    pub(crate) clock: TickClock,
    pub(crate) scheduler: TickScheduler,
    pub(crate) device: D,
    pub(crate) axis_bindings: Vec<(StandardAxis, NodeRef)>,
    pub(crate) button_bindings: Vec<(u32, NodeRef)>,
}

impl<D: VirtualDevice> MappingHost<D> {
    /// Number of nodes in the frozen tick order (diagnostic/test use).
    pub fn node_count(&self) -> usize {
        self.scheduler.len()
    }

    /// The virtual device the host writes to. Mainly useful in tests
    /// against `wheel_hid::MemoryDevice`.
    pub fn device(&self) -> &D {
        &self.device
    }

    /// Run forever at `config.tick_hz`, pacing each tick with
    /// `TickClock::remaining_in_tick`. Only returns on a fatal
    /// virtual-device write error (spec.md §7's `runtime-fatal` class); a
    /// normal exit happens via process signal, outside this loop.
    pub fn run<O: MappingObserver>(&mut self, observer: &mut O) -> MappingResult<()> {
        loop {
            self.tick(observer)?;
        }
    }

    /// Run exactly `n` ticks, for tests and bounded demos.
    pub fn run_ticks<O: MappingObserver>(&mut self, n: u64, observer: &mut O) -> MappingResult<()> {
        for _ in 0..n {
            self.tick(observer)?;
        }
        observer.on_mapping_end(self.clock.current_tick);
        Ok(())
    }

    fn tick<O: MappingObserver>(&mut self, observer: &mut O) -> MappingResult<()> {
        self.clock.advance();
        let ctx = TickContext::new(self.clock.current_tick, &self.clock);
        observer.on_tick_start(ctx.tick);

        self.scheduler.run_tick(&ctx);
        self.publish(&ctx)?;

        observer.on_tick_end(ctx.tick);
        std::thread::sleep(self.clock.remaining_in_tick());
        Ok(())
    }

    /// Write every terminal axis/button node's current value to the
    /// virtual device (§4.6 steps 3–4). A write failure is fatal.
    fn publish(&mut self, ctx: &TickContext) -> MappingResult<()> {
        for (axis, node) in &self.axis_bindings {
            let value = node.current_value().as_axis().clamp(0.0, 1.0);
            if let Err(err) = self.device.set_axis(*axis, scale_axis_value(value)) {
                error!(?err, axis = ?axis, tick = ?ctx.tick, "virtual device axis write failed");
                return Err(MappingError::Hid(err));
            }
        }

        for (button_id, node) in &self.button_bindings {
            let active = node.current_value().as_button().active;
            if let Err(err) = self.device.set_button(*button_id, active) {
                error!(?err, button_id, tick = ?ctx.tick, "virtual device button write failed");
                return Err(MappingError::Hid(err));
            }
        }

        Ok(())
    }
}
