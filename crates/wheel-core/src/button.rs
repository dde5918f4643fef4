//! Button state and the per-tick edge derivation every button node shares.

/// The edge classification derived by comparing this tick's raw active state
/// to the previous tick's.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug)]
pub enum TickState {
    /// Was inactive last tick, is inactive this tick.
    Inactive,
    /// Was inactive last tick, is active this tick.
    JustPressed,
    /// Was active last tick, is active this tick.
    Active,
    /// Was active last tick, is inactive this tick.
    JustUnpressed,
}

impl TickState {
    #[inline]
    pub fn is_active(self) -> bool {
        matches!(self, TickState::JustPressed | TickState::Active)
    }
}

impl Default for TickState {
    /// Tick zero has no previous state to compare against.
    fn default() -> Self {
        TickState::Inactive
    }
}

/// The output value of every button node: whether it is currently active,
/// plus this tick's edge classification relative to the previous tick.
#[derive(Copy, Clone, PartialEq, Debug, Default)]
pub struct ButtonState {
    pub active: bool,
    pub tick_state: TickState,
}

impl ButtonState {
    pub fn new(active: bool, tick_state: TickState) -> Self {
        Self { active, tick_state }
    }
}

/// Derive this tick's four-valued state from the previous tick's raw active
/// flag and this tick's raw active flag. Mirrors
/// `steam_vr_wheel`'s `TICK_STATE_MAPPING`.
#[inline]
pub fn tick_state_for(prev_active: bool, now_active: bool) -> TickState {
    match (prev_active, now_active) {
        (false, false) => TickState::Inactive,
        (false, true) => TickState::JustPressed,
        (true, true) => TickState::Active,
        (true, false) => TickState::JustUnpressed,
    }
}
