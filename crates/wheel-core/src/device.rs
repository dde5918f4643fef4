//! Device classification vocabulary used when a mapping binds to "the left
//! controller" or "the HMD" rather than a literal device index.

/// The broad category of a tracked VR device.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug)]
pub enum DeviceClass {
    Hmd,
    Controller,
    GenericTracker,
}

/// Which hand a controller is assigned to, as reported by the VR runtime.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug)]
pub enum ControllerRole {
    LeftHand,
    RightHand,
    /// Reported but not assigned to either hand (common for trackers used
    /// as extra controllers).
    Unknown,
}

/// Which half of a two-state digital control a `DirectButton` reads:
/// full press, or the lighter touch-sense some controllers expose.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug)]
pub enum ButtonEvent {
    Press,
    Touch,
}
