use std::collections::HashSet;
use std::rc::Rc;

use wheel_core::{
    ButtonState, Comparator, ControllerRawState, DeviceButtonState, DeviceSnapshot, DevicePoseState, Pose3x4, Tick,
    TickContext, TickState, Vec3,
};

use crate::button;
use crate::cache::NodeCache;
use crate::node::{constant, test_input};
use crate::value::NodeValue;
use crate::{axis, combinators, TickScheduler};

fn ctx(tick: u64, now_secs: f64) -> TickContext {
    TickContext::for_test(Tick(tick), now_secs)
}

fn button_input(active: bool, tick_state: TickState) -> crate::cache::NodeRef {
    test_input("button_input", NodeValue::Button(ButtonState::new(active, tick_state)))
}

fn set_button(node: &crate::cache::NodeRef, active: bool, tick_state: TickState) {
    node.set_test_input(NodeValue::Button(ButtonState::new(active, tick_state)));
}

fn device_with_pose(pose: Pose3x4) -> DeviceSnapshot {
    DeviceSnapshot {
        pose: DevicePoseState { pose, velocity: Vec3::ZERO, angular_velocity: Vec3::ZERO, pose_is_valid: true },
        controller: ControllerRawState::default(),
        buttons: DeviceButtonState::default(),
        ..Default::default()
    }
}

fn pose_at(x: f64, y: f64) -> Pose3x4 {
    let mut m = Pose3x4::IDENTITY.m;
    m[0][3] = x;
    m[1][3] = y;
    Pose3x4 { m }
}

/// Roll a pose by `radians` around the axis `RollAxis` reads (`atan2(m10, m00)`).
fn pose_rolled(radians: f64) -> Pose3x4 {
    let mut m = Pose3x4::IDENTITY.m;
    m[0][0] = radians.cos();
    m[1][0] = radians.sin();
    Pose3x4 { m }
}

/// S1. Toggle: off, press (JustPressed) -> on; Active -> stays on;
/// JustUnpressed -> stays on; press again -> off.
#[test]
fn toggle_button_scenario_s1() {
    let cache = NodeCache::new();
    let parent = button_input(false, TickState::Inactive);
    let toggle = button::toggle_button(&cache, &parent);
    let scheduler = TickScheduler::new(cache.into_tick_order());

    let expect = |tick: u64, active: bool, tick_state: TickState, want_on: bool| {
        set_button(&parent, active, tick_state);
        scheduler.run_tick(&ctx(tick, tick as f64));
        assert_eq!(toggle.current_value().as_button().active, want_on, "tick {tick}");
    };

    expect(0, false, TickState::Inactive, false);
    expect(1, true, TickState::JustPressed, true);
    expect(2, true, TickState::Active, true);
    expect(3, false, TickState::JustUnpressed, true);
    expect(4, true, TickState::JustPressed, false);
}

/// S2. Multi-click n=3 interval=0.5s: presses at t=0.10, 0.20, 0.30 all
/// within the interval; not active until the third.
#[test]
fn multi_click_scenario_s2() {
    let cache = NodeCache::new();
    let parent = button_input(false, TickState::Inactive);
    let multi = button::multi_click_button(&cache, &parent, 0.5, 3);
    let scheduler = TickScheduler::new(cache.into_tick_order());

    set_button(&parent, true, TickState::JustPressed);
    scheduler.run_tick(&ctx(1, 0.10));
    assert!(!multi.current_value().as_button().active, "after 1st press");

    set_button(&parent, true, TickState::JustPressed);
    scheduler.run_tick(&ctx(2, 0.20));
    assert!(!multi.current_value().as_button().active, "after 2nd press");

    set_button(&parent, true, TickState::JustPressed);
    scheduler.run_tick(&ctx(3, 0.30));
    assert!(multi.current_value().as_button().active, "after 3rd press");

    set_button(&parent, true, TickState::Active);
    scheduler.run_tick(&ctx(4, 0.35));
    assert!(multi.current_value().as_button().active, "remains active until release");
}

/// Clicks spaced further apart than the interval reset the counter instead
/// of accumulating.
#[test]
fn multi_click_resets_after_gap() {
    let cache = NodeCache::new();
    let parent = button_input(false, TickState::Inactive);
    let multi = button::multi_click_button(&cache, &parent, 0.5, 3);
    let scheduler = TickScheduler::new(cache.into_tick_order());

    set_button(&parent, true, TickState::JustPressed);
    scheduler.run_tick(&ctx(1, 0.0));
    set_button(&parent, true, TickState::JustPressed);
    scheduler.run_tick(&ctx(2, 0.1));

    // Gap far exceeds the interval: count resets to 1, not 3.
    set_button(&parent, true, TickState::JustPressed);
    scheduler.run_tick(&ctx(3, 5.0));
    assert!(!multi.current_value().as_button().active);
}

/// S3. Sticky forward-tilt gesture: grip held, pitch crosses the initiator
/// threshold (-0.8) then recovers past the limiter (-0.4); stays active
/// while grip is held even after the axis recovers, and only releases once
/// grip also releases.
#[test]
fn sticky_gesture_scenario_s3() {
    let cache = NodeCache::new();
    let grip = button_input(true, TickState::JustPressed);
    let pitch = test_input("pitch", NodeValue::Axis(0.0));
    let gesture = combinators::gesture_button(&cache, &grip, &pitch, -0.8, true);
    let scheduler = TickScheduler::new(cache.into_tick_order());

    scheduler.run_tick(&ctx(0, 0.0));
    assert!(!gesture.current_value().as_button().active, "before crossing threshold");

    pitch.set_test_input(NodeValue::Axis(-1.0));
    set_button(&grip, true, TickState::Active);
    scheduler.run_tick(&ctx(1, 0.01));
    assert!(gesture.current_value().as_button().active, "crosses -0.8");

    // Recovering past -0.4 while grip still held keeps the gesture sticky.
    pitch.set_test_input(NodeValue::Axis(-0.3));
    set_button(&grip, true, TickState::Active);
    scheduler.run_tick(&ctx(2, 0.02));
    assert!(gesture.current_value().as_button().active, "stays active while grip held");

    // Releasing grip drops it.
    set_button(&grip, false, TickState::JustUnpressed);
    scheduler.run_tick(&ctx(3, 0.03));
    assert!(!gesture.current_value().as_button().active, "drops once grip releases");
}

/// S4. Cache sharing: constructing the same axis node kind over the same
/// dependency three times yields one shared node, not three.
#[test]
fn cache_sharing_scenario_s4() {
    let cache = NodeCache::new();
    let hmd = constant("hmd", NodeValue::Device(device_with_pose(Pose3x4::IDENTITY)));

    let a = axis::roll_axis(&cache, &hmd);
    let b = axis::roll_axis(&cache, &hmd);
    let c = axis::roll_axis(&cache, &hmd);

    assert!(Rc::ptr_eq(&a, &b));
    assert!(Rc::ptr_eq(&b, &c));
    assert_eq!(cache.into_tick_order().len(), 1, "three constructor calls collapse into one cached roll_axis node");
}

/// S5. Haptic pulse on edges: fires on just_pressed and just_unpressed only.
#[test]
fn haptic_pulse_fires_on_configured_edges_s5() {
    use std::cell::RefCell;
    use wheel_vr::VrRuntime;

    struct CountingRuntime {
        calls: Rc<RefCell<Vec<(wheel_core::DeviceIndex, u32, u16)>>>,
    }

    impl VrRuntime for CountingRuntime {
        fn max_tracked_devices(&self) -> u32 {
            8
        }
        fn device_class(&self, _device: wheel_core::DeviceIndex) -> Option<wheel_core::DeviceClass> {
            None
        }
        fn controller_role(&self, _device: wheel_core::DeviceIndex) -> Option<wheel_core::ControllerRole> {
            None
        }
        fn poll_events(&mut self) -> Vec<wheel_vr::VrEvent> {
            Vec::new()
        }
        fn device_poses(&mut self) -> std::collections::HashMap<wheel_core::DeviceIndex, DevicePoseState> {
            std::collections::HashMap::new()
        }
        fn controller_state(&mut self, _device: wheel_core::DeviceIndex) -> Option<ControllerRawState> {
            None
        }
        fn trigger_haptic_pulse(
            &mut self,
            device: wheel_core::DeviceIndex,
            axis_id: u32,
            duration_us: u16,
        ) -> wheel_vr::VrResult<()> {
            self.calls.borrow_mut().push((device, axis_id, duration_us));
            Ok(())
        }
    }

    let calls = Rc::new(RefCell::new(Vec::new()));
    let runtime = CountingRuntime { calls: calls.clone() };
    let source = Rc::new(RefCell::new(wheel_vr::VrStateSource::new(Box::new(runtime))));

    let cache = NodeCache::new();
    let parent = button_input(false, TickState::Inactive);
    let mut edges = HashSet::new();
    edges.insert(TickState::JustPressed);
    edges.insert(TickState::JustUnpressed);
    let _trigger = crate::haptic_pulse_trigger(&cache, &source, wheel_core::DeviceIndex(5), &parent, edges, 1000);
    let scheduler = TickScheduler::new(cache.into_tick_order());

    let sequence = [
        (false, TickState::Inactive),
        (true, TickState::JustPressed),
        (true, TickState::Active),
        (false, TickState::JustUnpressed),
    ];
    for (i, (active, state)) in sequence.iter().enumerate() {
        set_button(&parent, *active, *state);
        scheduler.run_tick(&ctx(i as u64, i as f64));
    }

    let fired = calls.borrow();
    assert_eq!(fired.len(), 2, "expected exactly two pulses, got {fired:?}");
    assert_eq!(fired[0], (wheel_core::DeviceIndex(5), 0, 1000));
    assert_eq!(fired[1], (wheel_core::DeviceIndex(5), 0, 1000));
}

/// S6. Wheel-angle differential: left at (0,1), right at (1,1), HMD roll 0
/// -> wheel angle 0, differential 0. Tilting the HMD by 0.3 rad with the
/// wheel still level yields -0.3 (steering compensated for body tilt).
#[test]
fn wheel_angle_differential_scenario_s6() {
    let cache = NodeCache::new();
    let left = constant("left", NodeValue::Device(device_with_pose(pose_at(0.0, 1.0))));
    let right = constant("right", NodeValue::Device(device_with_pose(pose_at(1.0, 1.0))));
    let hmd = test_input("hmd", NodeValue::Device(device_with_pose(Pose3x4::IDENTITY)));

    let wheel = axis::wheel_axis(&cache, &left, &right);
    let roll = axis::roll_axis(&cache, &hmd);
    let differential = axis::difference_axis(&cache, &wheel, &roll);
    let scheduler = TickScheduler::new(cache.into_tick_order());

    scheduler.run_tick(&ctx(0, 0.0));
    assert!((differential.current_value().as_axis() - 0.0).abs() < 1e-9);

    hmd.set_test_input(NodeValue::Device(device_with_pose(pose_rolled(0.3))));
    scheduler.run_tick(&ctx(1, 0.0));
    assert!((differential.current_value().as_axis() - (-0.3)).abs() < 1e-9);
}

#[test]
fn resettable_axis_zeroes_on_reset_press() {
    let cache = NodeCache::new();
    let reset = button_input(false, TickState::Inactive);
    let parent = test_input("parent", NodeValue::Axis(5.0));
    let resettable = axis::resettable_axis(&cache, &reset, &parent);
    let scheduler = TickScheduler::new(cache.into_tick_order());

    scheduler.run_tick(&ctx(0, 0.0));
    assert_eq!(resettable.current_value().as_axis(), 5.0);

    set_button(&reset, true, TickState::JustPressed);
    scheduler.run_tick(&ctx(1, 0.1));
    assert_eq!(resettable.current_value().as_axis(), 0.0, "baseline snaps to the value at reset");

    parent.set_test_input(NodeValue::Axis(8.0));
    set_button(&reset, true, TickState::Active);
    scheduler.run_tick(&ctx(2, 0.2));
    assert_eq!(resettable.current_value().as_axis(), 3.0);
}

/// The flicker's `last_flicker_secs` sentinel starts effectively "forever
/// ago", so the very first tick after the button reads active also blips
/// false once — matching the original's `-1` sentinel under `time.time()`,
/// which is likewise always further in the past than any real interval.
#[test]
fn flickering_button_blips_false_once_per_interval() {
    let cache = NodeCache::new();
    let flicker = button::flickering_button(&cache, 1.0);
    let scheduler = TickScheduler::new(cache.into_tick_order());

    scheduler.run_tick(&ctx(0, 0.0));
    assert!(flicker.current_value().as_button().active, "tick 0: no prior active state yet, reads true");

    scheduler.run_tick(&ctx(1, 0.05));
    assert!(!flicker.current_value().as_button().active, "tick 1: first chance to flicker blips false");

    scheduler.run_tick(&ctx(2, 0.10));
    assert!(flicker.current_value().as_button().active, "tick 2: prev tick was the blip itself, so no check fires");

    scheduler.run_tick(&ctx(3, 0.60));
    assert!(flicker.current_value().as_button().active, "tick 3: only 0.5s since the last blip, stays true");

    scheduler.run_tick(&ctx(4, 1.10));
    assert!(!flicker.current_value().as_button().active, "tick 4: 1.05s since the last blip, flickers again");
}

#[test]
fn axis_threshold_button_compares_against_configured_comparator() {
    let cache = NodeCache::new();
    let axis_node = test_input("axis", NodeValue::Axis(0.5));
    let over = button::axis_threshold_button(&cache, &axis_node, 0.3, Comparator::GreaterThan);
    let scheduler = TickScheduler::new(cache.into_tick_order());

    scheduler.run_tick(&ctx(0, 0.0));
    assert!(over.current_value().as_button().active);

    axis_node.set_test_input(NodeValue::Axis(0.1));
    scheduler.run_tick(&ctx(1, 0.1));
    assert!(!over.current_value().as_button().active);
}

#[test]
fn deadzone_axis_clips_small_magnitudes_to_zero() {
    let cache = NodeCache::new();
    let parent = test_input("parent", NodeValue::Axis(0.02));
    let dz = axis::deadzone_axis(&cache, &parent, 0.05);
    let scheduler = TickScheduler::new(cache.into_tick_order());

    scheduler.run_tick(&ctx(0, 0.0));
    assert_eq!(dz.current_value().as_axis(), 0.0);

    parent.set_test_input(NodeValue::Axis(0.2));
    scheduler.run_tick(&ctx(1, 0.1));
    assert_eq!(dz.current_value().as_axis(), 0.2);
}

#[test]
fn push_pull_axis_accumulates_only_while_enabled() {
    let cache = NodeCache::new();
    let enable = button_input(false, TickState::Inactive);
    let parent = test_input("parent", NodeValue::Axis(0.0));
    let push_pull = axis::push_pull_axis(&cache, &enable, &parent);
    let scheduler = TickScheduler::new(cache.into_tick_order());

    scheduler.run_tick(&ctx(0, 0.0));
    assert_eq!(push_pull.current_value().as_axis(), 0.0);

    // Grabbing rebases the internal delta to zero immediately, so the first
    // pressed tick never jumps even if `parent` changed the same tick.
    set_button(&enable, true, TickState::JustPressed);
    parent.set_test_input(NodeValue::Axis(0.2));
    scheduler.run_tick(&ctx(1, 0.1));
    assert_eq!(push_pull.current_value().as_axis(), 0.0, "rebases on grab, no jump");

    parent.set_test_input(NodeValue::Axis(0.5));
    set_button(&enable, true, TickState::Active);
    scheduler.run_tick(&ctx(2, 0.2));
    assert_eq!(push_pull.current_value().as_axis(), 0.3, "accumulates the movement since grab (0.5 - 0.2)");

    set_button(&enable, false, TickState::JustUnpressed);
    scheduler.run_tick(&ctx(3, 0.3));
    assert_eq!(push_pull.current_value().as_axis(), 0.3, "freezes at the modified value once released");

    // Re-grabbing rebases again rather than jumping, then resumes
    // accumulating on top of the frozen value.
    parent.set_test_input(NodeValue::Axis(0.1));
    set_button(&enable, true, TickState::JustPressed);
    scheduler.run_tick(&ctx(4, 0.4));
    assert_eq!(push_pull.current_value().as_axis(), 0.3, "still frozen on the regrab tick itself");

    parent.set_test_input(NodeValue::Axis(0.4));
    set_button(&enable, true, TickState::Active);
    scheduler.run_tick(&ctx(5, 0.5));
    assert_eq!(push_pull.current_value().as_axis(), 0.6, "0.3 frozen + 0.3 moved since the regrab");
}
