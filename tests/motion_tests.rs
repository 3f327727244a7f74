// Host-side tests for the scroll-to-visual pipeline.
// The crate itself targets wasm, so the pure modules are included directly.

#![allow(dead_code)]
mod gates {
    include!("../src/motion/gates.rs");
}
mod spring {
    include!("../src/motion/spring.rs");
}
mod transform {
    include!("../src/motion/transform.rs");
}
mod value {
    include!("../src/motion/value.rs");
}

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use gates::{stagger_window, DirectionTracker, HysteresisGate, ScrollDirection};
use spring::{Spring, SpringConfig};
use transform::map_range;
use value::MotionValue;

#[test]
fn map_range_is_clamped_to_output_range() {
    for value in [-10.0, -0.1, 0.0, 0.25, 0.5, 0.75, 1.0, 1.1, 10.0] {
        let mapped = map_range(value, (0.0, 0.5), (1.0, 8.0));
        assert!((1.0..=8.0).contains(&mapped), "out of range at {value}");
    }
    assert_eq!(map_range(-1.0, (0.0, 0.5), (1.0, 8.0)), 1.0);
    assert_eq!(map_range(2.0, (0.0, 0.5), (1.0, 8.0)), 8.0);
}

#[test]
fn map_range_handles_descending_output() {
    assert_eq!(map_range(0.0, (0.0, 0.3), (100.0, 0.0)), 100.0);
    assert_eq!(map_range(0.15, (0.0, 0.3), (100.0, 0.0)), 50.0);
    assert_eq!(map_range(0.9, (0.0, 0.3), (100.0, 0.0)), 0.0);
}

#[test]
fn map_range_degenerate_domain_steps_at_point() {
    assert_eq!(map_range(0.4, (0.5, 0.5), (0.0, 1.0)), 0.0);
    assert_eq!(map_range(0.5, (0.5, 0.5), (0.0, 1.0)), 1.0);
    assert_eq!(map_range(0.6, (0.5, 0.5), (0.0, 1.0)), 1.0);
}

#[test]
fn direction_is_down_iff_strictly_increasing() {
    let mut tracker = DirectionTracker::new();
    assert_eq!(tracker.current(), ScrollDirection::Down);
    assert_eq!(tracker.sample(10.0), ScrollDirection::Down);
    assert_eq!(tracker.sample(25.0), ScrollDirection::Down);
    assert_eq!(tracker.sample(5.0), ScrollDirection::Up);
    // Equal consecutive samples report Up (strict greater-than default).
    assert_eq!(tracker.sample(5.0), ScrollDirection::Up);
    assert_eq!(tracker.sample(6.0), ScrollDirection::Down);
}

#[test]
fn hysteresis_sets_holds_and_clears() {
    let mut gate = HysteresisGate::new(0.9, 0.3);
    assert!(!gate.is_engaged());

    assert!(gate.update(0.95, ScrollDirection::Down));
    // Holds in the dead band regardless of direction.
    assert!(gate.update(0.5, ScrollDirection::Up));
    assert!(gate.update(0.5, ScrollDirection::Down));
    // Dropping below the engage threshold alone does not release.
    assert!(gate.update(0.35, ScrollDirection::Up));
    // Releases only below the lower threshold while moving up.
    assert!(!gate.update(0.2, ScrollDirection::Up));
    assert!(!gate.is_engaged());
}

#[test]
fn hysteresis_ignores_wrong_direction_crossings() {
    let mut gate = HysteresisGate::new(0.9, 0.3);
    // Crossing the engage threshold while moving up does not latch.
    assert!(!gate.update(0.95, ScrollDirection::Up));
    // Crossing the release threshold while moving down does not clear.
    assert!(gate.update(0.95, ScrollDirection::Down));
    assert!(gate.update(0.1, ScrollDirection::Down));
}

#[test]
fn stagger_windows_increase_with_index() {
    let mut prev_start = f64::NEG_INFINITY;
    for index in 0..4 {
        let (start, end) = stagger_window(index, 0.1, 0.1, 0.2);
        assert!(start > prev_start, "stagger not increasing at {index}");
        assert!(end > start);
        prev_start = start;
    }
    assert_eq!(stagger_window(0, 0.1, 0.1, 0.2), (0.1, 0.3));
    assert_eq!(stagger_window(3, 0.1, 0.1, 0.2), (0.4, 0.6));
}

#[test]
fn full_jump_resolves_all_gates() {
    // One sample jumps straight from 0 to fully scrolled.
    let mut tracker = DirectionTracker::new();
    let direction = tracker.sample(5000.0);
    assert_eq!(direction, ScrollDirection::Down);

    let progress = 1.0;
    assert!(progress > 0.8, "content must show");

    let bird = map_range(progress, (0.8, 1.0), (0.0, 1.0));
    assert_eq!(bird, 1.0);

    let mut finish_gate = HysteresisGate::new(0.9, 0.3);
    assert!(finish_gate.update(bird, direction));

    for index in 0..4 {
        let reveal = stagger_window(index, 0.1, 0.1, 0.2);
        assert_eq!(map_range(bird, reveal, (0.0, 1.0)), 1.0);
    }
}

#[test]
fn spring_settles_on_unit_step() {
    let mut spring = Spring::new(0.0, SpringConfig::default());
    let mut frames = 0;
    while !spring.is_settled_at(1.0) {
        spring.step(1.0, 1.0 / 60.0);
        frames += 1;
        assert!(frames < 600, "spring did not settle within 10s of frames");
    }
    assert_eq!(spring.value(), 1.0);
}

#[test]
fn spring_follower_stays_finite_and_bounded() {
    // Overdamped defaults: the follower approaches without overshooting.
    let mut spring = Spring::new(0.0, SpringConfig::default());
    let mut prev = 0.0;
    for _ in 0..600 {
        let position = spring.step(1.0, 1.0 / 60.0);
        assert!(position.is_finite());
        assert!(position >= prev - 1e-9, "follower moved backwards");
        assert!(position <= 1.0 + 1e-6, "follower overshot the target");
        prev = position;
    }
}

#[test]
fn spring_survives_a_huge_frame_gap() {
    // A backgrounded tab can hand us a multi-second dt.
    let mut spring = Spring::new(0.0, SpringConfig::default());
    let position = spring.step(1.0, 30.0);
    assert!(position.is_finite());
    assert!((0.0..=1.0 + 1e-6).contains(&position));
}

#[test]
fn motion_value_notifies_with_current_value() {
    let value = MotionValue::new(0.0_f64);
    let seen = Rc::new(Cell::new(0.0));
    let sub = {
        let seen = seen.clone();
        value.subscribe(move |v| seen.set(v))
    };
    value.set(0.42);
    assert_eq!(seen.get(), 0.42);
    assert_eq!(value.get(), 0.42);
    drop(sub);
}

#[test]
fn dropped_subscription_stops_delivery() {
    let value = MotionValue::new(0_i32);
    let count = Rc::new(Cell::new(0));
    let sub = {
        let count = count.clone();
        value.subscribe(move |_| count.set(count.get() + 1))
    };
    value.set(1);
    value.set(2);
    assert_eq!(count.get(), 2);

    drop(sub);
    value.set(3);
    assert_eq!(count.get(), 2, "listener fired after teardown");
}

#[test]
fn listener_may_drop_its_own_subscription() {
    // A one-shot listener dropping its guard mid-notify must not panic
    // or starve the other listeners.
    let value = MotionValue::new(0_i32);
    let slot: Rc<RefCell<Option<value::Subscription>>> = Rc::new(RefCell::new(None));
    let fired = Rc::new(Cell::new(0));

    let sub = {
        let slot = slot.clone();
        value.subscribe(move |_| {
            slot.borrow_mut().take();
        })
    };
    *slot.borrow_mut() = Some(sub);

    let other = {
        let fired = fired.clone();
        value.subscribe(move |_| fired.set(fired.get() + 1))
    };

    value.set(1);
    value.set(2);
    assert_eq!(fired.get(), 2);
    drop(other);
}

#[test]
fn set_if_neq_skips_redundant_writes() {
    let value = MotionValue::new(7_i32);
    let count = Rc::new(Cell::new(0));
    let _sub = {
        let count = count.clone();
        value.subscribe(move |_| count.set(count.get() + 1))
    };
    value.set_if_neq(7);
    assert_eq!(count.get(), 0);
    value.set_if_neq(8);
    assert_eq!(count.get(), 1);
}
