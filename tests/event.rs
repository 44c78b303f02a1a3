use dpi::LogicalPosition;
use gui_events::event::{ButtonState, Event, EventType, GesturePhase, PointerEvent, WheelFlags};
use gui_events::keyboard::{KeyboardEvent, Modifiers, VirtualKey};

const ALL_TYPES: [EventType; 11] = [
    EventType::Unknown,
    EventType::MouseDown,
    EventType::MouseMove,
    EventType::MouseUp,
    EventType::MouseCancel,
    EventType::MouseEnter,
    EventType::MouseExit,
    EventType::MouseWheel,
    EventType::ZoomGesture,
    EventType::KeyUp,
    EventType::KeyDown,
];

/// One representative event per discriminant.
fn event_of(ty: EventType) -> Event {
    let pos = LogicalPosition::new(1.0, 2.0);
    match ty {
        EventType::Unknown => Event::default(),
        EventType::MouseDown => Event::pointer_down(pos, ButtonState::LEFT),
        EventType::MouseMove => Event::pointer_move(pos, ButtonState::LEFT),
        EventType::MouseUp => Event::pointer_up(pos, ButtonState::LEFT),
        EventType::MouseCancel => Event::pointer_cancel(),
        EventType::MouseEnter => Event::pointer_enter(PointerEvent::new(pos, ButtonState::empty())),
        EventType::MouseExit => Event::pointer_exit(PointerEvent::new(pos, ButtonState::empty())),
        EventType::MouseWheel => Event::wheel(pos, 0.0, 1.0),
        EventType::ZoomGesture => Event::zoom_gesture(pos, GesturePhase::Begin, 1.5),
        EventType::KeyUp => Event::key_up(KeyboardEvent::from_virtual_key(VirtualKey::Escape)),
        EventType::KeyDown => Event::key_down(KeyboardEvent::from_virtual_key(VirtualKey::Escape)),
    }
}

macro_rules! foreach_event {
    ($closure:expr) => {{
        #[allow(unused_mut)]
        let mut x = $closure;
        for ty in ALL_TYPES {
            x(event_of(ty));
        }
    }};
}

#[test]
fn discriminant_fixed_at_construction() {
    for ty in ALL_TYPES {
        assert_eq!(event_of(ty).event_type(), ty);
    }
}

#[test]
fn every_event_starts_unconsumed() {
    foreach_event!(|event: Event| {
        assert!(!event.consumed);
    });
}

#[test]
fn ids_are_unique_across_variants() {
    let mut seen = std::collections::HashSet::new();
    foreach_event!(|event: Event| {
        assert!(seen.insert(u64::from(event.id)));
    });
}

#[test]
fn debug_coverage() {
    foreach_event!(|event: Event| {
        let _ = format!("{event:?}");
    });
}

// The accepted discriminant set of every query cast, checked over the whole
// closed enumeration.
#[test]
fn query_cast_table() {
    use EventType::*;

    let position_set =
        [MouseDown, MouseMove, MouseUp, MouseEnter, MouseExit, MouseWheel, ZoomGesture];
    let pointer_set = [MouseDown, MouseMove, MouseUp, MouseEnter, MouseExit];
    let pointer_button_set = [MouseDown, MouseMove, MouseUp];
    let modifier_set = [KeyDown, KeyUp, MouseWheel, MouseDown, MouseMove, MouseUp];
    let keyboard_set = [KeyDown, KeyUp];

    for ty in ALL_TYPES {
        let mut event = event_of(ty);

        assert_eq!(event.position().is_some(), position_set.contains(&ty), "position({ty:?})");
        assert_eq!(
            event.as_pointer_event().is_some(),
            pointer_set.contains(&ty),
            "as_pointer_event({ty:?})"
        );
        assert_eq!(
            event.as_pointer_button_event().is_some(),
            pointer_button_set.contains(&ty),
            "as_pointer_button_event({ty:?})"
        );
        assert_eq!(event.modifiers().is_some(), modifier_set.contains(&ty), "modifiers({ty:?})");
        assert_eq!(
            event.as_keyboard_event().is_some(),
            keyboard_set.contains(&ty),
            "as_keyboard_event({ty:?})"
        );

        // The mutable twins accept exactly the same discriminants.
        assert_eq!(event.position_mut().is_some(), position_set.contains(&ty));
        assert_eq!(event.as_pointer_event_mut().is_some(), pointer_set.contains(&ty));
        assert_eq!(event.as_pointer_button_event_mut().is_some(), pointer_button_set.contains(&ty));
        assert_eq!(event.modifiers_mut().is_some(), modifier_set.contains(&ty));
        assert_eq!(event.as_keyboard_event_mut().is_some(), keyboard_set.contains(&ty));
    }
}

#[test]
fn round_trip_through_base_reference() {
    let mut wheel = Event::wheel(LogicalPosition::new(3.0, 4.0), -2.0, 6.0);
    wheel.expect_wheel_event_mut().flags = WheelFlags::DIRECTION_INVERTED_FROM_DEVICE;
    wheel.modifiers_mut().unwrap().insert(Modifiers::CONTROL);

    fn dispatch(event: &mut Event) {
        let wheel = event.expect_wheel_event();
        assert_eq!(wheel.position, LogicalPosition::new(3.0, 4.0));
        assert_eq!(wheel.delta_x, -2.0);
        assert_eq!(wheel.delta_y, 6.0);
        assert_eq!(wheel.flags, WheelFlags::DIRECTION_INVERTED_FROM_DEVICE);
        assert!(wheel.modifiers.control_key());
        event.consumed = true;
    }

    dispatch(&mut wheel);
    assert!(wheel.consumed);
}

#[test]
fn keyboard_round_trip() {
    let mut key = KeyboardEvent::from_virtual_key(VirtualKey::Return);
    key.modifiers = Modifiers::SUPER;
    key.is_repeat = true;
    let event = Event::key_down(key);

    assert_eq!(event.event_type(), EventType::KeyDown);
    let read_back = event.expect_keyboard_event();
    assert_eq!(*read_back, key);
    assert_eq!(event.modifiers(), Some(Modifiers::SUPER));
}

// The §"pointer down" walkthrough: a backend-constructed down event examined
// and claimed by a receiver chain.
#[test]
fn pointer_down_dispatch_scenario() {
    let mut event = Event::pointer_down(LogicalPosition::new(10.0, 20.0), ButtonState::LEFT);
    event.modifiers_mut().unwrap().insert(Modifiers::SHIFT);

    assert!(event.as_pointer_event().is_some());
    assert!(event.as_keyboard_event().is_none());

    let down = event.expect_pointer_button_event();
    assert_eq!(down.click_count, 0);
    assert_eq!(down.pointer.position, LogicalPosition::new(10.0, 20.0));
    assert!(down.pointer.buttons.is_left());
    assert_eq!(down.pointer.modifiers, Modifiers::SHIFT);

    event.consumed = true;
    assert!(event.consumed);
}

#[test]
fn follow_up_suppression_survives_consumption_changes() {
    let mut event = Event::pointer_down(LogicalPosition::new(0.0, 0.0), ButtonState::LEFT);

    event.expect_pointer_button_event_mut().set_ignore_follow_up_events(true);
    assert!(!event.consumed);

    event.consumed = true;
    assert!(event.expect_pointer_button_event().ignore_follow_up_events());

    event.reset_consumed();
    assert!(event.expect_pointer_button_event().ignore_follow_up_events());
}

#[test]
fn move_and_up_carry_the_down_shape() {
    let mut event = Event::pointer_move(LogicalPosition::new(5.0, 5.0), ButtonState::LEFT);
    {
        let button_event = event.expect_pointer_button_event_mut();
        button_event.click_count = 1;
        button_event.set_ignore_follow_up_events(true);
    }
    assert_eq!(event.event_type(), EventType::MouseMove);
    assert_eq!(event.expect_pointer_button_event().click_count, 1);
    assert!(event.expect_pointer_button_event().ignore_follow_up_events());
}

#[test]
fn enter_exit_preserve_pointer_state() {
    let mut pointer = PointerEvent::new(LogicalPosition::new(8.0, 9.0), ButtonState::RIGHT);
    pointer.modifiers = Modifiers::ALT;

    let enter = Event::pointer_enter(pointer);
    assert_eq!(enter.event_type(), EventType::MouseEnter);
    assert_eq!(*enter.expect_pointer_event(), pointer);
    // Enter and exit are outside the modifier-event family even though their
    // payload carries modifier state.
    assert_eq!(enter.modifiers(), None);

    let exit = Event::pointer_exit(pointer);
    assert_eq!(exit.event_type(), EventType::MouseExit);
    assert_eq!(*exit.expect_pointer_event(), pointer);
}

#[test]
fn zoom_gesture_payload() {
    let event = Event::zoom_gesture(LogicalPosition::new(2.0, 3.0), GesturePhase::Changed, 1.25);
    let zoom = event.expect_zoom_gesture_event();
    assert_eq!(zoom.phase, GesturePhase::Changed);
    assert_eq!(zoom.zoom, 1.25);
    assert_eq!(event.position(), Some(LogicalPosition::new(2.0, 3.0)));
    assert_eq!(event.modifiers(), None);
}

#[test]
fn stable_discriminant_values() {
    assert_eq!(EventType::Unknown as u32, 0);
    assert_eq!(EventType::MouseDown as u32, 1);
    assert_eq!(EventType::MouseMove as u32, 2);
    assert_eq!(EventType::MouseUp as u32, 3);
    assert_eq!(EventType::MouseCancel as u32, 4);
    assert_eq!(EventType::MouseEnter as u32, 5);
    assert_eq!(EventType::MouseExit as u32, 6);
    assert_eq!(EventType::MouseWheel as u32, 7);
    assert_eq!(EventType::ZoomGesture as u32, 8);
    assert_eq!(EventType::KeyUp as u32, 9);
    assert_eq!(EventType::KeyDown as u32, 10);
}

#[test]
#[should_panic]
fn expect_pointer_event_panics_on_keyboard() {
    let event = Event::key_down(KeyboardEvent::default());
    let _ = event.expect_pointer_event();
}

#[test]
#[should_panic]
fn expect_pointer_button_event_panics_on_enter() {
    let event = Event::pointer_enter(PointerEvent::default());
    let _ = event.expect_pointer_button_event();
}

#[test]
#[should_panic]
fn expect_wheel_event_panics_on_sentinel() {
    let event = Event::default();
    let _ = event.expect_wheel_event();
}

#[test]
#[should_panic]
fn expect_zoom_gesture_event_panics_on_wheel() {
    let event = Event::wheel(LogicalPosition::new(0.0, 0.0), 1.0, 0.0);
    let _ = event.expect_zoom_gesture_event();
}
