//! The [`Event`] type, its variant payloads and the discriminant-checked casts.
//!
//! A windowing backend constructs one [`Event`] per logical input occurrence
//! (a click, a wheel tick, a key press), fills in the shared fields and the
//! variant payload, then passes it by mutable reference through the widget
//! tree. Receivers inspect the event either by matching on [`Event::kind`] or
//! through the discriminant-checked casts ([`Event::as_pointer_event`] and
//! friends), and may set [`Event::consumed`] to stop further propagation.
//!
//! Events are single occurrences, not values: they are intentionally neither
//! `Clone` nor `Copy`. A handler that needs to retain data past the dispatch
//! call copies out the payload fields it needs.

use bitflags::bitflags;
use dpi::LogicalPosition;
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};
use std::sync::atomic::{AtomicU64, Ordering};

use crate::keyboard::{KeyboardEvent, Modifiers};

/// Discriminant identifying the concrete variant of an [`Event`].
///
/// This is a closed enumeration with stable `u32` values; external consumers
/// (and the legacy encodings in [`crate::compat`]) rely on the numeric order,
/// so new variants must only ever be appended.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[repr(u32)]
pub enum EventType {
    Unknown = 0,
    MouseDown,
    MouseMove,
    MouseUp,
    MouseCancel,
    MouseEnter,
    MouseExit,
    MouseWheel,
    ZoomGesture,
    KeyUp,
    KeyDown,
}

/// Identifier of a single event occurrence.
///
/// Each constructed [`Event`] receives a fresh id; two events never compare
/// equal by id within one process. The value is opaque — it carries no
/// ordering guarantee beyond uniqueness.
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct EventId(u64);

static NEXT_EVENT_ID: AtomicU64 = AtomicU64::new(1);

impl EventId {
    fn next() -> EventId {
        EventId(NEXT_EVENT_ID.fetch_add(1, Ordering::Relaxed))
    }
}

impl From<u64> for EventId {
    fn from(value: u64) -> Self {
        Self(value)
    }
}

impl From<EventId> for u64 {
    fn from(value: EventId) -> Self {
        value.0
    }
}

bitflags! {
    /// The set of pointer buttons held during an event.
    ///
    /// Buttons are indexed from 1 (bit 0 is unused), so a button without a
    /// named constant is representable as `ButtonState::other(index)`.
    #[derive(Default, Debug, Clone, Copy, PartialEq, Eq, Hash)]
    #[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
    pub struct ButtonState: u32 {
        /// The primary button, usually the left one.
        const LEFT = 1 << 1;
        /// The middle button or wheel click.
        const MIDDLE = 1 << 2;
        /// The secondary button, usually the right one.
        const RIGHT = 1 << 3;
        const FOURTH = 1 << 4;
        const FIFTH = 1 << 5;
    }
}

impl ButtonState {
    /// State with only the button at `index` held (1 = left, 2 = middle, …).
    pub fn other(index: u32) -> ButtonState {
        ButtonState::from_bits_retain(1 << index)
    }

    /// Whether exactly the left button is held.
    pub fn is_left(&self) -> bool {
        *self == ButtonState::LEFT
    }

    /// Whether exactly the middle button is held.
    pub fn is_middle(&self) -> bool {
        *self == ButtonState::MIDDLE
    }

    /// Whether exactly the right button is held.
    pub fn is_right(&self) -> bool {
        *self == ButtonState::RIGHT
    }

    /// Whether exactly the button at `index` is held.
    pub fn is_other(&self, index: u32) -> bool {
        self.bits() == 1 << index
    }
}

/// Fields shared by every event that reports a pointer location: enter, exit
/// and the down/move/up family (through [`PointerButtonEvent`]).
///
/// The position is in device-independent coordinates relative to the top-left
/// corner of the receiving surface.
#[derive(Debug, Default, Clone, Copy, PartialEq)]
pub struct PointerEvent {
    pub position: LogicalPosition<f64>,
    pub buttons: ButtonState,
    pub modifiers: Modifiers,
}

impl PointerEvent {
    pub fn new(position: LogicalPosition<f64>, buttons: ButtonState) -> PointerEvent {
        PointerEvent { position, buttons, modifiers: Modifiers::empty() }
    }
}

/// Payload of the pointer down/move/up family.
///
/// Move and up events reuse the down-event shape so that a press-drag-release
/// sequence can be inspected uniformly; `click_count` and the follow-up
/// suppression flag are meaningful for down events and carried untouched by
/// the rest of the family.
#[derive(Debug, Default, Clone, Copy, PartialEq)]
pub struct PointerButtonEvent {
    pub pointer: PointerEvent,
    /// Number of consecutive clicks at this position; 2 for a double click.
    /// Zero when the producer does not track click chains.
    pub click_count: u32,
    ignore_follow_ups: bool,
}

impl PointerButtonEvent {
    pub fn new(position: LogicalPosition<f64>, buttons: ButtonState) -> PointerButtonEvent {
        PointerButtonEvent {
            pointer: PointerEvent::new(position, buttons),
            click_count: 0,
            ignore_follow_ups: false,
        }
    }

    /// Whether the receiver of a down event asked to suppress the follow-up
    /// move and up events of this press.
    pub fn ignore_follow_up_events(&self) -> bool {
        self.ignore_follow_ups
    }

    /// Request that the move and up events following this down event are not
    /// dispatched to the usual receivers.
    ///
    /// Independent of [`Event::consumed`]: setting or clearing this flag never
    /// changes whether the event counts as handled.
    pub fn set_ignore_follow_up_events(&mut self, state: bool) {
        self.ignore_follow_ups = state;
    }
}

bitflags! {
    /// Flags qualifying the deltas of a [`WheelEvent`].
    #[derive(Default, Debug, Clone, Copy, PartialEq, Eq, Hash)]
    #[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
    pub struct WheelFlags: u32 {
        /// `delta_x` and `delta_y` are inverted relative to the device.
        const DIRECTION_INVERTED_FROM_DEVICE = 1 << 0;
        /// The deltas are precise pixel movement scaled by 0.1: dividing by
        /// 0.1 yields exact pixels. Typically set for touchpad scrolling.
        const PRECISE_DELTAS = 1 << 1;
    }
}

/// A mouse wheel or touchpad scroll event.
///
/// Positive deltas scroll right and down.
#[derive(Debug, Default, Clone, Copy, PartialEq)]
pub struct WheelEvent {
    pub position: LogicalPosition<f64>,
    pub modifiers: Modifiers,
    pub delta_x: f64,
    pub delta_y: f64,
    pub flags: WheelFlags,
}

/// Phase of a continuous gesture.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum GesturePhase {
    #[default]
    Unknown,
    Begin,
    Changed,
    End,
}

/// A two-finger pinch gesture event.
#[derive(Debug, Default, Clone, Copy, PartialEq)]
pub struct ZoomGestureEvent {
    pub position: LogicalPosition<f64>,
    pub modifiers: Modifiers,
    pub phase: GesturePhase,
    /// Accumulated magnification factor; greater than 1 zooms in.
    pub zoom: f64,
}

/// The variant payload of an [`Event`].
///
/// The enum tag is the runtime discriminant; [`EventKind::event_type`] maps
/// it to the stable [`EventType`] encoding.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum EventKind {
    /// Placeholder carried by the [`Event::default`] "no event" sentinel.
    Unknown,
    PointerDown(PointerButtonEvent),
    PointerMove(PointerButtonEvent),
    PointerUp(PointerButtonEvent),
    /// The platform interrupted the current pointer interaction (for example
    /// the window lost focus mid-drag). Carries no pointer state.
    PointerCancel,
    PointerEnter(PointerEvent),
    PointerExit(PointerEvent),
    Wheel(WheelEvent),
    ZoomGesture(ZoomGestureEvent),
    KeyUp(KeyboardEvent),
    KeyDown(KeyboardEvent),
}

impl EventKind {
    /// The stable discriminant for this payload.
    pub fn event_type(&self) -> EventType {
        match self {
            EventKind::Unknown => EventType::Unknown,
            EventKind::PointerDown(_) => EventType::MouseDown,
            EventKind::PointerMove(_) => EventType::MouseMove,
            EventKind::PointerUp(_) => EventType::MouseUp,
            EventKind::PointerCancel => EventType::MouseCancel,
            EventKind::PointerEnter(_) => EventType::MouseEnter,
            EventKind::PointerExit(_) => EventType::MouseExit,
            EventKind::Wheel(_) => EventType::MouseWheel,
            EventKind::ZoomGesture(_) => EventType::ZoomGesture,
            EventKind::KeyUp(_) => EventType::KeyUp,
            EventKind::KeyDown(_) => EventType::KeyDown,
        }
    }
}

/// A single input occurrence, addressed to whichever receiver chain the
/// dispatch loop walks.
///
/// The event owns no resources and lives on the stack of the dispatching
/// call; nothing here outlives a dispatch. All receivers see the same event
/// through a mutable reference, strictly one after another.
#[derive(Debug, PartialEq)]
pub struct Event {
    /// Unique id of this occurrence, assigned at construction.
    pub id: EventId,
    /// Producer-assigned monotonic timestamp. Zero when the producer has no
    /// clock; comparable only between events of one producer.
    pub timestamp: u64,
    /// Set by a receiver to claim the event. Once true, the dispatch loop
    /// stops forwarding the event to further receivers. This flag only
    /// records the claim — the stopping itself is the loop's job.
    pub consumed: bool,
    pub kind: EventKind,
}

impl Default for Event {
    /// The distinguished "no event" sentinel: an [`EventKind::Unknown`] event
    /// for call sites that need a non-null placeholder.
    fn default() -> Event {
        Event::new(EventKind::Unknown)
    }
}

impl Event {
    /// Creates an unconsumed event with a fresh [`EventId`] and zero
    /// timestamp.
    pub fn new(kind: EventKind) -> Event {
        Event { id: EventId::next(), timestamp: 0, consumed: false, kind }
    }

    /// A pointer button was pressed at `position`.
    pub fn pointer_down(position: LogicalPosition<f64>, buttons: ButtonState) -> Event {
        Event::new(EventKind::PointerDown(PointerButtonEvent::new(position, buttons)))
    }

    /// The pointer moved to `position` with `buttons` held.
    pub fn pointer_move(position: LogicalPosition<f64>, buttons: ButtonState) -> Event {
        Event::new(EventKind::PointerMove(PointerButtonEvent::new(position, buttons)))
    }

    /// A pointer button was released at `position`.
    pub fn pointer_up(position: LogicalPosition<f64>, buttons: ButtonState) -> Event {
        Event::new(EventKind::PointerUp(PointerButtonEvent::new(position, buttons)))
    }

    /// The pointer entered the receiving surface with the given state.
    pub fn pointer_enter(pointer: PointerEvent) -> Event {
        Event::new(EventKind::PointerEnter(pointer))
    }

    /// The pointer left the receiving surface with the given state.
    pub fn pointer_exit(pointer: PointerEvent) -> Event {
        Event::new(EventKind::PointerExit(pointer))
    }

    /// The current pointer interaction was interrupted.
    pub fn pointer_cancel() -> Event {
        Event::new(EventKind::PointerCancel)
    }

    pub fn wheel(position: LogicalPosition<f64>, delta_x: f64, delta_y: f64) -> Event {
        Event::new(EventKind::Wheel(WheelEvent { position, delta_x, delta_y, ..Default::default() }))
    }

    pub fn zoom_gesture(position: LogicalPosition<f64>, phase: GesturePhase, zoom: f64) -> Event {
        Event::new(EventKind::ZoomGesture(ZoomGestureEvent {
            position,
            phase,
            zoom,
            ..Default::default()
        }))
    }

    pub fn key_down(key: KeyboardEvent) -> Event {
        Event::new(EventKind::KeyDown(key))
    }

    pub fn key_up(key: KeyboardEvent) -> Event {
        Event::new(EventKind::KeyUp(key))
    }

    /// The stable discriminant of this event.
    pub fn event_type(&self) -> EventType {
        self.kind.event_type()
    }

    /// Clears the consumption flag, making the event dispatchable again.
    pub fn reset_consumed(&mut self) {
        self.consumed = false;
    }

    /// The pointer location, for events that report one.
    ///
    /// Accepted discriminants: `MouseDown`, `MouseMove`, `MouseUp`,
    /// `MouseEnter`, `MouseExit`, `MouseWheel`, `ZoomGesture`.
    pub fn position(&self) -> Option<LogicalPosition<f64>> {
        match &self.kind {
            EventKind::PointerDown(e) | EventKind::PointerMove(e) | EventKind::PointerUp(e) => {
                Some(e.pointer.position)
            }
            EventKind::PointerEnter(e) | EventKind::PointerExit(e) => Some(e.position),
            EventKind::Wheel(e) => Some(e.position),
            EventKind::ZoomGesture(e) => Some(e.position),
            _ => None,
        }
    }

    /// Mutable access to the pointer location; same accepted discriminants as
    /// [`Event::position`].
    pub fn position_mut(&mut self) -> Option<&mut LogicalPosition<f64>> {
        match &mut self.kind {
            EventKind::PointerDown(e) | EventKind::PointerMove(e) | EventKind::PointerUp(e) => {
                Some(&mut e.pointer.position)
            }
            EventKind::PointerEnter(e) | EventKind::PointerExit(e) => Some(&mut e.position),
            EventKind::Wheel(e) => Some(&mut e.position),
            EventKind::ZoomGesture(e) => Some(&mut e.position),
            _ => None,
        }
    }

    /// The modifier state, for the modifier-event family.
    ///
    /// Accepted discriminants: `KeyDown`, `KeyUp`, `MouseWheel`, `MouseDown`,
    /// `MouseMove`, `MouseUp`. Enter, exit and gesture payloads carry
    /// modifier state too, but are not part of this family — read them
    /// through [`Event::as_pointer_event`] or [`Event::kind`].
    pub fn modifiers(&self) -> Option<Modifiers> {
        match &self.kind {
            EventKind::KeyDown(e) | EventKind::KeyUp(e) => Some(e.modifiers),
            EventKind::Wheel(e) => Some(e.modifiers),
            EventKind::PointerDown(e) | EventKind::PointerMove(e) | EventKind::PointerUp(e) => {
                Some(e.pointer.modifiers)
            }
            _ => None,
        }
    }

    /// Mutable access to the modifier state; same accepted discriminants as
    /// [`Event::modifiers`].
    pub fn modifiers_mut(&mut self) -> Option<&mut Modifiers> {
        match &mut self.kind {
            EventKind::KeyDown(e) | EventKind::KeyUp(e) => Some(&mut e.modifiers),
            EventKind::Wheel(e) => Some(&mut e.modifiers),
            EventKind::PointerDown(e) | EventKind::PointerMove(e) | EventKind::PointerUp(e) => {
                Some(&mut e.pointer.modifiers)
            }
            _ => None,
        }
    }

    /// The pointer state shared by down, move, up, enter and exit events.
    pub fn as_pointer_event(&self) -> Option<&PointerEvent> {
        match &self.kind {
            EventKind::PointerDown(e) | EventKind::PointerMove(e) | EventKind::PointerUp(e) => {
                Some(&e.pointer)
            }
            EventKind::PointerEnter(e) | EventKind::PointerExit(e) => Some(e),
            _ => None,
        }
    }

    /// Mutable form of [`Event::as_pointer_event`].
    pub fn as_pointer_event_mut(&mut self) -> Option<&mut PointerEvent> {
        match &mut self.kind {
            EventKind::PointerDown(e) | EventKind::PointerMove(e) | EventKind::PointerUp(e) => {
                Some(&mut e.pointer)
            }
            EventKind::PointerEnter(e) | EventKind::PointerExit(e) => Some(e),
            _ => None,
        }
    }

    /// The down/move/up family payload.
    pub fn as_pointer_button_event(&self) -> Option<&PointerButtonEvent> {
        match &self.kind {
            EventKind::PointerDown(e) | EventKind::PointerMove(e) | EventKind::PointerUp(e) => {
                Some(e)
            }
            _ => None,
        }
    }

    /// Mutable form of [`Event::as_pointer_button_event`].
    pub fn as_pointer_button_event_mut(&mut self) -> Option<&mut PointerButtonEvent> {
        match &mut self.kind {
            EventKind::PointerDown(e) | EventKind::PointerMove(e) | EventKind::PointerUp(e) => {
                Some(e)
            }
            _ => None,
        }
    }

    /// The keyboard payload of a `KeyDown` or `KeyUp` event.
    pub fn as_keyboard_event(&self) -> Option<&KeyboardEvent> {
        match &self.kind {
            EventKind::KeyDown(e) | EventKind::KeyUp(e) => Some(e),
            _ => None,
        }
    }

    /// Mutable form of [`Event::as_keyboard_event`].
    pub fn as_keyboard_event_mut(&mut self) -> Option<&mut KeyboardEvent> {
        match &mut self.kind {
            EventKind::KeyDown(e) | EventKind::KeyUp(e) => Some(e),
            _ => None,
        }
    }

    /// Like [`Event::as_pointer_event`], but the caller vouches for the
    /// discriminant.
    ///
    /// # Panics
    ///
    /// Panics if the event is not in the pointer family. Only call this
    /// immediately after establishing the discriminant, e.g. in a `match` arm
    /// on [`Event::event_type`].
    pub fn expect_pointer_event(&self) -> &PointerEvent {
        match self.as_pointer_event() {
            Some(e) => e,
            None => panic!("not a pointer event: {:?}", self.event_type()),
        }
    }

    /// Mutable form of [`Event::expect_pointer_event`].
    ///
    /// # Panics
    ///
    /// Panics if the event is not in the pointer family.
    pub fn expect_pointer_event_mut(&mut self) -> &mut PointerEvent {
        let ty = self.event_type();
        match self.as_pointer_event_mut() {
            Some(e) => e,
            None => panic!("not a pointer event: {ty:?}"),
        }
    }

    /// Like [`Event::as_pointer_button_event`], but the caller vouches for
    /// the discriminant.
    ///
    /// # Panics
    ///
    /// Panics if the event is not a down, move or up event.
    pub fn expect_pointer_button_event(&self) -> &PointerButtonEvent {
        match self.as_pointer_button_event() {
            Some(e) => e,
            None => panic!("not a pointer button event: {:?}", self.event_type()),
        }
    }

    /// Mutable form of [`Event::expect_pointer_button_event`].
    ///
    /// # Panics
    ///
    /// Panics if the event is not a down, move or up event.
    pub fn expect_pointer_button_event_mut(&mut self) -> &mut PointerButtonEvent {
        let ty = self.event_type();
        match self.as_pointer_button_event_mut() {
            Some(e) => e,
            None => panic!("not a pointer button event: {ty:?}"),
        }
    }

    /// Like [`Event::as_keyboard_event`], but the caller vouches for the
    /// discriminant.
    ///
    /// # Panics
    ///
    /// Panics if the event is not a `KeyDown` or `KeyUp` event.
    pub fn expect_keyboard_event(&self) -> &KeyboardEvent {
        match self.as_keyboard_event() {
            Some(e) => e,
            None => panic!("not a keyboard event: {:?}", self.event_type()),
        }
    }

    /// Mutable form of [`Event::expect_keyboard_event`].
    ///
    /// # Panics
    ///
    /// Panics if the event is not a `KeyDown` or `KeyUp` event.
    pub fn expect_keyboard_event_mut(&mut self) -> &mut KeyboardEvent {
        let ty = self.event_type();
        match self.as_keyboard_event_mut() {
            Some(e) => e,
            None => panic!("not a keyboard event: {ty:?}"),
        }
    }

    /// The wheel payload; the caller vouches for the discriminant.
    ///
    /// # Panics
    ///
    /// Panics if the event is not a `MouseWheel` event.
    pub fn expect_wheel_event(&self) -> &WheelEvent {
        match &self.kind {
            EventKind::Wheel(e) => e,
            _ => panic!("not a wheel event: {:?}", self.event_type()),
        }
    }

    /// Mutable form of [`Event::expect_wheel_event`].
    ///
    /// # Panics
    ///
    /// Panics if the event is not a `MouseWheel` event.
    pub fn expect_wheel_event_mut(&mut self) -> &mut WheelEvent {
        let ty = self.event_type();
        match &mut self.kind {
            EventKind::Wheel(e) => e,
            _ => panic!("not a wheel event: {ty:?}"),
        }
    }

    /// The zoom gesture payload; the caller vouches for the discriminant.
    ///
    /// # Panics
    ///
    /// Panics if the event is not a `ZoomGesture` event.
    pub fn expect_zoom_gesture_event(&self) -> &ZoomGestureEvent {
        match &self.kind {
            EventKind::ZoomGesture(e) => e,
            _ => panic!("not a zoom gesture event: {:?}", self.event_type()),
        }
    }

    /// Mutable form of [`Event::expect_zoom_gesture_event`].
    ///
    /// # Panics
    ///
    /// Panics if the event is not a `ZoomGesture` event.
    pub fn expect_zoom_gesture_event_mut(&mut self) -> &mut ZoomGestureEvent {
        let ty = self.event_type();
        match &mut self.kind {
            EventKind::ZoomGesture(e) => e,
            _ => panic!("not a zoom gesture event: {ty:?}"),
        }
    }
}
