//! Bridging to the legacy flat button-state and key-code encodings.
//!
//! Older call sites describe an input occurrence as one flat bitmask mixing
//! pointer buttons and modifier keys, and describe key presses as a packed
//! single-byte key code. The conversions here fold the structured event
//! types into those encodings. They are total: anything without a legacy
//! representation degrades to a documented sentinel instead of failing.

use bitflags::bitflags;

use crate::event::{ButtonState, Event};
use crate::keyboard::{KeyboardEvent, Modifiers, VirtualKey};

bitflags! {
    /// The legacy flat mask mixing pointer buttons, modifier keys and the
    /// derived double-click marker.
    #[derive(Default, Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct LegacyButtonState: u32 {
        /// Left mouse button.
        const LBUTTON = 1 << 0;
        /// Middle mouse button.
        const MBUTTON = 1 << 1;
        /// Right mouse button.
        const RBUTTON = 1 << 2;
        const SHIFT = 1 << 3;
        const CONTROL = 1 << 4;
        const ALT = 1 << 5;
        /// Present in the encoding but never produced by the folds here: the
        /// legacy modifier fold predates the super/control split and has no
        /// source for this bit.
        const SUPER = 1 << 6;
        const BUTTON4 = 1 << 7;
        const BUTTON5 = 1 << 8;
        /// Set when the originating down event had a click count above one.
        const DOUBLE_CLICK = 1 << 9;
    }
}

impl From<Modifiers> for LegacyButtonState {
    /// Folds modifier keys into the legacy mask.
    ///
    /// Only shift, control and alt have legacy bits assigned by this fold;
    /// [`Modifiers::SUPER`] is dropped.
    fn from(modifiers: Modifiers) -> LegacyButtonState {
        let mut state = LegacyButtonState::empty();
        if modifiers.control_key() {
            state |= LegacyButtonState::CONTROL;
        }
        if modifiers.shift_key() {
            state |= LegacyButtonState::SHIFT;
        }
        if modifiers.alt_key() {
            state |= LegacyButtonState::ALT;
        }
        state
    }
}

impl LegacyButtonState {
    /// Folds an event's buttons, modifiers and click count into the legacy
    /// mask.
    ///
    /// Pointer events contribute their button bits and, for the down/move/up
    /// family, [`LegacyButtonState::DOUBLE_CLICK`] when the click count is
    /// above one. Events outside the pointer family contribute their
    /// modifier state only; events without modifier state yield an empty
    /// mask.
    pub fn from_event(event: &Event) -> LegacyButtonState {
        let mut state = LegacyButtonState::empty();
        if let Some(pointer) = event.as_pointer_event() {
            state |= LegacyButtonState::from(pointer.modifiers);
            if pointer.buttons.contains(ButtonState::LEFT) {
                state |= LegacyButtonState::LBUTTON;
            }
            if pointer.buttons.contains(ButtonState::RIGHT) {
                state |= LegacyButtonState::RBUTTON;
            }
            if pointer.buttons.contains(ButtonState::MIDDLE) {
                state |= LegacyButtonState::MBUTTON;
            }
            if pointer.buttons.contains(ButtonState::FOURTH) {
                state |= LegacyButtonState::BUTTON4;
            }
            if pointer.buttons.contains(ButtonState::FIFTH) {
                state |= LegacyButtonState::BUTTON5;
            }
            if let Some(button_event) = event.as_pointer_button_event() {
                if button_event.click_count > 1 {
                    state |= LegacyButtonState::DOUBLE_CLICK;
                }
            }
        } else if let Some(modifiers) = event.modifiers() {
            state |= LegacyButtonState::from(modifiers);
        }
        state
    }
}

bitflags! {
    /// Modifier bits of the packed legacy key code.
    #[derive(Default, Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct LegacyModifiers: u8 {
        const SHIFT = 1 << 0;
        const ALTERNATE = 1 << 1;
        const COMMAND = 1 << 2;
        const CONTROL = 1 << 3;
    }
}

/// The packed legacy key code: a character, a single-byte virtual key and
/// the legacy modifier bits.
#[derive(Default, Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct LegacyKeyCode {
    /// UTF-16 code unit, 0 when the key produces no character.
    pub character: u16,
    /// Single-byte virtual key, 0 when unmapped. See [`legacy_virtual_key`].
    pub virt: u8,
    pub modifier: LegacyModifiers,
}

/// Maps a [`VirtualKey`] to its single-byte legacy value.
///
/// Returns 0 for any key outside the legacy range. The mapping is the key's
/// stable discriminant, which is why the [`VirtualKey`] order must never
/// change.
pub fn legacy_virtual_key(key: VirtualKey) -> u8 {
    let raw = key as u32;
    if raw <= VirtualKey::Equals as u32 {
        raw as u8
    } else {
        0
    }
}

impl From<&KeyboardEvent> for LegacyKeyCode {
    fn from(event: &KeyboardEvent) -> LegacyKeyCode {
        let mut modifier = LegacyModifiers::empty();
        if event.modifiers.shift_key() {
            modifier |= LegacyModifiers::SHIFT;
        }
        if event.modifiers.alt_key() {
            modifier |= LegacyModifiers::ALTERNATE;
        }
        if event.modifiers.control_key() {
            modifier |= LegacyModifiers::CONTROL;
        }
        if event.modifiers.super_key() {
            modifier |= LegacyModifiers::COMMAND;
        }
        LegacyKeyCode { character: event.character, virt: legacy_virtual_key(event.virt), modifier }
    }
}
