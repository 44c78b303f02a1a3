//! Types related to the keyboard: modifier state, virtual keys and the
//! keyboard event payload.

use bitflags::bitflags;
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

bitflags! {
    /// The set of modifier keys held during an event.
    ///
    /// Each flag represents a modifier and is set if this modifier is active.
    #[derive(Default, Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
    #[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
    pub struct Modifiers: u32 {
        /// The left or right shift key.
        const SHIFT = 1 << 0;
        /// The alternate (option) key.
        const ALT = 1 << 1;
        /// The command key on macOS and the control key elsewhere.
        const CONTROL = 1 << 2;
        /// The control key on macOS, the windows key on Windows and the super
        /// key elsewhere.
        const SUPER = 1 << 3;
    }
}

impl Modifiers {
    /// Returns whether the shift modifier is active.
    pub fn shift_key(&self) -> bool {
        self.intersects(Self::SHIFT)
    }

    /// Returns whether the alt modifier is active.
    pub fn alt_key(&self) -> bool {
        self.intersects(Self::ALT)
    }

    /// Returns whether the control modifier is active.
    pub fn control_key(&self) -> bool {
        self.intersects(Self::CONTROL)
    }

    /// Returns whether the super modifier is active.
    pub fn super_key(&self) -> bool {
        self.intersects(Self::SUPER)
    }
}

/// Symbolic name for a non-character key.
///
/// This is a closed enumeration with stable `u32` values 0 through
/// [`VirtualKey::Equals`]; the numeric order is relied upon by the
/// single-byte legacy encoding in [`crate::compat`], so variants must only
/// ever be appended.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[repr(u32)]
pub enum VirtualKey {
    /// No virtual key; the event is described by its character alone.
    #[default]
    None = 0,

    /// The backspace key.
    Back,
    Tab,
    Clear,
    Return,
    Pause,
    Escape,
    Space,
    /// The "next" (page-forward) key on legacy keyboards.
    Next,
    End,
    Home,

    Left,
    Up,
    Right,
    Down,
    PageUp,
    PageDown,

    Select,
    Print,
    /// The enter key on the numeric keypad.
    Enter,
    /// Print screen.
    Snapshot,
    Insert,
    Delete,
    Help,

    NumPad0,
    NumPad1,
    NumPad2,
    NumPad3,
    NumPad4,
    NumPad5,
    NumPad6,
    NumPad7,
    NumPad8,
    NumPad9,

    Multiply,
    Add,
    Separator,
    Subtract,
    Decimal,
    Divide,
    F1,
    F2,
    F3,
    F4,
    F5,
    F6,
    F7,
    F8,
    F9,
    F10,
    F11,
    F12,
    NumLock,
    Scroll,

    ShiftModifier,
    ControlModifier,
    AltModifier,

    Equals,
}

/// Payload of a `KeyDown` or `KeyUp` event.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct KeyboardEvent {
    /// Modifier keys held during the event.
    pub modifiers: Modifiers,
    /// The UTF-16 code unit produced by the key, or 0 when the key produces
    /// no character (arrows, function keys, …).
    pub character: u16,
    /// Symbolic key name, [`VirtualKey::None`] for plain character keys.
    pub virt: VirtualKey,
    /// For a key-down event, whether it was generated by keyboard auto
    /// repeat.
    pub is_repeat: bool,
}

impl KeyboardEvent {
    /// An event for the given virtual key with no character and no
    /// modifiers.
    pub fn from_virtual_key(virt: VirtualKey) -> KeyboardEvent {
        KeyboardEvent { virt, ..Default::default() }
    }

    /// An event for a character-producing key.
    pub fn from_character(character: u16) -> KeyboardEvent {
        KeyboardEvent { character, ..Default::default() }
    }
}
