//! Input event types for a GUI toolkit.
//!
//! This crate is the contract between the platform side and the widget side
//! of a toolkit: windowing backends translate native OS input into the
//! [`event::Event`] value types defined here, and the widget tree walks its
//! hierarchy dispatching those values, recovering variant-specific fields
//! through the discriminant-checked casts and claiming events through the
//! consumption flag. It contains no event loop, no queueing and no platform
//! code — only the types, the casts and the legacy bridging both sides must
//! agree on.
//!
//! Everything here is synchronous and single-threaded: an event is
//! constructed by its producer, passed by mutable reference through a chain
//! of receivers, and discarded when dispatch returns.
//!
//! The `serde` cargo feature derives `Serialize`/`Deserialize` for the plain
//! value types (discriminants, bitmasks, the keyboard payload); the event
//! root itself has no serialization format.

pub use dpi;

pub mod compat;
pub mod event;
pub mod keyboard;
