#![forbid(unsafe_code)]

//! Color scheme primitives for the tokenfield token input widget.
//!
//! # Role in tokenfield
//! `tokenfield-style` is the shared vocabulary for token chip colors. The
//! token field widget and its configuration layer use these types to agree
//! on chip appearance without dragging in rendering or layout dependencies.
//!
//! # This crate provides
//! - [`ColorScheme`] holding the four chip color slots (text and background,
//!   normal and highlighted), each independently optional.
//! - [`TokenState`] naming the chip states the slots pair with.
//! - [`Color`], a packed RGBA value type.
//!
//! # How it fits in the system
//! The enclosing widget reads the scheme's slots when painting a chip for
//! its current state; this crate just stores them. It is deliberately inert:
//! no validation, no theming machinery, no I/O, and no operation that can
//! fail.

/// Packed RGBA color values.
pub mod color;
/// Color scheme for token chips.
pub mod scheme;

pub use color::Color;
pub use scheme::{ColorScheme, TokenState};
