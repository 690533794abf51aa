#![forbid(unsafe_code)]

//! Color scheme for token chips.
//!
//! [`ColorScheme`] holds the four color slots a token field needs to paint a
//! chip: text and background, each in the normal and highlighted state. Every
//! slot is optional; an unset slot means "no opinion" and leaves whatever
//! default the consuming widget carries. The scheme stores and hands back
//! values, nothing more: no validation, no failure modes, no side effects.
//!
//! When resolving a slot for the current chip state, the highlighted slot
//! falls back to the corresponding normal slot if unset, so a scheme that
//! only sets base colors still renders sensibly for selected chips.
//!
//! # Example
//!
//! ```
//! use tokenfield_style::{Color, ColorScheme, TokenState};
//!
//! let scheme = ColorScheme::new()
//!     .with_text_color(Color::rgb(51, 51, 51))
//!     .with_highlighted_text_color(Color::WHITE)
//!     .with_highlighted_background_color(Color::rgb(0, 122, 255));
//!
//! // The widget resolves slots per chip state when painting.
//! assert_eq!(
//!     scheme.text_color_for(TokenState::Highlighted),
//!     Some(Color::WHITE),
//! );
//! // No normal background was set, so that slot stays the widget's call.
//! assert_eq!(scheme.background_color_for(TokenState::Normal), None);
//! ```

use crate::color::Color;

/// The visual state of a token chip.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TokenState {
    /// Resting state — the chip is not selected.
    Normal,
    /// The chip is selected/active.
    Highlighted,
}

/// Color slots for rendering a token chip.
///
/// The four slots are independent storage; setting one never touches the
/// others. Fields are public and may be assigned directly, or chained
/// through the `with_*` builders.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct ColorScheme {
    /// Token text color in the normal state.
    pub text_color: Option<Color>,
    /// Token text color in the highlighted state.
    pub highlighted_text_color: Option<Color>,
    /// Chip background color in the normal state.
    pub background_color: Option<Color>,
    /// Chip background color in the highlighted state.
    pub highlighted_background_color: Option<Color>,
}

impl ColorScheme {
    /// Create a scheme with all four slots unset.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a scheme with all four slots set at once.
    pub fn from_colors(
        text_color: Color,
        highlighted_text_color: Color,
        background_color: Color,
        highlighted_background_color: Color,
    ) -> Self {
        Self {
            text_color: Some(text_color),
            highlighted_text_color: Some(highlighted_text_color),
            background_color: Some(background_color),
            highlighted_background_color: Some(highlighted_background_color),
        }
    }

    /// Set the normal text color (builder).
    #[must_use]
    pub fn with_text_color(mut self, color: Color) -> Self {
        self.text_color = Some(color);
        self
    }

    /// Set the highlighted text color (builder).
    #[must_use]
    pub fn with_highlighted_text_color(mut self, color: Color) -> Self {
        self.highlighted_text_color = Some(color);
        self
    }

    /// Set the normal background color (builder).
    #[must_use]
    pub fn with_background_color(mut self, color: Color) -> Self {
        self.background_color = Some(color);
        self
    }

    /// Set the highlighted background color (builder).
    #[must_use]
    pub fn with_highlighted_background_color(mut self, color: Color) -> Self {
        self.highlighted_background_color = Some(color);
        self
    }

    /// Overlay `overlay`'s set slots on top of this scheme.
    ///
    /// Slots the overlay sets win; slots it leaves unset keep this scheme's
    /// value. Neither input is modified.
    #[must_use]
    pub fn patch(&self, overlay: &ColorScheme) -> ColorScheme {
        ColorScheme {
            text_color: overlay.text_color.or(self.text_color),
            highlighted_text_color: overlay
                .highlighted_text_color
                .or(self.highlighted_text_color),
            background_color: overlay.background_color.or(self.background_color),
            highlighted_background_color: overlay
                .highlighted_background_color
                .or(self.highlighted_background_color),
        }
    }

    /// Whether no slot is set.
    pub fn is_empty(&self) -> bool {
        self.text_color.is_none()
            && self.highlighted_text_color.is_none()
            && self.background_color.is_none()
            && self.highlighted_background_color.is_none()
    }

    /// Resolve the text color for the given chip state.
    ///
    /// In the highlighted state, an unset highlighted slot falls back to the
    /// normal slot.
    pub fn text_color_for(&self, state: TokenState) -> Option<Color> {
        match state {
            TokenState::Normal => self.text_color,
            TokenState::Highlighted => match self.highlighted_text_color {
                Some(color) => Some(color),
                None => {
                    tracing::trace!(
                        slot = "highlighted_text_color",
                        "highlighted slot unset, falling back to normal slot"
                    );
                    self.text_color
                }
            },
        }
    }

    /// Resolve the background color for the given chip state.
    ///
    /// In the highlighted state, an unset highlighted slot falls back to the
    /// normal slot.
    pub fn background_color_for(&self, state: TokenState) -> Option<Color> {
        match state {
            TokenState::Normal => self.background_color,
            TokenState::Highlighted => match self.highlighted_background_color {
                Some(color) => Some(color),
                None => {
                    tracing::trace!(
                        slot = "highlighted_background_color",
                        "highlighted slot unset, falling back to normal slot"
                    );
                    self.background_color
                }
            },
        }
    }
}
