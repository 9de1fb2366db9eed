//! Visibility state machine for password fields.
//!
//! Pure logic with no DOM dependency, so it can be unit-tested on the host.
//! [`FieldMode`] is the two-state machine (masked ⇄ plaintext) driven by
//! clicks on the toggle control; [`ControlVisual`] maps each mode to the
//! glyph and color the control shows while the field is in that mode.

#[cfg(test)]
#[path = "toggle_test.rs"]
mod toggle_test;

use crate::consts;

/// How a password field currently renders its value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FieldMode {
    /// Value obscured (dots). The initial mode of every password field.
    #[default]
    Masked,
    /// Value shown as visible characters.
    Plaintext,
}

impl FieldMode {
    /// Derive the mode from an input's `type` attribute value.
    ///
    /// Anything other than `"password"` counts as plaintext, since the
    /// browser renders it unmasked.
    #[must_use]
    pub fn from_input_type(input_type: &str) -> Self {
        if input_type == consts::TYPE_MASKED {
            Self::Masked
        } else {
            Self::Plaintext
        }
    }

    /// The `type` attribute value that puts an input into this mode.
    #[must_use]
    pub fn as_input_type(self) -> &'static str {
        match self {
            Self::Masked => consts::TYPE_MASKED,
            Self::Plaintext => consts::TYPE_PLAINTEXT,
        }
    }

    /// The other mode. Both transitions exist; there is no terminal state.
    #[must_use]
    pub fn toggled(self) -> Self {
        match self {
            Self::Masked => Self::Plaintext,
            Self::Plaintext => Self::Masked,
        }
    }
}

/// The glyph and color a toggle control shows for a given field mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ControlVisual {
    /// Icon font class list for the glyph element.
    pub icon_class: &'static str,
    /// CSS color applied to the control.
    pub color: &'static str,
}

impl ControlVisual {
    /// The visual shown while the field is in `mode`.
    ///
    /// Masked fields show a neutral eye (click to reveal); plaintext fields
    /// show an accented eye-slash (click to hide).
    #[must_use]
    pub fn for_mode(mode: FieldMode) -> Self {
        match mode {
            FieldMode::Masked => Self { icon_class: consts::ICON_EYE, color: consts::COLOR_NEUTRAL },
            FieldMode::Plaintext => {
                Self { icon_class: consts::ICON_EYE_SLASH, color: consts::COLOR_ACCENT }
            }
        }
    }
}
