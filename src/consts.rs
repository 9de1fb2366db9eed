//! Shared string constants for the password reveal crate.

// ── Selection / markers ─────────────────────────────────────────

/// Selector matching every password input present in the document.
pub const PASSWORD_SELECTOR: &str = r#"input[type="password"]"#;

/// Class set on the wrapper container, as a styling hook for the host page.
pub const WRAPPER_CLASS: &str = "password-wrapper";

/// Attribute marking a wrapper as already enhanced. Checked on the input's
/// immediate parent before processing, so re-running the injector is a no-op.
pub const MARKER_ATTR: &str = "data-password-reveal";

// ── Input type values ───────────────────────────────────────────

/// The `type` attribute value of a masked field.
pub const TYPE_MASKED: &str = "password";

/// The `type` attribute value of a plaintext field.
pub const TYPE_PLAINTEXT: &str = "text";

// ── Icon glyphs (Font Awesome, supplied by the host page) ───────

/// Glyph shown while the field is masked.
pub const ICON_EYE: &str = "fas fa-eye";

/// Glyph shown while the field is plaintext.
pub const ICON_EYE_SLASH: &str = "fas fa-eye-slash";

// ── Control styling ─────────────────────────────────────────────

/// Neutral gray while the field is masked.
pub const COLOR_NEUTRAL: &str = "#6c757d";

/// Accent blue while the field is plaintext.
pub const COLOR_ACCENT: &str = "#007bff";

/// Distance from the wrapper's right edge to the control.
pub const CONTROL_RIGHT_OFFSET: &str = "10px";

/// Click-target padding around the glyph.
pub const CONTROL_PADDING: &str = "5px";

/// Stacking order of the control, above the input.
pub const CONTROL_Z_INDEX: &str = "20";
