//! Visibility toggle injector.
//!
//! The browser half of the crate: finds every password input in the
//! document, wraps each in a positioned container, builds the clickable eye
//! control, and wires the click handler. All mode and glyph decisions are
//! delegated to the pure [`toggle`](crate::toggle) module.
//!
//! The injector runs once per page load, from [`init`]. Each field is
//! processed independently; a field that cannot be enhanced (for example a
//! detached input with no parent) is logged and skipped without affecting
//! the others.

#[cfg(test)]
#[path = "inject_test.rs"]
mod inject_test;

use log::Level;
use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use web_sys::{Document, Element, Event, HtmlElement, HtmlInputElement, Node};

use crate::consts;
use crate::toggle::{ControlVisual, FieldMode};

/// One password field paired with its injected control.
///
/// An explicit association record: the click handler receives this pair
/// rather than capturing loose element references. The field's value is
/// never read — only its `type` attribute is toggled.
pub struct FieldToggle {
    input: HtmlInputElement,
    control: HtmlElement,
    icon: Element,
}

impl FieldToggle {
    /// Flip the field to the other mode and restyle the control to match.
    ///
    /// Returns the mode the field is now in.
    ///
    /// # Errors
    ///
    /// Returns the underlying DOM error if restyling the control fails.
    pub fn flip(&self) -> Result<FieldMode, JsValue> {
        let next = FieldMode::from_input_type(&self.input.type_()).toggled();
        self.input.set_type(next.as_input_type());

        let visual = ControlVisual::for_mode(next);
        self.icon.set_class_name(visual.icon_class);
        self.control.style().set_property("color", visual.color)?;
        Ok(next)
    }
}

/// Counts reported by one injector pass over the document.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct EnhanceSummary {
    /// Fields that received a wrapper and control during this pass.
    pub enhanced: usize,
    /// Fields left alone: already enhanced, or failed independently.
    pub skipped: usize,
}

/// Enhance every password input currently present in `document`.
///
/// Idempotent: inputs whose parent already carries the marker attribute are
/// skipped, so a second pass reports zero enhanced fields. A document with
/// no password fields completes as a no-op.
///
/// # Errors
///
/// Returns an error only if the selector query itself fails. Per-field
/// failures are logged at warn level and counted in
/// [`EnhanceSummary::skipped`].
pub fn enhance_document(document: &Document) -> Result<EnhanceSummary, JsValue> {
    let inputs = document.query_selector_all(consts::PASSWORD_SELECTOR)?;
    let mut summary = EnhanceSummary::default();

    for index in 0..inputs.length() {
        let Some(node) = inputs.item(index) else {
            continue;
        };
        let Ok(input) = node.dyn_into::<HtmlInputElement>() else {
            summary.skipped += 1;
            continue;
        };
        if already_enhanced(&input) {
            summary.skipped += 1;
            continue;
        }
        match enhance_field(document, &input) {
            Ok(()) => summary.enhanced += 1,
            Err(err) => {
                log::warn!("password field left unenhanced: {err:?}");
                summary.skipped += 1;
            }
        }
    }

    Ok(summary)
}

/// Whether the input's immediate parent is already a marked wrapper.
fn already_enhanced(input: &HtmlInputElement) -> bool {
    input.parent_element().is_some_and(|parent| parent.has_attribute(consts::MARKER_ATTR))
}

/// Wrap one input and fit it with a toggle control.
///
/// The no-parent guard is defensive: an input returned by a live document
/// query always has a parent. It keeps a detached input from aborting the
/// pass for the remaining fields.
fn enhance_field(document: &Document, input: &HtmlInputElement) -> Result<(), JsValue> {
    let parent = input
        .parent_node()
        .ok_or_else(|| JsValue::from_str("password input has no parent node"))?;

    let wrapper = build_wrapper(document)?;
    let anchor: &Node = input.as_ref();
    parent.insert_before(&wrapper, Some(anchor))?;
    wrapper.append_child(anchor)?;

    let (control, icon) = build_control(document)?;
    let pair = FieldToggle { input: input.clone(), control: control.clone(), icon };
    wire_click(&control, pair)?;

    // Appended after the input, so the control renders on top.
    wrapper.append_child(&control)?;
    Ok(())
}

/// The flex-row container that holds the input and the overlay control.
fn build_wrapper(document: &Document) -> Result<HtmlElement, JsValue> {
    let wrapper: HtmlElement = document.create_element("div")?.dyn_into()?;
    wrapper.set_class_name(consts::WRAPPER_CLASS);
    wrapper.set_attribute(consts::MARKER_ATTR, "1")?;

    let style = wrapper.style();
    style.set_property("position", "relative")?;
    style.set_property("display", "flex")?;
    style.set_property("align-items", "center")?;
    style.set_property("width", "100%")?;
    Ok(wrapper)
}

/// The clickable eye control, absolutely positioned at the right edge.
///
/// Returns the control and its inner glyph element; the glyph's class is
/// what [`FieldToggle::flip`] swaps on each click.
fn build_control(document: &Document) -> Result<(HtmlElement, Element), JsValue> {
    let control: HtmlElement = document.create_element("span")?.dyn_into()?;
    let icon = document.create_element("i")?;

    let visual = ControlVisual::for_mode(FieldMode::Masked);
    icon.set_class_name(visual.icon_class);
    control.append_child(&icon)?;

    let style = control.style();
    style.set_property("position", "absolute")?;
    style.set_property("right", consts::CONTROL_RIGHT_OFFSET)?;
    style.set_property("cursor", "pointer")?;
    style.set_property("z-index", consts::CONTROL_Z_INDEX)?;
    style.set_property("padding", consts::CONTROL_PADDING)?;
    style.set_property("color", visual.color)?;
    Ok((control, icon))
}

/// Attach the click handler that drives the toggle.
///
/// `prevent_default` guards against accidental form submission when the
/// field sits inside a submittable form.
fn wire_click(control: &HtmlElement, pair: FieldToggle) -> Result<(), JsValue> {
    let handler = Closure::wrap(Box::new(move |event: Event| {
        event.prevent_default();
        if let Err(err) = pair.flip() {
            log::warn!("visibility toggle failed: {err:?}");
        }
    }) as Box<dyn FnMut(_)>);

    control.add_event_listener_with_callback("click", handler.as_ref().unchecked_ref())?;
    // Leak the closure - the listener lives for the page's lifetime.
    handler.forget();
    Ok(())
}

/// Run the injector and log the outcome.
fn run(document: &Document) {
    match enhance_document(document) {
        Ok(summary) => {
            log::info!(
                "password reveal ready: {} enhanced, {} skipped",
                summary.enhanced,
                summary.skipped
            );
        }
        Err(err) => log::warn!("password reveal failed: {err:?}"),
    }
}

/// WASM entry point, called once when the hosting page loads the module.
///
/// Installs the panic hook and console logger, then runs the injector —
/// immediately if the document is already parsed, otherwise from a one-shot
/// `DOMContentLoaded` listener.
///
/// # Errors
///
/// Returns an error if the window or document objects are unavailable, or
/// if registering the readiness listener fails.
#[wasm_bindgen(start)]
pub fn init() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    if console_log::init_with_level(Level::Info).is_err() {
        web_sys::console::warn_1(&"password-reveal: logger already installed".into());
    }

    let window = web_sys::window().ok_or_else(|| JsValue::from_str("no window object"))?;
    let document =
        window.document().ok_or_else(|| JsValue::from_str("no document object"))?;

    if document.ready_state() == "loading" {
        let doc = document.clone();
        let on_ready = Closure::wrap(Box::new(move |_event: Event| {
            run(&doc);
        }) as Box<dyn FnMut(_)>);
        document
            .add_event_listener_with_callback("DOMContentLoaded", on_ready.as_ref().unchecked_ref())?;
        on_ready.forget();
    } else {
        run(&document);
    }

    Ok(())
}
