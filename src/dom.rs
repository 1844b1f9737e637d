use web_sys::{Document, Element, HtmlElement, Window};

use crate::error::{dom_err, NotchError};

pub(crate) fn window() -> Result<Window, NotchError> {
    web_sys::window().ok_or(NotchError::NoWindow)
}

pub(crate) fn document() -> Result<Document, NotchError> {
    window()?.document().ok_or(NotchError::NoDocument)
}

/// Sections are full-bleed, so the notch spans the viewport width while the
/// height tracks the section itself. Returns `None` for a hidden or
/// not-yet-laid-out section.
pub(crate) fn section_extent(section: &HtmlElement) -> Result<Option<(f64, f64)>, NotchError> {
    let width = window()?
        .inner_width()
        .map_err(|err| dom_err("inner_width", err))?
        .as_f64()
        .unwrap_or(0.0);
    let height = f64::from(section.client_height());
    if width <= 0.0 || height <= 0.0 {
        return Ok(None);
    }
    Ok(Some((width, height)))
}

pub(crate) fn set_clip_path(section: &HtmlElement, clip: &str) -> Result<(), NotchError> {
    section
        .style()
        .set_property("clip-path", clip)
        .map_err(|err| dom_err("set clip-path", err))
}

/// Wholesale restyle for nodes this crate owns outright; rewriting the whole
/// attribute keeps reapplication idempotent.
pub(crate) fn set_style(element: &Element, style: &str) -> Result<(), NotchError> {
    element
        .set_attribute("style", style)
        .map_err(|err| dom_err("set style", err))
}
