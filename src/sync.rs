use gloo::console;
use notchfx_core::{compute_clip_path_params, generate_clip_path_string, SECTION_PROFILE};
use web_sys::HtmlElement;

use crate::dom;
use crate::error::NotchError;
use crate::shadow::{self, ShadowStyle};

/// Recomputes the section's notch and its shadow. Errors are logged and
/// swallowed; the effect degrades to the section's default rectangular shape
/// instead of breaking the page.
pub fn sync_section(section: &HtmlElement, style: &ShadowStyle) {
    if let Err(err) = update_section_clip_path(section, style) {
        console::warn!(format!("notch: {err}"));
    }
}

/// One synchronization pass: clip the section with the live outline, then
/// find or create the shadow sibling and restyle it. The parent lookup comes
/// first so a detached section is rejected before any style write.
pub fn update_section_clip_path(
    section: &HtmlElement,
    style: &ShadowStyle,
) -> Result<(), NotchError> {
    let parent = section.parent_element().ok_or(NotchError::MissingParent)?;
    let Some((width, height)) = dom::section_extent(section)? else {
        // Hidden or mid-layout; keep whatever shape the section has.
        return Ok(());
    };
    let live = compute_clip_path_params(width, height, SECTION_PROFILE);
    dom::set_clip_path(section, &generate_clip_path_string(&live))?;
    let shadow = shadow::obtain_shadow(&parent, section, style)?;
    shadow::restyle_shadow(&shadow, style, width, height)?;
    Ok(())
}
