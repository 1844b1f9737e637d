use notchfx_core::{
    compute_clip_path_params, generate_clip_path_string, SECTION_PROFILE, SHADOW_PROFILE,
};
use wasm_bindgen::JsCast;
use web_sys::{Element, HtmlElement, Node};

use crate::dom;
use crate::error::{dom_err, NotchError};

/// Marker class on the synthesized shadow node; the lookup-before-create
/// check below is what keeps each section at a single shadow.
pub(crate) const SHADOW_CLASS: &str = "notch-shadow";

pub(crate) const SHADOW_OPACITY: f64 = 0.35;
pub(crate) const SHADOW_SCALE: f64 = 1.04;
pub(crate) const SHADOW_TRANSLATE_Y_PX: f64 = 10.0;
pub(crate) const SHADOW_Z_INDEX: i32 = -1;

/// How the shadow behind a section is produced: a clone of the section's
/// image, or a block recolored with a caller-supplied border color.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ShadowStyle {
    Image,
    Color(String),
}

/// Returns the section's shadow element, reusing the marked node when one
/// already exists and synthesizing plus inserting it before the section
/// otherwise.
pub(crate) fn obtain_shadow(
    parent: &Element,
    section: &HtmlElement,
    style: &ShadowStyle,
) -> Result<Element, NotchError> {
    let existing = parent
        .query_selector(&format!(".{SHADOW_CLASS}"))
        .map_err(|err| dom_err("query_selector", err))?;
    if let Some(shadow) = existing {
        return Ok(shadow);
    }
    let shadow = match style {
        ShadowStyle::Color(_) => color_block()?,
        ShadowStyle::Image => image_clone(section)?,
    };
    let anchor: &Node = section.as_ref();
    parent
        .insert_before(&shadow, Some(anchor))
        .map_err(|err| dom_err("insert_before", err))?;
    Ok(shadow)
}

/// Applies the shadow's clip region and fixed cosmetics in one style write.
/// The color block wears the enlarged outline so the border peeks out below
/// the live edge; the image clone wears the identical outline and is offset
/// cosmetically instead.
pub(crate) fn restyle_shadow(
    shadow: &Element,
    style: &ShadowStyle,
    width: f64,
    height: f64,
) -> Result<(), NotchError> {
    let css = match style {
        ShadowStyle::Color(color) => {
            let params = compute_clip_path_params(width, height, SHADOW_PROFILE);
            let clip = generate_clip_path_string(&params);
            format!(
                "position:absolute;inset:0;background-color:{color};\
                 z-index:{SHADOW_Z_INDEX};pointer-events:none;clip-path:{clip};"
            )
        }
        ShadowStyle::Image => {
            let params = compute_clip_path_params(width, height, SECTION_PROFILE);
            let clip = generate_clip_path_string(&params);
            format!(
                "position:absolute;inset:0;width:100%;height:100%;object-fit:cover;\
                 opacity:{SHADOW_OPACITY};\
                 transform:translateY({SHADOW_TRANSLATE_Y_PX}px) scale({SHADOW_SCALE});\
                 z-index:{SHADOW_Z_INDEX};pointer-events:none;clip-path:{clip};"
            )
        }
    };
    dom::set_style(shadow, &css)
}

fn color_block() -> Result<Element, NotchError> {
    let document = dom::document()?;
    let block = document
        .create_element("div")
        .map_err(|err| dom_err("create_element", err))?;
    block.set_class_name(SHADOW_CLASS);
    Ok(block)
}

/// Clones the section's image keeping its classes, so page CSS styles the
/// copy the same way it styles the original.
fn image_clone(section: &HtmlElement) -> Result<Element, NotchError> {
    let image = section
        .query_selector("img")
        .map_err(|err| dom_err("query_selector", err))?
        .ok_or(NotchError::MissingImage)?;
    let clone = image
        .clone_node()
        .map_err(|err| dom_err("clone_node", err))?
        .dyn_into::<Element>()
        .map_err(|_| NotchError::Dom("image clone is not an element".to_string()))?;
    let _ = clone.class_list().add_1(SHADOW_CLASS);
    Ok(clone)
}
