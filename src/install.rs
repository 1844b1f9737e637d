use std::cell::RefCell;
use std::rc::Rc;

use gloo::console;
use gloo::events::EventListener;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{Document, Event, HtmlElement};

use crate::dom;
use crate::error::{dom_err, NotchError};
use crate::shadow::ShadowStyle;
use crate::sync::sync_section;

pub(crate) const SECTION_SELECTOR: &str = "[data-notch], [data-notch-border-color]";
pub(crate) const BORDER_COLOR_ATTR: &str = "data-notch-border-color";

/// Keeps one section's resize subscription alive; dropping it detaches the
/// listener.
pub struct SectionHandle {
    _resize: EventListener,
}

/// Runs one synchronization immediately, then re-runs it on every viewport
/// resize until the returned handle is dropped. No debounce: each resize is
/// O(1) arithmetic plus a couple of style writes.
pub fn attach_section(
    section: &HtmlElement,
    style: ShadowStyle,
) -> Result<SectionHandle, NotchError> {
    let window = dom::window()?;
    sync_section(section, &style);
    let target = section.clone();
    let resize = EventListener::new(&window, "resize", move |_event: &Event| {
        sync_section(&target, &style);
    });
    Ok(SectionHandle { _resize: resize })
}

/// Wires every marked section in the document: `data-notch-border-color`
/// selects the recolored-block shadow (the attribute value is the color,
/// passed through verbatim), a bare `data-notch` selects the image clone.
pub fn install_document(document: &Document) -> Result<Vec<SectionHandle>, NotchError> {
    let sections = document
        .query_selector_all(SECTION_SELECTOR)
        .map_err(|err| dom_err("query_selector_all", err))?;
    let mut handles = Vec::new();
    for index in 0..sections.length() {
        let Some(node) = sections.item(index) else {
            continue;
        };
        let Ok(section) = node.dyn_into::<HtmlElement>() else {
            continue;
        };
        let style = match section.get_attribute(BORDER_COLOR_ATTR) {
            Some(color) => ShadowStyle::Color(color),
            None => ShadowStyle::Image,
        };
        handles.push(attach_section(&section, style)?);
    }
    Ok(handles)
}

#[derive(Default)]
struct RuntimeState {
    handles: RefCell<Vec<SectionHandle>>,
    ready: RefCell<Option<EventListener>>,
}

/// Owns every subscription made by a document-level install. Exposed to the
/// host page over wasm-bindgen; `dispose` releases the resize listeners and
/// any pending ready hook.
#[wasm_bindgen]
pub struct NotchRuntime {
    state: Rc<RuntimeState>,
}

#[wasm_bindgen]
impl NotchRuntime {
    /// Number of sections currently wired to resize updates.
    #[wasm_bindgen(js_name = sectionCount)]
    pub fn section_count(&self) -> u32 {
        self.state.handles.borrow().len() as u32
    }

    pub fn dispose(self) {
        self.state.handles.borrow_mut().clear();
        self.state.ready.borrow_mut().take();
    }
}

/// Installs the notch effect once the document is parsed: immediately when
/// it already is, otherwise via a one-shot readiness listener owned by the
/// returned runtime.
pub fn install_when_ready() -> Result<NotchRuntime, NotchError> {
    let document = dom::document()?;
    let state = Rc::new(RuntimeState::default());
    if document.ready_state() == "loading" {
        let shared = Rc::clone(&state);
        let target = document.clone();
        let ready = EventListener::once(&document, "DOMContentLoaded", move |_event: &Event| {
            match install_document(&target) {
                Ok(handles) => *shared.handles.borrow_mut() = handles,
                Err(err) => console::warn!(format!("notch: {err}")),
            }
        });
        *state.ready.borrow_mut() = Some(ready);
    } else {
        *state.handles.borrow_mut() = install_document(&document)?;
    }
    Ok(NotchRuntime { state })
}

#[wasm_bindgen(js_name = installNotchSections)]
pub fn install_notch_sections() -> Result<NotchRuntime, JsValue> {
    install_when_ready().map_err(|err| JsValue::from_str(&err.to_string()))
}
