use wasm_bindgen::JsValue;

#[derive(Debug, thiserror::Error)]
pub enum NotchError {
    #[error("browser window unavailable")]
    NoWindow,
    #[error("browser document unavailable")]
    NoDocument,
    #[error("section has no parent element")]
    MissingParent,
    #[error("section has no image to clone for its shadow")]
    MissingImage,
    #[error("dom call failed: {0}")]
    Dom(String),
}

pub(crate) fn dom_err(op: &str, err: JsValue) -> NotchError {
    NotchError::Dom(format!("{op}: {err:?}"))
}
