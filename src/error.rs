//! Errors raised while mounting widgets

use thiserror::Error;
use wasm_bindgen::JsValue;

#[derive(Debug, Error)]
pub enum WidgetError {
    #[error("invalid widget config: {0}")]
    Json(#[from] serde_json::Error),

    #[error("invalid widget config: {0}")]
    InvalidConfig(String),

    #[error("no element matches `{0}`")]
    MissingElement(String),

    #[error("browser global `{0}` is unavailable")]
    NoGlobal(&'static str),

    #[error("DOM call failed: {0}")]
    Dom(String),
}

impl WidgetError {
    /// Wrap a thrown JS value
    pub fn dom(err: JsValue) -> Self {
        Self::Dom(err.as_string().unwrap_or_else(|| format!("{:?}", err)))
    }
}

impl From<WidgetError> for JsValue {
    fn from(err: WidgetError) -> Self {
        js_sys::Error::new(&err.to_string()).into()
    }
}
