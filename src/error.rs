use thiserror::Error;
use wasm_bindgen::JsValue;

#[derive(Debug, Error)]
pub enum ContentError {
    #[error("site content is not valid JSON: {0}")]
    Parse(#[from] serde_json::Error),
}

#[derive(Debug, Error, PartialEq)]
pub enum HostError {
    #[error("{0} is not available")]
    Unavailable(&'static str),
    #[error("browser call failed: {0}")]
    Js(String),
    #[error("listener set was already torn down")]
    TornDown,
}

impl From<JsValue> for HostError {
    fn from(value: JsValue) -> Self {
        HostError::Js(format!("{:?}", value))
    }
}
