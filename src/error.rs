use thiserror::Error;

/// Errors raised while configuring or attaching a decorative scene.
///
/// None of these ever reach the page as a message: callers log them and
/// render less.
#[derive(Debug, Error)]
pub enum SceneError {
    #[error("invalid scene config: {0}")]
    Config(#[from] serde_json::Error),

    #[error("unknown section `{0}`")]
    UnknownSection(String),

    #[error("shader failed: {0}")]
    Shader(String),

    #[error("graphics call failed: {0}")]
    Graphics(String),

    #[error("WebGL2 not supported")]
    NoContext,
}

pub type Result<T> = std::result::Result<T, SceneError>;

#[cfg(target_arch = "wasm32")]
impl From<SceneError> for wasm_bindgen::JsValue {
    fn from(err: SceneError) -> Self {
        wasm_bindgen::JsValue::from_str(&err.to_string())
    }
}
