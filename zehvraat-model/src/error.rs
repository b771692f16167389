/// Pseudo-model errors
#[derive(Debug, thiserror::Error)]
pub enum ModelError {
    #[error("Layer {layer} kernel has shape mismatch: expected {expected}, got {actual}")]
    Shape {
        layer: usize,
        expected: String,
        actual: String,
    },

    #[error("Layer {layer} expects {expected} inputs, got {actual}")]
    InputWidth {
        layer: usize,
        expected: usize,
        actual: usize,
    },

    #[error("Network produced no output")]
    EmptyOutput,

    #[error("Failed to load jewelry price prediction model: {0}")]
    LoadFailed(String),
}
