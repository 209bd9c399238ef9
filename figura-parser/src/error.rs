use thiserror::Error;

/// Errors produced while lowering a design document.
#[derive(Debug, Error)]
pub enum ParseError {
    /// The requested root is absent from the document.
    #[error("node '{node_id}' not found in design document")]
    MissingRoot { node_id: String },
}
