use std::path::PathBuf;
use thiserror::Error;

/// Errors surfaced while producing a diagram.
///
/// Font resolution is deliberately absent from this taxonomy: exhausting
/// every font source degrades to the built-in glyph set instead of failing
/// the render. Geometric degeneracies (zero-length arrows, zero radii,
/// out-of-bounds coordinates) are defined as no-ops, not errors.
#[derive(Debug, Error)]
pub enum RenderError {
    /// A color literal was not `#RRGGBB`. Diagram colors are authoring-time
    /// literals, so this fails fast rather than degrading.
    #[error("invalid color literal {literal:?}: expected #RRGGBB")]
    InvalidColorFormat { literal: String },

    /// The PNG encoder rejected the canvas contents.
    #[error("PNG encoding failed: {0}")]
    CanvasEncode(#[from] png::EncodingError),

    /// Writing the encoded PNG to disk failed.
    #[error("failed to write {path}: {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
}
