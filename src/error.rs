//! Error types.
//!
//! Failures here never break the page: a missing canvas context leaves a
//! section without its animated background, and bad site data falls back to
//! the built-in content.

/// Errors acquiring a drawable surface from a canvas element.
#[derive(Debug, thiserror::Error)]
pub enum SurfaceError {
	/// The canvas returned no 2D context (e.g. another context type is bound).
	#[error("canvas has no 2d rendering context")]
	NoContext,

	/// The browser rejected the context request.
	#[error("canvas context request failed: {0}")]
	Context(String),
}

/// Errors loading site content from the page.
#[derive(Debug, thiserror::Error)]
pub enum ContentError {
	#[error("invalid site content: {0}")]
	Parse(#[from] serde_json::Error),
}
