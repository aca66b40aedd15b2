// Crate error type. Every variant states *where* things went wrong.
// Nothing here is recovered from: main returns it and the demo stops.

#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The drawing surface could not be created (e.g. zero width or height).
    #[error("surface init error: {0}")]
    SurfaceInit(String),

    /// Creating the window failed.
    #[error("window init error: {0}")]
    WindowInit(String),

    /// Pushing a frame to the window failed.
    #[error("window update error: {0}")]
    WindowUpdate(String),

    /// A buffer handed back to the surface has the wrong dimensions.
    #[error("buffer size mismatch: expected {expected:?}, got {actual:?}")]
    SizeMismatch {
        expected: (u32, u32),
        actual: (u32, u32),
    },

    /// Geometry with NaN/inf reached the rasterizer (e.g. a spirograph with k = 0).
    #[error("non-finite geometry: {0}")]
    NonFinite(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn size_mismatch_message_names_both_sizes() {
        let e = Error::SizeMismatch { expected: (500, 500), actual: (4, 2) };
        assert_eq!(e.to_string(), "buffer size mismatch: expected (500, 500), got (4, 2)");
    }

    #[test]
    fn non_finite_message_carries_context() {
        let e = Error::NonFinite("center (NaN, 0)".into());
        assert!(e.to_string().contains("NaN"));
    }
}
