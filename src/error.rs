/// Errors returned by the fallible constructors of this crate.
///
/// Widget operations never fail; only loading resources (fonts, raw pixel
/// buffers) can.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// A raw RGBA buffer did not match the requested texture dimensions.
    #[error("pixel buffer holds {actual} bytes but {expected} were expected")]
    PixelBufferSize { expected: usize, actual: usize },
    /// A font file could not be read.
    #[error("failed to load font file: {0}")]
    FontFile(#[from] std::io::Error),
}
