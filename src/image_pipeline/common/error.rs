use thiserror::Error;

#[derive(Error, Debug)]
pub enum PipelineError {
    #[error("Failed to read input file: {0}")]
    InputReadError(String),

    #[error("Failed to write output file: {0}")]
    OutputWriteError(String),

    #[error("Bad magic token: expected {expected:?}, found {found:?}")]
    BadMagic { expected: &'static str, found: String },

    #[error("Invalid header field `{field}`: {value:?} ({reason})")]
    InvalidHeader {
        field: &'static str,
        value: String,
        reason: &'static str,
    },

    #[error("Truncated header: missing `{0}`")]
    TruncatedHeader(&'static str),

    #[error("Truncated pixel data: expected {expected} bytes, found {actual}")]
    TruncatedPixelData { expected: usize, actual: usize },

    #[error("Channel value {value} at pixel {index} exceeds max color value {max}")]
    ChannelOutOfRange { index: usize, value: u16, max: u16 },

    #[error("Invalid parameter `{name}`: {reason}")]
    InvalidParameter { name: &'static str, reason: String },

    #[error("Invalid image dimensions: width={0}, height={1}")]
    InvalidDimensions(u32, u32),

    #[error("Thread pool error: {0}")]
    ThreadPool(String),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
}

impl PipelineError {
    /// Malformed or truncated codec input.
    pub fn is_format_error(&self) -> bool {
        matches!(
            self,
            Self::BadMagic { .. }
                | Self::InvalidHeader { .. }
                | Self::TruncatedHeader(_)
                | Self::TruncatedPixelData { .. }
                | Self::ChannelOutOfRange { .. }
        )
    }
}

pub type Result<T> = std::result::Result<T, PipelineError>;
