use thiserror::Error;

/// Everything that can go wrong between reading the form and rendering results.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum QrngError {
    #[error("bit width must be a whole number, got {0:?}")]
    BitWidthNotNumeric(String),

    #[error("bit width {0} is outside 0..=32")]
    BitWidthOutOfRange(i64),

    #[error("count must be a whole number, got {0:?}")]
    CountNotNumeric(String),

    #[error("count {0} is outside 0..=10000")]
    CountOutOfRange(i64),

    #[error("unknown number format {0:?} (expected decimal, binary or hex)")]
    UnknownFormat(String),

    #[error("cannot read {text:?} as a {format} value")]
    UnparsableValue { text: String, format: &'static str },

    #[error("value {value} does not fit in {bit_width} bits")]
    ValueTooWide { value: u64, bit_width: u8 },

    #[error("invalid configuration: {0}")]
    Config(String),
}

pub type Result<T> = std::result::Result<T, QrngError>;
