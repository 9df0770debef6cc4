// ABOUTME: Error types for manufacturing-info parsing and cell reads
// ABOUTME: Provides no_std compatible error handling built on thiserror

use alloc::string::String;

/// Kind of malformed input encountered while parsing or post-processing
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormatError {
    /// The blob contained no `KEY=VALUE` line at all
    NoCells,
    /// A MAC value was not exactly 17 bytes long
    MacLength(usize),
    /// The last MAC byte is not a hexadecimal digit
    MacDigit(u8),
    /// A derived MAC string could not be decoded into six octets
    MacSyntax,
}

impl core::fmt::Display for FormatError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            FormatError::NoCells => write!(f, "no KEY=VALUE lines found"),
            FormatError::MacLength(len) => write!(f, "MAC value is {len} bytes, expected 17"),
            FormatError::MacDigit(byte) => {
                write!(f, "MAC value ends in {byte:#04x}, not a hex digit")
            }
            FormatError::MacSyntax => write!(f, "MAC value is not colon separated hex"),
        }
    }
}

/// Main error type for layout operations
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum MfgInfoError {
    /// The storage device failed the read outright
    #[error("storage read of {len} bytes at offset {offset} failed")]
    Io { offset: usize, len: usize },
    /// The storage device returned fewer bytes than requested
    #[error("short storage read at offset {offset}: got {got} of {wanted} bytes")]
    ShortRead {
        offset: usize,
        wanted: usize,
        got: usize,
    },
    /// Malformed blob content or cell value
    #[error("malformed manufacturing info: {0}")]
    Format(FormatError),
    /// A derived MAC index would overflow the last nibble
    #[error("MAC index {index} out of range 0..={max}")]
    Range { index: i32, max: u8 },
    /// The registration sink refused a cell
    #[error("cell `{name}` rejected: {reason}")]
    Registration { name: String, reason: &'static str },
    /// The storage node has no layout container
    #[error("no `{0}` container node")]
    MissingContainer(&'static str),
    /// A consumer asked for a cell that was never registered
    #[error("no cell named `{0}`")]
    UnknownCell(String),
}

impl From<FormatError> for MfgInfoError {
    fn from(kind: FormatError) -> Self {
        MfgInfoError::Format(kind)
    }
}

/// Result alias used throughout the crate
pub type Result<T, E = MfgInfoError> = core::result::Result<T, E>;
