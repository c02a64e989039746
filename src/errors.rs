use std::{error::Error, fmt, num::TryFromIntError};

/// Possible errors that arise from encoding or decoding a Yaz0 stream
#[derive(Debug)]
#[non_exhaustive]
pub enum YazError {
    InvalidMagic([u8; 4]),
    TruncatedHeader(usize),
    NullSize,
    OutputTooSmall { needed: usize, capacity: usize },
    TruncatedStream,
    BadLookBack(usize, usize),
    InputTooBig(TryFromIntError),
}

impl fmt::Display for YazError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            YazError::InvalidMagic(m) => {
                write!(f, "Invalid magic bytes {:02x?} in header", m)
            }
            YazError::TruncatedHeader(n) => {
                write!(f, "Input of {} bytes is shorter than a Yaz0 header", n)
            }
            YazError::NullSize => write!(f, "Header declares a decompressed size of zero"),
            YazError::OutputTooSmall { needed, capacity } => write!(
                f,
                "Output buffer of {} bytes cannot hold {} bytes",
                capacity, needed
            ),
            YazError::TruncatedStream => {
                write!(f, "Compressed stream ended in the middle of a token")
            }
            YazError::BadLookBack(mb, size) => write!(
                f,
                "Bad input file: asked to copy back {} bytes with only {} bytes decoded",
                mb, size
            ),
            YazError::InputTooBig(_) => write!(f, "Input file size too big to fit in 32-bit word"),
        }
    }
}

impl Error for YazError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            YazError::InputTooBig(e) => Some(e as &dyn Error),
            _ => None,
        }
    }
}

impl From<TryFromIntError> for YazError {
    fn from(e: TryFromIntError) -> Self {
        Self::InputTooBig(e)
    }
}
