//! Fast Yaz0 (SZS) compression and decompression.
//!
//! Yaz0 is the LZ77-based container format used throughout Nintendo's GameCube,
//! Wii, and later catalogues, usually carrying `.szs` or `.carc` archives. This
//! crate provides a fast greedy encoder in the FastLZ mould and a strict,
//! bounds-checked decoder; anything this encoder produces decodes in any
//! conforming Yaz0 implementation.
//!
//! ## Encoding and decoding
//! ```
//! let data = b"Hello, hello, hello, and hello again!";
//!
//! let packed = fastyz::encode(data)?;
//! assert!(fastyz::is_yaz0(&packed));
//! assert_eq!(fastyz::decompressed_size(&packed)?, data.len() as u32);
//!
//! let unpacked = fastyz::decode(&packed)?;
//! assert_eq!(unpacked, data.to_vec());
//! # Ok::<(), fastyz::YazError>(())
//! ```
//!
//! ## Caller-supplied buffers
//! [`encode_into`] and [`decode_into`] write into buffers you own. Encoding
//! needs [`max_encoded_size`] bytes of room; decoding needs the size the
//! header declares (peek it with [`decompressed_size`]).
//!
//! The codec works on whole in-memory buffers, performs no I/O, and holds no
//! state between calls, so separate threads can encode and decode freely with
//! their own buffers.

mod decode;
mod encode;
mod errors;
mod format;

pub use crate::decode::{decode, decode_into};
pub use crate::encode::{encode, encode_into};
pub use crate::errors::YazError;
pub use crate::format::{
    decompressed_size, is_yaz0, max_encoded_size, Yaz0Header, HEADER_SIZE, MAGIC,
};
