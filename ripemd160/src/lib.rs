//! An implementation of the [RIPEMD-160][1] cryptographic hash.
//!
//! # Usage
//!
//! ```rust
//! use hex_literal::hex;
//! use ripemd160::{Ripemd160, Digest};
//!
//! // create a RIPEMD-160 hasher instance
//! let mut hasher = Ripemd160::new();
//!
//! // process input message
//! hasher.update(b"Hello world!");
//!
//! // acquire hash digest in the form of GenericArray,
//! // which in this case is equivalent to [u8; 20]
//! let result = hasher.finalize();
//! assert_eq!(result[..], hex!("7f772647d88750add82d8e1a7a3e5c0902a346a3"));
//! ```
//!
//! The same digest can be computed from any [`std::io::Read`] source with
//! [`hash_reader`], or by draining the source into the hasher through its
//! [`std::io::Write`] impl.
//!
//! [1]: https://en.wikipedia.org/wiki/RIPEMD

#![no_std]
#![deny(unsafe_code)]
#![warn(missing_docs, rust_2018_idioms)]

#[cfg(feature = "std")]
extern crate std;

pub use digest::{self, Digest};

use core::fmt;
use digest::{
    block_buffer::Eager,
    core_api::{
        AlgorithmName, Block, BlockSizeUser, Buffer, BufferKindUser, CoreWrapper,
        FixedOutputCore, OutputSizeUser, Reset, UpdateCore,
    },
    typenum::{Unsigned, U20, U64},
    HashMarker, Output,
};

mod block;
use block::{compress, DIGEST_BUF_LEN, H0};

/// Core RIPEMD-160 hasher state.
#[derive(Clone)]
pub struct Ripemd160Core {
    h: [u32; DIGEST_BUF_LEN],
    block_len: u64,
}

impl HashMarker for Ripemd160Core {}

impl BlockSizeUser for Ripemd160Core {
    type BlockSize = U64;
}

impl BufferKindUser for Ripemd160Core {
    type BufferKind = Eager;
}

impl OutputSizeUser for Ripemd160Core {
    type OutputSize = U20;
}

impl UpdateCore for Ripemd160Core {
    #[inline]
    fn update_blocks(&mut self, blocks: &[Block<Self>]) {
        // Assumes that `block_len` does not overflow
        self.block_len += blocks.len() as u64;
        for block in blocks {
            compress(&mut self.h, block.as_ref());
        }
    }
}

impl FixedOutputCore for Ripemd160Core {
    #[inline]
    fn finalize_fixed_core(&mut self, buffer: &mut Buffer<Self>, out: &mut Output<Self>) {
        let bs = Self::BlockSize::U64;
        let bit_len = 8 * (buffer.get_pos() as u64 + bs * self.block_len);
        let mut h = self.h;
        buffer.len64_padding_le(bit_len, |block| compress(&mut h, block.as_ref()));

        for (chunk, v) in out.chunks_exact_mut(4).zip(h.iter()) {
            chunk.copy_from_slice(&v.to_le_bytes());
        }
    }
}

impl Default for Ripemd160Core {
    #[inline]
    fn default() -> Self {
        Self {
            h: H0,
            block_len: 0,
        }
    }
}

impl Reset for Ripemd160Core {
    #[inline]
    fn reset(&mut self) {
        *self = Default::default();
    }
}

impl AlgorithmName for Ripemd160Core {
    #[inline]
    fn write_alg_name(f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Ripemd160")
    }
}

impl fmt::Debug for Ripemd160Core {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Ripemd160Core { ... }")
    }
}

/// RIPEMD-160 hasher state.
pub type Ripemd160 = CoreWrapper<Ripemd160Core>;

/// Reads `source` to exhaustion and returns the RIPEMD-160 digest of the
/// bytes it produced.
///
/// A read returning zero bytes marks the end of the source; short reads are
/// retried. The digest is identical to hashing the same bytes in one buffer.
///
/// # Examples
///
/// ```rust
/// use hex_literal::hex;
///
/// let digest = ripemd160::hash_reader(&b"Hello world!"[..])?;
/// assert_eq!(digest[..], hex!("7f772647d88750add82d8e1a7a3e5c0902a346a3"));
/// # Ok::<(), std::io::Error>(())
/// ```
#[cfg(feature = "std")]
pub fn hash_reader<R: std::io::Read>(mut source: R) -> std::io::Result<Output<Ripemd160>> {
    let mut hasher = Ripemd160::new();
    std::io::copy(&mut source, &mut hasher)?;
    Ok(hasher.finalize())
}
