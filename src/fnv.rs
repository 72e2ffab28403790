//! 32-bit FNV-1a hashing.
//!
//! A small byte-wise hash that is cheap on short string keys. It has no
//! protection against adversarial input, so only use it for keys you control.
//! [`HashMap`](crate::HashMap) spreads its output with Fibonacci hashing, so
//! the weak low bits of FNV-1a do not hurt slot distribution.

use core::hash::BuildHasherDefault;
use core::hash::Hasher;

const FNV_OFFSET: u32 = 0x811C_9DC5;
const FNV_PRIME: u32 = 0x0100_0193;

/// Hashes `bytes` with 32-bit FNV-1a.
///
/// # Examples
///
/// ```rust
/// use fib_map::fnv::hash_bytes;
///
/// assert_eq!(hash_bytes(b""), 0x811C_9DC5);
/// assert_eq!(hash_bytes(b"a"), 0xE40C_292C);
/// ```
#[inline]
pub fn hash_bytes(bytes: &[u8]) -> u32 {
    bytes.iter().fold(FNV_OFFSET, |hash, &byte| {
        (hash ^ byte as u32).wrapping_mul(FNV_PRIME)
    })
}

/// A [`Hasher`] computing 32-bit FNV-1a over every byte written to it.
///
/// Note that `str` and `[u8]` keys write a length or terminator in addition to
/// their bytes when hashed through [`Hash`](core::hash::Hash), so
/// `Fnv1aHasher` results for them differ from [`hash_bytes`].
#[derive(Clone, Copy, Debug)]
pub struct Fnv1aHasher {
    hash: u32,
}

impl Default for Fnv1aHasher {
    fn default() -> Self {
        Self { hash: FNV_OFFSET }
    }
}

impl Hasher for Fnv1aHasher {
    #[inline]
    fn write(&mut self, bytes: &[u8]) {
        for &byte in bytes {
            self.hash = (self.hash ^ byte as u32).wrapping_mul(FNV_PRIME);
        }
    }

    #[inline]
    fn finish(&self) -> u64 {
        self.hash as u64
    }
}

/// Builds [`Fnv1aHasher`]s. Deterministic across runs.
pub type Fnv1aBuildHasher = BuildHasherDefault<Fnv1aHasher>;
