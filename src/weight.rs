//! Weight computation for rendezvous hashing.

use std::fmt;

use digest::{Digest, consts::U20};
use sha1::Sha1;

/// Separator between candidate and key bytes in the digest input.
///
/// Without it, `("ab", "c")` and `("a", "bc")` would hash identically.
const SEPARATOR: [u8; 1] = [0x00];

/// A candidate's score for a key: the raw 20-byte digest output.
///
/// Weights order as unsigned bytes, most significant byte first — exactly the
/// derived array ordering. They must never be compared as trimmed hex/decimal
/// strings or as signed integers; both orderings disagree with unsigned byte
/// order and would silently reassign keys.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Weight([u8; 20]);

impl Weight {
    /// Digest output length in bytes (160 bits).
    pub const LEN: usize = 20;

    /// The lowest possible weight. Every weight compares greater than or
    /// equal to it, so it serves as the ordering floor.
    pub const MIN: Weight = Weight([0; Self::LEN]);

    /// Return the raw 20-byte representation.
    pub fn as_bytes(&self) -> &[u8; Self::LEN] {
        &self.0
    }
}

impl From<[u8; Weight::LEN]> for Weight {
    fn from(bytes: [u8; Weight::LEN]) -> Self {
        Self(bytes)
    }
}

impl AsRef<[u8]> for Weight {
    fn as_ref(&self) -> &[u8] {
        &self.0
    }
}

impl fmt::Display for Weight {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for byte in &self.0 {
            write!(f, "{byte:02x}")?;
        }
        Ok(())
    }
}

impl fmt::Debug for Weight {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Weight({self})")
    }
}

/// Compute the rendezvous weight of `candidate` for `key`:
/// `sha1(candidate ++ 0x00 ++ key)`.
///
/// Candidate and key are arbitrary byte sequences; empty is valid. Text must
/// be encoded identically on every process (UTF-8). SHA-1 is a deliberate
/// choice for near-uniform, well-distributed output, not a security measure;
/// weights are ordering keys, never credentials.
pub fn compute_weight(candidate: impl AsRef<[u8]>, key: impl AsRef<[u8]>) -> Weight {
    weight_of::<Sha1>(candidate.as_ref(), key.as_ref())
}

/// [`compute_weight`] over an explicit 160-bit digest.
///
/// The digest is a versioned cross-process contract: every cooperating
/// process must use the same one, and swapping it reassigns every key, so a
/// change is a coordinated rollout rather than a transparent upgrade.
pub fn weight_of<D: Digest<OutputSize = U20>>(candidate: &[u8], key: &[u8]) -> Weight {
    let mut hasher = D::new();
    hasher.update(candidate);
    hasher.update(SEPARATOR);
    hasher.update(key);
    Weight(hasher.finalize().into())
}
