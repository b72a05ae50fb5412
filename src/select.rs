//! Candidate selection by highest random weight.

use digest::{Digest, consts::U20};
use sha1::Sha1;
use tracing::trace;

use crate::weight::{Weight, weight_of};

/// Pick the owner of `key` among `candidates`.
///
/// Returns a reference into `candidates`, or `None` when the slice is empty
/// (an empty membership set is a legitimate state, not an error). The answer
/// does not depend on candidate order: each candidate's weight for the key is
/// computed independently and the highest wins. Should two candidates ever
/// produce the exact same digest, the first one in slice order wins, so the
/// result stays deterministic for a fixed input.
///
/// Removing a candidate from a set of `n` changes the answer only for keys
/// that candidate owned, about `1/n` of them; every other key keeps its
/// owner. Keys that do move land on their previous runner-up.
pub fn choose<C: AsRef<[u8]>>(candidates: &[C], key: impl AsRef<[u8]>) -> Option<&C> {
    choose_with::<Sha1, C>(candidates, key.as_ref())
}

/// [`choose`] over an explicit 160-bit digest (see [`weight_of`]).
pub fn choose_with<'a, D, C>(candidates: &'a [C], key: &[u8]) -> Option<&'a C>
where
    D: Digest<OutputSize = U20>,
    C: AsRef<[u8]>,
{
    let mut best: Option<(&C, Weight)> = None;

    for candidate in candidates {
        let weight = weight_of::<D>(candidate.as_ref(), key);
        match best {
            // Strictly greater replaces, so the first of an exact tie wins.
            Some((_, best_weight)) if weight <= best_weight => {}
            _ => best = Some((candidate, weight)),
        }
    }

    best.map(|(candidate, weight)| {
        trace!(%weight, candidates = candidates.len(), "selected owner");
        candidate
    })
}
