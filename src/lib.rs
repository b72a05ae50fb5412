//! Rendezvous (highest random weight) hashing for deterministic owner selection.
//!
//! Given a key and a set of candidate owners, [`choose`] picks exactly one
//! candidate such that:
//! - the choice is deterministic and reproducible across processes without
//!   coordination,
//! - the choice does not depend on the order candidates are presented in,
//! - adding or removing a candidate remaps only the keys owned by that
//!   candidate, roughly `1/N` of them.
//!
//! Each candidate's score for a key is [`compute_weight`]: the SHA-1 digest of
//! `candidate ++ 0x00 ++ key`, compared as unsigned bytes. SHA-1 is used here
//! purely for its output distribution, not for security. Every cooperating
//! process must use the same primitive and the same byte encoding for
//! candidates and keys (UTF-8 for text), or they will disagree on owners.
//!
//! Both operations are pure and stateless: no locking, no I/O, safe to call
//! concurrently from any number of threads. Cost per call is one digest per
//! candidate.

mod select;
mod weight;

pub use select::{choose, choose_with};
pub use weight::{Weight, compute_weight, weight_of};
