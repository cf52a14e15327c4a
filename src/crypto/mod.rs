//! Hashing primitives. A password is digested once with a plain SHA family hash, which
//! is fast by nature. This is not a key derivation function.

pub mod algorithm;
pub mod constant_time;
pub mod digest;
