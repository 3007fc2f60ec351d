//! Adapter implementations for port traits.
//!
//! - `outline`: scalable TrueType/OpenType faces loaded from disk
//! - `builtin`: fixed-size bitmap face used when no font file loads

pub mod builtin;
pub mod outline;
