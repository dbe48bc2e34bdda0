//! Room assignment schemes for Hilbert's Grand Hotel.
//!
//! Two kinds of components live here: the finite [`registry::Registry`] used to
//! animate the shifting demos, and the pure encoders in [`encode`] that map a
//! guest address to a room number. Nothing in this crate performs I/O.

pub mod encode;
pub mod error;
pub mod registry;
pub mod theory;

pub use error::{EncodeError, ParseError};
