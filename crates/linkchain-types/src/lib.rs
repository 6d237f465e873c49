//! Foundation types for Linkchain.
//!
//! Every other Linkchain crate depends on `linkchain-types` for the
//! [`Commitment`] digest that links one block to the next.

pub mod commitment;
pub mod error;

pub use commitment::{Commitment, COMMITMENT_LEN};
pub use error::TypeError;
