//! Statements and normalized results.
//!
//! - `statement` - Statement text with named parameters
//! - `results` - Record and ResultSet, the shape every transport returns

pub mod results;
pub mod statement;

pub use results::{Record, ResultSet};
pub use statement::Statement;
