//! Registration schema: field identities, constraint data, and validation

mod constraint;
mod fields;
mod validate;

pub use constraint::*;
pub use fields::*;
pub use validate::*;
