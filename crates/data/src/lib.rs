//! Loading and validation of the balance tables.

pub mod load;
pub mod schema;

pub use load::*;
pub use schema::*;
