//! Pure data structures shared across the page components.

pub mod cart;
pub mod fragment;
pub mod query;

pub use cart::*;
pub use fragment::*;
pub use query::*;
