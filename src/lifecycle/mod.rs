//! Page assembly, configuration, and observability.

mod category_page;
mod context;
mod error;
pub mod tracing;

pub use category_page::CategoryPage;
pub use context::PageContext;
pub use error::PageError;
pub use self::tracing::setup_tracing;
