pub mod base;
pub mod base_traits;
mod context;
pub mod error;
pub mod widget_dao;

pub use base::DaoBase;
pub use base_traits::{HasIdColumn, TimestampedActiveModel};
pub use context::DaoContext;
pub use error::{DaoLayerError, DaoResult};
pub use widget_dao::{WidgetDao, WidgetOrder, WidgetOrderColumn};
