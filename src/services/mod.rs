pub mod context;
pub mod widget_service;

pub use context::ServiceContext;
pub use widget_service::WidgetService;
