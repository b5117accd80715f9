pub mod widget;

pub use widget::{ListWidgetsQuery, WidgetInput, WidgetOrderBy, WidgetPatch, WidgetResponse};
