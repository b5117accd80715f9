#[allow(unused_imports)]
pub mod prelude {
    pub use super::widget::Entity as Widget;
}

pub mod widget;
