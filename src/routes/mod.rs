mod entry;
pub mod public;
pub mod widgets;

pub use entry::router;
