pub mod app;
pub mod event;
pub mod input;
pub mod splash;
pub mod theme;
pub mod widgets;

pub use app::{App, Stage};
pub use theme::Theme;
