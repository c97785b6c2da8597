pub mod config;
pub mod content;
pub mod easing;
pub mod error;
pub mod transition;

pub use config::{AppConfig, SplashConfig, TransitionConfig};
pub use content::{ContentScroll, ContentSignal};
pub use easing::EasingType;
pub use error::{Error, Result};
pub use transition::{InputDisposition, Phase, ScrollLock, SplitTransition};
