//! Interactive behavior of the portfolio page, independent of the browser.
//!
//! [`PageController`] holds every piece of page-lifetime state and drives a
//! [`Page`], which the hydrate build implements over the live DOM and tests
//! implement in memory.

mod banner;
mod config;
mod controller;
mod error;
mod menu;
mod nav;
mod reveal;
mod ripple;
mod shortcuts;
mod skills;
mod typing;
mod viewport;

pub use banner::{banner_for_host, banner_lines, BannerLine};
pub use config::{
    NavConfig, PortfolioConfig, RevealConfig, RippleConfig, TypingConfig, CONFIG_ELEMENT_ID,
};
pub use controller::{Page, PageController, Timer};
pub use error::PortfolioError;
pub use menu::MobileMenu;
pub use nav::{active_section, anchor_target, ScrollTracker, ScrollUpdate};
pub use reveal::{RevealAnimator, RevealEntry, RevealOutcome, REVEAL_SELECTOR};
pub use ripple::{Ripple, RippleId, RIPPLE_KEYFRAMES};
pub use shortcuts::{is_keyboard_navigation, shortcut_target, KeyInput};
pub use skills::{plan_fills, BarFill, Progress, PROGRESS_ATTR};
pub use typing::{TypingCycle, TypingFrame, TypingPhase};
pub use viewport::{intersection_ratio, Rect, SectionBounds, Viewport};

/// Build timestamp stamped by `build.rs`.
pub const BUILD_TIME: &str = env!("BUILD_TIME");
