//! Vitrine UI Components
//!
//! Presentational Dioxus components for a larger front-end:
//!
//! - **Card composite** — [`Card`] with independent sub-parts
//!   ([`CardTags`], [`CardTitle`], [`CardDescription`], [`CardImage`])
//!   composed explicitly by the caller. The image block reveals a
//!   call-to-action overlay on hover.
//! - **Showcase** — [`Showcase`], a scroll-snapped strip of slides
//!   with previous/next navigation and a staggered entrance animation
//!   that is fully reverted on unmount.
//!
//! Inject [`theme::GLOBAL_STYLES`] once near the application root to
//! pick up the styling these components rely on.

pub mod animation;
pub mod components;
pub mod slides;
pub mod theme;

pub use components::*;
pub use slides::Align;
