//! Showcase Component
//!
//! A scrollable strip of slides with previous/next navigation and a
//! staggered entrance animation. Index bookkeeping lives in
//! [`crate::slides`]; the entrance timeline in [`crate::animation`].
//! This module wires both into the rendered strip.

use std::cell::RefCell;
use std::rc::Rc;
use std::sync::atomic::{AtomicUsize, Ordering};

use dioxus::document;
use dioxus::prelude::*;

use crate::animation::{entrance_script, teardown_script, AnimationHandle, EntranceConfig};
use crate::components::button::IconButton;
use crate::slides::{slide_element_id, Align, SlideTracker};

/// Scroll axis of the strip
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub enum Direction {
    /// Row layout, horizontal scrolling
    #[default]
    Horizontal,
    /// Column layout, vertical scrolling
    Vertical,
}

impl Direction {
    /// Returns the CSS class for this axis
    pub fn class(&self) -> &'static str {
        match self {
            Direction::Horizontal => "showcase__strip--horizontal",
            Direction::Vertical => "showcase__strip--vertical",
        }
    }
}

/// Responsive width of each slide
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub enum CardWidth {
    /// Narrow: up to five cards per row on wide viewports
    Sm,
    /// Medium: up to four cards per row on wide viewports
    #[default]
    Md,
    /// Wide: up to three cards per row on wide viewports
    Lg,
}

impl CardWidth {
    /// Returns the CSS class for this width
    pub fn class(&self) -> &'static str {
        match self {
            CardWidth::Sm => "showcase__item--sm",
            CardWidth::Md => "showcase__item--md",
            CardWidth::Lg => "showcase__item--lg",
        }
    }
}

/// Instance ids keep slide element ids from colliding between
/// showcases on the same page.
static INSTANCE_COUNTER: AtomicUsize = AtomicUsize::new(0);

fn next_instance_id() -> String {
    format!("showcase-{}", INSTANCE_COUNTER.fetch_add(1, Ordering::Relaxed))
}

/// Scrollable strip of slides with navigation and entrance animation
///
/// Previous stops at the first slide; Next wraps past the last back to
/// the first and always scrolls, wrap included. On mount the slides
/// stagger into view as the strip scrolls into the viewport; the
/// bindings are fully reverted on unmount.
///
/// # Example
///
/// ```rust,ignore
/// rsx! {
///     Showcase {
///         direction: Direction::Horizontal,
///         align: Align::Center,
///         card_width: CardWidth::Md,
///         scrub: false,
///         slides: articles.iter().map(|a| rsx! { ArticleCard { article: a.clone() } }).collect(),
///     }
/// }
/// ```
#[component]
pub fn Showcase(
    /// Slides in scroll order
    slides: Vec<Element>,
    /// Scroll axis
    #[props(default)]
    direction: Direction,
    /// Snap alignment of each slide (and the inline alignment used by
    /// Previous; Next always scrolls with `start` alignment)
    #[props(default)]
    align: Align,
    /// Responsive slide width
    #[props(default)]
    card_width: CardWidth,
    /// Tie entrance progress to scroll position instead of playing once
    #[props(default = false)]
    scrub: bool,
    /// Optional additional CSS classes for the strip
    #[props(default)]
    class: Option<String>,
) -> Element {
    let slide_count = slides.len();
    let instance_id = use_hook(next_instance_id);
    let mut tracker = use_signal(|| SlideTracker::new(slide_count, align));

    // Entrance animation: begin once on mount, dispose on unmount.
    let animation: Rc<RefCell<Option<AnimationHandle>>> =
        use_hook(|| Rc::new(RefCell::new(None)));
    {
        let animation = animation.clone();
        let instance = instance_id.clone();
        use_effect(move || {
            if let Some(mut prior) = animation.borrow_mut().take() {
                prior.dispose();
            }
            let config = EntranceConfig {
                scrub,
                ..EntranceConfig::default()
            };
            tracing::debug!(instance = %instance, slides = slide_count, "beginning entrance animation");
            let _ = document::eval(&entrance_script(&instance, slide_count, &config));

            let teardown = teardown_script(&instance);
            *animation.borrow_mut() = Some(AnimationHandle::new(move || {
                let _ = document::eval(&teardown);
            }));
        });
    }
    {
        let animation = animation.clone();
        use_drop(move || {
            if let Some(mut handle) = animation.borrow_mut().take() {
                handle.dispose();
            }
        });
    }

    let on_previous = {
        let instance = instance_id.clone();
        move |_| {
            let mut guard = tracker.write();
            guard.resize(slide_count);
            if let Some(request) = guard.previous() {
                tracing::debug!(slide = request.slide, "showcase previous");
                let _ = document::eval(&request.script(&instance));
            }
        }
    };

    let on_next = {
        let instance = instance_id.clone();
        move |_| {
            let mut guard = tracker.write();
            guard.resize(slide_count);
            let request = guard.next();
            tracing::debug!(slide = request.slide, "showcase next");
            let _ = document::eval(&request.script(&instance));
        }
    };

    let extra = class.as_deref().unwrap_or("");
    let strip_class = format!("showcase__strip {} {}", direction.class(), extra);
    let item_class = format!("showcase__item {} {}", align.class(), card_width.class());

    rsx! {
        div { class: "showcase",
            div { class: "showcase__nav",
                IconButton {
                    aria_label: "Previous slide".to_string(),
                    class: "showcase__arrow".to_string(),
                    onclick: on_previous,
                    "\u{2190}"
                }
                IconButton {
                    aria_label: "Next slide".to_string(),
                    class: "showcase__arrow".to_string(),
                    onclick: on_next,
                    "\u{2192}"
                }
            }
            div {
                id: "{instance_id}",
                class: "{strip_class}",
                for (index, slide) in slides.into_iter().enumerate() {
                    div {
                        key: "{index}",
                        id: slide_element_id(&instance_id, index),
                        class: "{item_class}",
                        {slide}
                    }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn direction_classes() {
        assert_eq!(Direction::Horizontal.class(), "showcase__strip--horizontal");
        assert_eq!(Direction::Vertical.class(), "showcase__strip--vertical");
        assert_eq!(Direction::default(), Direction::Horizontal);
    }

    #[test]
    fn card_width_classes() {
        assert_eq!(CardWidth::Sm.class(), "showcase__item--sm");
        assert_eq!(CardWidth::Md.class(), "showcase__item--md");
        assert_eq!(CardWidth::Lg.class(), "showcase__item--lg");
        assert_eq!(CardWidth::default(), CardWidth::Md);
    }

    #[test]
    fn instance_ids_are_unique() {
        let first = next_instance_id();
        let second = next_instance_id();
        assert_ne!(first, second);
        assert!(first.starts_with("showcase-"));
    }
}
