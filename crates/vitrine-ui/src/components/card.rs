//! Article Card Components
//!
//! A card composite with four independent sub-parts, composed
//! explicitly by the caller: a wrapping tag row, a title, a
//! description, and an image block that reveals a call-to-action
//! overlay on hover.

use dioxus::prelude::*;

use super::button::{Button, ButtonVariant};

/// Default label for the image overlay call-to-action.
pub const DEFAULT_BUTTON_TEXT: &str = "Website";

/// Card container
///
/// # Example
///
/// ```rust,ignore
/// rsx! {
///     Card {
///         CardTags {
///             span { class: "tag", "rust" }
///             span { class: "tag", "ui" }
///         }
///         CardTitle { "Vitrine" }
///         CardDescription { "Card and showcase components." }
///         CardImage {
///             src: "https://example.com/shot.png",
///             alt: "Screenshot",
///             href: "https://example.com",
///         }
///     }
/// }
/// ```
#[component]
pub fn Card(
    /// Card contents (tag row, title, description, image)
    children: Element,
    /// Optional additional CSS classes
    #[props(default)]
    class: Option<String>,
) -> Element {
    let extra = class.as_deref().unwrap_or("");
    rsx! {
        div { class: "card {extra}", {children} }
    }
}

/// Wrapping flex row for an arbitrary set of tag elements
#[component]
pub fn CardTags(
    /// Tag elements
    children: Element,
    /// Optional additional CSS classes
    #[props(default)]
    class: Option<String>,
) -> Element {
    let extra = class.as_deref().unwrap_or("");
    rsx! {
        div { class: "card__tags {extra}", {children} }
    }
}

/// Card title text
#[component]
pub fn CardTitle(
    children: Element,
    /// Optional additional CSS classes
    #[props(default)]
    class: Option<String>,
) -> Element {
    let extra = class.as_deref().unwrap_or("");
    rsx! {
        h3 { class: "card__title {extra}", {children} }
    }
}

/// Card description text
#[component]
pub fn CardDescription(
    children: Element,
    /// Optional additional CSS classes
    #[props(default)]
    class: Option<String>,
) -> Element {
    let extra = class.as_deref().unwrap_or("");
    rsx! {
        p { class: "card__description {extra}", {children} }
    }
}

/// Image block with a hover-revealed call-to-action overlay
///
/// While the pointer is over the image region an anchor to `href`
/// with a [`Button`] labeled `button_text` is shown in the lower
/// right corner. The toggle is immediate, no debounce: a rapid
/// enter/leave pair leaves the overlay hidden.
#[component]
pub fn CardImage(
    /// Image source URL
    src: String,
    /// Alt text for accessibility
    alt: String,
    /// Link target for the overlay call-to-action
    href: String,
    /// Overlay button label
    #[props(default = DEFAULT_BUTTON_TEXT.to_string())]
    button_text: String,
    /// Optional additional CSS classes
    #[props(default)]
    class: Option<String>,
) -> Element {
    let mut hovered = use_signal(|| false);
    let extra = class.as_deref().unwrap_or("");

    rsx! {
        div {
            class: "card-image {extra}",
            onmouseenter: move |_| hovered.set(true),
            onmouseleave: move |_| hovered.set(false),

            img {
                class: "card-image__img",
                src: "{src}",
                alt: "{alt}",
                draggable: false,
            }

            if hovered() {
                a {
                    class: "card-image__cta",
                    href: "{href}",
                    Button { variant: ButtonVariant::Solid, "{button_text}" }
                }
            }
        }
    }
}
