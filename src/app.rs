use dioxus::prelude::*;

use vitrine_ui::theme::GLOBAL_STYLES;
use vitrine_ui::{Card, CardDescription, CardImage, CardTags, CardTitle, Showcase};

use crate::demo_options;

/// One sample entry in the demo gallery.
#[derive(Clone, PartialEq)]
struct Article {
    title: &'static str,
    description: &'static str,
    tags: &'static [&'static str],
    href: &'static str,
    accent: &'static str,
}

fn sample_articles() -> Vec<Article> {
    vec![
        Article {
            title: "Terrace Atlas",
            description: "Field guide to rooftop gardens across the city, mapped season by season.",
            tags: &["maps", "gardens"],
            href: "https://example.com/terrace-atlas",
            accent: "darkseagreen",
        },
        Article {
            title: "Ledger Lines",
            description: "Notation experiments for polyrhythmic scores, rendered in the browser.",
            tags: &["music", "webgl"],
            href: "https://example.com/ledger-lines",
            accent: "steelblue",
        },
        Article {
            title: "Cold Proof",
            description: "A sourdough timing calculator with overnight fermentation schedules.",
            tags: &["baking", "tools"],
            href: "https://example.com/cold-proof",
            accent: "peru",
        },
        Article {
            title: "Quiet Harbor",
            description: "Ambient soundscapes recorded at working ports, mixed for focus.",
            tags: &["audio", "field-recording"],
            href: "https://example.com/quiet-harbor",
            accent: "slategray",
        },
        Article {
            title: "Paper Orbit",
            description: "Printable star charts generated for any date and latitude.",
            tags: &["astronomy", "print"],
            href: "https://example.com/paper-orbit",
            accent: "darkslateblue",
        },
    ]
}

/// Placeholder cover image as an inline SVG data URI.
fn placeholder_image(title: &str, accent: &str) -> String {
    format!(
        "data:image/svg+xml;utf8,<svg xmlns='http://www.w3.org/2000/svg' width='640' height='360'>\
<rect width='640' height='360' fill='{accent}'/>\
<text x='32' y='64' font-family='sans-serif' font-size='36' fill='white'>{title}</text>\
</svg>"
    )
}

/// Root demo component.
///
/// Injects the global stylesheet and renders the sample articles inside
/// a showcase configured from the command line.
#[component]
pub fn App() -> Element {
    let options = demo_options();
    let slides = sample_articles()
        .into_iter()
        .map(|article| {
            rsx! {
                Card {
                    CardTags {
                        for tag in article.tags.iter() {
                            span { class: "tag", "{tag}" }
                        }
                    }
                    CardTitle { "{article.title}" }
                    CardDescription { "{article.description}" }
                    CardImage {
                        src: placeholder_image(article.title, article.accent),
                        alt: "Cover for {article.title}",
                        href: article.href.to_string(),
                    }
                }
            }
        })
        .collect::<Vec<_>>();

    rsx! {
        style { {GLOBAL_STYLES} }
        div { style: "max-width: 1100px; margin: 0 auto; padding: 2rem 1rem;",
            h1 { style: "margin-bottom: 1rem;", "Vitrine Gallery" }
            Showcase {
                direction: options.direction,
                align: options.align,
                card_width: options.card_width,
                scrub: options.scrub,
                slides,
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sample_articles_are_complete() {
        let articles = sample_articles();
        assert!(articles.len() >= 3);
        for article in &articles {
            assert!(!article.title.is_empty());
            assert!(article.href.starts_with("https://"));
            assert!(!article.tags.is_empty());
        }
    }

    #[test]
    fn placeholder_image_is_a_data_uri() {
        let uri = placeholder_image("Terrace Atlas", "darkseagreen");
        assert!(uri.starts_with("data:image/svg+xml"));
        assert!(uri.contains("Terrace Atlas"));
    }
}
