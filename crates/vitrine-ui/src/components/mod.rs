//! Vitrine UI components.

mod button;
mod card;
mod showcase;

pub use button::{Button, ButtonVariant, IconButton};
pub use card::{Card, CardDescription, CardImage, CardTags, CardTitle, DEFAULT_BUTTON_TEXT};
pub use showcase::{CardWidth, Direction, Showcase};
