#![allow(non_snake_case)]

mod app;

use std::sync::OnceLock;

use clap::{Parser, ValueEnum};
use dioxus::desktop::{Config, WindowBuilder};
use vitrine_ui::{Align, CardWidth, Direction};

/// Showcase options chosen at launch, read by the demo page.
static OPTIONS: OnceLock<DemoOptions> = OnceLock::new();

/// Showcase configuration for the demo gallery.
#[derive(Clone, Copy, Debug, Default)]
pub struct DemoOptions {
    pub direction: Direction,
    pub align: Align,
    pub card_width: CardWidth,
    pub scrub: bool,
}

/// Returns the options set from the command line (defaults otherwise).
pub fn demo_options() -> DemoOptions {
    OPTIONS.get().copied().unwrap_or_default()
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum DirectionArg {
    Horizontal,
    Vertical,
}

impl From<DirectionArg> for Direction {
    fn from(arg: DirectionArg) -> Self {
        match arg {
            DirectionArg::Horizontal => Direction::Horizontal,
            DirectionArg::Vertical => Direction::Vertical,
        }
    }
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum AlignArg {
    Start,
    Center,
    End,
}

impl From<AlignArg> for Align {
    fn from(arg: AlignArg) -> Self {
        match arg {
            AlignArg::Start => Align::Start,
            AlignArg::Center => Align::Center,
            AlignArg::End => Align::End,
        }
    }
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum CardWidthArg {
    Sm,
    Md,
    Lg,
}

impl From<CardWidthArg> for CardWidth {
    fn from(arg: CardWidthArg) -> Self {
        match arg {
            CardWidthArg::Sm => CardWidth::Sm,
            CardWidthArg::Md => CardWidth::Md,
            CardWidthArg::Lg => CardWidth::Lg,
        }
    }
}

/// Vitrine - card & showcase component gallery
#[derive(Parser, Debug)]
#[command(name = "vitrine-demo")]
#[command(about = "Vitrine - demo gallery for the card and showcase components")]
struct Args {
    /// Scroll axis of the showcase strip
    #[arg(long, value_enum, default_value_t = DirectionArg::Horizontal)]
    direction: DirectionArg,

    /// Snap alignment of each slide
    #[arg(long, value_enum, default_value_t = AlignArg::Center)]
    align: AlignArg,

    /// Responsive slide width
    #[arg(long, value_enum, default_value_t = CardWidthArg::Md)]
    card_width: CardWidthArg,

    /// Tie the entrance animation to scroll position
    #[arg(long)]
    scrub: bool,
}

fn main() {
    tracing_subscriber::fmt::init();

    let args = Args::parse();
    let options = DemoOptions {
        direction: args.direction.into(),
        align: args.align.into(),
        card_width: args.card_width.into(),
        scrub: args.scrub,
    };
    let _ = OPTIONS.set(options);

    tracing::info!(?options, "starting demo gallery");

    let config = Config::new().with_window(
        WindowBuilder::new()
            .with_title("Vitrine Gallery")
            .with_inner_size(dioxus::desktop::LogicalSize::new(1100.0, 800.0))
            .with_resizable(true),
    );

    dioxus::LaunchBuilder::desktop()
        .with_cfg(config)
        .launch(app::App);
}
