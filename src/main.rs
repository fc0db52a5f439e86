#![allow(non_snake_case)]

mod app;
mod components;
pub mod context;
mod pages;
mod theme;

use clap::Parser;
use dioxus::desktop::{Config, WindowBuilder};
use portfolio_core::MotionConfig;
use tracing_subscriber::EnvFilter;

/// Portfolio - personal site with motion
#[derive(Parser, Debug)]
#[command(name = "portfolio-desktop")]
#[command(about = "Personal portfolio page with custom cursor, typewriter and scroll reveals")]
struct Args {
    /// Window width in logical pixels
    #[arg(long, default_value_t = 1200.0)]
    width: f64,

    /// Window height in logical pixels
    #[arg(long, default_value_t = 860.0)]
    height: f64,

    /// Window title
    #[arg(short, long, default_value = "Portfolio")]
    title: String,
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("portfolio=info,portfolio_core=info")),
        )
        .init();

    let args = Args::parse();

    // Constants are compiled in, but a bad edit should fail loudly at startup
    if let Err(e) = MotionConfig::default().validate() {
        tracing::error!("Invalid motion config: {}", e);
        std::process::exit(1);
    }

    tracing::info!("Starting '{}' at {}x{}", args.title, args.width, args.height);

    let config = Config::new().with_window(
        WindowBuilder::new()
            .with_title(&args.title)
            .with_inner_size(dioxus::desktop::LogicalSize::new(args.width, args.height))
            .with_resizable(true),
    );

    dioxus::LaunchBuilder::desktop()
        .with_cfg(config)
        .launch(app::App);
}
