#![allow(non_snake_case)]

mod app;
pub mod context;
mod pages;
mod theme;

use std::path::PathBuf;
use std::sync::OnceLock;

use anyhow::Context as _;
use clap::Parser;
use classstruct_core::{logging, AppConfig, HeroImageSource};
use dioxus::desktop::{Config, WindowBuilder};

use crate::context::ShellContext;

/// Shell settings, set once from the command line before launch
static SHELL: OnceLock<ShellContext> = OnceLock::new();

/// Get the shell settings (set from command line or default)
pub fn get_shell_context() -> ShellContext {
    SHELL.get().cloned().unwrap_or_else(|| ShellContext::from_config(AppConfig::default()))
}

/// ClassStruct - campus onboarding shell
#[derive(Parser, Debug)]
#[command(name = "classstruct-desktop")]
#[command(about = "ClassStruct - onboarding screen and navigation shell")]
struct Args {
    /// JSON config file (default: <config dir>/classstruct/config.json if present)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Tracing filter directive, e.g. "classstruct_core=debug"
    #[arg(long)]
    log_filter: Option<String>,

    /// Hero image URL or local file path
    #[arg(long)]
    hero_image: Option<String>,

    /// Window width in logical pixels
    #[arg(long)]
    width: Option<f64>,

    /// Window height in logical pixels
    #[arg(long)]
    height: Option<f64>,
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    logging::init(args.log_filter.as_deref()).context("failed to set up logging")?;

    let mut config = AppConfig::load_or_default(args.config.as_deref()).context("failed to load config")?;
    if let Some(ref hero) = args.hero_image {
        config.hero_image = HeroImageSource::from(hero.as_str());
    }
    if let Some(width) = args.width {
        config.window.width = width;
    }
    if let Some(height) = args.height {
        config.window.height = height;
    }
    config.validate().context("invalid settings")?;

    let shell = ShellContext::from_config(config);
    let window = shell.config.window.clone();
    let _ = SHELL.set(shell);

    tracing::info!(
        "Starting '{}' at {}x{}",
        window.title,
        window.width,
        window.height
    );

    // Configure desktop window
    let desktop = Config::new()
        .with_background_color(theme::PAPER_RGBA)
        .with_window(
            WindowBuilder::new()
                .with_title(&window.title)
                .with_inner_size(dioxus::desktop::LogicalSize::new(window.width, window.height))
                .with_resizable(true),
        );

    dioxus::LaunchBuilder::desktop()
        .with_cfg(desktop)
        .launch(app::App);

    Ok(())
}
