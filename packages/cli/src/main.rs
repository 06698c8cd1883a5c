mod commands;
mod config;

use clap::{Parser, Subcommand};
use colored::Colorize;
use commands::{
    apply, build, init, palette, render, validate, ApplyArgs, BuildArgs, InitArgs, PaletteArgs, RenderArgs,
    ValidateArgs,
};

/// Sitebuilder CLI - page schemas in, HTML out
#[derive(Parser, Debug)]
#[command(name = "sitebuilder")]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Initialize a project with a starter page
    Init(InitArgs),

    /// Check a page schema file
    Validate(ValidateArgs),

    /// Render one page to HTML
    Render(RenderArgs),

    /// Render every page in the pages directory
    Build(BuildArgs),

    /// Apply a mutation log to a stored page
    Apply(ApplyArgs),

    /// List the components available for new nodes
    Palette(PaletteArgs),
}

fn main() {
    // Logs on stderr, stdout carries rendered output
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let result = std::env::current_dir()
        .map_err(anyhow::Error::from)
        .and_then(|cwd| {
            let cwd = cwd.display().to_string();
            match cli.command {
                Command::Init(args) => init(args, &cwd),
                Command::Validate(args) => validate(args, &cwd),
                Command::Render(args) => render(args, &cwd),
                Command::Build(args) => build(args, &cwd),
                Command::Apply(args) => apply(args, &cwd),
                Command::Palette(args) => palette(args, &cwd),
            }
        });

    if let Err(err) = result {
        eprintln!();
        eprintln!("{} {}", "Error:".red().bold(), err);
        eprintln!();
        std::process::exit(1);
    }
}
