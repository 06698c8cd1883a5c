use crate::commands::resolve;
use crate::config::{Config, DEFAULT_CONFIG_NAME};
use anyhow::{anyhow, Result};
use clap::Args;
use colored::Colorize;
use sitebuilder_schema::templates;
use std::fs;
use std::path::PathBuf;

#[derive(Debug, Args)]
pub struct InitArgs {
    /// Starter template (blank, landing, portfolio)
    #[arg(short, long, default_value = "landing")]
    pub template: String,

    /// Page file to create (defaults to <pagesDir>/home.json)
    #[arg(short, long)]
    pub out: Option<String>,

    /// Force overwrite existing files
    #[arg(short, long)]
    pub force: bool,
}

pub fn init(args: InitArgs, cwd: &str) -> Result<()> {
    let page = templates::template(&args.template).ok_or_else(|| {
        anyhow!(
            "Unknown template: {}. Use one of: {}",
            args.template,
            templates::template_names().join(", ")
        )
    })?;

    println!("{}", "📝 Initializing Sitebuilder project...".bright_blue().bold());

    let config_path = PathBuf::from(cwd).join(DEFAULT_CONFIG_NAME);
    let config = if config_path.exists() && !args.force {
        println!("  {} {} already exists, keeping it", "•".dimmed(), DEFAULT_CONFIG_NAME);
        Config::load(cwd)?
    } else {
        let config = Config::default();
        fs::write(&config_path, serde_json::to_string_pretty(&config)?)?;
        println!("  {} Created {}", "✓".green(), DEFAULT_CONFIG_NAME);
        config
    };

    let page_path = match &args.out {
        Some(out) => resolve(cwd, out),
        None => config.get_pages_dir(cwd).join("home.json"),
    };

    if page_path.exists() && !args.force {
        println!("{} {} already exists", "⚠️".yellow(), page_path.display().to_string().bright_white());
        println!("Use --force to overwrite");
        return Ok(());
    }

    if let Some(parent) = page_path.parent() {
        fs::create_dir_all(parent)?;
    }
    fs::write(&page_path, serde_json::to_string_pretty(&page)?)?;
    println!(
        "  {} Created {} from the {} template",
        "✓".green(),
        page_path.display(),
        args.template.bright_white()
    );

    println!();
    println!("{}", "✅ Project initialized!".green().bold());
    println!();
    println!("Next steps:");
    println!("  1. Edit {}", page_path.display());
    println!("  2. Run: sitebuilder build");
    println!("  3. Check output in {}/", config.out_dir);

    Ok(())
}
