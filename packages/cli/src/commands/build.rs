use crate::commands::read_page;
use crate::commands::render::page_stem;
use crate::config::Config;
use anyhow::{anyhow, Result};
use clap::Args;
use colored::Colorize;
use sitebuilder_renderer::{render_page, PageMeta, RenderMode};
use std::fs;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

#[derive(Debug, Args)]
pub struct BuildArgs {
    /// Output directory (overrides config)
    #[arg(short, long)]
    pub out_dir: Option<String>,

    /// Site name used as the title fallback
    #[arg(long, default_value = "My Site")]
    pub site_name: String,
}

/// Render every page in the pages directory to published HTML
pub fn build(args: BuildArgs, cwd: &str) -> Result<()> {
    let config = Config::load(cwd)?;
    let pages_dir = config.get_pages_dir(cwd);

    if !pages_dir.exists() {
        return Err(anyhow!("Pages directory does not exist: {:?}", pages_dir));
    }

    println!("{}", "🔨 Building site...".bright_blue().bold());

    let page_files = find_page_files(&pages_dir);
    if page_files.is_empty() {
        println!("{}", "⚠️  No page files found".yellow());
        return Ok(());
    }

    let out_dir = match &args.out_dir {
        Some(out) => PathBuf::from(cwd).join(out),
        None => config.get_out_dir(cwd),
    };
    let options = config.render_options(RenderMode::Published);

    let mut success_count = 0;
    let mut error_count = 0;

    for page_file in &page_files {
        let relative_path = page_file.strip_prefix(&pages_dir).unwrap_or(page_file);
        let result = read_page(page_file).and_then(|page| {
            let title = page_stem(page_file);
            let meta = PageMeta::title_from(None, Some(&title), &args.site_name);
            let output_file = out_dir.join(relative_path).with_extension("html");
            if let Some(parent) = output_file.parent() {
                fs::create_dir_all(parent)?;
            }
            fs::write(&output_file, render_page(page.view(), &meta, &options))?;
            Ok(output_file)
        });

        match result {
            Ok(output_file) => {
                success_count += 1;
                println!("  {} {} → {}", "✓".green(), relative_path.display(), output_file.display());
            }
            Err(e) => {
                error_count += 1;
                eprintln!("  {} {} - {}", "✗".red(), relative_path.display(), e.to_string().red());
            }
        }
    }

    println!();
    if error_count == 0 {
        println!("{} Built {} pages successfully", "✅".green(), success_count);
        Ok(())
    } else {
        println!("{} Built {} pages, {} errors", "⚠️".yellow(), success_count, error_count);
        Err(anyhow!("{} pages failed to build", error_count))
    }
}

fn find_page_files(dir: &Path) -> Vec<PathBuf> {
    let mut files: Vec<PathBuf> = WalkDir::new(dir)
        .follow_links(true)
        .into_iter()
        .filter_map(|e| e.ok())
        .map(|entry| entry.into_path())
        .filter(|path| path.extension().and_then(|s| s.to_str()) == Some("json"))
        .collect();
    files.sort();
    files
}
