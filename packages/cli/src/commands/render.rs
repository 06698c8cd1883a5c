use crate::commands::{read_page, resolve};
use crate::config::Config;
use anyhow::Result;
use clap::Args;
use colored::Colorize;
use sitebuilder_renderer::{render_canvas, render_page, PageMeta, RenderMode};
use std::fs;
use std::path::Path;

#[derive(Debug, Args)]
pub struct RenderArgs {
    /// Page schema file
    pub file: String,

    /// Render the editor canvas instead of a published page
    #[arg(long)]
    pub editable: bool,

    /// Output file (defaults to <outDir>/<page>.html)
    #[arg(short, long)]
    pub out: Option<String>,

    /// Output to stdout instead of a file
    #[arg(long)]
    pub stdout: bool,

    /// Document title (defaults to the page file name)
    #[arg(long)]
    pub title: Option<String>,

    /// Emit md/sm style overlays (overrides config)
    #[arg(long)]
    pub responsive: bool,
}

pub fn render(args: RenderArgs, cwd: &str) -> Result<()> {
    let config = Config::load(cwd)?;
    let path = resolve(cwd, &args.file);
    let page = read_page(&path)?;
    let stem = page_stem(&path);

    let mode = if args.editable {
        RenderMode::Editable
    } else {
        RenderMode::Published
    };
    let mut options = config.render_options(mode);
    options.responsive |= args.responsive;

    let output = if args.editable {
        render_canvas(&page.root_nodes, &options)
    } else {
        let meta = PageMeta::title_from(args.title.as_deref(), None, &stem);
        render_page(page.view(), &meta, &options)
    };

    if args.stdout {
        println!("{}", output);
        return Ok(());
    }

    let out_file = match &args.out {
        Some(out) => resolve(cwd, out),
        None => config.get_out_dir(cwd).join(format!("{}.html", stem)),
    };
    if let Some(parent) = out_file.parent() {
        fs::create_dir_all(parent)?;
    }
    fs::write(&out_file, output)?;

    println!("  {} {} → {}", "✓".green(), path.display(), out_file.display());
    Ok(())
}

pub(crate) fn page_stem(path: &Path) -> String {
    path.file_stem()
        .and_then(|s| s.to_str())
        .unwrap_or("page")
        .to_string()
}
