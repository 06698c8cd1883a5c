use anyhow::Result;
use clap::Args;
use colored::Colorize;
use sitebuilder_schema::{palette_by_category, PaletteCategory, COMPONENT_PALETTE};

#[derive(Debug, Args)]
pub struct PaletteArgs {
    /// Print the palette as JSON
    #[arg(long)]
    pub json: bool,
}

pub fn palette(args: PaletteArgs, _cwd: &str) -> Result<()> {
    if args.json {
        println!("{}", serde_json::to_string_pretty(&COMPONENT_PALETTE)?);
    } else {
        print!("{}", palette_listing());
    }
    Ok(())
}

fn category_title(category: PaletteCategory) -> &'static str {
    match category {
        PaletteCategory::Layout => "Layout",
        PaletteCategory::Content => "Content",
    }
}

/// Plain-text palette, one block per category
pub(crate) fn palette_listing() -> String {
    let mut out = String::new();
    for category in [PaletteCategory::Layout, PaletteCategory::Content] {
        out.push_str(&format!("{}\n", category_title(category).bold()));
        for entry in palette_by_category(category) {
            out.push_str(&format!("  {:<10} {}\n", entry.label, entry.node_type.to_string().dimmed()));
        }
    }
    out
}
