use crate::commands::resolve;
use crate::config::Config;
use anyhow::{anyhow, Result};
use clap::Args;
use colored::Colorize;
use sitebuilder_editor::{DocumentStore, FilePageStore, Mutation, PageStore};
use std::fs;
use tracing::info;

#[derive(Debug, Args)]
pub struct ApplyArgs {
    /// Page id under the pages directory (`home` for pages/home.json)
    pub page: String,

    /// JSON file holding an array of mutations
    pub mutations: String,

    /// Report the result without saving
    #[arg(long)]
    pub dry_run: bool,
}

/// Replay a mutation log against a stored page as one undoable edit
pub fn apply(args: ApplyArgs, cwd: &str) -> Result<()> {
    let config = Config::load(cwd)?;
    let pages = FilePageStore::new(config.get_pages_dir(cwd));
    let runtime = tokio::runtime::Builder::new_current_thread().enable_all().build()?;

    let schema = runtime
        .block_on(pages.load(&args.page))?
        .ok_or_else(|| anyhow!("Page not found: {}", args.page))?;

    let log_path = resolve(cwd, &args.mutations);
    let source = fs::read_to_string(&log_path)
        .map_err(|e| anyhow!("Cannot read {}: {}", log_path.display(), e))?;
    let mutations: Vec<Mutation> = serde_json::from_str(&source)
        .map_err(|e| anyhow!("{}: {}", log_path.display(), e))?;
    for (index, mutation) in mutations.iter().enumerate() {
        mutation
            .validate()
            .map_err(|e| anyhow!("{}: mutation {}: {}", log_path.display(), index, e))?;
    }

    let mut store = DocumentStore::with_config(&config.editor);
    store.initialize("local", args.page.as_str(), schema);

    let total = mutations.len();
    let mut changed = 0;
    store.begin_batch(format!("Apply {}", log_path.display()));
    for mutation in mutations {
        let description = mutation.describe();
        if store.apply(mutation).is_changed() {
            changed += 1;
        } else {
            println!("  {} {} had no effect", "•".dimmed(), description);
        }
    }
    store.end_batch();

    println!(
        "{} Applied {} of {} mutations to {}",
        "✓".green(),
        changed,
        total,
        args.page.bright_white()
    );

    if args.dry_run || !store.is_dirty() {
        return Ok(());
    }

    let ticket = store.begin_save();
    match runtime.block_on(pages.save(&args.page, &ticket.schema)) {
        Ok(()) => {
            store.complete_save(&ticket);
            info!("[Apply] Saved page {}", args.page);
            println!("  {} Saved {}", "✓".green(), args.page);
            Ok(())
        }
        Err(e) => {
            store.fail_save();
            Err(e.into())
        }
    }
}
