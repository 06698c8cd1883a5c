use crate::commands::{read_page, resolve};
use anyhow::Result;
use clap::Args;
use colored::Colorize;
use sitebuilder_schema::{label_for, tree, Node};

#[derive(Debug, Args)]
pub struct ValidateArgs {
    /// Page schema file
    pub file: String,
}

pub fn validate(args: ValidateArgs, cwd: &str) -> Result<()> {
    let path = resolve(cwd, &args.file);
    let page = read_page(&path)?;

    let mut unknown = Vec::new();
    for root in &page.root_nodes {
        root.walk(&mut |node| {
            if !node.node_type.is_known() {
                unknown.push(format!("{} ({})", node.id, node.node_type));
            }
        });
    }
    let summary = component_summary(&page.root_nodes)
        .into_iter()
        .map(|(label, count)| format!("{} {}", count, label))
        .collect::<Vec<_>>()
        .join(", ");

    println!(
        "{} {} is valid: {} root nodes, {} nodes total (version {})",
        "✓".green(),
        path.display(),
        page.root_nodes.len(),
        tree::count_nodes(&page.root_nodes),
        page.version
    );
    if !summary.is_empty() {
        println!("  {} {}", "•".dimmed(), summary);
    }
    for node in unknown {
        println!("  {} unknown component type on {}", "⚠️".yellow(), node);
    }

    Ok(())
}

/// Node counts per component label, in first-seen order
fn component_summary(nodes: &[Node]) -> Vec<(String, usize)> {
    let mut counts: Vec<(String, usize)> = Vec::new();
    for root in nodes {
        root.walk(&mut |node| {
            let label = label_for(&node.node_type);
            match counts.iter_mut().find(|(seen, _)| *seen == label) {
                Some((_, count)) => *count += 1,
                None => counts.push((label, 1)),
            }
        });
    }
    counts
}
