pub mod apply;
pub mod build;
pub mod init;
pub mod palette;
pub mod render;
pub mod validate;

pub use apply::{apply, ApplyArgs};
pub use build::{build, BuildArgs};
pub use init::{init, InitArgs};
pub use palette::{palette, PaletteArgs};
pub use render::{render, RenderArgs};
pub use validate::{validate, ValidateArgs};

use anyhow::{anyhow, Result};
use sitebuilder_schema::{parse_page, PageSchema};
use std::path::{Path, PathBuf};

/// Resolve a command-line path against the working directory
pub(crate) fn resolve(cwd: &str, path: &str) -> PathBuf {
    let path = PathBuf::from(path);
    if path.is_absolute() {
        path
    } else {
        PathBuf::from(cwd).join(path)
    }
}

/// Read and validate a page schema file
pub(crate) fn read_page(path: &Path) -> Result<PageSchema> {
    let source = std::fs::read_to_string(path)
        .map_err(|e| anyhow!("Cannot read {}: {}", path.display(), e))?;
    parse_page(&source).map_err(|e| anyhow!("{}: {}", path.display(), e))
}
