//! # Sitebuilder Renderer
//!
//! Turns a page tree into HTML in one of two modes:
//!
//! - **Editable**: every node carries hooks the editor canvas uses for
//!   selection and hover, empty containers show drop placeholders, and links
//!   are inert.
//! - **Published**: clean markup with real links; unsafe URL schemes are
//!   neutralised.
//!
//! Rendering is pure and infallible. Malformed props fall back to defaults.

mod context;
mod document;
mod escape;
mod renderer;
mod styles;

pub use context::{RenderMode, RenderOptions};
pub use document::{render_page, PageMeta};
pub use escape::{escape_html, kebab_case, sanitize_url};
pub use renderer::{render_canvas, render_nodes};
pub use styles::{inline_style, responsive_stylesheet};
