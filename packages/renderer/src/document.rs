use crate::context::{Context, RenderMode, RenderOptions};
use crate::escape::escape_html;
use crate::renderer::{render_node, render_stylesheet};
use serde::{Deserialize, Serialize};
use sitebuilder_schema::PageSchemaRef;

/// Head metadata for a published page
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PageMeta {
    pub title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default = "default_lang")]
    pub lang: String,
}

fn default_lang() -> String {
    "en".to_string()
}

impl PageMeta {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            description: None,
            lang: default_lang(),
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn with_lang(mut self, lang: impl Into<String>) -> Self {
        self.lang = lang.into();
        self
    }

    /// Pick the first non-blank of the SEO title, the page title and the site name
    pub fn title_from(seo_title: Option<&str>, page_title: Option<&str>, site_name: &str) -> Self {
        let title = [seo_title, page_title]
            .into_iter()
            .flatten()
            .map(str::trim)
            .find(|title| !title.is_empty())
            .unwrap_or(site_name);
        Self::new(title)
    }
}

/// Render a complete published HTML document.
///
/// The mode in `options` is ignored: pages are always published output.
pub fn render_page(schema: PageSchemaRef<'_>, meta: &PageMeta, options: &RenderOptions) -> String {
    let options = RenderOptions {
        mode: RenderMode::Published,
        selected: None,
        hovered: None,
        ..options.clone()
    };
    let mut ctx = Context::new(&options);

    ctx.add_line("<!DOCTYPE html>");
    ctx.add_line(&format!("<html lang=\"{}\">", escape_html(&meta.lang)));
    ctx.indent();

    ctx.add_line("<head>");
    ctx.indent();
    ctx.add_line("<meta charset=\"UTF-8\">");
    ctx.add_line("<meta name=\"viewport\" content=\"width=device-width, initial-scale=1.0\">");
    ctx.add_line(&format!("<title>{}</title>", escape_html(&meta.title)));
    if let Some(description) = &meta.description {
        ctx.add_line(&format!(
            "<meta name=\"description\" content=\"{}\">",
            escape_html(description)
        ));
    }
    if options.responsive {
        render_stylesheet(schema.root_nodes, &mut ctx);
    }
    ctx.dedent();
    ctx.add_line("</head>");

    ctx.add_line("<body>");
    ctx.indent();
    for node in schema.root_nodes {
        render_node(node, &mut ctx);
    }
    ctx.dedent();
    ctx.add_line("</body>");

    ctx.dedent();
    ctx.add_line("</html>");

    ctx.get_output()
}
