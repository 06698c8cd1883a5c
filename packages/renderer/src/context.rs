use serde::{Deserialize, Serialize};
use sitebuilder_schema::Breakpoint;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RenderMode {
    /// Editor canvas markup with selection hooks and drop placeholders
    Editable,
    #[default]
    Published,
}

/// Options for HTML rendering
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct RenderOptions {
    pub mode: RenderMode,
    /// Node drawn with the selection outline (editable mode)
    pub selected: Option<String>,
    /// Node drawn with the hover outline, unless it is also selected
    pub hovered: Option<String>,
    /// Viewport the editable canvas emulates
    pub breakpoint: Breakpoint,
    /// Pretty print HTML
    pub pretty: bool,
    /// Indentation string
    pub indent: String,
    /// Emit md/sm overlays as a media-query stylesheet
    pub responsive: bool,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            mode: RenderMode::Published,
            selected: None,
            hovered: None,
            breakpoint: Breakpoint::Base,
            pretty: true,
            indent: "  ".to_string(),
            responsive: false,
        }
    }
}

impl RenderOptions {
    pub fn published() -> Self {
        Self::default()
    }

    pub fn editable() -> Self {
        Self {
            mode: RenderMode::Editable,
            ..Self::default()
        }
    }

    pub fn with_selection(mut self, selected: Option<&str>, hovered: Option<&str>) -> Self {
        self.selected = selected.map(str::to_string);
        self.hovered = hovered.map(str::to_string);
        self
    }

    pub fn with_breakpoint(mut self, breakpoint: Breakpoint) -> Self {
        self.breakpoint = breakpoint;
        self
    }

    pub fn with_responsive(mut self, responsive: bool) -> Self {
        self.responsive = responsive;
        self
    }

    pub fn compact(mut self) -> Self {
        self.pretty = false;
        self
    }

    pub fn is_editable(&self) -> bool {
        self.mode == RenderMode::Editable
    }
}

/// Output buffer with indentation tracking
pub(crate) struct Context<'a> {
    pub options: &'a RenderOptions,
    depth: usize,
    buffer: String,
}

impl<'a> Context<'a> {
    pub fn new(options: &'a RenderOptions) -> Self {
        Self {
            options,
            depth: 0,
            buffer: String::new(),
        }
    }

    pub fn add(&mut self, text: &str) {
        self.buffer.push_str(text);
    }

    pub fn add_line(&mut self, text: &str) {
        if self.options.pretty {
            self.add_indent();
        }
        self.add(text);
        if self.options.pretty {
            self.add("\n");
        }
    }

    /// Append pre-rendered, multi-line markup at the current depth
    pub fn add_block(&mut self, block: &str) {
        for line in block.lines() {
            self.add_line(line);
        }
    }

    fn add_indent(&mut self) {
        for _ in 0..self.depth {
            self.buffer.push_str(&self.options.indent);
        }
    }

    pub fn indent(&mut self) {
        self.depth += 1;
    }

    pub fn dedent(&mut self) {
        if self.depth > 0 {
            self.depth -= 1;
        }
    }

    pub fn get_output(self) -> String {
        self.buffer
    }
}
