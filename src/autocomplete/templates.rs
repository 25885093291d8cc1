//! Row markup rendering with Tera

use crate::error::Result;
use serde::Serialize;
use tera::{Context, Tera};

pub const ROW_TEMPLATE: &str = "row.html";

/// Template renderer for dropdown rows
pub struct Templates {
    tera: Tera,
}

impl Templates {
    /// Create a renderer with the embedded row template
    pub fn new() -> Result<Self> {
        Self::with_row_template(include_str!("../templates/row.html"))
    }

    /// Create a renderer with a caller-supplied row template.
    ///
    /// The template sees `label`, `permalink` and `index`.
    pub fn with_row_template(source: &str) -> Result<Self> {
        let mut tera = Tera::default();
        tera.add_raw_template(ROW_TEMPLATE, source)?;
        tera.set_escape_fn(escape_html);
        Ok(Self { tera })
    }

    /// Render a template with context
    pub fn render(&self, template: &str, context: &impl Serialize) -> Result<String> {
        let ctx = Context::from_serialize(context)?;
        Ok(self.tera.render(template, &ctx)?)
    }
}

/// Escape text for HTML content and quoted attributes; `/` is left alone
/// so links stay readable.
fn escape_html(input: &str) -> String {
    let mut output = String::with_capacity(input.len());
    for c in input.chars() {
        match c {
            '&' => output.push_str("&amp;"),
            '<' => output.push_str("&lt;"),
            '>' => output.push_str("&gt;"),
            '"' => output.push_str("&quot;"),
            '\'' => output.push_str("&#x27;"),
            '`' => output.push_str("&#x60;"),
            _ => output.push(c),
        }
    }
    output
}
