use std::fmt::Write;

use color_eyre::eyre::{Context, Result};
use html_escape::{encode_double_quoted_attribute, encode_text};
use menugen_nav::RenderInstruction;
use tera::Tera;

use crate::config::Config;

// Template constant - serves as the built-in page shell
const DEFAULT_TEMPLATE: &str = include_str!("../templates/default.html");

/// Render the instruction sequence into the container fragment.
///
/// Headings become `<h2>`/`<h3>` elements, links become anchors with the
/// configured style class. All text and attribute values are escaped; the
/// manifest is not trusted to be HTML-safe.
#[must_use]
pub fn render_fragment(
  instructions: &[RenderInstruction],
  config: &Config,
) -> String {
  let mut html = format!(
    "<div class=\"{}\">\n",
    encode_double_quoted_attribute(&config.container_class)
  );

  for instruction in instructions {
    // Writing into a String cannot fail
    match instruction {
      RenderInstruction::Heading { level, text } => {
        let _ = writeln!(
          html,
          "  <h{level}>{}</h{level}>",
          encode_text(text)
        );
      },
      RenderInstruction::Link { href, text } => {
        let _ = writeln!(
          html,
          "  <a class=\"{}\" href=\"{}\">{}</a>",
          encode_double_quoted_attribute(&config.link_class),
          encode_double_quoted_attribute(href),
          encode_text(text)
        );
      },
    }
  }

  html.push_str("</div>\n");
  html
}

/// Render a complete standalone page around the container fragment.
pub fn render_page(fragment: &str, config: &Config) -> Result<String> {
  let mut tera = Tera::default();
  tera
    .add_raw_template("default", DEFAULT_TEMPLATE)
    .wrap_err("Failed to register page template")?;

  let mut tera_context = tera::Context::new();
  tera_context.insert("content", fragment);
  tera_context.insert("title", &config.title);
  tera_context.insert("footer_text", &config.footer_text);

  tera
    .render("default", &tera_context)
    .wrap_err("Failed to render page template")
}
