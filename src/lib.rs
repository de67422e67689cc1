mod block;
mod config;
mod error;
mod html;
mod inline;
mod parser;
mod transcript;
mod typst;

pub use block::{Block, Document, Inline, List, ListItem};
pub use config::{ClassesConfig, Config, ConfigError, LinksConfig, ListsConfig};
pub use error::{Error, Result};
pub use html::render_html;
pub use inline::parse_inline;
pub use parser::{ListMode, structure, structure_with};
pub use transcript::{ChatMessage, Role, Transcript, render_transcript};
pub use typst::render_typst;

/// Convert chat text to an HTML fragment using the compiled default config.
pub fn text_to_html(text: &str) -> String {
    text_to_html_with_config(text, &Config::compiled_default())
}

/// Convert chat text to an HTML fragment with custom config.
pub fn text_to_html_with_config(text: &str, config: &Config) -> String {
    let doc = structure_with(text, config.lists.mode);
    render_html(&doc, config)
}

/// Convert chat text to Typst markup.
pub fn text_to_typst(text: &str, mode: ListMode) -> String {
    render_typst(&structure_with(text, mode))
}
