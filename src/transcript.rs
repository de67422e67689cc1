//! Chat conversations rendered as message bubbles.
//!
//! Assistant replies are structured into paragraphs and lists; user input is
//! shown verbatim. System messages never reach the rendered output.

use html_escape::encode_text;
use serde::{Deserialize, Serialize};

use crate::config::Config;
use crate::error::{Error, Result};
use crate::html::render_html;
use crate::parser::structure_with;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    User,
    Assistant,
    System,
}

impl Role {
    pub fn as_str(self) -> &'static str {
        match self {
            Role::User => "user",
            Role::Assistant => "assistant",
            Role::System => "system",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatMessage {
    pub role: Role,
    pub content: String,
}

impl ChatMessage {
    pub fn new(role: Role, content: impl Into<String>) -> Self {
        Self {
            role,
            content: content.into(),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Transcript {
    pub messages: Vec<ChatMessage>,
}

/// Accepts either a bare array of messages or `{ "messages": [...] }`.
#[derive(Deserialize)]
#[serde(untagged)]
enum TranscriptRepr {
    Bare(Vec<ChatMessage>),
    Wrapped { messages: Vec<ChatMessage> },
}

impl<'de> Deserialize<'de> for Transcript {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let messages = match TranscriptRepr::deserialize(deserializer)? {
            TranscriptRepr::Bare(messages) | TranscriptRepr::Wrapped { messages } => messages,
        };
        Ok(Self { messages })
    }
}

impl Transcript {
    pub fn from_json(json: &str) -> Result<Self> {
        serde_json::from_str(json).map_err(Error::Transcript)
    }

    /// Messages shown to the reader, in order.
    pub fn visible(&self) -> impl Iterator<Item = &ChatMessage> {
        self.messages.iter().filter(|m| m.role != Role::System)
    }
}

/// Render every visible message as a `<div>` bubble.
pub fn render_transcript(transcript: &Transcript, config: &Config) -> String {
    let mut out = String::new();
    for message in transcript.visible() {
        out.push_str("<div class=\"message message-");
        out.push_str(message.role.as_str());
        out.push_str("\">\n");
        match message.role {
            Role::Assistant => {
                let doc = structure_with(&message.content, config.lists.mode);
                out.push_str(&render_html(&doc, config));
            }
            _ => {
                out.push_str("<p class=\"user-text\" style=\"white-space: pre-wrap\">");
                out.push_str(&encode_text(&message.content));
                out.push_str("</p>\n");
            }
        }
        out.push_str("</div>\n");
    }
    log::debug!(
        "rendered {} of {} messages",
        transcript.visible().count(),
        transcript.messages.len()
    );
    out
}
