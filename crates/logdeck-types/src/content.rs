use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Message content as it appears on the wire: either a plain string or
/// an ordered list of heterogeneous parts.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(untagged)]
pub enum MessageContent {
    Text(String),
    Parts(Vec<ContentPart>),
}

/// One element of a parts list. Fragments that carry no `text` field
/// (images, attachments, ...) contribute nothing to extraction.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ContentPart {
    Text(String),
    Fragment {
        #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
        kind: Option<String>,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        text: Option<String>,
    },
    Other(Value),
}

fn is_thinking(kind: &Option<String>) -> bool {
    matches!(kind.as_deref(), Some("thinking") | Some("thought"))
}

impl MessageContent {
    /// Extract the displayable text: plain-string parts and non-thinking
    /// fragments with a `text` field, joined by newlines in original
    /// order, trimmed.
    pub fn plain_text(&self) -> String {
        match self {
            MessageContent::Text(text) => text.trim().to_string(),
            MessageContent::Parts(parts) => parts
                .iter()
                .filter_map(|part| match part {
                    ContentPart::Text(text) => Some(text.as_str()),
                    ContentPart::Fragment { kind, text } if !is_thinking(kind) => {
                        text.as_deref()
                    }
                    _ => None,
                })
                .filter(|text| !text.is_empty())
                .collect::<Vec<_>>()
                .join("\n")
                .trim()
                .to_string(),
        }
    }

    /// Collect `thinking`/`thought` fragments into a separate list.
    /// A display hint for detail views, kept out of the main text.
    pub fn thinking_text(&self) -> Vec<String> {
        match self {
            MessageContent::Text(_) => Vec::new(),
            MessageContent::Parts(parts) => parts
                .iter()
                .filter_map(|part| match part {
                    ContentPart::Fragment { kind, text } if is_thinking(kind) => text.clone(),
                    _ => None,
                })
                .collect(),
        }
    }
}
