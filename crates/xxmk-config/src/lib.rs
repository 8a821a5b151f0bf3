use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Block matcher names installed by default, highest priority first.
pub const DEFAULT_BLOCK_SYNTAX: &[&str] = &[
    "HorizontalRule",
    "Header",
    "QuoteBlock",
    "CodeBlock",
    "MathBlock",
    "Table",
    "List",
    "FootNoteIndex",
    "ReferenceLinkIndex",
];

/// Inline matcher names installed by default, highest priority first.
pub const DEFAULT_INLINE_SYNTAX: &[&str] = &[
    "Emphasis",
    "Italic",
    "StrikeThrough",
    "Code",
    "Math",
    "Link",
    "SimpleLink",
    "Image",
    "Html",
    "FootNote",
    "ReferenceLink",
];

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to parse parser settings: {0}")]
    ParseError(#[from] toml::de::Error),
}

/// Which default matchers a parser installs, listed highest priority first.
///
/// Either list may be omitted from the file, in which case the full default
/// ordering is used. An empty list installs nothing for that stage.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParserSettings {
    #[serde(default = "default_block")]
    pub block: Vec<String>,
    #[serde(default = "default_inline")]
    pub inline: Vec<String>,
}

fn default_block() -> Vec<String> {
    DEFAULT_BLOCK_SYNTAX.iter().map(|s| s.to_string()).collect()
}

fn default_inline() -> Vec<String> {
    DEFAULT_INLINE_SYNTAX.iter().map(|s| s.to_string()).collect()
}

impl Default for ParserSettings {
    fn default() -> Self {
        Self {
            block: default_block(),
            inline: default_inline(),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub parser: ParserSettings,
}

impl Config {
    /// Reads settings from TOML text, such as:
    ///
    /// ```toml
    /// [parser]
    /// block = ["Header", "List"]
    /// inline = ["Code"]
    /// ```
    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(content)?)
    }
}
