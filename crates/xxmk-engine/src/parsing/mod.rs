//! # Parsing
//!
//! A [`MarkdownParser`] holds an ordered list of block matchers and, for each
//! lookahead character, an ordered list of inline matchers. Matchers
//! registered later are tried first.
//!
//! ## Modules
//!
//! - **`engine`**: the block loop, the inline loop and text coalescing
//! - **`context`**: `ParseContext` handed to every matcher
//! - **`syntax`**: `BlockSyntax` / `InlineSyntax` names for the built-ins
//! - **`blocks`**: line-start constructs (headers, fences, tables, lists...)
//! - **`inline`**: span constructs (emphasis, code, links, html...)
//! - **`scan`**: escape-aware byte scanning helpers
//!
//! ## Matcher contract
//!
//! A matcher receives the context and the remaining input, which begins at
//! `ctx.position()`. It returns `Ok(None)` when the construct is absent,
//! `Ok(Some(node))` with `node.end` past the start when it matched, and
//! `Err` only for internal faults.

use std::collections::HashMap;
use std::fmt;

use xxmk_config::ParserSettings;

use crate::ast::Node;
use crate::error::{ParseFault, RegistryError};

pub mod blocks;
pub mod context;
pub mod engine;
pub mod inline;
pub mod scan;
pub mod syntax;

#[cfg(test)]
pub mod tests;

pub use context::ParseContext;
pub use syntax::{BlockSyntax, InlineSyntax};

pub type MatchResult = Result<Option<Node>, ParseFault>;

/// A block or inline matcher.
pub type MatchFn = dyn Fn(&ParseContext<'_>, &str) -> MatchResult + Send + Sync;

pub(crate) struct Registered {
    pub(crate) name: String,
    pub(crate) matcher: Box<MatchFn>,
}

impl Registered {
    fn new(name: impl Into<String>, matcher: Box<MatchFn>) -> Self {
        Self {
            name: name.into(),
            matcher,
        }
    }
}

/// Extensible markdown parser.
#[derive(Default)]
pub struct MarkdownParser {
    pub(crate) block: Vec<Registered>,
    pub(crate) inline: HashMap<char, Vec<Registered>>,
}

impl MarkdownParser {
    /// A parser with no matchers; everything parses as text.
    pub fn base() -> Self {
        Self::default()
    }

    pub fn block_only() -> Self {
        let mut parser = Self::base();
        parser.add_default_block_parsers(&BlockSyntax::DEFAULT_ORDER);
        parser
    }

    pub fn inline_only() -> Self {
        let mut parser = Self::base();
        parser.add_default_inline_parsers(&InlineSyntax::DEFAULT_ORDER);
        parser
    }

    pub fn full() -> Self {
        let mut parser = Self::block_only();
        parser.add_default_inline_parsers(&InlineSyntax::DEFAULT_ORDER);
        parser
    }

    /// Builds a parser from configured matcher names, listed highest
    /// priority first.
    pub fn from_config(settings: &ParserSettings) -> Result<Self, RegistryError> {
        let block = settings
            .block
            .iter()
            .map(|name| name.parse::<BlockSyntax>())
            .collect::<Result<Vec<_>, _>>()?;
        let inline = settings
            .inline
            .iter()
            .map(|name| name.parse::<InlineSyntax>())
            .collect::<Result<Vec<_>, _>>()?;

        let mut parser = Self::base();
        parser.add_default_block_parsers(&block);
        parser.add_default_inline_parsers(&inline);
        Ok(parser)
    }

    /// Installs built-in block matchers so that `names[0]` ends up with the
    /// highest priority among them.
    pub fn add_default_block_parsers(&mut self, names: &[BlockSyntax]) -> &mut Self {
        for syntax in names.iter().rev() {
            self.block
                .push(Registered::new(syntax.name(), Box::new(syntax.matcher())));
        }
        self
    }

    /// Installs built-in inline matchers under their lookahead characters so
    /// that `names[0]` ends up with the highest priority among them.
    pub fn add_default_inline_parsers(&mut self, names: &[InlineSyntax]) -> &mut Self {
        for syntax in names.iter().rev() {
            for &c in syntax.lookaheads() {
                self.inline
                    .entry(c)
                    .or_default()
                    .push(Registered::new(syntax.name(), Box::new(syntax.matcher())));
            }
        }
        self
    }

    /// Appends a block matcher above everything registered so far.
    pub fn add_extension_block_parser<F>(&mut self, name: impl Into<String>, matcher: F) -> &mut Self
    where
        F: Fn(&ParseContext<'_>, &str) -> MatchResult + Send + Sync + 'static,
    {
        self.block.push(Registered::new(name, Box::new(matcher)));
        self
    }

    /// Appends an inline matcher for `lookahead` above everything registered
    /// so far for that character.
    pub fn add_extension_inline_parser<F>(
        &mut self,
        lookahead: char,
        name: impl Into<String>,
        matcher: F,
    ) -> &mut Self
    where
        F: Fn(&ParseContext<'_>, &str) -> MatchResult + Send + Sync + 'static,
    {
        self.inline
            .entry(lookahead)
            .or_default()
            .push(Registered::new(name, Box::new(matcher)));
        self
    }

    /// Block matcher names in the order they are tried.
    pub fn block_parser_names(&self) -> Vec<&str> {
        self.block.iter().rev().map(|r| r.name.as_str()).collect()
    }

    /// Inline matcher names for `lookahead` in the order they are tried.
    pub fn inline_parser_names(&self, lookahead: char) -> Vec<&str> {
        self.inline
            .get(&lookahead)
            .map(|seq| seq.iter().rev().map(|r| r.name.as_str()).collect())
            .unwrap_or_default()
    }
}

impl fmt::Debug for MarkdownParser {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut lookaheads: Vec<_> = self.inline.keys().copied().collect();
        lookaheads.sort_unstable();
        f.debug_struct("MarkdownParser")
            .field("block", &self.block_parser_names())
            .field("inline_lookaheads", &lookaheads)
            .finish()
    }
}
