use std::fmt;
use std::str::FromStr;

use crate::error::RegistryError;

use super::{MatchResult, ParseContext, blocks, inline};

/// The built-in block matchers, by name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BlockSyntax {
    HorizontalRule,
    Header,
    QuoteBlock,
    CodeBlock,
    MathBlock,
    Table,
    List,
    FootNoteIndex,
    ReferenceLinkIndex,
}

/// The built-in inline matchers, by name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum InlineSyntax {
    Emphasis,
    Italic,
    StrikeThrough,
    Code,
    Math,
    Link,
    SimpleLink,
    Image,
    Html,
    FootNote,
    ReferenceLink,
}

pub(crate) type BuiltinMatcher = fn(&ParseContext<'_>, &str) -> MatchResult;

impl BlockSyntax {
    /// Default block matchers, highest priority first.
    pub const DEFAULT_ORDER: [BlockSyntax; 9] = [
        BlockSyntax::HorizontalRule,
        BlockSyntax::Header,
        BlockSyntax::QuoteBlock,
        BlockSyntax::CodeBlock,
        BlockSyntax::MathBlock,
        BlockSyntax::Table,
        BlockSyntax::List,
        BlockSyntax::FootNoteIndex,
        BlockSyntax::ReferenceLinkIndex,
    ];

    pub fn name(self) -> &'static str {
        match self {
            BlockSyntax::HorizontalRule => "HorizontalRule",
            BlockSyntax::Header => "Header",
            BlockSyntax::QuoteBlock => "QuoteBlock",
            BlockSyntax::CodeBlock => "CodeBlock",
            BlockSyntax::MathBlock => "MathBlock",
            BlockSyntax::Table => "Table",
            BlockSyntax::List => "List",
            BlockSyntax::FootNoteIndex => "FootNoteIndex",
            BlockSyntax::ReferenceLinkIndex => "ReferenceLinkIndex",
        }
    }

    pub(crate) fn matcher(self) -> BuiltinMatcher {
        match self {
            BlockSyntax::HorizontalRule => blocks::rule::try_parse_horizontal_rule,
            BlockSyntax::Header => blocks::header::try_parse_header,
            BlockSyntax::QuoteBlock => blocks::quote::try_parse_quote_block,
            BlockSyntax::CodeBlock => blocks::fence::try_parse_code_block,
            BlockSyntax::MathBlock => blocks::fence::try_parse_math_block,
            BlockSyntax::Table => blocks::table::try_parse_table,
            BlockSyntax::List => blocks::list::try_parse_list,
            BlockSyntax::FootNoteIndex => blocks::definitions::try_parse_footnote_index,
            BlockSyntax::ReferenceLinkIndex => {
                blocks::definitions::try_parse_reference_link_index
            }
        }
    }
}

impl InlineSyntax {
    /// Default inline matchers, highest priority first.
    pub const DEFAULT_ORDER: [InlineSyntax; 11] = [
        InlineSyntax::Emphasis,
        InlineSyntax::Italic,
        InlineSyntax::StrikeThrough,
        InlineSyntax::Code,
        InlineSyntax::Math,
        InlineSyntax::Link,
        InlineSyntax::SimpleLink,
        InlineSyntax::Image,
        InlineSyntax::Html,
        InlineSyntax::FootNote,
        InlineSyntax::ReferenceLink,
    ];

    pub fn name(self) -> &'static str {
        match self {
            InlineSyntax::Emphasis => "Emphasis",
            InlineSyntax::Italic => "Italic",
            InlineSyntax::StrikeThrough => "StrikeThrough",
            InlineSyntax::Code => "Code",
            InlineSyntax::Math => "Math",
            InlineSyntax::Link => "Link",
            InlineSyntax::SimpleLink => "SimpleLink",
            InlineSyntax::Image => "Image",
            InlineSyntax::Html => "Html",
            InlineSyntax::FootNote => "FootNote",
            InlineSyntax::ReferenceLink => "ReferenceLink",
        }
    }

    /// Characters that trigger this matcher.
    pub fn lookaheads(self) -> &'static [char] {
        match self {
            InlineSyntax::Emphasis | InlineSyntax::Italic => &['*', '_'],
            InlineSyntax::StrikeThrough => &['~'],
            InlineSyntax::Code => &['`'],
            InlineSyntax::Math => &['$'],
            InlineSyntax::Link | InlineSyntax::FootNote | InlineSyntax::ReferenceLink => &['['],
            InlineSyntax::SimpleLink | InlineSyntax::Html => &['<'],
            InlineSyntax::Image => &['!'],
        }
    }

    pub(crate) fn matcher(self) -> BuiltinMatcher {
        match self {
            InlineSyntax::Emphasis => inline::emphasis::try_parse_emphasis,
            InlineSyntax::Italic => inline::emphasis::try_parse_italic,
            InlineSyntax::StrikeThrough => inline::strike::try_parse_strike_through,
            InlineSyntax::Code => inline::code_span::try_parse_code,
            InlineSyntax::Math => inline::math::try_parse_math,
            InlineSyntax::Link => inline::links::try_parse_link,
            InlineSyntax::SimpleLink => inline::simple_link::try_parse_simple_link,
            InlineSyntax::Image => inline::links::try_parse_image,
            InlineSyntax::Html => inline::html::try_parse_html,
            InlineSyntax::FootNote => inline::links::try_parse_footnote,
            InlineSyntax::ReferenceLink => inline::links::try_parse_reference_link,
        }
    }
}

impl FromStr for BlockSyntax {
    type Err = RegistryError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        BlockSyntax::DEFAULT_ORDER
            .into_iter()
            .find(|b| b.name() == s)
            .ok_or_else(|| RegistryError::UnknownSyntax {
                stage: "block",
                name: s.to_string(),
            })
    }
}

impl FromStr for InlineSyntax {
    type Err = RegistryError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        InlineSyntax::DEFAULT_ORDER
            .into_iter()
            .find(|i| i.name() == s)
            .ok_or_else(|| RegistryError::UnknownSyntax {
                stage: "inline",
                name: s.to_string(),
            })
    }
}

impl fmt::Display for BlockSyntax {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl fmt::Display for InlineSyntax {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
