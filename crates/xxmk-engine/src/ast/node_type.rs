use std::fmt;

use super::fields::{FieldMut, FieldRef};
use super::registry;

/// Column alignment declared by a table's alignment row.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Align {
    #[default]
    Left,
    Middle,
    Right,
}

impl Align {
    #[must_use]
    pub fn as_u32(self) -> u32 {
        match self {
            Align::Left => 0,
            Align::Middle => 1,
            Align::Right => 2,
        }
    }

    #[must_use]
    pub fn from_u32(v: u32) -> Option<Self> {
        match v {
            0 => Some(Align::Left),
            1 => Some(Align::Middle),
            2 => Some(Align::Right),
            _ => None,
        }
    }
}

/// The kind of a syntax tree node, together with the data it carries.
///
/// Built-in kinds cover the whole dialect. Extension matchers produce
/// [`NodeType::Custom`] nodes, whose `name` identifies them in place of a
/// dedicated variant.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum NodeType {
    #[default]
    Document,
    Text,
    Header {
        level: u32,
    },
    MathBlock,
    CodeBlock {
        suffix: String,
    },
    HorizontalRule,
    TableHead,
    TableAlign {
        aligns: Vec<Align>,
    },
    TableLine,
    Table,
    QuoteBlock {
        level: u32,
    },
    List {
        is_ordered: bool,
        is_task: bool,
    },
    ListItem {
        is_ordered: bool,
        is_task: bool,
        is_finished: bool,
        order: u32,
    },
    Emphasis,
    Italic,
    StrikeThrough,
    Code,
    Math,
    Link {
        link: String,
        title: String,
    },
    SimpleLink {
        link: String,
    },
    ReferenceLink {
        index: String,
    },
    ReferenceLinkIndex {
        index: String,
        link: String,
        title: String,
    },
    FootNote {
        index: String,
    },
    FootNoteIndex {
        index: String,
    },
    Image {
        link: String,
        title: String,
    },
    HtmlStartTag {
        tag: String,
        content: String,
    },
    HtmlEndTag {
        tag: String,
    },
    Custom {
        name: String,
        payload: String,
    },
}

/// Stable names of the built-in kinds, in type id order (ids start at 1).
pub const BUILTIN_NAMES: [&str; 27] = [
    "Document",
    "Text",
    "Header",
    "MathBlock",
    "CodeBlock",
    "HorizontalRule",
    "TableHead",
    "TableAlign",
    "TableLine",
    "Table",
    "QuoteBlock",
    "List",
    "ListItem",
    "Emphasis",
    "Italic",
    "StrikeThrough",
    "Code",
    "Math",
    "Link",
    "SimpleLink",
    "ReferenceLink",
    "ReferenceLinkIndex",
    "FootNote",
    "FootNoteIndex",
    "Image",
    "HtmlStartTag",
    "HtmlEndTag",
];

impl NodeType {
    pub fn custom(name: impl Into<String>, payload: impl Into<String>) -> Self {
        NodeType::Custom {
            name: name.into(),
            payload: payload.into(),
        }
    }

    /// The stable name of this kind.
    pub fn name(&self) -> &str {
        match self {
            NodeType::Document => "Document",
            NodeType::Text => "Text",
            NodeType::Header { .. } => "Header",
            NodeType::MathBlock => "MathBlock",
            NodeType::CodeBlock { .. } => "CodeBlock",
            NodeType::HorizontalRule => "HorizontalRule",
            NodeType::TableHead => "TableHead",
            NodeType::TableAlign { .. } => "TableAlign",
            NodeType::TableLine => "TableLine",
            NodeType::Table => "Table",
            NodeType::QuoteBlock { .. } => "QuoteBlock",
            NodeType::List { .. } => "List",
            NodeType::ListItem { .. } => "ListItem",
            NodeType::Emphasis => "Emphasis",
            NodeType::Italic => "Italic",
            NodeType::StrikeThrough => "StrikeThrough",
            NodeType::Code => "Code",
            NodeType::Math => "Math",
            NodeType::Link { .. } => "Link",
            NodeType::SimpleLink { .. } => "SimpleLink",
            NodeType::ReferenceLink { .. } => "ReferenceLink",
            NodeType::ReferenceLinkIndex { .. } => "ReferenceLinkIndex",
            NodeType::FootNote { .. } => "FootNote",
            NodeType::FootNoteIndex { .. } => "FootNoteIndex",
            NodeType::Image { .. } => "Image",
            NodeType::HtmlStartTag { .. } => "HtmlStartTag",
            NodeType::HtmlEndTag { .. } => "HtmlEndTag",
            NodeType::Custom { name, .. } => name,
        }
    }

    /// Returns a default-valued node type for a stable name.
    ///
    /// Names outside the built-in set produce a [`NodeType::Custom`] with an
    /// empty payload, so a decoder can rebuild any node from its name and
    /// then fill in fields through [`NodeType::fields_mut`].
    pub fn from_name(name: &str) -> Self {
        match name {
            "Document" => NodeType::Document,
            "Text" => NodeType::Text,
            "Header" => NodeType::Header { level: 0 },
            "MathBlock" => NodeType::MathBlock,
            "CodeBlock" => NodeType::CodeBlock {
                suffix: String::new(),
            },
            "HorizontalRule" => NodeType::HorizontalRule,
            "TableHead" => NodeType::TableHead,
            "TableAlign" => NodeType::TableAlign { aligns: vec![] },
            "TableLine" => NodeType::TableLine,
            "Table" => NodeType::Table,
            "QuoteBlock" => NodeType::QuoteBlock { level: 0 },
            "List" => NodeType::List {
                is_ordered: false,
                is_task: false,
            },
            "ListItem" => NodeType::ListItem {
                is_ordered: false,
                is_task: false,
                is_finished: false,
                order: 0,
            },
            "Emphasis" => NodeType::Emphasis,
            "Italic" => NodeType::Italic,
            "StrikeThrough" => NodeType::StrikeThrough,
            "Code" => NodeType::Code,
            "Math" => NodeType::Math,
            "Link" => NodeType::Link {
                link: String::new(),
                title: String::new(),
            },
            "SimpleLink" => NodeType::SimpleLink {
                link: String::new(),
            },
            "ReferenceLink" => NodeType::ReferenceLink {
                index: String::new(),
            },
            "ReferenceLinkIndex" => NodeType::ReferenceLinkIndex {
                index: String::new(),
                link: String::new(),
                title: String::new(),
            },
            "FootNote" => NodeType::FootNote {
                index: String::new(),
            },
            "FootNoteIndex" => NodeType::FootNoteIndex {
                index: String::new(),
            },
            "Image" => NodeType::Image {
                link: String::new(),
                title: String::new(),
            },
            "HtmlStartTag" => NodeType::HtmlStartTag {
                tag: String::new(),
                content: String::new(),
            },
            "HtmlEndTag" => NodeType::HtmlEndTag { tag: String::new() },
            other => NodeType::custom(other, ""),
        }
    }

    /// Process-wide numeric identifier of this kind's name.
    pub fn type_id(&self) -> u32 {
        registry::type_id_for_name(self.name())
    }

    pub fn is_text(&self) -> bool {
        matches!(self, NodeType::Text)
    }

    /// Named field values in declaration order.
    pub fn fields(&self) -> Vec<(&'static str, FieldRef<'_>)> {
        match self {
            NodeType::Header { level } | NodeType::QuoteBlock { level } => {
                vec![("level", FieldRef::U32(*level))]
            }
            NodeType::CodeBlock { suffix } => vec![("suffix", FieldRef::Str(suffix))],
            NodeType::TableAlign { aligns } => vec![("aligns", FieldRef::Aligns(aligns))],
            NodeType::List {
                is_ordered,
                is_task,
            } => vec![
                ("is_ordered", FieldRef::Bool(*is_ordered)),
                ("is_task", FieldRef::Bool(*is_task)),
            ],
            NodeType::ListItem {
                is_ordered,
                is_task,
                is_finished,
                order,
            } => vec![
                ("is_ordered", FieldRef::Bool(*is_ordered)),
                ("is_task", FieldRef::Bool(*is_task)),
                ("is_finished", FieldRef::Bool(*is_finished)),
                ("order", FieldRef::U32(*order)),
            ],
            NodeType::Link { link, title } | NodeType::Image { link, title } => vec![
                ("link", FieldRef::Str(link)),
                ("title", FieldRef::Str(title)),
            ],
            NodeType::SimpleLink { link } => vec![("link", FieldRef::Str(link))],
            NodeType::ReferenceLink { index }
            | NodeType::FootNote { index }
            | NodeType::FootNoteIndex { index } => vec![("index", FieldRef::Str(index))],
            NodeType::ReferenceLinkIndex { index, link, title } => vec![
                ("index", FieldRef::Str(index)),
                ("link", FieldRef::Str(link)),
                ("title", FieldRef::Str(title)),
            ],
            NodeType::HtmlStartTag { tag, content } => vec![
                ("tag", FieldRef::Str(tag)),
                ("content", FieldRef::Str(content)),
            ],
            NodeType::HtmlEndTag { tag } => vec![("tag", FieldRef::Str(tag))],
            NodeType::Custom { payload, .. } => vec![("payload", FieldRef::Str(payload))],
            NodeType::Document
            | NodeType::Text
            | NodeType::MathBlock
            | NodeType::HorizontalRule
            | NodeType::TableHead
            | NodeType::TableLine
            | NodeType::Table
            | NodeType::Emphasis
            | NodeType::Italic
            | NodeType::StrikeThrough
            | NodeType::Code
            | NodeType::Math => vec![],
        }
    }

    /// Mutable handles to the same fields, in the same order as [`NodeType::fields`].
    pub fn fields_mut(&mut self) -> Vec<(&'static str, FieldMut<'_>)> {
        match self {
            NodeType::Header { level } | NodeType::QuoteBlock { level } => {
                vec![("level", FieldMut::U32(level))]
            }
            NodeType::CodeBlock { suffix } => vec![("suffix", FieldMut::Str(suffix))],
            NodeType::TableAlign { aligns } => vec![("aligns", FieldMut::Aligns(aligns))],
            NodeType::List {
                is_ordered,
                is_task,
            } => vec![
                ("is_ordered", FieldMut::Bool(is_ordered)),
                ("is_task", FieldMut::Bool(is_task)),
            ],
            NodeType::ListItem {
                is_ordered,
                is_task,
                is_finished,
                order,
            } => vec![
                ("is_ordered", FieldMut::Bool(is_ordered)),
                ("is_task", FieldMut::Bool(is_task)),
                ("is_finished", FieldMut::Bool(is_finished)),
                ("order", FieldMut::U32(order)),
            ],
            NodeType::Link { link, title } | NodeType::Image { link, title } => vec![
                ("link", FieldMut::Str(link)),
                ("title", FieldMut::Str(title)),
            ],
            NodeType::SimpleLink { link } => vec![("link", FieldMut::Str(link))],
            NodeType::ReferenceLink { index }
            | NodeType::FootNote { index }
            | NodeType::FootNoteIndex { index } => vec![("index", FieldMut::Str(index))],
            NodeType::ReferenceLinkIndex { index, link, title } => vec![
                ("index", FieldMut::Str(index)),
                ("link", FieldMut::Str(link)),
                ("title", FieldMut::Str(title)),
            ],
            NodeType::HtmlStartTag { tag, content } => vec![
                ("tag", FieldMut::Str(tag)),
                ("content", FieldMut::Str(content)),
            ],
            NodeType::HtmlEndTag { tag } => vec![("tag", FieldMut::Str(tag))],
            NodeType::Custom { payload, .. } => vec![("payload", FieldMut::Str(payload))],
            NodeType::Document
            | NodeType::Text
            | NodeType::MathBlock
            | NodeType::HorizontalRule
            | NodeType::TableHead
            | NodeType::TableLine
            | NodeType::Table
            | NodeType::Emphasis
            | NodeType::Italic
            | NodeType::StrikeThrough
            | NodeType::Code
            | NodeType::Math => vec![],
        }
    }
}

impl fmt::Display for NodeType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NodeType::Header { level } => write!(f, "Header({level})"),
            NodeType::CodeBlock { suffix } => write!(f, "CodeBlock({suffix})"),
            NodeType::ReferenceLink { index } => write!(f, "ReferenceLink({index})"),
            NodeType::ReferenceLinkIndex { index, .. } => {
                write!(f, "ReferenceLinkIndex({index})")
            }
            NodeType::FootNote { index } => write!(f, "FootNote({index})"),
            NodeType::FootNoteIndex { index } => write!(f, "FootNoteIndex({index})"),
            NodeType::HtmlStartTag { tag, .. } => write!(f, "HtmlStartTag({tag})"),
            NodeType::HtmlEndTag { tag } => write!(f, "HtmlEndTag({tag})"),
            NodeType::ListItem {
                is_task: true,
                is_finished,
                ..
            } => {
                let mark = if *is_finished { "x" } else { "-" };
                write!(f, "ListItem(task: {mark})")
            }
            NodeType::ListItem {
                is_ordered: true,
                order,
                ..
            } => write!(f, "ListItem({order})"),
            NodeType::Custom { name, payload } if !payload.is_empty() => {
                write!(f, "{name}({payload})")
            }
            other => f.write_str(other.name()),
        }
    }
}
