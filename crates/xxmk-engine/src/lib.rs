pub mod ast;
pub mod error;
pub mod parsing;
pub mod position;

// Re-export key types for easier usage
pub use ast::{Align, Ast, FieldMut, FieldRef, Node, NodeId, NodeRef, NodeType, TreeCursor};
pub use error::{ParseFault, PositionError, RegistryError};
pub use parsing::{BlockSyntax, InlineSyntax, MarkdownParser};
pub use position::Position;
