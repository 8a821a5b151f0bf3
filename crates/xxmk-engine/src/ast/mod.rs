//! # Syntax Tree
//!
//! Matchers build owned [`Node`] trees; a finished parse is frozen into an
//! [`Ast`], an arena in pre-order where each node knows its parent and left
//! sibling by [`NodeId`].
//!
//! ## Modules
//!
//! - **`node_type`**: `NodeType` kinds with their fields, names and display
//! - **`fields`**: uniform read/write access to a kind's fields
//! - **`registry`**: process-wide name to type id mapping
//! - **`tree`**: `Node`, `Ast`, `NodeRef`
//! - **`cursor`**: `TreeCursor` for sibling walks

pub mod cursor;
pub mod fields;
pub mod node_type;
pub mod registry;
pub mod tree;

pub use cursor::TreeCursor;
pub use fields::{FieldMut, FieldRef};
pub use node_type::{Align, BUILTIN_NAMES, NodeType};
pub use registry::{name_for_type_id, type_id_for_name};
pub use tree::{Ast, Node, NodeId, NodeRef};
