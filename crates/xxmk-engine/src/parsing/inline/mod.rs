//! # Inline Matchers
//!
//! Dispatched by the engine on their lookahead character, anywhere inside a
//! text span that is not escaped by a backslash.
//!
//! ## Modules
//!
//! - **`emphasis`**: `**strong**` and `*italic*` (leaves)
//! - **`strike`**: `~~struck~~`, whose content is parsed again
//! - **`code_span`**: backtick runs; raw content
//! - **`math`**: `$...$`; raw content
//! - **`links`**: links, images, footnotes and reference links
//! - **`simple_link`**: `<url>` and `<email>` autolinks
//! - **`html`**: start and end tags
//!
//! Leaves keep their delimiters in their range and have no children; the
//! content is recovered by slicing the source.

pub mod code_span;
pub mod emphasis;
pub mod html;
pub mod links;
pub mod math;
pub mod simple_link;
pub mod strike;
