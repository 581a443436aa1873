//! Znode tree traversal
//!
//! A walk visits znodes depth-first in pre-order. Content is only read when a
//! node processor asks for it through its [`reader::NodeReader`].

pub mod path;
pub mod reader;
pub mod walker;

pub use reader::NodeReader;
pub use walker::Walker;
