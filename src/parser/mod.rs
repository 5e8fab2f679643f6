//! Token model and tree building.
//!
//! The lexical tokenizer is an external collaborator: the host supplies an
//! implementation of [`Tokenize`] that turns file content into a flat,
//! ordered [`Token`] stream. Each token carries a stable dotted type id,
//! its literal text, and the ordered lists of productions entered at and
//! left after it. Those markers are the only hierarchy cues this library
//! relies on; the [`builder`] reconstructs the tree from them alone.

mod builder;
pub mod tags;
mod token;

pub use builder::build_file_tree;
pub use token::{Token, Tokenize};
