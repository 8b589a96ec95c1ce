#![forbid(unsafe_code)]
//! treepager — directory tree listing with depth limiting, hidden-entry
//! filtering, and a scrollable terminal pager.

pub mod cli;
pub mod error;
pub mod pager;
pub mod render;
pub mod terminal;
pub mod tree;
