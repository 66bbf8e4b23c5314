//! CLI argument types.
mod cli;
pub(crate) mod parsers;


pub use cli::CountArgs;
