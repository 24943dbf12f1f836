pub mod filter;

pub use filter::{apply_filter, matches, Filterable};
