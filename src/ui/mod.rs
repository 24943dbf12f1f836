mod labels;
mod row;
mod search;

pub use labels::render_labels;
