pub mod batch;
pub mod dedupe;

pub use batch::{write_in_batches, WriteSummary};
pub use dedupe::{select_new_by_name, NewByName};
