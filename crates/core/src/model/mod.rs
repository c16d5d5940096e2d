mod dataset;
mod entry;
mod verdict;

pub use dataset::{Dataset, DatasetError};
pub use entry::{CharacterEntry, EntryError};
pub use verdict::Verdict;
