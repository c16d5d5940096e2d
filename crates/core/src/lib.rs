#![forbid(unsafe_code)]

pub mod matching;
pub mod model;
pub mod time;

pub use matching::{is_match, judge, normalize_answer};
pub use model::{CharacterEntry, Dataset, DatasetError, EntryError, Verdict};
pub use time::Clock;
