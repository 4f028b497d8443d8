mod gallery;
mod models;

pub use gallery::{journal_order, letters_dated_on, MediaQuery, SortOrder};
pub use models::{
    parse_date, DatedItem, LetterItem, MediaItem, MediaKind, NewLetter, NewMedia, Tag,
};
