//! Domain logic - semantic-version parsing, selection and increment,
//! independent of where the tags come from

pub mod bump;
pub mod tags;
pub mod version;

pub use bump::IncrementTarget;
pub use tags::{highest, parse_tags, tag_name_from_line, ParsedTags, TagParseMode};
pub use version::SemverRecord;
