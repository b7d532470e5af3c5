//! Extraction of known content islands from uncontrolled page HTML.
//!
//! The pages carry no stable ids, only incidental structure: the word of
//! the day rides in the `<title>` tag, the trending terms in a `<ul>`
//! whose class list contains `trending`. Both extractors share the same
//! pattern: depth-first search for the island, then pull text out of it.

mod matcher;
mod trending;
mod wotd;

pub(crate) use trending::find_trending;
pub(crate) use wotd::find_word_of_the_day;
