//! Flight manifest parsing for Rust
//!
//! Turns loosely structured, hand-pasted passenger manifests into records
//! grouped by flight code, and provides the merge and search operations
//! that work on those groups.
//!
//! # Example
//!
//! ```
//! use manifest::{parse, search, SearchQuery};
//!
//! let groups = parse("0906\n123 Smith John Y 17B\n\n124 Doe Jane Y 18C");
//! assert_eq!(groups.record_count(), 2);
//!
//! let results = search(&groups, &SearchQuery::parse("0906 17b"));
//! assert_eq!(results.total, 1);
//! assert_eq!(results.summary(), "1 resultados encontrados");
//! ```
//!
//! # Input format
//!
//! ```text
//! 0906                        <- flight/group code (09 + two digits)
//! 123 Smith, John Y 17B       <- record start: number, then detail tokens
//! VIP wheelchair              <- continuation of the previous record
//!                             <- blank line ends the record
//! ```

mod merge;
mod parser;
mod record;
mod search;

pub use merge::merge;
pub use parser::{classify, extract_fields, find_seat, parse, tokenize, LineKind};
pub use record::{Group, GroupedData, PersonRecord, DEFAULT_GROUP};
pub use search::{search, SearchMode, SearchQuery, SearchResults};
