#![deny(warnings)]
#![deny(dead_code)]
#![deny(unused_variables)]
#![deny(unused_imports)]

//! ftsearch-client
//!
//! Command encoding and response decoding for a remote full-text-search
//! module reachable through a key-value store's command protocol. The store
//! connection itself is behind `ftsearch_core::traits::StoreClient`; this
//! crate only shapes positional argument lists and decodes flat replies.

pub mod index;
pub mod parse;
pub mod query;
pub mod suggest;

pub use index::{confirm_module, create_index, drop_index, DocumentReply, Index, RemoveOutcome};
pub use parse::{to_list, to_object, Record};
pub use query::{Mode, Query, SearchReply, SortOrder};
pub use suggest::SuggestionDictionary;
