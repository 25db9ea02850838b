//! Explicit option structs for every operation that accepts configuration.
//!
//! Each struct enumerates the recognized options and their defaults; there
//! are no dynamic bags, so an unrecognized option cannot be expressed.

/// How replies should be handed back to the caller.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Output {
    /// Return the store's reply unchanged.
    #[default]
    Raw,
    /// Decode flat replies into structured records first.
    Beautify,
}

/// Options recognized by index creation, shared by searches against the
/// resulting index handle.
#[derive(Debug, Clone, Default)]
pub struct IndexOptions {
    /// Overrides the module's default stop-word list. An explicit empty
    /// list disables stop-word filtering entirely; `None` keeps the
    /// module default.
    pub stop_words: Option<Vec<String>>,
    /// Marks the index temporary, expiring after this many seconds.
    /// Ignored unless positive.
    pub ttl: Option<u64>,
    /// Restricts searches to these schema fields.
    pub in_fields: Vec<String>,
    /// Reply shaping for searches and document fetches.
    pub output: Output,
}

/// Options recognized when dropping an index.
#[derive(Debug, Clone, Copy, Default)]
pub struct DropOptions {
    /// Retain the underlying documents when dropping the index structure.
    pub keep_docs: bool,
}

/// Options recognized when adding a document.
#[derive(Debug, Clone, Copy)]
pub struct AddOptions {
    /// Document score weight passed to the module.
    pub priority: f64,
}

impl Default for AddOptions {
    fn default() -> Self {
        Self { priority: 1.0 }
    }
}

/// Options fixed when a suggestion dictionary is constructed. Every
/// dictionary operation also has a `_with` form taking a per-call override.
#[derive(Debug, Clone, Default)]
pub struct SuggestionOptions {
    /// Fuzzy prefix matching on lookups.
    pub fuzzy: bool,
    /// Cap on returned suggestions; `None` keeps the module default.
    pub max_results: Option<u64>,
    /// Accumulate scores on re-add instead of replacing them.
    pub incr: bool,
    /// Return stored payloads alongside suggestions.
    pub with_payloads: bool,
}
