//! The search builder: accumulates constraints and serializes them into a
//! single search command.

use ftsearch_core::error::Result;
use ftsearch_core::options::Output;
use ftsearch_core::reply::Reply;
use ftsearch_core::traits::StoreClient;

use crate::index::Index;
use crate::parse::{to_list, Record};

/// How tokenized terms are joined into a search expression.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Mode {
    /// Every term must match; terms are joined with a space.
    #[default]
    Intersect,
    /// Any term may match; terms are joined with a pipe.
    Union,
    /// The term string is passed to the module verbatim, bypassing
    /// tokenization and joining entirely.
    Direct,
}

impl Mode {
    /// Map the accepted mode names and their aliases. Anything that is not
    /// an intersect/union spelling selects a direct query.
    pub fn parse(s: &str) -> Mode {
        match s {
            "and" | "intersect" => Mode::Intersect,
            "or" | "union" => Mode::Union,
            _ => Mode::Direct,
        }
    }
}

/// Sort direction for the order-by clause.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SortOrder {
    #[default]
    Asc,
    Desc,
}

impl SortOrder {
    fn as_arg(self) -> &'static str {
        match self {
            SortOrder::Asc => "ASC",
            SortOrder::Desc => "DESC",
        }
    }
}

/// A search reply, shaped per the index's `output` option.
#[derive(Debug, Clone, PartialEq)]
pub enum SearchReply {
    Raw(Reply),
    Records(Vec<Record>),
}

impl SearchReply {
    pub fn records(self) -> Option<Vec<Record>> {
        match self {
            SearchReply::Records(records) => Some(records),
            SearchReply::Raw(_) => None,
        }
    }

    pub fn raw(self) -> Option<Reply> {
        match self {
            SearchReply::Raw(reply) => Some(reply),
            SearchReply::Records(_) => None,
        }
    }
}

/// One search over an index, built with chained by-value setters and
/// consumed by [`Query::execute`]. Taking `self` by value makes a second
/// execution of the same query impossible to express.
pub struct Query<'a, C: StoreClient> {
    index: &'a Index<C>,
    term: String,
    mode: Mode,
    range: Option<(i64, i64)>,
    page: Option<(u64, u64)>,
    sort: Option<(String, SortOrder)>,
}

impl<'a, C: StoreClient> Query<'a, C> {
    pub(crate) fn new(index: &'a Index<C>, term: String) -> Self {
        Self {
            index,
            term,
            mode: Mode::default(),
            range: None,
            page: None,
            sort: None,
        }
    }

    #[must_use]
    pub fn mode(mut self, mode: Mode) -> Self {
        self.mode = mode;
        self
    }

    /// Restrict results to an inclusive element range. Independent of
    /// [`Query::page`]; both clauses may be present.
    #[must_use]
    pub fn range(mut self, start: i64, stop: i64) -> Self {
        self.range = Some((start, stop));
        self
    }

    /// Restrict results to a window of `limit` entries starting at `offset`.
    #[must_use]
    pub fn page(mut self, offset: u64, limit: u64) -> Self {
        self.page = Some((offset, limit));
        self
    }

    #[must_use]
    pub fn order_by(mut self, field: impl Into<String>, order: SortOrder) -> Self {
        self.sort = Some((field.into(), order));
        self
    }

    /// Serialize the accumulated constraints into one search command and
    /// run it. Clause order is fixed: expression, field restriction, range,
    /// sort, paging.
    pub async fn execute(self) -> Result<SearchReply> {
        let expression = match self.mode {
            Mode::Direct => self.term,
            Mode::Intersect => words(&self.term).join(" "),
            Mode::Union => words(&self.term).join("|"),
        };

        let mut args = vec![self.index.key().to_string(), expression];
        let options = self.index.options();
        if !options.in_fields.is_empty() {
            args.push("INFIELDS".into());
            args.push(options.in_fields.len().to_string());
            args.extend(options.in_fields.iter().cloned());
        }
        if let Some((start, stop)) = self.range {
            args.push("LIMIT".into());
            args.push(start.to_string());
            args.push(stop.to_string());
        }
        if let Some((field, order)) = self.sort {
            args.push("SORTBY".into());
            args.push(field);
            args.push(order.as_arg().into());
        }
        if let Some((offset, limit)) = self.page {
            args.push("LIMIT".into());
            args.push(offset.to_string());
            args.push(limit.to_string());
        }

        let reply = self.index.send("FT.SEARCH", &args).await?;
        Ok(match options.output {
            Output::Raw => SearchReply::Raw(reply),
            Output::Beautify => SearchReply::Records(to_list(reply.as_array().unwrap_or(&[]))),
        })
    }
}

/// The alphanumeric runs in `s`, in order. Underscore counts as a word
/// character, matching the module's tokenizer expectations.
pub fn words(s: &str) -> Vec<String> {
    let mut out = Vec::new();
    let mut current = String::new();
    for ch in s.chars() {
        if ch.is_alphanumeric() || ch == '_' {
            current.push(ch);
        } else if !current.is_empty() {
            out.push(std::mem::take(&mut current));
        }
    }
    if !current.is_empty() {
        out.push(current);
    }
    out
}
