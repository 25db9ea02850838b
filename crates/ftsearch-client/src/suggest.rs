//! Autocomplete dictionary commands. A dictionary is keyed independently of
//! any index and holds term/score entries with optional payloads.

use std::sync::Arc;

use ftsearch_core::error::{Error, Result};
use ftsearch_core::options::SuggestionOptions;
use ftsearch_core::reply::Reply;
use ftsearch_core::traits::StoreClient;

/// A handle to one autocomplete dictionary.
///
/// The options fixed at construction apply to every call; each operation
/// also has a `_with` form taking a per-call override.
pub struct SuggestionDictionary<C: StoreClient> {
    key: String,
    client: Arc<C>,
    options: SuggestionOptions,
}

// Manual impl: a derive would require `C: Debug`, which the client seam
// does not promise.
impl<C: StoreClient> std::fmt::Debug for SuggestionDictionary<C> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SuggestionDictionary")
            .field("key", &self.key)
            .field("options", &self.options)
            .finish_non_exhaustive()
    }
}

impl<C: StoreClient> SuggestionDictionary<C> {
    pub fn new(
        client: Arc<C>,
        key: impl Into<String>,
        options: SuggestionOptions,
    ) -> Result<Self> {
        let key = key.into();
        if key.is_empty() {
            return Err(Error::InvalidKey("dictionary key must not be empty".into()));
        }
        Ok(Self {
            key,
            client,
            options,
        })
    }

    pub fn key(&self) -> &str {
        &self.key
    }

    /// Add `term` with `score`. With `incr` configured the score accumulates
    /// on re-add instead of replacing. A payload passes through verbatim
    /// when it is already a string and is serialized to canonical JSON
    /// otherwise.
    pub async fn add(
        &self,
        term: &str,
        score: f64,
        payload: Option<&serde_json::Value>,
    ) -> Result<Reply> {
        self.add_with(term, score, payload, &self.options).await
    }

    pub async fn add_with(
        &self,
        term: &str,
        score: f64,
        payload: Option<&serde_json::Value>,
        options: &SuggestionOptions,
    ) -> Result<Reply> {
        let mut args = vec![self.key.clone(), term.to_string(), score.to_string()];
        if options.incr {
            args.push("INCR".into());
        }
        if let Some(payload) = payload {
            args.push("PAYLOAD".into());
            args.push(render_payload(payload));
        }
        self.send("FT.SUGADD", &args).await
    }

    /// Look up suggestions for `prefix`, applying the fuzzy, max-results
    /// and with-payloads modifiers.
    pub async fn get(&self, prefix: &str) -> Result<Reply> {
        self.get_with(prefix, &self.options).await
    }

    pub async fn get_with(&self, prefix: &str, options: &SuggestionOptions) -> Result<Reply> {
        let mut args = vec![self.key.clone(), prefix.to_string()];
        if options.fuzzy {
            args.push("FUZZY".into());
        }
        if let Some(max) = options.max_results {
            args.push("MAX".into());
            args.push(max.to_string());
        }
        if options.with_payloads {
            args.push("WITHPAYLOADS".into());
        }
        self.send("FT.SUGGET", &args).await
    }

    /// Delete `term` from the dictionary.
    pub async fn delete(&self, term: &str) -> Result<Reply> {
        let args = [self.key.clone(), term.to_string()];
        self.send("FT.SUGDEL", &args).await
    }

    async fn send(&self, command: &str, args: &[String]) -> Result<Reply> {
        tracing::debug!(command, argc = args.len(), "issuing suggestion command");
        Ok(self.client.send_command(command, args).await?)
    }
}

fn render_payload(value: &serde_json::Value) -> String {
    match value {
        serde_json::Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}
