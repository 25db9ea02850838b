//! Index lifecycle and per-document commands.

use std::sync::Arc;

use ftsearch_core::error::{Error, RemoteError, RemoteErrorKind, Result};
use ftsearch_core::options::{AddOptions, DropOptions, IndexOptions, Output};
use ftsearch_core::reply::Reply;
use ftsearch_core::schema::Schema;
use ftsearch_core::traits::StoreClient;

use crate::parse::{to_object, Record};
use crate::query::Query;

/// A handle to one remote index, bound to a shared store client.
///
/// Holds the introspection descriptor returned by the probe that created or
/// found the index, and the options that shape searches against it.
pub struct Index<C: StoreClient> {
    key: String,
    client: Arc<C>,
    options: IndexOptions,
    info: Reply,
}

// Manual impl: a derive would require `C: Debug`, which the client seam
// does not promise.
impl<C: StoreClient> std::fmt::Debug for Index<C> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Index")
            .field("key", &self.key)
            .field("options", &self.options)
            .field("info", &self.info)
            .finish_non_exhaustive()
    }
}

/// A fetched document, shaped per the index's `output` option.
#[derive(Debug, Clone, PartialEq)]
pub enum DocumentReply {
    Raw(Reply),
    /// Decoded form; `None` when the document does not exist.
    Record(Option<Record>),
}

/// The two independent results of removing a document: detaching the id
/// from the index, and deleting the underlying stored value. The commands
/// carry no transactional coupling, so each outcome is reported on its own.
#[derive(Debug)]
pub struct RemoveOutcome {
    pub index: std::result::Result<Reply, RemoteError>,
    pub value: std::result::Result<Reply, RemoteError>,
}

impl RemoveOutcome {
    pub fn is_ok(&self) -> bool {
        self.index.is_ok() && self.value.is_ok()
    }
}

/// Probe whether the search module is loaded on the remote store.
///
/// An argument-less creation command can only fail with an arity error when
/// the module is present; any other failure propagates.
pub async fn confirm_module<C: StoreClient>(client: &C) -> Result<()> {
    match client.send_command("FT.CREATE", &[]).await {
        Ok(_) => Ok(()),
        Err(err) if err.kind() == RemoteErrorKind::WrongArity => Ok(()),
        Err(err) => Err(err.into()),
    }
}

/// Create the index named `key`, or attach to it if it already exists.
///
/// The schema is validated before any command is issued. Creation is
/// idempotent: when the probe finds an existing index, no creation command
/// is sent and the probe's introspection data becomes the handle's
/// descriptor. Probe failures other than "unknown index" propagate.
pub async fn create_index<C: StoreClient>(
    client: Arc<C>,
    key: impl Into<String>,
    schema: &Schema,
    options: IndexOptions,
) -> Result<Index<C>> {
    let key = key.into();
    if key.is_empty() {
        return Err(Error::InvalidKey("index key must not be empty".into()));
    }
    schema.validate()?;

    match introspect(client.as_ref(), &key).await {
        Ok(info) => Ok(Index {
            key,
            client,
            options,
            info,
        }),
        Err(err) if err.kind() == RemoteErrorKind::UnknownIndex => {
            let mut args = vec![key.clone()];
            if let Some(stop_words) = &options.stop_words {
                args.push("STOPWORDS".into());
                args.push(stop_words.len().to_string());
                args.extend(stop_words.iter().cloned());
            }
            if let Some(ttl) = options.ttl {
                if ttl > 0 {
                    args.push("TEMPORARY".into());
                    args.push(ttl.to_string());
                }
            }
            args.push("SCHEMA".into());
            for (name, ty) in schema.fields() {
                args.push(name.clone());
                args.push(ty.as_arg().into());
            }
            send(client.as_ref(), "FT.CREATE", &args).await?;
            let info = introspect(client.as_ref(), &key).await?;
            Ok(Index {
                key,
                client,
                options,
                info,
            })
        }
        Err(err) => Err(err.into()),
    }
}

/// Drop the index named `key`. Dropping an index that does not exist is a
/// successful no-op returning `None`; any other probe failure propagates.
pub async fn drop_index<C: StoreClient>(
    client: &C,
    key: &str,
    options: DropOptions,
) -> Result<Option<Reply>> {
    if key.is_empty() {
        return Err(Error::InvalidKey("index key must not be empty".into()));
    }
    match introspect(client, key).await {
        Ok(_) => {
            let mut args = vec![key.to_string()];
            if options.keep_docs {
                args.push("KEEPDOCS".into());
            }
            let reply = send(client, "FT.DROP", &args).await?;
            Ok(Some(reply))
        }
        Err(err) if err.kind() == RemoteErrorKind::UnknownIndex => Ok(None),
        Err(err) => Err(err.into()),
    }
}

async fn introspect<C: StoreClient + ?Sized>(
    client: &C,
    key: &str,
) -> std::result::Result<Reply, RemoteError> {
    client.send_command("FT.INFO", &[key.to_string()]).await
}

async fn send<C: StoreClient + ?Sized>(client: &C, command: &str, args: &[String]) -> Result<Reply> {
    tracing::debug!(command, argc = args.len(), "issuing store command");
    Ok(client.send_command(command, args).await?)
}

impl<C: StoreClient> Index<C> {
    pub fn key(&self) -> &str {
        &self.key
    }

    /// Introspection descriptor captured when this handle was created.
    pub fn info(&self) -> &Reply {
        &self.info
    }

    pub fn options(&self) -> &IndexOptions {
        &self.options
    }

    /// Add or replace the document stored under `id` (upsert semantics).
    pub async fn add_document<N, V>(
        &self,
        id: &str,
        fields: &[(N, V)],
        options: AddOptions,
    ) -> Result<Reply>
    where
        N: AsRef<str>,
        V: AsRef<str>,
    {
        let mut args = vec![
            self.key.clone(),
            id.to_string(),
            options.priority.to_string(),
            "REPLACE".into(),
            "FIELDS".into(),
        ];
        for (name, value) in fields {
            args.push(name.as_ref().to_string());
            args.push(value.as_ref().to_string());
        }
        send(self.client.as_ref(), "FT.ADD", &args).await
    }

    /// Fetch the document stored under `id`. With `Output::Beautify` the
    /// flat field/value reply is decoded into a [`Record`]; a nil reply
    /// decodes to `None`.
    pub async fn get_document(&self, id: &str) -> Result<DocumentReply> {
        let args = [self.key.clone(), id.to_string()];
        let reply = send(self.client.as_ref(), "FT.GET", &args).await?;
        Ok(match self.options.output {
            Output::Raw => DocumentReply::Raw(reply),
            Output::Beautify => {
                if reply.is_nil() {
                    DocumentReply::Record(None)
                } else {
                    let flat = reply.as_array().unwrap_or(&[]);
                    DocumentReply::Record(Some(to_object(id, flat)))
                }
            }
        })
    }

    /// Remove the document stored under `id`: detach it from the index and
    /// delete its underlying value. The two commands are issued together
    /// with no ordering or atomicity guarantee; see [`RemoveOutcome`].
    pub async fn remove_document(&self, id: &str) -> RemoveOutcome {
        tracing::debug!(key = %self.key, id, "removing document");
        let detach_args = [self.key.clone(), id.to_string()];
        let delete_args = [id.to_string()];
        let detach = self.client.send_command("FT.DEL", &detach_args);
        let delete = self.client.send_command("DEL", &delete_args);
        let (index, value) = futures::join!(detach, delete);
        RemoveOutcome { index, value }
    }

    /// Start building a search over this index.
    pub fn query(&self, term: impl Into<String>) -> Query<'_, C> {
        Query::new(self, term.into())
    }

    pub(crate) async fn send(&self, command: &str, args: &[String]) -> Result<Reply> {
        send(self.client.as_ref(), command, args).await
    }
}
