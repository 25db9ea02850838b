//! Schema declarations and the single-pass validator that runs before any
//! index-creation command is emitted.

use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::str::FromStr;

use crate::error::{Error, Result};

/// Field types understood by the remote search module.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FieldType {
    Text,
    Numeric,
    Geo,
    Tag,
}

impl FieldType {
    /// Wire form used in the creation command's field clause.
    pub fn as_arg(self) -> &'static str {
        match self {
            FieldType::Text => "TEXT",
            FieldType::Numeric => "NUMERIC",
            FieldType::Geo => "GEO",
            FieldType::Tag => "TAG",
        }
    }
}

impl FromStr for FieldType {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_ascii_lowercase().as_str() {
            "text" => Ok(FieldType::Text),
            "numeric" => Ok(FieldType::Numeric),
            "geo" => Ok(FieldType::Geo),
            "tag" => Ok(FieldType::Tag),
            other => Err(Error::InvalidSchema(format!(
                "unrecognized field type `{other}`"
            ))),
        }
    }
}

/// Ordered field-name → type declarations for one index.
///
/// Immutable once handed to index creation. Field order is preserved so the
/// creation command lists fields the way the caller declared them.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Schema {
    fields: Vec<(String, FieldType)>,
}

impl Schema {
    pub fn new() -> Self {
        Self::default()
    }

    /// Declare one field, chainable.
    #[must_use]
    pub fn field(mut self, name: impl Into<String>, ty: FieldType) -> Self {
        self.fields.push((name.into(), ty));
        self
    }

    /// Build a schema from untyped name/type pairs, e.g. loaded from
    /// configuration. Every type name is checked; the first unrecognized
    /// one rejects the whole schema.
    pub fn from_pairs<I, N, T>(pairs: I) -> Result<Self>
    where
        I: IntoIterator<Item = (N, T)>,
        N: Into<String>,
        T: AsRef<str>,
    {
        let mut schema = Schema::new();
        for (name, ty) in pairs {
            schema.fields.push((name.into(), ty.as_ref().parse()?));
        }
        schema.validate()?;
        Ok(schema)
    }

    pub fn fields(&self) -> &[(String, FieldType)] {
        &self.fields
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// Reject duplicate field names. Type validity is carried by
    /// [`FieldType`] itself, so a typed schema only needs the name check.
    pub fn validate(&self) -> Result<()> {
        let mut seen = HashSet::new();
        for (name, _) in &self.fields {
            if !seen.insert(name.as_str()) {
                return Err(Error::InvalidSchema(format!("duplicate field `{name}`")));
            }
        }
        Ok(())
    }
}
