//! Pure decoding of flat search-module replies into structured records.

use ftsearch_core::reply::Reply;

/// One decoded reply entry: the entity id plus its field/value pairs in
/// reply order.
#[derive(Debug, Clone, PartialEq)]
pub struct Record {
    id: String,
    fields: Vec<(String, Reply)>,
}

impl Record {
    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn fields(&self) -> &[(String, Reply)] {
        &self.fields
    }

    /// First value stored under `name`, if any.
    pub fn field(&self, name: &str) -> Option<&Reply> {
        self.fields
            .iter()
            .find(|(field, _)| field == name)
            .map(|(_, value)| value)
    }
}

/// Zip a flat name/value sequence into a record under `id`.
///
/// A trailing unpaired element is dropped, mirroring the module's tolerant
/// reply shape.
pub fn to_object(id: impl Into<String>, flat: &[Reply]) -> Record {
    let mut fields = Vec::with_capacity(flat.len() / 2);
    for pair in flat.chunks_exact(2) {
        fields.push((pair[0].text(), pair[1].clone()));
    }
    Record {
        id: id.into(),
        fields,
    }
}

/// Decode a search reply shaped `[count, id1, fields1, id2, fields2, ...]`,
/// skipping the leading count. Empty and count-only replies decode to no
/// records, as does a trailing id with no field array.
pub fn to_list(reply: &[Reply]) -> Vec<Record> {
    let mut records = Vec::new();
    let mut i = 1;
    while i + 1 < reply.len() {
        let flat = reply[i + 1].as_array().unwrap_or(&[]);
        records.push(to_object(reply[i].text(), flat));
        i += 2;
    }
    records
}
