//! Row serialization to CSV text
//!
//! Turns a record collection plus a field specification into one CSV blob:
//! header line first, then one line per record, fields joined by the
//! separator. No RFC-4180 quoting is performed; separators embedded in cell
//! values are replaced with the configured replacement instead.

use crate::error::{CsvError, CsvResult};
use crate::value::Value;
use serde::{Deserialize, Serialize};

/// Separator used when the configured one is empty
pub const DEFAULT_SEPARATOR: &str = ",";

/// Replacement used when the configured one is empty
pub const DEFAULT_SEPARATOR_REPLACEMENT: &str = " ";

/// Formatting options for a serialization call
///
/// Empty `separator` and `separator_replacement` mean "use the defaults"
/// ([`DEFAULT_SEPARATOR`] and [`DEFAULT_SEPARATOR_REPLACEMENT`]). An empty
/// `date_format` renders dates as empty strings; an empty `filler` leaves
/// missing cells blank.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CsvOptions {
    /// Delimiter placed between columns
    pub separator: String,
    /// Substituted for the separator inside cell values
    pub separator_replacement: String,
    /// chrono format string applied to date and datetime values
    pub date_format: String,
    /// Cell content for absent or null fields
    pub filler: String,
}

impl CsvOptions {
    fn separator(&self) -> &str {
        if self.separator.is_empty() {
            DEFAULT_SEPARATOR
        } else {
            &self.separator
        }
    }

    fn replacement(&self) -> &str {
        if self.separator_replacement.is_empty() {
            DEFAULT_SEPARATOR_REPLACEMENT
        } else {
            &self.separator_replacement
        }
    }
}

/// Serializes record collections to CSV text
///
/// The serializer itself is stateless apart from its options; every call is
/// independent and reentrant.
///
/// # Examples
/// ```
/// use flatcsv::serializer::RowSerializer;
/// use flatcsv::value::Value;
///
/// let records = Value::List(vec![
///     Value::map([("name", "Ada"), ("city", "London")]),
/// ]);
/// let fields = vec![Value::from("name"), Value::from("city")];
///
/// let csv = RowSerializer::new().serialize(&records, &fields, &[]).unwrap();
/// assert_eq!(csv, "name,city\nAda,London\n");
/// ```
#[derive(Debug, Clone, Default)]
pub struct RowSerializer {
    options: CsvOptions,
}

impl RowSerializer {
    /// Create a serializer with default options
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a serializer with explicit options
    pub fn with_options(options: CsvOptions) -> Self {
        Self { options }
    }

    /// Serialize an array-like record collection
    ///
    /// `records` must be a `Value::List`; any other shape fails with
    /// [`CsvError::MalformedObject`]. Column order follows `fields`; header
    /// labels come from `indexes` when non-empty, otherwise from the fields
    /// themselves.
    pub fn serialize(
        &self,
        records: &Value,
        fields: &[Value],
        indexes: &[Value],
    ) -> CsvResult<String> {
        let Value::List(rows) = records else {
            return Err(CsvError::MalformedObject);
        };
        self.serialize_iter(rows, fields, indexes)
    }

    /// Serialize any iterable of records
    ///
    /// The traversable counterpart of [`serialize`](Self::serialize); the
    /// shape check is satisfied by the type system, everything else behaves
    /// identically.
    pub fn serialize_iter<'a, I>(
        &self,
        records: I,
        fields: &[Value],
        indexes: &[Value],
    ) -> CsvResult<String>
    where
        I: IntoIterator<Item = &'a Value>,
    {
        let separator = self.options.separator();
        let replacement = self.options.replacement();

        let field_names = check_fields(fields, indexes, separator)?;
        let header = check_indexes(fields, indexes, separator)?;

        let mut output = match header {
            Some(labels) => labels.join(separator),
            None => field_names.join(separator),
        };
        output.push('\n');

        for record in records {
            let mut cells = Vec::with_capacity(field_names.len());
            for field in &field_names {
                let cell = self.cell_text(record, field)?;
                cells.push(cell.replace(separator, replacement));
            }
            output.push_str(&cells.join(separator));
            output.push('\n');
        }
        Ok(output)
    }

    /// Resolve one cell: extract the field from the record and coerce it
    fn cell_text(&self, record: &Value, field: &str) -> CsvResult<String> {
        let resolved = match record {
            Value::Entity(entity) => entity.field(field).filter(|v| !v.is_null()),
            Value::Map(entries) => entries.get(field).filter(|v| !v.is_null()).cloned(),
            // Any other record shape exposes no fields; every cell is filler
            _ => None,
        };

        let value = match resolved {
            Some(value) => value,
            None => return Ok(self.options.filler.clone()),
        };

        match value {
            Value::Date(d) => Ok(d.format(&self.options.date_format).to_string()),
            Value::DateTime(dt) => Ok(dt.format(&self.options.date_format).to_string()),
            Value::Bool(b) => Ok(if b { "1" } else { "0" }.to_string()),
            Value::Text(s) => Ok(s),
            Value::Int(i) => Ok(i.to_string()),
            Value::Float(f) => Ok(f.to_string()),
            Value::Null => Ok(self.options.filler.clone()),
            Value::List(_) | Value::Map(_) | Value::Entity(_) => {
                Err(CsvError::unrepresentable(field))
            }
        }
    }
}

/// Validate the field list and return its string forms
///
/// The separator check only applies when no custom indexes are supplied:
/// with indexes present, header content decouples from raw field names and
/// fields are used solely as extraction keys. Deliberate asymmetry.
fn check_fields(fields: &[Value], indexes: &[Value], separator: &str) -> CsvResult<Vec<String>> {
    let mut names = Vec::with_capacity(fields.len());
    for field in fields {
        let name = field.header_text().ok_or_else(|| {
            CsvError::malformed_fields("every field must have a string representation")
        })?;
        if indexes.is_empty() && name.contains(separator) {
            return Err(CsvError::malformed_fields(format!(
                "field cannot contain the \"{separator}\" symbol"
            )));
        }
        names.push(name);
    }
    Ok(names)
}

/// Validate the index list and return header labels, if any
fn check_indexes(
    fields: &[Value],
    indexes: &[Value],
    separator: &str,
) -> CsvResult<Option<Vec<String>>> {
    if indexes.is_empty() {
        return Ok(None);
    }
    if indexes.len() != fields.len() {
        return Err(CsvError::malformed_fields(
            "indexes must be empty or have the same size as fields",
        ));
    }
    let mut labels = Vec::with_capacity(indexes.len());
    for index in indexes {
        let label = index.header_text().ok_or_else(|| {
            CsvError::malformed_fields("every index must have a string representation")
        })?;
        if label.contains(separator) {
            return Err(CsvError::malformed_fields(format!(
                "index cannot contain the \"{separator}\" symbol"
            )));
        }
        labels.push(label);
    }
    Ok(Some(labels))
}
