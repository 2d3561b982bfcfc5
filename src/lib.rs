//! flatcsv - turn record collections into delimited CSV text
//!
//! This library converts an in-memory collection of homogeneous records into
//! a single CSV string, with configurable field selection, header naming,
//! separator handling, date formatting, and null-filling. Records come in two
//! shapes: string-keyed mappings, and objects exposing their fields through
//! the [`FieldAccess`] capability. Both shapes may be mixed within one
//! collection.
//!
//! There is no quoting scheme: a separator occurring inside a cell value is
//! replaced with a configurable substitute instead. Serialization is fully
//! synchronous, performs no I/O, and either returns the complete blob or
//! fails with a typed error and no partial output.
//!
//! # Architecture
//!
//! - `value`: dynamic value union and the `FieldAccess` record capability
//! - `serializer`: validation, extraction, coercion, and row assembly
//! - `headers`: download-header map for serving the result over HTTP
//! - `error`: custom error types
//!
//! # Example
//!
//! ```rust
//! use flatcsv::{RowSerializer, Value};
//!
//! let records = Value::List(vec![
//!     Value::map([("name", "Ada"), ("city", "London")]),
//!     Value::map([("name", "Grace"), ("city", "Arlington")]),
//! ]);
//! let fields = vec![Value::from("name"), Value::from("city")];
//!
//! let csv = RowSerializer::new().serialize(&records, &fields, &[]).unwrap();
//! assert_eq!(csv, "name,city\nAda,London\nGrace,Arlington\n");
//! ```

pub mod error;
pub mod headers;
pub mod serializer;
pub mod value;

pub use error::{CsvError, CsvResult};
pub use headers::download_headers;
pub use serializer::{
    CsvOptions, RowSerializer, DEFAULT_SEPARATOR, DEFAULT_SEPARATOR_REPLACEMENT,
};
pub use value::{FieldAccess, Value};
