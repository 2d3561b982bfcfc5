//! HTTP download headers for serialized CSV
//!
//! Trivial companion to the serializer: builds the header map an HTTP
//! response layer needs to serve the CSV blob as a file download.

use chrono::Utc;
use std::collections::HashMap;

/// Build the response headers for a CSV file download
///
/// An empty `filename` defaults to the current Unix timestamp.
///
/// # Examples
/// ```
/// use flatcsv::headers::download_headers;
///
/// let headers = download_headers("report");
/// assert_eq!(headers["Content-Type"], "text/csv");
/// assert_eq!(
///     headers["Content-Disposition"],
///     "attachment; filename=\"report.csv\""
/// );
/// ```
pub fn download_headers(filename: &str) -> HashMap<String, String> {
    let name = if filename.is_empty() {
        Utc::now().timestamp().to_string()
    } else {
        filename.to_string()
    };
    HashMap::from([
        ("Content-Type".to_string(), "text/csv".to_string()),
        (
            "Content-Disposition".to_string(),
            format!("attachment; filename=\"{name}.csv\""),
        ),
    ])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_download_headers_with_filename() {
        let headers = download_headers("my_file");
        assert_eq!(headers.len(), 2);
        assert_eq!(headers["Content-Type"], "text/csv");
        assert_eq!(
            headers["Content-Disposition"],
            "attachment; filename=\"my_file.csv\""
        );
    }

    #[test]
    fn test_download_headers_default_to_timestamp() {
        let headers = download_headers("");
        let disposition = &headers["Content-Disposition"];
        let name = disposition
            .strip_prefix("attachment; filename=\"")
            .and_then(|s| s.strip_suffix(".csv\""))
            .unwrap();
        assert!(name.parse::<i64>().is_ok(), "expected a timestamp: {name}");
    }
}
