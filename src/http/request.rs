use std::collections::HashMap;

/// Represents a parsed HTTP request from a client.
///
/// The method line is kept verbatim; it is only split and validated at
/// dispatch time, so a request with a garbled first line still parses and is
/// rejected later.
#[derive(Debug, Clone)]
pub struct ParsedRequest {
    /// The first line of the request, untouched (expected form: `VERB PATH VERSION`)
    pub method_line: String,
    /// Request headers as key-value pairs, names and values trimmed.
    /// A repeated header name overwrites the earlier value.
    pub headers: HashMap<String, String>,
    /// Everything after the blank separator line, concatenated.
    /// `None` means the request never contained a blank line, which is
    /// different from an empty body.
    pub body: Option<String>,
}

impl ParsedRequest {
    /// Retrieves a header value by its exact name.
    ///
    /// Lookups are case-sensitive: headers are stored as received, and the
    /// server only ever asks for the canonical spelling.
    ///
    /// # Arguments
    ///
    /// * `name` - Header name to look up
    ///
    /// # Returns
    ///
    /// `Some(&str)` with the header value if present, `None` otherwise.
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .get(name)
            .map(|v| v.as_str())
    }

    /// The `Host` header, needed to build absolute redirect locations.
    pub fn host(&self) -> Option<&str> {
        self.header("Host")
    }
}
