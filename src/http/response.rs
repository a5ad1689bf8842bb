use crate::http::status;

const HTTP_VERSION: &str = "HTTP/1.1";

/// Every response tells the client the connection is done.
const CONNECTION_POLICY: &str = "Closed";

/// Represents a complete HTTP response ready to be sent to a client.
///
/// The server emits a small, fixed header block (status line, optional
/// Content-Type, optional Location, Connection) in exactly that order, so
/// headers are typed fields instead of a free-form map. Bodies are framed by
/// closing the connection; no Content-Length is written.
#[derive(Debug)]
pub struct Response {
    /// The HTTP status code
    pub status: u16,
    /// Content-Type header value, if the response carries a body type
    pub content_type: Option<&'static str>,
    /// Location header value, set on redirects
    pub location: Option<String>,
    /// Response body as bytes
    pub body: Vec<u8>,
}

impl Response {
    /// Creates a 200 OK response serving `body` as `content_type`.
    pub fn ok(content_type: &'static str, body: Vec<u8>) -> Self {
        Self {
            status: 200,
            content_type: Some(content_type),
            location: None,
            body,
        }
    }

    /// Creates a 301 response pointing the client at `location`.
    pub fn moved_permanently(location: String) -> Self {
        Self {
            status: 301,
            content_type: None,
            location: Some(location),
            body: Vec::new(),
        }
    }

    /// Creates a 400 Bad Request response.
    pub fn bad_request() -> Self {
        Self::empty(400)
    }

    /// Creates a 404 Not Found response.
    pub fn not_found() -> Self {
        Self::empty(404)
    }

    /// Creates a 405 Method not allowed response.
    pub fn method_not_allowed() -> Self {
        Self::empty(405)
    }

    /// Creates a 500 Internal Server Error response.
    pub fn internal_error() -> Self {
        Self::empty(500)
    }

    fn empty(status: u16) -> Self {
        Self {
            status,
            content_type: None,
            location: None,
            body: Vec::new(),
        }
    }

    /// Serializes the header block: status line, then Content-Type and
    /// Location when present, then Connection, each line CRLF-terminated,
    /// closed off by the blank separator line.
    pub fn header_bytes(&self) -> Vec<u8> {
        let mut header = String::new();

        header.push_str(&status_line(self.status));
        header.push_str("\r\n");

        if let Some(content_type) = self.content_type {
            header.push_str(&content_type_line(content_type));
            header.push_str("\r\n");
        }

        if let Some(location) = &self.location {
            header.push_str(&location_line(location));
            header.push_str("\r\n");
        }

        header.push_str(&connection_line(CONNECTION_POLICY));
        header.push_str("\r\n\r\n");

        header.into_bytes()
    }

    /// Splits the response into the (header bytes, body bytes) pair the
    /// transport writes back to the client.
    pub fn into_wire(self) -> (Vec<u8>, Vec<u8>) {
        let header = self.header_bytes();
        (header, self.body)
    }
}

fn status_line(status: u16) -> String {
    format!("{} {} {}", HTTP_VERSION, status, status::reason_phrase(status))
}

fn content_type_line(value: &str) -> String {
    format!("Content-Type: {}", value)
}

fn location_line(value: &str) -> String {
    format!("Location: {}", value)
}

fn connection_line(value: &str) -> String {
    format!("Connection: {}", value)
}
