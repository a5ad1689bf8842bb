use crate::http::request::ParsedRequest;
use std::collections::HashMap;

/// Why a raw buffer could not be turned into a request.
///
/// Parsing is all-or-nothing: any of these discards whatever was extracted so
/// far, and the caller answers with 400.
#[derive(Debug)]
pub enum ParseError {
    /// The buffer was not valid UTF-8.
    InvalidEncoding,
    /// The buffer decoded to an empty string.
    Empty,
    /// A header line had no `": "` separator.
    MalformedHeader,
}

pub fn parse_request(raw: &[u8]) -> Result<ParsedRequest, ParseError> {
    let text = std::str::from_utf8(raw)
        .map_err(|_| ParseError::InvalidEncoding)?;

    if text.is_empty() {
        return Err(ParseError::Empty);
    }

    let mut lines = text.split("\r\n");

    // First line is the method line, stored verbatim. Whether it makes any
    // sense is decided at dispatch, not here.
    let method_line = lines.next().ok_or(ParseError::Empty)?.to_string();

    let mut headers = HashMap::new();
    let mut body: Option<String> = None;

    for line in lines {
        if let Some(body) = body.as_mut() {
            // Past the blank separator everything is body, concatenated
            // without the line breaks. No Content-Length framing.
            body.push_str(line);
        } else if line.is_empty() {
            body = Some(String::new());
        } else {
            // Only the first ": " separates name from value; the value keeps
            // any colons of its own (e.g. "Host: localhost:8080").
            let (name, value) = line
                .split_once(": ")
                .ok_or(ParseError::MalformedHeader)?;

            headers.insert(
                name.trim().to_string(),
                value.trim().to_string(),
            );
        }
    }

    Ok(ParsedRequest {
        method_line,
        headers,
        body,
    })
}
