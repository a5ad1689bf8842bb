/// Reason phrases for every status code this server knows about.
///
/// Fixed at compile time and read-only. The table covers more codes than the
/// dispatcher currently emits; every code that can reach a status line must
/// have an entry.
static STATUS_PHRASES: &[(u16, &str)] = &[
    (100, "Continue"),
    (101, "Switching Protocols"),
    (200, "OK"),
    (201, "Created"),
    (202, "Accepted"),
    (203, "Non-Authoritative Information"),
    (204, "No Content"),
    (205, "Reset Content"),
    (206, "Partial Content"),
    (300, "Multiple Choices"),
    (301, "Moved Permanently"),
    (302, "Found"),
    (303, "See Other"),
    (304, "Not Modified"),
    (305, "Use Proxy"),
    (307, "Temporary Redirect"),
    (400, "Bad Request"),
    (401, "Unauthorized"),
    (402, "Payment Required"),
    (403, "Forbidden"),
    (404, "Not Found"),
    (405, "Method not allowed"),
    (406, "Not Acceptable"),
    (407, "Proxy Authentication Required"),
    (500, "Internal Server Error"),
];

/// Returns the reason phrase for a status code.
///
/// # Panics
///
/// Panics if the code has no entry in the table. Clients can never trigger
/// this: only server code picks status codes, so a miss is a bug.
pub fn reason_phrase(status: u16) -> &'static str {
    STATUS_PHRASES
        .iter()
        .find(|(code, _)| *code == status)
        .map(|(_, phrase)| *phrase)
        .unwrap_or_else(|| panic!("no reason phrase registered for status code {}", status))
}
