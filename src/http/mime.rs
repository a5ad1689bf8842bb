/// Picks the Content-Type a file should be served with.
///
/// The match is on the suffix after the last `.`, case-sensitive. Anything
/// unrecognized, including files without an extension, is served as plain
/// text.
pub fn content_type_for(path: &str) -> &'static str {
    let extension = match path.rsplit_once('.') {
        Some((_, ext)) => ext,
        None => return "text/plain",
    };

    match extension {
        "css" => "text/css",
        "html" => "text/html",
        "xml" => "text/xml",
        "csv" => "text/csv",
        "pdf" => "application/pdf",
        _ => "text/plain",
    }
}
