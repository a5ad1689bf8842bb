use tracing::info;

use crate::files::{DocumentRoot, Resolution};
use crate::http::mime;
use crate::http::parser::parse_request;
use crate::http::request::ParsedRequest;
use crate::http::response::Response;

/// Handles one raw request buffer and returns the (header bytes, body bytes)
/// pair to write back. One linear pass: parse, validate the method line,
/// dispatch on the verb, respond. Every outcome closes the connection.
pub fn handle_request(raw: &[u8], root: &DocumentRoot) -> (Vec<u8>, Vec<u8>) {
    let request = match parse_request(raw) {
        Ok(request) => request,
        Err(e) => {
            info!("Rejecting unparsable request: {:?}", e);
            return Response::bad_request().into_wire();
        }
    };

    info!("HTTP request: {}", request.method_line);

    // The method line must be exactly VERB PATH VERSION.
    let tokens: Vec<&str> = request.method_line.split_whitespace().collect();
    if tokens.len() != 3 {
        return Response::bad_request().into_wire();
    }

    if tokens[0] != "GET" {
        return Response::method_not_allowed().into_wire();
    }

    handle_get(&request, tokens[1], root).into_wire()
}

fn handle_get(request: &ParsedRequest, path: &str, root: &DocumentRoot) -> Response {
    // Redirect locations are absolute, so a request without a Host header
    // cannot be answered.
    let Some(host) = request.host() else {
        return Response::bad_request();
    };

    match root.resolve(path) {
        Resolution::NotFound => Response::not_found(),

        Resolution::Redirect(corrected) => {
            Response::moved_permanently(format!("http://{}{}", host, corrected))
        }

        Resolution::Directory(dir) => {
            serve(root, &format!("{}index.html", dir), "text/html")
        }

        Resolution::File(file) => {
            let content_type = mime::content_type_for(&file);
            serve(root, &file, content_type)
        }
    }
}

/// Reads a resolved file and wraps it in a 200, degrading to 404/500 if the
/// read fails after all (the entry can vanish between resolve and read, and
/// a directory may simply have no index.html).
fn serve(root: &DocumentRoot, path: &str, content_type: &'static str) -> Response {
    match root.read(path) {
        Ok(body) => Response::ok(content_type, body),
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => Response::not_found(),
        Err(e) => {
            tracing::error!("Failed to read {}: {}", path, e);
            Response::internal_error()
        }
    }
}
