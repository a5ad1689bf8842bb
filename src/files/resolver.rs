//! Path resolution against the document root
//!
//! Requested paths are canonicalized lexically before anything touches the
//! filesystem, so `..` games cannot name entries outside the root.

use std::io;
use std::path::PathBuf;

/// Outcome of resolving a requested URL path.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Resolution {
    /// Nothing exists at the path.
    NotFound,
    /// A directory was requested without its trailing slash; the client
    /// should retry at the corrected path before anything is served.
    Redirect(String),
    /// A regular file, safe to serve directly.
    File(String),
    /// A directory requested with its trailing slash; its `index.html` is
    /// what gets served (that file may still turn out to be missing).
    Directory(String),
}

/// The directory all requests are resolved under.
///
/// Set once at startup and immutable afterwards. Cloned into each connection
/// task; there is no shared mutable state behind it.
#[derive(Debug, Clone)]
pub struct DocumentRoot {
    root: PathBuf,
}

impl DocumentRoot {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// Decides how a requested URL path maps onto the filesystem.
    ///
    /// The requested path is canonicalized first; the filesystem is only ever
    /// consulted about the root-joined candidate, so the answer can never
    /// concern an entry outside the root.
    pub fn resolve(&self, requested: &str) -> Resolution {
        let canonical = canonicalize_path(requested);
        let candidate = self.fs_path(&canonical);

        if !candidate.exists() {
            return Resolution::NotFound;
        }

        if canonical.ends_with('/') {
            return Resolution::Directory(canonical);
        }

        if candidate.is_file() {
            return Resolution::File(canonical);
        }

        // A directory reached without its trailing slash. Serving it in
        // place would break relative links in the HTML beneath it, so the
        // client is sent back around.
        Resolution::Redirect(format!("{}/", canonical))
    }

    /// Reads the file at a canonical URL path, joined under the root.
    pub fn read(&self, canonical: &str) -> io::Result<Vec<u8>> {
        std::fs::read(self.fs_path(canonical))
    }

    fn fs_path(&self, canonical: &str) -> PathBuf {
        // Canonical paths start with '/'; joining one as-is would replace
        // the root outright.
        self.root.join(canonical.trim_start_matches('/'))
    }
}

/// Collapses a requested path to an absolute form without `.` or `..`
/// segments, keeping a trailing slash when the request had one.
///
/// `..` at the root has nowhere left to go and is dropped, which is what
/// keeps resolution from climbing above `/`.
fn canonicalize_path(requested: &str) -> String {
    let mut segments: Vec<&str> = Vec::new();

    for segment in requested.split('/') {
        match segment {
            "" | "." => {}
            ".." => {
                segments.pop();
            }
            other => segments.push(other),
        }
    }

    if segments.is_empty() {
        return "/".to_string();
    }

    let mut canonical = format!("/{}", segments.join("/"));
    if requested.ends_with('/') {
        canonical.push('/');
    }
    canonical
}
