use atrium::files::{DocumentRoot, Resolution};

/// Builds a throwaway document root:
///
/// ```text
/// <tmp>/secret.txt          (outside the root)
/// <tmp>/www/index.html
/// <tmp>/www/base.css
/// <tmp>/www/sub/index.html
/// <tmp>/www/sub/page.html
/// ```
fn document_root() -> (tempfile::TempDir, DocumentRoot) {
    let dir = tempfile::tempdir().expect("failed to create temp dir");
    let root = dir.path().join("www");

    std::fs::create_dir_all(root.join("sub")).unwrap();
    std::fs::write(root.join("index.html"), "<h1>root</h1>").unwrap();
    std::fs::write(root.join("base.css"), "body {}").unwrap();
    std::fs::write(root.join("sub").join("index.html"), "<h1>sub</h1>").unwrap();
    std::fs::write(root.join("sub").join("page.html"), "<p>page</p>").unwrap();
    std::fs::write(dir.path().join("secret.txt"), "secret").unwrap();

    let resolver = DocumentRoot::new(&root);
    (dir, resolver)
}

#[test]
fn test_resolve_existing_file() {
    let (_dir, root) = document_root();

    assert_eq!(root.resolve("/base.css"), Resolution::File("/base.css".to_string()));
    assert_eq!(
        root.resolve("/sub/page.html"),
        Resolution::File("/sub/page.html".to_string())
    );
}

#[test]
fn test_resolve_root_is_a_directory() {
    let (_dir, root) = document_root();

    assert_eq!(root.resolve("/"), Resolution::Directory("/".to_string()));
}

#[test]
fn test_resolve_directory_without_slash_redirects() {
    let (_dir, root) = document_root();

    assert_eq!(root.resolve("/sub"), Resolution::Redirect("/sub/".to_string()));
}

#[test]
fn test_resolve_directory_with_slash() {
    let (_dir, root) = document_root();

    assert_eq!(root.resolve("/sub/"), Resolution::Directory("/sub/".to_string()));
}

#[test]
fn test_resolve_missing_path() {
    let (_dir, root) = document_root();

    assert_eq!(root.resolve("/missing.html"), Resolution::NotFound);
    assert_eq!(root.resolve("/sub/missing.html"), Resolution::NotFound);
}

#[test]
fn test_resolve_folds_dot_segments() {
    let (_dir, root) = document_root();

    assert_eq!(
        root.resolve("/sub/../base.css"),
        Resolution::File("/base.css".to_string())
    );
    assert_eq!(
        root.resolve("/./base.css"),
        Resolution::File("/base.css".to_string())
    );
}

#[test]
fn test_resolve_cannot_escape_the_root() {
    let (_dir, root) = document_root();

    // secret.txt exists one level above the document root; no amount of ..
    // reaches it, because canonicalization folds those away first.
    assert_eq!(root.resolve("/../secret.txt"), Resolution::NotFound);
    assert_eq!(root.resolve("/../../secret.txt"), Resolution::NotFound);
    assert_eq!(root.resolve("/sub/../../secret.txt"), Resolution::NotFound);
    assert_eq!(root.resolve("/../../../../etc/passwd"), Resolution::NotFound);
}

#[test]
fn test_read_returns_file_bytes() {
    let (_dir, root) = document_root();

    assert_eq!(root.read("/base.css").unwrap(), b"body {}".to_vec());
    assert_eq!(root.read("/sub/index.html").unwrap(), b"<h1>sub</h1>".to_vec());
}

#[test]
fn test_read_missing_file_is_not_found() {
    let (_dir, root) = document_root();

    let err = root.read("/missing.html").unwrap_err();
    assert_eq!(err.kind(), std::io::ErrorKind::NotFound);
}
