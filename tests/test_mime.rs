use atrium::http::mime::content_type_for;

#[test]
fn test_known_extensions() {
    assert_eq!(content_type_for("style.css"), "text/css");
    assert_eq!(content_type_for("index.html"), "text/html");
    assert_eq!(content_type_for("data.xml"), "text/xml");
    assert_eq!(content_type_for("table.csv"), "text/csv");
    assert_eq!(content_type_for("doc.pdf"), "application/pdf");
}

#[test]
fn test_unknown_extension_is_plain_text() {
    assert_eq!(content_type_for("notes.txt"), "text/plain");
    assert_eq!(content_type_for("archive.tar"), "text/plain");
}

#[test]
fn test_no_extension_is_plain_text() {
    assert_eq!(content_type_for("readme"), "text/plain");
    assert_eq!(content_type_for("/some/dir/readme"), "text/plain");
}

#[test]
fn test_match_is_case_sensitive() {
    assert_eq!(content_type_for("INDEX.HTML"), "text/plain");
    assert_eq!(content_type_for("style.CSS"), "text/plain");
}

#[test]
fn test_only_the_last_suffix_counts() {
    assert_eq!(content_type_for("archive.tar.css"), "text/css");
    assert_eq!(content_type_for("index.html.bak"), "text/plain");
}

#[test]
fn test_full_paths_work() {
    assert_eq!(content_type_for("/deep/style.css"), "text/css");
    assert_eq!(content_type_for("/sub/index.html"), "text/html");
}
