use std::path::PathBuf;

#[derive(Clone)]
pub struct Config {
    pub listen_addr: String,
    pub document_root: PathBuf,
    pub verbose: bool,
}

impl Config {
    pub fn load() -> Self {
        let listen_addr =
            std::env::var("LISTEN")
                .unwrap_or_else(|_| "127.0.0.1:8080".to_string());

        let document_root =
            std::env::var("DOCUMENT_ROOT")
                .unwrap_or_else(|_| "www".to_string())
                .into();

        let verbose =
            std::env::var("VERBOSE")
                .map(|v| v == "1" || v.eq_ignore_ascii_case("true"))
                .unwrap_or(false);

        Self { listen_addr, document_root, verbose }
    }
}
