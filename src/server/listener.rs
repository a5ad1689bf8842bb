use tokio::net::TcpListener;
use tracing::info;
use crate::config::Config;
use crate::files::DocumentRoot;
use crate::http::connection::Connection;

pub async fn run(cfg: &Config) -> anyhow::Result<()> {
    let listener = TcpListener::bind(&cfg.listen_addr).await?;
    info!("Listening on {}", cfg.listen_addr);
    info!("Serving files from {}", cfg.document_root.display());

    let root = DocumentRoot::new(&cfg.document_root);

    loop {
        let (socket, peer) = listener.accept().await?;
        info!("Accepted connection from {}", peer);

        let root = root.clone();
        tokio::spawn(async move {
            let mut conn = Connection::new(socket, root);
            if let Err(e) = conn.run().await {
                tracing::error!("Connection error from {}: {}", peer, e);
            }
        });
    }
}
