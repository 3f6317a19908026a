use std::{net::SocketAddr, path::PathBuf, sync::Arc};

use anyhow::Context;
use serde::{Deserialize, Serialize};
use tracing::{Level, debug, instrument};

// portfolio server configuration
//
// the server only hosts static files, so this is just the listening socket and
// the three directories it serves from
#[derive(Clone, Debug, Deserialize, Serialize)]
pub struct ServerConfig {
    pub http: HttpConfig,
}

#[derive(Clone, Debug, Deserialize, Serialize)]
pub struct HttpConfig {
    // ip and port for http server
    pub socket: String,

    // location of the built wasm app, which must contain index.html
    pub doc_root: PathBuf,

    // profile picture, resume, logos
    pub asset_root: PathBuf,

    // certificate documents
    pub certificate_root: PathBuf,
}

impl HttpConfig {
    pub fn socket_addr(&self) -> anyhow::Result<SocketAddr> {
        self.socket
            .parse::<SocketAddr>()
            .with_context(|| format!("failed to parse http socket address {}", self.socket))
    }
}

// in order to extract the config table from a larger document, we need to specify it
// as a subtable of the root node, i.e. a substruct
#[derive(Debug, Deserialize, Serialize)]
struct TomlConfigFile {
    config: ServerConfig,
}

pub fn parse_config(doc: &str) -> anyhow::Result<ServerConfig> {
    let data: TomlConfigFile = toml::from_str(doc).context("failed to parse config file")?;

    Ok(data.config)
}

#[instrument(level=Level::DEBUG)]
pub async fn read_config(filename: PathBuf) -> anyhow::Result<Arc<ServerConfig>> {
    debug!("reading config file");

    let doc = tokio::fs::read_to_string(&filename)
        .await
        .with_context(|| format!("failed to read config file {filename:?}"))?;

    let config = parse_config(&doc)?;

    debug!("successfully parsed config file");
    Ok(Arc::new(config))
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = r#"
        [config.http]
        socket = "127.0.0.1:8080"
        doc_root = "/srv/portfolio/dist"
        asset_root = "/srv/portfolio/assets"
        certificate_root = "/srv/portfolio/certificates"
    "#;

    #[test]
    fn parses_nested_config_table() {
        let config = parse_config(SAMPLE).unwrap();

        assert_eq!(config.http.doc_root, PathBuf::from("/srv/portfolio/dist"));
        assert_eq!(
            config.http.socket_addr().unwrap(),
            "127.0.0.1:8080".parse::<SocketAddr>().unwrap()
        );
    }

    #[test]
    fn missing_table_is_an_error() {
        let err = parse_config("[http]\nsocket = \"127.0.0.1:1\"").unwrap_err();
        assert!(err.to_string().contains("failed to parse config file"));
    }

    #[test]
    fn bad_socket_is_reported() {
        let mut config = parse_config(SAMPLE).unwrap();
        config.http.socket = "localhost".into();

        assert!(config.http.socket_addr().is_err());
    }

    #[tokio::test]
    async fn reads_config_from_disk() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, SAMPLE).unwrap();

        let config = read_config(path).await.unwrap();
        assert_eq!(config.http.socket, "127.0.0.1:8080");

        assert!(read_config(dir.path().join("missing.toml")).await.is_err());
    }
}
