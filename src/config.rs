use serde::Deserialize;

#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    /// API listen address
    pub listen_addr: String,
    /// Path to the asn_db SQLite file
    pub db_path: String,
    /// Base URL the completion webhook is fired against
    pub webhook_remote: String,
    /// Consumer poll interval in milliseconds
    pub resolve_interval_ms: u64,
    pub debug: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            listen_addr: "0.0.0.0:3000".to_string(),
            db_path: "data/asn_db.sqlite3".to_string(),
            webhook_remote: "http://localhost:8000/webhook/asn".to_string(),
            resolve_interval_ms: 1000,
            debug: false,
        }
    }
}

pub fn load_config() -> anyhow::Result<Config> {
    let listen_addr =
        std::env::var("ASN_LISTEN_ADDR").unwrap_or_else(|_| "0.0.0.0:3000".to_string());

    let db_path =
        std::env::var("ASN_DB_PATH").unwrap_or_else(|_| "data/asn_db.sqlite3".to_string());

    let webhook_remote = std::env::var("ASN_WEBHOOK_REMOTE")
        .unwrap_or_else(|_| "http://localhost:8000/webhook/asn".to_string());

    let resolve_interval_ms = std::env::var("ASN_RESOLVE_INTERVAL_MS")
        .unwrap_or_else(|_| "1000".to_string())
        .parse()
        .unwrap_or(1000);

    let debug = std::env::var("DEBUG").is_ok();

    Ok(Config {
        listen_addr,
        db_path,
        webhook_remote,
        resolve_interval_ms,
        debug,
    })
}
