use std::time::Duration;

#[derive(Clone, Debug)]
pub struct WikiConfig {
    pub database_url: String,
    pub max_connections: u32,
    pub http_port: u16,
    pub queue_address: String,
    pub request_timeout: Duration,
}

impl WikiConfig {
    pub fn from_env() -> Self {
        let database_url = std::env::var("DATABASE_URL")
            .unwrap_or_else(|_| "sqlite://wiki.db".to_string());

        let max_connections = std::env::var("MAX_CONNECTIONS")
            .ok()
            .and_then(|val| val.parse::<u32>().ok())
            .unwrap_or(15);

        let http_port = std::env::var("HTTP_SERVER_PORT")
            .ok()
            .and_then(|val| val.parse::<u16>().ok())
            .unwrap_or(8080);

        let queue_address =
            std::env::var("WIKIDB_QUEUE").unwrap_or_else(|_| "wikidb.queue".to_string());

        let request_timeout = std::env::var("DISPATCH_TIMEOUT_MS")
            .ok()
            .and_then(|val| val.parse::<u64>().ok())
            .map(Duration::from_millis)
            .unwrap_or(Duration::from_secs(5));

        Self {
            database_url,
            max_connections,
            http_port,
            queue_address,
            request_timeout,
        }
    }
}
