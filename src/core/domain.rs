use serde::{Deserialize, Serialize};

// Identifiable defines common traits that can be shared by stored objects
pub trait Identifiable: Sync + Send {
    fn id(&self) -> String;
}

// Configuration abstracts config options for the bookshelf service
#[derive(Debug, PartialEq, Serialize, Deserialize, Clone)]
pub(crate) struct Configuration {
    pub env_name: String,
    pub http_port: u16,
}

const DEFAULT_HTTP_PORT: u16 = 9000;

impl Configuration {
    pub fn new(env_name: &str) -> Self {
        Configuration {
            env_name: env_name.to_string(),
            http_port: std::env::var("HTTP_PORT").ok()
                .and_then(|port| port.parse().ok())
                .unwrap_or(DEFAULT_HTTP_PORT),
        }
    }
}
