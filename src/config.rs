use std::{
    env,
    net::{IpAddr, Ipv4Addr, SocketAddr},
};

/// Runtime configuration, read once at startup.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub listen_addr: SocketAddr,
    /// Gemini API key. A missing or empty key is not fatal at startup;
    /// each generation call reports the problem to the caller instead.
    pub api_key: Option<String>,
    pub model_id: String,
    pub api_base_url: String,
}

impl AppConfig {
    pub fn from_env() -> anyhow::Result<Self> {
        let listen_addr = env::var("SERVER_ADDR")
            .unwrap_or_else(|_| "127.0.0.1:8080".into())
            .parse()
            .unwrap_or_else(|_| SocketAddr::new(IpAddr::V4(Ipv4Addr::LOCALHOST), 8080));

        let api_key = env::var("GEMINI_API_KEY")
            .ok()
            .filter(|key| !key.trim().is_empty());

        let model_id = env::var("GEMINI_MODEL").unwrap_or_else(|_| "gemini-pro".to_string());

        let api_base_url = env::var("GEMINI_API_BASE")
            .unwrap_or_else(|_| "https://generativelanguage.googleapis.com".to_string());

        Ok(Self {
            listen_addr,
            api_key,
            model_id,
            api_base_url,
        })
    }
}
