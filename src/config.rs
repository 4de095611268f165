// src/config.rs
use std::env;

/// Kredensial dan base URL Hostaway, dibaca sekali saat startup dan
/// diteruskan ke client saat konstruksi. Tidak ada default global yang bisa
/// dimutasi; test tinggal membangun config sendiri.
#[derive(Debug, Clone)]
pub struct HostawayConfig {
    pub base_url: String,
    pub account_id: String,
    pub api_key: String,
}

impl HostawayConfig {
    pub fn from_env() -> Self {
        Self {
            base_url: env::var("HOSTAWAY_API_BASE")
                .unwrap_or_else(|_| "https://api.hostaway.com/v1".to_string()),
            account_id: env::var("HOSTAWAY_ACCOUNT_ID").unwrap_or_else(|_| "52267".to_string()),
            api_key: env::var("HOSTAWAY_API_KEY")
                .unwrap_or_else(|_| "f94377ebbbb479490bb3ec364649".to_string()),
        }
    }
}

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub host: String,
    pub port: u16,
    pub cors_origin: String,
    pub hostaway: HostawayConfig,
}

impl AppConfig {
    pub fn from_env() -> Self {
        let port = env::var("PORT")
            .ok()
            .and_then(|value| value.parse().ok())
            .unwrap_or(3001);

        Self {
            host: env::var("HOST").unwrap_or_else(|_| "127.0.0.1".to_string()),
            port,
            cors_origin: env::var("CORS_ORIGIN")
                .unwrap_or_else(|_| "http://localhost:3000".to_string()),
            hostaway: HostawayConfig::from_env(),
        }
    }
}
