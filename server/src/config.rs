use clap::Parser;
use figment::{
    providers::{Env, Format, Serialized, Toml},
    Figment,
};
use serde::{Deserialize, Serialize};

/// Word-voting board server
#[derive(Parser, Serialize, Deserialize, Clone, Debug)]
#[command(
    name = "wordwall-server",
    version,
    about = "Live audience word-voting board server"
)]
pub struct Config {
    /// Port to listen on
    #[arg(long, env = "WORDWALL_PORT", default_value = "3001")]
    pub port: u16,

    /// Bind address
    #[arg(long, env = "WORDWALL_BIND_ADDRESS", default_value = "0.0.0.0")]
    pub bind_address: String,

    /// Path to TOML config file
    #[arg(long, default_value = "./wordwall.toml")]
    pub config: String,

    /// Shared admin password, checked against the X-Admin-Password header
    #[arg(long, env = "WORDWALL_ADMIN_PASSWORD", default_value = "admin123")]
    pub admin_password: String,

    /// Enable structured JSON logging (for Docker/production)
    #[arg(long, env = "WORDWALL_JSON_LOGS")]
    pub json_logs: bool,

    /// Output a commented TOML config template and exit
    #[arg(long)]
    pub generate_config: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            port: 3001,
            bind_address: "0.0.0.0".to_string(),
            config: "./wordwall.toml".to_string(),
            admin_password: "admin123".to_string(),
            json_logs: false,
            generate_config: false,
        }
    }
}

impl Config {
    /// Load config with layered precedence:
    /// built-in defaults < TOML file < env vars (WORDWALL_*) < CLI args
    pub fn load() -> Result<Self, figment::Error> {
        let cli = Config::parse();
        let config_path = cli.config.clone();

        Figment::new()
            .merge(Serialized::defaults(Config::default()))
            .merge(Toml::file(&config_path))
            .merge(Env::prefixed("WORDWALL_"))
            .merge(Serialized::defaults(cli))
            .extract()
    }
}

/// Generate a commented TOML config template
pub fn generate_config_template() -> String {
    r#"# Word-Voting Board Server Configuration
# Place this file at ./wordwall.toml or specify with --config <path>
# All settings can be overridden via environment variables (WORDWALL_PORT, etc.)
# or CLI flags (--port, etc.)

# Server port (default: 3001)
# port = 3001

# Bind address (default: 0.0.0.0 — all interfaces)
# bind_address = "0.0.0.0"

# Shared admin password for the admin panel endpoints.
# Clients resend it per request in the X-Admin-Password header.
# admin_password = "admin123"

# Enable structured JSON logging for Docker/production
# json_logs = false
"#
    .to_string()
}
