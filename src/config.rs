use crate::portal::Variant;
use clap::Parser;
use std::path::PathBuf;

/// VocaLink - sign-in portal for an accessible classroom platform
#[derive(Parser, Debug, Clone)]
#[command(author, version, about, long_about = None)]
pub struct Config {
    /// Host address to bind to
    #[arg(long, env = "VL_HOST", default_value = "127.0.0.1")]
    pub host: String,

    /// Port to listen on
    #[arg(long, env = "VL_PORT", default_value = "3000")]
    pub port: String,

    /// Which portal to serve
    #[arg(long, env = "VL_VARIANT", value_enum, default_value = "demo")]
    pub variant: Variant,

    /// Base URL for the application
    #[arg(long, env = "VL_BASE_URL")]
    pub base_url: Option<String>,

    /// Static files directory (stylesheet, collage images)
    #[arg(long, env = "VL_STATIC_DIR", default_value = "./static")]
    pub static_dir: PathBuf,
}

impl Config {
    /// Get the base URL, defaulting to http://host:port if not set
    pub fn get_base_url(&self) -> String {
        self.base_url
            .clone()
            .unwrap_or_else(|| format!("http://{}:{}", self.host, self.port))
    }

    pub fn get_bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}
