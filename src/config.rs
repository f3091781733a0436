//! Server configuration: command-line flags with environment fallbacks.

use clap::Parser;
use std::path::PathBuf;
use tracing::info;

use crate::core::pools::{PhrasePools, PoolError};

#[derive(Debug, Clone, Parser)]
#[command(name = "poem-server", version, about = "Serve the mood-and-snack poem endpoint")]
pub struct ServerConfig {
    /// Address to bind.
    #[arg(long, env = "POEM_HOST", default_value = "127.0.0.1")]
    pub host: String,

    /// Port to bind.
    #[arg(long, env = "POEM_PORT", default_value_t = 8888)]
    pub port: u16,

    /// Extra phrase pools (RON), appended to the built-in ones.
    #[arg(long, env = "POEM_POOLS")]
    pub pools: Option<PathBuf>,

    /// Seed for reproducible output.
    #[arg(long, env = "POEM_SEED")]
    pub seed: Option<u64>,

    /// Log filter used when RUST_LOG is unset.
    #[arg(long, env = "POEM_LOG", default_value = "info")]
    pub log_level: String,
}

impl ServerConfig {
    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    /// Built-in pools, plus the extra file if one is configured.
    pub fn load_pools(&self) -> Result<PhrasePools, PoolError> {
        let mut pools = PhrasePools::builtin()?;
        if let Some(ref path) = self.pools {
            let extra = PhrasePools::load_from_ron_unchecked(path)?;
            info!(path = %path.display(), "merging extra phrase pools");
            pools.merge(extra);
            pools.validate()?;
        }
        Ok(pools)
    }
}
