//! Server settings read from the environment at startup.
//!
//! | Variable         | Default   |
//! |------------------|-----------|
//! | `BACKEND_HOST`   | `0.0.0.0` |
//! | `BACKEND_PORT`   | `3001`    |
//! | `BACKEND_WORKERS`| `1`       |
//! | `SIMON_RNG_SEED` | unset     |

use std::env;

use crate::error::AppError;

pub const DEFAULT_HOST: &str = "0.0.0.0";
pub const DEFAULT_PORT: u16 = 3001;
pub const DEFAULT_WORKERS: usize = 1;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    /// Actix worker threads. They share one in-process game state.
    pub workers: usize,
    /// Fixed seed for sequence generation; `None` draws from OS entropy.
    pub rng_seed: Option<u64>,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: DEFAULT_HOST.to_string(),
            port: DEFAULT_PORT,
            workers: DEFAULT_WORKERS,
            rng_seed: None,
        }
    }
}

impl ServerConfig {
    pub fn from_env() -> Result<Self, AppError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build from any key lookup; empty values count as unset.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, AppError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| {
            lookup(key)
                .map(|v| v.trim().to_string())
                .filter(|v| !v.is_empty())
        };

        let host = get("BACKEND_HOST").unwrap_or_else(|| DEFAULT_HOST.to_string());

        let port = match get("BACKEND_PORT") {
            Some(raw) => raw
                .parse::<u16>()
                .map_err(|_| AppError::config(format!("BACKEND_PORT must be a valid port number, got '{raw}'")))?,
            None => DEFAULT_PORT,
        };

        let workers = match get("BACKEND_WORKERS") {
            Some(raw) => match raw.parse::<usize>() {
                Ok(n) if n > 0 => n,
                _ => {
                    return Err(AppError::config(format!(
                        "BACKEND_WORKERS must be a positive integer, got '{raw}'"
                    )))
                }
            },
            None => DEFAULT_WORKERS,
        };

        let rng_seed = get("SIMON_RNG_SEED")
            .map(|raw| {
                raw.parse::<u64>().map_err(|_| {
                    AppError::config(format!("SIMON_RNG_SEED must be an unsigned integer, got '{raw}'"))
                })
            })
            .transpose()?;

        Ok(Self {
            host,
            port,
            workers,
            rng_seed,
        })
    }
}
