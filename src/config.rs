use std::{
    env,
    path::{Path, PathBuf},
};

use crate::error::{AppError, Result};

pub const DEFAULT_PORT: u16 = 8000;
pub const DEFAULT_HOST: &str = "0.0.0.0";
pub const DEFAULT_FRONTEND_URL: &str = "http://localhost:3000";
pub const DEFAULT_SPLEETER_CONTAINER: &str = "lupe-backend-spleeter-1";

/// Service configuration resolved from the environment at startup.
#[derive(Clone, Debug)]
pub struct Config {
    pub host: String,
    pub port: u16,
    /// Sole allowed CORS origin.
    pub frontend_url: String,
    /// Name of the running container that provides the `spleeter` CLI.
    pub spleeter_container: String,
    pub uploads_dir: PathBuf,
    pub temp_dir: PathBuf,
}

impl Config {
    /// Reads `PORT`, `HOST`, `FRONTEND_URL`, `SPLEETER_CONTAINER` and
    /// `DATA_DIR`, falling back to defaults for anything unset. A `PORT`
    /// that is present but not a valid integer is a startup error.
    pub fn from_env() -> Result<Self> {
        let port = match env::var("PORT") {
            Ok(raw) => raw
                .parse::<u16>()
                .map_err(|_| AppError::InvalidPort(raw.clone()))?,
            Err(_) => DEFAULT_PORT,
        };

        let host = env::var("HOST").unwrap_or_else(|_| DEFAULT_HOST.to_string());
        let frontend_url =
            env::var("FRONTEND_URL").unwrap_or_else(|_| DEFAULT_FRONTEND_URL.to_string());
        let spleeter_container = env::var("SPLEETER_CONTAINER")
            .unwrap_or_else(|_| DEFAULT_SPLEETER_CONTAINER.to_string());

        let data_dir = env::var("DATA_DIR")
            .map(PathBuf::from)
            .unwrap_or_else(|_| Path::new(".").to_path_buf());

        Ok(Self {
            host,
            port,
            frontend_url,
            spleeter_container,
            uploads_dir: data_dir.join("uploads"),
            temp_dir: data_dir.join("temp"),
        })
    }
}
