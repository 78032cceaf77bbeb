//! # lupe-backend
//!
//! HTTP backend for audio stem separation: accepts an uploaded audio file,
//! runs Spleeter in a sidecar container, and returns the four stems
//! (vocals, drums, bass, other) base64-encoded as JSON.

mod config;
mod error;
mod routes;
mod separator;
mod storage;
mod types;

pub use crate::{
    config::Config,
    error::{AppError, Result},
    routes::{app_router, AppState, ALLOWED_EXTENSIONS},
    separator::{verify_outputs, SpleeterSeparator, StemSeparator, STEM_NAMES},
    storage::FileStorage,
    types::{ErrorBody, HealthResponse, SeparateResponse, Stem},
};
