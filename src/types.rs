use serde::{Deserialize, Serialize};

/// One separated stem, base64-encoded for transport.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Stem {
    pub name: String,
    pub data: String,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct SeparateResponse {
    pub stems: Vec<Stem>,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub port: u16,
    pub host: String,
    pub frontend_url: String,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct ErrorBody {
    pub detail: String,
}
