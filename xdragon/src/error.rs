use thiserror::Error;

pub type Result<T, E = DragonError> = std::result::Result<T, E>;

#[derive(Debug, Error)]
pub enum DragonError {
    #[error("segment length must be finite and positive, got {0}")]
    InvalidSegmentLength(f64),

    #[error("depth {depth} exceeds the maximum of {max}")]
    DepthTooLarge { depth: u32, max: u32 },

    #[error("cycle duration must be finite and positive, got {0}ms")]
    InvalidDuration(f64),

    #[error("invalid setting '{key}': {reason}")]
    InvalidSetting { key: &'static str, reason: String },

    #[error("invalid color '{0}', expected #rrggbb or #rrggbbaa")]
    InvalidColor(String),

    #[error("drawing surface unavailable: {0}")]
    SurfaceUnavailable(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl DragonError {
    pub fn surface(msg: impl Into<String>) -> Self {
        Self::SurfaceUnavailable(msg.into())
    }
}
