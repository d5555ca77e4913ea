use thiserror::Error;

#[derive(Debug, Error)]
pub enum ModelError {
    #[error("invalid hierarchy level {value} (expected 1-4)")]
    InvalidLevel { value: u8 },
}
