#[derive(Debug, thiserror::Error, Clone, PartialEq, Eq)]
pub enum DateTimeError {
    #[error("malformed datetime skeleton token {token:?}")]
    MalformedSkeleton { token: String },
}
