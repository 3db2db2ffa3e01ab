#[derive(Debug, thiserror::Error, Clone, PartialEq, Eq)]
pub enum NumberError {
    #[error("malformed number skeleton token {token:?} at position {pos}")]
    MalformedSkeleton { token: String, pos: usize },
    #[error("unknown currency code {code:?}")]
    UnknownCurrency { code: String },
    #[error("unknown unit id {unit:?}")]
    UnknownUnit { unit: String },
}
