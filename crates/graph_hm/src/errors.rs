use thiserror::Error;

#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum Errors {
    #[error("Undefined symbol {0}")]
    UndefinedSymbol(String),
    #[error("Type mismatch: {0} != {1}")]
    TypeMismatch(String, String),
}
