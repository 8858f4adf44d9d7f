use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum EmitError {
    #[error("token `{0}` is declared more than once")]
    DuplicateName(String),
    #[error("tokens `{first}` and `{second}` both map to enum variant `{variant}`")]
    VariantCollision {
        first: String,
        second: String,
        variant: String,
    },
}
