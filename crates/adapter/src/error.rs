use crate::source::AccessError;
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum TranslateError {
    #[error("{0} is not in set of implemented environments")]
    UnsupportedEnv(String),
    #[error(transparent)]
    Access(#[from] AccessError),
}
