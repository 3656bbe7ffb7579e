use thiserror::Error;

pub type HookResult<T> = Result<T, HookError>;

#[derive(Debug, Error)]
pub enum HookError {
    #[error("hook name must not be empty")]
    EmptyHookName,

    #[error("hook `{0}` is already registered")]
    DuplicateHook(String),

    #[error("no hook registered under `{0}`")]
    UnknownHook(String),

    #[error("element `{0}` carries no hook marker attribute")]
    MissingHookMarker(String),

    #[error("element `{0}` is already bound")]
    AlreadyBound(String),

    #[error("element `{0}` is not bound")]
    NotBound(String),

    #[error("clipboard write failed: {0}")]
    Clipboard(String),
}
