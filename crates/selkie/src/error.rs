pub type Result<T> = std::result::Result<T, Error>;

/// Precondition violations. These are programmer errors: operations that need
/// a live renderer or an enabled history log report them instead of silently
/// doing nothing. Empty or unknown-key inputs are not errors (see the
/// `bool`-returning gateway operations).
#[derive(Debug, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    #[error("widget is already rendered; destroy() it before rendering again")]
    AlreadyRendered,

    #[error("widget is not rendered; call render() first")]
    NotRendered,

    #[error("history is disabled for this widget")]
    HistoryDisabled,
}
