/// Failures binding to the browser's global objects.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum WebError {
    #[error("no global `window` object is available")]
    NoWindow,
    #[error("the global `window` has no `document`")]
    NoDocument,
}
