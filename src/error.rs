/// Errors returned by the checked operations on an [`OrderedTree`][crate::OrderedTree].
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
#[non_exhaustive]
pub enum TreeError {
    /// An absent value was passed to `try_insert` or `try_contains`. The tree is left unchanged.
    #[error("cannot insert or search for an absent value")]
    InvalidArgument,
}
