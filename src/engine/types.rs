use crate::hunk::Hunk;

/// Number of context lines used when none is given, as in `diff -u`.
pub const DEFAULT_CONTEXT_LINES: usize = 3;

/// A run of pairwise-equal lines shared by both sequences, used as the
/// split point when decomposing a mismatched region.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CommonRun {
    pub pos_a: isize,
    pub pos_b: isize,
    pub len: usize,
}

/// The result of diffing two line sequences: the hunks, in document order.
///
/// Construction performs the whole diff eagerly; use [`Diff::format_hunks`]
/// for the rendered output or [`Diff::hunks`] to inspect the changes.
#[derive(Debug, Clone)]
pub struct Diff<T> {
    pub(super) lines_a: Vec<T>,
    pub(super) lines_b: Vec<T>,
    pub(super) context_lines: usize,
    pub(super) hunks: Vec<Hunk<T>>,
}
