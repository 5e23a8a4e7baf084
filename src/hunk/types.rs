/// One contiguous change: a run of lines removed from the old sequence and
/// the run of lines added in its place.
///
/// The start positions do not account for context; `None` means that side
/// has no lines at all to anchor to. Both context lists are taken from the
/// old sequence and hold at most `context_lines` elements each.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Hunk<T> {
    pub lines_removed: Vec<T>,
    pub lines_added: Vec<T>,
    pub removed_start_pos: Option<usize>,
    pub added_start_pos: Option<usize>,
    pub context_lines_before: Vec<T>,
    pub context_lines_after: Vec<T>,
}

impl<T> Default for Hunk<T> {
    fn default() -> Self {
        Hunk {
            lines_removed: vec![],
            lines_added: vec![],
            removed_start_pos: Some(0),
            added_start_pos: Some(0),
            context_lines_before: vec![],
            context_lines_after: vec![],
        }
    }
}
