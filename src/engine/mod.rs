mod types;
pub use types::*;

use crate::hunk::Hunk;
use crate::range::Range;
use log::{debug, trace, warn};
use std::fmt;
use std::iter;

/// Diffs two line sequences and renders the result in unified-diff form.
///
/// The output holds hunk headers and bodies only; prepend
/// [`format_patch_header`] to get something `patch(1)` accepts.
///
/// # Examples
///
/// ```
/// use linediff::diff;
///
/// let old = vec!["aaa", "bbb", "ccc", "ddd"];
/// let new = vec!["aaa", "ccc", "ddd"];
/// assert_eq!(diff(&old, &new, 0), vec!["@@ -2 +1,0 @@", "-bbb"]);
/// ```
///
/// # Arguments
///
/// * `lines_a` - The original lines
/// * `lines_b` - The new lines
/// * `context_lines` - How many unchanged lines to show around each change
pub fn diff<T: Eq + Clone + fmt::Display>(
    lines_a: &[T],
    lines_b: &[T],
    context_lines: usize,
) -> Vec<String> {
    Diff::new(lines_a, lines_b, context_lines).format_hunks()
}

/// Splits both texts into lines and runs [`diff`] on them.
pub fn diff_lines(old: &str, new: &str, context_lines: usize) -> Vec<String> {
    let old_lines: Vec<&str> = old.lines().collect();
    let new_lines: Vec<&str> = new.lines().collect();
    diff(&old_lines, &new_lines, context_lines)
}

/// The `---`/`+++` file header expected by `patch(1)`. Without it `patch`
/// rejects the input as garbage.
pub fn format_patch_header(
    old_name: impl fmt::Display,
    new_name: impl fmt::Display,
) -> [String; 2] {
    [format!("--- {old_name}"), format!("+++ {new_name}")]
}

impl<T: Eq + Clone> Diff<T> {
    pub fn new(lines_a: &[T], lines_b: &[T], context_lines: usize) -> Self {
        let mut diff = Diff {
            lines_a: lines_a.to_vec(),
            lines_b: lines_b.to_vec(),
            context_lines,
            hunks: vec![],
        };
        diff.resolve(Range::create(lines_a), Range::create(lines_b));
        diff.fix_hunk_overlap();
        debug!(
            "diffed {} against {} lines: {} hunks",
            lines_a.len(),
            lines_b.len(),
            diff.hunks.len()
        );
        diff
    }

    pub fn hunks(&self) -> &[Hunk<T>] {
        &self.hunks
    }

    pub fn into_hunks(self) -> Vec<Hunk<T>> {
        self.hunks
    }

    pub fn context_lines(&self) -> usize {
        self.context_lines
    }

    /// True when both sequences are identical.
    pub fn is_empty(&self) -> bool {
        self.hunks.is_empty()
    }

    // Pending sub-problems are popped LIFO, so the region after a split is
    // pushed before the region ahead of it to keep hunks in document order.
    fn resolve(&mut self, a: Range, b: Range) {
        let mut pending = vec![(a, b)];
        while let Some((mut a, mut b)) = pending.pop() {
            self.skip_common_start(&mut a, &mut b);
            self.skip_common_end(&mut a, &mut b);

            if a.is_empty() && b.is_empty() {
                continue;
            }

            match self.find_common_run(a, b) {
                Some(run) => {
                    trace!("splitting {} / {} at common run {:?}", a, b, run);
                    let len = run.len as isize;
                    pending.push((
                        Range::new(run.pos_a + len, a.last),
                        Range::new(run.pos_b + len, b.last),
                    ));
                    pending.push((
                        Range::new(a.first, run.pos_a - 1),
                        Range::new(b.first, run.pos_b - 1),
                    ));
                }
                None => self.add_hunk(a, b),
            }
        }
    }

    fn skip_common_start(&self, a: &mut Range, b: &mut Range) {
        while !a.is_empty() && !b.is_empty() && self.line_a(a.first) == self.line_b(b.first) {
            a.skip_first();
            b.skip_first();
        }
    }

    fn skip_common_end(&self, a: &mut Range, b: &mut Range) {
        while !a.is_empty() && !b.is_empty() && self.line_a(a.last) == self.line_b(b.last) {
            a.skip_last();
            b.skip_last();
        }
    }

    /// Longest run of pairwise-equal lines inside `a` and `b`. On ties the
    /// first run found wins, scanning `a` ascending and then `b` ascending.
    fn find_common_run(&self, a: Range, b: Range) -> Option<CommonRun> {
        let mut best: Option<CommonRun> = None;

        for pos_a in a {
            for pos_b in b {
                if self.line_a(pos_a) != self.line_b(pos_b) {
                    continue;
                }

                let mut i = pos_a + 1;
                let mut j = pos_b + 1;
                while a.covers(i) && b.covers(j) && self.line_a(i) == self.line_b(j) {
                    i += 1;
                    j += 1;
                }

                let len = (i - pos_a) as usize;
                if best.map_or(true, |run| len > run.len) {
                    best = Some(CommonRun { pos_a, pos_b, len });
                }
            }
        }

        best
    }

    fn add_hunk(&mut self, a: Range, b: Range) {
        let hunk = Hunk {
            lines_removed: slice(&self.lines_a, a),
            lines_added: slice(&self.lines_b, b),
            removed_start_pos: anchor(&self.lines_a, a),
            added_start_pos: anchor(&self.lines_b, b),
            context_lines_before: self.context_before(a),
            context_lines_after: self.context_after(a),
        };
        self.hunks.push(hunk);
    }

    fn context_before(&self, a: Range) -> Vec<T> {
        if a.first <= 0 {
            return vec![];
        }
        let first = (a.first - self.context_span()).max(0);
        slice(&self.lines_a, Range::new(first, a.first - 1))
    }

    fn context_after(&self, a: Range) -> Vec<T> {
        let max_pos = self.lines_a.len() as isize - 1;
        if a.last >= max_pos {
            return vec![];
        }
        let last = (a.last + self.context_span()).min(max_pos);
        slice(&self.lines_a, Range::new(a.last + 1, last))
    }

    // Context never extends past the old sequence, so clamping to its length
    // keeps the signed arithmetic in range for any requested size.
    fn context_span(&self) -> isize {
        self.context_lines.min(self.lines_a.len()) as isize
    }

    /// Trims context so neighbouring hunks never claim the same old lines.
    fn fix_hunk_overlap(&mut self) {
        for i in 1..self.hunks.len() {
            let (done, rest) = self.hunks.split_at_mut(i);
            let prev = &mut done[i - 1];
            let current = &mut rest[0];
            let overlap = prev.removed_range().last - current.removed_range().first + 1;
            if overlap > 0 {
                remove_overlap(
                    &mut prev.context_lines_after,
                    &mut current.context_lines_before,
                    overlap,
                );
            }
        }
    }

    fn line_a(&self, pos: isize) -> &T {
        &self.lines_a[pos as usize]
    }

    fn line_b(&self, pos: isize) -> &T {
        &self.lines_b[pos as usize]
    }
}

struct Block {
    removed: Range,
    added: Range,
    lines: Vec<String>,
}

impl<T: Eq + Clone + fmt::Display> Diff<T> {
    /// Renders all hunks, merging neighbours whose ranges touch into a
    /// single block under one header.
    pub fn format_hunks(&self) -> Vec<String> {
        let mut blocks: Vec<Block> = vec![];

        for hunk in &self.hunks {
            let removed = hunk.removed_range();
            let added = hunk.added_range();

            if let Some(block) = blocks
                .last_mut()
                .filter(|block| block.removed.last + 1 >= removed.first)
            {
                debug!("merging hunk at {} into block {}", removed, block.removed);
                block.removed.last = removed.last;
                block.added.last = added.last;
                block.lines.extend(hunk.format_lines());
                continue;
            }

            blocks.push(Block {
                removed,
                added,
                lines: hunk.format_lines(),
            });
        }

        blocks
            .into_iter()
            .flat_map(|block| {
                iter::once(Hunk::<T>::format_range_header(block.removed, block.added))
                    .chain(block.lines)
            })
            .collect()
    }
}

fn slice<T: Clone>(lines: &[T], range: Range) -> Vec<T> {
    range
        .indices()
        .map(|indices| lines[indices].to_vec())
        .unwrap_or_default()
}

fn anchor<T>(lines: &[T], range: Range) -> Option<usize> {
    if lines.is_empty() {
        None
    } else {
        Some(range.first.max(0) as usize)
    }
}

// Each side holds at most `context_lines` lines and neighbouring hunks are
// separated by at least one common line, so the overlap never exceeds what
// the two lists can give up.
// Lines are taken alternately from the end of `prev_context` and the start
// of `current_context`.
fn remove_overlap<T>(prev_context: &mut Vec<T>, current_context: &mut Vec<T>, mut overlap: isize) {
    let (mut from_prev, mut from_current) = (0, 0);

    while overlap > 0 {
        if from_prev == prev_context.len() && from_current == current_context.len() {
            warn!("context exhausted with {overlap} overlapping lines left");
            break;
        }

        if from_prev < prev_context.len() {
            from_prev += 1;
            overlap -= 1;
        }

        if overlap > 0 && from_current < current_context.len() {
            from_current += 1;
            overlap -= 1;
        }
    }

    prev_context.truncate(prev_context.len() - from_prev);
    current_context.drain(..from_current);
}
