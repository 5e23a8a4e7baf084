mod types;
pub use types::*;

use crate::range::Range;
use std::fmt;

impl<T> Hunk<T> {
    /// Range of the old sequence covered by this hunk, context included.
    pub fn removed_range(&self) -> Range {
        span(
            self.removed_start_pos,
            self.lines_removed.len(),
            self.context_lines_before.len(),
            self.context_lines_after.len(),
        )
    }

    /// Range of the new sequence covered by this hunk, context included.
    pub fn added_range(&self) -> Range {
        span(
            self.added_start_pos,
            self.lines_added.len(),
            self.context_lines_before.len(),
            self.context_lines_after.len(),
        )
    }

    /// Header in `diff -u` form, e.g. `@@ -3,4 +3,2 @@`.
    pub fn format_header(&self) -> String {
        Self::format_range_header(self.removed_range(), self.added_range())
    }

    /// Header for an arbitrary pair of ranges, as used for merged hunks.
    ///
    /// ```
    /// use linediff::{Hunk, Range};
    ///
    /// let header = Hunk::<String>::format_range_header(Range::new(1, 1), Range::default());
    /// assert_eq!(header, "@@ -2 +1,0 @@");
    /// ```
    pub fn format_range_header(removed: Range, added: Range) -> String {
        format!("@@ -{} +{} @@", header_part(removed), header_part(added))
    }
}

impl<T: fmt::Display> Hunk<T> {
    /// Body lines of the hunk, without the header.
    pub fn format_lines(&self) -> Vec<String> {
        let mut result = Vec::with_capacity(
            self.context_lines_before.len()
                + self.lines_removed.len()
                + self.lines_added.len()
                + self.context_lines_after.len(),
        );
        prefix_lines(&mut result, ' ', &self.context_lines_before);
        prefix_lines(&mut result, '-', &self.lines_removed);
        prefix_lines(&mut result, '+', &self.lines_added);
        prefix_lines(&mut result, ' ', &self.context_lines_after);
        result
    }

    pub fn format(&self) -> Vec<String> {
        let mut result = vec![self.format_header()];
        result.extend(self.format_lines());
        result
    }
}

impl<T: fmt::Display> fmt::Display for Hunk<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.format().join("\n"))
    }
}

fn span(start: Option<usize>, changed: usize, before: usize, after: usize) -> Range {
    let start = start.map_or(-1, |pos| pos as isize);
    Range::new(
        start - before as isize,
        start + changed as isize - 1 + after as isize,
    )
}

// An empty range is always anchored as `1,0`; a count of 1 is implied.
fn header_part(range: Range) -> String {
    if range.is_empty() {
        return "1,0".to_string();
    }
    let pos = range.first + 1;
    if range.size() > 1 {
        format!("{},{}", pos, range.size())
    } else {
        pos.to_string()
    }
}

fn prefix_lines<T: fmt::Display>(out: &mut Vec<String>, prefix: char, lines: &[T]) {
    out.extend(lines.iter().map(|line| format!("{prefix}{line}")));
}

#[cfg(test)]
mod tests {
    use super::*;

    fn strings(lines: &[&str]) -> Vec<String> {
        lines.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_pure_deletion_header() {
        let hunk = Hunk {
            lines_removed: strings(&["bbb"]),
            removed_start_pos: Some(1),
            added_start_pos: Some(1),
            ..Hunk::default()
        };
        assert_eq!(hunk.removed_range(), Range::new(1, 1));
        assert!(hunk.added_range().is_empty());
        assert_eq!(hunk.format(), vec!["@@ -2 +1,0 @@", "-bbb"]);
    }

    #[test]
    fn test_empty_side_has_no_position() {
        let hunk = Hunk {
            lines_added: strings(&["aaa"]),
            removed_start_pos: None,
            added_start_pos: Some(0),
            ..Hunk::default()
        };
        assert_eq!(hunk.removed_range(), Range::new(-1, -2));
        assert_eq!(hunk.format_header(), "@@ -1,0 +1 @@");
    }

    #[test]
    fn test_ranges_include_context() {
        let hunk = Hunk {
            lines_removed: strings(&["ccc"]),
            lines_added: strings(&["xxx", "yyy"]),
            removed_start_pos: Some(2),
            added_start_pos: Some(2),
            context_lines_before: strings(&["aaa", "bbb"]),
            context_lines_after: strings(&["ddd"]),
        };
        assert_eq!(hunk.removed_range(), Range::new(0, 3));
        assert_eq!(hunk.added_range(), Range::new(0, 4));
        assert_eq!(hunk.format_header(), "@@ -1,4 +1,5 @@");
    }

    #[test]
    fn test_format_lines_order() {
        let hunk = Hunk {
            lines_removed: strings(&["old"]),
            lines_added: strings(&["new"]),
            removed_start_pos: Some(1),
            added_start_pos: Some(1),
            context_lines_before: strings(&["before"]),
            context_lines_after: strings(&["after"]),
        };
        assert_eq!(
            hunk.format_lines(),
            vec![" before", "-old", "+new", " after"]
        );
        assert_eq!(
            hunk.to_string(),
            "@@ -1,3 +1,3 @@\n before\n-old\n+new\n after"
        );
    }

    #[test]
    fn test_range_header_counts() {
        assert_eq!(
            Hunk::<String>::format_range_header(Range::new(0, 0), Range::new(4, 9)),
            "@@ -1 +5,6 @@"
        );
        assert_eq!(
            Hunk::<String>::format_range_header(Range::new(3, 2), Range::new(0, -1)),
            "@@ -1,0 +1,0 @@"
        );
    }
}
