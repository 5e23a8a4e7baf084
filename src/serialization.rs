use crate::engine::{format_patch_header, Diff};
use crate::hunk::Hunk;
use std::fmt::Display;

/// Renders a value as patch text, one line per `\n`.
pub trait ToPatch {
    fn to_patch(&self, old_name: Option<&str>, new_name: Option<&str>) -> String;
}

impl<T: Display> ToPatch for Hunk<T> {
    fn to_patch(&self, _old_name: Option<&str>, _new_name: Option<&str>) -> String {
        let mut patch = self.format().join("\n");
        patch.push('\n');
        patch
    }
}

impl<T: Eq + Clone + Display> ToPatch for Diff<T> {
    fn to_patch(&self, old_name: Option<&str>, new_name: Option<&str>) -> String {
        if self.is_empty() {
            return String::new();
        }

        let header = format_patch_header(old_name.unwrap_or("old"), new_name.unwrap_or("new"));
        header
            .into_iter()
            .chain(self.format_hunks())
            .map(|line| line + "\n")
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hunk_to_patch() {
        let diff = Diff::new(&["aaa", "bbb"], &["aaa", "BBB"], 1);
        assert_eq!(
            diff.hunks()[0].to_patch(None, None),
            "@@ -1,2 +1,2 @@\n aaa\n-bbb\n+BBB\n"
        );
    }

    #[test]
    fn test_diff_to_patch_default_names() {
        let diff = Diff::new(&["aaa"], &[], 3);
        assert_eq!(
            diff.to_patch(None, None),
            "--- old\n+++ new\n@@ -1 +1,0 @@\n-aaa\n"
        );
    }

    #[test]
    fn test_diff_to_patch_names() {
        let diff = Diff::new(&[], &["aaa"], 3);
        assert_eq!(
            diff.to_patch(Some("a.txt"), Some("b.txt")),
            "--- a.txt\n+++ b.txt\n@@ -1,0 +1 @@\n+aaa\n"
        );
    }

    #[test]
    fn test_identical_is_empty_patch() {
        let diff = Diff::new(&["aaa"], &["aaa"], 3);
        assert_eq!(diff.to_patch(Some("a"), Some("b")), "");
    }
}
