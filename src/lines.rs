//! Normalizes command output into non-empty trimmed lines.

/// Split text into its non-empty lines, trimmed, in original order.
///
/// Handles both `\n` and `\r\n` line endings. Lines consisting only of
/// whitespace are dropped.
pub fn split_lines(text: &str) -> Vec<&str> {
    text.lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .collect()
}
