/// Number of `\n`-separated lines in `text`. An empty string counts as one line.
pub fn line_count(text: &str) -> usize {
    text.matches('\n').count() + 1
}

/// Everything before the first newline
pub fn first_line(text: &str) -> &str {
    text.split('\n').next().unwrap_or(text)
}

/// Keep at most `max_lines` lines, noting how many were dropped.
///
/// `None` means no limit. The note is appended on its own line as
/// `... (N more lines)`.
pub fn truncate_lines(text: &str, max_lines: Option<usize>) -> String {
    let Some(max_lines) = max_lines else {
        return text.to_string();
    };
    let total = line_count(text);
    if total <= max_lines {
        return text.to_string();
    }

    let kept = text
        .split('\n')
        .take(max_lines)
        .collect::<Vec<_>>()
        .join("\n");
    format!("{}\n... ({} more lines)", kept, total - max_lines)
}
