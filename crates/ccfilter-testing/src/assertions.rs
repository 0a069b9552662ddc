//! Assertions over ccfilter output.

use anyhow::Result;

/// Assert that `text` carries no ANSI escape sequences.
pub fn assert_no_ansi(text: &str) -> Result<()> {
    if let Some(pos) = text.find('\x1b') {
        anyhow::bail!("Unexpected escape sequence at byte {} in {:?}", pos, text);
    }
    Ok(())
}

/// Assert that every needle occurs in `text`, in the given order.
pub fn assert_in_order(text: &str, needles: &[&str]) -> Result<()> {
    let mut rest = text;
    for needle in needles {
        match rest.find(needle) {
            Some(pos) => rest = &rest[pos + needle.len()..],
            None => anyhow::bail!("Expected {:?} (in order) in output:\n{}", needle, text),
        }
    }
    Ok(())
}

/// Assert the number of `Warning:` lines on the diagnostic stream.
pub fn assert_warning_count(stderr: &str, expected: usize) -> Result<()> {
    let warnings = stderr
        .lines()
        .filter(|line| line.starts_with("Warning: "))
        .count();

    if warnings != expected {
        anyhow::bail!(
            "Expected {} warnings, got {}:\n{}",
            expected,
            warnings,
            stderr
        );
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_assert_in_order() {
        assert!(assert_in_order("a b c", &["a", "c"]).is_ok());
        assert!(assert_in_order("a b c", &["c", "a"]).is_err());
    }

    #[test]
    fn test_assert_no_ansi() {
        assert!(assert_no_ansi("plain").is_ok());
        assert!(assert_no_ansi("\x1b[36m→\x1b[0m").is_err());
    }

    #[test]
    fn test_assert_warning_count() {
        let stderr = "Warning: failed to parse JSON: x\nsomething else\n";
        assert!(assert_warning_count(stderr, 1).is_ok());
        assert!(assert_warning_count(stderr, 2).is_err());
    }
}
