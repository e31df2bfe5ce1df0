//! Character-based slicing helpers. All lengths here count `char`s, never bytes.

/// Consecutive windows of at most `window_chars` characters. Text shorter
/// than one window (including empty text) yields exactly one window.
pub fn split_into_windows(text: &str, window_chars: usize) -> Vec<&str> {
    let window_chars = window_chars.max(1);
    let mut windows = Vec::new();
    let mut start = 0;
    let mut chars_in_window = 0;

    for (offset, _) in text.char_indices() {
        if chars_in_window == window_chars {
            windows.push(&text[start..offset]);
            start = offset;
            chars_in_window = 0;
        }
        chars_in_window += 1;
    }
    windows.push(&text[start..]);
    windows
}

/// The first `max_chars` characters of `text`.
pub fn leading_chars(text: &str, max_chars: usize) -> &str {
    match text.char_indices().nth(max_chars) {
        Some((offset, _)) => &text[..offset],
        None => text,
    }
}

/// Collapses every whitespace run to a single space and trims the ends.
pub fn collapse_whitespace(text: &str) -> String {
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_short_text_is_one_window() {
        assert_eq!(split_into_windows("abc", 2500), vec!["abc"]);
        assert_eq!(split_into_windows("", 2500), vec![""]);
    }

    #[test]
    fn test_exact_multiple() {
        assert_eq!(split_into_windows("abcdef", 3), vec!["abc", "def"]);
    }

    #[test]
    fn test_last_window_shorter() {
        assert_eq!(split_into_windows("abcdefg", 3), vec!["abc", "def", "g"]);
    }

    #[test]
    fn test_windows_count_chars_not_bytes() {
        let windows = split_into_windows("ééé€€", 2);
        assert_eq!(windows, vec!["éé", "é€", "€"]);
    }

    #[test]
    fn test_windows_span_newlines() {
        let text = "a\nb\nc";
        assert_eq!(split_into_windows(text, 2), vec!["a\n", "b\n", "c"]);
    }

    #[test]
    fn test_leading_chars() {
        assert_eq!(leading_chars("hello", 3), "hel");
        assert_eq!(leading_chars("hi", 3), "hi");
        assert_eq!(leading_chars("ñandú", 2), "ña");
    }

    #[test]
    fn test_collapse_whitespace() {
        assert_eq!(collapse_whitespace("  a \n\n b\tc  "), "a b c");
    }
}
