/// Characters of a message shown on a gallery card
pub const PREVIEW_CHARS: usize = 150;

/// Marker appended to a cut preview
pub const ELLIPSIS: &str = "...";

/// Card preview: the message itself when it fits, otherwise its first
/// [`PREVIEW_CHARS`] characters followed by [`ELLIPSIS`].
pub fn preview(message: &str) -> String {
    match message.char_indices().nth(PREVIEW_CHARS) {
        Some((cut, _)) => format!("{}{}", &message[..cut], ELLIPSIS),
        None => message.to_string(),
    }
}

pub fn is_truncated(message: &str) -> bool {
    message.chars().nth(PREVIEW_CHARS).is_some()
}

/// Pad or cut `text` to exactly `width` characters
pub fn fit(text: &str, width: usize) -> String {
    let count = text.chars().count();
    if count > width {
        text.chars().take(width).collect()
    } else {
        format!("{}{}", text, " ".repeat(width - count))
    }
}

/// Greedy word wrap on character counts. Explicit newlines are kept and
/// words longer than `width` are split.
pub fn wrap(text: &str, width: usize) -> Vec<String> {
    let width = width.max(1);
    let mut lines = Vec::new();

    for paragraph in text.split('\n') {
        let mut line = String::new();
        let mut line_len = 0;

        for word in paragraph.split_whitespace() {
            let mut word: Vec<char> = word.chars().collect();

            while word.len() > width {
                if line_len > 0 {
                    lines.push(std::mem::take(&mut line));
                    line_len = 0;
                }
                let rest = word.split_off(width);
                lines.push(word.into_iter().collect());
                word = rest;
            }

            let needed = if line_len == 0 { word.len() } else { line_len + 1 + word.len() };
            if needed > width && line_len > 0 {
                lines.push(std::mem::take(&mut line));
                line_len = 0;
            }
            if line_len > 0 {
                line.push(' ');
                line_len += 1;
            }
            line.extend(word.iter());
            line_len += word.len();
        }

        lines.push(line);
    }

    lines
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_preview_keeps_short_message() {
        assert_eq!(preview("short"), "short");
        assert!(!is_truncated("short"));
    }

    #[test]
    fn test_preview_boundary_is_exactly_150() {
        let exact = "a".repeat(150);
        assert_eq!(preview(&exact), exact);
        assert!(!is_truncated(&exact));

        let over = "b".repeat(151);
        assert_eq!(preview(&over), format!("{}...", "b".repeat(150)));
        assert!(is_truncated(&over));
    }

    #[test]
    fn test_preview_counts_characters_not_bytes() {
        let message = "é".repeat(200);
        let cut = preview(&message);
        assert_eq!(cut.chars().count(), 153);
        assert!(cut.ends_with("é..."));
    }

    #[test]
    fn test_fit_pads_and_cuts() {
        assert_eq!(fit("ab", 4), "ab  ");
        assert_eq!(fit("abcdef", 4), "abcd");
    }

    #[test]
    fn test_wrap_breaks_on_words() {
        assert_eq!(
            wrap("the quick brown fox", 10),
            vec!["the quick", "brown fox"]
        );
    }

    #[test]
    fn test_wrap_keeps_newlines_and_splits_long_words() {
        assert_eq!(wrap("a\n\nb", 5), vec!["a", "", "b"]);
        assert_eq!(wrap("abcdefgh", 3), vec!["abc", "def", "gh"]);
    }
}
