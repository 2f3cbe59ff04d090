use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

const ELLIPSIS: char = '…';

pub fn wrap_text(s: &str, width: usize) -> String {
    if width == 0 {
        return String::new();
    }

    let mut result = String::with_capacity(s.len() + s.len() / width);
    let mut current_line_width = 0;

    for c in s.chars() {
        let char_width = c.width().unwrap_or(0);

        if current_line_width + char_width > width {
            result.push('\n');
            current_line_width = char_width;
        } else {
            current_line_width += char_width;
        }

        result.push(c);
    }

    result
}

/// Cuts `s` down to at most `width` display columns, marking the cut with an ellipsis.
pub fn truncate_to_width(s: &str, width: usize) -> String {
    if width == 0 {
        return String::new();
    }
    if s.width() <= width {
        return s.to_string();
    }

    let budget = width - 1; // room for the ellipsis
    let mut result = String::new();
    let mut used = 0;
    for c in s.chars() {
        let char_width = c.width().unwrap_or(0);
        if used + char_width > budget {
            break;
        }
        used += char_width;
        result.push(c);
    }
    result.push(ELLIPSIS);
    result
}

/// Wraps `s` into at most `max_lines` lines of `width` columns.
/// The last kept line is ellipsized when text had to be dropped.
pub fn fit_lines(s: &str, width: usize, max_lines: usize) -> Vec<String> {
    if width == 0 || max_lines == 0 {
        return vec![];
    }

    let wrapped = wrap_text(s, width);
    let lines: Vec<&str> = wrapped.lines().collect();
    if lines.len() <= max_lines {
        return lines.into_iter().map(String::from).collect();
    }

    let mut kept: Vec<String> = lines[..max_lines - 1]
        .iter()
        .map(|line| line.to_string())
        .collect();
    let rest = lines[max_lines - 1..].concat();
    kept.push(truncate_to_width(&rest, width));
    kept
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn test_wrap_text_no_wrap_alnum() {
        let actual = wrap_text("hello, world!", 13);
        let expected = "hello, world!";
        assert_eq!(actual, expected);
    }

    #[test]
    fn test_wrap_text_wrap_alnum() {
        let actual = wrap_text("hello, world!", 4);
        let expected = "hell\no, w\norld\n!";
        assert_eq!(actual, expected);
    }

    #[test]
    fn test_wrap_text_wrap_double_width() {
        let actual = wrap_text("こんにちは、世界！", 7);
        let expected = "こんに\nちは、\n世界！";
        assert_eq!(actual, expected);
    }

    #[test]
    fn test_wrap_text_zero_width() {
        assert_eq!(wrap_text("hello, world!", 0), "");
    }

    #[test]
    fn test_truncate_to_width_fits() {
        assert_eq!(truncate_to_width("Morning Break", 13), "Morning Break");
    }

    #[test]
    fn test_truncate_to_width_cuts() {
        assert_eq!(truncate_to_width("Morning Break", 8), "Morning…");
    }

    #[test]
    fn test_truncate_to_width_double_width() {
        // "こん" is 4 columns, the ellipsis takes the 5th
        assert_eq!(truncate_to_width("こんにちは", 5), "こん…");
    }

    #[test]
    fn test_truncate_to_width_zero() {
        assert_eq!(truncate_to_width("anything", 0), "");
    }

    #[test]
    fn test_fit_lines_within_limit() {
        assert_eq!(fit_lines("abcdef", 3, 2), vec!["abc", "def"]);
    }

    #[test]
    fn test_fit_lines_overflow() {
        assert_eq!(fit_lines("abcdefghij", 3, 2), vec!["abc", "de…"]);
    }

    #[test]
    fn test_fit_lines_degenerate() {
        assert!(fit_lines("abc", 0, 2).is_empty());
        assert!(fit_lines("abc", 3, 0).is_empty());
    }
}
