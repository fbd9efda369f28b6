use unicode_width::UnicodeWidthStr;

/// Greedy word wrap on display width.
///
/// Words are packed onto a line while `line + 1 + word` fits in `limit`.
/// A single word wider than `limit` gets a line of its own, unbroken.
pub fn wrap_words(text: &str, limit: usize) -> Vec<String> {
    let mut lines = Vec::new();
    let mut line = String::new();

    for word in text.split_whitespace() {
        if line.is_empty() {
            line.push_str(word);
        } else if line.width() + word.width() + 1 > limit {
            lines.push(std::mem::take(&mut line));
            line.push_str(word);
        } else {
            line.push(' ');
            line.push_str(word);
        }
    }

    if !line.is_empty() {
        lines.push(line);
    }

    lines
}
