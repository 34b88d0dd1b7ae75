/// Recognizes identifiers that spell an integer, e.g. `5`, `-12` or `1_000`.
///
/// Surrounding whitespace and a leading sign are allowed, as are single
/// underscores between digits.  There is no upper bound on the magnitude.
pub fn is_integer_literal(name: &str) -> bool {
    let trimmed = name.trim();
    let digits = trimmed
        .strip_prefix(|c: char| c == '+' || c == '-')
        .unwrap_or(trimmed);

    if digits.is_empty() || digits.starts_with('_') || digits.ends_with('_') {
        return false;
    }

    let mut prev_underscore = false;
    for c in digits.chars() {
        match c {
            '0'..='9' => prev_underscore = false,
            '_' if !prev_underscore => prev_underscore = true,
            _ => return false,
        }
    }
    true
}
