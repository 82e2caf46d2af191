/// Longest input line the evaluator will look at. Anything past this
/// many bytes is dropped before tokenizing, matching the fixed input
/// buffer of the original machine. Truncation is silent by design.
pub const INPUT_BUF: usize = 128;

/// Longest word name. Longer tokens are clipped, so two names that
/// agree on their first `WORD_BUF - 1` characters are the same word.
pub const WORD_BUF: usize = 32;

fn is_forth_whitespace(c: char) -> bool {
    c == ' ' || c == '\t' || c == '\r' || c == '\n'
}

/// Splits one input line into whitespace-delimited tokens.
///
/// Every token is an opaque spelling at this stage. Whether it names a
/// dictionary entry or parses as an integer literal is decided later,
/// per token, by the dispatcher.
pub fn lex(line: &str) -> Vec<String> {
    let line = clip(line, INPUT_BUF);
    line.split(is_forth_whitespace)
        .filter(|s| !s.is_empty())
        .map(|s| clip(s, WORD_BUF - 1).to_string())
        .collect()
}

fn clip(s: &str, max_bytes: usize) -> &str {
    if s.len() <= max_bytes {
        return s;
    }
    let mut end = max_bytes;
    while !s.is_char_boundary(end) {
        end -= 1;
    }
    &s[..end]
}
