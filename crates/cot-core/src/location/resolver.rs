//! Offsets are counted in Unicode scalar values, matching how the editor
//! addresses character ranges in its scripting interface.

/// Split text into lines, keeping each line's terminator.
///
/// Recognized terminators: `\r\n`, `\n`, `\r`, vertical tab, form feed,
/// `\x1c`..`\x1e`, NEL, LINE SEPARATOR and PARAGRAPH SEPARATOR. A trailing
/// terminator does not start an extra empty line.
pub fn split_lines_inclusive(text: &str) -> Vec<&str> {
    let mut lines = Vec::new();
    let mut start = 0;
    let mut chars = text.char_indices().peekable();

    while let Some((idx, c)) = chars.next() {
        let end = match c {
            '\r' => match chars.peek() {
                Some((_, '\n')) => {
                    chars.next();
                    idx + 2
                }
                _ => idx + 1,
            },
            c if is_line_terminator(c) => idx + c.len_utf8(),
            _ => continue,
        };
        lines.push(&text[start..end]);
        start = end;
    }

    if start < text.len() {
        lines.push(&text[start..]);
    }
    lines
}

fn is_line_terminator(c: char) -> bool {
    matches!(
        c,
        '\n' | '\r' | '\u{0b}' | '\u{0c}' | '\u{1c}' | '\u{1d}' | '\u{1e}' | '\u{85}'
            | '\u{2028}'
            | '\u{2029}'
    )
}

/// Turn a 1-based line (negative counts from the end) and a 0-based column
/// into an absolute character offset in `text`.
///
/// Line 0 and a missing line both mean line 1. Lines past the end clamp to
/// the last line. The column clamps to the target line's length, terminator
/// included.
pub fn resolve_offset(text: &str, line: Option<i64>, column: Option<i64>) -> usize {
    let lines = split_lines_inclusive(text);
    if lines.is_empty() {
        return 0;
    }

    let total = lines.len() as i64;
    let line = match line.unwrap_or(1) {
        0 => 1,
        n if n < 0 => (total + n + 1).max(1),
        n => n.min(total),
    };
    let index = (line - 1) as usize;

    let line_start: usize = lines[..index].iter().map(|l| l.chars().count()).sum();

    let column = column.map_or(0, |c| {
        let max = lines[index].chars().count();
        usize::try_from(c.max(0)).map_or(max, |c| c.min(max))
    });

    line_start + column
}
