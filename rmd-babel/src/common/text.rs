//! Text joining and line-marker helpers shared by the flat-text formats.

/// Join two blocks, inserting a newline only if neither side supplies one.
pub fn join_with_blank_line(a: &str, b: &str) -> String {
    if a.ends_with('\n') || b.starts_with('\n') {
        format!("{a}{b}")
    } else {
        format!("{a}\n{b}")
    }
}

/// Join blocks so each pair is separated by exactly one empty line.
///
/// Trailing newlines of the left side and leading newlines of the right
/// side are dropped at each junction, forcing separate markdown paragraphs
/// without accumulating extra blank lines. The outer edges are untouched.
pub fn join_blocks_with_paragraph_break<S: AsRef<str>>(blocks: &[S]) -> String {
    let mut iter = blocks.iter();
    let Some(first) = iter.next() else {
        return String::new();
    };

    let mut result = first.as_ref().to_string();
    for block in iter {
        let kept = result.trim_end_matches('\n').len();
        result.truncate(kept);
        result.push_str("\n\n");
        result.push_str(block.as_ref().trim_start_matches('\n'));
    }
    result
}

/// Prefix every line (empty ones included) with `marker`.
pub fn prefix_lines(text: &str, marker: &str) -> String {
    text.split('\n')
        .map(|line| format!("{marker}{line}"))
        .collect::<Vec<_>>()
        .join("\n")
}

/// Strip `marker` from the start of `line` if present.
pub fn unprefix_line<'a>(line: &'a str, marker: &str) -> &'a str {
    line.strip_prefix(marker).unwrap_or(line)
}

pub fn unprefix_lines(text: &str, marker: &str) -> String {
    text.split('\n')
        .map(|line| unprefix_line(line, marker))
        .collect::<Vec<_>>()
        .join("\n")
}
