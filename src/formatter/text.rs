/// A contiguous, 1-based, inclusive slice of the lines of a text
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LineSelection {
    pub content: String,
    pub start_line: u32,
    pub end_line: u32,
    /// Line count of the full text, not of the selection
    pub total_lines: u32,
}

/// Selects lines `[start_line, end_line]` of `content`
///
/// Lines are split on `\n` only, so a trailing newline yields a final empty
/// line. Bounds are normalized in this order:
/// - an end of 0 (or none) or beyond the last line becomes the last line
/// - a start below 1 becomes 1
/// - an end before the start becomes the start
///
/// A start beyond the last line selects nothing and returns empty content.
pub fn select_lines(
    content: &str,
    start_line: Option<u32>,
    end_line: Option<u32>,
) -> LineSelection {
    let lines: Vec<&str> = content.split('\n').collect();
    let total_lines = lines.len() as u32;

    let mut end_line = match end_line {
        Some(end) if end != 0 && end <= total_lines => end,
        _ => total_lines,
    };
    let start_line = start_line.unwrap_or(1).max(1);
    if end_line < start_line {
        end_line = start_line;
    }

    let from = (start_line - 1) as usize;
    let to = (end_line as usize).min(lines.len());
    let content = if from < to {
        lines[from..to].join("\n")
    } else {
        String::new()
    };

    LineSelection {
        content,
        start_line,
        end_line,
        total_lines,
    }
}

/// Cuts `text` to at most `max_chars` characters
///
/// Counts Unicode scalar values so the cut never lands inside a code point.
/// Text that is already short enough is returned unchanged.
pub fn truncate_chars(text: &str, max_chars: usize) -> String {
    match text.char_indices().nth(max_chars) {
        Some((byte_index, _)) => text[..byte_index].to_string(),
        None => text.to_string(),
    }
}
