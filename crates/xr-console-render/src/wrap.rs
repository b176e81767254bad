//! Greedy word wrapping for fixed-width text
//!
//! Breaks happen only at whitespace, so a word is never split. A word wider
//! than the budget gets a line of its own and overflows it. Embedded
//! newlines force a hard break, and each side is wrapped independently.

/// Wrap `text` into lines of at most `width` characters
///
/// Trailing whitespace is trimmed from each line; leading indentation of a
/// physical line and spacing between words on the same line are kept.
/// A `width` of 0 is treated as 1.
pub fn wrap_text(text: &str, width: usize) -> Vec<String> {
    let width = width.max(1);
    let mut lines = Vec::new();
    for physical in text.split('\n') {
        wrap_physical_line(physical, width, &mut lines);
    }
    lines
}

/// Byte and char bounds of one whitespace-delimited word
struct Word {
    start: usize,
    end: usize,
    start_char: usize,
    end_char: usize,
}

fn words(line: &str) -> Vec<Word> {
    let mut words = Vec::new();
    let mut current: Option<(usize, usize)> = None;
    let mut char_idx = 0;

    for (byte_idx, ch) in line.char_indices() {
        match (ch.is_whitespace(), current) {
            (false, None) => current = Some((byte_idx, char_idx)),
            (true, Some((start, start_char))) => {
                words.push(Word {
                    start,
                    end: byte_idx,
                    start_char,
                    end_char: char_idx,
                });
                current = None;
            }
            _ => {}
        }
        char_idx += 1;
    }

    if let Some((start, start_char)) = current {
        words.push(Word {
            start,
            end: line.len(),
            start_char,
            end_char: char_idx,
        });
    }
    words
}

fn wrap_physical_line(line: &str, width: usize, out: &mut Vec<String>) {
    let words = words(line);
    if words.is_empty() {
        out.push(String::new());
        return;
    }

    // the first segment keeps the line's leading whitespace
    let mut seg_start = 0;
    let mut seg_start_char = 0;
    let mut seg_end: Option<usize> = None;

    for word in &words {
        match seg_end {
            None => seg_end = Some(word.end),
            Some(end) => {
                if word.end_char - seg_start_char <= width {
                    seg_end = Some(word.end);
                } else {
                    out.push(line[seg_start..end].to_string());
                    seg_start = word.start;
                    seg_start_char = word.start_char;
                    seg_end = Some(word.end);
                }
            }
        }
    }

    if let Some(end) = seg_end {
        out.push(line[seg_start..end].to_string());
    }
}
