//! Line and column helpers shared by the indexer, the diagnostics and the queries.
//!
//! Lines break on `\n`, `\r\n` or a lone `\r`, and columns are counted in UTF-16 code
//! units, the protocol's default position encoding.

use once_cell::sync::Lazy;
use regex::Regex;
use tower_lsp::lsp_types::{Position, Range};

static LINE_BREAK_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\r\n|\r|\n").expect("Line break regex not constructing"));

/// Splits text into lines on `\r\n`, `\r` or `\n`, each counting as a single break.
///
/// Unlike [`str::lines`], a trailing terminator produces a final empty line,
/// so `"a\n"` has two lines and `""` has one.
pub fn split_lines(text: &str) -> impl Iterator<Item = &str> + '_ {
    LINE_BREAK_RE.split(text)
}

/// Length of a line in columns.
pub fn line_len(line: &str) -> usize {
    line.encode_utf16().count()
}

/// Column of the first occurrence of `needle` in `line`, if any.
pub fn find_column(line: &str, needle: &str) -> Option<usize> {
    line.find(needle).map(|byte| line_len(&line[..byte]))
}

/// A range on a single line spanning `[start, start + len)` columns.
pub fn line_range(line: usize, start: usize, len: usize) -> Range {
    Range {
        start: Position {
            line: line as u32,
            character: start as u32,
        },
        end: Position {
            line: line as u32,
            character: (start + len) as u32,
        },
    }
}

/// Every line containing `needle`, with the range of its first occurrence.
pub fn first_occurrence_per_line(text: &str, needle: &str) -> Vec<Range> {
    let width = line_len(needle);
    split_lines(text)
        .enumerate()
        .filter_map(|(number, line)| {
            find_column(line, needle).map(|column| line_range(number, column, width))
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use itertools::Itertools;

    #[test]
    fn test_split_lines_mixed_terminators() {
        let lines = split_lines("a\r\nb\nc\rd").collect_vec();
        assert_eq!(lines, vec!["a", "b", "c", "d"]);
    }

    #[test]
    fn test_split_lines_trailing_terminator() {
        assert_eq!(split_lines("a\n").collect_vec(), vec!["a", ""]);
        assert_eq!(split_lines("a\r").collect_vec(), vec!["a", ""]);
        assert_eq!(split_lines("").collect_vec(), vec![""]);
    }

    #[test]
    fn test_other_separators_do_not_break_lines() {
        let lines = split_lines("a\x0cb\x0bc\u{2028}d\u{85}e").collect_vec();
        assert_eq!(lines.len(), 1);
    }

    #[test]
    fn test_columns_count_utf16_units() {
        assert_eq!(find_column("let x = 1", "x"), Some(4));
        assert_eq!(find_column("é x", "x"), Some(2));
        assert_eq!(find_column("😀 x", "x"), Some(3));
        assert_eq!(find_column("let y", "x"), None);
        assert_eq!(line_len("a😀"), 3);
    }

    #[test]
    fn test_first_occurrence_per_line() {
        let ranges = first_occurrence_per_line("foo foo\nbar\n  foo", "foo");

        assert_eq!(ranges, vec![line_range(0, 0, 3), line_range(2, 2, 3)]);
    }

    #[test]
    fn test_first_occurrence_after_astral_char() {
        let ranges = first_occurrence_per_line("/* 😀 */ let myVar = 1;", "myVar");

        assert_eq!(ranges, vec![line_range(0, 13, 5)]);
    }
}
