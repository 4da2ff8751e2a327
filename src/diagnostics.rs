//! Line-length diagnostics.
//!
//! Every line longer than [`Settings::max_line_length`] UTF-16 columns gets one warning
//! covering the overflowing tail of the line. Diagnostics are recomputed from the full
//! text on every change; nothing is carried over between runs.

use tower_lsp::lsp_types::{Diagnostic, DiagnosticSeverity};

use crate::{
    config::Settings,
    index::{line_len, line_range, split_lines},
};

pub const SOURCE: &str = "symscan";

/// Diagnostics for the whole of `text`. Empty when diagnostics are disabled.
pub fn check(text: &str, settings: &Settings) -> Vec<Diagnostic> {
    if !settings.diagnostics {
        return Vec::new();
    }

    let threshold = settings.max_line_length;

    split_lines(text)
        .enumerate()
        .filter_map(|(number, line)| {
            let length = line_len(line);
            (length > threshold).then(|| Diagnostic {
                range: line_range(number, threshold, length - threshold),
                message: generate_diagnostic_message(threshold),
                source: Some(SOURCE.into()),
                severity: Some(DiagnosticSeverity::WARNING),
                ..Default::default()
            })
        })
        .collect()
}

fn generate_diagnostic_message(threshold: usize) -> String {
    format!("Line exceeds {} characters", threshold)
}
