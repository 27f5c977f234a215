use ariadne::{Color, Fmt, Label, Report, ReportKind};
use indexmap::IndexMap;
use rawjson::{Span, Value};
use tracing::*;

use super::for_each_object;
use crate::config::Config;
use crate::{char_span, Diagnostics};

/// The parser keeps every member of an object, so `{"a": 1, "a": 2}` parses fine and it is up to
/// whoever decodes it which `"a"` wins. This lint reports every key that occurs more than once
/// within one object. Keys are compared by their raw text, so `"a"` and `"\u0061"` are distinct.
pub fn lint_duplicate_object_keys<'d>(
    _config: &Config,
    root: &Value<'_>,
    src: &str,
    path: &'d String,
    diag: &mut Diagnostics<'d>,
) {
    for_each_object(root, &mut |members| {
        let mut occurrences: IndexMap<&str, Vec<Span>> = IndexMap::new();
        for pair in members {
            occurrences
                .entry(pair.key.raw)
                .or_default()
                .push(pair.key.span);
        }

        for (key, spans) in occurrences.iter().filter(|(_, spans)| spans.len() > 1) {
            debug!(key, count = spans.len(), "duplicate object key");
            let first = char_span(src, spans[0]);
            let mut report = Report::build(ReportKind::Warning, path, first.start).with_message(
                format!(
                    "object key {} appears {} times",
                    key.fg(Color::Blue),
                    spans.len()
                ),
            );
            report = report.with_label(
                Label::new((path, first))
                    .with_message("first defined here")
                    .with_color(Color::Yellow),
            );
            for span in &spans[1..] {
                report = report.with_label(
                    Label::new((path, char_span(src, *span)))
                        .with_message("defined again here")
                        .with_color(Color::Yellow),
                );
            }
            diag.push(report.finish());
        }
    });
}
