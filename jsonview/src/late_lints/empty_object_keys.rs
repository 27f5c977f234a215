use ariadne::{Color, Label, Report, ReportKind};
use rawjson::Value;
use tracing::*;

use super::for_each_object;
use crate::config::Config;
use crate::{char_span, Diagnostics};

pub fn lint_empty_object_keys<'d>(
    _config: &Config,
    root: &Value<'_>,
    src: &str,
    path: &'d String,
    diag: &mut Diagnostics<'d>,
) {
    for_each_object(root, &mut |members| {
        for pair in members.iter().filter(|pair| pair.key.raw == r#""""#) {
            debug!(key_span = ?pair.key.span);
            let span = char_span(src, pair.key.span);
            diag.push(
                Report::build(ReportKind::Warning, path, span.start)
                    .with_message("object key is empty")
                    .with_label(Label::new((path, span)).with_color(Color::Yellow))
                    .finish(),
            );
        }
    });
}
