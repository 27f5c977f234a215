use std::io::Read;
use std::path::{Path, PathBuf};

use anyhow::{bail, Context};
use ariadne::{Color, Label, Report, ReportKind, Source};
use clap::{Parser as ClapParser, ValueEnum};
use rawjson::grammar::whitespace;
use rawjson::matcher::Matcher;
use rawjson::{Span, Value};
use serde::Serialize;
use tracing::*;

use crate::config::Config;

mod config;
mod late_lints;
mod logging;
mod outline;

#[derive(Debug, ClapParser)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// The path to a JSON file. Reads stdin when omitted.
    input: Option<PathBuf>,

    /// A TOML configuration file.
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// What to print once the input is parsed.
    #[arg(short, long, value_enum, default_value_t = Format::Outline)]
    format: Format,

    /// Log debug events to stderr. `RUST_LOG` takes precedence.
    #[arg(short, long)]
    verbose: bool,
}

#[derive(Debug, Copy, Clone, PartialEq, Eq, ValueEnum)]
enum Format {
    /// An indented outline of the tree.
    Outline,
    /// The parse tree, raw spans included, as JSON.
    Json,
    /// Nothing; only report problems.
    None,
}

type DiagnosticReport<'a> = Report<'a, (&'a String, std::ops::Range<usize>)>;
type Diagnostics<'a> = Vec<DiagnosticReport<'a>>;

/// ariadne counts characters, the parser counts bytes.
fn char_span(src: &str, span: Span) -> std::ops::Range<usize> {
    let start = src[..span.lo].chars().count();
    start..start + src[span.into_range()].chars().count()
}

#[derive(Serialize)]
struct Document<'a> {
    consumed: usize,
    root: &'a Value<'a>,
}

fn main() -> anyhow::Result<()> {
    let cli = Args::parse();

    logging::setup_logging(cli.verbose);

    debug!(input = ?cli.input, config = ?cli.config);

    let config = config::load(cli.config.as_deref())?;
    debug!(?config);

    let (path, src) = read_input(cli.input.as_deref())?;

    if config.max_nesting_depth > 0 {
        if let Err(e) = rawjson::check_nesting_depth(&src, config.max_nesting_depth) {
            let span = char_span(&src, Span::at(e.offset, 1));
            Report::build(ReportKind::Error, &path, span.start)
                .with_message(e.to_string())
                .with_label(
                    Label::new((&path, span))
                        .with_message(format!("more than {} levels deep", e.limit))
                        .with_color(Color::Red),
                )
                .with_help("raise `max_nesting_depth` in the config file to accept this input")
                .finish()
                .eprint((&path, Source::from(&src)))?;
            bail!("input nests too deeply");
        }
    }

    let Ok((root, len)) = rawjson::parse(&src, 0) else {
        DiagnosticReport::build(ReportKind::Error, &path, 0)
            .with_message("input is not valid JSON")
            .with_note("run with `RUST_LOG=rawjson=trace` to see how far the parser got")
            .finish()
            .eprint((&path, Source::from(&src)))?;
        bail!("failed to parse `{path}`");
    };

    debug!(kind = root.kind.kind_desc(), len, depth = root.depth());

    check_trailing_content(&config, &path, &src, len)?;

    let mut diagnostics = Vec::new();

    if config.lint_duplicate_keys {
        late_lints::lint_duplicate_object_keys(&config, &root, &src, &path, &mut diagnostics);
    }
    if config.lint_empty_keys {
        late_lints::lint_empty_object_keys(&config, &root, &src, &path, &mut diagnostics);
    }

    for diagnostic in diagnostics {
        diagnostic.eprint((&path, Source::from(&src)))?;
    }

    match cli.format {
        Format::Outline => print!("{}", outline::render(&root, config.outline_width)),
        Format::Json => {
            let document = Document {
                consumed: len,
                root: &root,
            };
            println!(
                "{}",
                serde_json::to_string_pretty(&document).context("serializing the parse tree")?
            );
        }
        Format::None => {}
    }

    Ok(())
}

fn read_input(input: Option<&Path>) -> anyhow::Result<(String, String)> {
    let Some(input) = input else {
        let mut src = String::new();
        std::io::stdin()
            .read_to_string(&mut src)
            .context("failed to read stdin")?;
        return Ok(("<stdin>".to_string(), src));
    };

    match std::fs::read_to_string(input) {
        Ok(src) => Ok((input.display().to_string(), src)),
        Err(e) => {
            error!(path = ?input, "failed to read input");
            Err(e).with_context(|| format!("failed to read file `{}`", input.display()))
        }
    }
}

/// The parser stops after the top-level value; whatever follows it is checked here.
fn check_trailing_content(
    config: &Config,
    path: &String,
    src: &str,
    len: usize,
) -> anyhow::Result<()> {
    let mut end = len;
    if config.allow_trailing_whitespace {
        if let Ok(((), n)) = whitespace().attempt(src, end) {
            end += n;
        }
    }
    if end == src.len() {
        return Ok(());
    }

    debug!(len, trailing = src.len() - end, "trailing content");
    let span = char_span(src, Span::new(end, src.len()));
    Report::build(ReportKind::Error, path, span.start)
        .with_message("unexpected content after the JSON value")
        .with_label(
            Label::new((path, span))
                .with_message("the value ends before this")
                .with_color(Color::Red),
        )
        .finish()
        .eprint((path, Source::from(src)))?;
    bail!("trailing content in `{path}`");
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn char_span_counts_characters() {
        let src = r#"{"é": "ü"}"#;
        // `"ü"` starts at byte 7 and takes 4 bytes.
        assert_eq!(char_span(src, Span::new(7, 11)), 6..9);
        assert_eq!(char_span("abc", Span::new(1, 2)), 1..2);
    }
}
