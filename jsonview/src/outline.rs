//! Plain-text outline of a parsed tree.
//!
//! Every node is one line, indented two spaces per level. Scalars show their raw text,
//! containers a placeholder, and object members `key : label` with the keys of one object
//! padded to the same width.

use std::fmt::Write;

use rawjson::{Value, ValueKind};

pub fn render(root: &Value<'_>, width: usize) -> String {
    let mut out = String::new();
    push_line(&mut out, 0, &label(root, width));
    push_children(&mut out, root, 1, width);
    out
}

fn label(value: &Value<'_>, width: usize) -> String {
    match value.kind {
        ValueKind::Array if value.array_members.is_empty() => "[ ]".to_string(),
        ValueKind::Array => "[...]".to_string(),
        ValueKind::Object if value.object_members.is_empty() => "{ }".to_string(),
        ValueKind::Object => "{...}".to_string(),
        _ => truncate(value.raw, width),
    }
}

fn truncate(raw: &str, width: usize) -> String {
    if width == 0 || raw.chars().count() <= width {
        return raw.to_string();
    }
    let mut short: String = raw.chars().take(width.saturating_sub(3)).collect();
    short.push_str("...");
    short
}

fn push_line(out: &mut String, depth: usize, line: &str) {
    let _ = writeln!(out, "{:indent$}{line}", "", indent = depth * 2);
}

fn push_children(out: &mut String, value: &Value<'_>, depth: usize, width: usize) {
    match value.kind {
        ValueKind::Array => {
            for member in &value.array_members {
                push_line(out, depth, &label(member, width));
                push_children(out, member, depth + 1, width);
            }
        }
        ValueKind::Object => {
            let key_width = value
                .object_members
                .iter()
                .map(|pair| pair.key.raw.chars().count())
                .max()
                .unwrap_or(0);
            for pair in &value.object_members {
                let key = pair.key.raw;
                let pad = key_width - key.chars().count();
                let line = format!("{key}{:pad$} : {}", "", label(&pair.value, width));
                push_line(out, depth, &line);
                push_children(out, &pair.value, depth + 1, width);
            }
        }
        _ => {}
    }
}
