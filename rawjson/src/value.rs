use serde::Serialize;

use crate::Span;

/// The kind of a parsed node. `Invalid` is only ever seen on a default-constructed [`Value`];
/// the grammar never produces it.
#[derive(Debug, Default, Copy, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ValueKind {
    #[default]
    Invalid,
    False,
    Null,
    True,
    Number,
    String,
    Array,
    Object,
}

impl ValueKind {
    pub fn kind_desc(&self) -> &'static str {
        match self {
            ValueKind::Invalid => "invalid",
            ValueKind::False => "false",
            ValueKind::Null => "null",
            ValueKind::True => "true",
            ValueKind::Number => "number",
            ValueKind::String => "string",
            ValueKind::Array => "array",
            ValueKind::Object => "object",
        }
    }
}

/// A node of the parse tree. Note that we deviate from usual JSON deserialization libraries in
/// that nothing is decoded: numbers stay as their literal text and strings keep their quotes and
/// escapes. `raw` is exactly the slice of the input this node was recognized from, including
/// the brackets, separators and whitespace consumed by container productions.
#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize)]
pub struct Value<'a> {
    pub kind: ValueKind,
    pub raw: &'a str,
    pub span: Span,
    /// Only populated for [`ValueKind::Array`].
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub array_members: Vec<Value<'a>>,
    /// Only populated for [`ValueKind::Object`]. This is not a map: duplicate keys are kept in
    /// source order so downstream users can report them.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub object_members: Vec<Pair<'a>>,
}

/// An object member. `key.kind` is always [`ValueKind::String`].
#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize)]
pub struct Pair<'a> {
    pub key: Value<'a>,
    pub value: Value<'a>,
}

impl<'a> Value<'a> {
    /// A scalar node covering `len` bytes of `input` starting at `pos`.
    pub(crate) fn leaf(kind: ValueKind, input: &'a str, pos: usize, len: usize) -> Self {
        let span = Span::at(pos, len);
        Value {
            kind,
            raw: &input[span.into_range()],
            span,
            ..Default::default()
        }
    }

    pub(crate) fn array(input: &'a str, pos: usize, len: usize, members: Vec<Value<'a>>) -> Self {
        Value {
            array_members: members,
            ..Value::leaf(ValueKind::Array, input, pos, len)
        }
    }

    pub(crate) fn object(input: &'a str, pos: usize, len: usize, members: Vec<Pair<'a>>) -> Self {
        Value {
            object_members: members,
            ..Value::leaf(ValueKind::Object, input, pos, len)
        }
    }

    /// Nesting depth of this node: 0 for scalars, 1 for a container of scalars, and so on.
    pub fn depth(&self) -> usize {
        match self.kind {
            ValueKind::Array => {
                1 + self
                    .array_members
                    .iter()
                    .map(Value::depth)
                    .max()
                    .unwrap_or(0)
            }
            ValueKind::Object => {
                1 + self
                    .object_members
                    .iter()
                    .map(|pair| pair.value.depth())
                    .max()
                    .unwrap_or(0)
            }
            _ => 0,
        }
    }
}
