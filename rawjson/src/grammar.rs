//! The JSON grammar, written as productions over [`crate::matcher`].
//!
//! Lexical productions are plain matchers with `()` output. Productions that build a [`Value`]
//! are functions `(input, pos) -> Step<Value>`, which makes them matchers too, and lets
//! [`array`] and [`object`] recurse into [`value`].
//!
//! Two narrowings compared to RFC 8259 are intentional and kept: an exponent needs an explicit
//! sign (`1e+5`, never `1e5`), and `\u` escapes take four decimal digits only.

use tracing::trace;

use crate::matcher::{
    alternative, char_range, literal, one_or_more, optional, sequence, zero_or_more, Matcher,
    NoMatch, Step,
};
use crate::{Pair, Value, ValueKind};

/// Zero or more of space, tab, line feed and carriage return.
pub fn whitespace<'a>() -> impl Matcher<'a, Output = ()> + Copy {
    zero_or_more(alternative((
        literal(" "),
        literal("\t"),
        literal("\n"),
        literal("\r"),
    )))
}

pub fn digit_zero<'a>() -> impl Matcher<'a, Output = ()> + Copy {
    literal("0")
}

pub fn digit_one_to_nine<'a>() -> impl Matcher<'a, Output = ()> + Copy {
    char_range('1', '9')
}

pub fn digit_zero_to_nine<'a>() -> impl Matcher<'a, Output = ()> + Copy {
    char_range('0', '9')
}

/// `ws <punct> ws`, the padding every structural token gets.
fn padded<'a>(punct: &'static str) -> impl Matcher<'a, Output = ()> + Copy {
    sequence((whitespace(), literal(punct), whitespace()))
}

/// `false`, `null` or `true`, tried in that order.
pub fn keyword(input: &str, pos: usize) -> Step<Value<'_>> {
    const KEYWORDS: [(&str, ValueKind); 3] = [
        ("false", ValueKind::False),
        ("null", ValueKind::Null),
        ("true", ValueKind::True),
    ];

    for (text, kind) in KEYWORDS {
        if let Ok(((), len)) = literal(text).attempt(input, pos) {
            return Ok((Value::leaf(kind, input, pos, len), len));
        }
    }
    Err(NoMatch)
}

pub fn number(input: &str, pos: usize) -> Step<Value<'_>> {
    let integer = alternative((
        digit_zero(),
        sequence((digit_one_to_nine(), zero_or_more(digit_zero_to_nine()))),
    ));
    let fraction = sequence((literal("."), one_or_more(digit_zero_to_nine())));
    let exponent = sequence((
        literal("e"),
        alternative((literal("-"), literal("+"))),
        one_or_more(digit_zero_to_nine()),
    ));

    let ((), len) = sequence((
        optional(literal("-")),
        integer,
        optional(fraction),
        optional(exponent),
    ))
    .attempt(input, pos)?;

    Ok((Value::leaf(ValueKind::Number, input, pos, len), len))
}

pub fn string(input: &str, pos: usize) -> Step<Value<'_>> {
    let unescaped = alternative((
        char_range('\u{20}', '\u{21}'),
        char_range('\u{23}', '\u{5B}'),
        char_range('\u{5D}', '\u{10FFFF}'),
    ));
    let escape = sequence((
        literal("\\"),
        alternative((
            literal("\""),
            literal("\\"),
            literal("/"),
            literal("b"),
            literal("f"),
            literal("n"),
            literal("r"),
            literal("t"),
            sequence((
                literal("u"),
                digit_zero_to_nine(),
                digit_zero_to_nine(),
                digit_zero_to_nine(),
                digit_zero_to_nine(),
            )),
        )),
    ));

    let ((), len) = sequence((
        literal("\""),
        zero_or_more(alternative((unescaped, escape))),
        literal("\""),
    ))
    .attempt(input, pos)?;

    Ok((Value::leaf(ValueKind::String, input, pos, len), len))
}

pub fn array(input: &str, pos: usize) -> Step<Value<'_>> {
    let close = padded("]");
    let ((), mut len) = padded("[").attempt(input, pos)?;
    let mut members = Vec::new();

    match value(input, pos + len) {
        Ok((first, n)) => {
            members.push(first);
            len += n;
        }
        Err(NoMatch) => {
            let ((), n) = close.attempt(input, pos + len)?;
            len += n;
            return Ok((Value::array(input, pos, len, members), len));
        }
    }

    // Once a comma is consumed another member is mandatory; that is what rules out `[1,]`.
    while let Ok(((), n)) = padded(",").attempt(input, pos + len) {
        len += n;
        let (member, n) = value(input, pos + len)?;
        members.push(member);
        len += n;
    }

    let ((), n) = close.attempt(input, pos + len)?;
    len += n;
    trace!(pos, len, members = members.len(), "matched array");
    Ok((Value::array(input, pos, len, members), len))
}

/// `"key" ws : ws value`
fn member(input: &str, pos: usize) -> Step<Pair<'_>> {
    let (key, mut len) = string(input, pos)?;
    let ((), n) = padded(":").attempt(input, pos + len)?;
    len += n;
    let (value, n) = value(input, pos + len)?;
    len += n;
    Ok((Pair { key, value }, len))
}

pub fn object(input: &str, pos: usize) -> Step<Value<'_>> {
    let close = padded("}");
    let ((), mut len) = padded("{").attempt(input, pos)?;
    let mut members = Vec::new();

    // Only a missing key may mean an empty object; a key without a valid `: value` is an error.
    if string(input, pos + len).is_err() {
        let ((), n) = close.attempt(input, pos + len)?;
        len += n;
        return Ok((Value::object(input, pos, len, members), len));
    }

    let (first, n) = member(input, pos + len)?;
    members.push(first);
    len += n;

    while let Ok(((), n)) = padded(",").attempt(input, pos + len) {
        len += n;
        let (pair, n) = member(input, pos + len)?;
        members.push(pair);
        len += n;
    }

    let ((), n) = close.attempt(input, pos + len)?;
    len += n;
    trace!(pos, len, members = members.len(), "matched object");
    Ok((Value::object(input, pos, len, members), len))
}

/// The top-level dispatcher: keyword, number, string, array, object, first match wins.
pub fn value(input: &str, pos: usize) -> Step<Value<'_>> {
    alternative((keyword, number, string, array, object)).attempt(input, pos)
}
