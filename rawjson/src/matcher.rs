//! Matching primitives and the combinators that compose them.
//!
//! Everything here is a [`Matcher`]: given the whole input and a byte offset it either reports
//! how many bytes it consumed (plus an output, usually `()`), or fails with [`NoMatch`]. Matchers
//! never mutate anything, so backtracking is just calling the next alternative at the same
//! offset.

use std::fmt;

/// The single failure a matcher can report: its rule does not apply at the given offset.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub struct NoMatch;

impl fmt::Display for NoMatch {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("not matched")
    }
}

impl std::error::Error for NoMatch {}

/// The outcome of one match attempt: the output and the number of bytes consumed.
pub type Step<T> = Result<(T, usize), NoMatch>;

pub trait Matcher<'a> {
    type Output;

    /// Try to match at byte offset `pos` of `input`.
    fn attempt(&self, input: &'a str, pos: usize) -> Step<Self::Output>;
}

/// Plain functions are matchers, which is how the grammar's value-producing productions plug
/// into the combinators.
impl<'a, F, T> Matcher<'a> for F
where
    F: Fn(&'a str, usize) -> Step<T>,
{
    type Output = T;

    fn attempt(&self, input: &'a str, pos: usize) -> Step<T> {
        self(input, pos)
    }
}

#[derive(Debug, Copy, Clone)]
pub struct Literal(&'static str);

/// Matches `text` exactly.
pub const fn literal(text: &'static str) -> Literal {
    Literal(text)
}

impl<'a> Matcher<'a> for Literal {
    type Output = ();

    fn attempt(&self, input: &'a str, pos: usize) -> Step<()> {
        match input.get(pos..) {
            Some(rest) if rest.starts_with(self.0) => Ok(((), self.0.len())),
            _ => Err(NoMatch),
        }
    }
}

#[derive(Debug, Copy, Clone)]
pub struct CharRange {
    min: char,
    max: char,
}

/// Matches one code point in `min..=max`.
pub const fn char_range(min: char, max: char) -> CharRange {
    CharRange { min, max }
}

impl<'a> Matcher<'a> for CharRange {
    type Output = ();

    fn attempt(&self, input: &'a str, pos: usize) -> Step<()> {
        // `get` is `None` past the end and off a character boundary.
        let c = input
            .get(pos..)
            .and_then(|rest| rest.chars().next())
            .ok_or(NoMatch)?;
        if (self.min..=self.max).contains(&c) {
            Ok(((), c.len_utf8()))
        } else {
            Err(NoMatch)
        }
    }
}

#[derive(Debug, Copy, Clone)]
pub struct Sequence<T>(T);

/// Matches every part of the tuple one after another. The outputs of the parts are discarded.
pub const fn sequence<T>(parts: T) -> Sequence<T> {
    Sequence(parts)
}

#[derive(Debug, Copy, Clone)]
pub struct Alternative<T>(T);

/// Tries every branch of the tuple at the same offset, in order; the first success wins.
pub const fn alternative<T>(branches: T) -> Alternative<T> {
    Alternative(branches)
}

macro_rules! impl_tuple_combinators {
    ($($m:ident $v:ident),+) => {
        impl<'a, $($m: Matcher<'a>),+> Matcher<'a> for Sequence<($($m,)+)> {
            type Output = ();

            fn attempt(&self, input: &'a str, pos: usize) -> Step<()> {
                let ($($v,)+) = &self.0;
                let mut len = 0;
                $(
                    let (_, n) = $v.attempt(input, pos + len)?;
                    len += n;
                )+
                Ok(((), len))
            }
        }

        impl<'a, O, $($m: Matcher<'a, Output = O>),+> Matcher<'a> for Alternative<($($m,)+)> {
            type Output = O;

            fn attempt(&self, input: &'a str, pos: usize) -> Step<O> {
                let ($($v,)+) = &self.0;
                $(
                    if let Ok(matched) = $v.attempt(input, pos) {
                        return Ok(matched);
                    }
                )+
                Err(NoMatch)
            }
        }
    };
}

impl_tuple_combinators!(A a);
impl_tuple_combinators!(A a, B b);
impl_tuple_combinators!(A a, B b, C c);
impl_tuple_combinators!(A a, B b, C c, D d);
impl_tuple_combinators!(A a, B b, C c, D d, E e);
impl_tuple_combinators!(A a, B b, C c, D d, E e, F f);
impl_tuple_combinators!(A a, B b, C c, D d, E e, F f, G g);
impl_tuple_combinators!(A a, B b, C c, D d, E e, F f, G g, H h);
impl_tuple_combinators!(A a, B b, C c, D d, E e, F f, G g, H h, I i);
impl_tuple_combinators!(A a, B b, C c, D d, E e, F f, G g, H h, I i, J j);

#[derive(Debug, Copy, Clone)]
pub struct ZeroOrMore<M>(M);

/// Repeats `inner` until it fails. Never fails itself.
pub const fn zero_or_more<M>(inner: M) -> ZeroOrMore<M> {
    ZeroOrMore(inner)
}

/// Applies `inner` repeatedly from `pos`, returning the total length consumed. A success that
/// consumed nothing ends the loop.
fn repeat<'a, M: Matcher<'a>>(inner: &M, input: &'a str, pos: usize) -> usize {
    let mut len = 0;
    while let Ok((_, n)) = inner.attempt(input, pos + len) {
        if n == 0 {
            break;
        }
        len += n;
    }
    len
}

impl<'a, M: Matcher<'a>> Matcher<'a> for ZeroOrMore<M> {
    type Output = ();

    fn attempt(&self, input: &'a str, pos: usize) -> Step<()> {
        Ok(((), repeat(&self.0, input, pos)))
    }
}

#[derive(Debug, Copy, Clone)]
pub struct OneOrMore<M>(M);

/// Like [`zero_or_more`], but `inner` has to match at least once.
pub const fn one_or_more<M>(inner: M) -> OneOrMore<M> {
    OneOrMore(inner)
}

impl<'a, M: Matcher<'a>> Matcher<'a> for OneOrMore<M> {
    type Output = ();

    fn attempt(&self, input: &'a str, pos: usize) -> Step<()> {
        let (_, first) = self.0.attempt(input, pos)?;
        let rest = if first == 0 {
            0
        } else {
            repeat(&self.0, input, pos + first)
        };
        Ok(((), first + rest))
    }
}

#[derive(Debug, Copy, Clone)]
pub struct Optional<M>(M);

/// Matches `inner` if possible; otherwise succeeds with `None` having consumed nothing.
pub const fn optional<M>(inner: M) -> Optional<M> {
    Optional(inner)
}

impl<'a, M: Matcher<'a>> Matcher<'a> for Optional<M> {
    type Output = Option<M::Output>;

    fn attempt(&self, input: &'a str, pos: usize) -> Step<Self::Output> {
        Ok(match self.0.attempt(input, pos) {
            Ok((output, n)) => (Some(output), n),
            Err(NoMatch) => (None, 0),
        })
    }
}
