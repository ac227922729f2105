use std::fmt::{self, Debug};

use crate::capture::CaptureTarget;

/// What a single argument is expected to be.
pub enum ArgMatcher<T> {
    /// Any value
    Any,
    /// Never matches
    Never,
    /// Equal to the value
    Eq(T),
    /// Equal to one of the values
    Or(Vec<T>),
    /// Accepted by the predicate
    Fn(Box<dyn Fn(&T) -> bool + Send + Sync + 'static>),
    /// Accepts anything and hands the value to a capture target
    Capture(Box<dyn Fn(&T) + Send + Sync + 'static>),
}

impl<T: PartialEq> ArgMatcher<T> {
    pub fn matches(&self, input: &T) -> bool {
        match self {
            ArgMatcher::Any => true,
            ArgMatcher::Never => false,
            ArgMatcher::Eq(value) => value == input,
            ArgMatcher::Or(values) => values.iter().any(|value| value == input),
            ArgMatcher::Fn(predicate) => predicate(input),
            ArgMatcher::Capture(_) => true,
        }
    }
}

impl<T> ArgMatcher<T> {
    pub(crate) fn capture(&self, input: &T) {
        if let ArgMatcher::Capture(store) = self {
            store(input);
        }
    }
}

impl<T: Debug> Debug for ArgMatcher<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ArgMatcher::Any => write!(f, "any()"),
            ArgMatcher::Never => write!(f, "never()"),
            ArgMatcher::Eq(value) => write!(f, "{value:?}"),
            ArgMatcher::Or(values) => {
                let values: Vec<_> = values.iter().map(|value| format!("{value:?}")).collect();
                write!(f, "or({})", values.join(", "))
            }
            ArgMatcher::Fn(_) => write!(f, "matching(_)"),
            ArgMatcher::Capture(_) => write!(f, "capture()"),
        }
    }
}

impl<T: PartialEq> From<T> for ArgMatcher<T> {
    fn from(value: T) -> Self {
        ArgMatcher::Eq(value)
    }
}

impl From<&str> for ArgMatcher<String> {
    fn from(value: &str) -> Self {
        ArgMatcher::Eq(value.to_string())
    }
}

/// Positional matching over a whole list: equal arity, then element by element.
impl<'a, T, M> From<&'a [M]> for ArgMatcher<Vec<T>>
where
    T: PartialEq + Send + Sync + 'static,
    M: Into<ArgMatcher<T>> + Clone,
{
    fn from(value: &'a [M]) -> Self {
        let matchers: Vec<ArgMatcher<T>> = value.iter().map(|elem| elem.clone().into()).collect();
        ArgMatcher::Fn(Box::new(move |actual: &Vec<T>| {
            matches_all(&matchers, actual)
        }))
    }
}

impl<'a, T, M, const N: usize> From<&'a [M; N]> for ArgMatcher<Vec<T>>
where
    T: PartialEq + Send + Sync + 'static,
    M: Into<ArgMatcher<T>> + Clone,
{
    fn from(value: &'a [M; N]) -> Self {
        <&'a [M]>::into(&value[..])
    }
}

/// `true` when both lists have the same length and every matcher accepts the
/// argument at its position.
pub fn matches_all<T: PartialEq>(matchers: &[ArgMatcher<T>], args: &[T]) -> bool {
    matchers.len() == args.len()
        && matchers
            .iter()
            .zip(args.iter())
            .all(|(matcher, arg)| matcher.matches(arg))
}

pub fn any<T>() -> ArgMatcher<T> {
    ArgMatcher::Any
}

pub fn never<T>() -> ArgMatcher<T> {
    ArgMatcher::Never
}

pub fn eq<T>(value: T) -> ArgMatcher<T> {
    ArgMatcher::Eq(value)
}

/// Matches a value equal to any of `values`.
pub fn or<T>(values: impl IntoIterator<Item = T>) -> ArgMatcher<T> {
    ArgMatcher::Or(values.into_iter().collect())
}

pub fn matching<T>(predicate: impl Fn(&T) -> bool + Send + Sync + 'static) -> ArgMatcher<T> {
    ArgMatcher::Fn(Box::new(predicate))
}

/// Accepts any value and stores a clone of it into `target`, a
/// [`CaptureSlot`](crate::CaptureSlot) or a [`CaptureSequence`](crate::CaptureSequence).
///
/// The value is stored only when the whole argument list of the call matched.
/// Values from one thread arrive in call order. Calls racing on several
/// threads may store their values in a different order than the log.
pub fn capture<T, C>(target: &C) -> ArgMatcher<T>
where
    T: Clone + 'static,
    C: CaptureTarget<T> + Clone + 'static,
{
    let target = target.clone();
    ArgMatcher::Capture(Box::new(move |value: &T| target.store(value.clone())))
}

/// Matcher over the full argument tuple of one method.
pub trait Match<I>: Send + Sync {
    fn matches(&self, input: &I) -> bool;
    fn capture(&self, input: &I);
    fn describe(&self) -> String;
}

/// Renders an argument tuple the way it appears in a call: `North, 30`.
pub trait ArgList {
    fn describe(&self) -> String;
}

pub struct Matcher<I>(Box<dyn Match<I>>);

impl<I> Matcher<I> {
    pub fn from_match(matcher: impl Match<I> + 'static) -> Self {
        Self(Box::new(matcher))
    }

    pub fn matches(&self, input: &I) -> bool {
        self.0.matches(input)
    }

    pub(crate) fn capture(&self, input: &I) {
        self.0.capture(input)
    }
}

impl<I> Debug for Matcher<I> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0.describe())
    }
}

verimock_macros::create_matchers!();
