use std::any::Any;
use std::fmt;
use std::sync::Arc;

use crate::{Invocation, Matcher, MockableArg};

trait ErasedMatch: Send + Sync {
    fn matches(&self, input: &(dyn Any + Send + Sync)) -> bool;
    fn capture(&self, input: &(dyn Any + Send + Sync));
    fn describe(&self) -> String;
}

impl<I: MockableArg> ErasedMatch for Matcher<I> {
    fn matches(&self, input: &(dyn Any + Send + Sync)) -> bool {
        input
            .downcast_ref::<I>()
            .map(|input| Matcher::matches(self, input))
            .unwrap_or(false)
    }

    fn capture(&self, input: &(dyn Any + Send + Sync)) {
        if let Some(input) = input.downcast_ref::<I>() {
            Matcher::capture(self, input);
        }
    }

    fn describe(&self) -> String {
        format!("{self:?}")
    }
}

/// A method together with the matcher for its arguments, with the argument
/// type erased so that calls to different methods can be listed together.
///
/// Obtained from [`MockLocator::spec`](crate::MockLocator::spec).
#[derive(Clone)]
pub struct CallSpec {
    method: &'static str,
    matcher: Arc<dyn ErasedMatch>,
}

impl CallSpec {
    pub fn new<I: MockableArg>(method: &'static str, matcher: Arc<Matcher<I>>) -> Self {
        Self { method, matcher }
    }

    pub fn method(&self) -> &'static str {
        self.method
    }

    pub fn matches(&self, invocation: &Invocation) -> bool {
        self.matches_args(invocation.method, invocation.args.as_ref())
    }

    pub(crate) fn matches_args(&self, method: &str, args: &(dyn Any + Send + Sync)) -> bool {
        self.method == method && self.matcher.matches(args)
    }

    pub(crate) fn capture(&self, invocation: &Invocation) {
        self.matcher.capture(invocation.args.as_ref());
    }
}

impl fmt::Display for CallSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}({})", self.method, self.matcher.describe())
    }
}

impl fmt::Debug for CallSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("CallSpec").field(&self.to_string()).finish()
    }
}
