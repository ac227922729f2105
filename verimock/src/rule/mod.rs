mod behavior;
mod matcher;

use std::sync::Arc;

use parking_lot::Mutex;

pub use behavior::*;
pub use matcher::*;

pub(crate) use behavior::Output;

/// One stub: a matcher over the argument tuple and the behavior it selects.
pub(crate) struct Rule<I, O> {
    pub matcher: Arc<Matcher<I>>,
    pub behavior: Mutex<Behavior<I, O>>,
}

impl<I, O> Rule<I, O> {
    pub fn new(matcher: Arc<Matcher<I>>, behavior: Behavior<I, O>) -> Self {
        Self {
            matcher,
            behavior: Mutex::new(behavior),
        }
    }

    pub fn matches(&self, input: &I) -> bool {
        self.matcher.matches(input)
    }

    /// Runs the behavior without holding the rule's lock, so the behavior
    /// may call back into the same stub.
    pub fn call_behavior(&self, input: I) -> Output<O> {
        let behavior = self.behavior.lock().next_call();
        behavior.called(input)
    }
}
