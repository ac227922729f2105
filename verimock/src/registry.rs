use std::sync::Arc;

use crate::rule::Rule;

/// Stubs of one method, in registration order.
pub(crate) struct StubRegistry<I, O> {
    rules: Vec<Arc<Rule<I, O>>>,
}

impl<I, O> Default for StubRegistry<I, O> {
    fn default() -> Self {
        Self { rules: Vec::new() }
    }
}

impl<I, O> Clone for StubRegistry<I, O> {
    fn clone(&self) -> Self {
        Self {
            rules: self.rules.clone(),
        }
    }
}

impl<I, O> StubRegistry<I, O> {
    pub(crate) fn push(&mut self, rule: Rule<I, O>) {
        self.rules.push(Arc::new(rule));
    }

    /// The most recently registered rule matching `input`.
    pub(crate) fn find(&self, input: &I) -> Option<Arc<Rule<I, O>>> {
        self.rules
            .iter()
            .rev()
            .find(|rule| rule.matches(input))
            .cloned()
    }
}
