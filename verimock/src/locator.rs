use std::marker::PhantomData;
use std::sync::Arc;

use crate::{Behavior, CallSpec, Matcher, MockError, MockHandle, MockableArg, MockableRet, Times};

/// A method of one mock narrowed down by argument matchers.
///
/// Returned by the generated `mock_<method>` functions. `B` is the closure
/// adapter accepted by [`returns_with`](Self::returns_with).
pub struct MockLocator<I, O, B> {
    handle: MockHandle,
    method: &'static str,
    matcher: Arc<Matcher<I>>,
    _phantom: PhantomData<fn() -> (O, B)>,
}

impl<I, O, B> MockLocator<I, O, B>
where
    I: MockableArg,
    O: MockableRet,
    B: Into<Behavior<I, O>>,
{
    #[doc(hidden)]
    pub fn new(handle: &MockHandle, method: &'static str, matcher: Matcher<I>) -> Self {
        Self {
            handle: handle.clone(),
            method,
            matcher: Arc::new(matcher),
            _phantom: PhantomData,
        }
    }

    fn behaves(&self, behavior: Behavior<I, O>) -> &Self {
        self.handle.stub(self.method, self.matcher.clone(), behavior);
        self
    }

    /// Answers every matching call with a clone of `ret`.
    pub fn returns(&self, ret: O) -> &Self
    where
        O: Clone,
    {
        self.behaves(Behavior::constant(ret))
    }

    /// Answers matching calls with the result of `behavior`, which receives the
    /// arguments of the call.
    pub fn returns_with<T: Into<B>>(&self, behavior: T) -> &Self {
        let behavior: B = behavior.into();
        self.behaves(behavior.into())
    }

    /// Answers the next matching call with `ret`. A further matching call fails.
    pub fn returns_once(&self, ret: O) -> &Self {
        self.behaves(Behavior::Once(Some(ret)))
    }

    /// Fails matching calls with `message`.
    pub fn throws(&self, message: impl Into<String>) -> &Self {
        self.behaves(Behavior::Throws(message.into()))
    }

    /// Runs the trait's own implementation for matching calls.
    pub fn calls_real_impl(&self) -> &Self {
        self.behaves(Behavior::CallsRealImpl)
    }

    pub fn verify(&self, times: impl Into<Times>) -> Result<(), MockError> {
        self.handle.verify(&self.spec(), times)
    }

    /// Fails the test unless the matching calls were made `times` times.
    #[track_caller]
    pub fn assert_called(&self, times: impl Into<Times>) -> &Self {
        if let Err(error) = self.verify(times) {
            panic!("{error}");
        }
        self
    }

    /// This method and matcher as an entry for order, sequence and exclusion
    /// checks.
    pub fn spec(&self) -> CallSpec {
        CallSpec::new(self.method, self.matcher.clone())
    }
}
