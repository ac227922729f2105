use std::fmt;
use std::sync::Arc;

use parking_lot::Mutex;

#[derive(Debug, PartialEq)]
pub(crate) enum Output<O> {
    Found(O),
    CallsRealImpl,
    ErrorCalledOnce,
    Thrown(String),
}

/// Behavior of a stubbed call
pub enum Behavior<I, O> {
    /// Computes the output from the arguments
    Function(Arc<dyn Fn(I) -> O + Send + Sync + 'static>),
    /// Returns a constant value on every call
    Const(Arc<dyn Fn() -> O + Send + Sync + 'static>),
    /// Returns the value once. A second call is an error.
    Once(Option<O>),
    /// Fails the call with the message
    Throws(String),
    /// Calls the real implementation instead of the mock
    CallsRealImpl,
}

impl<I, O> Behavior<I, O> {
    /// The behavior for the next call. `Once` hands over its value and is
    /// left empty, the others are shared.
    pub(crate) fn next_call(&mut self) -> Self {
        match self {
            Behavior::Function(function) => Behavior::Function(function.clone()),
            Behavior::Const(cons) => Behavior::Const(cons.clone()),
            Behavior::Once(once) => Behavior::Once(once.take()),
            Behavior::Throws(message) => Behavior::Throws(message.clone()),
            Behavior::CallsRealImpl => Behavior::CallsRealImpl,
        }
    }

    pub(crate) fn called(self, input: I) -> Output<O> {
        match self {
            Behavior::Function(function) => Output::Found(function(input)),
            Behavior::Const(cons) => Output::Found(cons()),
            Behavior::Once(Some(ret)) => Output::Found(ret),
            Behavior::Once(None) => Output::ErrorCalledOnce,
            Behavior::Throws(message) => Output::Thrown(message),
            Behavior::CallsRealImpl => Output::CallsRealImpl,
        }
    }
}

impl<I, O: Clone + Send + 'static> Behavior<I, O> {
    pub fn constant(ret: O) -> Self {
        let ret = Mutex::new(ret);
        Behavior::Const(Arc::new(move || ret.lock().clone()))
    }
}

impl<I, O> fmt::Debug for Behavior<I, O> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Function(_) => f.debug_tuple("Function(_)").finish(),
            Self::Const(_) => f.debug_tuple("Const(_)").finish(),
            Self::Once(once) => write!(f, "Once({})", if once.is_some() { "_" } else { "used" }),
            Self::Throws(message) => f.debug_tuple("Throws").field(message).finish(),
            Self::CallsRealImpl => write!(f, "CallsRealImpl"),
        }
    }
}

verimock_macros::create_behaviors!();
