use std::any::{Any, TypeId};
use std::collections::HashMap;
use std::fmt;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use parking_lot::Mutex;
use tracing::{debug, trace};

use crate::invocation::InvocationLog;
use crate::registry::StubRegistry;
use crate::rule::{Behavior, Output, Rule};
use crate::{
    ArgList, CallSpec, Defaults, Invocation, Matcher, MockError, MockableArg, MockableRet, Times,
    VerificationState,
};

/// A unique id for a mock
pub type MockId = u64;
static ID: AtomicU64 = AtomicU64::new(0);

/// Stubs are kept per method and argument/output types.
type StubKey = (&'static str, TypeId);

fn stub_key<I: 'static, O: 'static>(method: &'static str) -> StubKey {
    (method, TypeId::of::<StubRegistry<I, O>>())
}

#[derive(Default)]
struct MockState {
    log: InvocationLog,
    stubs: HashMap<StubKey, Box<dyn Any + Send>>,
    exclusions: Vec<CallSpec>,
    defaults: Option<Arc<Defaults>>,
}

/// Recorder, stub registry and verifier of one mock.
///
/// Clones share the same state, so a handle can be moved into other threads
/// while the test keeps its own clone for verification.
///
/// The state lock is only held to append to the log or copy out of it.
/// Matchers, behaviors and default factories run without it, so any of them
/// may call back into the mock.
#[derive(Clone)]
pub struct MockHandle {
    id: MockId,
    name: &'static str,
    state: Arc<Mutex<MockState>>,
}

impl MockHandle {
    /// A strict mock: a call that matches no stub fails.
    pub fn new(name: &'static str) -> Self {
        Self {
            id: ID.fetch_add(1, Ordering::Relaxed),
            name,
            state: Arc::new(Mutex::new(MockState::default())),
        }
    }

    /// A mock answering unstubbed calls from `defaults` when it has an entry
    /// for the return type.
    pub fn relaxed(name: &'static str, defaults: Defaults) -> Self {
        let handle = Self::new(name);
        handle.state.lock().defaults = Some(Arc::new(defaults));
        handle
    }

    pub fn id(&self) -> MockId {
        self.id
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    pub fn is_relaxed(&self) -> bool {
        self.state.lock().defaults.is_some()
    }

    pub(crate) fn stub<I, O>(
        &self,
        method: &'static str,
        matcher: Arc<Matcher<I>>,
        behavior: Behavior<I, O>,
    ) where
        I: MockableArg,
        O: MockableRet,
    {
        debug!(mock = self.name, method, matcher = ?matcher, behavior = ?behavior, "stub registered");
        let mut state = self.state.lock();
        let registry = state
            .stubs
            .entry(stub_key::<I, O>(method))
            .or_insert_with(|| Box::new(StubRegistry::<I, O>::default()));
        if let Some(registry) = registry.downcast_mut::<StubRegistry<I, O>>() {
            registry.push(Rule::new(matcher, behavior));
        }
    }

    /// Records the call and resolves its answer.
    ///
    /// `Ok(None)` means the matching stub asked for the real implementation.
    pub fn try_call<I, O>(&self, method: &'static str, input: I) -> Result<Option<O>, MockError>
    where
        I: MockableArg + ArgList,
        O: MockableRet,
    {
        let call = format!("{method}({})", input.describe());
        let args: Arc<dyn Any + Send + Sync> = Arc::new(input.clone());
        let (seq, exclusions, registry, defaults) = {
            let mut state = self.state.lock();
            let seq = state.log.push(
                method,
                args.clone(),
                call.clone(),
                VerificationState::Unverified,
            );
            let registry = state
                .stubs
                .get(&stub_key::<I, O>(method))
                .and_then(|registry| registry.downcast_ref::<StubRegistry<I, O>>())
                .cloned();
            (seq, state.exclusions.clone(), registry, state.defaults.clone())
        };

        let excluded = exclusions
            .iter()
            .any(|spec| spec.matches_args(method, args.as_ref()));
        if excluded {
            self.state.lock().log.exclude([seq]);
        }
        trace!(mock = self.name, seq, call = %call, excluded, "call recorded");

        if let Some(rule) = registry.and_then(|registry| registry.find(&input)) {
            trace!(mock = self.name, call = %call, matcher = ?rule.matcher, "stub matched");
            rule.matcher.capture(&input);
            return match rule.call_behavior(input) {
                Output::Found(output) => Ok(Some(output)),
                Output::CallsRealImpl => Ok(None),
                Output::ErrorCalledOnce => Err(MockError::CalledMoreThanOnce {
                    method: method.to_string(),
                }),
                Output::Thrown(message) => {
                    debug!(mock = self.name, call = %call, message = %message, "stub threw");
                    Err(MockError::Thrown {
                        method: method.to_string(),
                        message,
                    })
                }
            };
        }

        if let Some(output) = defaults.and_then(|defaults| defaults.get::<O>()) {
            trace!(mock = self.name, call = %call, "answered from defaults");
            return Ok(Some(output));
        }

        debug!(mock = self.name, call = %call, "no stub matches");
        Err(MockError::UnstubbedCall { call })
    }

    /// Like [`try_call`](Self::try_call) but fails the current test on error.
    #[track_caller]
    pub fn call<I, O>(&self, method: &'static str, input: I) -> Option<O>
    where
        I: MockableArg + ArgList,
        O: MockableRet,
    {
        match self.try_call(method, input) {
            Ok(output) => output,
            Err(error) => panic!("{error}"),
        }
    }

    /// Snapshot of the recorded calls in call order.
    pub fn log(&self) -> Vec<Invocation> {
        self.state.lock().log.entries().to_vec()
    }

    /// Checks how many recorded calls match `spec`. On success those calls
    /// become verified and capture matchers in `spec` receive their arguments.
    pub fn verify(&self, spec: &CallSpec, times: impl Into<Times>) -> Result<(), MockError> {
        let times = times.into();
        let entries = self.log();
        let matched: Vec<&Invocation> = entries
            .iter()
            .filter(|invocation| spec.matches(invocation))
            .collect();
        if !times.contains(&matched.len()) {
            return Err(self.failed(MockError::CountMismatch {
                call: spec.to_string(),
                expected: times,
                actual: matched.len(),
            }));
        }
        self.verified(&matched);
        for invocation in matched {
            spec.capture(invocation);
        }
        Ok(())
    }

    /// Succeeds when the calls matching `specs` appear in that order, with any
    /// other calls allowed in between.
    pub fn verify_order(&self, specs: &[CallSpec]) -> Result<(), MockError> {
        let entries = self.log();
        let mut matched = Vec::with_capacity(specs.len());
        let mut rest = entries.as_slice();
        for spec in specs {
            let found = rest.iter().position(|invocation| spec.matches(invocation));
            let Some(offset) = found else {
                return Err(self.failed(MockError::OrderMismatch {
                    expected: describe(specs),
                    actual: describe(entries.as_slice()),
                }));
            };
            matched.push(&rest[offset]);
            rest = &rest[offset + 1..];
        }
        self.verified(&matched);
        for (spec, invocation) in specs.iter().zip(matched) {
            spec.capture(invocation);
        }
        Ok(())
    }

    /// Succeeds when the log holds exactly the calls matching `specs`, in that
    /// order and nothing else.
    pub fn verify_sequence(&self, specs: &[CallSpec]) -> Result<(), MockError> {
        let entries = self.log();
        let in_sequence = entries.len() == specs.len()
            && specs
                .iter()
                .zip(&entries)
                .all(|(spec, invocation)| spec.matches(invocation));
        if !in_sequence {
            return Err(self.failed(MockError::SequenceMismatch {
                expected: describe(specs),
                actual: describe(entries.as_slice()),
            }));
        }
        let matched: Vec<&Invocation> = entries.iter().collect();
        self.verified(&matched);
        for (spec, invocation) in specs.iter().zip(matched) {
            spec.capture(invocation);
        }
        Ok(())
    }

    /// Fails while any recorded call is neither verified nor excluded.
    pub fn confirm_verified(&self) -> Result<(), MockError> {
        let unverified: Vec<String> = self
            .state
            .lock()
            .log
            .entries()
            .iter()
            .filter(|invocation| invocation.state() == VerificationState::Unverified)
            .map(ToString::to_string)
            .collect();
        if unverified.is_empty() {
            Ok(())
        } else {
            Err(self.failed(MockError::IncompleteVerification {
                mock: self.name.to_string(),
                unverified,
            }))
        }
    }

    /// Takes calls matching `spec` out of [`confirm_verified`](Self::confirm_verified),
    /// both the ones already recorded and the ones made later.
    pub fn exclude_records(&self, spec: CallSpec) {
        let entries = {
            let mut state = self.state.lock();
            state.exclusions.push(spec.clone());
            state.log.entries().to_vec()
        };
        let seqs: Vec<u64> = entries
            .iter()
            .filter(|invocation| spec.matches(invocation))
            .map(Invocation::seq)
            .collect();
        let excluded = self.state.lock().log.exclude(seqs);
        debug!(mock = self.name, spec = %spec, excluded, "records excluded");
    }

    /// Forgets recorded calls, stubs and exclusions. Relaxed defaults stay.
    pub fn clear(&self) {
        let mut state = self.state.lock();
        state.log.clear();
        state.stubs.clear();
        state.exclusions.clear();
        debug!(mock = self.name, "cleared");
    }

    fn verified(&self, matched: &[&Invocation]) {
        let seqs = matched.iter().map(|invocation| invocation.seq());
        self.state.lock().log.mark_verified(seqs);
    }

    fn failed(&self, error: MockError) -> MockError {
        debug!(mock = self.name, %error, "verification failed");
        error
    }
}

fn describe<T: fmt::Display>(items: &[T]) -> Vec<String> {
    items.iter().map(ToString::to_string).collect()
}

impl fmt::Debug for MockHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MockHandle")
            .field("id", &self.id)
            .field("name", &self.name)
            .finish()
    }
}
