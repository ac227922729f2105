use std::any::Any;
use std::fmt;
use std::sync::Arc;

/// Where an invocation stands with respect to `confirm_verified`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VerificationState {
    Unverified,
    Verified,
    Excluded,
}

/// One recorded call on a mock. Never mutated after it is logged, apart from
/// its verification state.
#[derive(Clone)]
pub struct Invocation {
    pub(crate) seq: u64,
    pub(crate) method: &'static str,
    pub(crate) args: Arc<dyn Any + Send + Sync>,
    pub(crate) description: String,
    pub(crate) state: VerificationState,
}

impl Invocation {
    /// Position of the call in the mock's log, starting at zero.
    pub fn seq(&self) -> u64 {
        self.seq
    }

    pub fn method(&self) -> &'static str {
        self.method
    }

    /// The argument tuple, when `I` is the method's argument type.
    pub fn args<I: 'static>(&self) -> Option<&I> {
        self.args.downcast_ref()
    }

    pub fn state(&self) -> VerificationState {
        self.state
    }

    pub fn is_verified(&self) -> bool {
        self.state == VerificationState::Verified
    }
}

impl fmt::Display for Invocation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.description)
    }
}

impl fmt::Debug for Invocation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Invocation")
            .field("seq", &self.seq)
            .field("call", &self.description)
            .field("state", &self.state)
            .finish()
    }
}

/// Append-only, call-ordered log of one mock.
#[derive(Default)]
pub(crate) struct InvocationLog {
    entries: Vec<Invocation>,
    next_seq: u64,
}

impl InvocationLog {
    pub(crate) fn push(
        &mut self,
        method: &'static str,
        args: Arc<dyn Any + Send + Sync>,
        description: String,
        state: VerificationState,
    ) -> u64 {
        let seq = self.next_seq;
        self.next_seq += 1;
        self.entries.push(Invocation {
            seq,
            method,
            args,
            description,
            state,
        });
        seq
    }

    pub(crate) fn entries(&self) -> &[Invocation] {
        &self.entries
    }

    fn entry_mut(&mut self, seq: u64) -> Option<&mut Invocation> {
        let index = usize::try_from(seq).ok()?;
        self.entries
            .get_mut(index)
            .filter(|invocation| invocation.seq == seq)
    }

    pub(crate) fn mark_verified(&mut self, seqs: impl IntoIterator<Item = u64>) {
        for seq in seqs {
            if let Some(invocation) = self.entry_mut(seq) {
                invocation.state = VerificationState::Verified;
            }
        }
    }

    /// Moves the unverified entries among `seqs` to `Excluded`, returning how
    /// many changed.
    pub(crate) fn exclude(&mut self, seqs: impl IntoIterator<Item = u64>) -> usize {
        let mut excluded = 0;
        for seq in seqs {
            if let Some(invocation) = self.entry_mut(seq) {
                if invocation.state == VerificationState::Unverified {
                    invocation.state = VerificationState::Excluded;
                    excluded += 1;
                }
            }
        }
        excluded
    }

    pub(crate) fn clear(&mut self) {
        self.entries.clear();
        self.next_seq = 0;
    }
}
