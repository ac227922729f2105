use thiserror::Error;

use crate::Times;

/// Everything that can go wrong while a mock is exercised or verified.
///
/// Each variant is reported as soon as it is detected. Generated mock methods
/// and the free verification helpers turn it into a panic carrying the
/// `Display` text, which fails only the current test.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum MockError {
    /// No stub matches the call and the mock has no relaxed default for the
    /// return type.
    #[error("mock not found for {call}")]
    UnstubbedCall { call: String },

    /// A `returns_once` answer was consumed and the call matched it again.
    #[error("{method} was called more than once")]
    CalledMoreThanOnce { method: String },

    /// The matching stub was configured to fail the call.
    #[error("{message}")]
    Thrown { method: String, message: String },

    #[error("Expected {call} to be called {expected} times, but it was called {actual} times")]
    CountMismatch {
        call: String,
        expected: Times,
        actual: usize,
    },

    #[error("calls were not made in the expected order\n  expected (in order): {}\n  actual: {}", .expected.join(", "), .actual.join(", "))]
    OrderMismatch {
        expected: Vec<String>,
        actual: Vec<String>,
    },

    #[error("calls do not match the expected sequence\n  expected: {}\n  actual: {}", .expected.join(", "), .actual.join(", "))]
    SequenceMismatch {
        expected: Vec<String>,
        actual: Vec<String>,
    },

    #[error("{mock} has unverified calls: {}", .unverified.join(", "))]
    IncompleteVerification {
        mock: String,
        unverified: Vec<String>,
    },
}
