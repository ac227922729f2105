//! Mocks for traits, with argument matchers, captures and call verification.
//!
//! ```
//! use verimock::{any, or, CaptureSlot};
//!
//! #[verimock::mock]
//! trait Car {
//!     fn drive(&self, direction: String, speed: u64) -> String;
//! }
//!
//! let car = MockCar::default();
//! car.mock_drive("North", any()).returns("Driving north".to_string());
//!
//! assert_eq!(car.drive("North".to_string(), 30), "Driving north");
//!
//! let speed = CaptureSlot::new();
//! car.mock_drive(or(["North".to_string(), "South".to_string()]), verimock::capture(&speed))
//!     .assert_called(1);
//! assert_eq!(speed.captured(), Some(30));
//! verimock::confirm_verified(&car);
//! ```

mod call_spec;
mod capture;
mod defaults;
mod error;
mod handle;
mod invocation;
mod locator;
mod mockable;
mod registry;
mod rule;
mod times;

pub use call_spec::*;
pub use capture::*;
pub use defaults::*;
pub use error::*;
pub use handle::*;
pub use invocation::{Invocation, VerificationState};
pub use locator::*;
pub use mockable::*;
pub use rule::*;
pub use times::*;
pub use verimock_macros::mock;
pub use ArgMatcher::Any;

/// Gives access to the [`MockHandle`] behind a generated mock.
pub trait AsMock {
    fn mock_handle(&self) -> &MockHandle;
}

impl AsMock for MockHandle {
    fn mock_handle(&self) -> &MockHandle {
        self
    }
}

/// Creates a strict mock, the same as `Default::default()`.
pub fn create_mock<T: AsMock + Default>() -> T {
    T::default()
}

/// Fails the test unless the calls matching `specs` were made in that order.
#[track_caller]
pub fn verify_order(mock: &impl AsMock, specs: &[CallSpec]) {
    if let Err(error) = mock.mock_handle().verify_order(specs) {
        panic!("{error}");
    }
}

/// Fails the test unless the calls matching `specs` are all the calls the
/// mock received, in that order.
#[track_caller]
pub fn verify_sequence(mock: &impl AsMock, specs: &[CallSpec]) {
    if let Err(error) = mock.mock_handle().verify_sequence(specs) {
        panic!("{error}");
    }
}

/// Fails the test while any call on the mock is neither verified nor excluded.
#[track_caller]
pub fn confirm_verified(mock: &impl AsMock) {
    if let Err(error) = mock.mock_handle().confirm_verified() {
        panic!("{error}");
    }
}

pub fn exclude_records(mock: &impl AsMock, spec: CallSpec) {
    mock.mock_handle().exclude_records(spec);
}
