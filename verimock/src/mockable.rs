use std::fmt::Debug;

#[diagnostic::on_unimplemented(
    message = "`{Self}` is not a mockable argument list because it is not `Clone + PartialEq + Debug + Send + Sync + 'static`",
    note = "Consider `#[verimock::mock(skip_args(YourType))]` to leave the argument out of recording and matching"
)]
pub trait MockableArg: Clone + PartialEq + Debug + Send + Sync + 'static {}

#[diagnostic::on_unimplemented(
    message = "`{Self}` is not a mockable output because it is not `Send + 'static`"
)]
pub trait MockableRet: Send + 'static {}

impl<T: Clone + PartialEq + Debug + Send + Sync + 'static> MockableArg for T {}

impl<T: Send + 'static> MockableRet for T {}
