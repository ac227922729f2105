mod alphabets;
mod attrs;
mod create_behaviors;
mod create_matchers;
mod item_trait;
mod method;

use attrs::MockAttr;
use darling::{ast::NestedMeta, FromMeta};
use syn::{parse_macro_input, ItemTrait};

/// Largest number of recorded arguments a mocked method can have.
pub(crate) const MAX_ARGS: usize = 6;

/// Generates `Mock<Trait>` for a trait.
///
/// Options: `skip_fns(a, b)` keeps the default bodies of the listed methods,
/// `skip_args(T, U)` leaves arguments of the listed types out of recording
/// and matching, `debug` prints the generated code.
#[proc_macro_attribute]
pub fn mock(
    attribute: proc_macro::TokenStream,
    input: proc_macro::TokenStream,
) -> proc_macro::TokenStream {
    let attr = match NestedMeta::parse_meta_list(attribute.into())
        .map_err(darling::Error::from)
        .and_then(|list| MockAttr::from_list(&list))
    {
        Ok(attr) => attr,
        Err(err) => return err.write_errors().into(),
    };
    let input = parse_macro_input!(input as ItemTrait);
    match item_trait::transform(&attr, input) {
        Ok(token_stream) => {
            if attr.debug.is_present() {
                eprintln!("{}", token_stream);
            }
            token_stream.into()
        }
        Err(err) => err.to_compile_error().into(),
    }
}

#[doc(hidden)]
#[proc_macro]
pub fn create_behaviors(_: proc_macro::TokenStream) -> proc_macro::TokenStream {
    create_behaviors::create().into()
}

#[doc(hidden)]
#[proc_macro]
pub fn create_matchers(_: proc_macro::TokenStream) -> proc_macro::TokenStream {
    create_matchers::create().into()
}
