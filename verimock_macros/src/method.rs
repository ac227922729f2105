use proc_macro2::{Span, TokenStream};
use quote::{quote, ToTokens};
use syn::{FnArg, Ident, Pat, PatIdent, PatType, ReturnType, TraitItemFn, Type};

use crate::attrs::MockAttr;
use crate::MAX_ARGS;

/// The trait impl item of one method and, for methods taking `self`, its
/// `mock_<method>` locator.
pub(crate) struct MockMethod {
    pub item: TokenStream,
    pub locator: Option<TokenStream>,
}

pub(crate) fn transform(
    trait_name: &str,
    attr: &MockAttr,
    method: &TraitItemFn,
) -> syn::Result<MockMethod> {
    let ident = &method.sig.ident;
    let name = format!("{}::{}", trait_name, ident);
    if !method.sig.generics.params.is_empty() {
        return Err(syn::Error::new_spanned(
            &method.sig.generics,
            format!("{name}: generic methods cannot be mocked"),
        ));
    }

    let has_receiver = matches!(method.sig.inputs.first(), Some(FnArg::Receiver(_)));
    if attr.should_skip_method(ident) || !has_receiver {
        return Ok(MockMethod {
            item: real_impl_only(&name, attr, method)?,
            locator: None,
        });
    }

    let mut sig = method.sig.clone();
    let mut bindings = Vec::new();
    let mut recorded = Vec::new();
    let mut skipped_args = false;
    let typed_inputs = sig.inputs.iter_mut().filter_map(|input| match input {
        FnArg::Typed(input) => Some(input),
        FnArg::Receiver(_) => None,
    });
    for (index, input) in typed_inputs.enumerate() {
        let arg = bind_ident(input, index, &mut bindings);
        if attr.test_skip_args(&input.ty) {
            skipped_args = true;
        } else {
            recorded.push(recorded_arg(arg, &input.ty));
        }
    }
    if recorded.len() > MAX_ARGS {
        return Err(syn::Error::new_spanned(
            &method.sig.inputs,
            format!("{name}: at most {MAX_ARGS} arguments can be recorded"),
        ));
    }

    let output_type = match &sig.output {
        ReturnType::Default => quote![()],
        ReturnType::Type(_, ty) => quote![#ty],
    };
    let real_impl = match &method.default {
        Some(block) => block.to_token_stream(),
        None => {
            let message = format!("{name} has no real implementation");
            quote![panic!(#message)]
        }
    };
    let attrs = &method.attrs;
    let allow_unused = if skipped_args {
        quote![#[allow(unused_variables)]]
    } else {
        TokenStream::default()
    };
    let values = recorded.iter().map(|arg| &arg.value);
    let bindings = bindings.iter().map(|(pat, arg)| quote![let #pat = #arg;]);
    let item = quote! {
        #(#attrs)*
        #allow_unused
        #sig {
            match self.mock.call::<_, #output_type>(#name, (#(#values,)*)) {
                Some(out) => out,
                None => {
                    #(#bindings)*
                    #real_impl
                }
            }
        }
    };

    let mock_ident = Ident::new(&format!("mock_{}", ident), Span::call_site());
    let allow_non_snake_case = if ident.to_string().starts_with('_') {
        quote![#[allow(non_snake_case)]]
    } else {
        TokenStream::default()
    };
    let params = recorded.iter().map(|arg| {
        let (ident, ty) = (&arg.ident, &arg.ty);
        quote![#ident: impl Into<verimock::ArgMatcher<#ty>>]
    });
    let into_matchers = recorded.iter().map(|arg| {
        let ident = &arg.ident;
        quote![#ident.into()]
    });
    let types: Vec<_> = recorded.iter().map(|arg| &arg.ty).collect();
    let input_type_tuple = quote![(#(#types,)*)];
    let behavior_name = Ident::new(&format!("Behavior{}", types.len()), Span::call_site());
    let locator = quote! {
        #allow_non_snake_case
        pub fn #mock_ident(&self, #(#params),*) -> verimock::MockLocator<#input_type_tuple, #output_type, verimock::#behavior_name<#input_type_tuple, #output_type>> {
            verimock::MockLocator::new(&self.mock, #name, (#(#into_matchers,)*).into())
        }
    };

    Ok(MockMethod {
        item,
        locator: Some(locator),
    })
}

/// Skipped methods and functions without `self` keep their default body.
fn real_impl_only(name: &str, attr: &MockAttr, method: &TraitItemFn) -> syn::Result<TokenStream> {
    let sig = &method.sig;
    let attrs = &method.attrs;
    match &method.default {
        Some(block) => Ok(quote![#(#attrs)* #sig #block]),
        None if attr.should_skip_method(&sig.ident) => Err(syn::Error::new_spanned(
            sig,
            format!("{name} is skipped and needs a default body"),
        )),
        None => {
            let message = format!("{name} is not mocked because it has no receiver");
            Ok(quote![#(#attrs)* #sig { unimplemented!(#message) }])
        }
    }
}

struct RecordedArg {
    ident: Ident,
    ty: TokenStream,
    value: TokenStream,
}

/// Names the argument, renaming patterns that are not a plain identifier and
/// remembering them so the default body can still destructure.
fn bind_ident(input: &mut PatType, index: usize, bindings: &mut Vec<(Box<Pat>, Ident)>) -> Ident {
    if let Pat::Ident(pat) = &*input.pat {
        return pat.ident.clone();
    }
    let arg = Ident::new(&format!("arg{}", index), Span::call_site());
    let pat = std::mem::replace(
        &mut input.pat,
        Box::new(Pat::Ident(PatIdent {
            attrs: Default::default(),
            by_ref: Default::default(),
            mutability: Default::default(),
            ident: arg.clone(),
            subpat: Default::default(),
        })),
    );
    bindings.push((pat, arg.clone()));
    arg
}

/// Owned type and cloning expression of a recorded argument: `&str` becomes
/// `String`, `&[T]` becomes `Vec<T>` and `&T` becomes `T`.
fn recorded_arg(ident: Ident, ty: &Type) -> RecordedArg {
    let (ty, value) = match ty {
        ty if is_str(ty) => (quote![String], quote![#ident.to_string()]),
        Type::Reference(reference) => match &*reference.elem {
            Type::Slice(slice) => {
                let elem = &slice.elem;
                (quote![Vec<#elem>], quote![#ident.to_vec()])
            }
            elem => (quote![#elem], quote![(*#ident).clone()]),
        },
        ty => (quote![#ty], quote![#ident.clone()]),
    };
    RecordedArg { ident, ty, value }
}

pub(crate) fn is_str(ty: &Type) -> bool {
    match ty {
        Type::Reference(ty) => {
            if let Type::Path(path) = &*ty.elem {
                if let Some(ident) = path.path.get_ident() {
                    return ident == "str";
                }
            }
            false
        }
        _ => false,
    }
}
