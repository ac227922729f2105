use proc_macro2::{Span, TokenStream};
use quote::quote;
use syn::Ident;

use crate::alphabets::alphabets;
use crate::MAX_ARGS;

pub(crate) fn create() -> TokenStream {
    let items = alphabets(0..MAX_ARGS + 1).map(|args| {
        let (args, types): (Vec<_>, Vec<_>) = args
            .iter()
            .map(|name| {
                (
                    Ident::new(&name.to_lowercase(), Span::call_site()),
                    Ident::new(name, Span::call_site()),
                )
            })
            .unzip();
        let behavior_name = Ident::new(&format!("Behavior{}", args.len()), Span::call_site());
        quote! {
            #[doc(hidden)]
            pub struct #behavior_name<I, O>(std::sync::Arc<dyn Fn(I) -> O + Send + Sync + 'static>);

            impl<Func, O, #(#types),*> From<Func> for #behavior_name<(#(#types,)*), O>
            where
                Func: Fn(#(#types),*) -> O + Send + Sync + 'static,
            {
                fn from(function: Func) -> Self {
                    #behavior_name(std::sync::Arc::new(move |(#(#args,)*)| function(#(#args),*)))
                }
            }

            impl<I, O> From<#behavior_name<I, O>> for Behavior<I, O> {
                fn from(behavior: #behavior_name<I, O>) -> Self {
                    Behavior::Function(behavior.0)
                }
            }
        }
    });
    quote![#(#items)*]
}
