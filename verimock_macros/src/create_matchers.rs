use proc_macro2::{Span, TokenStream};
use quote::quote;
use syn::{Ident, Index};

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
        let matcher_name = Ident::new(&format!("Matcher{}", args.len()), Span::call_site());
        let indices: Vec<_> = (0..args.len()).map(Index::from).collect();
        let trait_bounds: Vec<_> = types
            .iter()
            .map(|ty| quote![#ty: PartialEq + Debug + Send + Sync + 'static])
            .collect();
        let debug_bounds: Vec<_> = types.iter().map(|ty| quote![#ty: Debug]).collect();
        quote! {
            #[doc(hidden)]
            pub struct #matcher_name<#(#types),*>(#(ArgMatcher<#types>),*);

            impl<#(#trait_bounds),*> Match<(#(#types,)*)> for #matcher_name<#(#types),*> {
                fn matches(&self, (#(#args,)*): &(#(#types,)*)) -> bool {
                    true #(&& self.#indices.matches(#args))*
                }

                fn capture(&self, (#(#args,)*): &(#(#types,)*)) {
                    #(self.#indices.capture(#args);)*
                }

                fn describe(&self) -> String {
                    let parts: Vec<String> = vec![#(format!("{:?}", self.#indices)),*];
                    parts.join(", ")
                }
            }

            impl<#(#trait_bounds),*> From<(#(ArgMatcher<#types>,)*)> for Matcher<(#(#types,)*)> {
                fn from((#(#args,)*): (#(ArgMatcher<#types>,)*)) -> Self {
                    Matcher::from_match(#matcher_name(#(#args),*))
                }
            }

            impl<#(#debug_bounds),*> ArgList for (#(#types,)*) {
                fn describe(&self) -> String {
                    let (#(#args,)*) = self;
                    let parts: Vec<String> = vec![#(format!("{:?}", #args)),*];
                    parts.join(", ")
                }
            }
        }
    });
    quote![#(#items)*]
}
