use proc_macro2::{Span, TokenStream};
use quote::quote;
use syn::{Ident, ItemTrait, TraitItem};

use crate::attrs::MockAttr;
use crate::method;

pub(crate) fn transform(attr: &MockAttr, input: ItemTrait) -> syn::Result<TokenStream> {
    if !input.generics.params.is_empty() {
        return Err(syn::Error::new_spanned(
            &input.generics,
            "generic traits cannot be mocked",
        ));
    }

    let trait_ident = &input.ident;
    let trait_name = trait_ident.to_string();
    let mock_ident = Ident::new(&format!("Mock{}", trait_ident), Span::call_site());
    let vis = &input.vis;
    let mut items = Vec::new();
    let mut locators = Vec::new();
    for item in &input.items {
        let TraitItem::Fn(method) = item else {
            return Err(syn::Error::new_spanned(
                item,
                "only methods are supported in a mocked trait",
            ));
        };
        let method = method::transform(&trait_name, attr, method)?;
        items.push(method.item);
        locators.extend(method.locator);
    }

    Ok(quote! {
        #input

        #[derive(Clone, Debug)]
        #vis struct #mock_ident {
            pub mock: verimock::MockHandle,
        }

        impl Default for #mock_ident {
            fn default() -> Self {
                Self {
                    mock: verimock::MockHandle::new(#trait_name),
                }
            }
        }

        impl verimock::AsMock for #mock_ident {
            fn mock_handle(&self) -> &verimock::MockHandle {
                &self.mock
            }
        }

        impl #trait_ident for #mock_ident {
            #(#items)*
        }

        impl #mock_ident {
            pub fn relaxed(defaults: verimock::Defaults) -> Self {
                Self {
                    mock: verimock::MockHandle::relaxed(#trait_name, defaults),
                }
            }

            #(#locators)*
        }
    })
}
