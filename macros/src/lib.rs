//! Procedural macros used by chromatone to generate its color models.

use proc_macro::TokenStream;
use proc_macro2::Span;
use quote::quote;
use syn::parse::Parser;

/// Generate a color model from a struct with exactly three component fields.
///
/// The fields are made public, common derives are added and every generic
/// type parameter gets a `PhantomData` field so it can be used as a tag. The
/// model gets a `new` constructor and conversions to and from
/// `crate::color::Components`.
#[proc_macro]
pub fn gen_model(input: TokenStream) -> TokenStream {
    let mut input = syn::parse_macro_input!(input as syn::ItemStruct);

    if input.fields.len() != 3 {
        return quote! {
            compile_error!("Models must have exactly 3 fields, one for each component of the color.");
        }
        .into();
    }

    let field_names = input
        .fields
        .iter()
        .map(|f| f.ident.clone())
        .collect::<Vec<_>>();
    debug_assert!(field_names.len() == 3);

    let field1 = &field_names[0];
    let field2 = &field_names[1];
    let field3 = &field_names[2];

    input.fields.iter_mut().for_each(|f| {
        f.vis = syn::Visibility::Public(Default::default());
    });

    let attr = syn::Attribute::parse_outer
        .parse2(quote! {
            #[derive(Clone, Copy, Debug, PartialEq)]
        })
        .unwrap();
    input.attrs.extend(attr);

    let mut phantom_fields: Vec<syn::Ident> = vec![];

    if let syn::Fields::Named(ref mut named) = input.fields {
        let type_params = input
            .generics
            .params
            .iter()
            .map(|g| {
                if let syn::GenericParam::Type(type_param) = g {
                    type_param.ident.clone()
                } else {
                    panic!("unsupported generic type")
                }
            })
            .collect::<Vec<_>>();

        for ident in type_params {
            let field_name = format!("_{}", ident.to_string().to_lowercase());
            let field_name = syn::Ident::new(field_name.as_str(), Span::call_site());
            phantom_fields.push(field_name.clone());

            named.named.push(
                syn::Field::parse_named
                    .parse2(quote! {
                        #field_name: std::marker::PhantomData<#ident>
                    })
                    .unwrap(),
            );
        }
    }

    let struct_name = input.ident.clone();
    let (impl_gen, type_gen, where_clause) = input.generics.split_for_impl();

    let model_impl = quote! {
        impl #impl_gen #struct_name #type_gen #where_clause {
            /// Create a new color in this model.
            pub fn new(
                #field1: crate::color::Component,
                #field2: crate::color::Component,
                #field3: crate::color::Component,
            ) -> Self {
                Self {
                    #field1,
                    #field2,
                    #field3,
                    #(#phantom_fields: std::marker::PhantomData,)*
                }
            }

            /// Convert this model into generic components.
            pub fn to_components(&self) -> crate::color::Components {
                crate::color::Components(self.#field1, self.#field2, self.#field3)
            }

            /// Return true if all three components are finite numbers.
            pub fn is_finite(&self) -> bool {
                self.#field1.is_finite() && self.#field2.is_finite() && self.#field3.is_finite()
            }
        }

        impl #impl_gen From<crate::color::Components> for #struct_name #type_gen #where_clause {
            fn from(value: crate::color::Components) -> Self {
                Self::new(value.0, value.1, value.2)
            }
        }

        impl #impl_gen From<#struct_name #type_gen> for crate::color::Components #where_clause {
            fn from(value: #struct_name #type_gen) -> Self {
                value.to_components()
            }
        }
    };

    quote! {
        #input
        #model_impl
    }
    .into()
}
