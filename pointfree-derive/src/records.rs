//! Implementation of the `#[derive(IntoRecord)]` macro.

use proc_macro::TokenStream;
use proc_macro2::TokenStream as TokenStream2;
use quote::quote;
use syn::{parse_macro_input, parse_quote, Data, DeriveInput, Field, Fields, LitStr};

/// Main implementation of the `IntoRecord` derive macro.
pub fn derive_into_record_impl(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);
    TokenStream::from(expand(&input).unwrap_or_else(syn::Error::into_compile_error))
}

/// Options read from `#[record(...)]` on a field.
#[derive(Default)]
struct FieldOptions {
    rename: Option<String>,
    skip: bool,
}

fn field_options(field: &Field) -> syn::Result<FieldOptions> {
    let mut options = FieldOptions::default();
    for attribute in &field.attrs {
        if !attribute.path().is_ident("record") {
            continue;
        }
        attribute.parse_nested_meta(|meta| {
            if meta.path.is_ident("rename") {
                let key: LitStr = meta.value()?.parse()?;
                options.rename = Some(key.value());
                Ok(())
            } else if meta.path.is_ident("skip") {
                options.skip = true;
                Ok(())
            } else {
                Err(meta.error("unsupported record attribute, expected `rename` or `skip`"))
            }
        })?;
    }
    Ok(options)
}

fn expand(input: &DeriveInput) -> syn::Result<TokenStream2> {
    let name = &input.ident;

    let named = match &input.data {
        Data::Struct(data_struct) => match &data_struct.fields {
            Fields::Named(named) => named,
            Fields::Unnamed(_) => {
                return Err(syn::Error::new_spanned(
                    name,
                    "IntoRecord can only be derived for structs with named fields, not tuple structs.",
                ));
            }
            Fields::Unit => {
                return Err(syn::Error::new_spanned(
                    name,
                    "IntoRecord cannot be derived for unit structs (structs with no fields).",
                ));
            }
        },
        Data::Enum(_) => {
            return Err(syn::Error::new_spanned(
                name,
                "IntoRecord can only be derived for structs, not enums.",
            ));
        }
        Data::Union(_) => {
            return Err(syn::Error::new_spanned(name, "IntoRecord cannot be derived for unions."));
        }
    };

    let mut entries = Vec::new();
    let mut generics = input.generics.clone();
    for field in &named.named {
        let options = field_options(field)?;
        if options.skip {
            continue;
        }
        let Some(field_name) = field.ident.as_ref() else {
            continue;
        };
        let key = options.rename.unwrap_or_else(|| field_name.to_string());
        let field_type = &field.ty;
        generics
            .make_where_clause()
            .predicates
            .push(parse_quote!(#field_type: ::core::convert::Into<::pointfree::Value>));
        entries.push(quote! {
            (#key, ::core::convert::Into::<::pointfree::Value>::into(source.#field_name))
        });
    }

    let (impl_generics, type_generics, where_clause) = generics.split_for_impl();

    Ok(quote! {
        impl #impl_generics ::core::convert::From<#name #type_generics> for ::pointfree::Value #where_clause {
            fn from(source: #name #type_generics) -> Self {
                let fields: ::std::vec::Vec<(&'static str, ::pointfree::Value)> = ::std::vec![#(#entries),*];
                ::pointfree::Value::record(fields)
            }
        }
    })
}
