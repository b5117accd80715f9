use proc_macro::TokenStream;
use quote::quote;
use syn::{Fields, ItemStruct, parse_macro_input, punctuated::Punctuated};

/// Adds an auto-increment `id` primary key plus `created_at`/`updated_at`
/// columns to a sea-orm `Model`, and implements `TimestampedActiveModel` and
/// `HasIdColumn` from `crate::db::dao::base_traits` for the generated
/// `ActiveModel` and `Entity`.
#[proc_macro_attribute]
pub fn base_entity(attr: TokenStream, item: TokenStream) -> TokenStream {
    if !attr.is_empty() {
        return syn::Error::new(
            proc_macro2::Span::call_site(),
            "base_entity takes no arguments",
        )
        .to_compile_error()
        .into();
    }

    let mut input = parse_macro_input!(item as ItemStruct);
    let Fields::Named(fields) = &mut input.fields else {
        return syn::Error::new_spanned(input, "base_entity requires a struct with named fields")
            .to_compile_error()
            .into();
    };

    let reserved = ["id", "created_at", "updated_at"];
    if let Some(clash) = fields
        .named
        .iter()
        .filter_map(|field| field.ident.as_ref())
        .find(|ident| reserved.contains(&ident.to_string().as_str()))
    {
        return syn::Error::new_spanned(clash, "field is generated by base_entity")
            .to_compile_error()
            .into();
    }

    let mut new_fields: Punctuated<syn::Field, syn::Token![,]> = Punctuated::new();
    new_fields.push(syn::parse_quote! {
        #[sea_orm(primary_key)]
        pub id: i32
    });
    new_fields.extend(fields.named.iter().cloned());
    new_fields.push(syn::parse_quote! {
        pub created_at: sea_orm::entity::prelude::DateTimeWithTimeZone
    });
    new_fields.push(syn::parse_quote! {
        pub updated_at: sea_orm::entity::prelude::DateTimeWithTimeZone
    });
    fields.named = new_fields;

    let expanded = quote! {
        #input

        impl crate::db::dao::base_traits::TimestampedActiveModel for ActiveModel {
            fn set_created_at(&mut self, ts: sea_orm::entity::prelude::DateTimeWithTimeZone) {
                self.created_at = sea_orm::ActiveValue::Set(ts);
            }

            fn set_updated_at(&mut self, ts: sea_orm::entity::prelude::DateTimeWithTimeZone) {
                self.updated_at = sea_orm::ActiveValue::Set(ts);
            }
        }

        impl crate::db::dao::base_traits::HasIdColumn for Entity {
            fn id_column() -> Column {
                Column::Id
            }
        }
    };

    expanded.into()
}
