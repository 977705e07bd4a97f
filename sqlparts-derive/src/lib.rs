use proc_macro::TokenStream;
use quote::quote;
use syn::{parse_macro_input, Data, DeriveInput, Fields};

mod process;

/// Implements `sqlparts::db::record::Record` from `#[field(...)]` attributes.
///
/// * `key = true` marks the primary key column.
/// * `uuid = true` fills the column with a fresh UUID on create.
/// * `column = "name"` overrides the column name (pair it with
///   `#[sqlx(rename = "name")]` so rows still decode).
/// * `skip = true` leaves the field out of the selected columns.
#[proc_macro_derive(Record, attributes(field))]
pub fn record_derive(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);
    let name = input.ident;
    let (impl_generics, ty_generics, where_clause) = input.generics.split_for_impl();

    let fields = match input.data {
        Data::Struct(ref data) => match data.fields {
            Fields::Named(ref fields) => &fields.named,
            _ => panic!("Record derive macro only supports structs with named fields"),
        },
        _ => panic!("Record derive macro only supports structs"),
    };

    let process::Output {
        key,
        columns,
        uuid_columns,
    } = process::process_fields(fields);

    let key = match key {
        Some(key) => quote! { ::core::option::Option::Some(#key) },
        None => quote! { ::core::option::Option::None },
    };

    let expanded = quote! {
        impl #impl_generics ::sqlparts::db::record::Record for #name #ty_generics #where_clause {
            const COLUMNS: &'static [&'static str] = &[#(#columns),*];
            const KEY: ::core::option::Option<&'static str> = #key;
            const UUID_COLUMNS: &'static [&'static str] = &[#(#uuid_columns),*];
        }
    };

    expanded.into()
}
