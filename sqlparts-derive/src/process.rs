use deluxe::ExtractAttributes;
use syn::ext::IdentExt;

pub struct Output {
    pub key: Option<String>,
    pub columns: Vec<String>,
    pub uuid_columns: Vec<String>,
}

#[derive(ExtractAttributes, Default, Debug)]
#[deluxe(attributes(field))]
struct RecordField {
    key: Option<bool>,
    uuid: Option<bool>,
    column: Option<String>,
    skip: Option<bool>,
}

pub fn process_fields(fields: &syn::punctuated::Punctuated<syn::Field, syn::Token![,]>) -> Output {
    let mut key = None;
    let mut columns = Vec::new();
    let mut uuid_columns = Vec::new();

    for field in fields {
        let attributes = RecordField::extract_attributes(&mut field.clone()).unwrap_or_default();
        if attributes.skip.unwrap_or(false) {
            continue;
        }
        let column = column_name(field, &attributes);

        if attributes.key.unwrap_or(false) {
            if key.is_some() {
                panic!("Record derive macro supports a single `key` field");
            }
            key = Some(column.clone());
        }
        if attributes.uuid.unwrap_or(false) {
            uuid_columns.push(column.clone());
        }
        columns.push(column);
    }

    Output {
        key,
        columns,
        uuid_columns,
    }
}

fn column_name(field: &syn::Field, attributes: &RecordField) -> String {
    match &attributes.column {
        Some(column) => column.clone(),
        None => field
            .ident
            .as_ref()
            .map(|ident| ident.unraw().to_string())
            .expect("named fields always have an identifier"),
    }
}
