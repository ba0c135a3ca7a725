/// Derive macro generating an implementation of the trait `Position`.
///
/// The struct must have a field named `position` whose type implements `Position`. Both
/// `Position` and `Point` must be in scope where the macro is used.
#[proc_macro_derive(Position)]
pub fn position_derive(input: proc_macro::TokenStream) -> proc_macro::TokenStream {
    let ast = syn::parse(input);

    impl_position(ast).unwrap_or_else(|e| syn::Error::to_compile_error(&e).into())
}

fn impl_position(input: syn::Result<syn::DeriveInput>) -> syn::Result<proc_macro::TokenStream> {
    let mut input = input?;

    let position_ty = get_position_type(&input.data)?;

    input
        .generics
        .make_where_clause()
        .predicates
        .push(syn::parse_quote! {
            #position_ty: Position
        });

    let name = &input.ident;
    let (impl_generics, ty_generics, where_clause) = input.generics.split_for_impl();

    Ok(quote::quote! {
        impl #impl_generics Position for #name #ty_generics #where_clause {
            #[inline]
            fn position(&self) -> Point {
                Position::position(&self.position)
            }
        }
    }
    .into())
}

fn get_position_type(data: &syn::Data) -> syn::Result<syn::Type> {
    match data {
        syn::Data::Struct(struct_data) => struct_data
            .fields
            .iter()
            .find_map(|field| (field.ident.as_ref()? == "position").then(|| field.ty.clone()))
            .ok_or_else(|| syn::Error::new_spanned(&struct_data.fields, "no `position` field")),
        syn::Data::Enum(enum_data) => Err(syn::Error::new_spanned(
            enum_data.enum_token,
            "the `Position` trait can only be derived for struct types",
        )),
        syn::Data::Union(union_data) => Err(syn::Error::new_spanned(
            union_data.union_token,
            "the `Position` trait can only be derived for struct types",
        )),
    }
}
