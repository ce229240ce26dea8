use derive_syn_parse::Parse;
use proc_macro2::TokenStream as TokenStream2;
use proc_macro_error::abort;
use syn::ext::IdentExt;
use syn::parse::ParseStream;
use syn::punctuated::Punctuated;
use syn::*;
use template_quote::quote;

use crate::common;

/// `NAME => Enum::Variant`
#[derive(Parse)]
struct Mapping {
    name: Expr,
    _arrow: Token![=>],
    value: Expr,
}

pub(crate) struct RegisterEnum {
    ty: Path,
    repr: Option<Ident>,
    mappings: Punctuated<Mapping, Token![,]>,
    krate: Option<Path>,
}

impl parse::Parse for RegisterEnum {
    fn parse(input: ParseStream) -> Result<Self> {
        let ty = input.parse()?;
        let repr = common::parse_repr(input)?;
        let content;
        braced!(content in input);
        let mappings = content.parse_terminated(<Mapping as parse::Parse>::parse)?;
        let krate = common::parse_crate_path(input)?;
        if !input.is_empty() {
            return Err(input.error("Unexpected token"));
        }
        Ok(Self {
            ty,
            repr,
            mappings,
            krate,
        })
    }
}

pub(crate) fn expand(input: RegisterEnum) -> TokenStream2 {
    let RegisterEnum {
        ty,
        repr,
        mappings,
        krate,
    } = input;
    let type_name = match ty.segments.last() {
        Some(segment) if segment.arguments.is_empty() => segment.ident.unraw().to_string(),
        _ => abort!(ty, "Expected a path to a fieldless enum"),
    };
    if mappings.is_empty() {
        abort!(ty, "`{}` must register at least one entry", type_name);
    }

    let krate = common::crate_path(krate);
    let repr = common::repr_or_default(repr);
    let entries: Vec<_> = mappings
        .iter()
        .map(|mapping| {
            let (name, value) = (&mapping.name, &mapping.value);
            (quote! { #name }, quote! { #value })
        })
        .collect();
    let schema = quote! { SCHEMA };

    quote! {
        const _: () = {
            const SCHEMA: [#krate::schema::Resolved; #{mappings.len()}] = [
                #(for mapping in &mappings) {
                    #krate::schema::Resolved::new(
                        #{&mapping.name},
                        #{&mapping.value} as ::core::primitive::i128,
                    ),
                }
            ];
            if let ::core::result::Result::Err(err) = #krate::schema::check_names(&SCHEMA) {
                err.abort()
            }
            #{common::check_range(&krate, &schema, &repr)}
        };

        #{common::impl_rich_enum(&krate, &ty, &type_name, &repr, &entries)}
    }
}
