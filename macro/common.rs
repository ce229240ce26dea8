use derive_syn_parse::Parse;
use proc_macro2::{Span, TokenStream as TokenStream2};
use proc_macro_error::abort;
use syn::parse::ParseStream;
use syn::*;
use template_quote::quote;

const REPRS: &[&str] = &[
    "i8", "i16", "i32", "i64", "isize", "u8", "u16", "u32", "u64", "usize",
];

/// Trailing `@ path::to::rich_enum`.
#[derive(Parse)]
struct CratePath {
    _at: Token![@],
    path: Path,
}

pub(crate) fn parse_crate_path(input: ParseStream) -> Result<Option<Path>> {
    if !input.peek(Token![@]) {
        return Ok(None);
    }
    let krate: CratePath = input.parse()?;
    if !input.is_empty() {
        return Err(input.error("Unexpected token"));
    }
    Ok(Some(krate.path))
}

pub(crate) fn crate_path(krate: Option<Path>) -> Path {
    krate.unwrap_or(parse_quote! {::rich_enum})
}

/// Optional `: repr` after the type name.
pub(crate) fn parse_repr(input: ParseStream) -> Result<Option<Ident>> {
    if input.peek(Token![:]) && !input.peek(Token![::]) {
        input.parse::<Token![:]>()?;
        Ok(Some(input.parse()?))
    } else {
        Ok(None)
    }
}

pub(crate) fn repr_or_default(repr: Option<Ident>) -> Ident {
    match repr {
        Some(repr) if REPRS.contains(&repr.to_string().as_str()) => repr,
        Some(repr) => abort!(
            repr,
            "Unsupported representation `{}`, expected one of {}",
            repr,
            REPRS.join(", ")
        ),
        None => Ident::new("i32", Span::call_site()),
    }
}

/// Fails const evaluation when a schema row does not fit `repr`.
pub(crate) fn check_range(krate: &Path, schema: &TokenStream2, repr: &Ident) -> TokenStream2 {
    quote! {
        if let ::core::result::Result::Err(err) = #krate::schema::check_range(
            &#schema,
            <#repr as #krate::Repr>::MIN_I128,
            <#repr as #krate::Repr>::MAX_I128,
        ) {
            err.abort()
        }
    }
}

/// `impl RichEnum`, with `entries` as `(name, value)` constant expressions in declaration order.
pub(crate) fn impl_rich_enum(
    krate: &Path,
    ty: &Path,
    type_name: &str,
    repr: &Ident,
    entries: &[(TokenStream2, TokenStream2)],
) -> TokenStream2 {
    quote! {
        impl #krate::RichEnum for #ty {
            type Repr = #repr;
            const TYPE_NAME: &'static ::core::primitive::str = #type_name;
            const ENTRIES: &'static [#krate::Entry<Self>] = &[
                #(for (name, value) in entries) {
                    #krate::Entry::new(#name, #value),
                }
            ];
            fn to_repr(self) -> #repr {
                self as #repr
            }
            fn lookup_table() -> &'static #krate::LookupTable<Self> {
                static TABLE: #krate::__private::Lazy<#krate::LookupTable<#ty>> =
                    #krate::__private::Lazy::new(|| {
                        #krate::LookupTable::new(<#ty as #krate::RichEnum>::ENTRIES)
                    });
                &TABLE
            }
        }
    }
}
