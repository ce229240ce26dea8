use proc_macro::TokenStream;
use proc_macro_error::proc_macro_error;
use syn::parse_macro_input;

mod common;
mod declare;
mod register;

#[proc_macro_error]
#[proc_macro]
pub fn declare_enum(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as declare::DeclareEnum);
    declare::expand(input).into()
}

#[proc_macro_error]
#[proc_macro]
pub fn register_enum(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as register::RegisterEnum);
    register::expand(input).into()
}
