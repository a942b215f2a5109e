use proc_macro::TokenStream;
use quote::quote;
use syn::spanned::Spanned;
use syn::{parse_macro_input, FnArg, ItemFn, Pat, PatType, Type};

fn unsupported_type_msg(arg_name: &str, arg_pos: usize, fn_name: &str) -> String {
    format!(
        "Expected argument {} ('{}') of {} to be f64",
        arg_pos, arg_name, fn_name
    )
}

fn is_f64(ty: &Type) -> bool {
    match ty {
        Type::Path(type_path) => type_path
            .path
            .segments
            .last()
            .map(|segment| segment.ident == "f64")
            .unwrap_or(false),
        _ => false,
    }
}

/// Turns `fn name(a: f64, b: f64) -> Result<f64, ExpressionError>` into
/// `fn name(args: &[f64]) -> Result<f64, ExpressionError>` that checks the
/// argument count before binding each slot to its parameter name.
#[proc_macro_attribute]
pub fn math_fn(_attr: TokenStream, item: TokenStream) -> TokenStream {
    let input = parse_macro_input!(item as ItemFn);
    let fn_vis = &input.vis;
    let fn_name = &input.sig.ident;
    let fn_args = &input.sig.inputs;
    let fn_body = &input.block;
    let fn_output = &input.sig.output;
    let fn_attrs = &input.attrs;

    let mut arg_bindings = Vec::new();

    for (i, arg) in fn_args.iter().enumerate() {
        let FnArg::Typed(PatType { pat, ty, .. }) = arg else {
            return syn::Error::new(arg.span(), "math_fn does not support receivers")
                .to_compile_error()
                .into();
        };

        let arg_name = match **pat {
            Pat::Ident(ref ident) => &ident.ident,
            _ => {
                return syn::Error::new(pat.span(), "math_fn expects plain identifiers")
                    .to_compile_error()
                    .into()
            }
        };

        if !is_f64(ty) {
            let msg = unsupported_type_msg(&arg_name.to_string(), i, &fn_name.to_string());
            return syn::Error::new(ty.span(), msg).to_compile_error().into();
        }

        arg_bindings.push(quote! {
            let #arg_name: f64 = args[#i];
        });
    }

    let args_len = arg_bindings.len();
    let name_str = fn_name.to_string();
    let expanded = quote! {
        #(#fn_attrs)*
        #fn_vis fn #fn_name(args: &[f64]) #fn_output {
            if args.len() != #args_len {
                return Err(::mathengine_rs::ExpressionError::ArgumentCount {
                    name: #name_str.to_string(),
                    expected: #args_len,
                    actual: args.len(),
                });
            }

            #(#arg_bindings)*

            #fn_body
        }
    };

    TokenStream::from(expanded)
}
