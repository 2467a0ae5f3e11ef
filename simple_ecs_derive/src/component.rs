use quote::{format_ident, quote};
use proc_macro::TokenStream;
use syn::DeriveInput;

pub fn impl_component(ast: &DeriveInput) -> TokenStream {
    let name = &ast.ident;

    // One identity per concrete type: a generic type would share a single static.
    if !ast.generics.params.is_empty() {
        return syn::Error::new_spanned(
            &ast.generics,
            "#[derive(Component)] does not support generic types",
        )
        .to_compile_error()
        .into();
    }

    let name_str = name.to_string().to_uppercase();
    let id_name = format_ident!("__SIMPLE_ECS_COMPONENT_ID_OF_{}", name_str);

    let gen = quote! {
        simple_ecs::lazy_static! {
            #[allow(non_upper_case_globals)]
            static ref #id_name: simple_ecs::components::ComponentId =
                simple_ecs::components::next_component_id();
        }

        impl simple_ecs::components::Component for #name {
            #[inline(always)]
            fn component_id() -> simple_ecs::components::ComponentId {
                *#id_name
            }
        }
    };
    gen.into()
}
