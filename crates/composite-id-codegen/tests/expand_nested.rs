use composite_id_codegen::generate;
use pretty_assertions::assert_eq;
use quote::{quote, ToTokens};

fn order_entity() -> proc_macro2::TokenStream {
    quote! {
        pub struct Order {
            #[belongs_to(key = "customer_id")]
            customer: BelongsTo<Customer>,
            #[id(custom = "id")]
            id: Option<i64>,
            prop: String,
        }
    }
}

fn parse(out: proc_macro2::TokenStream) -> syn::File {
    syn::parse2(out).expect("generated code must parse")
}

fn find_struct<'a>(file: &'a syn::File, name: &str) -> &'a syn::ItemStruct {
    file.items
        .iter()
        .find_map(|item| match item {
            syn::Item::Struct(item) if item.ident == name => Some(item),
            _ => None,
        })
        .unwrap_or_else(|| panic!("struct `{name}` not generated"))
}

fn field_names(item: &syn::ItemStruct) -> Vec<String> {
    item.fields
        .iter()
        .map(|field| field.ident.as_ref().unwrap().to_string())
        .collect()
}

fn generated_impls(file: &syn::File) -> Vec<&syn::ItemImpl> {
    file.items
        .iter()
        .filter_map(|item| match item {
            syn::Item::Const(item) => Some(item),
            _ => None,
        })
        .filter_map(|item| match item.expr.as_ref() {
            syn::Expr::Block(block) => Some(&block.block.stmts),
            _ => None,
        })
        .flatten()
        .filter_map(|stmt| match stmt {
            syn::Stmt::Item(syn::Item::Impl(item)) => Some(item),
            _ => None,
        })
        .collect()
}

fn method_names(file: &syn::File, self_ty: &str) -> Vec<String> {
    generated_impls(file)
        .into_iter()
        .filter(|item| item.trait_.is_none())
        .filter(|item| item.self_ty.to_token_stream().to_string() == self_ty)
        .flat_map(|item| &item.items)
        .filter_map(|item| match item {
            syn::ImplItem::Fn(item) => Some(item.sig.ident.to_string()),
            _ => None,
        })
        .collect()
}

#[test]
fn key_type_follows_declaration_order() {
    // Key references deliberately reversed; the synthesized type follows the
    // entity's declaration order, not the argument order.
    let out = generate(quote!(using(id, customer)), order_entity()).unwrap();
    let file = parse(out);

    let key = find_struct(&file, "OrderId");
    assert_eq!(field_names(key), ["customer", "id"]);

    let tys: Vec<String> = key
        .fields
        .iter()
        .map(|field| field.ty.to_token_stream().to_string())
        .collect();

    // Relation type retained; identifier's `Option` stripped.
    assert_eq!(tys, ["BelongsTo < Customer >", "i64"]);
}

#[test]
fn keyed_shape_and_accessors_generated() {
    let out = generate(quote!(using(customer, id)), order_entity()).unwrap();
    let file = parse(out);

    let composite = find_struct(&file, "OrderComposite");
    assert_eq!(field_names(composite), ["id", "prop"]);
    assert_eq!(
        composite.fields.iter().next().unwrap().ty.to_token_stream().to_string(),
        ":: std :: option :: Option < OrderId >"
    );

    assert_eq!(method_names(&file, "Order"), ["composite_id", "composite"]);
    assert_eq!(method_names(&file, "OrderComposite"), ["flat"]);
}

#[test]
fn flat_struct_reemitted_without_helper_attributes() {
    let out = generate(quote!(using(customer, id)), order_entity()).unwrap();
    let file = parse(out);

    let flat = find_struct(&file, "Order");
    assert_eq!(field_names(flat), ["customer", "id", "prop"]);

    for field in &flat.fields {
        assert!(field.attrs.is_empty(), "helper attribute left on {:?}", field.ident);
    }
}

#[test]
fn storage_keys_in_declaration_order() {
    let out = generate(quote!(using(customer, id)), order_entity()).unwrap();
    let file = parse(out);

    let metadata = generated_impls(&file)
        .into_iter()
        .find(|item| {
            item.trait_
                .as_ref()
                .is_some_and(|(_, path, _)| path.segments.last().unwrap().ident == "CompositeKey")
        })
        .expect("CompositeKey impl not generated")
        .to_token_stream()
        .to_string();

    let customer = metadata.find("\"customer_id\"").expect("customer_id missing");
    let id = metadata.find("\"id\"").expect("id missing");
    assert!(customer < id);
}

#[test]
fn key_and_carry_over_sets_are_disjoint_and_complete() {
    let out = generate(quote!(using(customer, id)), order_entity()).unwrap();
    let file = parse(out);

    let mut names = field_names(find_struct(&file, "OrderId"));
    names.extend(
        field_names(find_struct(&file, "OrderComposite"))
            .into_iter()
            .filter(|name| name != "id"),
    );

    names.sort();
    assert_eq!(names, ["customer", "id", "prop"]);
}

#[test]
fn duplicate_key_references_are_deduplicated() {
    let out = generate(quote!(using(customer, id, customer)), order_entity()).unwrap();
    let file = parse(out);

    assert_eq!(field_names(find_struct(&file, "OrderId")), ["customer", "id"]);
}

#[test]
fn string_key_references_accepted() {
    let out = generate(quote!(using("$customer", "$id")), order_entity()).unwrap();
    let file = parse(out);

    assert_eq!(field_names(find_struct(&file, "OrderId")), ["customer", "id"]);
}

#[test]
fn output_is_deterministic() {
    let a = generate(quote!(using(customer, id)), order_entity()).unwrap();
    let b = generate(quote!(using(customer, id)), order_entity()).unwrap();

    assert_eq!(a.to_string(), b.to_string());
}
