use indoc::indoc;
use typeweave_core::{DefinitionMap, Error, Literal, Node};

use super::{
    DeclarationConfig, DeclarationEmitter, Keyword, Printer, PropertySignature, TypeNode,
    TypeScriptPrinter, print_module,
};

fn print(node: &Node) -> String {
    let definitions = DefinitionMap::new();
    let ty = DeclarationEmitter::new(&definitions).emit(node).unwrap();
    TypeScriptPrinter::default().print_type(&ty)
}

#[test]
fn keywords_and_builtins() {
    let nodes = [
        Node::String,
        Node::Number,
        Node::Boolean,
        Node::Null,
        Node::Undefined,
        Node::Void,
        Node::Any,
        Node::Unknown,
        Node::Never,
        Node::BigInt,
        Node::Date,
        Node::RegExp,
    ];
    let out: Vec<String> = nodes.iter().map(print).collect();
    insta::assert_snapshot!(out.join("\n"), @r"
    string
    number
    boolean
    null
    undefined
    void
    any
    unknown
    never
    bigint
    Date
    RegExp
    ");
}

#[test]
fn literals() {
    let nodes = [
        Node::literal("it's \"quoted\""),
        Node::literal(-3.5),
        Node::literal(true),
        Node::literal(Literal::Null),
    ];
    let out: Vec<String> = nodes.iter().map(print).collect();
    insta::assert_snapshot!(out.join("\n"), @r#"
    "it's \"quoted\""
    -3.5
    true
    null
    "#);
}

#[test]
fn non_finite_number_literal_is_unsupported() {
    let definitions = DefinitionMap::new();
    let err = DeclarationEmitter::new(&definitions)
        .emit(&Node::literal(f64::INFINITY))
        .unwrap_err();
    assert!(matches!(err, Error::UnsupportedFeature { .. }));
}

#[test]
fn optional_property_marker() {
    let definitions = DefinitionMap::new();
    let node = Node::object([
        ("name", Node::String),
        ("age", Node::optional(Node::Number)),
        ("gone", Node::Undefined),
    ]);
    let ty = DeclarationEmitter::new(&definitions).emit(&node).unwrap();
    assert_eq!(
        ty,
        TypeNode::TypeLiteral(vec![
            PropertySignature {
                name: "name".into(),
                optional: false,
                ty: TypeNode::Keyword(Keyword::String),
            },
            PropertySignature {
                name: "age".into(),
                optional: true,
                ty: TypeNode::Keyword(Keyword::Number),
            },
            PropertySignature {
                name: "gone".into(),
                optional: true,
                ty: TypeNode::Keyword(Keyword::Undefined),
            },
        ])
    );
}

#[test]
fn containers() {
    let nodes = [
        Node::array(Node::String),
        Node::set(Node::Number),
        Node::map(Node::String, Node::Boolean),
        Node::record(Node::String, Node::Number),
        Node::tuple(vec![Node::String, Node::optional(Node::Number)]).unwrap(),
    ];
    let out: Vec<String> = nodes.iter().map(print).collect();
    insta::assert_snapshot!(out.join("\n"), @r"
    string[]
    Set<number>
    Map<string, boolean>
    Record<string, number>
    [string, number?]
    ");
}

#[test]
fn functions() {
    let nodes = [
        Node::function(vec![Node::String, Node::Number], Some(Node::Boolean)),
        Node::function(vec![], None),
    ];
    let out: Vec<String> = nodes.iter().map(print).collect();
    insta::assert_snapshot!(out.join("\n"), @r"
    (args_0: string, args_1: number) => boolean
    () => void
    ");
}

#[test]
fn single_member_union_collapses() {
    let node = Node::union(vec![Node::String]).unwrap();
    assert_eq!(print(&node), "string");
}

#[test]
fn unresolved_reference() {
    let definitions = DefinitionMap::new();
    let err = DeclarationEmitter::new(&definitions)
        .emit(&Node::reference("Missing", None))
        .unwrap_err();
    assert!(matches!(err, Error::UnresolvedReference(id) if id == "Missing"));
}

#[test]
fn recursive_module() {
    let mut definitions = DefinitionMap::new();
    definitions.insert(
        "Tree",
        Node::object([
            ("value", Node::String),
            ("children", Node::array(Node::reference("Tree", None))),
        ]),
        Some("Tree".into()),
    );
    let out = print_module(
        &Node::reference("Tree", None),
        "Root",
        &definitions,
        DeclarationConfig::default(),
    )
    .unwrap();
    assert_eq!(
        out,
        indoc! {"
            export type Tree = {
              value: string;
              children: Tree[];
            };
            export type Root = Tree;
        "}
    );
}
