use lessen::{
    less_ast::{Conditional, Declaration, Import, RuleKind},
    Options, StyleSheet,
};

use macros::TestFs;

#[macro_use]
mod macros;

#[test]
fn parse_then_output() {
    let input = "@a: 1;\n.m(@x) { y: @x; }\na { .m(2); b: @a; }";
    let options = Options::default();

    let sheet = StyleSheet::parse(input.to_owned(), "input.less", &options).expect(input);
    let document = sheet.document();

    assert_eq!(document.path().to_str(), Some("input.less"));
    assert_eq!(document.variable("a"), Some("1"));
    assert_eq!(document.variable("x"), None);

    let rules = document.rules();
    assert_eq!(rules.len(), 2);

    assert!(rules[0].is_mixin());
    assert_eq!(rules[0].name(), ".m");
    assert!(matches!(&rules[0].kind, RuleKind::Mixin(params) if params.len() == 1));

    assert!(!rules[1].is_mixin());
    assert_eq!(rules[1].selectors, vec!["a"]);
    assert_eq!(rules[1].block.mixin_calls().count(), 1);
    assert_eq!(rules[1].block.properties().count(), 1);
    assert!(matches!(
        &rules[1].block.declarations[0],
        Declaration::MixinCall(call) if call.name == ".m" && call.args.len() == 1
    ));

    assert_eq!(sheet.output(&options).expect(input), "a { y: 2; b: 1; }\n");
}

#[test]
fn output_can_run_twice() {
    let input = "@w: 2px;\na { width: @w * 2; }";
    let options = Options::default();
    let sheet = StyleSheet::parse(input.to_owned(), "input.less", &options).expect(input);

    let first = sheet.output(&options).expect(input);
    let second = sheet.output(&options).expect(input);
    assert_eq!(first, "a { width: 4px; }\n");
    assert_eq!(first, second);
}

#[test]
fn conditions_are_kept_on_rules() {
    let input = ".x @if(1 > 0) { a: 1; }\n.x @elseif(2 > 1) { a: 2; }\n.x @else { a: 3; }";
    let options = Options::default();
    let sheet = StyleSheet::parse(input.to_owned(), "input.less", &options).expect(input);
    let rules = sheet.document().rules();

    assert!(matches!(&rules[0].condition, Some(Conditional::If(c)) if c.node == "1 > 0"));
    assert!(matches!(&rules[1].condition, Some(Conditional::ElseIf(c)) if c.node == "2 > 1"));
    assert!(matches!(&rules[2].condition, Some(Conditional::Else)));
    assert!(rules.iter().all(|rule| rule.selectors == vec![".x"]));
}

#[test]
fn at_rules_and_directives() {
    let input = "@charset \"UTF-8\";\n@media print { a { b: c; } }";
    let options = Options::default();
    let sheet = StyleSheet::parse(input.to_owned(), "input.less", &options).expect(input);
    let rules = sheet.document().rules();

    assert!(matches!(&rules[0].kind, RuleKind::Directive(text) if text == "@charset \"UTF-8\""));
    assert!(matches!(&rules[1].kind, RuleKind::AtRule(prelude) if prelude == "@media print"));
    assert_eq!(rules[1].name(), "@media print");
    assert_eq!(rules[1].block.children[0].selectors, vec!["a"]);
}

#[test]
fn imports_are_parsed_eagerly() {
    let mut fs = TestFs::new();
    fs.add_file("a.less", "@c: red;");
    fs.add_file("b.css", "p { }");

    let input = "@import \"a\";\n@import \"b.css\";";
    let options = Options::default().fs(&fs);
    let sheet = StyleSheet::parse(input.to_owned(), "input.less", &options).expect(input);
    let imports = &sheet.document().block.imports;

    assert_eq!(imports.len(), 2);
    assert!(matches!(&imports[0], Import::Stylesheet(doc) if doc.variable("c") == Some("red")));
    assert!(matches!(&imports[1], Import::Css(css) if css == "p { }"));
}

#[test]
fn parse_errors_are_reported_by_parse() {
    let options = Options::default();
    let err = StyleSheet::parse("a {".to_owned(), "input.less", &options)
        .expect_err("unclosed block");
    assert!(err.to_string().starts_with("Error: expected \"}\".\n"));
}
