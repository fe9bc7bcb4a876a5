#[macro_use]
mod macros;

test!(
    simple_rule,
    "a {\n  color: red;\n}\n",
    "a { color: red; }\n"
);
test!(
    several_rules,
    "a { color: red; }\n\nb, c { margin: 0 auto; padding: 1px 2px 3px 4px; }",
    "a { color: red; }\nb, c { margin: 0 auto; padding: 1px 2px 3px 4px; }\n"
);
test!(
    last_declaration_without_semicolon,
    "a { color: red; width: 1px }",
    "a { color: red; width: 1px; }\n"
);
test!(
    repeated_property_is_kept,
    "a { color: red; color: blue; }",
    "a { color: red; color: blue; }\n"
);
test!(empty_rule_is_not_written, "a { }", "");
test!(empty_input, "", "");
test!(
    block_comments_are_removed,
    "/* header */\na { /* inline */ color: red; }",
    "a { color: red; }\n"
);
test!(
    line_comments_are_removed,
    "// header\na {\n  color: red; // trailing\n}",
    "a { color: red; }\n"
);
test!(
    semicolon_inside_string,
    "a { content: \"a;b\"; }",
    "a { content: \"a;b\"; }\n"
);
test!(
    braces_inside_string,
    "a { content: \"{}\"; }",
    "a { content: \"{}\"; }\n"
);
test!(
    comment_markers_inside_string,
    "a { content: \"/* not a comment */\"; }",
    "a { content: \"/* not a comment */\"; }\n"
);
test!(
    important_is_kept,
    "a { color: red !important; }",
    "a { color: red !important; }\n"
);
test!(
    attribute_and_pseudo_selectors,
    "input[type=\"text\"]:focus, a:not(.b, .c) { x: y; }",
    "input[type=\"text\"]:focus, a:not(.b, .c) { x: y; }\n"
);
test!(
    stray_semicolons_are_ignored,
    ";a { ; color: red;; }",
    "a { color: red; }\n"
);
test!(
    charset_directive,
    "@charset \"UTF-8\";\na { b: c; }",
    "@charset \"UTF-8\";\na { b: c; }\n"
);
test!(
    url_import_is_passed_through,
    "@import url(foo.css);",
    "@import url(foo.css);\n"
);
test!(
    import_with_media_list_is_passed_through,
    "@import \"print.css\" print;",
    "@import \"print.css\" print;\n"
);
test!(
    remote_import_is_passed_through,
    "@import \"https://example.com/a.css\";",
    "@import \"https://example.com/a.css\";\n"
);
