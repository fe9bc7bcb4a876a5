#[macro_use]
mod macros;

test!(
    descendant,
    ".a { .b { c: d; } }",
    ".a .b { c: d; }\n"
);
test!(
    parent_properties_come_first,
    "a { color: red; b { color: blue; } }",
    "a { color: red; }\na b { color: blue; }\n"
);
test!(
    properties_after_nested_rule_stay_with_parent,
    "a { b { x: 1; } y: 2; }",
    "a { y: 2; }\na b { x: 1; }\n"
);
test!(
    selector_lists_multiply,
    ".a, .b { .c, .d { x: y; } }",
    ".a .c, .a .d, .b .c, .b .d { x: y; }\n"
);
test!(
    ampersand_pseudo_class,
    "a { &:hover { x: y; } }",
    "a:hover { x: y; }\n"
);
test!(
    ampersand_suffix,
    ".btn { &-primary { x: y; } }",
    ".btn-primary { x: y; }\n"
);
test!(
    ampersand_after_context,
    ".a { .no-js & { x: y; } }",
    ".no-js .a { x: y; }\n"
);
test!(
    bare_pseudo_class_attaches,
    "a { :hover { x: y } }",
    "a:hover { x: y; }\n"
);
test!(
    child_combinator_attaches,
    "ul { > li { x: y; } }",
    "ul> li { x: y; }\n"
);
test!(
    deep_nesting,
    "a { b { c { d { x: y; } } } }",
    "a b c d { x: y; }\n"
);
test!(
    selector_whitespace_is_collapsed,
    "a,\n  b\n  {\n  c   d { x: y; }\n}",
    "a c d, b c d { x: y; }\n"
);
test!(
    empty_parent_is_not_written,
    ".a { }\n.b { .c { } }",
    ""
);
