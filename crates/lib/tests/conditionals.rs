#[macro_use]
mod macros;

test!(
    if_taken,
    ".x @if(1 > 0) { a: 1; }\n.x @elseif(2 > 1) { a: 2; }\n.x @else { a: 3; }",
    ".x { a: 1; }\n"
);
test!(
    elseif_taken,
    ".x @if(1 > 2) { a: 1; }\n.x @elseif(2 > 1) { a: 2; }\n.x @else { a: 3; }",
    ".x { a: 2; }\n"
);
test!(
    else_taken,
    ".x @if(1 > 2) { a: 1; }\n.x @else { a: 3; }",
    ".x { a: 3; }\n"
);
test!(
    nothing_taken,
    ".x @if(1 > 2) { a: 1; }\n.x @elseif(1 > 3) { a: 2; }",
    ""
);
test!(
    condition_with_variable,
    "@w: 10px;\n.x @if(@w > 5px) { c: d; }",
    ".x { c: d; }\n"
);
test!(
    condition_with_units_and_equality,
    ".x @if(10px == 10) { c: d; }",
    ".x { c: d; }\n"
);
test!(
    condition_with_colors,
    ".x @if(#fff != #000) { c: d; }",
    ".x { c: d; }\n"
);
test!(
    condition_uses_enclosing_variables,
    "@w: 1px;\n.a {\n  @w: 10px;\n  .b @if(@w >= 10px) { c: d; }\n}",
    ".a .b { c: d; }\n"
);
test!(
    conditional_without_selector_uses_parent,
    ".x { width: 1px; @if(2 > 1) { color: red; } }",
    ".x { width: 1px; }\n.x { color: red; }\n"
);
test!(
    false_branch_hides_nested_rules,
    ".x @if(1 > 2) { .y { a: 1; } }",
    ""
);
test!(
    lone_else_is_skipped,
    ".x @else { a: 1; }",
    ""
);
test!(
    malformed_condition_is_false,
    ".x @if(foo) { a: 1; }\n.x @else { a: 2; }",
    ".x { a: 2; }\n"
);
test!(
    unconditional_rule_ends_the_chain,
    ".x @if(1 > 2) { a: 1; }\n.y { b: 2; }\n.x @else { a: 3; }",
    ".y { b: 2; }\n"
);
test!(
    second_chain_is_independent,
    ".x @if(1 > 0) { a: 1; }\n.y @if(1 > 0) { b: 2; }\n.y @else { b: 3; }",
    ".x { a: 1; }\n.y { b: 2; }\n"
);
error!(
    color_compared_with_number,
    ".x @if(#fff > 1) { a: 1; }",
    "Error: Cannot compare a color with a number in \"#fff > 1\"."
);
