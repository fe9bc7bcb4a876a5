#[macro_use]
mod macros;

test!(addition, "a { width: 2px + 3px; }", "a { width: 5px; }\n");
test!(subtraction, "a { width: 1px - 2px; }", "a { width: -1px; }\n");
test!(
    unitless_operand_takes_the_other_unit,
    "a { width: 2 * 3em; }",
    "a { width: 6em; }\n"
);
test!(division, "a { width: 10px / 4; }", "a { width: 2.5px; }\n");
test!(
    multiplication_binds_tighter,
    "a { width: 1 + 2 * 3; }",
    "a { width: 7; }\n"
);
test!(
    parentheses_group,
    "a { width: (1 + 2) * 3px; }",
    "a { width: 9px; }\n"
);
test!(
    parenthesized_operand_is_unwrapped,
    "a { width: (5px) * 2; }",
    "a { width: 10px; }\n"
);
test!(percentage_times_number, "a { width: 50% * 2; }", "a { width: 100%; }\n");
test!(percentage_addition, "a { width: 10% + 5%; }", "a { width: 15%; }\n");
test!(
    percentage_scales_a_length,
    "a { width: 10px * 50%; }",
    "a { width: 5px; }\n"
);
test!(
    repeating_decimal,
    "a { width: 1px / 3; }",
    "a { width: 0.3333333333px; }\n"
);
test!(
    negative_numbers_and_hyphens_are_not_subtraction,
    "a { margin: -5px 1px-2px; }",
    "a { margin: -5px 1px-2px; }\n"
);
test!(
    font_shorthand_slash_is_not_division,
    "a { font: 12px/1.5 sans-serif; }",
    "a { font: 12px/1.5 sans-serif; }\n"
);
test!(
    division_by_zero_is_left_alone,
    "a { width: 10px / 0; }",
    "a { width: 10px / 0; }\n"
);
test!(
    keyword_operand_is_left_alone,
    "a { width: auto + 1px; }",
    "a { width: auto + 1px; }\n"
);
test!(
    operation_with_variables,
    "@gutter: 20px;\n@columns: 4;\na { width: @gutter * @columns - 5px; }",
    "a { width: 75px; }\n"
);
test!(
    operations_inside_a_list,
    "@m: 4px;\na { margin: @m * 2 @m / 2; }",
    "a { margin: 8px 2px; }\n"
);
test!(
    media_feature_group_is_kept,
    "a { b: (max-width: 10px); }",
    "a { b: (max-width: 10px); }\n"
);
error!(
    mixing_units,
    "a { width: 2px + 3em; }",
    "Error: Mixing units inside expression (\"px\" and \"em\")."
);
error!(
    mixing_units_across_variables,
    "@a: 1px;\n@b: 2em;\na { width: @a + @b; }",
    "Error: Mixing units inside expression (\"px\" and \"em\")."
);
