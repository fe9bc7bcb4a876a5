#[macro_use]
mod macros;

test!(min, "a { width: min(3px, 1px, 5px); }", "a { width: 1px; }\n");
test!(max, "a { width: max(10%, 20%); }", "a { width: 20%; }\n");
test!(avg, "a { width: avg(1px, 2px, 3px); }", "a { width: 2px; }\n");
test!(avg_unitless, "a { width: avg(1, 2); }", "a { width: 1.5; }\n");
test!(
    unitless_arguments_take_the_shared_unit,
    "a { width: max(1, 2px); }",
    "a { width: 2px; }\n"
);
test!(ceil, "a { width: ceil(1.2px); }", "a { width: 2px; }\n");
test!(floor, "a { width: floor(1.8em); }", "a { width: 1em; }\n");
test!(round, "a { width: round(1.5px); }", "a { width: 2px; }\n");
test!(
    round_with_precision,
    "a { width: round(3.14159, 2); }",
    "a { width: 3.14; }\n"
);
test!(
    round_with_huge_precision,
    "a { width: round(1.5, 400); }",
    "a { width: 1.5; }\n"
);
test!(
    builtin_arguments_are_evaluated,
    "@a: 5px;\na { width: max(@a * 2, 2px); }",
    "a { width: 10px; }\n"
);
test!(
    nested_builtins,
    "a { width: round(avg(1, 2)); }",
    "a { width: 2; }\n"
);
test!(
    builtin_result_takes_part_in_arithmetic,
    "a { width: max(1px, 2px) + 1px; }",
    "a { width: 3px; }\n"
);
test!(
    lighten,
    "a { color: lighten(#808080, 10%); }",
    "a { color: #999999; }\n"
);
test!(
    darken,
    "a { color: darken(#ff0000, 20%); }",
    "a { color: #cc0000; }\n"
);
test!(
    greyscale,
    "a { color: greyscale(#ff0000); }",
    "a { color: #4c4c4c; }\n"
);
test!(
    if_true,
    "a { b: if(1 > 0, yes, no); }",
    "a { b: yes; }\n"
);
test!(
    if_false,
    "a { b: if(2 < 1, yes, no); }",
    "a { b: no; }\n"
);
test!(
    if_compares_lengths,
    "@w: 10px;\na { b: if(@w >= 5px, wide, narrow); }",
    "a { b: wide; }\n"
);
test!(
    if_without_condition_is_written_as_is,
    "a { b: if(foo, yes, no); }",
    "a { b: if(foo, yes, no); }\n"
);
test!(
    unknown_function_is_written_as_is,
    "a { transform: rotate(45deg) scale(1.5); }",
    "a { transform: rotate(45deg) scale(1.5); }\n"
);
test!(
    arithmetic_inside_unknown_function_is_not_evaluated,
    "a { b: foo(1px + 1px); }",
    "a { b: foo(1px + 1px); }\n"
);
test!(
    builtin_inside_unknown_function,
    "a { transform: translate(max(1px, 3px), 0); }",
    "a { transform: translate(3px, 0); }\n"
);
test!(
    url_is_written_as_is,
    "a { background: url(http://example.com/a.png) no-repeat; }",
    "a { background: url(http://example.com/a.png) no-repeat; }\n"
);
error!(
    min_with_different_units,
    "a { width: min(1px, 2em); }",
    "Error: Calling function with several different units (\"px\" and \"em\")."
);
