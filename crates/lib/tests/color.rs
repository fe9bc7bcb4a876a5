#[macro_use]
mod macros;

test!(
    hex_color_is_written_as_is,
    "a { color: #FFF; background: #00ff00; }",
    "a { color: #FFF; background: #00ff00; }\n"
);
test!(
    named_color_is_written_as_is,
    "a { color: red; }",
    "a { color: red; }\n"
);
test!(
    add_two_colors,
    "a { color: #111 + #222; }",
    "a { color: #333333; }\n"
);
test!(
    channels_are_clamped,
    "a { color: #000000 + #ffffff + #ffffff; }",
    "a { color: #ffffff; }\n"
);
test!(
    add_number_to_color,
    "a { color: #ff0000 + 10; }",
    "a { color: #ff0a0a; }\n"
);
test!(
    divide_color,
    "a { color: #888 / 2; }",
    "a { color: #444444; }\n"
);
test!(
    subtract_from_rgb_function,
    "a { color: rgb(255, 0, 0) - #010000; }",
    "a { color: #fe0000; }\n"
);
test!(
    rgb_function_alone_is_unchanged,
    "a { color: rgb(10, 20, 30); }",
    "a { color: rgb(10, 20, 30); }\n"
);
test!(
    alpha_is_added_and_clamped,
    "a { color: rgba(10, 20, 30, 0.5) + #0a0a0a; }",
    "a { color: rgba(20, 30, 40, 1); }\n"
);
test!(
    color_variable_arithmetic,
    "@base: #101010;\na { color: @base * 2; }",
    "a { color: #202020; }\n"
);
error!(
    four_digit_hex_in_expression,
    "a { color: #abcd + 1; }",
    "Error: Invalid color format inside expression \"#abcd\"."
);
error!(
    color_plus_length,
    "a { color: #fff + 1px; }",
    "Error: Mixing units inside expression (\"color\" and \"px\")."
);
