use codemap::{Span, Spanned};

use crate::{
    ast::Conditional,
    utils::{collapse_whitespace, matching_open_paren, split_top_level},
};

/// Split a comma separated selector list. Commas inside `:not(a, b)` and
/// similar do not split.
pub(crate) fn split_selector_list(selector: &str) -> Vec<String> {
    split_top_level(selector, ',')
        .into_iter()
        .map(collapse_whitespace)
        .filter(|s| !s.is_empty())
        .collect()
}

/// Combine every parent selector with every child selector, parents outermost.
///
/// `&` in a child stands for the parent. A child starting with `:`, `>` or
/// `+` is attached to the parent without a space; anything else becomes a
/// descendant selector. Without parents, children are returned unchanged.
pub(crate) fn compose_selectors(parents: &[String], children: &[String]) -> Vec<String> {
    if parents.is_empty() {
        return children.to_vec();
    }

    if children.is_empty() {
        return parents.to_vec();
    }

    let mut composed = Vec::with_capacity(parents.len() * children.len());

    for parent in parents {
        for child in children {
            composed.push(if child.contains('&') {
                child.replace('&', parent)
            } else if child.starts_with([':', '>', '+']) {
                format!("{}{}", parent, child)
            } else {
                format!("{} {}", parent, child)
            });
        }
    }

    composed
}

/// Strip a trailing `@if(...)`, `@elseif(...)` or `@else` from a rule's
/// prelude. `prelude` must already have its whitespace collapsed.
pub(crate) fn split_condition(prelude: &str, span: Span) -> (String, Option<Conditional>) {
    if prelude == "@else" {
        return (String::new(), Some(Conditional::Else));
    }

    if let Some(selector) = prelude.strip_suffix(" @else") {
        return (selector.to_owned(), Some(Conditional::Else));
    }

    if let Some(open) = matching_open_paren(prelude) {
        let head = prelude[..open].trim_end();
        let condition = Spanned {
            node: prelude[open + 1..prelude.len() - 1].trim().to_owned(),
            span,
        };

        if let Some(selector) = keyword_prefix(head, "@elseif") {
            return (selector, Some(Conditional::ElseIf(condition)));
        }

        if let Some(selector) = keyword_prefix(head, "@if") {
            return (selector, Some(Conditional::If(condition)));
        }
    }

    (prelude.to_owned(), None)
}

/// The selector before a trailing `keyword`, which must stand on its own
fn keyword_prefix(head: &str, keyword: &str) -> Option<String> {
    let selector = head.strip_suffix(keyword)?;

    if selector.is_empty() || selector.ends_with(' ') {
        Some(selector.trim_end().to_owned())
    } else {
        None
    }
}
