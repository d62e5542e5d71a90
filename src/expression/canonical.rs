/// Split `expr` at every character accepted by `is_separator` that sits
/// outside parentheses. Each piece is returned with the separator that
/// preceded it (`None` for the first piece).
fn split_top_level(expr: &str, is_separator: impl Fn(char) -> bool) -> Vec<(Option<char>, String)> {
    let mut pieces = Vec::new();
    let mut current = String::new();
    let mut separator = None;
    let mut depth = 0usize;

    for c in expr.chars() {
        match c {
            '(' => {
                depth += 1;
                current.push(c);
            }
            ')' => {
                depth = depth.saturating_sub(1);
                current.push(c);
            }
            _ if depth == 0 && is_separator(c) => {
                if current.is_empty() && pieces.is_empty() {
                    // leading sign of the first term
                    separator = Some(c);
                } else {
                    pieces.push((separator, std::mem::take(&mut current)));
                    separator = Some(c);
                }
            }
            _ => current.push(c),
        }
    }

    if !current.is_empty() {
        pieces.push((separator, current));
    }
    pieces
}

/// True when the opening parenthesis at the start of `term` closes at its end
fn is_fully_wrapped(term: &str) -> bool {
    if !(term.starts_with('(') && term.ends_with(')')) {
        return false;
    }

    let mut depth = 0usize;
    let last = term.len() - 1;
    for (i, c) in term.char_indices() {
        match c {
            '(' => depth += 1,
            ')' => depth = depth.saturating_sub(1),
            _ => {}
        }
        if depth == 0 && i < last {
            return false;
        }
    }
    true
}

fn strip_outer_parens(mut term: &str) -> &str {
    while is_fully_wrapped(term) {
        term = &term[1..term.len() - 1];
    }
    term
}

/// Sort the factors of a pure product. Terms with a division are returned
/// as they are, since division does not commute.
fn normalise_term(term: &str) -> String {
    let term = strip_outer_parens(term);
    if term.contains('/') || !term.contains('*') {
        return term.to_string();
    }

    let mut factors: Vec<String> = split_top_level(term, |c| c == '*')
        .into_iter()
        .map(|(_, factor)| factor)
        .collect();
    factors.sort();
    factors.join("*")
}

/// Normalized key used to detect duplicate solutions.
///
/// Whitespace is removed, the expression is split into signed top-level
/// terms, each pure product has its factors sorted, and the terms are
/// emitted positive-first in sorted order, every one carrying its sign.
/// `3 + 2` and `2 + 3` share a key; `2 * 3` and `6` do not.
pub fn canonical_key(expression: &str) -> String {
    let compact: String = expression.chars().filter(|c| !c.is_whitespace()).collect();

    let mut positive = Vec::new();
    let mut negative = Vec::new();
    for (sign, term) in split_top_level(&compact, |c| c == '+' || c == '-') {
        let term = normalise_term(&term);
        if sign == Some('-') {
            negative.push(term);
        } else {
            positive.push(term);
        }
    }
    positive.sort();
    negative.sort();

    let mut key = String::with_capacity(compact.len() + 1);
    for term in positive {
        key.push('+');
        key.push_str(&term);
    }
    for term in negative {
        key.push('-');
        key.push_str(&term);
    }
    key
}
