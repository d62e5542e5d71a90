use crate::expression::operator::Operator;

/// Operators that appear outside any parentheses in a rendered expression
pub(crate) fn top_level_operators(expr: &str) -> Vec<Operator> {
    let mut depth = 0usize;
    let mut previous = None;
    let mut found = Vec::new();
    let mut chars = expr.chars().peekable();

    // binary operators are always rendered as " op "
    while let Some(c) = chars.next() {
        match c {
            '(' => depth += 1,
            ')' => depth = depth.saturating_sub(1),
            _ if depth == 0 && previous == Some(' ') && chars.peek() == Some(&' ') => {
                if let Some(op) = Operator::from_symbol(c) {
                    found.push(op);
                }
            }
            _ => {}
        }
        previous = Some(c);
    }

    found
}

fn parenthesize(expr: &str) -> String {
    format!("({})", expr)
}

fn render_power_chain(chain: &[i64]) -> String {
    let Some((first, rest)) = chain.split_first() else {
        return String::new();
    };

    let mut rendered = first.to_string();
    for (position, exponent) in rest.iter().enumerate() {
        // the evaluator folds exponents left to right, spell that out
        if position > 0 {
            rendered = parenthesize(&rendered);
        }
        rendered = format!("{} ^ {}", rendered, exponent);
    }
    rendered
}

/// A multiplicative run between two additive operators
#[derive(Debug, Default)]
struct Term {
    text: String,
    has_product: bool,
}

/// Render `numbers` joined by `operators` with minimal, precedence-correct
/// parentheses.
///
/// When the expression has several additive terms, each term that contains a
/// multiplication or division is grouped: `2 + (3 * 4)`. A lone product is
/// left bare. Exponent chains longer than two are grouped to the left so the
/// text re-evaluates to the same value as [`evaluate`](super::evaluate).
pub fn format_sequence(numbers: &[i64], operators: &[Operator]) -> String {
    let Some((first, rest)) = numbers.split_first() else {
        return String::new();
    };

    let mut terms: Vec<(Option<Operator>, Term)> = Vec::new();
    let mut sign = None;
    let mut term = Term::default();
    let mut chain = vec![*first];

    for (&op, &number) in operators.iter().zip(rest) {
        if op == Operator::Exponentiate {
            chain.push(number);
            continue;
        }

        term.text.push_str(&render_power_chain(&chain));
        chain = vec![number];

        if op.is_multiplicative() {
            term.text.push_str(&format!(" {} ", op));
            term.has_product = true;
        } else {
            terms.push((sign, std::mem::take(&mut term)));
            sign = Some(op);
        }
    }
    term.text.push_str(&render_power_chain(&chain));
    terms.push((sign, term));

    let group_products = terms.len() > 1;
    let mut rendered = String::new();
    for (sign, term) in terms {
        if let Some(op) = sign {
            rendered.push_str(&format!(" {} ", op));
        }
        if group_products && term.has_product {
            rendered.push_str(&parenthesize(&term.text));
        } else {
            rendered.push_str(&term.text);
        }
    }
    rendered
}

fn wrap_if(expr: &str, wrap: bool) -> String {
    if wrap {
        parenthesize(expr)
    } else {
        expr.to_string()
    }
}

/// Wrap `expr` when it has a top-level `+` or `-`. This keeps its grouping
/// as an operand of `*`, the left operand of `/` or the right operand of `-`.
pub(super) fn wrap_for_mult_div(expr: &str) -> String {
    let additive = top_level_operators(expr).iter().any(|op| op.is_additive());
    wrap_if(expr, additive)
}

/// Wrap a divisor that has any top-level additive or multiplicative operator
pub(super) fn wrap_for_divisor(expr: &str) -> String {
    let loose = top_level_operators(expr).iter().any(|op| op.precedence() <= 2);
    wrap_if(expr, loose)
}

/// Wrap an operand of `^` that has any top-level operator
pub(super) fn wrap_for_power(expr: &str) -> String {
    wrap_if(expr, !top_level_operators(expr).is_empty())
}

/// Join two rendered operands under `op`, adding only the parentheses
/// required to keep each operand's grouping.
pub fn compose(left: &str, op: Operator, right: &str) -> String {
    let (left, right) = match op {
        Operator::Add => (left.to_string(), right.to_string()),
        Operator::Subtract => (left.to_string(), wrap_for_mult_div(right)),
        Operator::Multiply => (wrap_for_mult_div(left), wrap_for_mult_div(right)),
        Operator::Divide => (wrap_for_mult_div(left), wrap_for_divisor(right)),
        Operator::Exponentiate => (wrap_for_power(left), wrap_for_power(right)),
    };
    format!("{} {} {}", left, op, right)
}
