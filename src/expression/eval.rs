use crate::expression::operator::Operator;

/// An interleaved run of numbers and operators, `numbers.len() == operators.len() + 1`
#[derive(Debug, Clone, PartialEq)]
struct Sequence {
    numbers: Vec<i64>,
    operators: Vec<Operator>,
}

impl Sequence {
    /// Fold every operator accepted by `selects` into its left neighbour,
    /// scanning left to right. The remaining operators are carried over
    /// into the returned sequence.
    fn reduce(&self, selects: impl Fn(Operator) -> bool) -> Option<Sequence> {
        let (first, rest) = self.numbers.split_first()?;
        let mut numbers = Vec::with_capacity(self.numbers.len());
        let mut operators = Vec::with_capacity(self.operators.len());
        numbers.push(*first);

        for (&op, &number) in self.operators.iter().zip(rest) {
            if selects(op) {
                let last = numbers.last_mut()?;
                *last = op.apply(*last, number)?;
            } else {
                operators.push(op);
                numbers.push(number);
            }
        }

        Some(Sequence { numbers, operators })
    }
}

/// Evaluate `numbers` joined by `operators` with standard precedence.
///
/// Exponentiation is folded first, then multiplication and division, then
/// addition and subtraction, each pass running left to right. Exponent
/// chains therefore associate to the left: `2 ^ 3 ^ 2` is 64.
///
/// Returns `None` when any step is invalid: a zero or non-exact divisor,
/// a negative exponent, an overflow, or an operator count that does not
/// match the number count.
pub fn evaluate(numbers: &[i64], operators: &[Operator]) -> Option<i64> {
    if numbers.is_empty() {
        return Some(0);
    }
    if operators.len() + 1 != numbers.len() {
        return None;
    }
    if let [single] = numbers {
        return Some(*single);
    }

    let sequence = Sequence {
        numbers: numbers.to_vec(),
        operators: operators.to_vec(),
    };

    let powers = sequence.reduce(|op| op == Operator::Exponentiate)?;
    let products = powers.reduce(Operator::is_multiplicative)?;
    let sums = products.reduce(Operator::is_additive)?;

    sums.numbers.first().copied()
}
