use std::fmt;

/// A binary arithmetic operator usable in a search
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operator {
    Add,
    Subtract,
    Multiply,
    Divide,
    Exponentiate,
}

impl Operator {
    /// Every operator, in the order the search tries them
    pub const ALL: [Operator; 5] = [
        Operator::Add,
        Operator::Multiply,
        Operator::Subtract,
        Operator::Divide,
        Operator::Exponentiate,
    ];

    pub fn symbol(self) -> char {
        match self {
            Operator::Add => '+',
            Operator::Subtract => '-',
            Operator::Multiply => '*',
            Operator::Divide => '/',
            Operator::Exponentiate => '^',
        }
    }

    pub fn from_symbol(symbol: char) -> Option<Operator> {
        match symbol {
            '+' => Some(Operator::Add),
            '-' => Some(Operator::Subtract),
            '*' => Some(Operator::Multiply),
            '/' => Some(Operator::Divide),
            '^' => Some(Operator::Exponentiate),
            _ => None,
        }
    }

    /// Binding strength: additive 1, multiplicative 2, exponent 3
    pub fn precedence(self) -> u8 {
        match self {
            Operator::Add | Operator::Subtract => 1,
            Operator::Multiply | Operator::Divide => 2,
            Operator::Exponentiate => 3,
        }
    }

    pub fn is_additive(self) -> bool {
        self.precedence() == 1
    }

    pub fn is_multiplicative(self) -> bool {
        self.precedence() == 2
    }

    /// Apply the operator with exact integer semantics.
    ///
    /// Returns `None` for every candidate the search must skip: division by
    /// zero, non-exact division, negative exponents, and any overflow.
    pub fn apply(self, left: i64, right: i64) -> Option<i64> {
        match self {
            Operator::Add => left.checked_add(right),
            Operator::Subtract => left.checked_sub(right),
            Operator::Multiply => left.checked_mul(right),
            Operator::Divide => {
                if right == 0 || left.checked_rem(right)? != 0 {
                    None
                } else {
                    left.checked_div(right)
                }
            }
            Operator::Exponentiate => {
                let exponent = u32::try_from(right).ok()?;
                left.checked_pow(exponent)
            }
        }
    }
}

impl fmt::Display for Operator {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

/// The set of operators enabled for a search
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct OperatorSet {
    pub add: bool,
    pub subtract: bool,
    pub multiply: bool,
    pub divide: bool,
    pub exponentiate: bool,
}

impl OperatorSet {
    /// No operators enabled
    pub fn none() -> Self {
        Self::default()
    }

    /// Addition only, the baseline the command line starts from
    pub fn additive() -> Self {
        Self {
            add: true,
            ..Self::default()
        }
    }

    /// Add, subtract, multiply and divide
    pub fn arithmetic() -> Self {
        Self {
            add: true,
            subtract: true,
            multiply: true,
            divide: true,
            exponentiate: false,
        }
    }

    pub fn all() -> Self {
        Self {
            exponentiate: true,
            ..Self::arithmetic()
        }
    }

    pub fn with(mut self, operator: Operator) -> Self {
        match operator {
            Operator::Add => self.add = true,
            Operator::Subtract => self.subtract = true,
            Operator::Multiply => self.multiply = true,
            Operator::Divide => self.divide = true,
            Operator::Exponentiate => self.exponentiate = true,
        }
        self
    }

    pub fn contains(&self, operator: Operator) -> bool {
        match operator {
            Operator::Add => self.add,
            Operator::Subtract => self.subtract,
            Operator::Multiply => self.multiply,
            Operator::Divide => self.divide,
            Operator::Exponentiate => self.exponentiate,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.to_vec().is_empty()
    }

    /// Enabled operators in search order
    pub fn to_vec(&self) -> Vec<Operator> {
        Operator::ALL
            .into_iter()
            .filter(|op| self.contains(*op))
            .collect()
    }
}

impl FromIterator<Operator> for OperatorSet {
    fn from_iter<I: IntoIterator<Item = Operator>>(iter: I) -> Self {
        iter.into_iter()
            .fold(OperatorSet::none(), |set, op| set.with(op))
    }
}
