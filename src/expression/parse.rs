use log::debug;

use crate::expression::errors::ExpressionError;
use crate::expression::operator::Operator;

#[derive(Debug, Clone, Copy, PartialEq)]
enum Token {
    Number(i64),
    Op(Operator),
    Open,
    Close,
}

fn tokenize(text: &str) -> Result<Vec<(usize, Token)>, ExpressionError> {
    let mut tokens = Vec::new();
    let mut chars = text.char_indices().peekable();

    while let Some((position, c)) = chars.next() {
        if c.is_whitespace() {
            continue;
        }
        if c.is_ascii_digit() {
            let mut literal = String::from(c);
            while let Some(&(_, next)) = chars.peek() {
                if !next.is_ascii_digit() {
                    break;
                }
                literal.push(next);
                chars.next();
            }
            let value = literal
                .parse::<i64>()
                .map_err(|_| ExpressionError::InvalidNumber(literal.clone()))?;
            tokens.push((position, Token::Number(value)));
            continue;
        }

        let token = match c {
            '(' => Token::Open,
            ')' => Token::Close,
            _ => match Operator::from_symbol(c) {
                Some(op) => Token::Op(op),
                None => return Err(ExpressionError::UnexpectedCharacter { found: c, position }),
            },
        };
        tokens.push((position, token));
    }

    Ok(tokens)
}

/// Recursive descent over the usual grammar: sums of products of
/// right-associative powers.
struct Parser {
    tokens: Vec<(usize, Token)>,
    cursor: usize,
}

impl Parser {
    fn peek(&self) -> Option<Token> {
        self.tokens.get(self.cursor).map(|(_, token)| *token)
    }

    fn advance(&mut self) -> Option<(usize, Token)> {
        let token = self.tokens.get(self.cursor).copied();
        self.cursor += 1;
        token
    }

    fn apply(left: i64, op: Operator, right: i64) -> Result<i64, ExpressionError> {
        op.apply(left, right).ok_or(ExpressionError::NoIntegerResult {
            left,
            op: op.symbol(),
            right,
        })
    }

    fn sum(&mut self) -> Result<i64, ExpressionError> {
        let mut value = self.product()?;
        while let Some(Token::Op(op)) = self.peek() {
            if !op.is_additive() {
                break;
            }
            self.advance();
            let right = self.product()?;
            value = Self::apply(value, op, right)?;
        }
        Ok(value)
    }

    fn product(&mut self) -> Result<i64, ExpressionError> {
        let mut value = self.power()?;
        while let Some(Token::Op(op)) = self.peek() {
            if !op.is_multiplicative() {
                break;
            }
            self.advance();
            let right = self.power()?;
            value = Self::apply(value, op, right)?;
        }
        Ok(value)
    }

    fn power(&mut self) -> Result<i64, ExpressionError> {
        let base = self.unary()?;
        if self.peek() == Some(Token::Op(Operator::Exponentiate)) {
            self.advance();
            let exponent = self.power()?;
            return Self::apply(base, Operator::Exponentiate, exponent);
        }
        Ok(base)
    }

    fn unary(&mut self) -> Result<i64, ExpressionError> {
        if self.peek() == Some(Token::Op(Operator::Subtract)) {
            self.advance();
            let value = self.unary()?;
            return Self::apply(0, Operator::Subtract, value);
        }
        self.atom()
    }

    fn atom(&mut self) -> Result<i64, ExpressionError> {
        match self.advance() {
            Some((_, Token::Number(value))) => Ok(value),
            Some((_, Token::Open)) => {
                let value = self.sum()?;
                match self.advance() {
                    Some((_, Token::Close)) => Ok(value),
                    Some((position, token)) => Err(unexpected(position, token)),
                    None => Err(ExpressionError::UnexpectedEnd),
                }
            }
            Some((position, token)) => Err(unexpected(position, token)),
            None => Err(ExpressionError::UnexpectedEnd),
        }
    }
}

fn unexpected(position: usize, token: Token) -> ExpressionError {
    let found = match token {
        Token::Number(_) => '#',
        Token::Op(op) => op.symbol(),
        Token::Open => '(',
        Token::Close => ')',
    };
    ExpressionError::UnexpectedCharacter { found, position }
}

/// Evaluate a rendered expression under conventional precedence, with `^`
/// associating to the right and `/` required to divide exactly.
///
/// # Errors
///
/// Returns an error if the text is not a well-formed integer expression or
/// if a step has no exact integer result.
pub fn evaluate_str(text: &str) -> Result<i64, ExpressionError> {
    debug!("Parsing expression: '{}'", text);

    let mut parser = Parser {
        tokens: tokenize(text)?,
        cursor: 0,
    };
    let value = parser.sum()?;

    if let Some((position, token)) = parser.advance() {
        return Err(unexpected(position, token));
    }
    Ok(value)
}
