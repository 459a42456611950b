use crate::error::ChatError;

#[derive(Debug, Clone, Copy, PartialEq)]
enum Token {
    Number(f64),
    Op(char),
}

/// Evaluates `number (op number)*` with `*`, `/`, `%` binding tighter than `+`, `-`.
pub fn evaluate(expr: &str) -> Result<f64, ChatError> {
    let tokens = tokenize(expr)?;

    let mut iter = tokens.into_iter();
    let mut term = match iter.next() {
        Some(Token::Number(n)) => n,
        _ => return Err(malformed(expr)),
    };
    let mut sign = 1.0;
    let mut total = 0.0;

    loop {
        let op = match iter.next() {
            None => break,
            Some(Token::Op(op)) => op,
            Some(Token::Number(_)) => return Err(malformed(expr)),
        };
        let rhs = match iter.next() {
            Some(Token::Number(n)) => n,
            _ => return Err(malformed(expr)),
        };

        match op {
            '*' => term *= rhs,
            '/' | '%' if rhs == 0.0 => return Err(ChatError::DivisionByZero),
            '/' => term /= rhs,
            '%' => term = term.rem_euclid(rhs),
            '+' | '-' => {
                total += sign * term;
                sign = if op == '+' { 1.0 } else { -1.0 };
                term = rhs;
            }
            _ => return Err(malformed(expr)),
        }
    }

    let result = total + sign * term;
    if !result.is_finite() {
        return Err(ChatError::NumericOverflow(expr.to_string()));
    }
    Ok(result)
}

pub fn format_number(value: f64) -> String {
    format!("{}", value)
}

fn tokenize(expr: &str) -> Result<Vec<Token>, ChatError> {
    let chars: Vec<char> = expr.chars().collect();
    let mut tokens = Vec::new();
    let mut i = 0;

    while i < chars.len() {
        let c = chars[i];

        if c.is_whitespace() {
            i += 1;
            continue;
        }

        if matches!(c, '+' | '-' | '*' | '/' | '%') {
            tokens.push(Token::Op(c));
            i += 1;
            continue;
        }

        if c.is_ascii_digit() {
            let start = i;
            while i < chars.len() && chars[i].is_ascii_digit() {
                i += 1;
            }
            // Optional fraction; a trailing dot is not a number
            if i < chars.len() && chars[i] == '.' {
                i += 1;
                let fraction_start = i;
                while i < chars.len() && chars[i].is_ascii_digit() {
                    i += 1;
                }
                if i == fraction_start {
                    return Err(malformed(expr));
                }
            }
            let literal: String = chars[start..i].iter().collect();
            let value = literal.parse::<f64>().map_err(|_| malformed(expr))?;
            if !value.is_finite() {
                return Err(ChatError::NumericOverflow(literal));
            }
            tokens.push(Token::Number(value));
            continue;
        }

        return Err(malformed(expr));
    }

    Ok(tokens)
}

fn malformed(expr: &str) -> ChatError {
    ChatError::MalformedExpression(expr.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_two_operand_expressions() {
        assert_eq!(evaluate("2 + 2").unwrap(), 4.0);
        assert_eq!(evaluate("10 - 4").unwrap(), 6.0);
        assert_eq!(evaluate("6 * 7").unwrap(), 42.0);
        assert_eq!(evaluate("10 / 4").unwrap(), 2.5);
        assert_eq!(evaluate("10 % 3").unwrap(), 1.0);
        assert_eq!(evaluate("1.5+2.25").unwrap(), 3.75);
    }

    #[test]
    fn test_precedence_and_chains() {
        assert_eq!(evaluate("2 + 3 * 4").unwrap(), 14.0);
        assert_eq!(evaluate("10 - 2 - 3").unwrap(), 5.0);
        assert_eq!(evaluate("100 / 10 / 5").unwrap(), 2.0);
        assert_eq!(evaluate("20 - 7 % 4").unwrap(), 17.0);
        assert_eq!(evaluate("1 - 2 * 3 + 4").unwrap(), -1.0);
        assert_eq!(evaluate("2 * 3 % 4 + 1").unwrap(), 3.0);
    }

    #[test]
    fn test_single_number() {
        assert_eq!(evaluate("42").unwrap(), 42.0);
    }

    #[test]
    fn test_division_by_zero() {
        assert!(matches!(evaluate("10 / 0"), Err(ChatError::DivisionByZero)));
        assert!(matches!(evaluate("10 % 0"), Err(ChatError::DivisionByZero)));
        assert!(matches!(evaluate("1 + 10 / 0.0"), Err(ChatError::DivisionByZero)));
    }

    #[test]
    fn test_malformed() {
        for expr in ["", "+", "2 +", "* 3", "2 3", "2 ++ 3", "2 ^ 3", "two + 2", "1. + 2"] {
            assert!(
                matches!(evaluate(expr), Err(ChatError::MalformedExpression(_))),
                "expected malformed: {:?}",
                expr
            );
        }
    }

    #[test]
    fn test_out_of_range_numbers() {
        let huge = "9".repeat(400);
        assert!(matches!(evaluate(&format!("{} - {}", huge, huge)), Err(ChatError::NumericOverflow(_))));
        assert!(matches!(evaluate(&format!("{} * 2", huge)), Err(ChatError::NumericOverflow(_))));
        assert!(matches!(evaluate(&format!("1 / {}", huge)), Err(ChatError::NumericOverflow(_))));

        let large = format!("1{}", "0".repeat(300));
        assert!(matches!(
            evaluate(&format!("{} * {}", large, large)),
            Err(ChatError::NumericOverflow(_))
        ));
        assert!(evaluate(&format!("{} / {}", large, large)).unwrap() == 1.0);
    }

    #[test]
    fn test_format_number() {
        assert_eq!(format_number(4.0), "4");
        assert_eq!(format_number(2.5), "2.5");
        assert_eq!(format_number(-1.0), "-1");
    }
}
