use crate::error::ExpressionError;
use crate::expr_engine::{self, Expr};
use std::fmt;
use std::str::FromStr;

/// Expression every session starts with.
pub const DEFAULT_EXPRESSION: &str = "Math.sin(x)";

/// An expression that is known to evaluate as a real function of `x`.
///
/// The only way to obtain one is [`normalize`], so holding a value is proof that it parsed and
/// every name in it resolved.
#[derive(Debug, Clone, PartialEq)]
pub struct NormalizedExpression {
    expr: Expr,
    text: String,
}

impl NormalizedExpression {
    /// The canonical text, e.g. `Math.sin(0.5235987755982988)` for `sin(30)`.
    pub fn as_str(&self) -> &str {
        &self.text
    }

    pub fn expr(&self) -> &Expr {
        &self.expr
    }

    /// Evaluates the function at `x`, returning `None` where it is undefined.
    pub fn eval(&self, x: f64) -> Option<f64> {
        let y = self.expr.eval(x);
        y.is_finite().then_some(y)
    }
}

impl Default for NormalizedExpression {
    fn default() -> Self {
        NormalizedExpression {
            expr: Expr::Call { func: expr_engine::Func::Sin, args: vec![Expr::Var] },
            text: DEFAULT_EXPRESSION.to_string(),
        }
    }
}

impl fmt::Display for NormalizedExpression {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.text)
    }
}

impl FromStr for NormalizedExpression {
    type Err = ExpressionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        normalize(s)
    }
}

/// Turns raw user input into a [`NormalizedExpression`].
///
/// Degree shorthand (`sin30`, `cos(45)`) is folded into radian calls and bare library names are
/// resolved against the math library while parsing; see [`expr_engine::Parser`].
pub fn normalize(raw: &str) -> Result<NormalizedExpression, ExpressionError> {
    // spans must index `raw` itself; the lexer skips surrounding whitespace
    let expr = expr_engine::parse(raw)?;
    let text = expr.to_string();
    Ok(NormalizedExpression { expr, text })
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;
    use pretty_assertions::assert_eq;
    use std::f64::consts::PI;

    #[test]
    fn degree_shorthand_matches_radians() {
        for (input, degrees, f) in [
            ("sin(30)", 30.0, f64::sin as fn(f64) -> f64),
            ("cos(45)", 45.0, f64::cos as fn(f64) -> f64),
            ("tan(60)", 60.0, f64::tan as fn(f64) -> f64),
        ] {
            let normalized = normalize(input).unwrap();
            let expected = f(degrees * PI / 180.0);
            // constant in x
            for x in [-3.0, 0.0, 17.5] {
                assert_abs_diff_eq!(normalized.eval(x).unwrap(), expected, epsilon = 1e-9);
            }
        }
    }

    #[test]
    fn degree_shorthand_text() {
        assert_eq!(normalize("sin(30)").unwrap().as_str(), "Math.sin(0.5235987755982988)");
        assert_eq!(normalize("sin30").unwrap(), normalize("sin(30)").unwrap());
    }

    #[test]
    fn free_variable_sine() {
        let normalized = normalize("sin(x)").unwrap();
        assert_eq!(normalized.as_str(), "Math.sin(x)");
        for x in [-2.0, 0.3, 90.0] {
            assert_abs_diff_eq!(normalized.eval(x).unwrap(), f64::sin(x), epsilon = 1e-9);
        }
        assert_eq!(normalize("sin").unwrap(), normalized);
        assert_eq!(normalize(DEFAULT_EXPRESSION).unwrap(), NormalizedExpression::default());
    }

    #[test]
    fn fallback_library_names() {
        assert_eq!(normalize("exp(2) * x").unwrap().as_str(), "Math.exp(2) * x");
        assert_abs_diff_eq!(normalize("log(10)").unwrap().eval(0.0).unwrap(), 10f64.ln(), epsilon = 1e-12);
    }

    #[test]
    fn invalid_input() {
        assert_eq!(normalize("   "), Err(ExpressionError::Empty));
        assert!(normalize("sin(x").is_err());
        assert!(normalize("foo(x)").is_err());
        assert!(normalize("x + y").is_err());
        assert!("2 *".parse::<NormalizedExpression>().is_err());
    }

    #[test]
    fn error_spans_index_the_raw_input() {
        let error = normalize("   y").unwrap_err();
        assert_eq!(error.span(), Some(3..4));
        assert_eq!(normalize("  sin(x) ").unwrap().as_str(), "Math.sin(x)");
    }

    #[test]
    fn undefined_points() {
        let normalized = normalize("Math.log(x)").unwrap();
        assert_eq!(normalized.eval(-1.0), None);
        assert_eq!(normalized.eval(0.0), None);
        assert!(normalized.eval(1.0).is_some());
        assert_eq!(normalize("1 / x").unwrap().eval(0.0), None);
    }
}
