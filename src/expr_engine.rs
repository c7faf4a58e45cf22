use crate::error::ExpressionError;
use std::f64::consts::{E, PI};
use std::fmt;
use std::ops::Range;

/// Name of the free variable every expression is a function of.
pub const VARIABLE: &str = "x";

/// Namespace prefix accepted in front of library functions and constants.
pub const NAMESPACE: &str = "Math.";

#[derive(Debug, Clone, PartialEq)]
pub enum Token {
    /// A numeric literal. `integer` is set when the literal was written with digits only.
    Number { value: f64, integer: bool },
    Op(char),
    Ident(String),
    LParen,
    RParen,
    Comma,
}

impl Token {
    fn describe(&self) -> String {
        match self {
            Token::Number { value, .. } => format!("number {}", value),
            Token::Op(c) => format!("operator '{}'", c),
            Token::Ident(name) => format!("name '{}'", name),
            Token::LParen => "'('".to_string(),
            Token::RParen => "')'".to_string(),
            Token::Comma => "','".to_string(),
        }
    }
}

/// A token together with the byte range it was read from.
#[derive(Debug, Clone, PartialEq)]
pub struct Lexeme {
    pub token: Token,
    pub span: Range<usize>,
}

pub fn tokenize(input: &str) -> Result<Vec<Lexeme>, ExpressionError> {
    let mut tokens = Vec::new();
    let mut chars = input.char_indices().peekable();

    while let Some(&(start, c)) = chars.peek() {
        let single = |token: Token| Lexeme { token, span: start..start + c.len_utf8() };
        match c {
            _ if c.is_whitespace() => {
                chars.next();
            }
            '(' => {
                tokens.push(single(Token::LParen));
                chars.next();
            }
            ')' => {
                tokens.push(single(Token::RParen));
                chars.next();
            }
            ',' => {
                tokens.push(single(Token::Comma));
                chars.next();
            }
            '*' => {
                chars.next();
                // `**` is the exponent operator in the notation users paste from elsewhere
                if let Some(&(second, '*')) = chars.peek() {
                    chars.next();
                    tokens.push(Lexeme { token: Token::Op('^'), span: start..second + 1 });
                } else {
                    tokens.push(single(Token::Op('*')));
                }
            }
            '+' | '-' | '/' | '^' | '%' => {
                tokens.push(single(Token::Op(c)));
                chars.next();
            }
            '0'..='9' | '.' => {
                let mut num_str = String::new();
                let mut has_dot = false;
                let mut has_exp = false;

                while let Some(&(_, ch)) = chars.peek() {
                    match ch {
                        '.' if has_dot || has_exp => break,
                        '.' => {
                            has_dot = true;
                            num_str.push(ch);
                            chars.next();
                        }
                        'e' | 'E' if !has_exp => {
                            // only an exponent when digits follow, so `2e` stays `2` then `e`
                            let mut ahead = chars.clone();
                            ahead.next();
                            let mut exponent = String::from(ch);
                            if let Some(&(_, sign @ ('+' | '-'))) = ahead.peek() {
                                exponent.push(sign);
                                ahead.next();
                            }
                            if !matches!(ahead.peek(), Some(&(_, d)) if d.is_ascii_digit()) {
                                break;
                            }
                            has_exp = true;
                            num_str.push_str(&exponent);
                            chars = ahead;
                        }
                        '0'..='9' => {
                            num_str.push(ch);
                            chars.next();
                        }
                        _ => break,
                    }
                }

                let span = start..start + num_str.len();
                let value = num_str.parse::<f64>()
                    .map_err(|_| ExpressionError::InvalidNumber { text: num_str.clone(), span: span.clone() })?;
                tokens.push(Lexeme {
                    token: Token::Number { value, integer: !has_dot && !has_exp },
                    span,
                });
            }
            _ if c.is_alphabetic() || c == '_' => {
                let mut ident = String::new();
                loop {
                    while let Some(&(_, ch)) = chars.peek() {
                        if ch.is_alphanumeric() || ch == '_' {
                            ident.push(ch);
                            chars.next();
                        } else {
                            break;
                        }
                    }

                    // dotted paths such as `Math.sin` stay a single identifier
                    let mut ahead = chars.clone();
                    let dotted = matches!(ahead.next(), Some((_, '.')))
                        && matches!(ahead.peek(), Some(&(_, next)) if next.is_alphabetic());
                    if !dotted {
                        break;
                    }
                    ident.push('.');
                    chars = ahead;
                }
                let span = start..start + ident.len();
                tokens.push(Lexeme { token: Token::Ident(ident), span });
            }
            _ => {
                return Err(ExpressionError::UnknownChar { ch: c, span: start..start + c.len_utf8() })
            }
        }
    }
    Ok(tokens)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BinOp {
    Add,
    Sub,
    Mul,
    Div,
    Rem,
    Pow,
}

impl BinOp {
    fn from_char(c: char) -> Option<BinOp> {
        Some(match c {
            '+' => BinOp::Add,
            '-' => BinOp::Sub,
            '*' => BinOp::Mul,
            '/' => BinOp::Div,
            '%' => BinOp::Rem,
            '^' => BinOp::Pow,
            _ => return None,
        })
    }

    fn symbol(self) -> &'static str {
        match self {
            BinOp::Add => "+",
            BinOp::Sub => "-",
            BinOp::Mul => "*",
            BinOp::Div => "/",
            BinOp::Rem => "%",
            BinOp::Pow => "^",
        }
    }

    fn precedence(self) -> u8 {
        match self {
            BinOp::Add | BinOp::Sub => 1,
            BinOp::Mul | BinOp::Div | BinOp::Rem => 2,
            BinOp::Pow => 4,
        }
    }
}

/// Precedence of unary minus, between multiplicative operators and `^`.
const NEG_PRECEDENCE: u8 = 3;
const ATOM_PRECEDENCE: u8 = 5;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Const {
    Pi,
    E,
}

impl Const {
    fn from_name(name: &str, namespaced: bool) -> Option<Const> {
        match (name, namespaced) {
            ("PI", _) | ("pi", false) => Some(Const::Pi),
            ("E", _) | ("e", false) => Some(Const::E),
            _ => None,
        }
    }

    pub fn value(self) -> f64 {
        match self {
            Const::Pi => PI,
            Const::E => E,
        }
    }

    fn name(self) -> &'static str {
        match self {
            Const::Pi => "PI",
            Const::E => "E",
        }
    }
}

/// How many arguments a library function accepts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Arity {
    Exact(usize),
    AtLeast(usize),
}

impl Arity {
    fn accepts(self, n: usize) -> bool {
        match self {
            Arity::Exact(k) => n == k,
            Arity::AtLeast(k) => n >= k,
        }
    }

    fn describe(self) -> &'static str {
        match self {
            Arity::Exact(1) => "1",
            Arity::Exact(2) => "2",
            Arity::Exact(_) => "a fixed number of",
            Arity::AtLeast(_) => "at least 1",
        }
    }
}

/// The whitelisted math library. All angles are in radians.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Func {
    Sin,
    Cos,
    Tan,
    Asin,
    Acos,
    Atan,
    Atan2,
    Sinh,
    Cosh,
    Tanh,
    Asinh,
    Acosh,
    Atanh,
    Exp,
    Expm1,
    Log,
    Log10,
    Log2,
    Log1p,
    Sqrt,
    Cbrt,
    Abs,
    Sign,
    Floor,
    Ceil,
    Round,
    Trunc,
    Pow,
    Min,
    Max,
    Hypot,
}

impl Func {
    pub fn from_name(name: &str) -> Option<Func> {
        Some(match name {
            "sin" => Func::Sin,
            "cos" => Func::Cos,
            "tan" => Func::Tan,
            "asin" => Func::Asin,
            "acos" => Func::Acos,
            "atan" => Func::Atan,
            "atan2" => Func::Atan2,
            "sinh" => Func::Sinh,
            "cosh" => Func::Cosh,
            "tanh" => Func::Tanh,
            "asinh" => Func::Asinh,
            "acosh" => Func::Acosh,
            "atanh" => Func::Atanh,
            "exp" => Func::Exp,
            "expm1" => Func::Expm1,
            "log" | "ln" => Func::Log,
            "log10" => Func::Log10,
            "log2" => Func::Log2,
            "log1p" => Func::Log1p,
            "sqrt" => Func::Sqrt,
            "cbrt" => Func::Cbrt,
            "abs" => Func::Abs,
            "sign" => Func::Sign,
            "floor" => Func::Floor,
            "ceil" => Func::Ceil,
            "round" => Func::Round,
            "trunc" => Func::Trunc,
            "pow" => Func::Pow,
            "min" => Func::Min,
            "max" => Func::Max,
            "hypot" => Func::Hypot,
            _ => return None,
        })
    }

    pub fn name(self) -> &'static str {
        match self {
            Func::Sin => "sin",
            Func::Cos => "cos",
            Func::Tan => "tan",
            Func::Asin => "asin",
            Func::Acos => "acos",
            Func::Atan => "atan",
            Func::Atan2 => "atan2",
            Func::Sinh => "sinh",
            Func::Cosh => "cosh",
            Func::Tanh => "tanh",
            Func::Asinh => "asinh",
            Func::Acosh => "acosh",
            Func::Atanh => "atanh",
            Func::Exp => "exp",
            Func::Expm1 => "expm1",
            Func::Log => "log",
            Func::Log10 => "log10",
            Func::Log2 => "log2",
            Func::Log1p => "log1p",
            Func::Sqrt => "sqrt",
            Func::Cbrt => "cbrt",
            Func::Abs => "abs",
            Func::Sign => "sign",
            Func::Floor => "floor",
            Func::Ceil => "ceil",
            Func::Round => "round",
            Func::Trunc => "trunc",
            Func::Pow => "pow",
            Func::Min => "min",
            Func::Max => "max",
            Func::Hypot => "hypot",
        }
    }

    pub fn arity(self) -> Arity {
        match self {
            Func::Atan2 | Func::Pow => Arity::Exact(2),
            Func::Min | Func::Max | Func::Hypot => Arity::AtLeast(1),
            _ => Arity::Exact(1),
        }
    }

    /// The trigonometric functions that accept the degree shorthand (`sin30`, `sin(30)`).
    fn degree_shorthand(name: &str) -> Option<Func> {
        match name {
            "sin" => Some(Func::Sin),
            "cos" => Some(Func::Cos),
            "tan" => Some(Func::Tan),
            _ => None,
        }
    }

    /// Applies the function. Missing arguments count as NaN.
    pub fn apply(self, args: &[f64]) -> f64 {
        let arg = |i: usize| args.get(i).copied().unwrap_or(f64::NAN);
        let a = arg(0);
        match self {
            Func::Sin => a.sin(),
            Func::Cos => a.cos(),
            Func::Tan => a.tan(),
            Func::Asin => a.asin(),
            Func::Acos => a.acos(),
            Func::Atan => a.atan(),
            Func::Atan2 => a.atan2(arg(1)),
            Func::Sinh => a.sinh(),
            Func::Cosh => a.cosh(),
            Func::Tanh => a.tanh(),
            Func::Asinh => a.asinh(),
            Func::Acosh => a.acosh(),
            Func::Atanh => a.atanh(),
            Func::Exp => a.exp(),
            Func::Expm1 => a.exp_m1(),
            Func::Log => a.ln(),
            Func::Log10 => a.log10(),
            Func::Log2 => a.log2(),
            Func::Log1p => a.ln_1p(),
            Func::Sqrt => a.sqrt(),
            Func::Cbrt => a.cbrt(),
            Func::Abs => a.abs(),
            Func::Sign => {
                if a == 0.0 || a.is_nan() {
                    a
                } else {
                    a.signum()
                }
            }
            Func::Floor => a.floor(),
            Func::Ceil => a.ceil(),
            // halves round towards positive infinity
            Func::Round => {
                if a - a.floor() == 0.5 {
                    a.ceil()
                } else {
                    a.round()
                }
            }
            Func::Trunc => a.trunc(),
            Func::Pow => a.powf(arg(1)),
            Func::Min => args.iter().copied().fold(f64::INFINITY, |acc, v| {
                if acc.is_nan() || v.is_nan() { f64::NAN } else { acc.min(v) }
            }),
            Func::Max => args.iter().copied().fold(f64::NEG_INFINITY, |acc, v| {
                if acc.is_nan() || v.is_nan() { f64::NAN } else { acc.max(v) }
            }),
            Func::Hypot => args.iter().copied().fold(0.0, f64::hypot),
        }
    }
}

/// A parsed expression in one variable.
#[derive(Debug, Clone, PartialEq)]
pub enum Expr {
    Num(f64),
    Var,
    Const(Const),
    Neg(Box<Expr>),
    Binary {
        op: BinOp,
        lhs: Box<Expr>,
        rhs: Box<Expr>,
    },
    Call {
        func: Func,
        args: Vec<Expr>,
    },
}

impl Expr {
    /// Evaluates the expression at `x`. Domain errors come back as NaN or infinities.
    pub fn eval(&self, x: f64) -> f64 {
        match self {
            Expr::Num(n) => *n,
            Expr::Var => x,
            Expr::Const(c) => c.value(),
            Expr::Neg(inner) => -inner.eval(x),
            Expr::Binary { op, lhs, rhs } => {
                let (l, r) = (lhs.eval(x), rhs.eval(x));
                match op {
                    BinOp::Add => l + r,
                    BinOp::Sub => l - r,
                    BinOp::Mul => l * r,
                    BinOp::Div => l / r,
                    BinOp::Rem => l % r,
                    BinOp::Pow => l.powf(r),
                }
            }
            Expr::Call { func, args } => {
                let values = args.iter().map(|arg| arg.eval(x)).collect::<Vec<_>>();
                func.apply(&values)
            }
        }
    }

    fn precedence(&self) -> u8 {
        match self {
            Expr::Num(n) if n.is_sign_negative() => NEG_PRECEDENCE,
            Expr::Neg(_) => NEG_PRECEDENCE,
            Expr::Binary { op, .. } => op.precedence(),
            _ => ATOM_PRECEDENCE,
        }
    }

    fn fmt_prec(&self, f: &mut fmt::Formatter<'_>, min_prec: u8) -> fmt::Result {
        let parens = self.precedence() < min_prec;
        if parens {
            write!(f, "(")?;
        }
        match self {
            Expr::Num(n) => write!(f, "{}", n)?,
            Expr::Var => write!(f, "{}", VARIABLE)?,
            Expr::Const(c) => write!(f, "{}{}", NAMESPACE, c.name())?,
            Expr::Neg(inner) => {
                write!(f, "-")?;
                inner.fmt_prec(f, NEG_PRECEDENCE)?;
            }
            Expr::Binary { op, lhs, rhs } => {
                let prec = op.precedence();
                let (lhs_prec, rhs_prec) = match op {
                    BinOp::Pow => (prec + 1, NEG_PRECEDENCE),
                    _ => (prec, prec + 1),
                };
                lhs.fmt_prec(f, lhs_prec)?;
                write!(f, " {} ", op.symbol())?;
                rhs.fmt_prec(f, rhs_prec)?;
            }
            Expr::Call { func, args } => {
                write!(f, "{}{}(", NAMESPACE, func.name())?;
                for (i, arg) in args.iter().enumerate() {
                    if i > 0 {
                        write!(f, ", ")?;
                    }
                    arg.fmt_prec(f, 0)?;
                }
                write!(f, ")")?;
            }
        }
        if parens {
            write!(f, ")")?;
        }
        Ok(())
    }
}

/// Renders the canonical form, with every library reference spelled `Math.name`.
impl fmt::Display for Expr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.fmt_prec(f, 0)
    }
}

fn degrees(n: f64) -> Expr {
    Expr::Num(n * (PI / 180.0))
}

/// How deep the parser may recurse, counting parentheses, signs, exponents and chained operands.
pub const MAX_DEPTH: usize = 256;

pub struct Parser {
    tokens: Vec<Lexeme>,
    current: usize,
    depth: usize,
}

impl Parser {
    pub fn new(tokens: Vec<Lexeme>) -> Self {
        Parser { tokens, current: 0, depth: 0 }
    }

    /// Parses the whole token stream as a single expression.
    pub fn parse_full(&mut self) -> Result<Expr, ExpressionError> {
        if self.tokens.is_empty() {
            return Err(ExpressionError::Empty);
        }
        let result = self.expr()?;
        if let Some(lexeme) = self.tokens.get(self.current) {
            return Err(ExpressionError::UnexpectedToken {
                found: lexeme.token.describe(),
                span: lexeme.span.clone(),
            });
        }
        Ok(result)
    }

    fn peek(&self) -> Option<&Token> {
        self.tokens.get(self.current).map(|lexeme| &lexeme.token)
    }

    fn peek_nth(&self, n: usize) -> Option<&Token> {
        self.tokens.get(self.current + n).map(|lexeme| &lexeme.token)
    }

    fn span_at(&self, index: usize) -> Range<usize> {
        self.tokens[index].span.clone()
    }

    fn unexpected(&self) -> ExpressionError {
        match self.tokens.get(self.current) {
            Some(lexeme) => ExpressionError::UnexpectedToken {
                found: lexeme.token.describe(),
                span: lexeme.span.clone(),
            },
            None => ExpressionError::UnexpectedEnd,
        }
    }

    /// Takes one level of depth. A failed parse is abandoned, so only successful paths give the
    /// level back through [`Parser::leave`].
    fn enter(&mut self) -> Result<(), ExpressionError> {
        if self.depth >= MAX_DEPTH {
            let span = match self.tokens.get(self.current) {
                Some(lexeme) => lexeme.span.clone(),
                None => self.tokens.last().map_or(0..0, |lexeme| lexeme.span.clone()),
            };
            return Err(ExpressionError::TooDeep { span });
        }
        self.depth += 1;
        Ok(())
    }

    fn leave(&mut self, levels: usize) {
        self.depth -= levels;
    }

    fn binary(op: BinOp, lhs: Expr, rhs: Expr) -> Expr {
        Expr::Binary { op, lhs: Box::new(lhs), rhs: Box::new(rhs) }
    }

    // every chained operand deepens the left-leaning tree, so it takes a level too
    fn expr(&mut self) -> Result<Expr, ExpressionError> {
        let mut left = self.term()?;
        let mut chained = 0;

        while let Some(Token::Op(c @ ('+' | '-'))) = self.peek() {
            let op = BinOp::from_char(*c).ok_or_else(|| self.unexpected())?;
            self.current += 1;
            self.enter()?;
            chained += 1;
            let right = self.term()?;
            left = Self::binary(op, left, right);
        }
        self.leave(chained);
        Ok(left)
    }

    fn term(&mut self) -> Result<Expr, ExpressionError> {
        let mut left = self.unary()?;
        let mut chained = 0;

        while let Some(Token::Op(c @ ('*' | '/' | '%'))) = self.peek() {
            let op = BinOp::from_char(*c).ok_or_else(|| self.unexpected())?;
            self.current += 1;
            self.enter()?;
            chained += 1;
            let right = self.unary()?;
            left = Self::binary(op, left, right);
        }
        self.leave(chained);
        Ok(left)
    }

    // parentheses, argument lists, signs and exponents all recurse through here
    fn unary(&mut self) -> Result<Expr, ExpressionError> {
        self.enter()?;
        let result = self.signed()?;
        self.leave(1);
        Ok(result)
    }

    fn signed(&mut self) -> Result<Expr, ExpressionError> {
        match self.peek() {
            Some(Token::Op('+')) => {
                self.current += 1;
                self.unary()
            }
            Some(Token::Op('-')) => {
                self.current += 1;
                Ok(Expr::Neg(Box::new(self.unary()?)))
            }
            _ => self.power(),
        }
    }

    fn power(&mut self) -> Result<Expr, ExpressionError> {
        let base = self.primary()?;

        if let Some(Token::Op('^')) = self.peek() {
            self.current += 1;
            // right associative, and the exponent may carry its own sign: 2^-x
            let exponent = self.unary()?;
            Ok(Self::binary(BinOp::Pow, base, exponent))
        } else {
            Ok(base)
        }
    }

    fn primary(&mut self) -> Result<Expr, ExpressionError> {
        let Some(lexeme) = self.tokens.get(self.current) else {
            return Err(ExpressionError::UnexpectedEnd);
        };

        match &lexeme.token {
            Token::Number { value, .. } => {
                let value = *value;
                self.current += 1;
                Ok(Expr::Num(value))
            }
            Token::LParen => {
                let open = self.current;
                self.current += 1;
                let expr = self.expr()?;
                if let Some(Token::RParen) = self.peek() {
                    self.current += 1;
                    Ok(expr)
                } else {
                    Err(ExpressionError::MissingParen { span: self.span_at(open) })
                }
            }
            Token::Ident(ident) => {
                let ident = ident.clone();
                let at = self.current;
                self.current += 1;
                self.name(&ident, at)
            }
            _ => Err(self.unexpected()),
        }
    }

    /// Resolves an identifier read at token index `at`.
    fn name(&mut self, ident: &str, at: usize) -> Result<Expr, ExpressionError> {
        let span = self.span_at(at);
        let unknown = || ExpressionError::UnknownName { name: ident.to_string(), span: span.clone() };

        let (name, namespaced) = match ident.strip_prefix(NAMESPACE) {
            Some(member) => (member, true),
            None if ident.contains('.') => return Err(unknown()),
            None => (ident, false),
        };

        if !namespaced {
            if name == VARIABLE {
                return Ok(Expr::Var);
            }
            if let Some(expr) = self.degree_shorthand(name) {
                return Ok(expr);
            }
        }

        if let Some(c) = Const::from_name(name, namespaced) {
            return Ok(Expr::Const(c));
        }

        let func = Func::from_name(name).ok_or_else(unknown)?;
        if self.peek() != Some(&Token::LParen) {
            return Err(ExpressionError::MissingArguments { name: func.name(), span });
        }
        let args = self.arguments()?;

        if !func.arity().accepts(args.len()) {
            return Err(ExpressionError::Arity {
                name: func.name(),
                expected: func.arity().describe(),
                got: args.len(),
                span: span.start..self.span_at(self.current - 1).end,
            });
        }
        Ok(Expr::Call { func, args })
    }

    /// Degree shorthand for bare `sin`/`cos`/`tan`:
    ///
    /// - `sin30`, `sin 30` and `sin(30)` take the integer literal as degrees,
    /// - a bare `sin` with no argument is `sin(x)`,
    /// - `sin(<anything else>)` is left to the regular call syntax (radians).
    fn degree_shorthand(&mut self, name: &str) -> Option<Expr> {
        let split = name.find(|c: char| c.is_ascii_digit()).unwrap_or(name.len());
        let (head, digits) = name.split_at(split);
        let func = Func::degree_shorthand(head)?;

        // the lexer keeps `sin30` as a single identifier
        if !digits.is_empty() {
            let n = digits.parse::<u64>().ok()? as f64;
            return Some(Expr::Call { func, args: vec![degrees(n)] });
        }

        match (self.peek(), self.peek_nth(1), self.peek_nth(2), self.peek_nth(3)) {
            (Some(Token::Number { value, integer: true }), ..) => {
                let n = *value;
                self.current += 1;
                Some(Expr::Call { func, args: vec![degrees(n)] })
            }
            (Some(Token::LParen), Some(Token::Number { value, integer: true }), Some(Token::RParen), _) => {
                let n = *value;
                self.current += 3;
                Some(Expr::Call { func, args: vec![degrees(n)] })
            }
            (
                Some(Token::LParen),
                Some(Token::Op('-')),
                Some(Token::Number { value, integer: true }),
                Some(Token::RParen),
            ) => {
                let n = -*value;
                self.current += 4;
                Some(Expr::Call { func, args: vec![degrees(n)] })
            }
            (Some(Token::LParen), ..) => None,
            _ => Some(Expr::Call { func, args: vec![Expr::Var] }),
        }
    }

    fn arguments(&mut self) -> Result<Vec<Expr>, ExpressionError> {
        let open = self.current;
        self.current += 1;

        let mut args = Vec::new();
        while self.current < self.tokens.len() && self.peek() != Some(&Token::RParen) {
            args.push(self.expr()?);

            match self.peek() {
                Some(Token::Comma) => {
                    self.current += 1;
                }
                Some(Token::RParen) => break,
                Some(_) => return Err(self.unexpected()),
                None => {}
            }
        }

        if self.peek() != Some(&Token::RParen) {
            return Err(ExpressionError::MissingParen { span: self.span_at(open) });
        }
        self.current += 1;
        Ok(args)
    }
}

/// Tokenizes and parses `input` in one go.
pub fn parse(input: &str) -> Result<Expr, ExpressionError> {
    Parser::new(tokenize(input)?).parse_full()
}
