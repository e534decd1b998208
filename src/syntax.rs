use num_bigint::BigInt;
use num_traits::ToPrimitive;
use pest::iterators::Pair;

use crate::Rule;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BinaryOperator {
  Plus,
  Minus,
  Times,
  Divide,
  Modulo,
  Power,
}

impl BinaryOperator {
  pub fn symbol(self) -> &'static str {
    match self {
      BinaryOperator::Plus => "+",
      BinaryOperator::Minus => "-",
      BinaryOperator::Times => "*",
      BinaryOperator::Divide => "/",
      BinaryOperator::Modulo => "%",
      BinaryOperator::Power => "^",
    }
  }
}

/// Calculator AST. Evaluation reduces it to one of the value forms:
/// `Integer`, `Real`, `Bool`, `String` or `List`.
#[derive(Debug, Clone, PartialEq)]
pub enum Expr {
  Integer(BigInt),
  Real(f64),
  Bool(bool),
  String(String),
  /// Bare name: a constant (`pi`) or a method token (`half_up`)
  Identifier(String),
  List(Vec<Expr>),
  FunctionCall {
    name: String,
    args: Vec<Expr>,
  },
  /// `name = value` inside a call's argument list
  NamedArgument {
    name: String,
    value: Box<Expr>,
  },
  BinaryOp {
    op: BinaryOperator,
    left: Box<Expr>,
    right: Box<Expr>,
  },
  Negate(Box<Expr>),
}

/// Convert a parsed pair into an `Expr`.
pub fn pair_to_expr(pair: Pair<Rule>) -> Expr {
  match pair.as_rule() {
    Rule::Program => {
      let inner = pair
        .into_inner()
        .find(|p| p.as_rule() == Rule::Expression);
      inner.map(pair_to_expr).unwrap_or(Expr::List(vec![]))
    }
    Rule::Expression | Rule::Term => fold_binary(pair),
    Rule::Unary => {
      let mut inner = pair.into_inner();
      let first = inner.next().expect("Unary always has a child");
      if first.as_rule() == Rule::Negate {
        let operand = inner.next().expect("Negate is followed by an operand");
        Expr::Negate(Box::new(pair_to_expr(operand)))
      } else {
        pair_to_expr(first)
      }
    }
    Rule::Power => {
      let mut inner = pair.into_inner();
      let base = pair_to_expr(inner.next().expect("Power has a base"));
      match inner.next() {
        Some(exponent) => Expr::BinaryOp {
          op: BinaryOperator::Power,
          left: Box::new(base),
          right: Box::new(pair_to_expr(exponent)),
        },
        None => base,
      }
    }
    Rule::FunctionCall => {
      let mut inner = pair.into_inner();
      let name = inner.next().expect("call has a name").as_str().to_string();
      let args = inner.map(pair_to_expr).collect();
      Expr::FunctionCall { name, args }
    }
    Rule::NamedArgument => {
      let mut inner = pair.into_inner();
      let name = inner.next().expect("argument name").as_str().to_string();
      let value = pair_to_expr(inner.next().expect("argument value"));
      Expr::NamedArgument {
        name,
        value: Box::new(value),
      }
    }
    Rule::Integer => {
      // the grammar only admits ASCII digits
      Expr::Integer(pair.as_str().parse().unwrap_or_default())
    }
    Rule::Real => Expr::Real(pair.as_str().parse().unwrap_or(f64::NAN)),
    Rule::Boolean => Expr::Bool(pair.as_str() == "true"),
    Rule::Text => {
      let text = pair
        .into_inner()
        .next()
        .map(|p| p.as_str().to_string())
        .unwrap_or_default();
      Expr::String(text)
    }
    Rule::Identifier => Expr::Identifier(pair.as_str().to_string()),
    _ => Expr::Identifier(pair.as_str().to_string()),
  }
}

/// Left-fold `operand (op operand)*` sequences into nested `BinaryOp`s.
fn fold_binary(pair: Pair<Rule>) -> Expr {
  let mut inner = pair.into_inner();
  let mut acc = pair_to_expr(inner.next().expect("operand"));
  while let Some(op_pair) = inner.next() {
    let op = match op_pair.as_str() {
      "+" => BinaryOperator::Plus,
      "-" => BinaryOperator::Minus,
      "*" => BinaryOperator::Times,
      "/" => BinaryOperator::Divide,
      _ => BinaryOperator::Modulo,
    };
    let rhs = pair_to_expr(inner.next().expect("operator has a right operand"));
    acc = Expr::BinaryOp {
      op,
      left: Box::new(acc),
      right: Box::new(rhs),
    };
  }
  acc
}

/// Reals use the shortest representation that round-trips, always with a
/// decimal point or exponent (`3.0`, `0.30000000000000004`, `1e300`).
pub fn format_real(value: f64) -> String {
  if value.is_nan() {
    "nan".to_string()
  } else if value == f64::INFINITY {
    "inf".to_string()
  } else if value == f64::NEG_INFINITY {
    "-inf".to_string()
  } else {
    format!("{value:?}")
  }
}

/// Render an evaluated expression for display.
pub fn expr_to_output(expr: &Expr) -> String {
  match expr {
    Expr::Integer(n) => n.to_string(),
    Expr::Real(f) => format_real(*f),
    Expr::Bool(b) => b.to_string(),
    Expr::String(s) | Expr::Identifier(s) => s.clone(),
    Expr::List(items) => {
      let parts: Vec<String> = items.iter().map(expr_to_output).collect();
      format!("[{}]", parts.join(", "))
    }
    Expr::FunctionCall { name, args } => {
      let parts: Vec<String> = args.iter().map(expr_to_output).collect();
      format!("{}({})", name, parts.join(", "))
    }
    Expr::NamedArgument { name, value } => {
      format!("{} = {}", name, expr_to_output(value))
    }
    Expr::BinaryOp { op, left, right } => format!(
      "({} {} {})",
      expr_to_output(left),
      op.symbol(),
      expr_to_output(right)
    ),
    Expr::Negate(inner) => format!("-{}", expr_to_output(inner)),
  }
}

/// JSON form of an evaluated expression. Integers outside the `i64` range
/// and non-finite reals are emitted as strings.
pub fn expr_to_json(expr: &Expr) -> serde_json::Value {
  use serde_json::Value;
  match expr {
    Expr::Integer(n) => match n.to_i64() {
      Some(i) => Value::from(i),
      None => Value::String(n.to_string()),
    },
    Expr::Real(f) => serde_json::Number::from_f64(*f)
      .map(Value::Number)
      .unwrap_or_else(|| Value::String(format_real(*f))),
    Expr::Bool(b) => Value::Bool(*b),
    Expr::List(items) => Value::Array(items.iter().map(expr_to_json).collect()),
    other => Value::String(expr_to_output(other)),
  }
}
