//! Safe numeric primitives.
//!
//! The [`functions`] module is the library proper: pure, thread-safe
//! functions over `f64` and big integers that report domain violations,
//! division by zero and overflow as [`MathError`] instead of returning
//! surprising IEEE-754 values. [`interpret`] is a small expression front end
//! over the same functions, used by the `gatormath` binary.

use pest::Parser;
use pest_derive::Parser;
use std::fmt;
use thiserror::Error;

pub mod evaluator;
pub mod functions;
pub mod syntax;

pub const VERSION: &str = env!("CARGO_PKG_VERSION");
pub const DESCRIPTION: &str = "Mathematical precision with bite";

#[derive(Parser)]
#[grammar = "gatormath.pest"]
pub struct CalcParser;

/// Category of a [`MathError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
  InvalidInput,
  DivisionByZero,
  Overflow,
}

impl fmt::Display for ErrorKind {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.write_str(match self {
      ErrorKind::InvalidInput => "invalid_input",
      ErrorKind::DivisionByZero => "division_by_zero",
      ErrorKind::Overflow => "overflow",
    })
  }
}

/// Failure of a numeric function. The message names the offending input.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum MathError {
  /// Domain violation: NaN where disallowed, negative input to an even root
  /// or logarithm, non-integer input to an integer function, unknown
  /// rounding method, malformed tolerance.
  #[error("{0}")]
  InvalidInput(String),
  #[error("{0}")]
  DivisionByZero(String),
  /// Finite operands produced a result outside the `f64` range.
  #[error("{0}")]
  Overflow(String),
}

impl MathError {
  pub fn kind(&self) -> ErrorKind {
    match self {
      MathError::InvalidInput(_) => ErrorKind::InvalidInput,
      MathError::DivisionByZero(_) => ErrorKind::DivisionByZero,
      MathError::Overflow(_) => ErrorKind::Overflow,
    }
  }
}

#[derive(Error, Debug)]
pub enum InterpreterError {
  #[error("Parse error: {0}")]
  ParseError(#[from] Box<pest::error::Error<Rule>>),
  #[error("Empty input")]
  EmptyInput,
  #[error("Evaluation error: {0}")]
  EvaluationError(String),
  #[error(transparent)]
  Math(#[from] MathError),
}

impl InterpreterError {
  /// Short machine-readable label, used for JSON output.
  pub fn kind(&self) -> String {
    match self {
      InterpreterError::ParseError(_) => "parse_error".to_string(),
      InterpreterError::EmptyInput => "empty_input".to_string(),
      InterpreterError::EvaluationError(_) => "evaluation_error".to_string(),
      InterpreterError::Math(e) => e.kind().to_string(),
    }
  }
}

pub fn parse(
  input: &str,
) -> Result<pest::iterators::Pairs<'_, Rule>, Box<pest::error::Error<Rule>>> {
  CalcParser::parse(Rule::Program, input).map_err(Box::new)
}

/// Parse and evaluate an expression, returning the evaluated value.
pub fn evaluate(input: &str) -> Result<syntax::Expr, InterpreterError> {
  let trimmed = input.trim();
  if trimmed.is_empty() {
    return Err(InterpreterError::EmptyInput);
  }

  let mut pairs = parse(trimmed)?;
  let program = pairs.next().ok_or(InterpreterError::EmptyInput)?;
  let expr = syntax::pair_to_expr(program);
  evaluator::evaluate_expr_to_expr(&expr)
}

/// Evaluate an expression and render the result as text.
///
/// ```
/// assert_eq!(gatormath::interpret("gcd(48, 18)").unwrap(), "6");
/// assert_eq!(gatormath::interpret("round(2.5, method = half_up)").unwrap(), "3.0");
/// ```
pub fn interpret(input: &str) -> Result<String, InterpreterError> {
  evaluate(input).map(|expr| syntax::expr_to_output(&expr))
}

/// Evaluate an expression into a JSON object: `{"result": ...}` on
/// success, `{"error": ..., "kind": ...}` on failure.
pub fn interpret_json(input: &str) -> serde_json::Value {
  match evaluate(input) {
    Ok(expr) => serde_json::json!({ "result": syntax::expr_to_json(&expr) }),
    Err(e) => serde_json::json!({ "error": e.to_string(), "kind": e.kind() }),
  }
}
