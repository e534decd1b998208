use num_bigint::BigInt;
use num_traits::ToPrimitive;

use crate::functions;
use crate::syntax::{BinaryOperator, Expr};
use crate::{InterpreterError, MathError};

pub mod dispatch;

/// Named constants available as bare identifiers.
fn constant_value(name: &str) -> Option<f64> {
  match name {
    "pi" => Some(std::f64::consts::PI),
    "e" => Some(std::f64::consts::E),
    "tau" => Some(std::f64::consts::TAU),
    "inf" => Some(f64::INFINITY),
    "nan" => Some(f64::NAN),
    _ => None,
  }
}

/// Reduce an expression to a value form (`Integer`, `Real`, `Bool`,
/// `String`, `Identifier` token or `List`).
pub fn evaluate_expr_to_expr(expr: &Expr) -> Result<Expr, InterpreterError> {
  match expr {
    Expr::Integer(_)
    | Expr::Real(_)
    | Expr::Bool(_)
    | Expr::String(_)
    | Expr::List(_) => Ok(expr.clone()),
    Expr::Identifier(name) => Ok(match constant_value(name) {
      Some(value) => Expr::Real(value),
      None => expr.clone(),
    }),
    Expr::Negate(inner) => match evaluate_expr_to_expr(inner)? {
      Expr::Integer(n) => Ok(Expr::Integer(-n)),
      other => Ok(Expr::Real(-expr_to_f64(&other)?)),
    },
    Expr::BinaryOp { op, left, right } => {
      let a = expr_to_f64(&evaluate_expr_to_expr(left)?)?;
      let b = expr_to_f64(&evaluate_expr_to_expr(right)?)?;
      let result = match op {
        BinaryOperator::Plus => functions::safe_add(a, b),
        BinaryOperator::Minus => functions::safe_subtract(a, b),
        BinaryOperator::Times => functions::safe_multiply(a, b),
        BinaryOperator::Divide => functions::safe_divide(a, b),
        BinaryOperator::Modulo => functions::safe_mod(a, b),
        BinaryOperator::Power => functions::safe_power(a, b),
      }?;
      Ok(Expr::Real(result))
    }
    Expr::NamedArgument { name, .. } => Err(InterpreterError::EvaluationError(
      format!("Named argument '{name}' is only allowed inside a call"),
    )),
    Expr::FunctionCall { name, args } => {
      let mut evaluated = Vec::with_capacity(args.len());
      for arg in args {
        evaluated.push(match arg {
          Expr::NamedArgument { name, value } => Expr::NamedArgument {
            name: name.clone(),
            value: Box::new(evaluate_expr_to_expr(value)?),
          },
          other => evaluate_expr_to_expr(other)?,
        });
      }
      dispatch::evaluate_function_call(name, evaluated)
    }
  }
}

fn type_error(expected: &str, got: &Expr) -> InterpreterError {
  InterpreterError::EvaluationError(format!(
    "Expected {expected}, got {}",
    crate::syntax::expr_to_output(got)
  ))
}

pub fn expr_to_f64(expr: &Expr) -> Result<f64, InterpreterError> {
  match expr {
    Expr::Real(f) => Ok(*f),
    Expr::Integer(n) => n.to_f64().ok_or_else(|| type_error("a number", expr)),
    _ => Err(type_error("a number", expr)),
  }
}

/// Integers pass through; reals must hold an exact integer.
pub fn expr_to_i64(expr: &Expr) -> Result<i64, InterpreterError> {
  match expr {
    Expr::Integer(n) => n.to_i64().ok_or_else(|| {
      MathError::InvalidInput(format!("Integer out of range: {n}")).into()
    }),
    Expr::Real(f) => Ok(functions::as_integer(*f)?),
    _ => Err(type_error("an integer", expr)),
  }
}

pub fn expr_to_bigint(expr: &Expr) -> Result<BigInt, InterpreterError> {
  match expr {
    Expr::Integer(n) => Ok(n.clone()),
    Expr::Real(f) => Ok(BigInt::from(functions::as_integer(*f)?)),
    _ => Err(type_error("an integer", expr)),
  }
}

pub fn expr_to_i32(expr: &Expr) -> Result<i32, InterpreterError> {
  let n = expr_to_i64(expr)?;
  i32::try_from(n).map_err(|_| {
    MathError::InvalidInput(format!("Value out of range: {n}")).into()
  })
}

pub fn expr_to_u32(expr: &Expr) -> Result<u32, InterpreterError> {
  let n = expr_to_i64(expr)?;
  u32::try_from(n).map_err(|_| {
    MathError::InvalidInput(format!("Expected a non-negative integer, got {n}"))
      .into()
  })
}

/// Strings and bare identifiers both serve as text tokens.
pub fn expr_to_text(expr: &Expr) -> Result<&str, InterpreterError> {
  match expr {
    Expr::String(s) | Expr::Identifier(s) => Ok(s),
    _ => Err(type_error("a text token", expr)),
  }
}
