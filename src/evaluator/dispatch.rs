//! Binding of call arguments to library functions.
//!
//! Every callable name has a [`Signature`] listing its parameters in order
//! with their defaults, so `round_to_digits(2.5)`,
//! `round_to_digits(2.5, 0, half_up)` and
//! `round_to_digits(2.5, method = half_up)` all resolve the same way.

use num_bigint::BigInt;

use super::{
  expr_to_bigint, expr_to_f64, expr_to_i32, expr_to_i64, expr_to_text,
  expr_to_u32,
};
use crate::functions::{
  self, Circle, Rectangle, Square, Triangle, DEFAULT_DECIMALS,
  DEFAULT_MAX_ITERATIONS, DEFAULT_NEWTON_TOLERANCE, DEFAULT_TOLERANCE,
};
use crate::syntax::Expr;
use crate::{InterpreterError, MathError};

#[derive(Debug, Clone, Copy)]
enum DefaultValue {
  Real(f64),
  Integer(i64),
  Text(&'static str),
}

impl DefaultValue {
  fn to_expr(self) -> Expr {
    match self {
      DefaultValue::Real(f) => Expr::Real(f),
      DefaultValue::Integer(n) => Expr::Integer(BigInt::from(n)),
      DefaultValue::Text(s) => Expr::String(s.to_string()),
    }
  }
}

#[derive(Debug)]
struct Param {
  name: &'static str,
  default: Option<DefaultValue>,
}

const fn req(name: &'static str) -> Param {
  Param {
    name,
    default: None,
  }
}

const fn opt(name: &'static str, default: DefaultValue) -> Param {
  Param {
    name,
    default: Some(default),
  }
}

#[derive(Debug)]
pub struct Signature {
  pub name: &'static str,
  params: &'static [Param],
  /// Takes any number (at least one) of positional values
  variadic: bool,
}

const fn sig(name: &'static str, params: &'static [Param]) -> Signature {
  Signature {
    name,
    params,
    variadic: false,
  }
}

const DECIMALS: Param = opt("decimals", DefaultValue::Integer(DEFAULT_DECIMALS as i64));
const TOLERANCE: Param = opt("tolerance", DefaultValue::Real(DEFAULT_TOLERANCE));

static SIGNATURES: &[Signature] = &[
  // arithmetic
  sig("safe_add", &[req("a"), req("b")]),
  sig("safe_subtract", &[req("a"), req("b")]),
  sig("safe_multiply", &[req("a"), req("b")]),
  sig("safe_divide", &[req("a"), req("b")]),
  sig("safe_power", &[req("base"), req("exponent")]),
  sig("safe_sqrt", &[req("value")]),
  sig("safe_mod", &[req("a"), req("b")]),
  sig("factorial", &[req("n")]),
  sig("gcd", &[req("a"), req("b")]),
  sig("lcm", &[req("a"), req("b")]),
  sig("clamp", &[req("value"), req("min_val"), req("max_val")]),
  sig("sign", &[req("value")]),
  sig("abs_value", &[req("value")]),
  // rounding
  sig("floor", &[req("value")]),
  sig("ceil", &[req("value")]),
  sig("trunc", &[req("value")]),
  sig("round_half_up", &[req("value"), DECIMALS]),
  sig("round_half_even", &[req("value"), DECIMALS]),
  sig(
    "round_to_digits",
    &[
      req("value"),
      DECIMALS,
      opt("method", DefaultValue::Text("half_even")),
    ],
  ),
  // roots
  sig("nth_root", &[req("value"), req("n")]),
  sig("cbrt", &[req("value")]),
  sig(
    "sqrt_newton",
    &[
      req("value"),
      opt(
        "max_iterations",
        DefaultValue::Integer(DEFAULT_MAX_ITERATIONS as i64),
      ),
      opt("tolerance", DefaultValue::Real(DEFAULT_NEWTON_TOLERANCE)),
    ],
  ),
  sig("integer_sqrt", &[req("n")]),
  // exponential and logarithms
  sig("exp", &[req("value")]),
  sig("ln", &[req("value")]),
  sig("log2", &[req("value")]),
  sig("log10", &[req("value")]),
  sig(
    "log",
    &[req("value"), opt("base", DefaultValue::Real(std::f64::consts::E))],
  ),
  // number theory
  sig("is_prime", &[req("n")]),
  sig("prime_factors", &[req("n")]),
  sig("divisors", &[req("n")]),
  sig("totient", &[req("n")]),
  sig("are_coprime", &[req("a"), req("b")]),
  // advanced
  sig("fma", &[req("a"), req("b"), req("c")]),
  Signature {
    name: "hypot",
    params: &[],
    variadic: true,
  },
  sig("copysign", &[req("magnitude"), req("sign")]),
  sig("lerp", &[req("a"), req("b"), req("t")]),
  // tolerance comparison
  sig(
    "is_close",
    &[
      req("a"),
      req("b"),
      opt("rel_tol", DefaultValue::Real(DEFAULT_TOLERANCE)),
      opt("abs_tol", DefaultValue::Real(DEFAULT_TOLERANCE)),
    ],
  ),
  sig("is_zero", &[req("value"), TOLERANCE]),
  sig("compare", &[req("a"), req("b"), TOLERANCE]),
  // geometry
  sig("circle_area", &[req("radius")]),
  sig("circle_circumference", &[req("radius")]),
  sig("circle_diameter", &[req("radius")]),
  sig("rectangle_area", &[req("width"), req("height")]),
  sig("rectangle_perimeter", &[req("width"), req("height")]),
  sig("rectangle_diagonal", &[req("width"), req("height")]),
  sig("is_square", &[req("width"), req("height")]),
  sig("square_area", &[req("side")]),
  sig("square_perimeter", &[req("side")]),
  sig("square_diagonal", &[req("side")]),
  sig("triangle_area", &[req("a"), req("b"), req("c")]),
  sig("triangle_perimeter", &[req("a"), req("b"), req("c")]),
  sig("is_right_triangle", &[req("a"), req("b"), req("c")]),
  sig("triangle_type", &[req("a"), req("b"), req("c")]),
];

/// Short names accepted in expressions.
static ALIASES: &[(&str, &str)] = &[
  ("add", "safe_add"),
  ("subtract", "safe_subtract"),
  ("multiply", "safe_multiply"),
  ("divide", "safe_divide"),
  ("power", "safe_power"),
  ("pow", "safe_power"),
  ("sqrt", "safe_sqrt"),
  ("mod", "safe_mod"),
  ("abs", "abs_value"),
  ("round", "round_to_digits"),
  ("phi", "totient"),
];

/// Resolve a name (or alias) to its signature.
pub fn lookup(name: &str) -> Option<&'static Signature> {
  let canonical = ALIASES
    .iter()
    .find(|(alias, _)| *alias == name)
    .map_or(name, |(_, target)| *target);
  SIGNATURES.iter().find(|s| s.name == canonical)
}

/// All callable names in declaration order.
pub fn function_names() -> impl Iterator<Item = &'static str> {
  SIGNATURES.iter().map(|s| s.name)
}

/// Match positional and named arguments against a signature, filling in
/// defaults. The result is positional, one entry per parameter.
fn bind(
  signature: &Signature,
  args: Vec<Expr>,
) -> Result<Vec<Expr>, InterpreterError> {
  let name = signature.name;
  if signature.variadic {
    if args.is_empty() {
      return Err(MathError::InvalidInput(format!(
        "{name} requires at least one value"
      ))
      .into());
    }
    if args.iter().any(|a| matches!(a, Expr::NamedArgument { .. })) {
      return Err(InterpreterError::EvaluationError(format!(
        "{name} does not accept named arguments"
      )));
    }
    return Ok(args);
  }

  let params = signature.params;
  let mut slots: Vec<Option<Expr>> = vec![None; params.len()];
  let mut seen_named = false;
  let mut position = 0;

  for arg in args {
    match arg {
      Expr::NamedArgument { name: arg_name, value } => {
        seen_named = true;
        let index = params
          .iter()
          .position(|p| p.name == arg_name)
          .ok_or_else(|| {
            InterpreterError::EvaluationError(format!(
              "{name} got an unexpected argument '{arg_name}'"
            ))
          })?;
        if slots[index].is_some() {
          return Err(InterpreterError::EvaluationError(format!(
            "{name} got multiple values for argument '{arg_name}'"
          )));
        }
        slots[index] = Some(*value);
      }
      value => {
        if seen_named {
          return Err(InterpreterError::EvaluationError(format!(
            "{name}: positional argument follows named argument"
          )));
        }
        if position >= params.len() {
          return Err(InterpreterError::EvaluationError(format!(
            "{name} takes at most {} arguments",
            params.len()
          )));
        }
        slots[position] = Some(value);
        position += 1;
      }
    }
  }

  slots
    .into_iter()
    .zip(params)
    .map(|(slot, param)| match (slot, param.default) {
      (Some(value), _) => Ok(value),
      (None, Some(default)) => Ok(default.to_expr()),
      (None, None) => Err(InterpreterError::EvaluationError(format!(
        "{name} missing required argument '{}'",
        param.name
      ))),
    })
    .collect()
}

fn real(value: f64) -> Expr {
  Expr::Real(value)
}

fn integer(value: impl Into<BigInt>) -> Expr {
  Expr::Integer(value.into())
}

fn integer_list(values: Vec<i64>) -> Expr {
  Expr::List(
    values
      .into_iter()
      .map(|v| Expr::Integer(BigInt::from(v)))
      .collect(),
  )
}

/// Evaluate `name(args...)` where the arguments are already evaluated.
pub fn evaluate_function_call(
  name: &str,
  args: Vec<Expr>,
) -> Result<Expr, InterpreterError> {
  let signature = lookup(name).ok_or_else(|| {
    InterpreterError::EvaluationError(format!("Unknown function: {name}"))
  })?;
  tracing::debug!(
    function = signature.name,
    args = args.len(),
    "dispatching call"
  );
  let a = bind(signature, args)?;
  apply(signature.name, &a)
}

fn apply(name: &str, a: &[Expr]) -> Result<Expr, InterpreterError> {
  let f = |i: usize| expr_to_f64(&a[i]);
  let n = |i: usize| expr_to_i64(&a[i]);

  let result = match name {
    "safe_add" => real(functions::safe_add(f(0)?, f(1)?)?),
    "safe_subtract" => real(functions::safe_subtract(f(0)?, f(1)?)?),
    "safe_multiply" => real(functions::safe_multiply(f(0)?, f(1)?)?),
    "safe_divide" => real(functions::safe_divide(f(0)?, f(1)?)?),
    "safe_power" => real(functions::safe_power(f(0)?, f(1)?)?),
    "safe_sqrt" => real(functions::safe_sqrt(f(0)?)?),
    "safe_mod" => real(functions::safe_mod(f(0)?, f(1)?)?),
    "factorial" => integer(functions::factorial(n(0)?)?),
    "gcd" => {
      integer(functions::gcd(&expr_to_bigint(&a[0])?, &expr_to_bigint(&a[1])?))
    }
    "lcm" => {
      integer(functions::lcm(&expr_to_bigint(&a[0])?, &expr_to_bigint(&a[1])?))
    }
    "clamp" => real(functions::clamp(f(0)?, f(1)?, f(2)?)?),
    "sign" => integer(functions::sign(f(0)?)?),
    "abs_value" => real(functions::abs_value(f(0)?)),

    "floor" => real(functions::floor(f(0)?)),
    "ceil" => real(functions::ceil(f(0)?)),
    "trunc" => real(functions::trunc(f(0)?)),
    "round_half_up" => {
      real(functions::round_half_up(f(0)?, expr_to_i32(&a[1])?))
    }
    "round_half_even" => {
      real(functions::round_half_even(f(0)?, expr_to_i32(&a[1])?))
    }
    "round_to_digits" => real(functions::round_to_digits(
      f(0)?,
      expr_to_i32(&a[1])?,
      expr_to_text(&a[2])?,
    )?),

    "nth_root" => {
      let degree = n(1)?;
      if degree <= 0 {
        return Err(
          MathError::InvalidInput(format!(
            "Root degree must be positive, got {degree}"
          ))
          .into(),
        );
      }
      let degree = u32::try_from(degree).map_err(|_| {
        MathError::InvalidInput(format!("Root degree too large: {degree}"))
      })?;
      real(functions::nth_root(f(0)?, degree)?)
    }
    "cbrt" => real(functions::cbrt(f(0)?)),
    "sqrt_newton" => real(functions::sqrt_newton(
      f(0)?,
      expr_to_u32(&a[1])?,
      f(2)?,
    )?),
    "integer_sqrt" => {
      let value = n(0)?;
      let value = u64::try_from(value).map_err(|_| {
        MathError::InvalidInput(format!(
          "integer_sqrt requires a non-negative integer, got {value}"
        ))
      })?;
      integer(functions::integer_sqrt(value))
    }

    "exp" => real(functions::exp(f(0)?)?),
    "ln" => real(functions::ln(f(0)?)?),
    "log2" => real(functions::log2(f(0)?)?),
    "log10" => real(functions::log10(f(0)?)?),
    "log" => real(functions::log(f(0)?, f(1)?)?),

    "is_prime" => Expr::Bool(functions::is_prime(n(0)?)?),
    "prime_factors" => integer_list(functions::prime_factors(n(0)?)?),
    "divisors" => integer_list(functions::divisors(n(0)?)?),
    "totient" => integer(functions::totient(n(0)?)?),
    "are_coprime" => Expr::Bool(functions::are_coprime(n(0)?, n(1)?)),

    "fma" => real(functions::fma(f(0)?, f(1)?, f(2)?)),
    "hypot" => {
      let values = a.iter().map(expr_to_f64).collect::<Result<Vec<_>, _>>()?;
      real(functions::hypot(&values)?)
    }
    "copysign" => real(functions::copysign(f(0)?, f(1)?)),
    "lerp" => real(functions::lerp(f(0)?, f(1)?, f(2)?)),

    "is_close" => {
      Expr::Bool(functions::is_close(f(0)?, f(1)?, f(2)?, f(3)?)?)
    }
    "is_zero" => Expr::Bool(functions::is_zero(f(0)?, f(1)?)?),
    "compare" => integer(functions::compare(f(0)?, f(1)?, f(2)?)?),

    "circle_area" => real(Circle::new(f(0)?)?.area()),
    "circle_circumference" => real(Circle::new(f(0)?)?.circumference()),
    "circle_diameter" => real(Circle::new(f(0)?)?.diameter()),
    "rectangle_area" => real(Rectangle::new(f(0)?, f(1)?)?.area()),
    "rectangle_perimeter" => real(Rectangle::new(f(0)?, f(1)?)?.perimeter()),
    "rectangle_diagonal" => real(Rectangle::new(f(0)?, f(1)?)?.diagonal()?),
    "is_square" => Expr::Bool(Rectangle::new(f(0)?, f(1)?)?.is_square()),
    "square_area" => real(Square::new(f(0)?)?.area()),
    "square_perimeter" => real(Square::new(f(0)?)?.perimeter()),
    "square_diagonal" => real(Square::new(f(0)?)?.diagonal()),
    "triangle_area" => real(Triangle::new(f(0)?, f(1)?, f(2)?)?.area()),
    "triangle_perimeter" => {
      real(Triangle::new(f(0)?, f(1)?, f(2)?)?.perimeter())
    }
    "is_right_triangle" => {
      Expr::Bool(Triangle::new(f(0)?, f(1)?, f(2)?)?.is_right_triangle())
    }
    "triangle_type" => Expr::String(
      Triangle::new(f(0)?, f(1)?, f(2)?)?.triangle_type().to_string(),
    ),

    _ => {
      return Err(InterpreterError::EvaluationError(format!(
        "No implementation bound for {name}"
      )));
    }
  };
  Ok(result)
}
