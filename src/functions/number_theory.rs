//! Trial-division number theory on checked 64-bit integers.
//!
//! Each routine is O(√n). Inputs arriving as floats go through
//! [`as_integer`](super::arithmetic::as_integer) first, so a fractional part
//! is rejected before it reaches here.

use super::arithmetic::gcd;
use super::roots::integer_sqrt;
use crate::MathError;
use num_bigint::BigInt;
use num_traits::One;

fn require_positive(n: i64, name: &str) -> Result<u64, MathError> {
  if n <= 0 {
    return Err(MathError::InvalidInput(format!(
      "{name} requires a positive integer, got {n}"
    )));
  }
  Ok(n as u64)
}

/// Primality by trial division over odd candidates up to `⌊√n⌋`.
///
/// 0 and 1 are not prime; negative input is rejected.
pub fn is_prime(n: i64) -> Result<bool, MathError> {
  if n < 0 {
    return Err(MathError::InvalidInput(format!(
      "is_prime requires a non-negative integer, got {n}"
    )));
  }
  let n = n as u64;
  if n < 2 {
    return Ok(false);
  }
  if n < 4 {
    return Ok(true);
  }
  if n % 2 == 0 {
    return Ok(false);
  }
  let limit = integer_sqrt(n);
  let mut d = 3;
  while d <= limit {
    if n % d == 0 {
      return Ok(false);
    }
    d += 2;
  }
  Ok(true)
}

/// Prime factors in ascending order, with multiplicity: `60 -> [2, 2, 3, 5]`.
pub fn prime_factors(n: i64) -> Result<Vec<i64>, MathError> {
  let mut num = require_positive(n, "prime_factors")?;
  let mut factors = Vec::new();

  while num % 2 == 0 {
    factors.push(2);
    num /= 2;
  }

  let mut d = 3;
  // the bound shrinks as factors are divided out
  while d <= integer_sqrt(num) {
    while num % d == 0 {
      factors.push(d as i64);
      num /= d;
    }
    d += 2;
  }

  if num > 1 {
    factors.push(num as i64);
  }
  Ok(factors)
}

/// All positive divisors in ascending order.
pub fn divisors(n: i64) -> Result<Vec<i64>, MathError> {
  let n = require_positive(n, "divisors")?;
  let mut small = Vec::new();
  let mut large = Vec::new();

  for i in 1..=integer_sqrt(n) {
    if n % i == 0 {
      small.push(i as i64);
      let pair = n / i;
      if pair != i {
        large.push(pair as i64);
      }
    }
  }

  large.reverse();
  small.extend(large);
  Ok(small)
}

/// Euler's totient via `n · ∏(1 − 1/p)` over the distinct primes `p | n`.
pub fn totient(n: i64) -> Result<i64, MathError> {
  require_positive(n, "totient")?;
  let mut distinct = prime_factors(n)?;
  distinct.dedup();

  let mut result = n;
  for p in distinct {
    result -= result / p;
  }
  Ok(result)
}

/// True when `gcd(a, b) == 1`.
pub fn are_coprime(a: i64, b: i64) -> bool {
  gcd(&BigInt::from(a), &BigInt::from(b)).is_one()
}
