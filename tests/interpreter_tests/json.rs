use super::*;
use serde_json::json;

mod results {
  use super::*;

  #[test]
  fn scalars() {
    assert_eq!(interpret_json("gcd(48, 18)"), json!({ "result": 6 }));
    assert_eq!(interpret_json("0.5 + 0.25"), json!({ "result": 0.75 }));
    assert_eq!(interpret_json("is_prime(7)"), json!({ "result": true }));
    assert_eq!(interpret_json("triangle_type(2, 2, 2)"), json!({ "result": "equilateral" }));
  }

  #[test]
  fn lists() {
    assert_eq!(interpret_json("prime_factors(12)"), json!({ "result": [2, 2, 3] }));
  }

  #[test]
  fn wide_values_become_strings() {
    assert_eq!(
      interpret_json("factorial(25)"),
      json!({ "result": "15511210043330985984000000" })
    );
    assert_eq!(interpret_json("inf"), json!({ "result": "inf" }));
  }
}

mod failures {
  use super::*;

  #[test]
  fn math_error_kinds() {
    assert_eq!(
      interpret_json("10 / 0"),
      json!({ "error": "Division by zero", "kind": "division_by_zero" })
    );
    assert_eq!(interpret_json("exp(1000)")["kind"], "overflow");
    assert_eq!(interpret_json("sqrt(-1)")["kind"], "invalid_input");
  }

  #[test]
  fn front_end_error_kinds() {
    assert_eq!(interpret_json("frobnicate(1)")["kind"], "evaluation_error");
    assert_eq!(interpret_json("2 +")["kind"], "parse_error");
    assert_eq!(interpret_json("")["kind"], "empty_input");
  }

  #[test]
  fn no_result_on_error() {
    assert!(interpret_json("factorial(-1)").get("result").is_none());
  }
}
