//! Expense Arithmetic
//!
//! Pure calculations behind the travel tools. Inputs come from the model
//! as loosely typed JSON, so the parsing helper accepts numbers and
//! numeric strings alike; everything else is an invalid argument.

use crate::error::{PlannerError, Result};

/// Total hotel cost: nightly price times number of nights
pub fn hotel_cost(price_per_night: f64, total_days: f64) -> f64 {
    price_per_night * total_days
}

/// Sum a list of individual costs
pub fn total(costs: &[f64]) -> f64 {
    costs.iter().sum()
}

/// Daily budget for a trip of `days` days
pub fn daily_budget(total_cost: f64, days: f64) -> Result<f64> {
    if days <= 0.0 {
        return Err(PlannerError::InvalidArgument(
            "'days' must be a positive number".into(),
        ));
    }
    Ok(total_cost / days)
}

/// Extract a number from a JSON value, accepting numeric strings ("150")
/// the way the tools' callers tend to pass them.
pub fn parse_number(name: &str, value: &serde_json::Value) -> Result<f64> {
    let parsed = match value {
        serde_json::Value::Number(n) => n.as_f64(),
        serde_json::Value::String(s) => s.trim().parse::<f64>().ok(),
        _ => None,
    };

    match parsed {
        Some(n) if n.is_finite() => Ok(n),
        _ => Err(PlannerError::InvalidArgument(format!(
            "'{}' must be a number, got: {}",
            name, value
        ))),
    }
}

/// Extract a list of numbers from a JSON value. A bare number is not a
/// list; reject it rather than silently wrapping.
pub fn parse_number_list(name: &str, value: &serde_json::Value) -> Result<Vec<f64>> {
    let serde_json::Value::Array(items) = value else {
        return Err(PlannerError::InvalidArgument(format!(
            "'{}' must be provided as a list of numbers",
            name
        )));
    };

    items
        .iter()
        .map(|item| parse_number(name, item))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_hotel_cost() {
        assert_eq!(hotel_cost(150.0, 4.0), 600.0);
    }

    #[test]
    fn test_total() {
        assert_eq!(total(&[10.0, 20.0, 30.5]), 60.5);
        assert_eq!(total(&[]), 0.0);
    }

    #[test]
    fn test_daily_budget() {
        assert_eq!(daily_budget(300.0, 3.0).unwrap(), 100.0);
    }

    #[test]
    fn test_daily_budget_zero_days() {
        let err = daily_budget(300.0, 0.0).unwrap_err();
        assert!(matches!(err, PlannerError::InvalidArgument(_)));
    }

    #[test]
    fn test_daily_budget_negative_days() {
        assert!(daily_budget(300.0, -2.0).is_err());
    }

    #[test]
    fn test_parse_number_accepts_numeric_string() {
        assert_eq!(parse_number("price", &json!("150")).unwrap(), 150.0);
        assert_eq!(parse_number("price", &json!(42.5)).unwrap(), 42.5);
    }

    #[test]
    fn test_parse_number_rejects_garbage() {
        assert!(parse_number("price", &json!("cheap")).is_err());
        assert!(parse_number("price", &json!(null)).is_err());
        assert!(parse_number("price", &json!([1])).is_err());
    }

    #[test]
    fn test_parse_number_list() {
        assert_eq!(
            parse_number_list("costs", &json!([10, 20, 30.5])).unwrap(),
            vec![10.0, 20.0, 30.5]
        );
    }

    #[test]
    fn test_parse_number_list_rejects_scalar() {
        let err = parse_number_list("costs", &json!(60.5)).unwrap_err();
        assert!(matches!(err, PlannerError::InvalidArgument(_)));
    }

    #[test]
    fn test_parse_number_list_rejects_bad_element() {
        assert!(parse_number_list("costs", &json!([10, "x"])).is_err());
    }
}
