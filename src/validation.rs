//! Declarative per-route validation rules, evaluated eagerly.
//!
//! Every rule declared for a route runs in a single pass and each violation
//! contributes one error entry; the response reports all of them at once
//! rather than short-circuiting on the first failure.

use serde::Serialize;
use serde_json::Value;

use crate::error::AppError;

/// One failed rule: human-readable message plus the offending field.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FieldError {
    pub msg: String,
    pub field: String,
    pub location: &'static str,
}

impl FieldError {
    fn body(field: &str, msg: &str) -> Self {
        FieldError {
            msg: msg.into(),
            field: field.into(),
            location: "body",
        }
    }
}

#[derive(Debug, Clone, Copy)]
pub enum Rule {
    /// Rejects a missing field, JSON null, a string that trims to empty,
    /// and composite values (arrays, objects), which normalize to an empty
    /// string. Non-string scalars count as present.
    Required,
    /// Rejects anything that is not a JSON number or a string parseable as
    /// a finite number. A missing field fails this rule too.
    Numeric,
    /// Fires only when a numeric value is extractable and it is <= 0.
    GreaterThanZero,
    /// Rejects anything but JSON true/false, including a missing field.
    Boolean,
}

pub struct FieldRule {
    pub field: &'static str,
    pub rule: Rule,
    pub message: &'static str,
}

pub const CREATE_RULES: &[FieldRule] = &[
    FieldRule {
        field: "name",
        rule: Rule::Required,
        message: "name cannot be empty",
    },
    FieldRule {
        field: "price",
        rule: Rule::Numeric,
        message: "price must be a number",
    },
    FieldRule {
        field: "price",
        rule: Rule::Required,
        message: "price cannot be empty",
    },
    FieldRule {
        field: "price",
        rule: Rule::GreaterThanZero,
        message: "price must be greater than 0",
    },
];

/// Replace-update validates everything create does, plus the availability flag.
pub const UPDATE_RULES: &[FieldRule] = &[
    FieldRule {
        field: "name",
        rule: Rule::Required,
        message: "name cannot be empty",
    },
    FieldRule {
        field: "price",
        rule: Rule::Numeric,
        message: "price must be a number",
    },
    FieldRule {
        field: "price",
        rule: Rule::Required,
        message: "price cannot be empty",
    },
    FieldRule {
        field: "price",
        rule: Rule::GreaterThanZero,
        message: "price must be greater than 0",
    },
    FieldRule {
        field: "availability",
        rule: Rule::Boolean,
        message: "availability must be a boolean",
    },
];

/// Run every rule against the body, collecting all violations.
pub fn check_body(rules: &[FieldRule], body: &Value) -> Vec<FieldError> {
    let mut errors = Vec::new();
    for rule in rules {
        let value = body.get(rule.field);
        if !passes(rule.rule, value) {
            errors.push(FieldError::body(rule.field, rule.message));
        }
    }
    errors
}

/// Parse a path id. Non-integer ids are reported against the `params`
/// location so they aggregate with any body errors for the same request.
pub fn parse_id(raw: &str) -> Result<i32, FieldError> {
    raw.parse::<i32>().map_err(|_| FieldError {
        msg: "id must be an integer".into(),
        field: "id".into(),
        location: "params",
    })
}

/// Convert collected violations into the 400 error, or pass through.
pub fn reject_if_invalid(errors: Vec<FieldError>) -> Result<(), AppError> {
    if errors.is_empty() {
        Ok(())
    } else {
        Err(AppError::Validation(errors))
    }
}

fn passes(rule: Rule, value: Option<&Value>) -> bool {
    match rule {
        Rule::Required => match value {
            None | Some(Value::Null) => false,
            Some(Value::String(s)) => !s.trim().is_empty(),
            Some(Value::Array(_)) | Some(Value::Object(_)) => false,
            Some(_) => true,
        },
        Rule::Numeric => value.map_or(false, |v| numeric_value(v).is_some()),
        Rule::GreaterThanZero => match value.and_then(numeric_value) {
            Some(n) => n > 0.0,
            None => true,
        },
        Rule::Boolean => matches!(value, Some(Value::Bool(_))),
    }
}

/// Extract a number from a JSON number or a numeric string. String input
/// must parse to a finite value; "inf" and "NaN" are not prices.
pub fn numeric_value(value: &Value) -> Option<f64> {
    match value {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => s.trim().parse::<f64>().ok().filter(|n| n.is_finite()),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn fields(errors: &[FieldError]) -> Vec<&str> {
        errors.iter().map(|e| e.field.as_str()).collect()
    }

    #[test]
    fn valid_create_body_has_no_errors() {
        let body = json!({"name": "Monitor", "price": 300});
        assert!(check_body(CREATE_RULES, &body).is_empty());
    }

    #[test]
    fn empty_body_yields_three_errors() {
        let body = json!({});
        let errors = check_body(CREATE_RULES, &body);
        assert_eq!(errors.len(), 3);
        assert_eq!(fields(&errors), vec!["name", "price", "price"]);
    }

    #[test]
    fn price_zero_yields_only_the_positivity_error() {
        let body = json!({"name": "Monitor", "price": 0});
        let errors = check_body(CREATE_RULES, &body);
        assert_eq!(errors.len(), 1);
        assert_eq!(errors[0].msg, "price must be greater than 0");
    }

    #[test]
    fn negative_price_yields_only_the_positivity_error() {
        let body = json!({"name": "Monitor", "price": -10});
        let errors = check_body(CREATE_RULES, &body);
        assert_eq!(errors.len(), 1);
        assert_eq!(errors[0].msg, "price must be greater than 0");
    }

    #[test]
    fn non_numeric_price_yields_only_the_numeric_error() {
        let body = json!({"name": "Monitor", "price": "hola"});
        let errors = check_body(CREATE_RULES, &body);
        assert_eq!(errors.len(), 1);
        assert_eq!(errors[0].msg, "price must be a number");
    }

    #[test]
    fn numeric_string_price_is_accepted() {
        let body = json!({"name": "Monitor", "price": "19.99"});
        assert!(check_body(CREATE_RULES, &body).is_empty());
    }

    #[test]
    fn whitespace_name_is_rejected() {
        let body = json!({"name": "   ", "price": 5});
        let errors = check_body(CREATE_RULES, &body);
        assert_eq!(errors.len(), 1);
        assert_eq!(errors[0].field, "name");
    }

    #[test]
    fn composite_name_values_are_rejected() {
        for name in [json!([]), json!({}), json!(["Monitor"])] {
            let body = json!({"name": name, "price": 5});
            let errors = check_body(CREATE_RULES, &body);
            assert_eq!(errors.len(), 1);
            assert_eq!(errors[0].field, "name");
            assert_eq!(errors[0].msg, "name cannot be empty");
        }
    }

    #[test]
    fn non_finite_price_strings_are_rejected() {
        for price in ["inf", "-inf", "Infinity", "NaN"] {
            let body = json!({"name": "Monitor", "price": price});
            let errors = check_body(CREATE_RULES, &body);
            assert_eq!(errors.len(), 1);
            assert_eq!(errors[0].msg, "price must be a number");
        }
    }

    #[test]
    fn null_price_fails_both_numeric_and_required() {
        let body = json!({"name": "Monitor", "price": null});
        let errors = check_body(CREATE_RULES, &body);
        assert_eq!(errors.len(), 2);
        assert_eq!(fields(&errors), vec!["price", "price"]);
    }

    #[test]
    fn update_requires_boolean_availability() {
        let body = json!({"name": "Monitor", "price": 5, "availability": "yes"});
        let errors = check_body(UPDATE_RULES, &body);
        assert_eq!(errors.len(), 1);
        assert_eq!(errors[0].field, "availability");

        let body = json!({"name": "Monitor", "price": 5});
        let errors = check_body(UPDATE_RULES, &body);
        assert_eq!(errors.len(), 1);
        assert_eq!(errors[0].field, "availability");

        let body = json!({"name": "Monitor", "price": 5, "availability": false});
        assert!(check_body(UPDATE_RULES, &body).is_empty());
    }

    #[test]
    fn path_id_must_parse_as_integer() {
        assert_eq!(parse_id("42"), Ok(42));
        assert_eq!(parse_id("-1"), Ok(-1));
        let err = parse_id("not-valid-id").unwrap_err();
        assert_eq!(err.location, "params");
        assert_eq!(err.field, "id");
        assert!(parse_id("1.5").is_err());
    }
}
