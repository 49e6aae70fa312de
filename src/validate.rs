use std::collections::HashMap;

use regex::Regex;

lazy_static::lazy_static! {
    static ref EMAIL_RE: Regex = Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").unwrap();
}

/// Declarative field rules for form validation.
#[derive(Debug, Clone)]
pub enum Rule {
    Required,
    MinValue(i64),
    MaxValue(i64),
    Pattern(&'static str),
    Email,
    Custom(fn(&str) -> bool),
}

#[derive(Debug, Clone)]
struct FieldRule {
    field: &'static str,
    rule: Rule,
    message: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationError {
    pub field: &'static str,
    pub message: String,
}

/// Rule table evaluated uniformly over named string fields. Rules fire in
/// declaration order; all failures are reported, not just the first.
#[derive(Debug, Clone, Default)]
pub struct Validator {
    rules: Vec<FieldRule>,
}

impl Validator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn rule(mut self, field: &'static str, rule: Rule, message: &str) -> Self {
        self.rules.push(FieldRule {
            field,
            rule,
            message: message.to_string(),
        });
        self
    }

    pub fn validate(&self, values: &HashMap<&str, String>) -> Vec<ValidationError> {
        let mut errors = Vec::new();

        for fr in &self.rules {
            let value = values.get(fr.field).map(String::as_str).unwrap_or("");
            let ok = match &fr.rule {
                Rule::Required => !value.trim().is_empty(),
                Rule::MinValue(min) => value.trim().parse::<i64>().map_or(false, |v| v >= *min),
                Rule::MaxValue(max) => value.trim().parse::<i64>().map_or(false, |v| v <= *max),
                Rule::Pattern(pattern) => Regex::new(pattern)
                    .map(|re| re.is_match(value))
                    .unwrap_or(false),
                Rule::Email => EMAIL_RE.is_match(value),
                Rule::Custom(check) => check(value),
            };
            if !ok {
                errors.push(ValidationError {
                    field: fr.field,
                    message: fr.message.clone(),
                });
            }
        }

        errors
    }

    pub fn is_valid(&self, values: &HashMap<&str, String>) -> bool {
        self.validate(values).is_empty()
    }
}
