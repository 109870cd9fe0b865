// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 snakegen contributors

//! Cron expression checks
//!
//! Only the shape is checked: five fields, cron characters, numeric values
//! within range. The expression is never evaluated.

use regex::Regex;
use std::sync::OnceLock;

const MONTH_NAMES: [&str; 12] = [
    "JAN", "FEB", "MAR", "APR", "MAY", "JUN", "JUL", "AUG", "SEP", "OCT", "NOV", "DEC",
];
const DAY_NAMES: [&str; 7] = ["SUN", "MON", "TUE", "WED", "THU", "FRI", "SAT"];

struct FieldSpec {
    name: &'static str,
    min: u32,
    max: u32,
    names: &'static [&'static str],
}

const FIELDS: [FieldSpec; 5] = [
    FieldSpec { name: "minute", min: 0, max: 59, names: &[] },
    FieldSpec { name: "hour", min: 0, max: 23, names: &[] },
    FieldSpec { name: "day-of-month", min: 1, max: 31, names: &[] },
    FieldSpec { name: "month", min: 1, max: 12, names: &MONTH_NAMES },
    FieldSpec { name: "day-of-week", min: 0, max: 7, names: &DAY_NAMES },
];

fn field_chars() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"^[0-9A-Za-z*,/\-]+$").expect("cron field pattern is valid"))
}

/// A five-field cron expression that passed the shape checks
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CronSchedule(String);

impl CronSchedule {
    /// Check and wrap an expression; the trimmed text is kept verbatim
    pub fn parse(expr: &str) -> Result<Self, String> {
        let tokens: Vec<&str> = expr.split_whitespace().collect();
        if tokens.len() != FIELDS.len() {
            return Err(format!(
                "'{}' has {} field(s), expected 5 (minute hour day-of-month month day-of-week)",
                expr.trim(),
                tokens.len()
            ));
        }

        for (token, spec) in tokens.iter().zip(FIELDS.iter()) {
            check_field(token, spec)?;
        }

        Ok(Self(expr.trim().to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for CronSchedule {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

fn check_field(token: &str, spec: &FieldSpec) -> Result<(), String> {
    if !field_chars().is_match(token) {
        return Err(format!(
            "{} field '{}' contains characters not allowed in cron",
            spec.name, token
        ));
    }

    for part in token.split(',') {
        if part.is_empty() {
            return Err(format!("{} field '{}' has an empty list element", spec.name, token));
        }

        let range = match part.split_once('/') {
            Some((range, step)) => {
                match step.parse::<u32>() {
                    Ok(n) if n > 0 => {}
                    _ => {
                        return Err(format!(
                            "{} field '{}' has an invalid step '{}'",
                            spec.name, token, step
                        ))
                    }
                }
                range
            }
            None => part,
        };

        if range == "*" {
            continue;
        }

        let bounds: Vec<&str> = range.split('-').collect();
        if bounds.len() > 2 || bounds.iter().any(|b| b.is_empty()) {
            return Err(format!("{} field '{}' has a malformed range '{}'", spec.name, token, range));
        }

        for bound in bounds {
            check_value(bound, token, spec)?;
        }
    }

    Ok(())
}

fn check_value(value: &str, token: &str, spec: &FieldSpec) -> Result<(), String> {
    if let Ok(n) = value.parse::<u32>() {
        if n < spec.min || n > spec.max {
            return Err(format!(
                "{} field '{}': {} is outside {}-{}",
                spec.name, token, n, spec.min, spec.max
            ));
        }
        return Ok(());
    }

    let upper = value.to_uppercase();
    if spec.names.contains(&upper.as_str()) {
        Ok(())
    } else {
        Err(format!("{} field '{}': '{}' is not a valid value", spec.name, token, value))
    }
}
