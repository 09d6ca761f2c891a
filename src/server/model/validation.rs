//! Request validation driven by the same field descriptors published in affordances.

use std::{
    collections::{hash_map::Entry, HashMap},
    sync::Mutex,
};

use once_cell::sync::Lazy;
use regex::Regex;

use crate::server::{
    error::AppError,
    hypermedia::affordance::{FieldDescriptor, FieldFormat},
};

const EMAIL_PATTERN: &str = r"[^@\s]+@[^@\s]+";

/// Anchored regexes keyed by the declared pattern, compiled on first use.
static COMPILED: Lazy<Mutex<HashMap<&'static str, Regex>>> =
    Lazy::new(|| Mutex::new(HashMap::new()));

/// Collects constraint violations of one request body.
#[derive(Debug, Default)]
pub struct Validator {
    violations: Vec<String>,
}

impl Validator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Checks a text, email or select value against its descriptor.
    ///
    /// # Returns
    /// - `Ok(&mut Self)` - Value checked, violations recorded
    /// - `Err(AppError::InternalError)` - Declared pattern is not a valid regex
    pub fn text(&mut self, field: &FieldDescriptor, value: &str) -> Result<&mut Self, AppError> {
        if field.non_blank && value.trim().is_empty() {
            self.violations.push(format!("{} must not be blank", field.name));
            return Ok(self);
        }

        if let Some(max) = field.max_length {
            if value.chars().count() > max {
                self.violations
                    .push(format!("{} must not exceed {} characters", field.name, max));
            }
        }

        if let Some(pattern) = field.pattern {
            if !full_match(pattern, value)? {
                self.violations
                    .push(format!("{} does not match {}", field.name, pattern));
            }
        }

        if field.format == FieldFormat::Email
            && !value.is_empty()
            && !full_match(EMAIL_PATTERN, value)?
        {
            self.violations
                .push(format!("{} must be a valid email address", field.name));
        }

        if field.format == FieldFormat::Select && !field.options.contains(&value) {
            self.violations.push(format!(
                "{} must be one of {}",
                field.name,
                field.options.join(", ")
            ));
        }

        Ok(self)
    }

    /// Checks a numeric value against the descriptor's bounds.
    pub fn number(&mut self, field: &FieldDescriptor, value: i64) -> &mut Self {
        if let Some(min) = field.min {
            if value < min {
                self.violations
                    .push(format!("{} must be greater than or equal to {}", field.name, min));
            }
        }
        if let Some(max) = field.max {
            if value > max {
                self.violations
                    .push(format!("{} must be less than or equal to {}", field.name, max));
            }
        }
        self
    }

    /// Records a violation detected outside the descriptor checks.
    pub fn reject(&mut self, message: impl Into<String>) -> &mut Self {
        self.violations.push(message.into());
        self
    }

    /// # Returns
    /// - `Ok(())` - No violation was recorded
    /// - `Err(AppError::BadRequest)` - Every violation, joined with `; `
    pub fn finish(&self) -> Result<(), AppError> {
        if self.violations.is_empty() {
            Ok(())
        } else {
            Err(AppError::BadRequest(self.violations.join("; ")))
        }
    }
}

fn full_match(pattern: &'static str, value: &str) -> Result<bool, AppError> {
    let mut compiled = COMPILED
        .lock()
        .map_err(|_| AppError::InternalError("Field pattern cache is poisoned".to_string()))?;

    let regex = match compiled.entry(pattern) {
        Entry::Occupied(entry) => entry.into_mut(),
        Entry::Vacant(entry) => {
            let regex = Regex::new(&format!("^(?:{})$", pattern)).map_err(|e| {
                AppError::InternalError(format!("Invalid field pattern {}: {}", pattern, e))
            })?;
            entry.insert(regex)
        }
    };

    Ok(regex.is_match(value))
}
