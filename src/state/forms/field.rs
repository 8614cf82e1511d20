//! Form field value objects

use super::validation::format_phone;
use crate::state::Role;
use serde_json::Value;
use zeroize::Zeroize;

/// Type-safe field values
#[derive(Debug, Clone, PartialEq)]
pub enum FieldValue {
    Text(String),
    Flag(bool),
    Number(i64),
    Role(Role),
}

impl Default for FieldValue {
    fn default() -> Self {
        FieldValue::Text(String::new())
    }
}

impl FieldValue {
    pub fn to_json(&self) -> Value {
        match self {
            FieldValue::Text(s) => Value::String(s.clone()),
            FieldValue::Flag(b) => Value::Bool(*b),
            FieldValue::Number(n) => Value::from(*n),
            FieldValue::Role(r) => Value::String(r.as_str().to_string()),
        }
    }
}

/// Which local rules a field gets
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    Text,
    Email,
    Phone,
    Password,
    Flag,
    Number,
    Role,
}

/// Represents a single form field with its configuration and value
#[derive(Debug, Clone)]
pub struct FormField {
    pub name: String,
    pub label: String,
    pub kind: FieldKind,
    pub value: FieldValue,
    /// Value loaded from the server when editing an existing record
    pub original: Option<FieldValue>,
    pub required: bool,
    pub is_multiline: bool,
}

impl FormField {
    fn new(name: &str, label: &str, kind: FieldKind, value: FieldValue) -> Self {
        Self {
            name: name.to_string(),
            label: label.to_string(),
            kind,
            value,
            original: None,
            required: false,
            is_multiline: false,
        }
    }

    /// Create a new text field
    pub fn text(name: &str, label: &str, is_multiline: bool) -> Self {
        Self {
            is_multiline,
            ..Self::new(name, label, FieldKind::Text, FieldValue::default())
        }
    }

    pub fn email(name: &str, label: &str) -> Self {
        Self::new(name, label, FieldKind::Email, FieldValue::default())
    }

    pub fn phone(name: &str, label: &str) -> Self {
        Self::new(name, label, FieldKind::Phone, FieldValue::default())
    }

    pub fn password(name: &str, label: &str) -> Self {
        Self::new(name, label, FieldKind::Password, FieldValue::default())
    }

    pub fn flag(name: &str, label: &str) -> Self {
        Self::new(name, label, FieldKind::Flag, FieldValue::Flag(false))
    }

    pub fn number(name: &str, label: &str) -> Self {
        Self::new(name, label, FieldKind::Number, FieldValue::Number(0))
    }

    pub fn role(name: &str, label: &str) -> Self {
        Self::new(name, label, FieldKind::Role, FieldValue::Role(Role::default()))
    }

    /// Mark the field as required
    pub fn required(mut self) -> Self {
        self.required = true;
        self
    }

    /// Start with `value` (not treated as a stored original)
    pub fn with_value(mut self, value: FieldValue) -> Self {
        self.value = self.normalize(value);
        self
    }

    /// Load a server-provided value; it also becomes the field's original
    pub fn with_original(mut self, value: FieldValue) -> Self {
        let value = self.normalize(value);
        self.original = Some(value.clone());
        self.value = value;
        self
    }

    /// Apply per-kind input shaping (phone grouping)
    pub fn normalize(&self, value: FieldValue) -> FieldValue {
        match (self.kind, value) {
            (FieldKind::Phone, FieldValue::Text(s)) => FieldValue::Text(format_phone(&s)),
            (_, value) => value,
        }
    }

    pub fn is_sensitive(&self) -> bool {
        self.kind == FieldKind::Password
    }

    /// True when the value equals the one loaded from the server
    pub fn is_unchanged(&self, value: &FieldValue) -> bool {
        self.original.as_ref() == Some(value)
    }

    /// Get the text value (returns empty string for non-text fields)
    pub fn as_text(&self) -> &str {
        match &self.value {
            FieldValue::Text(s) => s,
            _ => "",
        }
    }

    /// Value after typing `c`, without mutating the field
    pub fn with_char(&self, c: char) -> FieldValue {
        match &self.value {
            FieldValue::Text(s) => {
                let mut next = s.clone();
                next.push(c);
                self.normalize(FieldValue::Text(next))
            }
            FieldValue::Flag(b) if c == ' ' => FieldValue::Flag(!b),
            FieldValue::Role(r) if c == ' ' => FieldValue::Role(r.next()),
            FieldValue::Number(n) => match c.to_digit(10) {
                Some(d) => FieldValue::Number(n.saturating_mul(10).saturating_add(d as i64)),
                None => FieldValue::Number(*n),
            },
            other => other.clone(),
        }
    }

    /// Value after a backspace, without mutating the field
    pub fn without_last_char(&self) -> FieldValue {
        match &self.value {
            FieldValue::Text(s) if self.kind == FieldKind::Phone => {
                // Drop the last digit, not a trailing separator
                let mut digits = super::validation::phone_digits(s);
                digits.pop();
                FieldValue::Text(format_phone(&digits))
            }
            FieldValue::Text(s) => {
                let mut next = s.clone();
                next.pop();
                FieldValue::Text(next)
            }
            FieldValue::Number(n) => FieldValue::Number(n / 10),
            other => other.clone(),
        }
    }

    /// Clear the field value, wiping sensitive text from memory
    pub fn clear(&mut self) {
        match &mut self.value {
            FieldValue::Text(s) => {
                s.zeroize();
            }
            FieldValue::Flag(b) => *b = false,
            FieldValue::Number(n) => *n = 0,
            FieldValue::Role(r) => *r = Role::default(),
        }
    }

    /// Get the display value for rendering
    pub fn display_value(&self) -> String {
        match &self.value {
            FieldValue::Text(s) if self.is_sensitive() => "•".repeat(s.chars().count()),
            FieldValue::Text(s) => s.clone(),
            FieldValue::Flag(true) => "[x] yes".to_string(),
            FieldValue::Flag(false) => "[ ] no".to_string(),
            FieldValue::Number(n) => n.to_string(),
            FieldValue::Role(r) => format!("◂ {} ▸", r.label()),
        }
    }
}
