use std::collections::BTreeMap;
use thiserror::Error;

use crate::shared::date_utils::{date_input, parse_date, to_iso_timestamp};
use crate::shared::metadata::{find_field, FieldKind, FieldMetadata};

/// Typed value of one form field
#[derive(Debug, Clone, PartialEq)]
pub enum FieldValue {
    Text(String),
    Integer(Option<i64>),
    Decimal(Option<f64>),
    Flag(bool),
}

impl FieldValue {
    /// Initial value of an empty add form
    pub fn empty_for(kind: FieldKind) -> Self {
        match kind {
            FieldKind::Integer | FieldKind::Reference(_) => Self::Integer(None),
            FieldKind::Decimal => Self::Decimal(None),
            FieldKind::Boolean => Self::Flag(false),
            FieldKind::Choice(values) => Self::Text(
                values
                    .first()
                    .map(|(value, _)| value.to_string())
                    .unwrap_or_default(),
            ),
            FieldKind::Text | FieldKind::Date => Self::Text(String::new()),
        }
    }

    /// A checkbox is never empty
    pub fn is_empty(&self) -> bool {
        match self {
            Self::Text(s) => s.trim().is_empty(),
            Self::Integer(v) => v.is_none(),
            Self::Decimal(v) => v.is_none(),
            Self::Flag(_) => false,
        }
    }

    /// Text for an input's value attribute
    pub fn display(&self) -> String {
        match self {
            Self::Text(s) => s.clone(),
            Self::Integer(v) => v.map(|v| v.to_string()).unwrap_or_default(),
            Self::Decimal(v) => v.map(|v| v.to_string()).unwrap_or_default(),
            Self::Flag(b) => b.to_string(),
        }
    }
}

/// What a widget reports on change
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RawInput {
    Text(String),
    Checked(bool),
}

impl RawInput {
    fn into_text(self) -> String {
        match self {
            Self::Text(s) => s,
            Self::Checked(b) => b.to_string(),
        }
    }
}

/// Leading-integer parse in the manner of `parseInt`: "12.7" -> 12, "abc" -> None
fn parse_int_prefix(raw: &str) -> Option<i64> {
    let raw = raw.trim();
    let (sign, rest) = match raw.strip_prefix('-') {
        Some(rest) => (-1, rest),
        None => (1, raw.strip_prefix('+').unwrap_or(raw)),
    };
    let digits: String = rest.chars().take_while(|c| c.is_ascii_digit()).collect();
    if digits.is_empty() {
        return None;
    }
    digits.parse::<i64>().ok().map(|v| v * sign)
}

fn parse_decimal(raw: &str) -> Option<f64> {
    raw.trim().parse::<f64>().ok().filter(|v| v.is_finite())
}

/// Coerce widget input according to the field kind
pub fn coerce(kind: FieldKind, input: RawInput) -> FieldValue {
    match (kind, input) {
        (FieldKind::Boolean, RawInput::Checked(checked)) => FieldValue::Flag(checked),
        (FieldKind::Boolean, RawInput::Text(s)) => {
            FieldValue::Flag(matches!(s.trim(), "true" | "on" | "1"))
        }
        (FieldKind::Integer | FieldKind::Reference(_), input) => {
            FieldValue::Integer(parse_int_prefix(&input.into_text()))
        }
        (FieldKind::Decimal, input) => FieldValue::Decimal(parse_decimal(&input.into_text())),
        (FieldKind::Text | FieldKind::Date | FieldKind::Choice(_), input) => {
            FieldValue::Text(input.into_text())
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DraftError {
    #[error("unknown field `{0}`")]
    UnknownField(String),

    #[error("field `{0}` is required")]
    Missing(&'static str),

    #[error("field `{field}` holds an invalid date `{value}`")]
    InvalidDate { field: &'static str, value: String },
}

/// Mutable copy of one record's fields, shared by the add and edit forms
#[derive(Debug, Clone, PartialEq, Default)]
pub struct FormDraft {
    values: BTreeMap<&'static str, FieldValue>,
}

impl FormDraft {
    pub fn new() -> Self {
        Self::default()
    }

    /// Empty value for every field of the schema
    pub fn defaults(fields: &[FieldMetadata]) -> Self {
        let values = fields
            .iter()
            .map(|f| (f.name, FieldValue::empty_for(f.kind)))
            .collect();
        Self { values }
    }

    pub fn with(mut self, name: &'static str, value: FieldValue) -> Self {
        self.set(name, value);
        self
    }

    pub fn set(&mut self, name: &'static str, value: FieldValue) {
        self.values.insert(name, value);
    }

    pub fn get(&self, name: &str) -> Option<&FieldValue> {
        self.values.get(name)
    }

    /// Apply widget input to the field `name`, coerced by its kind
    pub fn apply_input(
        &mut self,
        fields: &[FieldMetadata],
        name: &str,
        input: RawInput,
    ) -> Result<(), DraftError> {
        let field =
            find_field(fields, name).ok_or_else(|| DraftError::UnknownField(name.to_string()))?;
        self.values.insert(field.name, coerce(field.kind, input));
        Ok(())
    }

    /// Names of required fields that are still empty
    pub fn missing_required(&self, fields: &[FieldMetadata]) -> Vec<&'static str> {
        fields
            .iter()
            .filter(|f| f.validation.is_required())
            .filter(|f| self.get(f.name).map_or(true, FieldValue::is_empty))
            .map(|f| f.name)
            .collect()
    }

    pub fn display_value(&self, name: &str) -> String {
        self.get(name).map(FieldValue::display).unwrap_or_default()
    }

    pub fn text(&self, name: &str) -> String {
        self.display_value(name)
    }

    pub fn integer(&self, name: &str) -> Option<i64> {
        match self.get(name)? {
            FieldValue::Integer(v) => *v,
            FieldValue::Decimal(v) => v.map(|v| v.trunc() as i64),
            FieldValue::Text(s) => parse_int_prefix(s),
            FieldValue::Flag(_) => None,
        }
    }

    pub fn decimal(&self, name: &str) -> Option<f64> {
        match self.get(name)? {
            FieldValue::Decimal(v) => *v,
            FieldValue::Integer(v) => v.map(|v| v as f64),
            FieldValue::Text(s) => parse_decimal(s),
            FieldValue::Flag(_) => None,
        }
    }

    pub fn flag(&self, name: &str) -> bool {
        matches!(self.get(name), Some(FieldValue::Flag(true)))
    }

    pub fn require_integer(&self, name: &'static str) -> Result<i64, DraftError> {
        self.integer(name).ok_or(DraftError::Missing(name))
    }

    /// Date field as a calendar date, `YYYY-MM-DD`
    pub fn require_date(&self, name: &'static str) -> Result<String, DraftError> {
        let raw = self.text(name);
        parse_date(&raw)
            .map(date_input)
            .ok_or(DraftError::InvalidDate { field: name, value: raw })
    }

    /// Date field as midnight UTC, full ISO timestamp
    pub fn require_timestamp(&self, name: &'static str) -> Result<String, DraftError> {
        let raw = self.text(name);
        to_iso_timestamp(&raw).ok_or(DraftError::InvalidDate { field: name, value: raw })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::common::EntityKind;

    const FIELDS: [FieldMetadata; 5] = [
        FieldMetadata::new("title", "Title", FieldKind::Text).required(),
        FieldMetadata::new("client_id", "Client", FieldKind::Reference(EntityKind::Client))
            .required(),
        FieldMetadata::new("actual_cost", "Actual Cost", FieldKind::Decimal),
        FieldMetadata::new("completion_status", "Completed", FieldKind::Boolean),
        FieldMetadata::new(
            "current_state",
            "State",
            FieldKind::Choice(&[("not started", "Not Started"), ("completed", "Completed")]),
        ),
    ];

    #[test]
    fn test_defaults() {
        let draft = FormDraft::defaults(&FIELDS);
        assert_eq!(draft.get("title"), Some(&FieldValue::Text(String::new())));
        assert_eq!(draft.get("client_id"), Some(&FieldValue::Integer(None)));
        assert_eq!(draft.get("completion_status"), Some(&FieldValue::Flag(false)));
        assert_eq!(draft.text("current_state"), "not started");
    }

    #[test]
    fn test_coercion_per_kind() {
        let mut draft = FormDraft::defaults(&FIELDS);
        draft
            .apply_input(&FIELDS, "client_id", RawInput::Text("12".into()))
            .unwrap();
        draft
            .apply_input(&FIELDS, "actual_cost", RawInput::Text("8500.5".into()))
            .unwrap();
        draft
            .apply_input(&FIELDS, "completion_status", RawInput::Checked(true))
            .unwrap();
        draft
            .apply_input(&FIELDS, "title", RawInput::Text("Spring Sale".into()))
            .unwrap();

        assert_eq!(draft.get("client_id"), Some(&FieldValue::Integer(Some(12))));
        assert_eq!(draft.get("actual_cost"), Some(&FieldValue::Decimal(Some(8500.5))));
        assert!(draft.flag("completion_status"));
        assert_eq!(draft.text("title"), "Spring Sale");
    }

    #[test]
    fn test_integer_parsing_follows_parse_int() {
        assert_eq!(parse_int_prefix("12.7"), Some(12));
        assert_eq!(parse_int_prefix(" -3"), Some(-3));
        assert_eq!(parse_int_prefix("42px"), Some(42));
        assert_eq!(parse_int_prefix(""), None);
        assert_eq!(parse_int_prefix("abc"), None);
    }

    #[test]
    fn test_cleared_numeric_input_is_empty() {
        let mut draft = FormDraft::defaults(&FIELDS);
        draft
            .apply_input(&FIELDS, "actual_cost", RawInput::Text("".into()))
            .unwrap();
        assert_eq!(draft.get("actual_cost"), Some(&FieldValue::Decimal(None)));
        assert_eq!(draft.display_value("actual_cost"), "");
    }

    #[test]
    fn test_unknown_field_is_rejected() {
        let mut draft = FormDraft::defaults(&FIELDS);
        let err = draft
            .apply_input(&FIELDS, "budget", RawInput::Text("1".into()))
            .unwrap_err();
        assert_eq!(err, DraftError::UnknownField("budget".into()));
    }

    #[test]
    fn test_missing_required() {
        let mut draft = FormDraft::defaults(&FIELDS);
        assert_eq!(draft.missing_required(&FIELDS), vec!["title", "client_id"]);

        draft.set("title", FieldValue::Text("   ".into()));
        draft.set("client_id", FieldValue::Integer(Some(1)));
        assert_eq!(draft.missing_required(&FIELDS), vec!["title"]);

        draft.set("title", FieldValue::Text("Launch".into()));
        assert!(draft.missing_required(&FIELDS).is_empty());
    }

    #[test]
    fn test_date_accessors() {
        let draft = FormDraft::new().with("run_date", FieldValue::Text("2024-05-01".into()));
        assert_eq!(draft.require_date("run_date").unwrap(), "2024-05-01");
        assert_eq!(
            draft.require_timestamp("run_date").unwrap(),
            "2024-05-01T00:00:00.000Z"
        );

        let bad = FormDraft::new().with("run_date", FieldValue::Text("soon".into()));
        assert!(matches!(
            bad.require_timestamp("run_date"),
            Err(DraftError::InvalidDate { field: "run_date", .. })
        ));
    }
}
