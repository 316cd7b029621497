// ABOUTME: In-memory answers for a single onboarding session
// The field set is fixed by the persona configuration when the form is created

use thiserror::Error;

use super::persona::{FieldKind, PersonaConfig};

/// Errors raised when a handler writes to the form outside its declared shape
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum WizardError {
    #[error("unknown onboarding field: {0}")]
    UnknownField(String),

    #[error("field '{field}' holds {expected}")]
    FieldKindMismatch {
        field: String,
        expected: &'static str,
    },
}

/// Value of one onboarding field
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldValue {
    /// Single string (free text or one chosen option)
    Text(String),
    /// Multi-select values, kept in the order they were chosen
    Selections(Vec<String>),
}

impl FieldValue {
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Self::Text(text) => Some(text),
            Self::Selections(_) => None,
        }
    }

    pub fn as_selections(&self) -> Option<&[String]> {
        match self {
            Self::Text(_) => None,
            Self::Selections(values) => Some(values),
        }
    }

    /// Nothing entered or selected at all
    pub fn is_empty(&self) -> bool {
        match self {
            Self::Text(text) => text.is_empty(),
            Self::Selections(values) => values.is_empty(),
        }
    }

    /// Empty once surrounding whitespace is ignored
    pub fn is_blank(&self) -> bool {
        match self {
            Self::Text(text) => text.trim().is_empty(),
            Self::Selections(values) => values.is_empty(),
        }
    }
}

/// Answers for every field the persona declares
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormState {
    fields: Vec<(&'static str, FieldValue)>,
}

impl FormState {
    /// Create a form with every declared field empty
    pub fn for_persona(config: &PersonaConfig) -> Self {
        let fields = config
            .steps
            .iter()
            .flat_map(|step| step.fields.iter())
            .map(|spec| {
                let empty = match spec.kind {
                    FieldKind::MultiChoice(_) => FieldValue::Selections(Vec::new()),
                    _ => FieldValue::Text(String::new()),
                };
                (spec.key, empty)
            })
            .collect();

        Self { fields }
    }

    pub fn get(&self, key: &str) -> Option<&FieldValue> {
        self.fields
            .iter()
            .find(|(name, _)| *name == key)
            .map(|(_, value)| value)
    }

    /// Text of a single-valued field, empty if the field is unknown
    pub fn text(&self, key: &str) -> &str {
        self.get(key).and_then(FieldValue::as_text).unwrap_or("")
    }

    /// Selections of a multi-valued field, empty if the field is unknown
    pub fn selections(&self, key: &str) -> &[String] {
        self.get(key)
            .and_then(FieldValue::as_selections)
            .unwrap_or(&[])
    }

    pub fn is_selected(&self, key: &str, value: &str) -> bool {
        self.selections(key).iter().any(|v| v == value)
    }

    /// Overwrite a single-valued field unconditionally
    pub fn set_single_value(
        &mut self,
        key: &str,
        value: impl Into<String>,
    ) -> Result<(), WizardError> {
        match self.slot_mut(key)? {
            FieldValue::Text(text) => {
                *text = value.into();
                Ok(())
            }
            FieldValue::Selections(_) => Err(WizardError::FieldKindMismatch {
                field: key.to_string(),
                expected: "multiple selections",
            }),
        }
    }

    /// Add the value if absent, remove it if present.
    /// Returns whether the value is selected afterwards.
    pub fn toggle_multi_select(&mut self, key: &str, value: &str) -> Result<bool, WizardError> {
        match self.slot_mut(key)? {
            FieldValue::Selections(values) => {
                if let Some(pos) = values.iter().position(|v| v == value) {
                    values.remove(pos);
                    Ok(false)
                } else {
                    values.push(value.to_string());
                    Ok(true)
                }
            }
            FieldValue::Text(_) => Err(WizardError::FieldKindMismatch {
                field: key.to_string(),
                expected: "a single value",
            }),
        }
    }

    fn slot_mut(&mut self, key: &str) -> Result<&mut FieldValue, WizardError> {
        self.fields
            .iter_mut()
            .find(|(name, _)| *name == key)
            .map(|(_, value)| value)
            .ok_or_else(|| WizardError::UnknownField(key.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::wizard::persona::{fields, BUYER, SELLER};

    #[test]
    fn test_new_form_has_every_field_empty() {
        let form = FormState::for_persona(&BUYER);
        let specs: Vec<_> = BUYER.steps.iter().flat_map(|step| step.fields.iter()).collect();
        assert_eq!(form.fields.len(), specs.len());
        for spec in specs {
            assert!(form.get(spec.key).unwrap().is_empty(), "{} should start empty", spec.key);
        }
    }

    #[test]
    fn test_multi_choice_fields_start_as_selections() {
        let form = FormState::for_persona(&SELLER);
        assert_eq!(
            form.get(fields::BUYER_TRAITS),
            Some(&FieldValue::Selections(Vec::new()))
        );
        assert_eq!(form.get(fields::ASKING_PRICE), Some(&FieldValue::Text(String::new())));
    }

    #[test]
    fn test_toggle_twice_restores_original() {
        let mut form = FormState::for_persona(&BUYER);
        assert!(form.toggle_multi_select(fields::INDUSTRIES, "Retail").unwrap());
        assert!(!form.toggle_multi_select(fields::INDUSTRIES, "Retail").unwrap());
        assert!(form.selections(fields::INDUSTRIES).is_empty());
    }

    #[test]
    fn test_toggle_preserves_insertion_order() {
        let mut form = FormState::for_persona(&BUYER);
        form.toggle_multi_select(fields::INDUSTRIES, "Retail").unwrap();
        form.toggle_multi_select(fields::INDUSTRIES, "Finance").unwrap();
        form.toggle_multi_select(fields::INDUSTRIES, "Education").unwrap();
        form.toggle_multi_select(fields::INDUSTRIES, "Finance").unwrap();
        assert_eq!(form.selections(fields::INDUSTRIES), ["Retail", "Education"]);
    }

    #[test]
    fn test_unknown_field_is_rejected() {
        let mut form = FormState::for_persona(&BUYER);
        let before = form.clone();
        assert_eq!(
            form.set_single_value("favourite_colour", "blue"),
            Err(WizardError::UnknownField("favourite_colour".to_string()))
        );
        assert_eq!(form, before);
    }

    #[test]
    fn test_kind_mismatch_is_rejected() {
        let mut form = FormState::for_persona(&BUYER);
        assert!(matches!(
            form.set_single_value(fields::INDUSTRIES, "Retail"),
            Err(WizardError::FieldKindMismatch { .. })
        ));
        assert!(matches!(
            form.toggle_multi_select(fields::FULL_NAME, "Ann"),
            Err(WizardError::FieldKindMismatch { .. })
        ));
    }

    #[test]
    fn test_blank_ignores_whitespace() {
        assert!(FieldValue::Text("   ".to_string()).is_blank());
        assert!(!FieldValue::Text("   ".to_string()).is_empty());
    }
}
