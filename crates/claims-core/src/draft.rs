//! The in-progress claim draft

use serde::Serialize;

/// The unsaved claim form state: one value per field, all plain text.
///
/// A draft is an immutable value; every edit produces a replacement via
/// [`ClaimDraft::with_field`], which keeps state transitions auditable.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ClaimDraft {
    pub order_number: String,
    pub email: String,
    pub name: String,
    pub address: String,
    pub phone_number: String,
    pub brand: String,
    pub problem_description: String,
}

/// The fields of a claim draft, in form order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ClaimField {
    OrderNumber,
    Email,
    Name,
    Address,
    PhoneNumber,
    Brand,
    ProblemDescription,
}

impl ClaimField {
    pub const ALL: [ClaimField; 7] = [
        ClaimField::OrderNumber,
        ClaimField::Email,
        ClaimField::Name,
        ClaimField::Address,
        ClaimField::PhoneNumber,
        ClaimField::Brand,
        ClaimField::ProblemDescription,
    ];

    /// Wire/input name of the field, matching the JSON key.
    pub fn name(&self) -> &'static str {
        match self {
            ClaimField::OrderNumber => "orderNumber",
            ClaimField::Email => "email",
            ClaimField::Name => "name",
            ClaimField::Address => "address",
            ClaimField::PhoneNumber => "phoneNumber",
            ClaimField::Brand => "brand",
            ClaimField::ProblemDescription => "problemDescription",
        }
    }
}

impl ClaimDraft {
    /// Replace one field, leaving every other field untouched.
    #[must_use]
    pub fn with_field(mut self, field: ClaimField, value: impl Into<String>) -> Self {
        let value = value.into();
        match field {
            ClaimField::OrderNumber => self.order_number = value,
            ClaimField::Email => self.email = value,
            ClaimField::Name => self.name = value,
            ClaimField::Address => self.address = value,
            ClaimField::PhoneNumber => self.phone_number = value,
            ClaimField::Brand => self.brand = value,
            ClaimField::ProblemDescription => self.problem_description = value,
        }
        self
    }

    /// Current value of a field.
    pub fn field(&self, field: ClaimField) -> &str {
        match field {
            ClaimField::OrderNumber => &self.order_number,
            ClaimField::Email => &self.email,
            ClaimField::Name => &self.name,
            ClaimField::Address => &self.address,
            ClaimField::PhoneNumber => &self.phone_number,
            ClaimField::Brand => &self.brand,
            ClaimField::ProblemDescription => &self.problem_description,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn edits_keep_the_latest_value_per_field() {
        let draft = ClaimDraft::default()
            .with_field(ClaimField::Email, "first@example.com")
            .with_field(ClaimField::Email, "second@example.com");
        assert_eq!(draft.email, "second@example.com");
    }

    #[test]
    fn editing_one_field_never_alters_another() {
        let mut draft = ClaimDraft::default();
        for (i, field) in ClaimField::ALL.iter().enumerate() {
            draft = draft.with_field(*field, format!("value-{i}"));
        }
        for (i, field) in ClaimField::ALL.iter().enumerate() {
            assert_eq!(draft.field(*field), format!("value-{i}"));
        }

        let edited = draft.clone().with_field(ClaimField::Address, "elsewhere");
        assert_eq!(edited.address, "elsewhere");
        for field in ClaimField::ALL {
            if field != ClaimField::Address {
                assert_eq!(edited.field(field), draft.field(field));
            }
        }
    }

    #[test]
    fn field_names_match_the_wire_keys() {
        let value = serde_json::to_value(ClaimDraft::default()).unwrap();
        let object = value.as_object().unwrap();
        for field in ClaimField::ALL {
            assert!(object.contains_key(field.name()), "missing {}", field.name());
        }
        assert_eq!(object.len(), ClaimField::ALL.len());
    }
}
