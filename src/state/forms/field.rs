//! Form field value objects

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// How a field is entered and displayed
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    Text,
    Email,
    Phone,
    /// ISO calendar date (YYYY-MM-DD)
    Date,
    Checkbox,
}

/// Section a field is grouped under on the form
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldSection {
    Personal,
    License,
    Terms,
}

impl FieldSection {
    pub fn title(&self) -> &'static str {
        match self {
            Self::Personal => "Personal Information",
            Self::License => "License Information",
            Self::Terms => "Terms and Conditions",
        }
    }
}

/// Every field of an application draft, in form order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum DraftField {
    FullName,
    Email,
    Phone,
    LicenseNumber,
    ExpirationDate,
    Address,
    City,
    State,
    ZipCode,
    AcceptTerms,
}

impl DraftField {
    /// All fields in tab order
    pub const ALL: [DraftField; 10] = [
        Self::FullName,
        Self::Email,
        Self::Phone,
        Self::LicenseNumber,
        Self::ExpirationDate,
        Self::Address,
        Self::City,
        Self::State,
        Self::ZipCode,
        Self::AcceptTerms,
    ];

    /// The required text fields (everything except the terms checkbox)
    #[cfg(test)]
    pub const TEXT: [DraftField; 9] = [
        Self::FullName,
        Self::Email,
        Self::Phone,
        Self::LicenseNumber,
        Self::ExpirationDate,
        Self::Address,
        Self::City,
        Self::State,
        Self::ZipCode,
    ];

    /// Form key, matching the serialized name
    pub fn name(&self) -> &'static str {
        match self {
            Self::FullName => "fullName",
            Self::Email => "email",
            Self::Phone => "phone",
            Self::LicenseNumber => "licenseNumber",
            Self::ExpirationDate => "expirationDate",
            Self::Address => "address",
            Self::City => "city",
            Self::State => "state",
            Self::ZipCode => "zipCode",
            Self::AcceptTerms => "acceptTerms",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::FullName => "Full Name",
            Self::Email => "Email Address",
            Self::Phone => "Phone Number",
            Self::LicenseNumber => "License Number",
            Self::ExpirationDate => "Expiration Date (YYYY-MM-DD)",
            Self::Address => "Address",
            Self::City => "City",
            Self::State => "State",
            Self::ZipCode => "Zip Code",
            Self::AcceptTerms => {
                "I confirm that all information provided is accurate and I agree to the terms and conditions."
            }
        }
    }

    pub fn kind(&self) -> FieldKind {
        match self {
            Self::Email => FieldKind::Email,
            Self::Phone => FieldKind::Phone,
            Self::ExpirationDate => FieldKind::Date,
            Self::AcceptTerms => FieldKind::Checkbox,
            _ => FieldKind::Text,
        }
    }

    pub fn section(&self) -> FieldSection {
        match self {
            Self::FullName | Self::Email | Self::Phone | Self::LicenseNumber => {
                FieldSection::Personal
            }
            Self::AcceptTerms => FieldSection::Terms,
            _ => FieldSection::License,
        }
    }

    pub fn is_checkbox(&self) -> bool {
        matches!(self.kind(), FieldKind::Checkbox)
    }

    /// Position in tab order
    pub fn index(&self) -> usize {
        Self::ALL
            .iter()
            .position(|f| f == self)
            .unwrap_or_default()
    }

    /// Whether a typed character is accepted by this field
    pub fn accepts_char(&self, c: char) -> bool {
        match self.kind() {
            FieldKind::Checkbox => false,
            FieldKind::Date => c.is_ascii_digit() || c == '-',
            _ => !c.is_control(),
        }
    }
}

impl fmt::Display for DraftField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown form field: {0}")]
pub struct UnknownField(pub String);

impl FromStr for DraftField {
    type Err = UnknownField;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|f| f.name() == s)
            .ok_or_else(|| UnknownField(s.to_string()))
    }
}

/// Type-safe field values
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldValue {
    Text(String),
    Checked(bool),
}

impl Default for FieldValue {
    fn default() -> Self {
        FieldValue::Text(String::new())
    }
}

impl FieldValue {
    /// Get the text value (returns empty string for checkbox values)
    pub fn as_text(&self) -> &str {
        match self {
            FieldValue::Text(s) => s,
            FieldValue::Checked(_) => "",
        }
    }

    /// Get the checkbox value (returns false for text values)
    pub fn as_checked(&self) -> bool {
        match self {
            FieldValue::Checked(b) => *b,
            FieldValue::Text(_) => false,
        }
    }

    /// Get the display value for rendering
    pub fn display_value(&self) -> String {
        match self {
            FieldValue::Text(s) => s.clone(),
            FieldValue::Checked(true) => "[x]".to_string(),
            FieldValue::Checked(false) => "[ ]".to_string(),
        }
    }
}

impl From<&str> for FieldValue {
    fn from(value: &str) -> Self {
        FieldValue::Text(value.to_string())
    }
}

impl From<String> for FieldValue {
    fn from(value: String) -> Self {
        FieldValue::Text(value)
    }
}

impl From<bool> for FieldValue {
    fn from(value: bool) -> Self {
        FieldValue::Checked(value)
    }
}
