//! Field identifiers and the fixed validation rule table

use regex::Regex;
use thiserror::Error;

/// The five registration form fields
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FieldId {
    FirstName,
    LastName,
    Email,
    DateOfBirth,
    ZipCode,
}

impl FieldId {
    /// All fields in form order
    pub const ALL: [FieldId; 5] = [
        FieldId::FirstName,
        FieldId::LastName,
        FieldId::Email,
        FieldId::DateOfBirth,
        FieldId::ZipCode,
    ];

    /// Stable machine name
    pub fn as_str(&self) -> &'static str {
        match self {
            FieldId::FirstName => "first_name",
            FieldId::LastName => "last_name",
            FieldId::Email => "email",
            FieldId::DateOfBirth => "date_of_birth",
            FieldId::ZipCode => "zip_code",
        }
    }

    /// Human-readable label for rendering
    pub fn label(&self) -> &'static str {
        match self {
            FieldId::FirstName => "First Name",
            FieldId::LastName => "Last Name",
            FieldId::Email => "Email",
            FieldId::DateOfBirth => "Date of Birth",
            FieldId::ZipCode => "Zip Code",
        }
    }

    /// Position within [`FieldId::ALL`]
    pub fn index(&self) -> usize {
        match self {
            FieldId::FirstName => 0,
            FieldId::LastName => 1,
            FieldId::Email => 2,
            FieldId::DateOfBirth => 3,
            FieldId::ZipCode => 4,
        }
    }
}

/// Error building the rule table at engine construction
#[derive(Debug, Error)]
pub enum RuleError {
    #[error("invalid pattern for {field}: {source}")]
    BadPattern {
        field: &'static str,
        #[source]
        source: regex::Error,
    },
}

/// One field's validation rule: an anchored pattern plus the hint shown on failure
#[derive(Debug, Clone)]
pub struct FieldRule {
    pattern: Regex,
    hint: &'static str,
}

impl FieldRule {
    fn new(id: FieldId, pattern: &str, hint: &'static str) -> Result<Self, RuleError> {
        let pattern = Regex::new(pattern).map_err(|source| RuleError::BadPattern {
            field: id.as_str(),
            source,
        })?;
        Ok(Self { pattern, hint })
    }

    /// Full-string match, not a substring search (patterns are anchored)
    pub fn matches(&self, text: &str) -> bool {
        self.pattern.is_match(text)
    }

    /// Expected-format hint shown when the field is invalid
    pub fn hint(&self) -> &'static str {
        self.hint
    }
}

/// The immutable rule table, one rule per field, built once at startup
#[derive(Debug, Clone)]
pub struct RuleTable {
    first_name: FieldRule,
    last_name: FieldRule,
    email: FieldRule,
    date_of_birth: FieldRule,
    zip_code: FieldRule,
}

impl RuleTable {
    /// Build the table, refusing construction if any pattern fails to compile
    pub fn new() -> Result<Self, RuleError> {
        Ok(Self {
            first_name: FieldRule::new(FieldId::FirstName, r"^[A-Za-z]{2,25}$", "2–25 letters")?,
            last_name: FieldRule::new(FieldId::LastName, r"^[A-Za-z]{2,25}$", "2–25 letters")?,
            // ASCII classes throughout: the regex crate's \w and \d are
            // Unicode-aware and would accept characters these rules must reject
            email: FieldRule::new(
                FieldId::Email,
                r"^[A-Za-z0-9_.+\-]+@farmingdale\.edu$",
                "user@farmingdale.edu",
            )?,
            date_of_birth: FieldRule::new(
                FieldId::DateOfBirth,
                r"^(0[1-9]|1[0-2])/(0[1-9]|[12][0-9]|3[01])/(19|20)[0-9]{2}$",
                "MM/DD/YYYY",
            )?,
            zip_code: FieldRule::new(FieldId::ZipCode, r"^[0-9]{5}$", "5 digits")?,
        })
    }

    /// Look up the rule for a field
    pub fn rule(&self, id: FieldId) -> &FieldRule {
        match id {
            FieldId::FirstName => &self.first_name,
            FieldId::LastName => &self.last_name,
            FieldId::Email => &self.email,
            FieldId::DateOfBirth => &self.date_of_birth,
            FieldId::ZipCode => &self.zip_code,
        }
    }
}
