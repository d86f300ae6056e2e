//! Declared field constraints
//!
//! Wire types declare their field-level rules as a static table. The table is
//! metadata for API documentation; requests are not rejected on its basis.

/// A single field-level rule
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Constraint {
    /// Value must be absent (server-assigned fields)
    Null,
    NotNull,
    /// String must contain at least one non-whitespace character
    NotBlank,
    /// Number must be strictly greater than zero
    Positive,
}

impl Constraint {
    /// Human-readable rendering of the rule
    pub fn description(&self) -> &'static str {
        match self {
            Constraint::Null => "Must be null",
            Constraint::NotNull => "Must not be null",
            Constraint::NotBlank => "Must not be blank",
            Constraint::Positive => "Must be positive",
        }
    }
}

impl std::fmt::Display for Constraint {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.description())
    }
}

/// Types that declare constraints on their (serialized) fields
pub trait Constrained {
    /// Field path to rules, keyed by the JSON field name
    const CONSTRAINTS: &'static [(&'static str, &'static [Constraint])];

    /// Rules declared for `property`, empty when none are declared
    fn constraints_for(property: &str) -> &'static [Constraint] {
        Self::CONSTRAINTS
            .iter()
            .find(|(name, _)| *name == property)
            .map(|(_, rules)| *rules)
            .unwrap_or(&[])
    }

    /// Descriptions of the rules declared for `property`, in declaration order
    fn descriptions_for(property: &str) -> Vec<&'static str> {
        Self::constraints_for(property)
            .iter()
            .map(Constraint::description)
            .collect()
    }
}
