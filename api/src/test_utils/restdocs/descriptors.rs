//! Parameter and field descriptors

use std::collections::BTreeMap;

use crate::constraints::Constrained;

/// Attribute key holding the rendered constraint descriptions of a field
pub const CONSTRAINTS_ATTRIBUTE: &str = "constraints";

/// Describes a path or query parameter
#[derive(Debug, Clone)]
pub struct ParameterDescriptor {
    pub(super) name: String,
    pub(super) description: String,
}

pub fn parameter_with_name(name: &str) -> ParameterDescriptor {
    ParameterDescriptor {
        name: name.to_string(),
        description: String::new(),
    }
}

impl ParameterDescriptor {
    pub fn description(mut self, description: &str) -> Self {
        self.description = description.to_string();
        self
    }
}

/// Describes a field of a JSON payload, addressed by a dotted path
#[derive(Debug, Clone)]
pub struct FieldDescriptor {
    pub(super) path: String,
    pub(super) description: String,
    pub(super) ignored: bool,
    pub(super) optional: bool,
    pub(super) attributes: BTreeMap<String, String>,
}

pub fn field_with_path(path: &str) -> FieldDescriptor {
    FieldDescriptor {
        path: path.to_string(),
        description: String::new(),
        ignored: false,
        optional: false,
        attributes: BTreeMap::new(),
    }
}

impl FieldDescriptor {
    pub fn description(mut self, description: &str) -> Self {
        self.description = description.to_string();
        self
    }

    /// Accept the field in the payload without listing it in the snippet
    pub fn ignored(mut self) -> Self {
        self.ignored = true;
        self
    }

    /// Allow the field to be absent from the payload
    pub fn optional(mut self) -> Self {
        self.optional = true;
        self
    }

    pub fn attribute(mut self, key: &str, value: impl Into<String>) -> Self {
        self.attributes.insert(key.to_string(), value.into());
        self
    }

    pub fn path(&self) -> &str {
        &self.path
    }

    pub fn get_attribute(&self, key: &str) -> Option<&str> {
        self.attributes.get(key).map(String::as_str)
    }
}

/// Builds field descriptors annotated with a type's declared constraints
pub struct ConstrainedFields {
    descriptions_for: fn(&str) -> Vec<&'static str>,
}

impl ConstrainedFields {
    pub fn new<T: Constrained>() -> Self {
        Self {
            descriptions_for: T::descriptions_for,
        }
    }

    /// Constraint descriptions for `path` joined by ". ", empty when none are declared
    pub fn describe(&self, path: &str) -> String {
        (self.descriptions_for)(path).join(". ")
    }

    pub fn with_path(&self, path: &str) -> FieldDescriptor {
        field_with_path(path).attribute(CONSTRAINTS_ATTRIBUTE, self.describe(path))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::handlers::BeerDto;

    #[test]
    fn describe_joins_constraints() {
        let fields = ConstrainedFields::new::<BeerDto>();

        assert_eq!(fields.describe("price"), "Must not be null. Must be positive");
        assert_eq!(fields.describe("beerName"), "Must not be blank");
        assert_eq!(fields.describe("id"), "Must be null");
    }

    #[test]
    fn describe_unconstrained_path_is_empty() {
        let fields = ConstrainedFields::new::<BeerDto>();
        assert_eq!(fields.describe("brewery"), "");
    }

    #[test]
    fn with_path_sets_constraints_attribute() {
        let fields = ConstrainedFields::new::<BeerDto>();
        let descriptor = fields.with_path("upc").description("Beer UPC");

        assert_eq!(descriptor.path(), "upc");
        assert_eq!(
            descriptor.get_attribute(CONSTRAINTS_ATTRIBUTE),
            Some("Must not be null. Must be positive")
        );
    }

    #[test]
    fn builder_flags() {
        let descriptor = field_with_path("id").ignored().optional();
        assert!(descriptor.ignored);
        assert!(descriptor.optional);
        assert!(descriptor.get_attribute(CONSTRAINTS_ATTRIBUTE).is_none());
    }
}
