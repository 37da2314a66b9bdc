use crate::remote::{RemoteError, Resource};

/// The model a property's value is built from when decoding nested data.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Hash)]
pub enum TypeHint {
    Contact,
    LineItem,
    BankAccount,
    DateTime
}

impl TypeHint {
    pub fn as_str(&self) -> &'static str {
        match self {
            TypeHint::Contact => "Contact",
            TypeHint::LineItem => "LineItem",
            TypeHint::BankAccount => "BankAccount",
            TypeHint::DateTime => "DateTime"
        }
    }
}

/// One entry of a model's property table.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub struct Property {
    pub name: &'static str,
    /// Required for a valid write.
    pub mandatory: bool,
    pub hint: Option<TypeHint>
}

impl Property {
    pub const fn required(name: &'static str, hint: Option<TypeHint>) -> Self {
        Self { name, mandatory: true, hint }
    }

    pub const fn optional(name: &'static str, hint: Option<TypeHint>) -> Self {
        Self { name, mandatory: false, hint }
    }
}

/// Declarative property table of a model plus presence checks over an instance.
pub trait Schema {
    /// Properties in declaration order.
    fn properties() -> &'static [Property];

    /// Whether the named property holds a value. Empty lists count as absent.
    fn has_property(&self, name: &str) -> bool;

    fn property(name: &str) -> Option<&'static Property> {
        Self::properties().iter().find(|property| property.name == name)
    }

    /// Mandatory properties missing from child models the instance submits along with itself,
    /// as `Parent[index].Child` paths. Models that only reference others have none.
    fn missing_nested_properties(&self) -> Vec<String> {
        Vec::new()
    }
}

/// Unset mandatory properties in declaration order, followed by those missing from nested models.
pub fn missing_properties<S: Schema>(object: &S) -> Vec<String> {
    let mut missing: Vec<String> = S::properties()
        .iter()
        .filter(|property| property.mandatory && !object.has_property(property.name))
        .map(|property| property.name.to_string())
        .collect();

    missing.extend(object.missing_nested_properties());
    missing
}

/// Reports mandatory properties that are still unset. Never alters the resource; the
/// platform remains the authority on what it accepts.
pub fn validate<R: Resource>(resource: &R) -> Result<(), RemoteError> {
    let missing = missing_properties(resource);

    if missing.is_empty() {
        return Ok(())
    }

    Err(RemoteError::missing_properties::<R>(missing))
}
