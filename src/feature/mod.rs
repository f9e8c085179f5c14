//! Typed feature attributes.
//!
//! Attribute values are a closed set of variants checked against the
//! declared field type when a field is built, so a mismatch is an error at
//! construction rather than a failed cast at write time.

use std::fmt;

use crate::error::{FeatureError, Result};

/// Declared type of a feature attribute.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FieldType {
    String,
    Integer64,
    Real,
}

impl FieldType {
    /// Returns the type name used in diagnostics.
    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            Self::String => "string",
            Self::Integer64 => "integer64",
            Self::Real => "real",
        }
    }
}

impl fmt::Display for FieldType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A single attribute value.
#[derive(Debug, Clone, PartialEq)]
pub enum FieldValue {
    String(String),
    Integer64(i64),
    Real(f64),
}

impl FieldValue {
    /// Returns the type this value carries.
    #[must_use]
    pub fn field_type(&self) -> FieldType {
        match self {
            Self::String(_) => FieldType::String,
            Self::Integer64(_) => FieldType::Integer64,
            Self::Real(_) => FieldType::Real,
        }
    }

    /// Returns the text if this is a string value.
    #[must_use]
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::String(s) => Some(s),
            _ => None,
        }
    }

    /// Returns the integer if this is an integer value.
    #[must_use]
    pub fn as_i64(&self) -> Option<i64> {
        match self {
            Self::Integer64(v) => Some(*v),
            _ => None,
        }
    }

    /// Returns the number if this is a real value.
    #[must_use]
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Self::Real(v) => Some(*v),
            _ => None,
        }
    }
}

impl From<String> for FieldValue {
    fn from(value: String) -> Self {
        Self::String(value)
    }
}

impl From<&str> for FieldValue {
    fn from(value: &str) -> Self {
        Self::String(value.to_owned())
    }
}

impl From<i64> for FieldValue {
    fn from(value: i64) -> Self {
        Self::Integer64(value)
    }
}

impl From<f64> for FieldValue {
    fn from(value: f64) -> Self {
        Self::Real(value)
    }
}

/// Name and declared type of an attribute column.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct FieldDefinition {
    name: String,
    field_type: FieldType,
}

impl FieldDefinition {
    /// Creates a new field definition.
    #[must_use]
    pub fn new(name: impl Into<String>, field_type: FieldType) -> Self {
        Self {
            name: name.into(),
            field_type,
        }
    }

    /// Returns the field name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the declared type.
    #[must_use]
    pub fn field_type(&self) -> FieldType {
        self.field_type
    }

    /// Binds `value` to this definition.
    ///
    /// # Errors
    ///
    /// Returns [`FeatureError::TypeMismatch`] if the value's variant differs
    /// from the declared type.
    pub fn bind(&self, value: impl Into<FieldValue>) -> Result<LayerField> {
        let value = value.into();
        let found = value.field_type();
        if found != self.field_type {
            tracing::debug!(
                field = %self.name,
                expected = %self.field_type,
                found = %found,
                "field value type mismatch"
            );
            return Err(FeatureError::TypeMismatch {
                field: self.name.clone(),
                expected: self.field_type.name(),
                found: found.name(),
            }
            .into());
        }
        Ok(LayerField {
            definition: self.clone(),
            value,
        })
    }
}

/// An attribute value bound to its definition. The value always matches the
/// declared type.
#[derive(Debug, Clone, PartialEq)]
pub struct LayerField {
    definition: FieldDefinition,
    value: FieldValue,
}

impl LayerField {
    /// Returns the definition the value was bound to.
    #[must_use]
    pub fn definition(&self) -> &FieldDefinition {
        &self.definition
    }

    /// Returns the field name.
    #[must_use]
    pub fn name(&self) -> &str {
        self.definition.name()
    }

    /// Returns the bound value.
    #[must_use]
    pub fn value(&self) -> &FieldValue {
        &self.value
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::error::GeolineError;

    #[test]
    fn bind_matching_types() {
        let name = FieldDefinition::new("name", FieldType::String);
        let field = name.bind("Mill Creek").unwrap();
        assert_eq!(field.name(), "name");
        assert_eq!(field.value().as_str(), Some("Mill Creek"));

        let station = FieldDefinition::new("station", FieldType::Integer64)
            .bind(1200_i64)
            .unwrap();
        assert_eq!(station.value().as_i64(), Some(1200));
        assert_eq!(station.value().as_f64(), None);

        let elev = FieldDefinition::new("elevation", FieldType::Real)
            .bind(101.25)
            .unwrap();
        assert_eq!(elev.value().as_f64(), Some(101.25));
        assert_eq!(elev.definition().field_type(), FieldType::Real);
    }

    #[test]
    fn bind_mismatch_fails() {
        let def = FieldDefinition::new("station", FieldType::Integer64);
        let err = def.bind(12.5).unwrap_err();
        assert_eq!(
            err,
            GeolineError::Feature(FeatureError::TypeMismatch {
                field: "station".to_owned(),
                expected: "integer64",
                found: "real",
            })
        );
        assert_eq!(
            err.to_string(),
            "field station expects integer64 but got real"
        );
    }

    #[test]
    fn value_reports_its_type() {
        assert_eq!(FieldValue::from("a").field_type(), FieldType::String);
        assert_eq!(FieldValue::from(1_i64).field_type(), FieldType::Integer64);
        assert_eq!(FieldValue::from(1.0).field_type(), FieldType::Real);
        assert_eq!(FieldType::Real.to_string(), "real");
    }
}
