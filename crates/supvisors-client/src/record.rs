//! Records built from the structs the supervisor returns.
//!
//! Each record type describes its wire fields once, in [`Record::FIELDS`].
//! [`Fields::validate`] checks a struct against that table before the record
//! reads its values, so the converter in [`crate::convert`] needs no
//! per-record code.

use std::str::FromStr;

use supvisors_rpc::{StructMap, Value, ValueKind};

use crate::errors::DecodeProblem;

/// Declared shape of one wire field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldSpec {
    /// Wire name of the field.
    pub name: &'static str,
    /// Kind the field must hold.
    pub kind: ValueKind,
    /// Whether the field must be present.
    pub required: bool,
}

impl FieldSpec {
    /// A field that must be present.
    #[must_use]
    pub const fn required(name: &'static str, kind: ValueKind) -> Self {
        Self {
            name,
            kind,
            required: true,
        }
    }

    /// A field that may be absent.
    #[must_use]
    pub const fn optional(name: &'static str, kind: ValueKind) -> Self {
        Self {
            name,
            kind,
            required: false,
        }
    }
}

/// A domain record decoded from one supervisor struct.
pub trait Record: Sized {
    /// Human label used in decode errors.
    const KIND: &'static str;

    /// Wire fields this record reads.
    const FIELDS: &'static [FieldSpec];

    /// Builds the record from fields already checked against [`Self::FIELDS`].
    ///
    /// # Errors
    ///
    /// Returns [`DecodeProblem`] when a value is outside its allowed set.
    fn from_fields(fields: &Fields<'_>) -> Result<Self, DecodeProblem>;

    /// Canonical name used to key collections of this record.
    fn name(&self) -> String;
}

/// Typed read access to the members of one struct.
#[derive(Debug, Clone, Copy)]
pub struct Fields<'a> {
    members: &'a StructMap,
}

impl<'a> Fields<'a> {
    /// Checks `members` against `specs`.
    ///
    /// Members not named in `specs` are ignored, as are optional fields sent
    /// as `nil`.
    ///
    /// # Errors
    ///
    /// Returns the first missing required field or mistyped field.
    pub fn validate(members: &'a StructMap, specs: &[FieldSpec]) -> Result<Self, DecodeProblem> {
        for spec in specs {
            match members.get(spec.name) {
                None if spec.required => {
                    return Err(DecodeProblem::MissingField { field: spec.name });
                }
                None | Some(Value::Nil) if !spec.required => {}
                Some(value) if value.kind() != spec.kind => {
                    return Err(DecodeProblem::WrongType {
                        field: spec.name,
                        expected: spec.kind,
                        found: value.kind(),
                    });
                }
                _ => {}
            }
        }
        Ok(Self { members })
    }

    fn get(&self, field: &'static str) -> Result<&'a Value, DecodeProblem> {
        self.members
            .get(field)
            .ok_or(DecodeProblem::MissingField { field })
    }

    /// Reads a string field.
    ///
    /// # Errors
    ///
    /// Returns [`DecodeProblem`] if the field is absent or not a string.
    pub fn string(&self, field: &'static str) -> Result<String, DecodeProblem> {
        let value = self.get(field)?;
        value
            .as_str()
            .map(str::to_owned)
            .ok_or_else(|| wrong_type(field, ValueKind::String, value))
    }

    /// Reads a string field that may be absent or `nil`.
    ///
    /// # Errors
    ///
    /// Returns [`DecodeProblem`] if the field holds something other than a
    /// string.
    pub fn optional_string(&self, field: &'static str) -> Result<Option<String>, DecodeProblem> {
        match self.members.get(field) {
            None | Some(Value::Nil) => Ok(None),
            Some(_) => self.string(field).map(Some),
        }
    }

    /// Reads an integer field.
    ///
    /// # Errors
    ///
    /// Returns [`DecodeProblem`] if the field is absent or not an integer.
    pub fn int(&self, field: &'static str) -> Result<i64, DecodeProblem> {
        let value = self.get(field)?;
        value
            .as_int()
            .ok_or_else(|| wrong_type(field, ValueKind::Int, value))
    }

    /// Reads a boolean field.
    ///
    /// # Errors
    ///
    /// Returns [`DecodeProblem`] if the field is absent or not a boolean.
    pub fn boolean(&self, field: &'static str) -> Result<bool, DecodeProblem> {
        let value = self.get(field)?;
        value
            .as_bool()
            .ok_or_else(|| wrong_type(field, ValueKind::Bool, value))
    }

    /// Reads a double field.
    ///
    /// # Errors
    ///
    /// Returns [`DecodeProblem`] if the field is absent or not a double.
    pub fn double(&self, field: &'static str) -> Result<f64, DecodeProblem> {
        let value = self.get(field)?;
        value
            .as_double()
            .ok_or_else(|| wrong_type(field, ValueKind::Double, value))
    }

    /// Reads an array of strings.
    ///
    /// # Errors
    ///
    /// Returns [`DecodeProblem`] if the field is absent, not an array, or
    /// holds a non-string element.
    pub fn strings(&self, field: &'static str) -> Result<Vec<String>, DecodeProblem> {
        let value = self.get(field)?;
        let items = value
            .as_array()
            .ok_or_else(|| wrong_type(field, ValueKind::Array, value))?;
        items
            .iter()
            .map(|item| {
                item.as_str()
                    .map(str::to_owned)
                    .ok_or_else(|| wrong_type(field, ValueKind::String, item))
            })
            .collect()
    }

    /// Reads a string field naming a member of `T`.
    ///
    /// # Errors
    ///
    /// Returns [`DecodeProblem::InvalidValue`] when the text is not a member
    /// of `T`.
    pub fn parsed<T: FromStr>(&self, field: &'static str) -> Result<T, DecodeProblem> {
        let text = self.string(field)?;
        text.parse()
            .map_err(|_| DecodeProblem::InvalidValue { field, value: text })
    }
}

fn wrong_type(field: &'static str, expected: ValueKind, value: &Value) -> DecodeProblem {
    DecodeProblem::WrongType {
        field,
        expected,
        found: value.kind(),
    }
}
