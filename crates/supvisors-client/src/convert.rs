//! Conversion of untyped results into records.
//!
//! One generic converter serves every record type: shapes are read from
//! [`Record::FIELDS`] and names from [`Record::name`]. Conversion is all or
//! nothing; the first bad element aborts it and no partial map escapes.

use indexmap::IndexMap;
use supvisors_rpc::Value;

use crate::errors::{DecodeError, DecodeProblem};
use crate::record::{Fields, Record};

/// Records keyed by their canonical name, in the order the supervisor sent them.
pub type NameKeyed<T> = IndexMap<String, T>;

/// Converts an array result into records keyed by name.
///
/// # Errors
///
/// Returns [`DecodeError`] when `raw` is not an array, when any element fails
/// to decode, or when two elements share a name.
pub fn convert<T: Record>(raw: &Value) -> Result<NameKeyed<T>, DecodeError> {
    let items = raw.as_array().ok_or_else(|| {
        DecodeError::new(T::KIND, DecodeProblem::NotArray { found: raw.kind() })
    })?;
    convert_items(items)
}

/// Converts array elements into records keyed by name.
///
/// # Errors
///
/// Returns [`DecodeError`] naming the index of the first element that fails
/// to decode or repeats an earlier name.
pub fn convert_items<T: Record>(items: &[Value]) -> Result<NameKeyed<T>, DecodeError> {
    let mut records = IndexMap::with_capacity(items.len());
    for (index, item) in items.iter().enumerate() {
        let record = build::<T>(item).map_err(|problem| DecodeError::at(T::KIND, index, problem))?;
        let name = record.name();
        if records.contains_key(&name) {
            return Err(DecodeError::at(
                T::KIND,
                index,
                DecodeProblem::DuplicateName { name },
            ));
        }
        records.insert(name, record);
    }
    Ok(records)
}

/// Decodes a single struct result into a record.
///
/// # Errors
///
/// Returns [`DecodeError`] when `raw` is not a struct or lacks a declared
/// field.
pub fn decode_record<T: Record>(raw: &Value) -> Result<T, DecodeError> {
    build(raw).map_err(|problem| DecodeError::new(T::KIND, problem))
}

fn build<T: Record>(raw: &Value) -> Result<T, DecodeProblem> {
    let members = raw
        .as_struct()
        .ok_or(DecodeProblem::NotStruct { found: raw.kind() })?;
    let fields = Fields::validate(members, T::FIELDS)?;
    T::from_fields(&fields)
}
