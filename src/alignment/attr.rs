// Mon Oct 19 2026 - Alex

use crate::alignment::{Alignment, AlignmentError};
use crate::geometry::{Geometry, Sector};
use serde_json::Value;

/// Dynamically typed value used for attribute-style access.
pub type AttrValue = Value;

impl Alignment {
    pub fn get_attr(&self, name: &str) -> Result<AttrValue, AlignmentError> {
        match name {
            "offset" => Ok(Value::from(self.offset())),
            "grainSize" | "grain_size" => Ok(Value::from(self.grain_size())),
            _ => Err(AlignmentError::NoSuchAttribute(name.to_string())),
        }
    }

    pub fn set_attr(&mut self, name: &str, value: AttrValue) -> Result<(), AlignmentError> {
        match name {
            "offset" => {
                self.set_offset(integer_value(name, &value)?);
                Ok(())
            }
            "grainSize" | "grain_size" => self.set_grain_size(integer_value(name, &value)?),
            _ => Err(AlignmentError::NoSuchAttribute(name.to_string())),
        }
    }

    /// Like [`Alignment::is_aligned`] but for a sector of unchecked type.
    pub fn is_aligned_value(
        &self,
        geometry: &Geometry,
        sector: &AttrValue,
    ) -> Result<bool, AlignmentError> {
        let sector = integer_value("sector", sector)?;
        Ok(self.is_aligned(geometry, sector))
    }
}

fn integer_value(name: &str, value: &Value) -> Result<Sector, AlignmentError> {
    if let Some(v) = value.as_i64() {
        return Ok(v);
    }
    if value.is_u64() {
        return Err(AlignmentError::Overflow(format!("{} = {} does not fit a sector", name, value)));
    }
    Err(AlignmentError::Type {
        name: name.to_string(),
        found: type_name(value).to_string(),
    })
}

fn type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "bool",
        Value::Number(_) => "float",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
