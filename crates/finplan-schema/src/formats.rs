//! Integer `format` tags enforced as constraints.
//!
//! schemars tags Rust integer fields with formats such as `uint32`, and JSON
//! Schema counts `1.0` as an integer. Both are annotations only by default, so
//! `step_id: 1.0` or `step_id: 8589934592` would pass the schema and then fail
//! in serde without a field path. Every validator in this crate is compiled
//! with the `format` keyword replaced by [`IntegerFormat`], which reports such
//! values as ordinary violations.

use jsonschema::paths::{LazyLocation, Location};
use jsonschema::{Keyword, ValidationError};
use serde_json::{Map, Value};

/// Inclusive bounds for the integer formats schemars emits.
fn integer_bounds(format: &str) -> Option<(i128, i128)> {
    let bounds = match format {
        "uint8" => (0, u8::MAX.into()),
        "uint16" => (0, u16::MAX.into()),
        "uint32" => (0, u32::MAX.into()),
        "uint64" | "uint" => (0, u64::MAX.into()),
        "int8" => (i8::MIN.into(), i8::MAX.into()),
        "int16" => (i16::MIN.into(), i16::MAX.into()),
        "int32" => (i32::MIN.into(), i32::MAX.into()),
        "int64" | "int" => (i64::MIN.into(), i64::MAX.into()),
        _ => return None,
    };
    Some(bounds)
}

/// Requires a JSON number to be a whole number inside the format's range.
/// Non-numbers and fractional numbers are left to the `type` keyword.
struct IntegerFormat {
    format: String,
    min: i128,
    max: i128,
}

impl IntegerFormat {
    fn accepts(&self, instance: &Value) -> bool {
        let Value::Number(number) = instance else {
            return true;
        };
        let whole = number
            .as_i64()
            .map(i128::from)
            .or_else(|| number.as_u64().map(i128::from));
        match whole {
            Some(n) => (self.min..=self.max).contains(&n),
            None => number.as_f64().is_some_and(|f| f.fract() != 0.0),
        }
    }
}

impl Keyword for IntegerFormat {
    fn validate<'i>(
        &self,
        instance: &'i Value,
        location: &LazyLocation,
    ) -> Result<(), ValidationError<'i>> {
        if self.accepts(instance) {
            return Ok(());
        }
        Err(ValidationError::custom(
            Location::new(),
            location.into(),
            instance,
            format!("{instance} is not a whole number in the {} range", self.format),
        ))
    }

    fn is_valid(&self, instance: &Value) -> bool {
        self.accepts(instance)
    }
}

/// Any other format stays an annotation.
struct Annotation;

impl Keyword for Annotation {
    fn validate<'i>(
        &self,
        _instance: &'i Value,
        _location: &LazyLocation,
    ) -> Result<(), ValidationError<'i>> {
        Ok(())
    }

    fn is_valid(&self, _instance: &Value) -> bool {
        true
    }
}

fn format_keyword<'a>(
    _parent: &'a Map<String, Value>,
    value: &'a Value,
    _path: Location,
) -> Result<Box<dyn Keyword>, ValidationError<'a>> {
    let keyword: Box<dyn Keyword> = match value
        .as_str()
        .and_then(|format| integer_bounds(format).map(|bounds| (format, bounds)))
    {
        Some((format, (min, max))) => Box::new(IntegerFormat {
            format: format.to_string(),
            min,
            max,
        }),
        None => Box::new(Annotation),
    };
    Ok(keyword)
}

/// Compile `schema` with integer formats enforced.
pub(crate) fn compile(
    schema: &Value,
) -> Result<jsonschema::Validator, ValidationError<'static>> {
    jsonschema::options()
        .with_keyword("format", format_keyword)
        .build(schema)
}
