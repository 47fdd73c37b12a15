//! The staff person record submitted for validation.
//!
//! Deserialization only accepts a JSON object, but is lenient inside it: a
//! missing field, `null`, a value of the wrong JSON type, or a number that
//! does not fit the field becomes the field's default (empty string or zero)
//! rather than rejecting the payload. Absence is then reported by the
//! `required` rules like any other violation.

use std::fmt;

use rust_decimal::Decimal;
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::{Map, Number, Value};

/// A candidate staff record as received from a client.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StaffPerson {
    pub name: String,
    pub lastname: String,
    pub phone: String,
    pub access_level: i32,
    #[serde(serialize_with = "rust_decimal::serde::arbitrary_precision::serialize")]
    pub salary: Decimal,
}

impl StaffPerson {
    /// Build a record from a decoded JSON object, defaulting anything
    /// missing or unusable.
    pub fn from_json_object(object: &Map<String, Value>) -> Self {
        let field = |f: Field| object.get(f.json_key());
        Self {
            name: lenient_text(field(Field::Name)),
            lastname: lenient_text(field(Field::Lastname)),
            phone: lenient_text(field(Field::Phone)),
            access_level: lenient_integer(field(Field::AccessLevel)),
            salary: lenient_decimal(field(Field::Salary)),
        }
    }

    /// Select a single field's value for rule evaluation.
    pub fn value_of(&self, field: Field) -> FieldValue<'_> {
        match field {
            Field::Name => FieldValue::Text(&self.name),
            Field::Lastname => FieldValue::Text(&self.lastname),
            Field::Phone => FieldValue::Text(&self.phone),
            Field::AccessLevel => FieldValue::Integer(self.access_level),
            Field::Salary => FieldValue::Decimal(self.salary),
        }
    }
}

impl<'de> Deserialize<'de> for StaffPerson {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        // `Map` only visits maps, so arrays and scalars are rejected here.
        let object = Map::<String, Value>::deserialize(deserializer)?;
        Ok(Self::from_json_object(&object))
    }
}

/// Identifies one attribute of [`StaffPerson`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Field {
    Name,
    Lastname,
    Phone,
    AccessLevel,
    Salary,
}

/// Labels shown to users in violation messages.
const FIELD_DISPLAY_NAMES: &[(Field, &str)] = &[
    (Field::Name, "Staff person name"),
    (Field::Lastname, "Staff person lastname"),
    (Field::Phone, "Staff person phone number"),
    (Field::AccessLevel, "Staff person access level to system"),
    (Field::Salary, "Staff person salary"),
];

impl Field {
    /// Key used for this field in JSON payloads.
    pub fn json_key(self) -> &'static str {
        match self {
            Field::Name => "name",
            Field::Lastname => "lastname",
            Field::Phone => "phone",
            Field::AccessLevel => "accessLevel",
            Field::Salary => "salary",
        }
    }

    /// Human-readable label, falling back to the JSON key.
    pub fn display_name(self) -> &'static str {
        FIELD_DISPLAY_NAMES
            .iter()
            .find(|(field, _)| *field == self)
            .map(|(_, label)| *label)
            .unwrap_or_else(|| self.json_key())
    }
}

/// A borrowed view of one field's value.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum FieldValue<'a> {
    Text(&'a str),
    Integer(i32),
    Decimal(Decimal),
}

impl fmt::Display for FieldValue<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FieldValue::Text(s) => f.write_str(s),
            FieldValue::Integer(n) => write!(f, "{n}"),
            FieldValue::Decimal(n) => write!(f, "{n}"),
        }
    }
}

fn lenient_text(value: Option<&Value>) -> String {
    match value {
        Some(Value::String(s)) => s.clone(),
        _ => String::new(),
    }
}

fn lenient_integer(value: Option<&Value>) -> i32 {
    match value {
        Some(Value::Number(n)) => n.as_i64().and_then(|v| i32::try_from(v).ok()).unwrap_or(0),
        _ => 0,
    }
}

fn lenient_decimal(value: Option<&Value>) -> Decimal {
    match value {
        Some(Value::Number(n)) => parse_decimal(n).unwrap_or(Decimal::ZERO),
        _ => Decimal::ZERO,
    }
}

/// Parse the number's source text exactly; `None` if it has no `Decimal`
/// representation (too large, too many digits).
fn parse_decimal(n: &Number) -> Option<Decimal> {
    let text = n.to_string();
    if text.contains(['e', 'E']) {
        Decimal::from_scientific(&text).ok()
    } else {
        Decimal::from_str_exact(&text).ok()
    }
}
