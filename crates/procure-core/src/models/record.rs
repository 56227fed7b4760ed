//! The structured record produced for every request line.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::error::ProcureError;

/// Structured form of one free-text procurement request.
///
/// Every key is always serialized; absent values become `null`. `quantity`
/// and `unit` are either both present or both absent.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Record {
    /// Canonical material name.
    pub material_name: Option<Material>,

    /// Requested amount, paired with `unit`.
    pub quantity: Option<Quantity>,

    /// Unit of measure, paired with `quantity`.
    pub unit: Option<Unit>,

    /// Title-cased project name.
    pub project_name: Option<String>,

    /// Canonical city name.
    pub location: Option<Location>,

    /// Urgency tag, always present.
    pub urgency: Urgency,

    /// Deadline as an ISO-8601 calendar date (`YYYY-MM-DD`).
    pub deadline: Option<chrono::NaiveDate>,
}

impl Record {
    /// Names of the fields that carry no value.
    pub fn missing_fields(&self) -> Vec<&'static str> {
        let mut missing = Vec::new();
        if self.material_name.is_none() {
            missing.push("material_name");
        }
        if self.quantity.is_none() {
            missing.push("quantity");
        }
        if self.unit.is_none() {
            missing.push("unit");
        }
        if self.project_name.is_none() {
            missing.push("project_name");
        }
        if self.location.is_none() {
            missing.push("location");
        }
        if self.deadline.is_none() {
            missing.push("deadline");
        }
        missing
    }
}

/// Canonical construction materials.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Material {
    #[serde(rename = "cement")]
    Cement,
    #[serde(rename = "steel bars")]
    SteelBars,
    #[serde(rename = "river sand")]
    RiverSand,
}

impl Material {
    pub fn as_str(&self) -> &'static str {
        match self {
            Material::Cement => "cement",
            Material::SteelBars => "steel bars",
            Material::RiverSand => "river sand",
        }
    }
}

impl fmt::Display for Material {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Units of measure recognized after a quantity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Unit {
    Units,
    Bags,
    Truckloads,
    Kg,
    Tons,
}

impl Unit {
    /// All units, in matching order.
    pub const ALL: [Unit; 5] = [Unit::Units, Unit::Bags, Unit::Truckloads, Unit::Kg, Unit::Tons];

    pub fn as_str(&self) -> &'static str {
        match self {
            Unit::Units => "units",
            Unit::Bags => "bags",
            Unit::Truckloads => "truckloads",
            Unit::Kg => "kg",
            Unit::Tons => "tons",
        }
    }
}

impl FromStr for Unit {
    type Err = ProcureError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Unit::ALL
            .into_iter()
            .find(|unit| unit.as_str() == s)
            .ok_or_else(|| ProcureError::Parse {
                field: "unit".to_string(),
                value: s.to_string(),
            })
    }
}

impl fmt::Display for Unit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Canonical delivery locations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Location {
    Mumbai,
    Bangalore,
    Chennai,
    Delhi,
}

impl Location {
    pub fn as_str(&self) -> &'static str {
        match self {
            Location::Mumbai => "Mumbai",
            Location::Bangalore => "Bangalore",
            Location::Chennai => "Chennai",
            Location::Delhi => "Delhi",
        }
    }
}

impl fmt::Display for Location {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Three-level urgency tag.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Urgency {
    #[default]
    Low,
    Medium,
    High,
}

impl Urgency {
    pub fn as_str(&self) -> &'static str {
        match self {
            Urgency::Low => "low",
            Urgency::Medium => "medium",
            Urgency::High => "high",
        }
    }
}

impl FromStr for Urgency {
    type Err = ProcureError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "low" => Ok(Urgency::Low),
            "medium" => Ok(Urgency::Medium),
            "high" => Ok(Urgency::High),
            _ => Err(ProcureError::Parse {
                field: "urgency".to_string(),
                value: s.to_string(),
            }),
        }
    }
}

impl fmt::Display for Urgency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Non-negative integer quantity of arbitrary size.
///
/// Stored as canonical decimal digits (no leading zeros) and serialized as
/// a bare JSON number.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Quantity(String);

impl Quantity {
    /// Build from a run of ASCII digits. Returns `None` for empty or
    /// non-digit input.
    pub fn from_digits(digits: &str) -> Option<Self> {
        if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
            return None;
        }
        let trimmed = digits.trim_start_matches('0');
        let canonical = if trimmed.is_empty() { "0" } else { trimmed };
        Some(Self(canonical.to_string()))
    }

    /// The value as `u64`, if it fits.
    pub fn as_u64(&self) -> Option<u64> {
        self.0.parse().ok()
    }

    /// Canonical decimal digits.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<u64> for Quantity {
    fn from(value: u64) -> Self {
        Self(value.to_string())
    }
}

impl fmt::Display for Quantity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl Serialize for Quantity {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let number = serde_json::Number::from_str(&self.0)
            .map_err(<S::Error as serde::ser::Error>::custom)?;
        number.serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for Quantity {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let number = serde_json::Number::deserialize(deserializer)?;
        let digits = number.to_string();
        Quantity::from_digits(&digits).ok_or_else(|| {
            <D::Error as serde::de::Error>::custom(format!("invalid quantity: {}", digits))
        })
    }
}
