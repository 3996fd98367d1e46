// src/model/element.rs

use serde::Deserialize;
use serde_json::Number;

/// One chemical element as stored in the data file.
///
/// Optional attributes stay `None` when the entry omits them (or spells them `null`);
/// the report layer decides how an absent value is shown. Numeric attributes keep
/// the JSON spelling (`294` stays an integer, `1603.0` stays a float).
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ElementRecord {
    pub name: String,
    pub symbol: String,
    pub number: u32,
    pub atomic_mass: Number,

    #[serde(default)]
    pub category: Option<String>,
    #[serde(default)]
    pub phase: Option<String>,

    // Kelvin
    #[serde(default)]
    pub boil: Option<Number>,
    #[serde(default)]
    pub melt: Option<Number>,

    #[serde(default)]
    pub shells: Option<Vec<u32>>,
    #[serde(default)]
    pub electron_configuration: Option<String>,
}

impl ElementRecord {
    /// Record with only the required fields set.
    pub fn new(name: &str, symbol: &str, number: u32, atomic_mass: Number) -> Self {
        Self {
            name: name.to_string(),
            symbol: symbol.to_string(),
            number,
            atomic_mass,
            category: None,
            phase: None,
            boil: None,
            melt: None,
            shells: None,
            electron_configuration: None,
        }
    }

    /// Case-insensitive exact comparison against an already trimmed query.
    pub fn name_matches(&self, query: &str) -> bool {
        self.name.to_lowercase() == query.to_lowercase()
    }
}

#[cfg(test)]
impl ElementRecord {
    /// Test fixture with a float mass.
    pub(crate) fn sample(name: &str, symbol: &str, number: u32, atomic_mass: f64) -> Self {
        Self::new(name, symbol, number, Number::from_f64(atomic_mass).unwrap())
    }
}
