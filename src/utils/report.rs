// src/utils/report.rs

use crate::model::ElementRecord;
use serde_json::Number;

/// Shown when a query matches no element.
pub const NOT_FOUND_MESSAGE: &str = "❌ Element not found. Please check the spelling.";

const UNKNOWN: &str = "Unknown";
const NOT_AVAILABLE: &str = "N/A";

/// Generates the result text for a found element, one labeled line per attribute
pub fn format_found(element: &ElementRecord) -> String {
    let mut out = String::new();
    out.push('\n');
    out.push_str(&format!("Name: {}\n", element.name));
    out.push_str(&format!("Symbol: {}\n", element.symbol));
    out.push_str(&format!("Atomic Number: {}\n", element.number));
    out.push_str(&format!("Atomic Mass: {}\n", element.atomic_mass));
    out.push_str(&format!("Category: {}\n", element.category.as_deref().unwrap_or(UNKNOWN)));
    out.push_str(&format!("Phase: {}\n", element.phase.as_deref().unwrap_or(UNKNOWN)));
    out.push_str(&format!("Boiling Point: {}\n", fmt_opt_number(element.boil.as_ref())));
    out.push_str(&format!("Melting Point: {}\n", fmt_opt_number(element.melt.as_ref())));
    out.push_str(&format!("Shells: {}\n", fmt_shells(element.shells.as_deref().unwrap_or(&[]))));
    out.push_str(&format!(
        "Electron Configuration: {}\n",
        element.electron_configuration.as_deref().unwrap_or(NOT_AVAILABLE)
    ));
    out
}

pub fn format_not_found() -> String {
    NOT_FOUND_MESSAGE.to_string()
}

// Numbers print as the data file spelled them: 294 stays 294, 1603.0 stays 1603.0
fn fmt_opt_number(v: Option<&Number>) -> String {
    v.map(Number::to_string).unwrap_or_else(|| NOT_AVAILABLE.to_string())
}

fn fmt_shells(shells: &[u32]) -> String {
    let parts: Vec<String> = shells.iter().map(|s| s.to_string()).collect();
    format!("[{}]", parts.join(", "))
}
