//! Table-driven unit conversion behind the `convert_units` tool.
use std::fmt;

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

pub const CONVERT_TOOL_ID: &str = "convert_units";

const KM_PER_MILE: f64 = 1.60934;
const LBS_PER_KG: f64 = 2.20462;

/// Units known to the conversion table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Unit {
    Miles,
    Km,
    Celsius,
    Fahrenheit,
    Kg,
    Lbs,
}

impl Unit {
    /// Parse a unit name, ignoring case. No aliases are accepted.
    pub fn parse(raw: &str) -> Option<Self> {
        match raw.to_lowercase().as_str() {
            "miles" => Some(Unit::Miles),
            "km" => Some(Unit::Km),
            "c" => Some(Unit::Celsius),
            "f" => Some(Unit::Fahrenheit),
            "kg" => Some(Unit::Kg),
            "lbs" => Some(Unit::Lbs),
            _ => None,
        }
    }
}

/// Look up the transform for an ordered unit pair.
///
/// Each direction is listed explicitly; a pair missing here is unsupported
/// even when its reverse exists or a chain of pairs would connect the units.
fn transform(from: Unit, to: Unit) -> Option<fn(f64) -> f64> {
    let f: fn(f64) -> f64 = match (from, to) {
        (Unit::Miles, Unit::Km) => |x| x * KM_PER_MILE,
        (Unit::Km, Unit::Miles) => |x| x / KM_PER_MILE,
        (Unit::Celsius, Unit::Fahrenheit) => |x| (x * 9.0 / 5.0) + 32.0,
        (Unit::Fahrenheit, Unit::Celsius) => |x| (x - 32.0) * 5.0 / 9.0,
        (Unit::Kg, Unit::Lbs) => |x| x * LBS_PER_KG,
        (Unit::Lbs, Unit::Kg) => |x| x / LBS_PER_KG,
        _ => return None,
    };
    Some(f)
}

/// Successful conversion, rendered for display.
#[derive(Debug, Clone, PartialEq)]
pub struct Conversion {
    pub input: String,
    pub output: String,
    pub value: f64,
}

/// The requested pair has no entry in the table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnsupportedConversion {
    pub from_unit: String,
    pub to_unit: String,
}

impl fmt::Display for UnsupportedConversion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Conversion {}->{} not supported",
            self.from_unit, self.to_unit
        )
    }
}

/// Convert `value` between two units.
///
/// Unit names are matched case-insensitively but echoed back as given.
/// An unsupported pair is an ordinary return value, not a fault.
pub fn convert_units(
    value: f64,
    from_unit: &str,
    to_unit: &str,
) -> Result<Conversion, UnsupportedConversion> {
    let unsupported = || UnsupportedConversion {
        from_unit: from_unit.to_string(),
        to_unit: to_unit.to_string(),
    };
    let from = Unit::parse(from_unit).ok_or_else(unsupported)?;
    let to = Unit::parse(to_unit).ok_or_else(unsupported)?;
    let apply = transform(from, to).ok_or_else(unsupported)?;

    let result = apply(value);
    Ok(Conversion {
        input: format!("{} {from_unit}", display_value(value)),
        output: format!("{result:.2} {to_unit}"),
        value: result,
    })
}

/// Render an input value the way it is echoed back, following float repr:
/// integral values keep a trailing `.0`, values with a decimal exponent below
/// -4 or at least 16 switch to `1e-05` / `1e+16` notation, and everything
/// else uses the shortest round-trip form.
fn display_value(value: f64) -> String {
    if value.is_nan() {
        return "nan".to_string();
    }
    if value.is_infinite() {
        return value.to_string();
    }
    if value == 0.0 {
        return format!("{value:.1}");
    }

    let scientific = format!("{value:e}");
    let (mantissa, exponent) = match scientific.split_once('e') {
        Some((mantissa, exponent)) => (mantissa, exponent.parse::<i32>().unwrap_or(0)),
        None => (scientific.as_str(), 0),
    };
    if !(-4..16).contains(&exponent) {
        let sign = if exponent < 0 { '-' } else { '+' };
        return format!("{mantissa}e{sign}{:02}", exponent.abs());
    }
    if value.fract() == 0.0 {
        return format!("{value:.1}");
    }
    value.to_string()
}

/// Input for `convert_units`.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct ConvertUnitsRequest {
    /// Numeric value to convert.
    pub value: f64,
    /// Source unit (miles, km, c, f, kg, lbs).
    pub from_unit: String,
    /// Target unit (miles, km, c, f, kg, lbs).
    pub to_unit: String,
}

/// Output of `convert_units`: either `input`/`output` or `error` is present.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct ConvertUnitsResponse {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub input: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub output: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl From<Result<Conversion, UnsupportedConversion>> for ConvertUnitsResponse {
    fn from(result: Result<Conversion, UnsupportedConversion>) -> Self {
        match result {
            Ok(conversion) => Self {
                input: Some(conversion.input),
                output: Some(conversion.output),
                error: None,
            },
            Err(unsupported) => Self {
                input: None,
                output: None,
                error: Some(unsupported.to_string()),
            },
        }
    }
}

impl ConvertUnitsRequest {
    pub fn run(&self) -> ConvertUnitsResponse {
        convert_units(self.value, &self.from_unit, &self.to_unit).into()
    }
}
