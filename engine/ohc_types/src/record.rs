use serde::{Deserialize, Deserializer, Serialize};

use crate::error::InputError;

/// Raw readings for one examinee, keyed the way the exam form names them.
///
/// Every field is optional and kept as entered. A blank field means the
/// metric was not measured, which is different from a normal reading.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct MeasurementRecord {
    /// cm
    #[serde(deserialize_with = "text_or_number")]
    pub height: Option<String>,
    /// kg
    #[serde(deserialize_with = "text_or_number")]
    pub weight: Option<String>,
    #[serde(deserialize_with = "text_or_number")]
    pub waist: Option<String>,
    #[serde(deserialize_with = "text_or_number")]
    pub sbp: Option<String>,
    #[serde(deserialize_with = "text_or_number")]
    pub dbp: Option<String>,
    #[serde(deserialize_with = "text_or_number")]
    pub sugar_ac: Option<String>,
    #[serde(deserialize_with = "text_or_number")]
    pub cholesterol: Option<String>,
    #[serde(deserialize_with = "text_or_number")]
    pub ldl: Option<String>,
    #[serde(deserialize_with = "text_or_number")]
    pub hdl: Option<String>,
    #[serde(deserialize_with = "text_or_number")]
    pub tg: Option<String>,
    #[serde(deserialize_with = "text_or_number")]
    pub wbc: Option<String>,
    #[serde(deserialize_with = "text_or_number")]
    pub hb: Option<String>,
    #[serde(deserialize_with = "text_or_number")]
    pub alt: Option<String>,
    #[serde(deserialize_with = "text_or_number")]
    pub creatinine: Option<String>,
    #[serde(deserialize_with = "text_or_number")]
    pub uric_acid: Option<String>,
    pub urine_protein: Option<String>,
    pub urine_blood: Option<String>,
    pub xray_result: Option<String>,
    pub xray_other: Option<String>,
}

impl MeasurementRecord {
    pub const KEYS: [&'static str; 19] = [
        "height",
        "weight",
        "waist",
        "sbp",
        "dbp",
        "sugar_ac",
        "cholesterol",
        "ldl",
        "hdl",
        "tg",
        "wbc",
        "hb",
        "alt",
        "creatinine",
        "uric_acid",
        "urine_protein",
        "urine_blood",
        "xray_result",
        "xray_other",
    ];

    pub fn new() -> Self {
        Self::default()
    }

    /// Raw value stored under a form key, if any.
    pub fn get(&self, key: &str) -> Option<&str> {
        let slot = match key {
            "height" => &self.height,
            "weight" => &self.weight,
            "waist" => &self.waist,
            "sbp" => &self.sbp,
            "dbp" => &self.dbp,
            "sugar_ac" => &self.sugar_ac,
            "cholesterol" => &self.cholesterol,
            "ldl" => &self.ldl,
            "hdl" => &self.hdl,
            "tg" => &self.tg,
            "wbc" => &self.wbc,
            "hb" => &self.hb,
            "alt" => &self.alt,
            "creatinine" => &self.creatinine,
            "uric_acid" => &self.uric_acid,
            "urine_protein" => &self.urine_protein,
            "urine_blood" => &self.urine_blood,
            "xray_result" => &self.xray_result,
            "xray_other" => &self.xray_other,
            _ => return None,
        };
        slot.as_deref()
    }

    fn slot_mut(&mut self, key: &str) -> Option<&mut Option<String>> {
        let slot = match key {
            "height" => &mut self.height,
            "weight" => &mut self.weight,
            "waist" => &mut self.waist,
            "sbp" => &mut self.sbp,
            "dbp" => &mut self.dbp,
            "sugar_ac" => &mut self.sugar_ac,
            "cholesterol" => &mut self.cholesterol,
            "ldl" => &mut self.ldl,
            "hdl" => &mut self.hdl,
            "tg" => &mut self.tg,
            "wbc" => &mut self.wbc,
            "hb" => &mut self.hb,
            "alt" => &mut self.alt,
            "creatinine" => &mut self.creatinine,
            "uric_acid" => &mut self.uric_acid,
            "urine_protein" => &mut self.urine_protein,
            "urine_blood" => &mut self.urine_blood,
            "xray_result" => &mut self.xray_result,
            "xray_other" => &mut self.xray_other,
            _ => return None,
        };
        Some(slot)
    }

    /// Store a raw value under its form key. Returns `false` for unknown keys.
    pub fn set(&mut self, key: &str, value: impl Into<String>) -> bool {
        match self.slot_mut(key) {
            Some(slot) => {
                *slot = Some(value.into());
                true
            }
            None => {
                log::warn!("ignoring unknown measurement key '{key}'");
                false
            }
        }
    }

    /// Builder form of [`MeasurementRecord::set`].
    pub fn with(mut self, key: &str, value: impl Into<String>) -> Self {
        self.set(key, value);
        self
    }

    /// True when no field carries a non-blank value.
    pub fn is_empty(&self) -> bool {
        Self::KEYS
            .iter()
            .all(|key| present(self.get(key)).is_none())
    }
}

/// Trimmed contents of a field, or `None` when it is unset or blank.
pub fn present(raw: Option<&str>) -> Option<&str> {
    raw.map(str::trim).filter(|s| !s.is_empty())
}

/// Parse a numeric reading.
///
/// `Ok(None)` means the field was blank. Non-numeric, non-finite and
/// negative values are errors so they can never reach a threshold check.
pub fn parse_reading(field: &'static str, raw: Option<&str>) -> Result<Option<f64>, InputError> {
    let Some(text) = present(raw) else {
        return Ok(None);
    };
    let value: f64 = text.parse().map_err(|_| InputError::NotANumber {
        field,
        raw: text.to_string(),
    })?;
    if !value.is_finite() {
        return Err(InputError::NotFinite {
            field,
            raw: text.to_string(),
        });
    }
    if value < 0.0 {
        return Err(InputError::Negative {
            field,
            raw: text.to_string(),
        });
    }
    Ok(Some(value))
}

#[derive(Deserialize)]
#[serde(untagged)]
enum TextOrNumber {
    Text(String),
    Number(f64),
}

fn text_or_number<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(
        Option::<TextOrNumber>::deserialize(deserializer)?.map(|v| match v {
            TextOrNumber::Text(s) => s,
            TextOrNumber::Number(n) => n.to_string(),
        }),
    )
}
