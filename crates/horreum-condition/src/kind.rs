//! The closed set of condition variants and their property schemas.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::error::ConditionError;

pub const LOG_SLIDER: &str = "LOG_SLIDER";
pub const ENUM: &str = "ENUM";
pub const NUMBER_BOUND: &str = "NUMBER_BOUND";
pub const SWITCH: &str = "SWITCH";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LogSliderProps {
    pub min: f64,
    pub max: f64,
    #[serde(default)]
    pub scale: Option<f64>,
    #[serde(default)]
    pub discrete: bool,
    #[serde(default)]
    pub unit: Option<String>,
}

impl LogSliderProps {
    /// Factor between the stored and the displayed value. A missing or zero
    /// scale means 1.
    pub fn effective_scale(&self) -> f64 {
        match self.scale {
            Some(scale) if scale != 0.0 => scale,
            _ => 1.0,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EnumProps {
    #[serde(default)]
    pub options: Vec<String>,
}

/// Stored value of a `NUMBER_BOUND` condition.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct NumberBound {
    pub enabled: bool,
    pub inclusive: bool,
    pub value: f64,
}

#[derive(Debug, Clone, PartialEq)]
pub enum ConditionKind {
    LogSlider(LogSliderProps),
    Enum(EnumProps),
    NumberBound,
    Switch,
}

impl ConditionKind {
    /// Resolves a type tag and its property bag into a variant. A `null` bag
    /// reads as an empty one.
    pub fn parse(tag: &str, properties: &Value) -> Result<Self, ConditionError> {
        let empty = Value::Object(Map::new());
        let properties = if properties.is_null() { &empty } else { properties };
        let props = |source| ConditionError::InvalidProperties {
            tag: tag.to_owned(),
            source,
        };
        match tag {
            LOG_SLIDER => Ok(ConditionKind::LogSlider(
                LogSliderProps::deserialize(properties).map_err(props)?,
            )),
            ENUM => Ok(ConditionKind::Enum(
                EnumProps::deserialize(properties).map_err(props)?,
            )),
            NUMBER_BOUND => Ok(ConditionKind::NumberBound),
            SWITCH => Ok(ConditionKind::Switch),
            other => Err(ConditionError::UnsupportedType(other.to_owned())),
        }
    }

    pub fn tag(&self) -> &'static str {
        match self {
            ConditionKind::LogSlider(_) => LOG_SLIDER,
            ConditionKind::Enum(_) => ENUM,
            ConditionKind::NumberBound => NUMBER_BOUND,
            ConditionKind::Switch => SWITCH,
        }
    }
}
