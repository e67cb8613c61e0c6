//! Editor state for one condition and the conversion of user input back
//! into the stored value.

use serde::{Deserialize, Serialize};
use serde_json::{Number, Value};
use tracing::warn;

use crate::error::ConditionError;
use crate::kind::{ConditionKind, EnumProps, LogSliderProps, NumberBound};

/// A condition as the server describes it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ConditionDef {
    pub name: String,
    pub title: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(rename = "type")]
    pub tag: String,
    #[serde(default)]
    pub properties: Value,
}

impl ConditionDef {
    pub fn kind(&self) -> Result<ConditionKind, ConditionError> {
        ConditionKind::parse(&self.tag, &self.properties)
    }

    /// Builds the editor for `stored`. Never fails: a definition that cannot
    /// be resolved yields an [`Control::Error`] placeholder.
    pub fn editor(&self, stored: &Value, is_tester: bool) -> Editor {
        let (kind, control) = match self.kind() {
            Ok(kind) => {
                let control = kind.control(stored);
                (Some(kind), control)
            }
            Err(err) => {
                warn!(name = %self.name, tag = %self.tag, error = %err, "cannot edit condition");
                (None, Control::Error {
                    message: err.to_string(),
                })
            }
        };
        Editor {
            name: self.name.clone(),
            title: self.title.clone(),
            description: self.description.clone(),
            disabled: !is_tester,
            control,
            kind,
        }
    }
}

/// What the user sees, in display units.
#[derive(Debug, Clone, PartialEq)]
pub enum Control {
    LogSlider {
        /// Stored value multiplied by the scale.
        value: Option<f64>,
        min: f64,
        max: f64,
        discrete: bool,
        unit: Option<String>,
    },
    Enum {
        options: Vec<String>,
        selected: Option<String>,
    },
    NumberBound(NumberBound),
    Switch {
        checked: bool,
    },
    Error {
        message: String,
    },
}

/// A change made by the user, in display units.
#[derive(Debug, Clone, PartialEq)]
pub enum EditorInput {
    Slider(f64),
    Select(String),
    Bound(NumberBound),
    Toggle(bool),
}

impl EditorInput {
    fn name(&self) -> &'static str {
        match self {
            EditorInput::Slider(_) => "slider",
            EditorInput::Select(_) => "select",
            EditorInput::Bound(_) => "bound",
            EditorInput::Toggle(_) => "toggle",
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Editor {
    pub name: String,
    pub title: String,
    pub description: Option<String>,
    /// Set for users without the tester role.
    pub disabled: bool,
    pub control: Control,
    kind: Option<ConditionKind>,
}

impl Editor {
    pub fn kind(&self) -> Option<&ConditionKind> {
        self.kind.as_ref()
    }

    /// The value to store for `input`.
    pub fn on_change(&self, input: EditorInput) -> Result<Value, ConditionError> {
        if self.disabled {
            return Err(ConditionError::ReadOnly);
        }
        match &self.kind {
            Some(kind) => kind.to_stored(input),
            None => Err(ConditionError::NoEditor),
        }
    }
}

impl ConditionKind {
    /// Presents `stored` in display units.
    pub fn control(&self, stored: &Value) -> Control {
        match self {
            ConditionKind::LogSlider(props) => slider_control(props, stored),
            ConditionKind::Enum(EnumProps { options }) => Control::Enum {
                options: options.clone(),
                selected: stored.as_str().map(str::to_owned),
            },
            ConditionKind::NumberBound => {
                Control::NumberBound(NumberBound::deserialize(stored).unwrap_or_default())
            }
            ConditionKind::Switch => Control::Switch {
                checked: stored.as_bool().unwrap_or(false),
            },
        }
    }

    /// Converts user input back into the stored representation.
    pub fn to_stored(&self, input: EditorInput) -> Result<Value, ConditionError> {
        match (self, input) {
            (ConditionKind::LogSlider(props), EditorInput::Slider(displayed)) => {
                number(displayed / props.effective_scale())
            }
            (ConditionKind::Enum(EnumProps { options }), EditorInput::Select(choice)) => {
                if options.contains(&choice) {
                    Ok(Value::String(choice))
                } else {
                    Err(ConditionError::UnknownOption(choice))
                }
            }
            (ConditionKind::NumberBound, EditorInput::Bound(bound)) => {
                if !bound.value.is_finite() {
                    return Err(ConditionError::NotFinite(bound.value));
                }
                Ok(serde_json::json!({
                    "enabled": bound.enabled,
                    "inclusive": bound.inclusive,
                    "value": bound.value,
                }))
            }
            (ConditionKind::Switch, EditorInput::Toggle(checked)) => Ok(Value::Bool(checked)),
            (kind, input) => Err(ConditionError::InputMismatch {
                tag: kind.tag(),
                input: input.name(),
            }),
        }
    }
}

fn slider_control(props: &LogSliderProps, stored: &Value) -> Control {
    Control::LogSlider {
        value: stored.as_f64().map(|v| v * props.effective_scale()),
        min: props.min,
        max: props.max,
        discrete: props.discrete,
        unit: props.unit.clone(),
    }
}

fn number(value: f64) -> Result<Value, ConditionError> {
    Number::from_f64(value)
        .map(Value::Number)
        .ok_or(ConditionError::NotFinite(value))
}
