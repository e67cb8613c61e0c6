//! horreum-condition - value editors for change-detection conditions.
//!
//! A condition definition carries a type tag and an untyped property bag.
//! [`ConditionKind::parse`] turns the pair into one of four known variants,
//! and [`ConditionDef::editor`] presents a stored value in display units.
//! Unknown tags produce an error placeholder instead of failing.

pub mod editor;
pub mod error;
pub mod kind;

pub use editor::{ConditionDef, Control, Editor, EditorInput};
pub use error::ConditionError;
pub use kind::{ConditionKind, EnumProps, LogSliderProps, NumberBound};
