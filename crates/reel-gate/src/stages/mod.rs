//! Built-in gate stages.

pub mod blank_text;
pub mod required;
pub mod year_range;

pub use blank_text::BlankTextStage;
pub use required::{RequiredFieldsStage, REQUIRED_FIELDS_MESSAGE};
pub use year_range::YearRangeStage;
