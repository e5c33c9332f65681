//! Form building blocks shared by every page.

mod alert_box;
pub use alert_box::{Alert, AlertBox, AlertKind};

mod input_field;
pub use input_field::InputField;

mod select_field;
pub use select_field::{SelectField, SelectOption};
