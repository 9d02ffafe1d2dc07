//! Form model and validator
//!
//! Field values, the declarative validation schema, and the model that ties
//! them together for one wizard session.

pub mod field;
pub mod model;
pub mod schema;
pub mod values;

pub use field::{FieldName, FieldValue};
pub use model::FormModel;
pub use schema::ValidationOutcome;
pub use values::FormValues;
