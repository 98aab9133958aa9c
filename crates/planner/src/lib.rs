pub mod error;
pub mod query;

pub use error::{PlannerError, PlannerResult};
pub use query::{compile, json_value, json_value_as, to_sql};
