//! Entity structs for the tracker's domain objects.
//!
//! All structs derive `Serialize`, `Deserialize`, and `JsonSchema` so the
//! reporting side can export them as JSON and validate the shape.

mod command;
mod session;

pub use command::CommandExecution;
pub use session::Session;
