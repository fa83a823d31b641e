//! Application service layer.
//!
//! Services hold the in-memory state and orchestrate parsing, command
//! execution and storage. They provide a clean boundary between the
//! terminal loop and the data layer.

mod logic;
mod model;
mod startup;

pub use logic::{CommandOutcome, Logic, LogicManager};
pub use model::{Model, ModelManager};
pub use startup::load_initial_contacts;
