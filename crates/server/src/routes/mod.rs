use schemars::JsonSchema;
use serde::Serialize;

pub mod docs;
pub mod health;
pub mod projects;
pub mod tasks;

/// Confirmation body returned by the update and delete endpoints.
#[derive(Debug, Serialize, JsonSchema)]
pub struct Message {
    pub message: String,
}
