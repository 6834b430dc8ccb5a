use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum RoutingError {
    #[error("Invalid input: {0}")]
    InvalidInput(String),
    #[error("Unknown city: {0}")]
    UnknownCity(String),
    #[error("No path exists from {from} to {to}")]
    Unreachable { from: String, to: String },
    #[error("Path is disconnected: no edge between {from} and {to}")]
    DisconnectedPath { from: String, to: String },
}
