//! Error types for scene and camera operations.
//!
//! Numerical edge cases in the gesture math (zero-length vectors, scale
//! overflow, empty selections) are absorbed where they happen and never
//! surface here. These errors cover structural misuse of the API.

use thiserror::Error;

/// Errors returned by the canvas scene, camera and configuration.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum CanvasError {
    /// A node with this id is already in the scene
    #[error("Node {0} already exists")]
    DuplicateNode(i32),

    /// No node with this id is in the scene
    #[error("Node {0} not found")]
    NodeNotFound(i32),

    /// The camera transform cannot be inverted
    #[error("Camera transform is not invertible")]
    SingularTransform,

    /// A configuration value is out of range
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),
}
