//! Error types used when authoring a world.

/// Alias for `Result<T, CoreError>`.
pub type CoreResult<T> = Result<T, CoreError>;

/// Errors that can occur while assembling or addressing a world.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CoreError {
    /// A room already occupies the requested coordinate.
    #[error("position ({x}, {y}, {z}) is already occupied")]
    PositionOccupied {
        /// X coordinate.
        x: i32,
        /// Y coordinate.
        y: i32,
        /// Z coordinate.
        z: i32,
    },

    /// A region with the same identifier is already part of the overworld.
    #[error("region already exists: \"{0}\"")]
    DuplicateRegion(String),

    /// The named region does not exist.
    #[error("region not found: \"{0}\"")]
    RegionNotFound(String),

    /// There is no room for the player to stand in.
    #[error("the world has no current room")]
    NoCurrentRoom,
}
