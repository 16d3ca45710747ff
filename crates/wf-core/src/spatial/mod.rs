//! Rooms, the exits between them, and the grids they are arranged in.

mod exit;
mod overworld;
mod region;
mod room;
mod view_point;

pub use exit::Exit;
pub use overworld::Overworld;
pub use region::{Point3D, Region};
pub use room::Room;
pub use view_point::ViewPoint;
