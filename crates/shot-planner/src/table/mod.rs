//! Table model: balls, pockets, and the per-decision snapshot.

pub mod ball;
pub mod layout;
pub mod pocket;
pub mod snapshot;

pub use ball::{Ball, BallGroup, TargetGroup, CUE_BALL_ID, EIGHT_BALL_ID};
pub use layout::{rack, TableLayout};
pub use pocket::Pocket;
pub use snapshot::TableSnapshot;

/// Default ball radius in table units.
pub const BALL_RADIUS: f32 = 14.0;
