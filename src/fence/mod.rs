pub mod point;
pub mod session;
pub mod store;

pub use point::{FencePoint, ParseCoordError, parse_coord};
pub use session::FenceSession;
pub use store::FencePointStore;
