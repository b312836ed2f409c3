mod store;
pub use store::*;

mod session;
pub use session::*;

mod intersect;
pub use intersect::*;

mod collapse;
pub use collapse::*;

mod sketch;
pub use sketch::*;
