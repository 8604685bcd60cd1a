pub mod clock;
pub mod count_up;
pub mod pie;

pub use clock::ElapsedClock;
pub use count_up::CountUp;
pub use pie::{PieGeometry, SliceArc, slice_arcs};
