pub mod detail;
pub mod lookup;
pub mod preview;

pub use detail::*;
pub use lookup::*;
pub use preview::*;
