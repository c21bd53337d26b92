pub mod calendar;
pub mod interval;
pub mod number;
pub mod types;

pub use calendar::{CalendarDate, utc_offset};
pub use interval::DateInterval;
pub use number::format_number;
pub use types::{DataPoint, PixelPosition, Viewport};
