pub mod cell;
pub mod daily_worker;
pub mod punch;
pub mod shift;
pub mod table;

pub use cell::CellValue;
pub use daily_worker::DailyWorkerRecord;
pub use punch::{DEFAULT_GROUP, Punch};
pub use shift::{BreakInterval, LunchKind, Shift};
pub use table::{Row, Table};
