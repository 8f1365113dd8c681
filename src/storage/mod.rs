pub mod growable;
pub mod record;

pub use growable::GrowableArray;
pub use record::{Record, RecordDate, DATE_LEN};
