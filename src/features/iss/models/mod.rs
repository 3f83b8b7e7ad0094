mod iss_data;
mod position;
mod timezone;

pub use iss_data::{IssData, NewIssData};
pub use position::PositionRecord;
pub use timezone::TimezoneRecord;
