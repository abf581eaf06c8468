pub mod colors;
pub mod formatting;
pub mod path;
pub mod period;
pub mod table;
pub mod time;
