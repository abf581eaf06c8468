pub mod check_event;
pub mod location;
pub mod status;
pub mod table;

pub use check_event::CheckEvent;
pub use location::Location;
pub use status::Status;
pub use table::{COLUMNS, Table};
