pub mod period;
pub mod reservations;
pub mod weekly;
