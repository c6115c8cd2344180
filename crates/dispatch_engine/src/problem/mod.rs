pub mod assignment_problem;
pub mod attica;
pub mod driver;
pub mod driver_roster;
pub mod minutes;
pub mod order_book;
pub mod time_tracker;
pub mod traffic;
pub mod zone;
pub mod zone_catalog;
