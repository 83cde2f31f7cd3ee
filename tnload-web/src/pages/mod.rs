pub mod calculator;
pub mod home;
pub mod not_found;
pub mod reports;
pub mod submit;
