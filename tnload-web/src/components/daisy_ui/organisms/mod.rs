pub mod navbar;
pub mod theme_controller;

pub use navbar::{Navbar, NavbarProps};
pub use theme_controller::{ThemeController, ThemeControllerProps};
