pub mod swap;
pub mod tab;
pub mod validator;

pub use swap::{Swap, SwapProps};
pub use tab::{Tab, TabItem, TabProps, key_target, tab_button_id};
pub use validator::{Validator, ValidatorProps};
