pub mod calculator_form;
pub mod calculator_tabs;
pub mod nps_form;
pub mod ps_form;
pub mod result_card;

pub use calculator_tabs::CalculatorTabs;
pub use nps_form::NpsForm;
pub use ps_form::PsForm;
pub use result_card::ResultCard;
