use crate::theme::Theme;
use std::rc::Rc;
use tnload_core::{CalculationResult, LoadReductionCalculator};
use yew::prelude::*;

/// Where the reference tables stand for this page load.
#[derive(Clone, Debug, Default)]
pub enum ReferenceStatus {
    #[default]
    Loading,
    Ready(Rc<LoadReductionCalculator>),
    Failed(AttrValue),
}

impl ReferenceStatus {
    #[must_use]
    pub fn calculator(&self) -> Option<&LoadReductionCalculator> {
        match self {
            Self::Ready(calc) => Some(calc),
            Self::Loading | Self::Failed(_) => None,
        }
    }

    #[must_use]
    pub fn failure(&self) -> Option<&AttrValue> {
        match self {
            Self::Failed(message) => Some(message),
            Self::Loading | Self::Ready(_) => None,
        }
    }

    #[must_use]
    pub const fn is_loading(&self) -> bool {
        matches!(self, Self::Loading)
    }
}

impl PartialEq for ReferenceStatus {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Self::Loading, Self::Loading) => true,
            (Self::Ready(a), Self::Ready(b)) => Rc::ptr_eq(a, b),
            (Self::Failed(a), Self::Failed(b)) => a == b,
            _ => false,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum CalculatorTab {
    #[default]
    Nps,
    Ps,
}

impl CalculatorTab {
    pub const ALL: [Self; 2] = [Self::Nps, Self::Ps];

    /// Id of the tab panel; the tab button id is derived from it.
    #[must_use]
    pub const fn panel_id(self) -> &'static str {
        match self {
            Self::Nps => "nps-calculator",
            Self::Ps => "ps-calculator",
        }
    }

    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Nps => "Non-Point Source (NPS)",
            Self::Ps => "Point Source (PS)",
        }
    }

    #[must_use]
    pub fn from_panel_id(id: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|tab| tab.panel_id() == id)
    }

    /// Control focused when the tab becomes active.
    #[must_use]
    pub const fn first_field(self) -> &'static str {
        match self {
            Self::Nps => tnload_core::validate::field::NPS_LAND_USE,
            Self::Ps => tnload_core::validate::field::PS_AVG_DISCHARGE,
        }
    }
}

#[derive(Clone)]
pub struct AppState {
    pub theme: UseStateHandle<Theme>,
    pub menu_open: UseStateHandle<bool>,
    pub active_tab: UseStateHandle<CalculatorTab>,
    pub reference: UseStateHandle<ReferenceStatus>,
    pub nps_result: UseStateHandle<Option<CalculationResult>>,
    pub ps_result: UseStateHandle<Option<CalculationResult>>,
}

#[hook]
pub fn use_app_state() -> AppState {
    AppState {
        theme: use_state(crate::theme::saved_theme),
        menu_open: use_state(|| false),
        active_tab: use_state(CalculatorTab::default),
        reference: use_state(ReferenceStatus::default),
        nps_result: use_state(|| None::<CalculationResult>),
        ps_result: use_state(|| None::<CalculationResult>),
    }
}

impl AppState {
    #[must_use]
    pub fn data_ready(&self) -> bool {
        self.reference.calculator().is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tnload_core::ReferenceTables;

    #[test]
    fn panel_ids_round_trip() {
        for tab in CalculatorTab::ALL {
            assert_eq!(CalculatorTab::from_panel_id(tab.panel_id()), Some(tab));
        }
        assert_eq!(CalculatorTab::from_panel_id("unknown"), None);
    }

    #[test]
    fn status_accessors_match_variant() {
        let ready = ReferenceStatus::Ready(Rc::new(LoadReductionCalculator::new(
            ReferenceTables::empty(),
        )));
        assert!(ready.calculator().is_some());
        assert!(ready.failure().is_none());

        let failed = ReferenceStatus::Failed("boom".into());
        assert!(failed.calculator().is_none());
        assert_eq!(failed.failure().map(AttrValue::as_str), Some("boom"));
        assert!(ReferenceStatus::default().is_loading());
    }

    #[test]
    fn ready_status_compares_by_identity() {
        let calc = Rc::new(LoadReductionCalculator::default());
        let a = ReferenceStatus::Ready(Rc::clone(&calc));
        let b = ReferenceStatus::Ready(calc);
        let c = ReferenceStatus::Ready(Rc::new(LoadReductionCalculator::default()));
        assert_eq!(a, b);
        assert_ne!(a, c);
    }
}
