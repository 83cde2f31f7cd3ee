use crate::app::state::{AppState, CalculatorTab};
use crate::nav::{self, MenuEvent};
use crate::theme::Theme;

/// The tab whose result is discarded when `selected` becomes active.
#[must_use]
pub const fn tab_to_clear(selected: CalculatorTab) -> CalculatorTab {
    match selected {
        CalculatorTab::Nps => CalculatorTab::Ps,
        CalculatorTab::Ps => CalculatorTab::Nps,
    }
}

/// Activate `tab`, clear the other calculator's result and focus the new form.
pub fn select_tab(state: &AppState, tab: CalculatorTab) {
    if *state.active_tab == tab {
        return;
    }
    match tab_to_clear(tab) {
        CalculatorTab::Nps => state.nps_result.set(None),
        CalculatorTab::Ps => state.ps_result.set(None),
    }
    state.active_tab.set(tab);
    crate::dom::focus_after_render(tab.first_field());
}

pub fn menu_event(state: &AppState, event: MenuEvent) {
    let next = nav::next_open(*state.menu_open, event);
    if next != *state.menu_open {
        log::debug!("menu {event:?}: open={next}");
        state.menu_open.set(next);
    }
}

pub fn set_theme(state: &AppState, theme: Theme) {
    state.theme.set(theme);
}
