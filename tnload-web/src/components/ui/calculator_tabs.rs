use crate::app::state::{CalculatorTab, ReferenceStatus};
use crate::components::daisy_ui::{Tab, TabItem, tab_button_id};
use crate::components::ui::nps_form::NpsForm;
use crate::components::ui::ps_form::PsForm;
use tnload_core::{CalculationKind, CalculationResult};
use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct Props {
    pub reference: ReferenceStatus,
    pub active: CalculatorTab,
    #[prop_or_default]
    pub nps_result: Option<CalculationResult>,
    #[prop_or_default]
    pub ps_result: Option<CalculationResult>,
    #[prop_or_default]
    pub on_select: Callback<CalculatorTab>,
    #[prop_or_default]
    pub on_result: Callback<CalculationResult>,
}

fn return_to_tabs(active: CalculatorTab) -> Html {
    let onclick = Callback::from(move |_: MouseEvent| {
        crate::dom::focus_by_id(&tab_button_id(active.panel_id()));
    });
    html! {
        <button type="button" class="return-to-tabs btn btn-link" onclick={onclick}>
            { "Return to calculator tabs" }
        </button>
    }
}

#[function_component(CalculatorTabs)]
pub fn calculator_tabs(p: &Props) -> Html {
    let on_change = {
        let cb = p.on_select.clone();
        Callback::from(move |id: AttrValue| {
            if let Some(tab) = CalculatorTab::from_panel_id(&id) {
                cb.emit(tab);
            }
        })
    };
    let nps = html! {
        <>
            <NpsForm reference={p.reference.clone()} result={p.nps_result.clone()} on_result={p.on_result.clone()} />
            { return_to_tabs(p.active) }
        </>
    };
    let ps = html! {
        <>
            <PsForm reference={p.reference.clone()} result={p.ps_result.clone()} on_result={p.on_result.clone()} />
            { return_to_tabs(p.active) }
        </>
    };
    let tabs = vec![
        TabItem {
            id: CalculatorTab::Nps.panel_id().into(),
            label: CalculatorTab::Nps.label().into(),
            content: nps,
        },
        TabItem {
            id: CalculatorTab::Ps.panel_id().into(),
            label: CalculatorTab::Ps.label().into(),
            content: ps,
        },
    ];
    html! {
        <Tab
            tabs={tabs}
            active_id={AttrValue::from(p.active.panel_id())}
            label="Calculator type"
            on_change={on_change}
        />
    }
}

/// Which tab a result belongs to.
#[must_use]
pub const fn tab_for(result: &CalculationResult) -> CalculatorTab {
    match result.kind {
        CalculationKind::Nps => CalculatorTab::Nps,
        CalculationKind::Ps => CalculatorTab::Ps,
    }
}
