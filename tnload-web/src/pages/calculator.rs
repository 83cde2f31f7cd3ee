use crate::app::state::{CalculatorTab, ReferenceStatus};
use crate::components::daisy_ui::Skeleton;
use crate::components::ui::CalculatorTabs;
use tnload_core::CalculationResult;
use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct CalculatorPageProps {
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

#[function_component(CalculatorPage)]
pub fn calculator_page(p: &CalculatorPageProps) -> Html {
    html! {
        <section class="page calculator" aria-labelledby="calculator-title">
            <h1 id="calculator-title">{ "TN Load Reduction Calculator" }</h1>
            <p>
                { "Choose the calculator that matches your project. Non-point source estimates use land use and treatment method; point source estimates use discharge and concentration." }
            </p>
            if p.reference.is_loading() {
                <Skeleton height="2rem" label="Loading calculator options" class="options-loading" />
            }
            <CalculatorTabs
                reference={p.reference.clone()}
                active={p.active}
                nps_result={p.nps_result.clone()}
                ps_result={p.ps_result.clone()}
                on_select={p.on_select.clone()}
                on_result={p.on_result.clone()}
            />
        </section>
    }
}
