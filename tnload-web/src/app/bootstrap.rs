use crate::app::state::ReferenceStatus;
#[cfg(target_arch = "wasm32")]
use crate::app::state::AppState;
use crate::dom::LoadError;
use std::rc::Rc;
use tnload_core::constants::LOAD_FAILURE_MESSAGE;
use tnload_core::{LandUseEntry, LoadReductionCalculator, ReferenceTables, TreatmentMethodEntry};
#[cfg(target_arch = "wasm32")]
use yew::prelude::*;

/// Turn the outcome of the two table fetches into the page's load status.
///
/// Failures are written to the console and the log; the page only ever shows
/// the fixed banner text.
#[must_use]
pub fn status_from(
    loaded: Result<(Vec<LandUseEntry>, Vec<TreatmentMethodEntry>), LoadError>,
) -> ReferenceStatus {
    match loaded {
        Ok((land_uses, treatment_methods)) => {
            log::info!(
                "reference tables loaded: {} land uses, {} treatment methods",
                land_uses.len(),
                treatment_methods.len()
            );
            let tables = ReferenceTables::new(land_uses, treatment_methods);
            ReferenceStatus::Ready(Rc::new(LoadReductionCalculator::new(tables)))
        }
        Err(err) => {
            log::error!("Error loading calculator data: {err}");
            #[cfg(target_arch = "wasm32")]
            crate::dom::console_error(&format!("Error loading calculator data: {err}"));
            ReferenceStatus::Failed(LOAD_FAILURE_MESSAGE.into())
        }
    }
}

#[cfg(target_arch = "wasm32")]
async fn load_tables() -> Result<(Vec<LandUseEntry>, Vec<TreatmentMethodEntry>), LoadError> {
    let land_uses =
        crate::dom::fetch_json::<Vec<LandUseEntry>>(&crate::config::land_use_data_url()).await?;
    let treatment_methods = crate::dom::fetch_json::<Vec<TreatmentMethodEntry>>(
        &crate::config::treatment_method_data_url(),
    )
    .await?;
    Ok((land_uses, treatment_methods))
}

/// Fetch both reference tables once per page load. There is no retry.
#[cfg(target_arch = "wasm32")]
#[hook]
pub fn use_bootstrap(app_state: &AppState) {
    let reference = app_state.reference.clone();

    use_effect_with((), move |()| {
        wasm_bindgen_futures::spawn_local(async move {
            reference.set(status_from(load_tables().await));
        });
        || {}
    });
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn loaded_tables_become_ready_calculator() {
        let status = status_from(Ok((
            vec![LandUseEntry::new("Residential", 2.5)],
            vec![TreatmentMethodEntry::new("Bioswale", 0.4)],
        )));
        let calc = status.calculator().expect("ready");
        assert_eq!(calc.tables().base_load("Residential"), Some(2.5));
    }

    #[test]
    fn any_failure_shows_the_fixed_banner_message() {
        let status = status_from(Err(LoadError::Status {
            url: "calculator/tn_calculator_land_use.json".into(),
            status: 404,
        }));
        assert_eq!(
            status.failure().map(yew::AttrValue::as_str),
            Some(LOAD_FAILURE_MESSAGE)
        );
    }
}
