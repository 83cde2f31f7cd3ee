use futures::executor::block_on;
use tnload_core::{CalculationKind, CalculationResult};
use tnload_web::components::daisy_ui::{Select, SelectOption, SelectProps, Tab, TabItem, TabProps};
use tnload_web::components::embed_frame::{EmbedFrame, EmbedFrameProps, FrameKind};
use tnload_web::components::footer::Footer;
use tnload_web::components::header::{Header, Props as HeaderProps};
use tnload_web::components::ui::result_card::{Props as ResultProps, ResultCard};
use tnload_web::router::Route;
use tnload_web::theme::Theme;
use yew::{AttrValue, Callback, Html, LocalServerRenderer};

fn header_props(menu_open: bool) -> HeaderProps {
    HeaderProps {
        current: Route::Calculator,
        menu_open,
        theme: Theme::Light,
        on_menu: Callback::noop(),
        on_navigate: Callback::noop(),
        on_theme: Callback::noop(),
    }
}

#[test]
fn header_renders_skip_link_nav_and_toggles() {
    let html = block_on(LocalServerRenderer::<Header>::with_props(header_props(false)).render());
    assert!(html.contains("href=\"#main\""));
    assert!(html.contains("Submit a Project"));
    assert!(html.contains("Reports"));
    assert!(html.contains("id=\"hamburger\""));
    assert!(html.contains("aria-expanded=\"false\""));
    assert!(html.contains("theme-toggle"));
    assert!(html.contains("Switch to dark theme"));
    assert!(html.contains("aria-current=\"page\""));
}

#[test]
fn open_menu_marks_hamburger_and_links_active() {
    let html = block_on(LocalServerRenderer::<Header>::with_props(header_props(true)).render());
    assert!(html.contains("aria-expanded=\"true\""));
    assert!(html.contains("nav-links active"));
}

#[test]
fn footer_renders_landmark() {
    let html = block_on(LocalServerRenderer::<Footer>::new().render());
    assert!(html.contains("<footer"));
    assert!(html.contains("TN Load Reduction Program"));
}

#[test]
fn result_card_shows_rounded_value_and_copy_action() {
    let props = ResultProps {
        prefix: AttrValue::from("nps"),
        result: Some(CalculationResult::new(CalculationKind::Nps, 10.0)),
    };
    let html = block_on(LocalServerRenderer::<ResultCard>::with_props(props).render());
    assert!(html.contains("NPS TN Load Reduction"));
    assert!(html.contains("10.00"));
    assert!(html.contains("lbs/year"));
    assert!(html.contains("Copy Value"));
    assert!(html.contains("id=\"nps-copy-btn\""));
}

#[test]
fn result_card_is_empty_without_a_result() {
    let props = ResultProps {
        prefix: AttrValue::from("ps"),
        result: None,
    };
    let html = block_on(LocalServerRenderer::<ResultCard>::with_props(props).render());
    assert!(html.contains("id=\"ps-result\""));
    assert!(!html.contains("Copy Value"));
}

#[test]
fn select_keeps_placeholder_first() {
    let props = SelectProps {
        id: AttrValue::from("npsLandUse"),
        placeholder: AttrValue::from("Choose one"),
        options: vec![SelectOption::named("Residential"), SelectOption::named("Forest")],
        value: None,
        required: true,
        invalid: true,
        disabled: false,
        class: yew::Classes::new(),
        node_ref: yew::NodeRef::default(),
        on_change: Callback::noop(),
    };
    let html = block_on(LocalServerRenderer::<Select>::with_props(props).render());
    let placeholder = html.find("Choose one").expect("placeholder");
    let first = html.find("Residential").expect("option");
    assert!(placeholder < first);
    assert!(html.contains("is-invalid"));
    assert!(html.contains("aria-describedby=\"npsLandUse-feedback\""));
}

#[test]
fn tabs_mark_one_tab_selected_with_roving_tabindex() {
    let tab = |id: &'static str| TabItem {
        id: AttrValue::from(id),
        label: AttrValue::from(id),
        content: Html::default(),
    };
    let props = TabProps {
        tabs: vec![tab("nps-calculator"), tab("ps-calculator")],
        active_id: AttrValue::from("ps-calculator"),
        label: None,
        class: yew::Classes::new(),
        on_change: Callback::noop(),
    };
    let html = block_on(LocalServerRenderer::<Tab>::with_props(props).render());
    assert_eq!(html.matches("aria-selected=\"true\"").count(), 1);
    assert_eq!(html.matches("aria-selected=\"false\"").count(), 1);
    assert_eq!(html.matches("tabindex=\"0\"").count(), 1);
    assert_eq!(html.matches("tabindex=\"-1\"").count(), 1);
    assert!(html.contains("id=\"ps-calculator-tab\""));
}

#[test]
fn embed_frame_starts_behind_skeleton() {
    let props = EmbedFrameProps {
        kind: FrameKind::Reports,
        src: AttrValue::from("https://example.com/table"),
        title: AttrValue::from("Reported projects table"),
        heading_id: AttrValue::from("reports-title"),
    };
    let html = block_on(LocalServerRenderer::<EmbedFrame>::with_props(props).render());
    assert!(html.contains("skeleton-loader"));
    assert!(html.contains("embed-reports"));
    assert!(html.contains("aria-hidden=\"false\""));
    assert!(!html.contains("embed-frame loaded"));
    assert!(html.contains("https://example.com/table"));
}
