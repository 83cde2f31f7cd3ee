//! Third-party iframe embed behind a skeleton loader.

use crate::components::daisy_ui::Skeleton;
use yew::prelude::*;

/// Fixed minimum height of table (reports) frames.
pub const REPORTS_MIN_HEIGHT_PX: u32 = 700;
/// Floor for form frames; taller same-origin content raises it.
pub const FORM_MIN_HEIGHT_PX: u32 = 1500;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FrameKind {
    Form,
    Reports,
}

/// Minimum container height once the frame has loaded.
///
/// `content_height` is `None` when the frame document is unreadable (cross-origin).
#[must_use]
pub fn min_height_px(kind: FrameKind, content_height: Option<u32>) -> u32 {
    match kind {
        FrameKind::Reports => REPORTS_MIN_HEIGHT_PX,
        FrameKind::Form => content_height.map_or(FORM_MIN_HEIGHT_PX, |h| h.max(FORM_MIN_HEIGHT_PX)),
    }
}

#[derive(Properties, PartialEq, Clone)]
pub struct EmbedFrameProps {
    pub kind: FrameKind,
    pub src: AttrValue,
    pub title: AttrValue,
    /// Heading focused by the "skip past" control.
    pub heading_id: AttrValue,
}

#[cfg(target_arch = "wasm32")]
fn content_height(frame: &NodeRef) -> Option<u32> {
    let iframe = frame.cast::<web_sys::HtmlIFrameElement>()?;
    let body = iframe.content_document()?.body()?;
    u32::try_from(body.scroll_height()).ok()
}

#[function_component(EmbedFrame)]
pub fn embed_frame(props: &EmbedFrameProps) -> Html {
    let loaded = use_state(|| false);
    let min_height = use_state(|| None::<u32>);
    let frame_ref = use_node_ref();

    #[cfg(target_arch = "wasm32")]
    {
        let min_height = min_height.clone();
        let frame_ref = frame_ref.clone();
        let kind = props.kind;
        use_effect_with(*loaded, move |loaded| {
            let listener = (*loaded && kind == FrameKind::Form)
                .then(crate::dom::window)
                .flatten()
                .and_then(|win| {
                    crate::dom::Listener::new(&win, "resize", move |_| {
                        min_height.set(Some(min_height_px(kind, content_height(&frame_ref))));
                    })
                });
            move || drop(listener)
        });
    }

    let onload = {
        let loaded = loaded.clone();
        let min_height = min_height.clone();
        let kind = props.kind;
        #[cfg(target_arch = "wasm32")]
        let frame_ref = frame_ref.clone();
        Callback::from(move |_: Event| {
            #[cfg(target_arch = "wasm32")]
            let measured = content_height(&frame_ref);
            #[cfg(not(target_arch = "wasm32"))]
            let measured = None;
            min_height.set(Some(min_height_px(kind, measured)));
            loaded.set(true);
        })
    };

    let escape = {
        let heading = props.heading_id.clone();
        Callback::from(move |_: MouseEvent| crate::dom::focus_by_id(&heading))
    };

    let kind_class = match props.kind {
        FrameKind::Form => "embed-form",
        FrameKind::Reports => "embed-reports",
    };
    let style = (*min_height).map(|h| format!("min-height:{h}px;"));
    html! {
        <div class={classes!("embed-container", kind_class, (*loaded).then_some("loaded"))} style={style}>
            <Skeleton hidden={*loaded} label="Loading embedded content" />
            <iframe
                ref={frame_ref}
                class={classes!("embed-frame", (*loaded).then_some("loaded"))}
                src={props.src.clone()}
                title={props.title.clone()}
                loading="lazy"
                onload={onload}
            />
            <button type="button" class="escape-frame btn btn-link" onclick={escape}>
                { "Skip past embedded content" }
            </button>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reports_frames_use_fixed_height() {
        assert_eq!(min_height_px(FrameKind::Reports, None), 700);
        assert_eq!(min_height_px(FrameKind::Reports, Some(2400)), 700);
    }

    #[test]
    fn form_frames_never_drop_below_floor() {
        assert_eq!(min_height_px(FrameKind::Form, None), 1500);
        assert_eq!(min_height_px(FrameKind::Form, Some(900)), 1500);
        assert_eq!(min_height_px(FrameKind::Form, Some(2100)), 2100);
    }
}
