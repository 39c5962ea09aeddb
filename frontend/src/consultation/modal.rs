use gloo_timers::callback::Timeout;
use wasm_bindgen_futures::spawn_local;
use web_sys::{HtmlElement, HtmlInputElement, HtmlSelectElement, HtmlTextAreaElement};
use yew::prelude::*;

use crate::analytics::Analytics;
use crate::components::notification::Notifier;
use crate::config::timings;
use crate::consultation::client::ConsultationService;
use crate::consultation::form::{outcome_notice, send_consultation, Field, FormAction, FormState, SubmitPhase};

/// What the visitor clicked to open the modal. Every topic shares the one
/// consultation form.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ConsultationTopic {
    Consultation,
    Industrial,
    Research,
    Training,
}

impl ConsultationTopic {
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "consultation" => Some(Self::Consultation),
            "industrial" => Some(Self::Industrial),
            "research" => Some(Self::Research),
            "training" => Some(Self::Training),
            _ => None,
        }
    }

    /// Value preselected in the project type dropdown.
    pub fn project_type(self) -> Option<&'static str> {
        match self {
            Self::Consultation => None,
            Self::Industrial => Some("industrial"),
            Self::Research => Some("research"),
            Self::Training => Some("training"),
        }
    }
}

const PROJECT_TYPES: [(&str, &str); 4] = [
    ("industrial", "Industrial Process Optimization"),
    ("research", "Research Collaboration"),
    ("training", "Training & Workshops"),
    ("other", "Other"),
];

/// A click closes the modal only when it lands on the overlay itself and not
/// on anything inside the dialog.
fn is_backdrop_click<T: PartialEq>(target: Option<&T>, backdrop: Option<&T>) -> bool {
    matches!((target, backdrop), (Some(target), Some(backdrop)) if target == backdrop)
}

fn set_body_overflow(value: &str) {
    let body = web_sys::window()
        .and_then(|w| w.document())
        .and_then(|d| d.body());
    if let Some(body) = body {
        let _ = body.style().set_property("overflow", value);
    }
}

#[derive(Properties, PartialEq)]
pub struct ConsultationModalProps {
    pub topic: Option<ConsultationTopic>,
    pub service: ConsultationService,
    pub on_close: Callback<()>,
}

#[function_component(ConsultationModal)]
pub fn consultation_modal(props: &ConsultationModalProps) -> Html {
    let form = use_reducer(FormState::default);
    let first_input = use_node_ref();
    let backdrop = use_node_ref();
    let analytics = use_context::<Analytics>().unwrap_or_default();
    let notifier = use_context::<Notifier>();

    {
        let form = form.dispatcher();
        let first_input = first_input.clone();
        use_effect_with_deps(
            move |topic| {
                let focus = topic.map(|topic| {
                    set_body_overflow("hidden");
                    if let Some(project_type) = topic.project_type() {
                        form.dispatch(FormAction::Set(Field::ProjectType, project_type.to_string()));
                    }
                    Timeout::new(timings::MODAL_FOCUS_DELAY_MS, move || {
                        if let Some(input) = first_input.cast::<HtmlElement>() {
                            let _ = input.focus();
                        }
                    })
                });
                move || {
                    if focus.is_some() {
                        set_body_overflow("auto");
                    }
                    drop(focus);
                }
            },
            props.topic,
        );
    }

    let on_backdrop = {
        let on_close = props.on_close.clone();
        let backdrop = backdrop.clone();
        Callback::from(move |e: MouseEvent| {
            let target = e.target_dyn_into::<web_sys::Element>();
            let overlay = backdrop.cast::<web_sys::Element>();
            if is_backdrop_click(target.as_ref(), overlay.as_ref()) {
                on_close.emit(());
            }
        })
    };

    let on_close_button = {
        let on_close = props.on_close.clone();
        Callback::from(move |_: MouseEvent| on_close.emit(()))
    };

    let onsubmit = {
        let form = form.clone();
        let service = props.service.clone();
        let on_close = props.on_close.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();

            let mut draft = (*form).clone();
            let Some(request) = draft.begin_submit() else {
                form.dispatch(FormAction::ValidateAll);
                return;
            };
            form.dispatch(FormAction::BeginSubmit);

            let dispatcher = form.dispatcher();
            let client = service.client();
            let analytics = analytics.clone();
            let notifier = notifier.clone();
            let on_close = on_close.clone();
            spawn_local(async move {
                let outcome = send_consultation(client, analytics, request).await;
                if let Some(notifier) = &notifier {
                    notifier.notify(outcome_notice(&outcome));
                }
                dispatcher.dispatch(FormAction::Finish { succeeded: outcome.is_ok() });
                if outcome.is_ok() {
                    on_close.emit(());
                }
            });
        })
    };

    let setter = |field: Field| {
        let form = form.dispatcher();
        move |value: String| form.dispatch(FormAction::Set(field, value))
    };
    let on_blur = |field: Field| {
        let form = form.dispatcher();
        Callback::from(move |_: FocusEvent| form.dispatch(FormAction::Blur(field)))
    };

    let error_view = |field: Field| match form.error(field) {
        Some(error) => html! {
            <div class="error-message" style="color: #ef4444; font-size: 0.875rem; margin-top: 0.25rem;">
                { error.to_string() }
            </div>
        },
        None => html! {},
    };

    let input_view = |field: Field, input_type: &'static str, node: Option<NodeRef>| {
        let set = setter(field);
        let oninput = Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            set(input.value());
        });
        html! {
            <div class="form-group">
                <label for={field.id()}>{ field.label() }</label>
                <input
                    ref={node.unwrap_or_default()}
                    id={field.id()}
                    name={field.id()}
                    type={input_type}
                    class={classes!(form.error(field).is_some().then_some("error"))}
                    required={field.required()}
                    value={form.value(field).to_string()}
                    {oninput}
                    onblur={on_blur(field)}
                />
                { error_view(field) }
            </div>
        }
    };

    let select_view = {
        let field = Field::ProjectType;
        let set = setter(field);
        let onchange = Callback::from(move |e: Event| {
            let select: HtmlSelectElement = e.target_unchecked_into();
            set(select.value());
        });
        let current = form.value(field).to_string();
        html! {
            <div class="form-group">
                <label for={field.id()}>{ field.label() }</label>
                <select
                    id={field.id()}
                    name={field.id()}
                    class={classes!(form.error(field).is_some().then_some("error"))}
                    required={field.required()}
                    {onchange}
                    onblur={on_blur(field)}
                >
                    <option value="" selected={current.is_empty()}>{"Select a service"}</option>
                    { for PROJECT_TYPES.iter().map(|(value, label)| html! {
                        <option value={*value} selected={current == *value}>{ *label }</option>
                    }) }
                </select>
                { error_view(field) }
            </div>
        }
    };

    let message_view = {
        let field = Field::Message;
        let set = setter(field);
        let oninput = Callback::from(move |e: InputEvent| {
            let area: HtmlTextAreaElement = e.target_unchecked_into();
            set(area.value());
        });
        html! {
            <div class="form-group">
                <label for={field.id()}>{ field.label() }</label>
                <textarea
                    id={field.id()}
                    name={field.id()}
                    rows="4"
                    class={classes!(form.error(field).is_some().then_some("error"))}
                    required={field.required()}
                    value={form.value(field).to_string()}
                    {oninput}
                    onblur={on_blur(field)}
                />
                { error_view(field) }
            </div>
        }
    };

    let button = form.button();
    let display = if props.topic.is_some() { "block" } else { "none" };

    html! {
        <div ref={backdrop} id="consultationModal" class="modal" style={format!("display: {};", display)} onclick={on_backdrop}>
            <div class="modal-content">
                <button type="button" class="modal-close" aria-label="Close" onclick={on_close_button}>{"×"}</button>
                <h2>{"Request a Consultation"}</h2>
                <form class="consultation-form" novalidate=true {onsubmit}>
                    { input_view(Field::Name, "text", Some(first_input.clone())) }
                    { input_view(Field::Email, "email", None) }
                    { input_view(Field::Phone, "tel", None) }
                    { input_view(Field::Organization, "text", None) }
                    { select_view }
                    { message_view }
                    <button type="submit" class="btn-primary" disabled={button.disabled}>
                        {
                            if form.phase() == SubmitPhase::Submitting {
                                html! { <i class="fas fa-spinner fa-spin"></i> }
                            } else {
                                html! {}
                            }
                        }
                        { " " }{ button.label }
                    </button>
                </form>
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn topics_map_to_project_types() {
        assert_eq!(ConsultationTopic::from_name("consultation").unwrap().project_type(), None);
        assert_eq!(ConsultationTopic::from_name("industrial").unwrap().project_type(), Some("industrial"));
        assert_eq!(ConsultationTopic::from_name("training").unwrap().project_type(), Some("training"));
        assert_eq!(ConsultationTopic::from_name("pricing"), None);
    }

    #[test]
    fn only_clicks_on_the_overlay_close_the_modal() {
        let overlay = "consultationModal";
        assert!(is_backdrop_click(Some(&overlay), Some(&overlay)));
        assert!(!is_backdrop_click(Some(&"name"), Some(&overlay)));
        assert!(!is_backdrop_click(Some(&"modal-content"), Some(&overlay)));
    }

    #[test]
    fn unmounted_overlay_never_closes() {
        assert!(!is_backdrop_click(Some(&"consultationModal"), None));
        assert!(!is_backdrop_click::<&str>(None, None));
    }

    #[test]
    fn prefilled_types_exist_in_dropdown() {
        for topic in [ConsultationTopic::Industrial, ConsultationTopic::Research, ConsultationTopic::Training] {
            let value = topic.project_type().unwrap();
            assert!(PROJECT_TYPES.iter().any(|(v, _)| *v == value));
        }
    }
}
