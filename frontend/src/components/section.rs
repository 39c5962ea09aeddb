use yew::prelude::*;

use crate::consultation::modal::ConsultationTopic;
use crate::navigation::{SectionId, SiteActions};

#[derive(Properties, PartialEq)]
pub struct PageSectionProps {
    pub id: SectionId,
    pub visible: bool,
    #[prop_or_default]
    pub children: Children,
}

/// One `.section` block; the stylesheet hides it unless it is `active`.
#[function_component(PageSection)]
pub fn page_section(props: &PageSectionProps) -> Html {
    html! {
        <section id={props.id.as_attr()} class={classes!("section", props.visible.then_some("active"))}>
            { for props.children.iter() }
        </section>
    }
}

#[derive(Properties, PartialEq)]
pub struct CtaButtonProps {
    /// `data-section` the button jumps to.
    pub section: AttrValue,
    #[prop_or(false)]
    pub secondary: bool,
    #[prop_or_default]
    pub children: Children,
}

/// Call-to-action that switches sections like a nav link does.
#[function_component(CtaButton)]
pub fn cta_button(props: &CtaButtonProps) -> Html {
    let actions = use_context::<SiteActions>();
    let onclick = {
        let target = props.section.to_string();
        Callback::from(move |e: MouseEvent| {
            if target.is_empty() {
                return;
            }
            e.prevent_default();
            if let Some(actions) = &actions {
                actions.navigate_attr.emit(target.clone());
            }
        })
    };

    html! {
        <a
            href={format!("#{}", props.section)}
            class={if props.secondary { "btn-secondary" } else { "btn-primary" }}
            data-section={props.section.clone()}
            {onclick}
        >
            { for props.children.iter() }
        </a>
    }
}

#[derive(Properties, PartialEq)]
pub struct ConsultButtonProps {
    /// Topic name as used by the modal ("consultation", "industrial", ...).
    pub topic: AttrValue,
    pub text: AttrValue,
    #[prop_or_default]
    pub class: Classes,
}

#[function_component(ConsultButton)]
pub fn consult_button(props: &ConsultButtonProps) -> Html {
    let actions = use_context::<SiteActions>();
    let onclick = {
        let topic = ConsultationTopic::from_name(&props.topic);
        let text = props.text.to_string();
        Callback::from(move |_: MouseEvent| {
            if let (Some(actions), Some(topic)) = (&actions, topic) {
                actions.open_consultation.emit((topic, text.clone()));
            }
        })
    };

    html! {
        <button type="button" class={classes!("btn-primary", props.class.clone())} {onclick}>
            { props.text.clone() }
        </button>
    }
}
