use yew::prelude::*;

use crate::animation::reveal::AnimateIn;
use crate::components::section::{ConsultButton, CtaButton};

const DETAILS: [(&str, &str); 3] = [
    ("Office", "Department of Chemical Engineering"),
    ("Email", "consult@processlab.example"),
    ("Hours", "Mon - Fri, 9:00 - 17:00 WAT"),
];

#[function_component(ContactSection)]
pub fn contact_section() -> Html {
    html! {
        <div class="contact-container">
            <h2 class="section-title">{"Contact"}</h2>
            <AnimateIn class={classes!("about-text-content")}>
                <p>{"Tell us about your process or research question and we will reply with a scoped proposal."}</p>
                <ConsultButton topic="consultation" text="Start a Consultation" />
            </AnimateIn>
            <div class="contact-details">
                { for DETAILS.iter().map(|(label, value)| html! {
                    <AnimateIn class={classes!("detail-item")}>
                        <strong>{ *label }</strong>
                        <span>{ *value }</span>
                    </AnimateIn>
                }) }
            </div>
            <CtaButton section="home" secondary=true>{"Back to Home"}</CtaButton>
        </div>
    }
}
