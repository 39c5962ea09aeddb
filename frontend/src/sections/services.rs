use yew::prelude::*;

use crate::animation::reveal::{CardKind, RevealCard};
use crate::components::section::ConsultButton;

struct Service {
    topic: &'static str,
    title: &'static str,
    summary: &'static str,
}

const SERVICES: [Service; 3] = [
    Service {
        topic: "industrial",
        title: "Industrial Process Optimization",
        summary: "Response-surface and machine-learning models tuned to your plant data.",
    },
    Service {
        topic: "research",
        title: "Research Collaboration",
        summary: "Joint projects, grant partnerships and student supervision.",
    },
    Service {
        topic: "training",
        title: "Training & Workshops",
        summary: "Short courses on experimental design, modelling and scale-up.",
    },
];

#[function_component(ServicesSection)]
pub fn services_section() -> Html {
    html! {
        <div class="services-container">
            <h2 class="section-title">{"Services"}</h2>
            <div class="services-grid">
                { for SERVICES.iter().enumerate().map(|(index, service)| html! {
                    <RevealCard kind={CardKind::Service} {index}>
                        <h3>{ service.title }</h3>
                        <p>{ service.summary }</p>
                        <ConsultButton topic={service.topic} text="Request Proposal" />
                    </RevealCard>
                }) }
            </div>
        </div>
    }
}
