use yew::prelude::*;

use crate::animation::counter::StatCounter;
use crate::animation::parallax::FloatingElements;
use crate::animation::reveal::{AnimateIn, CardKind, RevealCard};
use crate::animation::typing::TypedHeading;
use crate::components::section::{ConsultButton, CtaButton};

const STATS: [(&str, &str); 4] = [
    ("150+", "Publications"),
    ("25+", "Industry Partners"),
    ("98%", "Client Satisfaction"),
    ("20", "Years of Practice"),
];

const FEATURES: [(&str, &str); 3] = [
    ("Process Optimization", "Statistical design and modelling that cuts cost and raises yield."),
    ("Applied Research", "Bench-to-pilot studies in bioprocessing and biofuels."),
    ("Capacity Building", "Hands-on training for engineers and research teams."),
];

#[function_component(HomeSection)]
pub fn home_section() -> Html {
    html! {
        <>
            <div class="hero">
                <FloatingElements layers={4} />
                <AnimateIn class={classes!("hero-content")}>
                    <TypedHeading text="Engineering Better Processes" />
                    <p class="hero-subtitle">
                        {"Consulting, research and training in chemical and bioprocess engineering."}
                    </p>
                    <div class="hero-cta-group">
                        <ConsultButton topic="consultation" text="Book a Consultation" />
                        <CtaButton section="services" secondary=true>{"Explore Services"}</CtaButton>
                    </div>
                </AnimateIn>
            </div>

            <AnimateIn class={classes!("stats-section")}>
                { for STATS.iter().map(|(value, label)| html! {
                    <StatCounter value={*value} label={*label} />
                }) }
            </AnimateIn>

            <div class="feature-grid">
                { for FEATURES.iter().enumerate().map(|(index, (title, body))| html! {
                    <RevealCard kind={CardKind::Feature} {index}>
                        <h3>{ *title }</h3>
                        <p>{ *body }</p>
                    </RevealCard>
                }) }
            </div>
        </>
    }
}
