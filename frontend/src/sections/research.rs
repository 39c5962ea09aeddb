use yew::prelude::*;

use crate::animation::reveal::{CardKind, RevealCard};
use crate::components::lazy_image::LazyImage;
use crate::navigation::scroll_to_element;

const PROJECTS: [(&str, &str, &str); 3] = [
    (
        "Bioethanol from Agro-Waste",
        "Pretreatment and fermentation routes for lignocellulosic residues.",
        "/assets/research-bioethanol.jpg",
    ),
    (
        "Enzyme Production",
        "Solid-state fermentation for low-cost industrial enzymes.",
        "/assets/research-enzymes.jpg",
    ),
    (
        "Process Modelling",
        "Neural-network and RSM models for bioprocess optimisation.",
        "/assets/research-modelling.jpg",
    ),
];

#[function_component(ResearchSection)]
pub fn research_section() -> Html {
    let jump_to_publications = Callback::from(|e: MouseEvent| {
        e.prevent_default();
        scroll_to_element("publications");
    });

    html! {
        <div class="research-container">
            <h2 class="section-title">{"Research"}</h2>
            <a href="#publications" class="anchor-link" onclick={jump_to_publications}>{"Jump to publications"}</a>
            <div class="research-grid">
                { for PROJECTS.iter().enumerate().map(|(index, (title, body, image))| html! {
                    <RevealCard kind={CardKind::Research} {index}>
                        <LazyImage src={*image} alt={*title} class={classes!("research-image")} />
                        <h3>{ *title }</h3>
                        <p>{ *body }</p>
                    </RevealCard>
                }) }
            </div>
            <div id="publications" class="content-card-list">
                <RevealCard kind={CardKind::Content}>
                    <h3>{"Selected Publications"}</h3>
                    <p>{"Peer-reviewed work in bioresource technology, fuel and biochemical engineering journals."}</p>
                </RevealCard>
            </div>
        </div>
    }
}
