use yew::prelude::*;

use crate::animation::reveal::{CardKind, RevealCard};
use crate::components::lazy_image::LazyImage;

const MEMBERS: [(&str, &str, &str); 4] = [
    ("Principal Investigator", "Process optimisation and bioprocess design", "/assets/team-pi.jpg"),
    ("Research Fellow", "Fermentation technology", "/assets/team-fellow.jpg"),
    ("Process Engineer", "Pilot plant and scale-up", "/assets/team-engineer.jpg"),
    ("Data Scientist", "Modelling and machine learning", "/assets/team-data.jpg"),
];

#[function_component(TeamSection)]
pub fn team_section() -> Html {
    html! {
        <div class="team-container">
            <h2 class="section-title">{"Team"}</h2>
            <div class="team-grid">
                { for MEMBERS.iter().enumerate().map(|(index, (role, focus, photo))| html! {
                    <RevealCard kind={CardKind::Team} {index}>
                        <LazyImage src={*photo} alt={*role} class={classes!("team-photo")} />
                        <h3>{ *role }</h3>
                        <p>{ *focus }</p>
                    </RevealCard>
                }) }
            </div>
        </div>
    }
}
