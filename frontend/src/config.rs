use std::rc::Rc;

use crate::consultation::client::{
    ConsultationClient, HttpConsultationClient, SimulatedConsultationClient,
};

#[cfg(debug_assertions)]
pub fn get_backend_url() -> &'static str {
    "http://localhost:3001"  // Development URL when running locally
}

#[cfg(not(debug_assertions))]
pub fn get_backend_url() -> &'static str {
    ""  // Production URL
}

pub fn consultation_endpoint() -> String {
    format!("{}/api/consultations", get_backend_url())
}

/// Local builds never hit the network; the simulated client resolves after
/// the same delay the static site used.
#[cfg(debug_assertions)]
pub fn consultation_client() -> Rc<dyn ConsultationClient> {
    Rc::new(SimulatedConsultationClient::new(timings::SIMULATED_SUBMIT_MS))
}

#[cfg(not(debug_assertions))]
pub fn consultation_client() -> Rc<dyn ConsultationClient> {
    Rc::new(HttpConsultationClient::new(consultation_endpoint()))
}

pub mod timings {
    pub const SECTION_REVEAL_DELAY_MS: u32 = 50;
    pub const BODY_FADE_IN_MS: u32 = 100;
    pub const MODAL_FOCUS_DELAY_MS: u32 = 300;

    pub const COUNTER_STEPS: u32 = 100;
    pub const COUNTER_INTERVAL_MS: u32 = 20;

    pub const TYPING_START_DELAY_MS: u32 = 500;
    pub const TYPING_INTERVAL_MS: u32 = 50;

    pub const SIMULATED_SUBMIT_MS: u32 = 2_000;

    pub const NOTIFICATION_ENTER_MS: u32 = 100;
    pub const NOTIFICATION_VISIBLE_MS: u32 = 5_000;
    pub const NOTIFICATION_EXIT_MS: u32 = 300;
}

pub mod layout {
    pub const HEADER_SCROLLED_THRESHOLD: f64 = 50.0;
    pub const HEADER_HIDE_AFTER: f64 = 200.0;
    pub const ANCHOR_HEADER_OFFSET: f64 = 80.0;

    pub const REVEAL_THRESHOLD: f64 = 0.1;
    pub const ANIMATE_IN_THRESHOLD: f64 = 0.2;
    pub const VIEWPORT_BOTTOM_SHRINK_PX: u32 = 50;
}
