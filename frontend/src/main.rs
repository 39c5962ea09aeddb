use std::rc::Rc;

use chrono::Datelike;
use gloo_timers::callback::Timeout;
use log::{info, Level};
use web_sys::KeyboardEvent;
use yew::prelude::*;
use yew_hooks::prelude::*;

mod analytics;
mod config;
mod navigation;
mod animation {
    pub mod counter;
    pub mod observer;
    pub mod parallax;
    pub mod reveal;
    pub mod typing;
}
mod components {
    pub mod lazy_image;
    pub mod nav;
    pub mod notification;
    pub mod section;
}
mod consultation {
    pub mod client;
    pub mod form;
    pub mod modal;
    pub mod validation;
}
mod sections {
    pub mod contact;
    pub mod home;
    pub mod research;
    pub mod services;
    pub mod team;
}

use analytics::{Analytics, AnalyticsEvent, GlobalTagSink};
use components::nav::SiteHeader;
use components::notification::NotificationCenter;
use components::section::PageSection;
use consultation::client::ConsultationService;
use consultation::modal::{ConsultationModal, ConsultationTopic};
use navigation::{scroll_to_top, OverlayKey, RouterAction, SectionId, SiteActions, ViewRouter};
use sections::{
    contact::ContactSection, home::HomeSection, research::ResearchSection,
    services::ServicesSection, team::TeamSection,
};

fn section_body(id: SectionId) -> Html {
    match id {
        SectionId::Home => html! { <HomeSection /> },
        SectionId::Services => html! { <ServicesSection /> },
        SectionId::Research => html! { <ResearchSection /> },
        SectionId::Team => html! { <TeamSection /> },
        SectionId::Contact => html! { <ContactSection /> },
    }
}

#[function_component]
fn App() -> Html {
    let router = use_reducer(ViewRouter::default);
    let modal_topic = use_state_eq(|| None::<ConsultationTopic>);
    let analytics = use_memo(|_| Analytics::new(Rc::new(GlobalTagSink)), ());
    let service = use_memo(|_| ConsultationService::new(config::consultation_client()), ());

    // Fade the page in once the first render is on screen
    use_effect_with_deps(
        move |_| {
            Timeout::new(config::timings::BODY_FADE_IN_MS, || {
                let body = web_sys::window()
                    .and_then(|w| w.document())
                    .and_then(|d| d.body());
                if let Some(body) = body {
                    let _ = body.style().set_property("opacity", "1");
                }
            })
            .forget();
            || ()
        },
        (),
    );

    {
        let router = router.dispatcher();
        let modal_topic = modal_topic.clone();
        use_event_with_window("keydown", move |e: KeyboardEvent| {
            if let Some(key) = OverlayKey::from_key(&e.key()) {
                router.dispatch(key.router_action());
                modal_topic.set(key.next_modal(*modal_topic));
            }
        });
    }

    let navigate = {
        let router = router.dispatcher();
        Callback::from(move |target: SectionId| {
            info!("Showing section {}", target.as_attr());
            router.dispatch(RouterAction::Navigate(target));
            let router = router.clone();
            Timeout::new(config::timings::SECTION_REVEAL_DELAY_MS, move || {
                router.dispatch(RouterAction::Reveal(target));
            })
            .forget();
            scroll_to_top();
        })
    };

    let navigate_attr = {
        let navigate = navigate.clone();
        Callback::from(move |value: String| {
            if let Some(target) = SectionId::from_attr(&value) {
                navigate.emit(target);
            }
        })
    };

    let open_consultation = {
        let modal_topic = modal_topic.clone();
        let analytics = (*analytics).clone();
        let location = router.visible().unwrap_or(SectionId::Home).as_attr();
        Callback::from(move |(topic, button_text): (ConsultationTopic, String)| {
            analytics.track(AnalyticsEvent::button_click(&button_text, location));
            modal_topic.set(Some(topic));
        })
    };

    let close_consultation = {
        let modal_topic = modal_topic.clone();
        Callback::from(move |_: ()| modal_topic.set(None))
    };

    let on_toggle_drawer = {
        let router = router.dispatcher();
        Callback::from(move |_: ()| router.dispatch(RouterAction::ToggleDrawer))
    };
    let on_close_drawer = {
        let router = router.dispatcher();
        Callback::from(move |_: ()| router.dispatch(RouterAction::CloseDrawer))
    };

    let actions = SiteActions {
        navigate_attr,
        open_consultation,
    };

    let year = chrono::Utc::now().year();

    html! {
        <ContextProvider<Analytics> context={(*analytics).clone()}>
            <NotificationCenter>
                <ContextProvider<SiteActions> context={actions}>
                    <style>{ SITE_CSS }</style>
                    <SiteHeader
                        sections={router.sections().to_vec()}
                        active={SectionId::ALL.into_iter().find(|id| router.is_link_active(*id))}
                        drawer={router.drawer()}
                        on_navigate={navigate}
                        {on_toggle_drawer}
                        {on_close_drawer}
                    />
                    <main class="site-main">
                        { for router.sections().iter().map(|id| html! {
                            <PageSection key={id.as_attr()} id={*id} visible={router.is_visible(*id)}>
                                { section_body(*id) }
                            </PageSection>
                        }) }
                    </main>
                    <footer class="site-footer">
                        { format!("© {} ProcessLab Consulting", year) }
                    </footer>
                    <ConsultationModal
                        topic={*modal_topic}
                        service={(*service).clone()}
                        on_close={close_consultation}
                    />
                </ContextProvider<SiteActions>>
            </NotificationCenter>
        </ContextProvider<Analytics>>
    }
}

const SITE_CSS: &str = r#"
body {
    margin: 0;
    opacity: 0;
    transition: opacity 0.4s ease;
    font-family: -apple-system, BlinkMacSystemFont, "Segoe UI", Roboto, Helvetica, Arial, sans-serif;
    background: #0f172a;
    color: #e2e8f0;
}
.header {
    position: fixed;
    top: 0;
    left: 0;
    right: 0;
    z-index: 1000;
    background: rgba(15, 23, 42, 0.95);
    backdrop-filter: blur(20px);
    transition: background 0.3s ease, box-shadow 0.3s ease, transform 0.3s ease;
}
.header.scrolled {
    background: rgba(15, 23, 42, 0.98);
    box-shadow: 0 4px 20px rgba(0, 0, 0, 0.3);
}
.nav-container {
    max-width: 1200px;
    margin: 0 auto;
    padding: 1rem 2rem;
    display: flex;
    align-items: center;
    justify-content: space-between;
}
.nav-logo {
    color: #fff;
    font-weight: 700;
    text-decoration: none;
}
.nav-menu {
    display: flex;
    gap: 1.5rem;
}
.nav-link {
    color: #94a3b8;
    text-decoration: none;
}
.nav-link.active {
    color: #fff;
    border-bottom: 2px solid #2563eb;
}
.mobile-menu-btn {
    display: none;
    background: none;
    border: none;
    color: #fff;
    font-size: 1.5rem;
}
.site-main {
    padding-top: 80px;
}
.section {
    display: none;
    min-height: 100vh;
    padding: 4rem 2rem;
}
.section.active {
    display: block;
    animation: sectionIn 0.5s ease;
}
@keyframes sectionIn {
    from { opacity: 0; transform: translateY(20px); }
    to { opacity: 1; transform: translateY(0); }
}
.hero {
    position: relative;
    overflow: hidden;
    padding: 6rem 0;
}
.floating-elements .element {
    position: absolute;
    width: 80px;
    height: 80px;
    border-radius: 20px;
    background: rgba(37, 99, 235, 0.15);
}
.element-1 { top: 10%; left: 5%; }
.element-2 { top: 30%; right: 10%; }
.element-3 { bottom: 20%; left: 20%; }
.element-4 { bottom: 10%; right: 25%; }
.stats-section, .feature-grid, .services-grid, .research-grid, .team-grid {
    display: grid;
    grid-template-columns: repeat(auto-fit, minmax(220px, 1fr));
    gap: 1.5rem;
    margin: 3rem 0;
}
.stat-number {
    font-size: 2.5rem;
    font-weight: 700;
    color: #60a5fa;
}
.feature-card, .service-card, .research-card, .team-card, .content-card {
    background: rgba(30, 41, 59, 0.8);
    border-radius: 16px;
    padding: 1.5rem;
}
.lazy {
    filter: blur(8px);
}
.about-text-content, .detail-item {
    opacity: 0;
    transform: translateY(20px);
    transition: opacity 0.6s ease, transform 0.6s ease;
}
.hero-content, .stats-section {
    opacity: 0;
    transform: translateY(30px);
    transition: opacity 0.6s ease, transform 0.6s ease;
}
.animate-in {
    opacity: 1;
    transform: translateY(0);
}
.btn-primary, .btn-secondary {
    display: inline-block;
    padding: 0.75rem 1.5rem;
    border-radius: 10px;
    border: none;
    cursor: pointer;
    text-decoration: none;
}
.btn-primary {
    background: #2563eb;
    color: #fff;
}
.btn-primary:disabled {
    opacity: 0.7;
    cursor: wait;
}
.btn-secondary {
    background: transparent;
    color: #fff;
    border: 1px solid #2563eb;
}
.modal {
    position: fixed;
    inset: 0;
    z-index: 2000;
    background: rgba(0, 0, 0, 0.6);
    overflow-y: auto;
}
.modal-content {
    background: #1e293b;
    max-width: 560px;
    margin: 5vh auto;
    padding: 2rem;
    border-radius: 16px;
    position: relative;
}
.modal-close {
    position: absolute;
    top: 1rem;
    right: 1rem;
    background: none;
    border: none;
    color: #fff;
    font-size: 1.5rem;
}
.form-group {
    display: flex;
    flex-direction: column;
    margin-bottom: 1rem;
}
.form-group input, .form-group select, .form-group textarea {
    padding: 0.75rem;
    border-radius: 8px;
    border: 1px solid #334155;
    background: #0f172a;
    color: #e2e8f0;
}
.form-group input.error,
.form-group select.error,
.form-group textarea.error {
    border-color: #ef4444;
    box-shadow: 0 0 0 3px rgba(239, 68, 68, 0.1);
}
.notification-content {
    display: flex;
    align-items: center;
    gap: 0.5rem;
}
.site-footer {
    text-align: center;
    padding: 2rem;
    color: #64748b;
}
@media (max-width: 768px) {
    .mobile-menu-btn {
        display: block;
    }
    .nav-menu {
        display: none;
        position: absolute;
        top: 100%;
        left: 0;
        right: 0;
        flex-direction: column;
        padding: 1rem 2rem;
        background: rgba(15, 23, 42, 0.98);
    }
    .nav-menu.active {
        display: flex;
    }
}
"#;

fn main() {
    // Initialize console error panic hook for better error messages
    console_error_panic_hook::set_once();

    // Initialize logging
    console_log::init_with_level(Level::Info).expect("error initializing log");

    info!("Starting application");
    yew::Renderer::<App>::new().render();
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rule_start(selector: &str) -> usize {
        SITE_CSS
            .find(&format!("{} {{", selector))
            .or_else(|| SITE_CSS.find(&format!("{},", selector)))
            .unwrap_or_else(|| panic!("no rule for {}", selector))
    }

    #[test]
    fn hero_and_stats_start_hidden_until_animated_in() {
        let start = rule_start(".hero-content");
        let block = &SITE_CSS[start..start + SITE_CSS[start..].find('}').unwrap()];
        assert!(block.contains(".stats-section"));
        assert!(block.contains("opacity: 0;"));
        assert!(block.contains("transform: translateY(30px);"));
        assert!(block.contains("transition: opacity 0.6s ease, transform 0.6s ease;"));
    }

    #[test]
    fn animate_in_overrides_initial_state() {
        assert!(rule_start(".animate-in") > rule_start(".hero-content"));
        assert!(rule_start(".animate-in") > rule_start(".about-text-content"));
    }
}
