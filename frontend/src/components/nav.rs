use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::MouseEvent;
use yew::prelude::*;
use yew_hooks::prelude::*;

use crate::navigation::{Drawer, HeaderState, HeaderTracker, SectionId};

#[derive(Properties, PartialEq)]
pub struct SiteHeaderProps {
    pub sections: Vec<SectionId>,
    pub active: Option<SectionId>,
    pub drawer: Drawer,
    pub on_navigate: Callback<SectionId>,
    pub on_toggle_drawer: Callback<()>,
    pub on_close_drawer: Callback<()>,
    #[prop_or_default]
    pub hide_on_scroll_down: bool,
}

#[function_component(SiteHeader)]
pub fn site_header(props: &SiteHeaderProps) -> Html {
    let header_state = use_state(HeaderState::default);
    let container = use_node_ref();

    {
        let header_state = header_state.clone();
        let hide_on_scroll_down = props.hide_on_scroll_down;
        use_effect_with_deps(move |_| {
            let window = web_sys::window();
            let listener = window.clone().map(|window| {
                let window_clone = window.clone();
                let start_y = window.scroll_y().unwrap_or(0.0);
                let mut tracker = HeaderTracker::new(start_y);
                if hide_on_scroll_down {
                    tracker = tracker.hiding_on_scroll_down();
                }

                let mut last = HeaderState::default();

                let scroll_callback = Closure::wrap(Box::new(move || {
                    let y = window_clone.scroll_y().unwrap_or(0.0);
                    let next = tracker.observe(y);
                    if next != last {
                        last = next;
                        header_state.set(next);
                    }
                }) as Box<dyn FnMut()>);

                if let Err(e) = window.add_event_listener_with_callback(
                    "scroll",
                    scroll_callback.as_ref().unchecked_ref(),
                ) {
                    log::warn!("header scroll listener not attached: {:?}", e);
                }
                scroll_callback
            });

            move || {
                if let (Some(window), Some(scroll_callback)) = (window, listener) {
                    let _ = window.remove_event_listener_with_callback(
                        "scroll",
                        scroll_callback.as_ref().unchecked_ref(),
                    );
                }
            }
        }, ());
    }

    {
        let on_close_drawer = props.on_close_drawer.clone();
        use_click_away(container.clone(), move |_: Event| {
            on_close_drawer.emit(());
        });
    }

    let toggle_menu = {
        let on_toggle = props.on_toggle_drawer.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            on_toggle.emit(());
        })
    };

    let header_style = if header_state.hidden {
        "transform: translateY(-100%);"
    } else {
        "transform: translateY(0);"
    };

    html! {
        <header id="header" class={classes!("header", header_state.scrolled.then_some("scrolled"))} style={header_style}>
            <div class="nav-container" ref={container}>
                <a href="#home" class="nav-logo" onclick={
                    let on_navigate = props.on_navigate.clone();
                    Callback::from(move |e: MouseEvent| {
                        e.prevent_default();
                        on_navigate.emit(SectionId::Home);
                    })
                }>
                    {"ProcessLab Consulting"}
                </a>

                <button id="mobileMenuBtn" class="mobile-menu-btn" aria-label="Toggle navigation" onclick={toggle_menu}>
                    <span id="menuIcon">{ props.drawer.glyph() }</span>
                </button>

                <nav id="navMenu" class={classes!("nav-menu", props.drawer.is_open().then_some("active"))}>
                    { for props.sections.iter().map(|id| {
                        let id = *id;
                        let on_navigate = props.on_navigate.clone();
                        let onclick = Callback::from(move |e: MouseEvent| {
                            e.prevent_default();
                            on_navigate.emit(id);
                        });
                        html! {
                            <a
                                href={format!("#{}", id.as_attr())}
                                class={classes!("nav-link", (props.active == Some(id)).then_some("active"))}
                                data-section={id.as_attr()}
                                {onclick}
                            >
                                { id.label() }
                            </a>
                        }
                    }) }
                </nav>
            </div>
        </header>
    }
}
