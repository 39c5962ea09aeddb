use yew::prelude::*;

use crate::animation::observer::{self, ObserverOptions};

#[derive(Properties, PartialEq)]
pub struct LazyImageProps {
    pub src: AttrValue,
    pub alt: AttrValue,
    #[prop_or_default]
    pub class: Classes,
}

/// Image that only gets its real `src` once it scrolls into view.
#[function_component(LazyImage)]
pub fn lazy_image(props: &LazyImageProps) -> Html {
    let node = use_node_ref();
    let loaded = use_state(|| false);

    {
        let node = node.clone();
        let loaded = loaded.clone();
        use_effect_with_deps(
            move |_| {
                let guard = observer::watch(
                    node.cast::<web_sys::Element>(),
                    ObserverOptions::any_visibility(),
                    move |element, observer| {
                        observer.unobserve(&element);
                        loaded.set(true);
                    },
                );
                move || drop(guard)
            },
            (),
        );
    }

    let src = (*loaded).then(|| props.src.clone());

    html! {
        <img
            ref={node}
            class={classes!(props.class.clone(), (!*loaded).then_some("lazy"))}
            data-src={props.src.clone()}
            {src}
            alt={props.alt.clone()}
        />
    }
}
