use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use yew::prelude::*;

pub fn layer_speed(index: usize) -> f64 {
    0.5 + index as f64 * 0.1
}

pub fn layer_transform(scroll_y: f64, index: usize) -> String {
    format!(
        "translateY({}px) rotate({}deg)",
        scroll_y * layer_speed(index),
        scroll_y * 0.1
    )
}

#[derive(Properties, PartialEq)]
pub struct FloatingElementsProps {
    pub layers: usize,
}

/// Decorative hero shapes that drift with the page scroll.
#[function_component(FloatingElements)]
pub fn floating_elements(props: &FloatingElementsProps) -> Html {
    let scroll_y = use_state(|| 0.0_f64);

    {
        let scroll_y = scroll_y.clone();
        use_effect_with_deps(
            move |_| {
                let window = web_sys::window();
                let listener = window.clone().map(|window| {
                    let window_clone = window.clone();
                    let scroll_callback = Closure::wrap(Box::new(move || {
                        scroll_y.set(window_clone.page_y_offset().unwrap_or(0.0));
                    }) as Box<dyn FnMut()>);
                    if let Err(e) = window.add_event_listener_with_callback(
                        "scroll",
                        scroll_callback.as_ref().unchecked_ref(),
                    ) {
                        log::warn!("parallax scroll listener not attached: {:?}", e);
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
            },
            (),
        );
    }

    html! {
        <div class="floating-elements" aria-hidden="true">
            { for (0..props.layers).map(|index| html! {
                <div
                    key={index}
                    class={classes!("element", format!("element-{}", index + 1))}
                    style={format!("transform: {};", layer_transform(*scroll_y, index))}
                ></div>
            }) }
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn deeper_layers_move_faster() {
        assert_eq!(layer_speed(0), 0.5);
        assert!((layer_speed(3) - 0.8).abs() < 1e-9);
    }

    #[test]
    fn transform_at_top_is_neutral() {
        assert_eq!(layer_transform(0.0, 2), "translateY(0px) rotate(0deg)");
    }

    #[test]
    fn transform_follows_offset() {
        assert_eq!(layer_transform(100.0, 0), "translateY(50px) rotate(10deg)");
    }
}
