use yew::prelude::*;
use yew_hooks::prelude::*;

use crate::config::timings;

/// Replays a piece of text one character at a time.
#[derive(Clone, Debug)]
pub struct Typewriter {
    chars: Vec<char>,
    shown: usize,
}

impl Typewriter {
    pub fn new(text: &str) -> Self {
        Self {
            chars: text.chars().collect(),
            shown: 0,
        }
    }

    pub fn visible(&self) -> String {
        self.chars[..self.shown].iter().collect()
    }

    pub fn is_done(&self) -> bool {
        self.shown >= self.chars.len()
    }

    /// First frame, shown the moment typing begins. Only works once.
    pub fn start(&mut self) -> Option<String> {
        if self.shown > 0 {
            return None;
        }
        self.advance()
    }

    /// Shows one more character; `None` once the whole text is out.
    pub fn advance(&mut self) -> Option<String> {
        if self.is_done() {
            return None;
        }
        self.shown += 1;
        Some(self.visible())
    }
}

#[derive(Properties, PartialEq)]
pub struct TypedHeadingProps {
    pub text: AttrValue,
    #[prop_or_default]
    pub class: Classes,
}

#[function_component(TypedHeading)]
pub fn typed_heading(props: &TypedHeadingProps) -> Html {
    let writer = {
        let text = props.text.clone();
        use_mut_ref(move || Typewriter::new(&text))
    };
    let shown = use_state(String::new);
    let typing = use_state(|| false);

    {
        let writer = writer.clone();
        let shown = shown.clone();
        let typing = typing.clone();
        use_timeout(
            move || {
                if let Some(text) = writer.borrow_mut().start() {
                    shown.set(text);
                    typing.set(true);
                }
            },
            timings::TYPING_START_DELAY_MS,
        );
    }

    {
        let shown = shown.clone();
        let typing_handle = typing.clone();
        use_interval(
            move || match writer.borrow_mut().advance() {
                Some(text) => shown.set(text),
                None => typing_handle.set(false),
            },
            if *typing { timings::TYPING_INTERVAL_MS } else { 0 },
        );
    }

    html! {
        <h1 class={classes!("hero-title", props.class.clone())}>{ (*shown).clone() }</h1>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn types_every_character_in_order() {
        let mut writer = Typewriter::new("Hi!");
        assert_eq!(writer.visible(), "");
        assert_eq!(writer.advance().as_deref(), Some("H"));
        assert_eq!(writer.advance().as_deref(), Some("Hi"));
        assert_eq!(writer.advance().as_deref(), Some("Hi!"));
        assert!(writer.is_done());
        assert_eq!(writer.advance(), None);
    }

    #[test]
    fn first_character_shows_when_typing_starts() {
        let mut writer = Typewriter::new("Hi!");
        assert_eq!(writer.start().as_deref(), Some("H"));
        assert_eq!(writer.start(), None);
        assert_eq!(writer.advance().as_deref(), Some("Hi"));
        assert_eq!(writer.advance().as_deref(), Some("Hi!"));
        assert_eq!(writer.advance(), None);
    }

    #[test]
    fn starting_empty_text_never_types() {
        assert_eq!(Typewriter::new("").start(), None);
    }

    #[test]
    fn handles_multibyte_text() {
        let mut writer = Typewriter::new("Prof. Ọ́");
        let mut last = String::new();
        while let Some(text) = writer.advance() {
            last = text;
        }
        assert_eq!(last, "Prof. Ọ́");
    }

    #[test]
    fn empty_text_is_done_immediately() {
        let mut writer = Typewriter::new("");
        assert!(writer.is_done());
        assert_eq!(writer.advance(), None);
    }
}
