use yew::prelude::*;

use crate::animation::observer::{self, ObserverOptions};
use crate::config::layout;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CardKind {
    Feature,
    Service,
    Research,
    Team,
    Content,
}

impl CardKind {
    pub fn class(self) -> &'static str {
        match self {
            CardKind::Feature => "feature-card",
            CardKind::Service => "service-card",
            CardKind::Research => "research-card",
            CardKind::Team => "team-card",
            CardKind::Content => "content-card",
        }
    }

    /// Cascade step between sibling cards, in milliseconds.
    pub fn stagger_ms(self) -> u32 {
        match self {
            CardKind::Service => 100,
            CardKind::Team => 150,
            _ => 0,
        }
    }

    pub fn delay_ms(self, index: usize) -> u32 {
        self.stagger_ms() * index as u32
    }

    fn hover_transforms(self) -> Option<(&'static str, &'static str)> {
        match self {
            CardKind::Feature => Some(("translateY(-12px) scale(1.02)", "translateY(0) scale(1)")),
            CardKind::Service => Some(("translateY(-10px) scale(1.02)", "translateY(-5px) scale(1)")),
            _ => None,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Pointer {
    /// Never hovered since it was revealed.
    Untouched,
    Over,
    Left,
}

/// Inline style for a card given its reveal and hover state.
pub fn card_style(kind: CardKind, index: usize, revealed: bool, pointer: Pointer) -> String {
    let transform = match (revealed, pointer, kind.hover_transforms()) {
        (false, _, _) => "translateY(30px)",
        (true, Pointer::Over, Some((over, _))) => over,
        (true, Pointer::Left, Some((_, rest))) => rest,
        (true, _, _) => "translateY(0)",
    };
    format!(
        "opacity: {}; transform: {}; transition: opacity 0.6s ease, transform 0.6s ease; transition-delay: {}ms;",
        if revealed { 1 } else { 0 },
        transform,
        match pointer {
            Pointer::Untouched => kind.delay_ms(index),
            Pointer::Over | Pointer::Left => 0,
        },
    )
}

#[derive(Properties, PartialEq)]
pub struct RevealCardProps {
    pub kind: CardKind,
    #[prop_or_default]
    pub index: usize,
    #[prop_or_default]
    pub class: Classes,
    #[prop_or_default]
    pub children: Children,
}

/// Card that fades and slides in whenever it enters the viewport. Entering
/// again only re-applies the revealed style.
#[function_component(RevealCard)]
pub fn reveal_card(props: &RevealCardProps) -> Html {
    let node = use_node_ref();
    let revealed = use_state(|| false);
    let pointer = use_state(|| Pointer::Untouched);

    {
        let node = node.clone();
        let revealed = revealed.clone();
        use_effect_with_deps(
            move |_| {
                let guard = observer::watch(
                    node.cast::<web_sys::Element>(),
                    ObserverOptions::default(),
                    move |_, _| revealed.set(true),
                );
                move || drop(guard)
            },
            (),
        );
    }

    let onmouseenter = {
        let pointer = pointer.clone();
        Callback::from(move |_: MouseEvent| pointer.set(Pointer::Over))
    };
    let onmouseleave = {
        let pointer = pointer.clone();
        Callback::from(move |_: MouseEvent| pointer.set(Pointer::Left))
    };

    let style = card_style(props.kind, props.index, *revealed, *pointer);

    html! {
        <div
            ref={node}
            class={classes!(props.kind.class(), props.class.clone())}
            {style}
            {onmouseenter}
            {onmouseleave}
        >
            { for props.children.iter() }
        </div>
    }
}

#[derive(Properties, PartialEq)]
pub struct AnimateInProps {
    #[prop_or_default]
    pub class: Classes,
    #[prop_or_default]
    pub children: Children,
}

/// Adds the `animate-in` class once the block is a fifth visible; the
/// stylesheet owns the actual animation.
#[function_component(AnimateIn)]
pub fn animate_in(props: &AnimateInProps) -> Html {
    let node = use_node_ref();
    let entered = use_state(|| false);

    {
        let node = node.clone();
        let entered = entered.clone();
        use_effect_with_deps(
            move |_| {
                let guard = observer::watch(
                    node.cast::<web_sys::Element>(),
                    ObserverOptions::default().with_threshold(layout::ANIMATE_IN_THRESHOLD),
                    move |_, _| entered.set(true),
                );
                move || drop(guard)
            },
            (),
        );
    }

    html! {
        <div ref={node} class={classes!(props.class.clone(), (*entered).then_some("animate-in"))}>
            { for props.children.iter() }
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hidden_cards_start_below_and_transparent() {
        let style = card_style(CardKind::Research, 0, false, Pointer::Untouched);
        assert!(style.contains("opacity: 0;"));
        assert!(style.contains("transform: translateY(30px);"));
        assert!(style.contains("transition: opacity 0.6s ease, transform 0.6s ease;"));
    }

    #[test]
    fn revealed_cards_settle_in_place() {
        let style = card_style(CardKind::Content, 3, true, Pointer::Untouched);
        assert!(style.contains("opacity: 1;"));
        assert!(style.contains("transform: translateY(0);"));
    }

    #[test]
    fn reveal_is_idempotent() {
        let first = card_style(CardKind::Team, 2, true, Pointer::Untouched);
        let again = card_style(CardKind::Team, 2, true, Pointer::Untouched);
        assert_eq!(first, again);
    }

    #[test]
    fn stagger_depends_on_card_kind() {
        assert_eq!(CardKind::Service.delay_ms(3), 300);
        assert_eq!(CardKind::Team.delay_ms(2), 300);
        assert_eq!(CardKind::Research.delay_ms(5), 0);
        assert!(card_style(CardKind::Team, 1, true, Pointer::Untouched).contains("transition-delay: 150ms;"));
    }

    #[test]
    fn hover_lifts_only_interactive_cards() {
        assert!(card_style(CardKind::Feature, 0, true, Pointer::Over).contains("translateY(-12px) scale(1.02)"));
        assert!(card_style(CardKind::Feature, 0, true, Pointer::Left).contains("translateY(0) scale(1)"));
        assert!(card_style(CardKind::Service, 0, true, Pointer::Left).contains("translateY(-5px) scale(1)"));
        assert!(card_style(CardKind::Team, 0, true, Pointer::Over).contains("transform: translateY(0);"));
    }

    #[test]
    fn hover_responds_without_stagger_delay() {
        assert!(card_style(CardKind::Service, 3, true, Pointer::Untouched).contains("transition-delay: 300ms;"));
        assert!(card_style(CardKind::Service, 3, true, Pointer::Over).contains("transition-delay: 0ms;"));
        assert!(card_style(CardKind::Team, 3, true, Pointer::Left).contains("transition-delay: 0ms;"));
    }

    #[test]
    fn hover_does_not_reveal_hidden_card() {
        let style = card_style(CardKind::Service, 0, false, Pointer::Over);
        assert!(style.contains("translateY(30px)"));
    }
}
