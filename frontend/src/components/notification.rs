use std::rc::Rc;

use gloo_timers::callback::Timeout;
use yew::prelude::*;

use crate::config::timings;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NoticeKind {
    Success,
    Error,
}

impl NoticeKind {
    fn class(self) -> &'static str {
        match self {
            NoticeKind::Success => "notification-success",
            NoticeKind::Error => "notification-error",
        }
    }

    fn background(self) -> &'static str {
        match self {
            NoticeKind::Success => "#10b981",
            NoticeKind::Error => "#ef4444",
        }
    }

    fn icon(self) -> &'static str {
        match self {
            NoticeKind::Success => "fa-check-circle",
            NoticeKind::Error => "fa-exclamation-circle",
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct Notice {
    pub kind: NoticeKind,
    pub message: String,
}

impl Notice {
    pub fn new(kind: NoticeKind, message: impl Into<String>) -> Self {
        Self { kind, message: message.into() }
    }
}

/// Where a banner is in its slide-in / slide-out cycle.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum BannerPhase {
    Entering,
    Shown,
    Leaving,
}

impl BannerPhase {
    pub fn transform(self) -> &'static str {
        match self {
            BannerPhase::Shown => "translateX(0)",
            BannerPhase::Entering | BannerPhase::Leaving => "translateX(400px)",
        }
    }
}

/// Milliseconds after creation at which each phase change happens:
/// (shown, leaving, removed).
pub fn banner_schedule() -> (u32, u32, u32) {
    (
        timings::NOTIFICATION_ENTER_MS,
        timings::NOTIFICATION_VISIBLE_MS,
        timings::NOTIFICATION_VISIBLE_MS + timings::NOTIFICATION_EXIT_MS,
    )
}

#[derive(Clone, Debug, PartialEq)]
struct Queued {
    id: u32,
    notice: Notice,
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct NoticeQueue {
    next_id: u32,
    items: Vec<Queued>,
}

pub enum QueueAction {
    Push(Notice),
    Remove(u32),
}

impl Reducible for NoticeQueue {
    type Action = QueueAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let mut next = (*self).clone();
        match action {
            QueueAction::Push(notice) => {
                next.items.push(Queued { id: next.next_id, notice });
                next.next_id += 1;
            }
            QueueAction::Remove(id) => next.items.retain(|q| q.id != id),
        }
        Rc::new(next)
    }
}

/// Handle for raising banners from anywhere below `NotificationCenter`.
#[derive(Clone, PartialEq)]
pub struct Notifier {
    push: Callback<Notice>,
}

impl Notifier {
    pub fn notify(&self, notice: Notice) {
        self.push.emit(notice);
    }
}

#[derive(Properties, PartialEq)]
pub struct NotificationCenterProps {
    #[prop_or_default]
    pub children: Children,
}

#[function_component(NotificationCenter)]
pub fn notification_center(props: &NotificationCenterProps) -> Html {
    let queue = use_reducer(NoticeQueue::default);

    let notifier = {
        let queue = queue.dispatcher();
        Notifier {
            push: Callback::from(move |notice| queue.dispatch(QueueAction::Push(notice))),
        }
    };
    let on_done = {
        let queue = queue.dispatcher();
        Callback::from(move |id| queue.dispatch(QueueAction::Remove(id)))
    };

    html! {
        <ContextProvider<Notifier> context={notifier}>
            { for props.children.iter() }
            { for queue.items.iter().map(|q| html! {
                <Banner key={q.id} id={q.id} notice={q.notice.clone()} on_done={on_done.clone()} />
            }) }
        </ContextProvider<Notifier>>
    }
}

#[derive(Properties, PartialEq)]
struct BannerProps {
    id: u32,
    notice: Notice,
    on_done: Callback<u32>,
}

#[function_component(Banner)]
fn banner(props: &BannerProps) -> Html {
    let phase = use_state(|| BannerPhase::Entering);

    {
        let phase = phase.clone();
        let on_done = props.on_done.clone();
        let id = props.id;
        use_effect_with_deps(
            move |_| {
                let (shown_at, leave_at, remove_at) = banner_schedule();
                let shown = {
                    let phase = phase.clone();
                    Timeout::new(shown_at, move || phase.set(BannerPhase::Shown))
                };
                let leaving = Timeout::new(leave_at, move || phase.set(BannerPhase::Leaving));
                let removed = Timeout::new(remove_at, move || on_done.emit(id));
                move || {
                    drop(shown);
                    drop(leaving);
                    drop(removed);
                }
            },
            (),
        );
    }

    let kind = props.notice.kind;
    let style = format!(
        "position: fixed; top: 20px; right: 20px; background: {}; color: white; \
         padding: 1rem 1.5rem; border-radius: 12px; box-shadow: 0 10px 15px -3px rgba(0, 0, 0, 0.1); \
         z-index: 9999; transform: {}; transition: transform 0.3s ease; max-width: 400px;",
        kind.background(),
        phase.transform(),
    );

    html! {
        <div class={classes!("notification", kind.class())} {style} role="status">
            <div class="notification-content">
                <i class={classes!("fas", kind.icon())}></i>
                <span>{ props.notice.message.clone() }</span>
            </div>
        </div>
    }
}
