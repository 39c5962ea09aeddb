use std::cell::RefCell;
use std::rc::Rc;

use yew::prelude::*;
use yew_hooks::prelude::*;

use crate::animation::observer::{self, ObserverOptions};
use crate::config::timings;

/// Numeric value shown by a `.stat-number` element, e.g. `"500+"` or `"98%"`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CounterTarget {
    pub value: u64,
    pub suffix: String,
}

impl CounterTarget {
    /// Reads the leading integer and keeps any `+` / `%` markers found in the
    /// text. Text without a leading integer has nothing to count up to.
    pub fn parse(text: &str) -> Option<Self> {
        let trimmed = text.trim_start();
        let digits: String = trimmed.chars().take_while(|c| c.is_ascii_digit()).collect();
        let value = digits.parse().ok()?;

        let mut suffix = String::new();
        if text.contains('+') {
            suffix.push('+');
        }
        if text.contains('%') {
            suffix.push('%');
        }
        Some(Self { value, suffix })
    }

    pub fn render(&self, shown: u64) -> String {
        format!("{}{}", shown, self.suffix)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CounterPhase {
    Idle,
    Running,
    Completed,
}

#[derive(Clone, Debug, PartialEq)]
pub struct CounterFrame {
    pub text: String,
    pub finished: bool,
}

/// Ramp from zero to the target in a fixed number of equal steps.
#[derive(Clone, Debug)]
pub struct CounterAnimation {
    target: CounterTarget,
    increment: f64,
    current: f64,
    phase: CounterPhase,
}

impl CounterAnimation {
    pub fn new(target: CounterTarget, steps: u32) -> Self {
        let increment = target.value as f64 / steps.max(1) as f64;
        Self {
            target,
            increment,
            current: 0.0,
            phase: CounterPhase::Idle,
        }
    }

    /// Only an idle counter can start; later triggers are ignored.
    pub fn start(&mut self) -> bool {
        if self.phase != CounterPhase::Idle {
            return false;
        }
        self.phase = CounterPhase::Running;
        true
    }

    pub fn tick(&mut self) -> Option<CounterFrame> {
        if self.phase != CounterPhase::Running {
            return None;
        }
        self.current += self.increment;
        let target = self.target.value as f64;
        if self.current >= target {
            self.phase = CounterPhase::Completed;
            return Some(CounterFrame {
                text: self.target.render(self.target.value),
                finished: true,
            });
        }
        Some(CounterFrame {
            text: self.target.render(self.current.floor() as u64),
            finished: false,
        })
    }
}

#[derive(Properties, PartialEq)]
pub struct StatCounterProps {
    pub value: AttrValue,
    pub label: AttrValue,
}

#[function_component(StatCounter)]
pub fn stat_counter(props: &StatCounterProps) -> Html {
    let node = use_node_ref();
    let display = use_state(|| props.value.to_string());
    let running = use_state(|| false);
    let animation = {
        let value = props.value.clone();
        use_mut_ref(move || {
            CounterTarget::parse(&value).map(|t| CounterAnimation::new(t, timings::COUNTER_STEPS))
        })
    };

    {
        let node = node.clone();
        let animation = animation.clone();
        let running = running.clone();
        use_effect_with_deps(
            move |_| {
                let guard = observer::watch(
                    node.cast::<web_sys::Element>(),
                    ObserverOptions::default(),
                    move |element, observer| {
                        observer.unobserve(&element);
                        if start_counter(&animation) {
                            running.set(true);
                        }
                    },
                );
                move || drop(guard)
            },
            (),
        );
    }

    {
        let animation = animation.clone();
        let display = display.clone();
        let running_handle = running.clone();
        use_interval(
            move || {
                let frame = animation.borrow_mut().as_mut().and_then(|a| a.tick());
                match frame {
                    Some(frame) => {
                        display.set(frame.text);
                        if frame.finished {
                            running_handle.set(false);
                        }
                    }
                    None => running_handle.set(false),
                }
            },
            if *running { timings::COUNTER_INTERVAL_MS } else { 0 },
        );
    }

    html! {
        <div class="stat-item">
            <div class="stat-number" ref={node}>{ (*display).clone() }</div>
            <div class="stat-label">{ props.label.clone() }</div>
        </div>
    }
}

fn start_counter(animation: &Rc<RefCell<Option<CounterAnimation>>>) -> bool {
    animation.borrow_mut().as_mut().map_or(false, |a| a.start())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn run(text: &str, steps: u32) -> Vec<String> {
        let target = CounterTarget::parse(text).unwrap();
        let mut animation = CounterAnimation::new(target, steps);
        assert!(animation.start());
        let mut frames = Vec::new();
        while let Some(frame) = animation.tick() {
            frames.push(frame.text);
            assert!(frames.len() <= steps as usize + 1, "counter never finished");
        }
        frames
    }

    fn numeric(frame: &str) -> u64 {
        frame.trim_end_matches(['+', '%']).parse().unwrap()
    }

    #[test]
    fn parses_suffixes() {
        assert_eq!(
            CounterTarget::parse("500+"),
            Some(CounterTarget { value: 500, suffix: "+".into() })
        );
        assert_eq!(
            CounterTarget::parse("98%"),
            Some(CounterTarget { value: 98, suffix: "%".into() })
        );
        assert_eq!(
            CounterTarget::parse("15"),
            Some(CounterTarget { value: 15, suffix: String::new() })
        );
        assert_eq!(CounterTarget::parse("many"), None);
    }

    #[test]
    fn sequence_is_non_decreasing_and_ends_exactly_on_target() {
        for (text, expected) in [("500+", "500+"), ("98%", "98%"), ("37", "37"), ("1", "1")] {
            let frames = run(text, 100);
            assert_eq!(frames.last().map(String::as_str), Some(expected));
            let values: Vec<u64> = frames.iter().map(|f| numeric(f)).collect();
            assert!(values.windows(2).all(|w| w[0] <= w[1]), "{:?}", values);
            let suffix = CounterTarget::parse(text).unwrap().suffix;
            assert!(frames.iter().all(|f| f.ends_with(&suffix)));
        }
    }

    #[test]
    fn no_frames_after_completion() {
        let mut animation = CounterAnimation::new(CounterTarget::parse("25+").unwrap(), 50);
        animation.start();
        while animation.tick().is_some() {}
        assert_eq!(animation.phase, CounterPhase::Completed);
        assert_eq!(animation.tick(), None);
    }

    #[test]
    fn counter_fires_once() {
        let mut animation = CounterAnimation::new(CounterTarget::parse("10").unwrap(), 10);
        assert!(animation.start());
        assert!(!animation.start());
        while animation.tick().is_some() {}
        assert!(!animation.start());
        assert_eq!(animation.tick(), None);
    }

    #[test]
    fn idle_counter_does_not_tick() {
        let mut animation = CounterAnimation::new(CounterTarget::parse("10").unwrap(), 10);
        assert_eq!(animation.tick(), None);
        assert_eq!(animation.phase, CounterPhase::Idle);
    }

    #[test]
    fn zero_target_finishes_on_first_tick() {
        let frames = run("0+", 100);
        assert_eq!(frames, vec!["0+".to_string()]);
    }
}
