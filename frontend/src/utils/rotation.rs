use std::rc::Rc;

use gloo_timers::callback::Interval;
use yew::prelude::*;

/// Which entry of a rotating list (testimonials, quotes) is currently shown.
#[derive(Clone, Debug, PartialEq)]
pub struct Rotation {
    pub index: usize,
    pub len: usize,
    /// Bumped on manual navigation so the auto-advance timer starts over.
    pub generation: u32,
}

pub enum RotationAction {
    /// Timer tick.
    Advance,
    Next,
    Prev,
    GoTo(usize),
    Resize(usize),
}

impl Rotation {
    pub fn new(len: usize) -> Self {
        Self {
            index: 0,
            len,
            generation: 0,
        }
    }
}

pub fn next_index(current: usize, len: usize) -> usize {
    if len == 0 {
        0
    } else {
        (current + 1) % len
    }
}

pub fn prev_index(current: usize, len: usize) -> usize {
    if len == 0 {
        0
    } else if current == 0 || current >= len {
        len - 1
    } else {
        current - 1
    }
}

impl Reducible for Rotation {
    type Action = RotationAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let (index, len, generation) = match action {
            RotationAction::Advance => (next_index(self.index, self.len), self.len, self.generation),
            RotationAction::Next => (
                next_index(self.index, self.len),
                self.len,
                self.generation.wrapping_add(1),
            ),
            RotationAction::Prev => (
                prev_index(self.index, self.len),
                self.len,
                self.generation.wrapping_add(1),
            ),
            RotationAction::GoTo(target) => (
                target.min(self.len.saturating_sub(1)),
                self.len,
                self.generation.wrapping_add(1),
            ),
            RotationAction::Resize(len) => {
                if len == self.len {
                    return self;
                }
                (self.index.min(len.saturating_sub(1)), len, self.generation)
            }
        };
        Rc::new(Rotation {
            index,
            len,
            generation,
        })
    }
}

#[derive(Clone, PartialEq)]
pub struct RotationHandle {
    pub index: usize,
    pub len: usize,
    pub next: Callback<()>,
    pub prev: Callback<()>,
    pub go_to: Callback<usize>,
    /// `true` pauses auto-advance (pointer hovering), `false` resumes it.
    pub set_paused: Callback<bool>,
}

/// Cycles through `len` entries, advancing every `period_ms` milliseconds.
/// A period of 0 disables auto-advance.
#[hook]
pub fn use_rotation(len: usize, period_ms: u32) -> RotationHandle {
    let state = use_reducer(|| Rotation::new(len));
    let paused = use_state(|| false);

    {
        let state = state.clone();
        use_effect_with_deps(
            move |len| {
                state.dispatch(RotationAction::Resize(*len));
                || ()
            },
            len,
        );
    }

    {
        let state = state.clone();
        let generation = state.generation;
        use_effect_with_deps(
            move |(period_ms, paused, _, len)| {
                let interval = if *paused || *len < 2 || *period_ms == 0 {
                    None
                } else {
                    Some(Interval::new(*period_ms, move || {
                        state.dispatch(RotationAction::Advance)
                    }))
                };
                move || drop(interval)
            },
            (period_ms, *paused, generation, len),
        );
    }

    let dispatcher = state.dispatcher();
    let next = {
        let dispatcher = dispatcher.clone();
        Callback::from(move |_| dispatcher.dispatch(RotationAction::Next))
    };
    let prev = {
        let dispatcher = dispatcher.clone();
        Callback::from(move |_| dispatcher.dispatch(RotationAction::Prev))
    };
    let go_to = Callback::from(move |i| dispatcher.dispatch(RotationAction::GoTo(i)));
    let set_paused = Callback::from(move |p| paused.set(p));

    RotationHandle {
        index: state.index,
        len: state.len,
        next,
        prev,
        go_to,
        set_paused,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn apply(state: Rotation, actions: Vec<RotationAction>) -> Rotation {
        let mut state = Rc::new(state);
        for action in actions {
            state = state.reduce(action);
        }
        (*state).clone()
    }

    #[test]
    fn advance_cycles_through_every_entry_and_wraps() {
        let mut state = Rc::new(Rotation::new(4));
        let mut seen = Vec::new();
        for _ in 0..5 {
            seen.push(state.index);
            state = state.reduce(RotationAction::Advance);
        }
        assert_eq!(seen, vec![0, 1, 2, 3, 0]);
        assert_eq!(state.index, 1);
        assert_eq!(state.generation, 0);
    }

    #[test]
    fn prev_from_first_entry_goes_to_last() {
        let state = apply(Rotation::new(3), vec![RotationAction::Prev]);
        assert_eq!(state.index, 2);
    }

    #[test]
    fn manual_navigation_restarts_the_timer() {
        let state = apply(
            Rotation::new(3),
            vec![RotationAction::Next, RotationAction::GoTo(0), RotationAction::Advance],
        );
        assert_eq!(state.index, 1);
        assert_eq!(state.generation, 2);
    }

    #[test]
    fn go_to_is_clamped_to_the_last_entry() {
        let state = apply(Rotation::new(3), vec![RotationAction::GoTo(9)]);
        assert_eq!(state.index, 2);
    }

    #[test]
    fn shrinking_the_list_clamps_the_index() {
        let state = apply(
            Rotation::new(5),
            vec![RotationAction::GoTo(4), RotationAction::Resize(2)],
        );
        assert_eq!(state.index, 1);
        assert_eq!(state.len, 2);
    }

    #[test]
    fn empty_rotation_stays_at_zero() {
        let state = apply(
            Rotation::new(0),
            vec![
                RotationAction::Advance,
                RotationAction::Prev,
                RotationAction::GoTo(3),
            ],
        );
        assert_eq!(state.index, 0);
        assert_eq!(next_index(0, 0), 0);
        assert_eq!(prev_index(0, 0), 0);
    }

    #[test]
    fn single_entry_never_moves() {
        let state = apply(
            Rotation::new(1),
            vec![RotationAction::Advance, RotationAction::Next, RotationAction::Prev],
        );
        assert_eq!(state.index, 0);
    }
}
