use crate::geometry::Point;
use std::fmt;
use std::rc::Rc;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum InputKind {
    PointerMove,
    Scroll,
    Resize,
    PointerLeave,
}

impl InputKind {
    pub const ALL: [InputKind; 4] = [
        InputKind::PointerMove,
        InputKind::Scroll,
        InputKind::Resize,
        InputKind::PointerLeave,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::PointerMove => "pointer-move",
            Self::Scroll => "scroll",
            Self::Resize => "resize",
            Self::PointerLeave => "pointer-leave",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum InputEvent {
    PointerMove(Point),
    Scroll,
    Resize,
    PointerLeave,
}

impl InputEvent {
    pub fn kind(&self) -> InputKind {
        match self {
            Self::PointerMove(_) => InputKind::PointerMove,
            Self::Scroll => InputKind::Scroll,
            Self::Resize => InputKind::Resize,
            Self::PointerLeave => InputKind::PointerLeave,
        }
    }
}

pub type InputHandler = Rc<dyn Fn(InputEvent)>;

pub trait InputSource {
    fn listen(&self, kind: InputKind, handler: InputHandler) -> Subscription;
}

#[must_use = "dropping a subscription removes its listener"]
pub struct Subscription {
    release: Option<Box<dyn FnOnce()>>,
}

impl Subscription {
    pub fn new(release: impl FnOnce() + 'static) -> Self {
        Self {
            release: Some(Box::new(release)),
        }
    }

    pub fn holding<T: 'static>(guard: T) -> Self {
        Self::new(move || drop(guard))
    }

    pub fn empty() -> Self {
        Self { release: None }
    }
}

impl Drop for Subscription {
    fn drop(&mut self) {
        if let Some(release) = self.release.take() {
            release();
        }
    }
}

impl fmt::Debug for Subscription {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Subscription")
            .field("active", &self.release.is_some())
            .finish()
    }
}

#[cfg(test)]
pub(crate) mod testing {
    use super::*;
    use std::cell::{Cell, RefCell};

    type Registered = (u64, InputKind, InputHandler);

    #[derive(Clone, Default)]
    pub struct ScriptedInput {
        listeners: Rc<RefCell<Vec<Registered>>>,
        next_id: Rc<Cell<u64>>,
    }

    impl ScriptedInput {
        pub fn active_listeners(&self) -> usize {
            self.listeners.borrow().len()
        }

        pub fn listeners_for(&self, kind: InputKind) -> usize {
            self.listeners
                .borrow()
                .iter()
                .filter(|(_, registered, _)| *registered == kind)
                .count()
        }

        pub fn emit(&self, event: InputEvent) {
            let targets: Vec<InputHandler> = self
                .listeners
                .borrow()
                .iter()
                .filter(|(_, kind, _)| *kind == event.kind())
                .map(|(_, _, handler)| handler.clone())
                .collect();

            for handler in targets {
                handler(event);
            }
        }
    }

    impl InputSource for ScriptedInput {
        fn listen(&self, kind: InputKind, handler: InputHandler) -> Subscription {
            let id = self.next_id.get();
            self.next_id.set(id + 1);
            self.listeners.borrow_mut().push((id, kind, handler));

            let listeners = self.listeners.clone();
            Subscription::new(move || {
                listeners
                    .borrow_mut()
                    .retain(|(registered, _, _)| *registered != id);
            })
        }
    }
}

#[cfg(test)]
mod tests {
    use super::testing::ScriptedInput;
    use super::*;
    use std::cell::Cell;

    #[test]
    fn dropping_subscription_removes_listener() {
        let input = ScriptedInput::default();
        let hits = Rc::new(Cell::new(0));
        let handler: InputHandler = {
            let hits = hits.clone();
            Rc::new(move |_: InputEvent| hits.set(hits.get() + 1))
        };

        let subscription = input.listen(InputKind::Scroll, handler);
        input.emit(InputEvent::Scroll);
        assert_eq!(input.active_listeners(), 1);

        drop(subscription);
        input.emit(InputEvent::Scroll);

        assert_eq!(input.active_listeners(), 0);
        assert_eq!(hits.get(), 1);
    }

    #[test]
    fn events_reach_only_matching_kind() {
        let input = ScriptedInput::default();
        let seen = Rc::new(Cell::new(None));
        let handler: InputHandler = {
            let seen = seen.clone();
            Rc::new(move |event: InputEvent| seen.set(Some(event)))
        };

        let _subscription = input.listen(InputKind::PointerMove, handler);
        input.emit(InputEvent::Resize);
        assert_eq!(seen.get(), None);

        input.emit(InputEvent::PointerMove(Point::new(3.0, 4.0)));
        assert_eq!(seen.get(), Some(InputEvent::PointerMove(Point::new(3.0, 4.0))));
    }

    #[test]
    fn holding_subscription_drops_guard_on_release() {
        let dropped = Rc::new(Cell::new(false));

        struct Guard(Rc<Cell<bool>>);
        impl Drop for Guard {
            fn drop(&mut self) {
                self.0.set(true);
            }
        }

        let subscription = Subscription::holding(Guard(dropped.clone()));
        assert!(!dropped.get());
        drop(subscription);
        assert!(dropped.get());
    }
}
