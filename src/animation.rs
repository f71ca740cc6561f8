use crate::spring::{Spring, SpringConfig};
use std::cell::{Cell, RefCell};
use std::rc::Rc;

const FIRST_FRAME_SECONDS: f64 = 1.0 / 60.0;
const MAX_FRAME_SECONDS: f64 = 1.0 / 20.0;

/// Source of animation frames. Dropping a returned handle cancels the frame
/// if it has not fired yet.
pub trait FrameScheduler {
    type Handle;

    fn request_frame(&self, callback: Box<dyn FnOnce(f64)>) -> Self::Handle;
}

struct AnimatorState<S: FrameScheduler> {
    scheduler: S,
    springs: RefCell<Vec<Spring>>,
    pending: RefCell<Option<S::Handle>>,
    last_timestamp: Cell<Option<f64>>,
    sink: Box<dyn Fn(&[f64])>,
}

pub struct SpringAnimator<S: FrameScheduler> {
    state: Rc<AnimatorState<S>>,
}

impl<S: FrameScheduler + 'static> SpringAnimator<S> {
    pub fn new(
        scheduler: S,
        channels: &[(SpringConfig, f64)],
        sink: impl Fn(&[f64]) + 'static,
    ) -> Self {
        let springs = channels
            .iter()
            .map(|(config, initial)| Spring::new(*config, *initial))
            .collect();

        Self {
            state: Rc::new(AnimatorState {
                scheduler,
                springs: RefCell::new(springs),
                pending: RefCell::new(None),
                last_timestamp: Cell::new(None),
                sink: Box::new(sink),
            }),
        }
    }

    /// Moves every channel's target. Extra targets are ignored; missing ones
    /// leave their channel untouched.
    pub fn retarget(&self, targets: &[f64]) {
        let settled = {
            let mut springs = self.state.springs.borrow_mut();
            for (spring, target) in springs.iter_mut().zip(targets) {
                spring.set_target(*target);
            }
            springs
                .iter()
                .all(|spring| spring.is_settled() && spring.value() == spring.target())
        };

        if !settled {
            schedule_frame(&self.state);
        }
    }

    pub fn values(&self) -> Vec<f64> {
        self.state.springs.borrow().iter().map(Spring::value).collect()
    }

    pub fn is_running(&self) -> bool {
        self.state.pending.borrow().is_some()
    }

    pub fn stop(&self) {
        let pending = self.state.pending.borrow_mut().take();
        drop(pending);
        self.state.last_timestamp.set(None);
    }
}

fn schedule_frame<S: FrameScheduler + 'static>(state: &Rc<AnimatorState<S>>) {
    if state.pending.borrow().is_some() {
        return;
    }

    let weak = Rc::downgrade(state);
    let handle = state.scheduler.request_frame(Box::new(move |timestamp| {
        if let Some(state) = weak.upgrade() {
            run_frame(&state, timestamp);
        }
    }));
    *state.pending.borrow_mut() = Some(handle);
}

fn run_frame<S: FrameScheduler + 'static>(state: &Rc<AnimatorState<S>>, timestamp: f64) {
    // The handle for the frame being run; released once the next one is queued.
    let fired = state.pending.borrow_mut().take();

    let dt = match state.last_timestamp.replace(Some(timestamp)) {
        Some(previous) => ((timestamp - previous) / 1_000.0).clamp(0.0, MAX_FRAME_SECONDS),
        None => FIRST_FRAME_SECONDS,
    };

    let (values, settled) = {
        let mut springs = state.springs.borrow_mut();
        let mut settled = true;
        for spring in springs.iter_mut() {
            settled &= spring.step(dt);
        }
        let values: Vec<f64> = springs.iter().map(Spring::value).collect();
        (values, settled)
    };

    (state.sink)(&values);

    if settled {
        state.last_timestamp.set(None);
    } else {
        schedule_frame(state);
    }

    drop(fired);
}

#[cfg(test)]
pub(crate) mod testing {
    use super::FrameScheduler;
    use std::cell::{Cell, RefCell};
    use std::rc::Rc;

    type Queued = (u64, Box<dyn FnOnce(f64)>);

    #[derive(Clone, Default)]
    pub struct ManualFrames {
        queue: Rc<RefCell<Vec<Queued>>>,
        next_id: Rc<Cell<u64>>,
    }

    pub struct ManualFrame {
        id: u64,
        queue: Rc<RefCell<Vec<Queued>>>,
    }

    impl Drop for ManualFrame {
        fn drop(&mut self) {
            self.queue.borrow_mut().retain(|(id, _)| *id != self.id);
        }
    }

    impl FrameScheduler for ManualFrames {
        type Handle = ManualFrame;

        fn request_frame(&self, callback: Box<dyn FnOnce(f64)>) -> ManualFrame {
            let id = self.next_id.get();
            self.next_id.set(id + 1);
            self.queue.borrow_mut().push((id, callback));
            ManualFrame {
                id,
                queue: self.queue.clone(),
            }
        }
    }

    impl ManualFrames {
        pub fn pending(&self) -> usize {
            self.queue.borrow().len()
        }

        pub fn fire(&self, timestamp: f64) -> usize {
            let batch = std::mem::take(&mut *self.queue.borrow_mut());
            let count = batch.len();
            for (_, callback) in batch {
                callback(timestamp);
            }
            count
        }

        pub fn run_until_idle(&self, start: f64, limit: usize) -> Option<usize> {
            let mut timestamp = start;
            for frame in 0..limit {
                if self.fire(timestamp) == 0 {
                    return Some(frame);
                }
                timestamp += 16.0;
            }
            None
        }
    }
}
