use super::Animator;
use super::Effect;
use super::Queue;
use super::Receipt;
use futures::task::LocalSpawn;
use std::rc::Rc;

/// An [`Animator`] paired with a [`Queue`].
///
/// [`Stage::play`] runs an effect on its own, overlapping whatever else is
/// on screen. [`Stage::queue`] routes it through the queue so it starts only
/// after every previously queued effect has finished. Nothing is queued
/// unless the caller asks for it.
pub struct Stage<A, S> {
    animator: Rc<A>,
    queue: Queue<S>,
}

impl<A, S> Stage<A, S>
where
    A: Animator + 'static,
    S: LocalSpawn,
{
    pub fn new(animator: A, spawner: S) -> Self {
        Self {
            animator: Rc::new(animator),
            queue: Queue::new(spawner),
        }
    }

    pub async fn play(&self, effect: Effect) -> anyhow::Result<()> {
        self.animator.play(&effect).await
    }

    pub fn queue(&self, effect: Effect) -> Receipt {
        let animator = self.animator.clone();
        self.queue.enqueue(move || async move {
            log::debug!("playing queued {}", effect);
            animator.play(&effect).await
        })
    }

    pub fn is_busy(&self) -> bool {
        self.queue.is_running()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::protocol::Row;
    use futures::channel::oneshot;
    use futures::executor::LocalPool;
    use futures::task::LocalSpawnExt;
    use std::cell::RefCell;

    /// Records what it plays and holds each effect open until released.
    #[derive(Default)]
    struct Holding {
        played: RefCell<Vec<String>>,
        gates: RefCell<Vec<oneshot::Sender<()>>>,
    }

    impl Holding {
        fn release_one(&self) {
            let gate = self.gates.borrow_mut().remove(0);
            gate.send(()).unwrap();
        }
    }

    #[async_trait::async_trait(?Send)]
    impl Animator for Rc<Holding> {
        async fn play(&self, effect: &Effect) -> anyhow::Result<()> {
            let (gate, wait) = oneshot::channel();
            self.gates.borrow_mut().push(gate);
            self.played.borrow_mut().push(effect.to_string());
            wait.await.ok();
            Ok(())
        }
    }

    /// Fails on the fantasy banner, succeeds on everything else.
    struct Flaky(Rc<RefCell<Vec<String>>>);

    #[async_trait::async_trait(?Send)]
    impl Animator for Flaky {
        async fn play(&self, effect: &Effect) -> anyhow::Result<()> {
            self.0.borrow_mut().push(effect.to_string());
            match effect {
                Effect::Fantasy => Err(anyhow::anyhow!("no body element")),
                _ => Ok(()),
            }
        }
    }

    fn score(row: Row) -> Effect {
        Effect::Score {
            row,
            points: 2,
            win: true,
        }
    }

    #[test]
    fn queued_effects_do_not_overlap() {
        let mut pool = LocalPool::new();
        let holding = Rc::new(Holding::default());
        let stage = Stage::new(holding.clone(), pool.spawner());
        let _ = stage.queue(score(Row::Top));
        let _ = stage.queue(Effect::Fantasy);
        pool.run_until_stalled();
        assert!(holding.played.borrow().len() == 1);
        holding.release_one();
        pool.run_until_stalled();
        assert!(holding.played.borrow().len() == 2);
        assert!(holding.played.borrow()[1] == "fantasy");
        holding.release_one();
        pool.run_until_stalled();
        assert!(!stage.is_busy());
    }

    #[test]
    fn queue_registers_before_polling() {
        let mut pool = LocalPool::new();
        let holding = Rc::new(Holding::default());
        let stage = Stage::new(holding.clone(), pool.spawner());
        let receipt = stage.queue(Effect::Fantasy);
        assert!(stage.is_busy());
        assert!(holding.played.borrow().is_empty());
        pool.run_until_stalled();
        holding.release_one();
        pool.run_until(receipt);
        assert!(!stage.is_busy());
    }

    #[test]
    fn standalone_effects_overlap() {
        let mut pool = LocalPool::new();
        let holding = Rc::new(Holding::default());
        let stage = Rc::new(Stage::new(holding.clone(), pool.spawner()));
        for row in [Row::Top, Row::Bottom] {
            let stage = stage.clone();
            pool.spawner()
                .spawn_local(async move {
                    stage.play(score(row)).await.unwrap();
                })
                .unwrap();
        }
        pool.run_until_stalled();
        assert!(holding.played.borrow().len() == 2);
        assert!(!stage.is_busy());
        holding.release_one();
        holding.release_one();
        pool.run_until_stalled();
    }

    #[test]
    fn failing_effect_is_skipped() {
        let mut pool = LocalPool::new();
        let played = Rc::new(RefCell::new(Vec::new()));
        let stage = Stage::new(Flaky(played.clone()), pool.spawner());
        let _ = stage.queue(Effect::Fantasy);
        let _ = stage.queue(score(Row::Middle));
        pool.run_until_stalled();
        assert!(*played.borrow() == vec!["fantasy", "score middle 2 true"]);
        assert!(!stage.is_busy());
    }

    #[test]
    fn standalone_failure_is_returned() {
        let mut pool = LocalPool::new();
        let stage = Stage::new(Flaky(Rc::default()), pool.spawner());
        let result = pool.run_until(stage.play(Effect::Fantasy));
        assert!(result.is_err());
    }
}
