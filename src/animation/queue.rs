use futures::FutureExt;
use futures::channel::oneshot;
use futures::future::LocalBoxFuture;
use futures::task::LocalSpawn;
use futures::task::LocalSpawnExt;
use std::cell::RefCell;
use std::collections::VecDeque;
use std::future::Future;
use std::pin::Pin;
use std::rc::Rc;
use std::task::Context;
use std::task::Poll;

/// Sequence number handed out per enqueued task, for logging.
pub type Ticket = u64;

type Task = Box<dyn FnOnce() -> LocalBoxFuture<'static, anyhow::Result<()>>>;

struct Job {
    ticket: Ticket,
    task: Task,
    done: oneshot::Sender<()>,
}

/// What the drain loop is doing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Slot {
    /// No drain loop exists.
    Idle,
    /// A drain loop has been spawned but has not picked a task yet.
    Armed,
    /// This task is in flight.
    Busy(Ticket),
}

struct Backlog {
    pending: VecDeque<Job>,
    slot: Slot,
    issued: Ticket,
}

impl Backlog {
    /// Moves the head into the in-flight slot, or goes idle when empty.
    /// Both happen under one borrow so no enqueue can slip in between.
    fn next(&mut self) -> Option<Job> {
        match self.pending.pop_front() {
            Some(job) => {
                self.slot = Slot::Busy(job.ticket);
                Some(job)
            }
            None => {
                self.slot = Slot::Idle;
                None
            }
        }
    }
}

/// Single-consumer FIFO of deferred visual work.
///
/// Each [`Queue::enqueue`] registers a task immediately and returns a
/// [`Receipt`] that resolves once that task has finished. Exactly one task
/// runs at a time: the first enqueue on an idle queue spawns a drain loop
/// on the supplied spawner, and that loop is the only thing that ever
/// starts tasks. It runs until it finds the backlog empty.
///
/// A task that fails is logged and counted as finished, so one broken
/// effect never stalls the effects queued behind it.
pub struct Queue<S> {
    backlog: Rc<RefCell<Backlog>>,
    spawner: S,
}

impl<S> Queue<S>
where
    S: LocalSpawn,
{
    pub fn new(spawner: S) -> Self {
        Self {
            backlog: Rc::new(RefCell::new(Backlog {
                pending: VecDeque::new(),
                slot: Slot::Idle,
                issued: 0,
            })),
            spawner,
        }
    }

    pub fn enqueue<F, T>(&self, task: F) -> Receipt
    where
        F: FnOnce() -> T + 'static,
        T: Future<Output = anyhow::Result<()>> + 'static,
    {
        let (done, receipt) = oneshot::channel();
        let idle = {
            let mut backlog = self.backlog.borrow_mut();
            backlog.issued += 1;
            let ticket = backlog.issued;
            backlog.pending.push_back(Job {
                ticket,
                task: Box::new(move || task().boxed_local()),
                done,
            });
            log::trace!("animation #{} queued", ticket);
            match backlog.slot {
                Slot::Idle => {
                    backlog.slot = Slot::Armed;
                    true
                }
                Slot::Armed | Slot::Busy(_) => false,
            }
        };
        if idle {
            self.arm();
        }
        Receipt(receipt)
    }

    /// True from the first enqueue until the drain loop finds the backlog
    /// empty.
    pub fn is_running(&self) -> bool {
        self.backlog.borrow().slot != Slot::Idle
    }

    /// Ticket of the task currently playing, if any.
    pub fn in_flight(&self) -> Option<Ticket> {
        match self.backlog.borrow().slot {
            Slot::Busy(ticket) => Some(ticket),
            Slot::Idle | Slot::Armed => None,
        }
    }

    /// Tasks waiting behind the one in flight.
    pub fn len(&self) -> usize {
        self.backlog.borrow().pending.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn arm(&self) {
        let backlog = self.backlog.clone();
        if let Err(e) = self.spawner.spawn_local(drain(backlog)) {
            log::error!("animation queue cannot spawn its drain loop: {}", e);
            self.release();
        }
    }

    /// Drops every pending job so their receipts resolve instead of hanging.
    fn release(&self) {
        let mut backlog = self.backlog.borrow_mut();
        backlog.pending.clear();
        backlog.slot = Slot::Idle;
    }
}

async fn drain(backlog: Rc<RefCell<Backlog>>) {
    loop {
        let next = backlog.borrow_mut().next();
        let Some(Job { ticket, task, done }) = next else {
            break;
        };
        log::trace!("animation #{} started", ticket);
        if let Err(e) = task().await {
            log::warn!("animation #{} failed: {:#}", ticket, e);
        }
        let _ = done.send(());
    }
}

/// Resolves when the enqueued task has finished, failed, or been dropped.
#[must_use = "a receipt does nothing unless awaited"]
pub struct Receipt(oneshot::Receiver<()>);

impl Future for Receipt {
    type Output = ();
    fn poll(mut self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<()> {
        self.0.poll_unpin(cx).map(|_| ())
    }
}
