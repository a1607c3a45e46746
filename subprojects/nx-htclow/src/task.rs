//! Completion events for outstanding asynchronous channel operations.
//!
//! The original source gives every `ChannelImpl::Do*` method an `Event` the
//! caller blocks on plus a `trigger` field the completing side sets before
//! signaling it. `nx_std_sync::oneshot` already provides exactly that
//! shape (a one-shot value handed from completer to waiter), so a `Task` here
//! is just an id plus the two ends of one.

use nx_std_sync::oneshot::{self, Receiver, Sender};

/// Why a task completed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Trigger {
    /// The send buffer emptied out (`DoFlush` / `DoSend` immediate path).
    SendBufferEmpty,
    /// Requested bytes became available in the receive buffer.
    ReceiveData,
    /// The channel reached `Connected` (or was already there).
    ConnectReady,
    /// The channel or its connection was torn down while the task was pending.
    Disconnect,
    /// The task was cancelled before completing.
    Cancelled,
}

/// Monotonically increasing identifier handed out by [`TaskIdAllocator`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct TaskId(pub u64);

#[derive(Debug, Default)]
pub struct TaskIdAllocator {
    next: u64,
}

impl TaskIdAllocator {
    pub const fn new() -> Self {
        Self { next: 0 }
    }

    pub fn next(&mut self) -> TaskId {
        let id = TaskId(self.next);
        self.next += 1;
        id
    }
}

/// The waiter's half of an outstanding operation.
pub struct Task {
    id: TaskId,
    receiver: Receiver<Trigger>,
}

impl Task {
    pub fn id(&self) -> TaskId {
        self.id
    }

    /// Blocks until the operation completes, returning why. If the completer
    /// side was dropped without completing (e.g. the channel itself tore
    /// down), this reports [`Trigger::Disconnect`].
    pub fn wait(self) -> Trigger {
        self.receiver.recv().unwrap_or(Trigger::Disconnect)
    }
}

/// The completer's half, kept alongside a channel's pending-task list until
/// the event it was waiting for occurs.
pub struct TaskCompleter {
    id: TaskId,
    sender: Sender<Trigger>,
}

impl TaskCompleter {
    pub fn id(&self) -> TaskId {
        self.id
    }

    pub fn complete(self, trigger: Trigger) {
        let _ = self.sender.send(trigger);
    }
}

/// Builds a fresh (waiter, completer) pair sharing the same id.
pub fn new_task(id: TaskId) -> (Task, TaskCompleter) {
    let (sender, receiver) = oneshot::channel();
    (Task { id, receiver }, TaskCompleter { id, sender })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn allocator_hands_out_increasing_ids() {
        let mut alloc = TaskIdAllocator::new();
        assert_eq!(alloc.next(), TaskId(0));
        assert_eq!(alloc.next(), TaskId(1));
    }

    #[test]
    fn completion_is_observed_by_the_waiter() {
        let mut alloc = TaskIdAllocator::new();
        let (task, completer) = new_task(alloc.next());
        completer.complete(Trigger::SendBufferEmpty);
        assert_eq!(task.wait(), Trigger::SendBufferEmpty);
    }
}
