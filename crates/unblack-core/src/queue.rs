use std::collections::VecDeque;
use std::mem::ManuallyDrop;

/// Unbounded first-in first-out queue.
///
/// Elements belong to the queue between `enqueue` and `dequeue`. Dropping the
/// queue frees its own buffer but leaves any elements still inside it
/// undropped: draining the queue is the caller's job.
#[derive(Debug)]
pub struct FifoQueue<T> {
    items: VecDeque<ManuallyDrop<T>>,
}

impl<T> FifoQueue<T> {
    pub fn new() -> Self {
        Self {
            items: VecDeque::new(),
        }
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Append `item` at the tail.
    pub fn enqueue(&mut self, item: T) {
        self.items.push_back(ManuallyDrop::new(item));
    }

    /// Remove and return the head element.
    ///
    /// Panics if the queue is empty.
    pub fn dequeue(&mut self) -> T {
        match self.try_dequeue() {
            Some(item) => item,
            None => panic!("dequeue on an empty queue"),
        }
    }

    pub fn try_dequeue(&mut self) -> Option<T> {
        self.items.pop_front().map(ManuallyDrop::into_inner)
    }
}

impl<T> Default for FifoQueue<T> {
    fn default() -> Self {
        Self::new()
    }
}
