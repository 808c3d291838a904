use std::fmt;

use super::stack::Stack;

/// FIFO queue built from two linked stacks.
///
/// New items are pushed onto `inbox`; `outbox` holds the front of the queue in
/// pop order and is refilled from `inbox` only when it runs dry.
pub struct Queue<T> {
    inbox: Stack<T>,
    outbox: Stack<T>,
}

impl<T> Queue<T> {
    pub const fn new() -> Self {
        Queue {
            inbox: Stack::new(),
            outbox: Stack::new(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.inbox.is_empty() && self.outbox.is_empty()
    }

    pub fn len(&self) -> usize {
        self.inbox.len() + self.outbox.len()
    }

    pub fn enqueue(&mut self, value: T) {
        self.inbox.push(value);
    }

    pub fn dequeue(&mut self) -> Option<T> {
        self.refill();
        self.outbox.pop()
    }

    pub fn peek(&mut self) -> Option<&T> {
        self.refill();
        self.outbox.peek()
    }

    pub fn peek_mut(&mut self) -> Option<&mut T> {
        self.refill();
        self.outbox.peek_mut()
    }

    pub fn clear(&mut self) {
        self.inbox.clear();
        self.outbox.clear();
    }

    /// Iterates from the front of the queue to the back.
    pub fn iter(&self) -> impl Iterator<Item = &T> + '_ {
        let mut back: Vec<&T> = self.inbox.iter().collect();
        back.reverse();
        self.outbox.iter().chain(back)
    }

    fn refill(&mut self) {
        if self.outbox.is_empty() {
            while let Some(value) = self.inbox.pop() {
                self.outbox.push(value);
            }
        }
    }
}

impl<T> Default for Queue<T> {
    fn default() -> Self {
        Queue::new()
    }
}

impl<T: fmt::Debug> fmt::Debug for Queue<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

impl<T> Extend<T> for Queue<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for value in iter {
            self.enqueue(value);
        }
    }
}

impl<T> FromIterator<T> for Queue<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut queue = Queue::new();
        queue.extend(iter);
        queue
    }
}
