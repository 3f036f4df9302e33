/// Fixed-capacity FIFO ring buffer.
///
/// Holds at most `capacity` items. A full queue refuses new items and hands
/// them back to the caller; this is an expected condition, not an error.
#[derive(Debug, Clone)]
pub struct BoundedQueue<T> {
    slots: Box<[Option<T>]>,
    head: usize,
    count: usize,
}

impl<T> BoundedQueue<T> {
    /// Create an empty queue with the given capacity
    pub fn new(capacity: usize) -> Self {
        Self {
            slots: (0..capacity).map(|_| None).collect(),
            head: 0,
            count: 0,
        }
    }

    pub fn capacity(&self) -> usize {
        self.slots.len()
    }

    pub fn len(&self) -> usize {
        self.count
    }

    pub fn is_empty(&self) -> bool {
        self.count == 0
    }

    pub fn is_full(&self) -> bool {
        self.count >= self.capacity()
    }

    /// Append at the tail. Returns the item unchanged if the queue is full.
    pub fn enqueue(&mut self, item: T) -> Result<(), T> {
        if self.is_full() {
            return Err(item);
        }
        let tail = self.slot_index(self.count);
        self.slots[tail] = Some(item);
        self.count += 1;
        Ok(())
    }

    /// Remove and return the head item
    pub fn dequeue(&mut self) -> Option<T> {
        if self.is_empty() {
            return None;
        }
        let item = self.slots[self.head].take();
        self.head = self.slot_index(1);
        self.count -= 1;
        item
    }

    pub fn front(&self) -> Option<&T> {
        if self.is_empty() {
            return None;
        }
        self.slots[self.head].as_ref()
    }

    /// Iterate from head to tail
    pub fn iter(&self) -> impl Iterator<Item = &T> + '_ {
        (0..self.count).filter_map(move |offset| self.slots[self.slot_index(offset)].as_ref())
    }

    // Physical slot `offset` positions past the head
    fn slot_index(&self, offset: usize) -> usize {
        (self.head + offset) % self.capacity()
    }
}
