/// Fixed-capacity circular buffer backed by an inline array.
///
/// Pushing onto a full buffer overwrites the oldest element and advances the
/// logical start. Nothing is allocated; `N` is the capacity.
#[derive(Clone, Copy, Debug)]
pub struct BoundedRingBuffer<T: Copy + Default, const N: usize> {
    buf: [T; N],
    start: usize,
    len: usize,
}

impl<T: Copy + Default, const N: usize> BoundedRingBuffer<T, N> {
    pub fn new() -> Self {
        Self {
            buf: [T::default(); N],
            start: 0,
            len: 0,
        }
    }

    pub fn push(&mut self, value: T) {
        if self.len < self.capacity() {
            self.buf[(self.start + self.len) % N] = value;
            self.len += 1;
        } else {
            // Full: the oldest slot is overwritten and is gone for good.
            self.buf[self.start] = value;
            self.start = (self.start + 1) % N;
        }
    }

    /// Removes and returns the newest element.
    pub fn pop(&mut self) -> Option<T> {
        if self.is_empty() {
            return None;
        }
        self.len -= 1;
        Some(self.buf[(self.start + self.len) % N])
    }

    /// Resets the logical length. Storage is left as is.
    pub fn clear(&mut self) {
        self.len = 0;
    }

    /// Element `i` counted from the oldest.
    pub fn at(&self, i: usize) -> Option<&T> {
        if i < self.len {
            Some(&self.buf[(self.start + i) % N])
        } else {
            None
        }
    }

    pub fn at_mut(&mut self, i: usize) -> Option<&mut T> {
        if i < self.len {
            Some(&mut self.buf[(self.start + i) % N])
        } else {
            None
        }
    }

    pub fn last(&self) -> Option<&T> {
        self.len.checked_sub(1).and_then(|i| self.at(i))
    }

    pub fn last_mut(&mut self) -> Option<&mut T> {
        match self.len.checked_sub(1) {
            Some(i) => self.at_mut(i),
            None => None,
        }
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub const fn capacity(&self) -> usize {
        N
    }

    /// Oldest to newest.
    pub fn iter(&self) -> impl DoubleEndedIterator<Item = &T> + '_ {
        (0..self.len).map(move |i| &self.buf[(self.start + i) % N])
    }
}

impl<T: Copy + Default, const N: usize> Default for BoundedRingBuffer<T, N> {
    fn default() -> Self {
        Self::new()
    }
}

// Only the logical contents count; stale slots left behind by `pop`/`clear`
// must not make two equal histories compare unequal.
impl<T: Copy + Default + PartialEq, const N: usize> PartialEq for BoundedRingBuffer<T, N> {
    fn eq(&self, other: &Self) -> bool {
        self.len == other.len && self.iter().eq(other.iter())
    }
}

impl<T: Copy + Default + Eq, const N: usize> Eq for BoundedRingBuffer<T, N> {}
