use crate::{Error, VecList};

/// A read-only cursor over a [`VecList`].
///
/// The shared-borrow twin of [`CursorMut`](crate::CursorMut): it rests
/// between two elements and can step in either direction, but offers no
/// structural operations, so any number of read-only cursors can observe the
/// same list at once.
///
/// # Example
/// ```rust
/// use vec_list::VecList;
///
/// let list = VecList::from([1, 2, 3]);
///
/// let mut cursor = list.cursor();
/// assert_eq!(cursor.next().unwrap(), &1);
/// assert_eq!(cursor.next().unwrap(), &2);
/// assert_eq!(cursor.previous().unwrap(), &2);
/// ```
pub struct Cursor<'a, T> {
    list: &'a VecList<T>,
    position: usize,
}

impl<'a, T> Cursor<'a, T> {
    pub(crate) fn from_start(list: &'a VecList<T>, position: usize) -> Self {
        Self { list, position }
    }

    /// Provides access to the underlying list.
    pub fn as_list(&self) -> &'a VecList<T> {
        self.list
    }

    /// Checks whether a forward step has an element to yield.
    pub fn has_next(&self) -> bool {
        self.position != self.list.len()
    }

    /// Yields the element after the resting point and moves forward over it.
    ///
    /// Fails with [`Error::Exhausted`] past the last element.
    pub fn next(&mut self) -> Result<&'a T, Error> {
        if self.position >= self.list.len() {
            return Err(Error::Exhausted);
        }

        self.position += 1;
        Ok(&self.list.buf[self.position - 1])
    }

    /// Checks whether a backward step has an element to yield.
    pub fn has_previous(&self) -> bool {
        self.position != 0
    }

    /// Moves backward and yields the element now under the resting point.
    ///
    /// Fails with [`Error::Exhausted`] before the first element.
    pub fn previous(&mut self) -> Result<&'a T, Error> {
        if self.position == 0 || self.position > self.list.len() {
            return Err(Error::Exhausted);
        }

        self.position -= 1;
        Ok(&self.list.buf[self.position])
    }

    /// Index of the element a forward step would yield; equals the list
    /// length when the cursor rests past the last element.
    pub fn next_index(&self) -> usize {
        self.position
    }

    /// Index of the element a backward step would yield, or `None` when the
    /// cursor rests before the first element.
    pub fn previous_index(&self) -> Option<usize> {
        self.position.checked_sub(1)
    }

    /// Applies `action` to every element from the resting point to the end
    /// of the list, advancing the cursor as it goes.
    pub fn for_each_remaining<F>(&mut self, mut action: F)
    where
        F: FnMut(&T),
    {
        while self.position < self.list.len() {
            action(&self.list.buf[self.position]);
            self.position += 1;
        }
    }
}

impl<T> Clone for Cursor<'_, T> {
    fn clone(&self) -> Self {
        Self { ..*self }
    }
}

impl<T> core::fmt::Debug for Cursor<'_, T>
where
    T: core::fmt::Debug,
{
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("Cursor")
            .field("list", &self.list)
            .field("position", &self.position)
            .finish()
    }
}
