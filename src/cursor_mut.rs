use crate::{Error, VecList};

/// A cursor over a [`VecList`] that can mutate the list while traversing.
///
/// The cursor rests between two elements: [`next`](CursorMut::next) yields
/// the element after the resting point and moves forward over it,
/// [`previous`](CursorMut::previous) yields the element before it and moves
/// backward. Removal and replacement act relative to the element most
/// recently yielded; insertion happens at the resting point.
///
/// The cursor borrows the list exclusively for its whole lifetime, so the
/// list cannot be structurally mutated through any other channel while the
/// cursor is alive.
///
/// # Example
/// ```rust
/// use vec_list::VecList;
///
/// let mut list = VecList::from([1, 2, 3]);
///
/// let mut cursor = list.cursor_mut();
/// assert_eq!(cursor.next().unwrap(), &1);
/// cursor.set_current(10).unwrap();
/// cursor.insert(15).unwrap();
///
/// assert_eq!(list.to_vec(), [10, 15, 2, 3]);
/// ```
pub struct CursorMut<'a, T> {
    list: &'a mut VecList<T>,
    position: usize,
    last_yielded: Option<usize>,
}

impl<'a, T> CursorMut<'a, T> {
    pub(crate) fn from_start(list: &'a mut VecList<T>, position: usize) -> Self {
        Self {
            list,
            position,
            last_yielded: None,
        }
    }

    /// Provides read access to the underlying list.
    pub fn as_list(&self) -> &VecList<T> {
        self.list
    }

    /// Checks whether a forward step has an element to yield.
    pub fn has_next(&self) -> bool {
        self.position != self.list.len()
    }

    /// Yields the element after the resting point and moves forward over it.
    ///
    /// Fails with [`Error::Exhausted`] past the last element.
    ///
    /// # Example
    /// ```rust
    /// use vec_list::VecList;
    ///
    /// let mut list = VecList::from([1, 2]);
    ///
    /// let mut cursor = list.cursor_mut();
    /// assert_eq!(cursor.next().unwrap(), &1);
    /// assert_eq!(cursor.next().unwrap(), &2);
    /// assert!(cursor.next().is_err());
    /// ```
    pub fn next(&mut self) -> Result<&T, Error> {
        if self.position >= self.list.len() {
            return Err(Error::Exhausted);
        }

        self.last_yielded = Some(self.position);
        self.position += 1;
        Ok(&self.list.buf[self.position - 1])
    }

    /// Checks whether a backward step has an element to yield.
    pub fn has_previous(&self) -> bool {
        self.position != 0
    }

    /// Moves backward and yields the element now under the resting point.
    ///
    /// Fails with [`Error::Exhausted`] before the first element, or when the
    /// resting point lies past the end of the list.
    ///
    /// # Example
    /// ```rust
    /// use vec_list::VecList;
    ///
    /// let mut list = VecList::from([1, 2]);
    ///
    /// let mut cursor = list.cursor_mut_at(2).unwrap();
    /// assert_eq!(cursor.previous().unwrap(), &2);
    /// assert_eq!(cursor.previous().unwrap(), &1);
    /// assert!(cursor.previous().is_err());
    /// ```
    pub fn previous(&mut self) -> Result<&T, Error> {
        if self.position == 0 || self.position > self.list.len() {
            return Err(Error::Exhausted);
        }

        self.position -= 1;
        self.last_yielded = Some(self.position);
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

    /// Removes the element at the cursor's forward position and returns it.
    ///
    /// After `previous` the forward position holds the element just yielded;
    /// after `next` it holds the one following it, and at the very end of
    /// the list there is nothing to remove, which fails with
    /// [`Error::IndexOutOfBounds`]. Without a prior step the call fails with
    /// [`Error::NoCurrentElement`]. On success the resting point returns to
    /// the index of the last yielded element.
    ///
    /// # Example
    /// ```rust
    /// use vec_list::VecList;
    ///
    /// let mut list = VecList::from([1, 2, 3]);
    ///
    /// let mut cursor = list.cursor_mut_at(3).unwrap();
    /// assert_eq!(cursor.previous().unwrap(), &3);
    /// assert_eq!(cursor.remove_current().unwrap(), 3);
    ///
    /// assert_eq!(list.to_vec(), [1, 2]);
    /// ```
    pub fn remove_current(&mut self) -> Result<T, Error> {
        let anchor = self.last_yielded.ok_or(Error::NoCurrentElement)?;

        let value = self.list.remove(self.position)?;
        self.position = anchor;
        self.last_yielded = None;
        Ok(value)
    }

    /// Replaces the element most recently yielded by `next` or `previous`.
    ///
    /// Fails with [`Error::NoCurrentElement`] without a prior step. The
    /// cursor's resting point is unaffected.
    ///
    /// # Example
    /// ```rust
    /// use vec_list::VecList;
    ///
    /// let mut list = VecList::from([1, 2, 3]);
    ///
    /// let mut cursor = list.cursor_mut();
    /// assert_eq!(cursor.next().unwrap(), &1);
    /// cursor.set_current(10).unwrap();
    ///
    /// assert_eq!(list.to_vec(), [10, 2, 3]);
    /// ```
    pub fn set_current(&mut self, value: T) -> Result<(), Error> {
        let target = self.last_yielded.ok_or(Error::NoCurrentElement)?;

        self.list.set(target, value)?;
        Ok(())
    }

    /// Inserts `value` at the resting point and rests after it, so a
    /// following `next` yields the element the cursor was about to visit.
    ///
    /// The inserted element does not become current: a `remove_current` or
    /// `set_current` right after the insertion fails with
    /// [`Error::NoCurrentElement`].
    ///
    /// # Example
    /// ```rust
    /// use vec_list::VecList;
    ///
    /// let mut list = VecList::from([1, 2]);
    ///
    /// let mut cursor = list.cursor_mut();
    /// cursor.next().unwrap();
    /// cursor.insert(10).unwrap();
    /// assert_eq!(cursor.next().unwrap(), &2);
    ///
    /// assert_eq!(list.to_vec(), [1, 10, 2]);
    /// ```
    pub fn insert(&mut self, value: T) -> Result<(), Error> {
        self.list.insert(self.position, value)?;
        self.position += 1;
        self.last_yielded = None;
        Ok(())
    }

    /// Applies `action` to every element from the resting point to the end
    /// of the list, advancing the cursor as it goes.
    ///
    /// The length is re-read on every step. Does nothing if the cursor
    /// already rests past the last element.
    ///
    /// # Example
    /// ```rust
    /// use vec_list::VecList;
    ///
    /// let mut list = VecList::from([1, 2, 3]);
    ///
    /// let mut cursor = list.cursor_mut_at(1).unwrap();
    /// cursor.for_each_remaining(|element| *element *= 10);
    ///
    /// assert_eq!(list.to_vec(), [1, 20, 30]);
    /// ```
    pub fn for_each_remaining<F>(&mut self, mut action: F)
    where
        F: FnMut(&mut T),
    {
        while self.position < self.list.len() {
            let index = self.position;
            action(&mut self.list.buf[index]);
            self.last_yielded = Some(index);
            self.position = index + 1;
        }
    }
}

impl<T> core::fmt::Debug for CursorMut<'_, T>
where
    T: core::fmt::Debug,
{
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("CursorMut")
            .field("list", &self.list)
            .field("position", &self.position)
            .field("last_yielded", &self.last_yielded)
            .finish()
    }
}
