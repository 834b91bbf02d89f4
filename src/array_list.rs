use alloc::boxed::Box;
use core::{
    fmt,
    mem::{ManuallyDrop, MaybeUninit},
    ptr, slice,
};

use crate::utils::{alloc_slots, cold_path, grown_capacity, layout_fits};
use crate::{List, ListError};

/// Capacity used by [`ArrayList::new`].
pub const DEFAULT_CAPACITY: usize = 10;

/// A growable list backed by one contiguous heap block.
///
/// Elements occupy the first [`size`](List::size) slots of the block in
/// positional order. When an append or insert finds every slot occupied,
/// the block is replaced by one about 1.5 times larger and the elements are
/// moved over. The block never shrinks.
///
/// All access goes through the [`List`] trait, whose positional operations
/// return [`ListError`] instead of panicking.
///
/// # Examples
///
/// ```
/// use arraylist::{ArrayList, List};
///
/// let mut list = ArrayList::with_capacity(2).unwrap();
/// list.add(1);
/// list.add(2);
/// assert_eq!(list.capacity(), 2);
///
/// // The third element does not fit, the block grows.
/// list.add(3);
/// assert_eq!(list.capacity(), 3);
/// assert_eq!(list, [1, 2, 3]);
///
/// assert_eq!(list.remove(1), Ok(2));
/// assert_eq!(list, [1, 3]);
/// ```
pub struct ArrayList<T> {
    data: Box<[MaybeUninit<T>]>,
    len: usize,
}

impl<T> Drop for ArrayList<T> {
    // Slots are `MaybeUninit`, live elements must be dropped manually.
    fn drop(&mut self) {
        if self.len > 0 {
            // SAFETY: the first `len` slots are initialized.
            unsafe {
                ptr::drop_in_place(ptr::slice_from_raw_parts_mut(self.as_mut_ptr(), self.len));
            }
        }
    }
}

/// Creates an [`ArrayList`] containing the arguments.
///
/// The syntax is similar to [`vec!`](https://doc.rust-lang.org/std/macro.vec.html).
///
/// Without arguments it is equal to [`ArrayList::new`]. Otherwise the
/// capacity is exactly the number of elements.
///
/// # Examples
///
/// ```
/// # use arraylist::{arraylist, ArrayList, List};
/// let list: ArrayList<String> = arraylist![];
/// assert_eq!(list.capacity(), 10);
///
/// let list = arraylist![0u8; 4];
/// assert_eq!(list, [0, 0, 0, 0]);
///
/// let list = arraylist!['a', 'b'];
/// assert_eq!(list.size(), 2);
/// ```
#[macro_export]
macro_rules! arraylist {
    [] => { $crate::ArrayList::new() };
    [$elem:expr; $n:expr] => { $crate::ArrayList::from_elem($elem, $n) };
    [$($item:expr),+ $(,)?] => { $crate::ArrayList::from_buf([ $($item),+ ]) };
}

impl<T> ArrayList<T> {
    /// Constructs an empty list with room for [`DEFAULT_CAPACITY`] elements.
    ///
    /// # Examples
    ///
    /// ```
    /// # use arraylist::{ArrayList, List};
    /// let list: ArrayList<i32> = ArrayList::new();
    /// assert!(list.is_empty());
    /// assert_eq!(list.capacity(), 10);
    /// ```
    #[inline]
    pub fn new() -> Self {
        Self {
            data: alloc_slots(DEFAULT_CAPACITY),
            len: 0,
        }
    }

    /// Constructs an empty list with room for exactly `capacity` elements.
    ///
    /// A capacity of zero is allowed, the first append then grows the block.
    ///
    /// # Errors
    /// [`ListError::InvalidArgument`] if `capacity` slots of `T` would exceed
    /// `isize::MAX` bytes.
    ///
    /// # Examples
    ///
    /// ```
    /// # use arraylist::{ArrayList, ListError};
    /// let list = ArrayList::<u64>::with_capacity(0).unwrap();
    /// assert_eq!(list.capacity(), 0);
    ///
    /// let err = ArrayList::<u64>::with_capacity(usize::MAX).unwrap_err();
    /// assert_eq!(err, ListError::InvalidArgument { capacity: usize::MAX });
    /// ```
    pub fn with_capacity(capacity: usize) -> Result<Self, ListError> {
        if !layout_fits::<T>(capacity) {
            cold_path();
            tracing::debug!(capacity, "rejected list capacity");
            return Err(ListError::InvalidArgument { capacity });
        }

        Ok(Self {
            data: alloc_slots(capacity),
            len: 0,
        })
    }

    /// Creates a list from an array, with capacity equal to its length.
    ///
    /// # Examples
    /// ```
    /// # use arraylist::ArrayList;
    /// let list = ArrayList::from_buf([1, 2, 3]);
    /// assert_eq!(list.capacity(), 3);
    /// assert_eq!(list, [1, 2, 3]);
    /// ```
    pub fn from_buf<const N: usize>(arr: [T; N]) -> Self {
        let arr = ManuallyDrop::new(arr);
        let mut list = Self {
            data: alloc_slots(N),
            len: 0,
        };

        // SAFETY: the block holds `N` slots and `arr` will not be dropped.
        unsafe {
            ptr::copy_nonoverlapping(arr.as_ptr(), list.as_mut_ptr(), N);
        }
        list.len = N;
        list
    }

    /// Returns the number of allocated slots.
    ///
    /// Never less than [`size`](List::size), never decreases.
    #[inline(always)]
    pub fn capacity(&self) -> usize {
        self.data.len()
    }

    /// Extracts a slice of the live elements.
    ///
    /// # Examples
    /// ```
    /// # use arraylist::{arraylist, List};
    /// let mut list = arraylist![1, 2];
    /// list.add(3);
    /// assert_eq!(list.as_slice(), &[1, 2, 3]);
    /// ```
    #[inline]
    pub fn as_slice(&self) -> &[T] {
        // SAFETY: the first `len` slots are initialized.
        unsafe { slice::from_raw_parts(self.as_ptr(), self.len) }
    }

    /// Drops every element, keeping the allocated block.
    ///
    /// # Examples
    /// ```
    /// # use arraylist::{arraylist, List};
    /// let mut list = arraylist![1, 2, 3];
    /// list.clear();
    /// assert!(list.is_empty());
    /// assert_eq!(list.capacity(), 3);
    /// ```
    #[inline]
    pub fn clear(&mut self) {
        self.truncate(0);
    }

    /// Drops every element at or after `len`. No effect if `len >= size`.
    fn truncate(&mut self, len: usize) {
        if self.len > len {
            let tail = self.len - len;
            // Length first, so a panicking destructor cannot cause a double drop.
            self.len = len;
            // SAFETY: slots `[len, len + tail)` were initialized and are no longer tracked.
            unsafe {
                ptr::drop_in_place(ptr::slice_from_raw_parts_mut(
                    self.as_mut_ptr().add(len),
                    tail,
                ));
            }
        }
    }

    #[inline(always)]
    fn as_ptr(&self) -> *const T {
        self.data.as_ptr() as *const T
    }

    #[inline(always)]
    fn as_mut_ptr(&mut self) -> *mut T {
        self.data.as_mut_ptr() as *mut T
    }

    /// Makes room for one more element.
    #[inline(always)]
    fn reserve_one(&mut self) {
        if self.len == self.capacity() {
            self.grow();
        }
    }

    /// Moves the elements into a block about 1.5 times larger.
    #[cold]
    #[inline(never)]
    fn grow(&mut self) {
        debug_assert_eq!(self.len, self.capacity());

        let old_capacity = self.capacity();
        let new_capacity = grown_capacity(self.len);
        assert!(layout_fits::<T>(new_capacity), "capacity overflow");

        let mut data = alloc_slots::<T>(new_capacity);
        // SAFETY: the first `len` slots are initialized and the new block is larger.
        // The old block is released without dropping, ownership moved with the bits.
        unsafe {
            ptr::copy_nonoverlapping(self.as_ptr(), data.as_mut_ptr() as *mut T, self.len);
        }
        self.data = data;

        tracing::trace!(old_capacity, new_capacity, "growing list storage");
    }

    /// Validates `index < len`.
    #[inline(always)]
    fn check_index(&self, index: usize) -> Result<(), ListError> {
        if index < self.len {
            Ok(())
        } else {
            cold_path();
            Err(self.out_of_bounds(index))
        }
    }

    fn out_of_bounds(&self, index: usize) -> ListError {
        tracing::debug!(index, size = self.len, "list index out of bounds");
        ListError::IndexOutOfBounds {
            index,
            size: self.len,
        }
    }
}

impl<T: Clone> ArrayList<T> {
    /// Creates a list holding `num` clones of `elem`, with capacity `num`.
    ///
    /// # Panics
    /// Panics if `num` slots of `T` exceed `isize::MAX` bytes.
    ///
    /// # Examples
    /// ```
    /// # use arraylist::ArrayList;
    /// let list = ArrayList::from_elem("x", 3);
    /// assert_eq!(list, ["x", "x", "x"]);
    /// ```
    pub fn from_elem(elem: T, num: usize) -> Self {
        assert!(layout_fits::<T>(num), "capacity overflow");

        let mut list = Self {
            data: alloc_slots(num),
            len: 0,
        };
        for _ in 0..num {
            // SAFETY: `len < num == capacity`.
            unsafe {
                ptr::write(list.as_mut_ptr().add(list.len), elem.clone());
            }
            list.len += 1;
        }
        list
    }
}

impl<T> List<T> for ArrayList<T> {
    /// Appends an element to the end of the list.
    ///
    /// # Time complexity
    /// Amortized O(1). When the block is full, O(size) to move the elements
    /// to a larger block.
    ///
    /// # Panics
    /// Panics if the grown capacity overflows.
    #[inline]
    fn add(&mut self, value: T) {
        self.reserve_one();

        // SAFETY: `len < capacity` after `reserve_one`.
        unsafe {
            ptr::write(self.as_mut_ptr().add(self.len), value);
        }
        self.len += 1;
    }

    /// Inserts an element at `index`, shifting every later element one position right.
    ///
    /// The index is checked before the block grows, a rejected call does not allocate.
    ///
    /// # Examples
    /// ```
    /// # use arraylist::{arraylist, List};
    /// let mut list = arraylist!['a', 'c'];
    /// list.add_at('b', 1).unwrap();
    /// list.add_at('d', 3).unwrap();
    /// assert_eq!(list, ['a', 'b', 'c', 'd']);
    /// assert!(list.add_at('z', 5).is_err());
    /// ```
    fn add_at(&mut self, value: T, index: usize) -> Result<(), ListError> {
        if index > self.len {
            cold_path();
            return Err(self.out_of_bounds(index));
        }

        self.reserve_one();

        // SAFETY: `index <= len < capacity`, the tail moves into the free slot.
        unsafe {
            let ptr = self.as_mut_ptr().add(index);
            if index < self.len {
                ptr::copy(ptr, ptr.add(1), self.len - index);
            }
            ptr::write(ptr, value);
        }
        self.len += 1;
        Ok(())
    }

    /// Appends clones of every element of `list`, in its order.
    ///
    /// If reading `list` fails midway, the elements appended so far are
    /// dropped again before the error is returned.
    ///
    /// # Examples
    /// ```
    /// # use arraylist::{arraylist, List, ListError};
    /// let mut list = arraylist![1];
    /// let other = arraylist![2, 3];
    /// list.add_all(Some(&other)).unwrap();
    /// assert_eq!(list, [1, 2, 3]);
    ///
    /// assert_eq!(list.add_all(None), Err(ListError::NullReference));
    /// ```
    fn add_all(&mut self, list: Option<&dyn List<T>>) -> Result<(), ListError>
    where
        T: Clone,
    {
        let Some(list) = list else {
            cold_path();
            tracing::debug!("bulk append from an absent list");
            return Err(ListError::NullReference);
        };

        let start = self.len;
        for index in 0..list.size() {
            match list.get(index) {
                Ok(value) => self.add(value.clone()),
                Err(err) => {
                    cold_path();
                    self.truncate(start);
                    return Err(err);
                }
            }
        }
        Ok(())
    }

    #[inline]
    fn get(&self, index: usize) -> Result<&T, ListError> {
        self.check_index(index)?;
        // SAFETY: `index < len`.
        Ok(unsafe { &*self.as_ptr().add(index) })
    }

    #[inline]
    fn set(&mut self, value: T, index: usize) -> Result<(), ListError> {
        self.check_index(index)?;
        // SAFETY: `index < len`, the assignment drops the old element.
        unsafe {
            *self.as_mut_ptr().add(index) = value;
        }
        Ok(())
    }

    /// Removes and returns the element at `index`, shifting every later element one position left.
    ///
    /// # Time complexity
    /// O(size - index).
    fn remove(&mut self, index: usize) -> Result<T, ListError> {
        self.check_index(index)?;

        // SAFETY: `index < len`; the vacated last slot is no longer tracked.
        unsafe {
            let ptr = self.as_mut_ptr().add(index);
            let value = ptr::read(ptr);
            ptr::copy(ptr.add(1), ptr, self.len - index - 1);
            self.len -= 1;
            Ok(value)
        }
    }

    /// Removes and returns the first element equal to `element`.
    ///
    /// # Examples
    /// ```
    /// # use arraylist::{arraylist, List, ListError};
    /// let mut list = arraylist![Some(1), None, Some(2), None];
    /// assert_eq!(list.remove_element(&None), Ok(None));
    /// assert_eq!(list, [Some(1), Some(2), None]);
    /// assert_eq!(list.remove_element(&Some(5)), Err(ListError::ElementNotFound));
    /// ```
    fn remove_element(&mut self, element: &T) -> Result<T, ListError>
    where
        T: PartialEq,
    {
        let position = self.as_slice().iter().position(|item| item == element);
        match position {
            Some(index) => self.remove(index),
            None => {
                cold_path();
                tracing::debug!(size = self.len, "element to remove not found");
                Err(ListError::ElementNotFound)
            }
        }
    }

    #[inline(always)]
    fn size(&self) -> usize {
        self.len
    }

    #[inline(always)]
    fn is_empty(&self) -> bool {
        self.len == 0
    }
}

impl<T> Default for ArrayList<T> {
    /// Equal to [`ArrayList::new`].
    #[inline]
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Clone> Clone for ArrayList<T> {
    /// Clones the elements into a block of the same capacity.
    fn clone(&self) -> Self {
        let mut list = Self {
            data: alloc_slots(self.capacity()),
            len: 0,
        };
        for item in self.as_slice() {
            // SAFETY: `list.len < self.len <= capacity`. `len` tracks each
            // write so a panicking `clone` drops only initialized slots.
            unsafe {
                ptr::write(list.as_mut_ptr().add(list.len), item.clone());
            }
            list.len += 1;
        }
        list
    }
}

impl<T: fmt::Debug> fmt::Debug for ArrayList<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(self.as_slice(), f)
    }
}

impl<T, U> PartialEq<ArrayList<U>> for ArrayList<T>
where
    T: PartialEq<U>,
{
    #[inline]
    fn eq(&self, other: &ArrayList<U>) -> bool {
        self.as_slice() == other.as_slice()
    }
}

impl<T: Eq> Eq for ArrayList<T> {}

impl<T, U> PartialEq<[U]> for ArrayList<T>
where
    T: PartialEq<U>,
{
    #[inline]
    fn eq(&self, other: &[U]) -> bool {
        self.as_slice() == other
    }
}

impl<T, U> PartialEq<&[U]> for ArrayList<T>
where
    T: PartialEq<U>,
{
    #[inline]
    fn eq(&self, other: &&[U]) -> bool {
        self.as_slice() == *other
    }
}

impl<T, U, const N: usize> PartialEq<[U; N]> for ArrayList<T>
where
    T: PartialEq<U>,
{
    #[inline]
    fn eq(&self, other: &[U; N]) -> bool {
        self.as_slice() == other.as_slice()
    }
}
