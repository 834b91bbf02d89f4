use crate::ListError;

/// An ordered sequence with checked positional access.
///
/// Every positional operation validates its index and reports
/// [`ListError::IndexOutOfBounds`] instead of panicking. A rejected call
/// leaves the list untouched.
///
/// The trait is object safe, so [`add_all`](List::add_all) can take any
/// implementation as its source.
///
/// # Examples
///
/// ```
/// use arraylist::{ArrayList, List, ListError};
///
/// let mut list = ArrayList::new();
/// list.add("b");
/// list.add_at("a", 0).unwrap();
///
/// assert_eq!(list.get(0), Ok(&"a"));
/// assert_eq!(list.size(), 2);
/// assert_eq!(list.get(2), Err(ListError::IndexOutOfBounds { index: 2, size: 2 }));
/// ```
pub trait List<T> {
    /// Appends an element to the end of the list.
    fn add(&mut self, value: T);

    /// Inserts an element at `index`, shifting every later element one position right.
    ///
    /// `index == size()` appends.
    ///
    /// # Errors
    /// [`ListError::IndexOutOfBounds`] if `index > size()`.
    fn add_at(&mut self, value: T, index: usize) -> Result<(), ListError>;

    /// Appends clones of every element of `list`, in its order.
    ///
    /// # Errors
    /// [`ListError::NullReference`] if `list` is `None`.
    fn add_all(&mut self, list: Option<&dyn List<T>>) -> Result<(), ListError>
    where
        T: Clone;

    /// Returns a reference to the element at `index`.
    ///
    /// # Errors
    /// [`ListError::IndexOutOfBounds`] if `index >= size()`.
    fn get(&self, index: usize) -> Result<&T, ListError>;

    /// Replaces the element at `index`, dropping the previous one.
    ///
    /// # Errors
    /// [`ListError::IndexOutOfBounds`] if `index >= size()`.
    fn set(&mut self, value: T, index: usize) -> Result<(), ListError>;

    /// Removes and returns the element at `index`, shifting every later element one position left.
    ///
    /// # Errors
    /// [`ListError::IndexOutOfBounds`] if `index >= size()`.
    fn remove(&mut self, index: usize) -> Result<T, ListError>;

    /// Removes and returns the first element equal to `element`.
    ///
    /// For lists of `Option<U>`, searching for `&None` matches the first `None`.
    ///
    /// # Errors
    /// [`ListError::ElementNotFound`] if no element is equal.
    fn remove_element(&mut self, element: &T) -> Result<T, ListError>
    where
        T: PartialEq;

    /// Returns the number of elements.
    fn size(&self) -> usize;

    /// Returns `true` if the list holds no elements.
    fn is_empty(&self) -> bool {
        self.size() == 0
    }
}
