/// Creates a [`Vector`](crate::collections::contiguous::Vector) from a list of values, or from a
/// value and a count.
///
/// - `vector![]` creates an empty Vector with the default capacity.
/// - `vector![a, b, c]` creates a Vector holding the values in order, with the default capacity or
///   exactly the number of values, whichever is larger.
/// - `vector![value; n]` creates a Vector holding `n` clones of `value`, with capacity exactly `n`.
///
/// # Examples
/// ```
/// # use standard_containers::vector;
/// let list = vector![1, 2, 3];
/// assert_eq!(&*list, &[1, 2, 3]);
/// assert_eq!(list.cap(), 10);
///
/// let filled = vector![0_u8; 4];
/// assert_eq!(&*filled, &[0, 0, 0, 0]);
/// assert_eq!(filled.cap(), 4);
/// ```
#[macro_export]
macro_rules! vector {
    () => {
        $crate::collections::contiguous::Vector::new()
    };
    ($elem:expr; $n:expr) => {
        $crate::collections::contiguous::Vector::from_elem($elem, $n)
    };
    ($($x:expr),+ $(,)?) => {
        $crate::collections::contiguous::Vector::from([$($x),+])
    };
}
