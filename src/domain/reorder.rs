/// Moves one element of a sequence to a new index, returning a new vector.
///
/// The element at `from` is removed and reinserted at `to`; everything in
/// between shifts by one. `to` past the end appends. An out-of-range `from`
/// yields an unchanged copy.
///
/// # Examples
/// ```
/// use stageboard_core::domain::reorder::array_move;
///
/// let moved = array_move(&["a", "b", "c", "d"], 0, 2);
/// assert_eq!(moved, vec!["b", "c", "a", "d"]);
///
/// let moved = array_move(&["a", "b", "c", "d"], 3, 1);
/// assert_eq!(moved, vec!["a", "d", "b", "c"]);
/// ```
pub fn array_move<T: Clone>(items: &[T], from: usize, to: usize) -> Vec<T> {
    let mut moved = items.to_vec();
    if from >= moved.len() {
        return moved;
    }

    let item = moved.remove(from);
    let to = to.min(moved.len());
    moved.insert(to, item);
    moved
}
