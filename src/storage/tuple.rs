/// A fixed-width row of signed integers. Arrays order lexicographically,
/// which gives relations their canonical iteration order.
pub type Tuple<const N: usize> = [i32; N];

/// Width in bytes of one tuple in a relation file.
pub const fn tuple_width<const N: usize>() -> usize {
    N * std::mem::size_of::<i32>()
}

pub(crate) fn concat<const A: usize, const B: usize, const O: usize>(
    left: &Tuple<A>,
    right: &Tuple<B>,
) -> Tuple<O> {
    const { assert!(A + B == O, "output arity must be the sum of the input arities") };
    let mut tuple = [0; O];
    tuple[..A].copy_from_slice(left);
    tuple[A..].copy_from_slice(right);
    tuple
}

pub(crate) fn pick<const I: usize, const O: usize>(tuple: &Tuple<I>, columns: &[usize; O]) -> Tuple<O> {
    let mut picked = [0; O];
    for (slot, &column) in picked.iter_mut().zip(columns) {
        *slot = tuple[column];
    }
    picked
}
