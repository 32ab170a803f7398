use crate::storage::relation::Relation;
use crate::storage::tuple::concat;

/// Concatenates every tuple of `left` with every tuple of `right`, left
/// attributes first. `O` must equal `A + B`; any other output arity is
/// rejected at compile time.
///
/// Both inputs are sets, so distinct pairs always give distinct
/// concatenations and the output holds exactly `|left| * |right|` tuples.
pub fn cross_product<const A: usize, const B: usize, const O: usize>(
    left: &Relation<A>,
    right: &Relation<B>,
) -> Relation<O> {
    let mut output = Relation::new();
    for l in left {
        for r in right {
            output.insert(concat(l, r));
        }
    }

    tracing::debug!(
        "Cross product: {} x {} -> {} tuples",
        left.tuple_count(),
        right.tuple_count(),
        output.tuple_count()
    );
    output
}
