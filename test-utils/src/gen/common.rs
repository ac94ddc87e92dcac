use std::collections::HashSet;

use proptest::{collection::hash_set, prelude::*};

macro_rules! int_strat {
    ($f:ident, $I:ty) => {
        pub fn $f(ovride: Option<BoxedStrategy<$I>>) -> BoxedStrategy<$I> {
            ovride.unwrap_or_else(|| (0..=<$I>::MAX).boxed())
        }
    };
}
int_strat!(u8_strat, u8);
int_strat!(u64_strat, u64);

/// `N` pubkeys, no two equal
pub fn distinct_pks_strat<const N: usize>() -> impl Strategy<Value = [[u8; 32]; N]> {
    hash_set(any::<[u8; 32]>(), N).prop_map(|set: HashSet<[u8; 32]>| {
        let mut it = set.into_iter();
        core::array::from_fn(|_| it.next().unwrap())
    })
}
