/// Hash set used throughout the crate, backed by `fxhash`.
pub type Set<S> = fxhash::FxHashSet<S>;
/// Hash map used throughout the crate, backed by `fxhash`.
pub type Map<K, V> = fxhash::FxHashMap<K, V>;

/// A one-to-one mapping between `L` and `R` that can be queried from either side. Used to
/// translate between state names and state indices.
pub type Bijection<L, R> = bimap::BiBTreeMap<L, R>;
