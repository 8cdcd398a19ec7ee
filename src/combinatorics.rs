//! Parameter-position combinations.
//!
//! The `bind` family emits one function per subset of parameter positions.
//! This module enumerates those subsets and their complements.
//!
//! Positions are one-based, matching the generated parameter names
//! (`t1`, `t2`, ...). Every combination is ascending, and combinations are
//! produced in lexicographic order, so generated files are stable from run
//! to run.

/// Returns every `size`-element subset of `pool`, preserving pool order.
///
/// `pool` is expected to be ascending; each returned combination then is
/// ascending as well. A `size` of zero yields a single empty combination,
/// and a `size` larger than the pool yields none.
///
/// # Examples
///
/// ```
/// use fpgen::combinatorics::combinations_of;
///
/// assert_eq!(
///     combinations_of(&[2, 4, 6], 2),
///     vec![vec![2, 4], vec![2, 6], vec![4, 6]]
/// );
/// ```
pub fn combinations_of(pool: &[usize], size: usize) -> Vec<Vec<usize>> {
    if size == 0 {
        return vec![Vec::new()];
    }
    if size > pool.len() {
        return Vec::new();
    }

    pool.iter()
        .enumerate()
        .flat_map(|(index, &head)| {
            combinations_of(&pool[index + 1..], size - 1)
                .into_iter()
                .map(move |tail| {
                    let mut combination = Vec::with_capacity(size);
                    combination.push(head);
                    combination.extend(tail);
                    combination
                })
        })
        .collect()
}

/// Returns every `size`-element subset of the positions `1..=arity`.
///
/// # Examples
///
/// ```
/// use fpgen::combinatorics::combinations;
///
/// assert_eq!(combinations(3, 1), vec![vec![1], vec![2], vec![3]]);
/// assert_eq!(combinations(3, 3), vec![vec![1, 2, 3]]);
/// ```
pub fn combinations(arity: usize, size: usize) -> Vec<Vec<usize>> {
    let pool: Vec<usize> = (1..=arity).collect();
    combinations_of(&pool, size)
}

/// Returns the ascending positions of `1..=arity` that are not in `combination`.
///
/// # Examples
///
/// ```
/// use fpgen::combinatorics::complement;
///
/// assert_eq!(complement(4, &[1, 3]), vec![2, 4]);
/// ```
pub fn complement(arity: usize, combination: &[usize]) -> Vec<usize> {
    (1..=arity)
        .filter(|position| !combination.contains(position))
        .collect()
}

/// A subset of the parameter positions of a function with `arity` parameters.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Combination {
    arity: usize,
    positions: Vec<usize>,
}

impl Combination {
    /// Every combination of exactly `size` positions out of `1..=arity`.
    pub fn all_of_size(arity: usize, size: usize) -> Vec<Self> {
        combinations(arity, size)
            .into_iter()
            .map(|positions| Self { arity, positions })
            .collect()
    }

    /// Every non-empty combination of `1..=arity`, smallest subsets first.
    pub fn all(arity: usize) -> Vec<Self> {
        (1..=arity)
            .flat_map(|size| Self::all_of_size(arity, size))
            .collect()
    }

    /// The arity of the function this combination refers to.
    pub const fn arity(&self) -> usize {
        self.arity
    }

    /// The chosen positions, ascending.
    pub fn positions(&self) -> &[usize] {
        &self.positions
    }

    /// Whether `position` is part of this combination.
    pub fn contains(&self, position: usize) -> bool {
        self.positions.contains(&position)
    }

    /// The positions not chosen, ascending.
    pub fn complement(&self) -> Vec<usize> {
        complement(self.arity, &self.positions)
    }

    /// The positions joined with `_`, as used in generated names (`1_3`).
    pub fn label(&self) -> String {
        self.positions
            .iter()
            .map(ToString::to_string)
            .collect::<Vec<_>>()
            .join("_")
    }
}
