// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Read-only, pre-order traversal over a predictive unit tree.
//!
//! All searches are built on [`PreOrder`], which walks the tree with an
//! explicit stack instead of recursion, so arbitrarily deep graphs cannot
//! overflow the call stack.
//!
//! # Algorithm
//!
//! 1. Push the root onto the stack
//! 2. Pop a unit and yield it
//! 3. Push its children in reverse order so the leftmost child is popped next
//! 4. Repeat until the stack is empty
//!
//! **Time Complexity**: O(n) where n = number of units
//! **Space Complexity**: O(w) extra, w = sum of pending siblings along the current path
//!
//! # Duplicate names
//!
//! Unit names are supposed to be unique within a tree. When they are not, the
//! searches still return the *first* match in pre-order and never report an
//! error. Use `config::validate_deployment` to detect duplicates up front.

use crate::graph::PredictiveUnit;

/// Pre-order iterator over a unit and all of its descendants.
///
/// ```
/// use seldon_topology::graph::{PredictiveUnit, PreOrder};
///
/// let tree = PredictiveUnit::new("a").with_children(vec![
///     PredictiveUnit::new("b"),
///     PredictiveUnit::new("c").with_children(vec![PredictiveUnit::new("d")]),
/// ]);
///
/// let names: Vec<&str> = PreOrder::new(&tree).map(|u| u.name.as_str()).collect();
/// assert_eq!(names, vec!["a", "b", "c", "d"]);
/// ```
#[derive(Debug, Clone)]
pub struct PreOrder<'a> {
    stack: Vec<&'a PredictiveUnit>,
}

impl<'a> PreOrder<'a> {
    pub fn new(root: &'a PredictiveUnit) -> Self {
        Self { stack: vec![root] }
    }
}

impl<'a> Iterator for PreOrder<'a> {
    type Item = &'a PredictiveUnit;

    fn next(&mut self) -> Option<Self::Item> {
        let unit = self.stack.pop()?;
        self.stack.extend(unit.children.iter().rev());
        Some(unit)
    }
}

impl PredictiveUnit {
    /// Iterate over this unit and its descendants in pre-order.
    pub fn iter(&self) -> PreOrder<'_> {
        PreOrder::new(self)
    }

    /// Number of units in this subtree, including this one.
    pub fn unit_count(&self) -> usize {
        self.iter().count()
    }
}

impl<'a> IntoIterator for &'a PredictiveUnit {
    type Item = &'a PredictiveUnit;
    type IntoIter = PreOrder<'a>;

    fn into_iter(self) -> Self::IntoIter {
        PreOrder::new(self)
    }
}

/// Find the first unit in pre-order whose name equals `name`.
///
/// Returns `None` when no unit in the subtree carries that name.
///
/// ```
/// use seldon_topology::graph::{find_unit_by_name, PredictiveUnit};
///
/// let tree = PredictiveUnit::new("a").with_children(vec![
///     PredictiveUnit::new("b"),
///     PredictiveUnit::new("c").with_children(vec![PredictiveUnit::new("d")]),
/// ]);
///
/// assert_eq!(find_unit_by_name(&tree, "d").map(|u| u.name.as_str()), Some("d"));
/// assert!(find_unit_by_name(&tree, "z").is_none());
/// ```
pub fn find_unit_by_name<'a>(root: &'a PredictiveUnit, name: &str) -> Option<&'a PredictiveUnit> {
    root.iter().find(|unit| unit.name == name)
}

/// Find the unit co-located with the execution engine.
///
/// This is the first unit in pre-order whose endpoint host is `localhost`.
/// Units without an endpoint never match.
pub fn find_local_engine_unit(root: &PredictiveUnit) -> Option<&PredictiveUnit> {
    root.iter().find(|unit| unit.is_local_engine())
}

/// Every unit of the subtree, root first, each child subtree fully before
/// its next sibling.
pub fn flatten_tree(root: &PredictiveUnit) -> Vec<&PredictiveUnit> {
    root.iter().collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::Endpoint;

    fn names<'a>(units: &[&'a PredictiveUnit]) -> Vec<&'a str> {
        units.iter().map(|u| u.name.as_str()).collect()
    }

    /// A(B, C(D))
    fn sample_tree() -> PredictiveUnit {
        PredictiveUnit::new("A").with_children(vec![
            PredictiveUnit::new("B"),
            PredictiveUnit::new("C").with_children(vec![PredictiveUnit::new("D")]),
        ])
    }

    #[test]
    fn flatten_is_pre_order() {
        let tree = sample_tree();
        assert_eq!(names(&flatten_tree(&tree)), vec!["A", "B", "C", "D"]);
    }

    #[test]
    fn flatten_visits_subtrees_before_siblings() {
        // A(B(E, F(G)), C, D(H))
        let tree = PredictiveUnit::new("A").with_children(vec![
            PredictiveUnit::new("B").with_children(vec![
                PredictiveUnit::new("E"),
                PredictiveUnit::new("F").with_children(vec![PredictiveUnit::new("G")]),
            ]),
            PredictiveUnit::new("C"),
            PredictiveUnit::new("D").with_children(vec![PredictiveUnit::new("H")]),
        ]);

        assert_eq!(
            names(&flatten_tree(&tree)),
            vec!["A", "B", "E", "F", "G", "C", "D", "H"]
        );
        assert_eq!(tree.unit_count(), 8);
    }

    #[test]
    fn flatten_single_unit() {
        let tree = PredictiveUnit::new("solo");
        assert_eq!(names(&flatten_tree(&tree)), vec!["solo"]);
    }

    #[test]
    fn flatten_size_is_one_plus_subtrees() {
        let tree = sample_tree();
        let expected = 1 + tree.children.iter().map(|c| c.unit_count()).sum::<usize>();
        assert_eq!(flatten_tree(&tree).len(), expected);
    }

    #[test]
    fn find_by_name_hits_and_misses() {
        let tree = sample_tree();

        assert_eq!(find_unit_by_name(&tree, "A").unwrap().name, "A");
        assert_eq!(find_unit_by_name(&tree, "D").unwrap().name, "D");
        assert!(find_unit_by_name(&tree, "Z").is_none());
    }

    #[test]
    fn find_by_name_returns_first_pre_order_duplicate() {
        let mut first = PredictiveUnit::new("dup");
        first.model_uri = "first".to_string();
        let mut second = PredictiveUnit::new("dup");
        second.model_uri = "second".to_string();

        let tree = PredictiveUnit::new("root").with_children(vec![
            PredictiveUnit::new("left").with_children(vec![first]),
            second,
        ]);

        assert_eq!(find_unit_by_name(&tree, "dup").unwrap().model_uri, "first");
    }

    #[test]
    fn local_engine_not_found_without_localhost() {
        let tree = PredictiveUnit::new("A").with_children(vec![
            PredictiveUnit::new("B").with_endpoint(Endpoint::new("b-svc", 9000)),
            PredictiveUnit::new("C"),
        ]);

        assert!(find_local_engine_unit(&tree).is_none());
    }

    #[test]
    fn local_engine_returns_first_match() {
        let tree = PredictiveUnit::new("A").with_children(vec![
            PredictiveUnit::new("B").with_children(vec![
                PredictiveUnit::new("E").with_endpoint(Endpoint::new("localhost", 9001)),
            ]),
            PredictiveUnit::new("C").with_endpoint(Endpoint::new("localhost", 9000)),
        ]);

        assert_eq!(find_local_engine_unit(&tree).unwrap().name, "E");
    }

    #[test]
    fn local_engine_can_be_root() {
        let tree = PredictiveUnit::new("A")
            .with_endpoint(Endpoint::new("localhost", 9000))
            .with_children(vec![
                PredictiveUnit::new("B").with_endpoint(Endpoint::new("localhost", 9001)),
            ]);

        assert_eq!(find_local_engine_unit(&tree).unwrap().name, "A");
    }

    #[test]
    fn deep_tree_does_not_overflow() {
        let depth = 100_000;
        let mut tree = PredictiveUnit::new(format!("unit-{}", depth));
        for i in (0..depth).rev() {
            tree = PredictiveUnit::new(format!("unit-{}", i)).with_children(vec![tree]);
        }

        assert_eq!(flatten_tree(&tree).len(), depth + 1);
        assert_eq!(
            find_unit_by_name(&tree, &format!("unit-{}", depth)).unwrap().name,
            format!("unit-{}", depth)
        );

        drop(tree);
    }

    #[test]
    fn deep_and_wide_tree_drops_cleanly() {
        let mut tree = PredictiveUnit::new("leaf");
        for i in 0..50_000 {
            tree = PredictiveUnit::new(format!("unit-{}", i)).with_children(vec![
                tree,
                PredictiveUnit::new(format!("sibling-{}", i)),
            ]);
        }

        assert_eq!(tree.unit_count(), 100_001);
        drop(tree);
    }

    #[test]
    fn into_iterator_matches_iter() {
        let tree = sample_tree();
        let via_for: Vec<&str> = (&tree).into_iter().map(|u| u.name.as_str()).collect();
        assert_eq!(via_for, vec!["A", "B", "C", "D"]);
    }
}
