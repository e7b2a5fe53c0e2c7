//! Unbalanced binary search tree over car prices.
//!
//! Nodes hold `(price, CarId)` keys, never the records themselves. Cars with
//! equal prices go to the right subtree, so an in-order walk yields equal
//! prices in insertion order. There is no rebalancing: the tree shape is
//! whatever the insertion order makes it.

use crate::model::CarId;

struct PriceNode {
    price: f64,
    car: CarId,
    left: Option<Box<PriceNode>>,
    right: Option<Box<PriceNode>>,
}

impl PriceNode {
    fn new(price: f64, car: CarId) -> Self {
        Self {
            price,
            car,
            left: None,
            right: None,
        }
    }
}

/// Price-ordered index of car identifiers.
///
/// Sorted inserts build a chain as deep as the inventory, so every walk over
/// the tree (drop included) is a loop rather than recursion.
#[derive(Default)]
pub struct PriceIndex {
    root: Option<Box<PriceNode>>,
    len: usize,
}

impl PriceIndex {
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts a key. Prices not less than a node's price descend to the right.
    pub fn insert(&mut self, price: f64, car: CarId) {
        let mut link = &mut self.root;
        while let Some(node) = link {
            link = if price < node.price {
                &mut node.left
            } else {
                &mut node.right
            };
        }
        *link = Some(Box::new(PriceNode::new(price, car)));
        self.len += 1;
    }

    /// Removes the node for `car`, which must have been inserted with `price`.
    ///
    /// Returns `false` when no such node exists.
    pub fn remove(&mut self, price: f64, car: CarId) -> bool {
        let mut link = &mut self.root;
        loop {
            let go_left = match link.as_deref() {
                None => return false,
                Some(node) if node.car == car => break,
                Some(node) => price < node.price,
            };
            let Some(node) = link.as_mut() else {
                return false;
            };
            link = if go_left { &mut node.left } else { &mut node.right };
        }

        let Some(mut node) = link.take() else {
            return false;
        };
        *link = match (node.left.take(), node.right.take()) {
            (None, None) => None,
            (Some(left), None) => Some(left),
            (None, Some(right)) => Some(right),
            (Some(left), Some(right)) => {
                // Promote the in-order successor; it is not less than anything on the left.
                let mut rest = Some(right);
                match Self::take_min(&mut rest) {
                    Some(mut successor) => {
                        successor.left = Some(left);
                        successor.right = rest;
                        Some(successor)
                    }
                    None => Some(left),
                }
            }
        };
        self.len -= 1;
        true
    }

    /// Unlinks the leftmost node under `link`, splicing its right child into its place.
    fn take_min(mut link: &mut Option<Box<PriceNode>>) -> Option<Box<PriceNode>> {
        while link.as_ref()?.left.is_some() {
            link = &mut link.as_mut()?.left;
        }
        let mut min = link.take()?;
        *link = min.right.take();
        Some(min)
    }

    /// Lazily walks the tree in ascending price order.
    ///
    /// Each call starts a fresh walk over the current tree.
    pub fn in_order(&self) -> InOrder<'_> {
        InOrder::new(self.root.as_deref())
    }

    pub fn contains(&self, car: CarId) -> bool {
        self.in_order().any(|id| id == car)
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Number of nodes on the longest root-to-leaf path.
    pub fn depth(&self) -> usize {
        let mut deepest = 0;
        let mut stack: Vec<(&PriceNode, usize)> = self.root.as_deref().map(|n| (n, 1)).into_iter().collect();
        while let Some((node, depth)) = stack.pop() {
            deepest = deepest.max(depth);
            for child in [node.left.as_deref(), node.right.as_deref()].into_iter().flatten() {
                stack.push((child, depth + 1));
            }
        }
        deepest
    }
}

impl Drop for PriceIndex {
    fn drop(&mut self) {
        let mut stack: Vec<Box<PriceNode>> = self.root.take().into_iter().collect();
        while let Some(mut node) = stack.pop() {
            stack.extend(node.left.take());
            stack.extend(node.right.take());
        }
    }
}

impl std::fmt::Debug for PriceIndex {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PriceIndex")
            .field("len", &self.len)
            .finish_non_exhaustive()
    }
}

/// In-order iterator over a [`PriceIndex`], driven by an explicit stack.
pub struct InOrder<'a> {
    stack: Vec<&'a PriceNode>,
}

impl<'a> InOrder<'a> {
    fn new(root: Option<&'a PriceNode>) -> Self {
        let mut iter = Self { stack: Vec::new() };
        iter.push_left_spine(root);
        iter
    }

    fn push_left_spine(&mut self, mut node: Option<&'a PriceNode>) {
        while let Some(n) = node {
            self.stack.push(n);
            node = n.left.as_deref();
        }
    }
}

impl Iterator for InOrder<'_> {
    type Item = CarId;

    fn next(&mut self) -> Option<CarId> {
        let node = self.stack.pop()?;
        self.push_left_spine(node.right.as_deref());
        Some(node.car)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn build(prices: &[f64]) -> PriceIndex {
        let mut index = PriceIndex::new();
        for (i, price) in prices.iter().enumerate() {
            index.insert(*price, CarId(i as u32 + 1));
        }
        index
    }

    fn ids(index: &PriceIndex) -> Vec<u32> {
        index.in_order().map(|id| id.0).collect()
    }

    #[test]
    fn test_in_order_sorts_by_price() {
        let index = build(&[25000.0, 22000.0, 55000.0, 45000.0, 18000.0]);
        assert_eq!(ids(&index), vec![5, 2, 1, 4, 3]);
        assert_eq!(index.len(), 5);
    }

    #[test]
    fn test_equal_prices_keep_insertion_order() {
        let index = build(&[100.0, 100.0, 100.0]);
        assert_eq!(ids(&index), vec![1, 2, 3]);
        // Every tie goes right, so the tree degenerates into a chain.
        assert_eq!(index.depth(), 3);
    }

    #[test]
    fn test_monotonic_inserts_degenerate() {
        let increasing = build(&[1.0, 2.0, 3.0, 4.0]);
        let decreasing = build(&[4.0, 3.0, 2.0, 1.0]);
        assert_eq!(increasing.depth(), 4);
        assert_eq!(decreasing.depth(), 4);
        assert_eq!(ids(&decreasing), vec![4, 3, 2, 1]);
    }

    #[test]
    fn test_remove_leaf_inner_and_root() {
        let mut index = build(&[50.0, 30.0, 70.0, 20.0, 40.0, 60.0, 80.0]);

        assert!(index.remove(20.0, CarId(4)));
        assert_eq!(ids(&index), vec![2, 5, 1, 6, 3, 7]);

        assert!(index.remove(70.0, CarId(3)));
        assert_eq!(ids(&index), vec![2, 5, 1, 6, 7]);

        assert!(index.remove(50.0, CarId(1)));
        assert_eq!(ids(&index), vec![2, 5, 6, 7]);
        assert_eq!(index.len(), 4);
    }

    #[test]
    fn test_remove_among_equal_prices() {
        let mut index = build(&[10.0, 10.0, 10.0]);
        assert!(index.remove(10.0, CarId(2)));
        assert_eq!(ids(&index), vec![1, 3]);
        assert!(!index.remove(10.0, CarId(2)));
    }

    #[test]
    fn test_remove_missing_is_noop() {
        let mut index = build(&[10.0]);
        assert!(!index.remove(10.0, CarId(9)));
        assert!(!PriceIndex::new().remove(1.0, CarId(1)));
        assert_eq!(index.len(), 1);
    }

    #[test]
    fn test_deep_chain_survives_a_small_stack() {
        const CARS: u32 = 20_000;
        // Tokio worker threads default to 2 MiB.
        let worker = std::thread::Builder::new()
            .stack_size(2 * 1024 * 1024)
            .spawn(|| {
                let mut index = PriceIndex::new();
                for i in 1..=CARS {
                    index.insert(f64::from(i), CarId(i));
                }
                assert_eq!(index.depth(), CARS as usize);
                assert!(index.remove(f64::from(CARS / 2), CarId(CARS / 2)));
                assert!(index.remove(1.0, CarId(1)));
                assert_eq!(index.len(), CARS as usize - 2);
                assert_eq!(index.in_order().next(), Some(CarId(2)));
                drop(index);
            })
            .unwrap();
        worker.join().unwrap();
    }

    #[test]
    fn test_remove_node_with_two_children_deep_successor() {
        let mut index = build(&[50.0, 30.0, 90.0, 70.0, 60.0, 65.0]);
        assert!(index.remove(50.0, CarId(1)));
        assert_eq!(ids(&index), vec![2, 5, 6, 4, 3]);
        assert_eq!(index.len(), 5);
    }

    #[test]
    fn test_traversal_is_restartable() {
        let index = build(&[3.0, 1.0, 2.0]);
        let first: Vec<_> = index.in_order().collect();
        let second: Vec<_> = index.in_order().collect();
        assert_eq!(first, second);
    }
}
