//! Fixed showroom workflow: Sales -> Finance -> Service -> Sales.

use crate::error::DealershipError;
use serde::{Deserialize, Serialize};
use std::collections::VecDeque;
use std::fmt::Display;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Department {
    Sales,
    Finance,
    Service,
}

impl Display for Department {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Department::Sales => "Sales",
            Department::Finance => "Finance",
            Department::Service => "Service",
        };
        f.write_str(name)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WorkflowNode {
    pub department: Department,
    /// Indices of the departments this one hands off to.
    pub successors: Vec<usize>,
}

/// Read-only three-node cycle. Nothing mutates it after construction.
#[derive(Debug, Clone)]
pub struct WorkflowGraph {
    nodes: Vec<WorkflowNode>,
}

impl Default for WorkflowGraph {
    fn default() -> Self {
        Self::new()
    }
}

impl WorkflowGraph {
    pub fn new() -> Self {
        let node = |department, successor| WorkflowNode {
            department,
            successors: vec![successor],
        };
        Self {
            nodes: vec![
                node(Department::Sales, 1),
                node(Department::Finance, 2),
                node(Department::Service, 0),
            ],
        }
    }

    pub fn nodes(&self) -> &[WorkflowNode] {
        &self.nodes
    }

    /// Breadth-first visit order starting at `start`.
    ///
    /// # Errors
    /// [`DealershipError::UnknownDepartment`] if `start` is not a node index.
    pub fn breadth_first_from(&self, start: usize) -> Result<Vec<Department>, DealershipError> {
        if start >= self.nodes.len() {
            return Err(DealershipError::UnknownDepartment(start));
        }

        let mut visited = vec![false; self.nodes.len()];
        let mut frontier = VecDeque::from([start]);
        let mut order = Vec::with_capacity(self.nodes.len());
        visited[start] = true;

        while let Some(current) = frontier.pop_front() {
            let node = &self.nodes[current];
            order.push(node.department);
            for &next in &node.successors {
                if !visited[next] {
                    visited[next] = true;
                    frontier.push_back(next);
                }
            }
        }
        Ok(order)
    }

    /// Each department with the departments it hands off to.
    pub fn edges(&self) -> Vec<(Department, Vec<Department>)> {
        self.nodes
            .iter()
            .map(|node| {
                let targets = node
                    .successors
                    .iter()
                    .map(|&i| self.nodes[i].department)
                    .collect();
                (node.department, targets)
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use Department::*;

    #[test]
    fn test_bfs_follows_the_cycle() {
        let graph = WorkflowGraph::new();
        assert_eq!(graph.breadth_first_from(0).unwrap(), vec![Sales, Finance, Service]);
        assert_eq!(graph.breadth_first_from(1).unwrap(), vec![Finance, Service, Sales]);
        assert_eq!(graph.breadth_first_from(2).unwrap(), vec![Service, Sales, Finance]);
    }

    #[test]
    fn test_bfs_rejects_unknown_start() {
        let graph = WorkflowGraph::new();
        assert_eq!(
            graph.breadth_first_from(3),
            Err(DealershipError::UnknownDepartment(3))
        );
    }

    #[test]
    fn test_edges() {
        let edges = WorkflowGraph::new().edges();
        assert_eq!(
            edges,
            vec![
                (Sales, vec![Finance]),
                (Finance, vec![Service]),
                (Service, vec![Sales]),
            ]
        );
        assert_eq!(Finance.to_string(), "Finance");
    }
}
