//! Dependency graph over a plan's calculation steps.
//!
//! Edges point from a dependency to the step that needs it. A graph that
//! cannot be topologically sorted has a cycle.

use std::collections::HashMap;
use std::fmt;

use rustworkx_core::petgraph::algo::toposort;
use rustworkx_core::petgraph::graph::{DiGraph, NodeIndex};

use crate::entities::CalculationStep;

/// A structural problem in the calculation steps.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CalculationFinding {
    /// The same `step_id` appears more than once.
    DuplicateStep { step_id: u32 },
    /// A step depends on an id no step declares.
    UnknownDependency { step_id: u32, depends_on: u32 },
    /// The dependency graph has a cycle passing through `step_id`.
    Cycle { step_id: u32 },
}

impl fmt::Display for CalculationFinding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::DuplicateStep { step_id } => {
                write!(f, "Duplicate calculation step id: {step_id}")
            }
            Self::UnknownDependency {
                step_id,
                depends_on,
            } => write!(
                f,
                "Calculation step {step_id} depends on unknown step {depends_on}"
            ),
            Self::Cycle { step_id } => {
                write!(f, "Cyclic calculation dependency involving step {step_id}")
            }
        }
    }
}

/// Directed graph built from a plan's calculation steps.
pub struct CalculationGraph {
    graph: DiGraph<u32, ()>,
    duplicates: Vec<u32>,
    unknown: Vec<(u32, u32)>,
}

impl CalculationGraph {
    /// Build the graph. Duplicate ids share one node; references to unknown
    /// ids are recorded and left out of the graph.
    #[must_use]
    pub fn from_steps(steps: &[CalculationStep]) -> Self {
        let mut graph = DiGraph::new();
        let mut id_to_index: HashMap<u32, NodeIndex> = HashMap::with_capacity(steps.len());
        let mut duplicates = Vec::new();

        for step in steps {
            if id_to_index.contains_key(&step.step_id) {
                if !duplicates.contains(&step.step_id) {
                    duplicates.push(step.step_id);
                }
                continue;
            }
            id_to_index.insert(step.step_id, graph.add_node(step.step_id));
        }

        let mut unknown = Vec::new();
        for step in steps {
            let target = id_to_index[&step.step_id];
            for dep in &step.depends_on {
                match id_to_index.get(dep) {
                    Some(source) => {
                        graph.update_edge(*source, target, ());
                    }
                    None => unknown.push((step.step_id, *dep)),
                }
            }
        }

        Self {
            graph,
            duplicates,
            unknown,
        }
    }

    /// One step id on a cycle, if any. Self-dependencies count.
    #[must_use]
    pub fn cycle_member(&self) -> Option<u32> {
        toposort(&self.graph, None)
            .err()
            .map(|cycle| self.graph[cycle.node_id()])
    }

    /// Every problem found, in a fixed order: duplicates, then unknown
    /// dependencies (both in plan order), then at most one cycle.
    #[must_use]
    pub fn findings(&self) -> Vec<CalculationFinding> {
        let mut findings: Vec<CalculationFinding> = self
            .duplicates
            .iter()
            .map(|step_id| CalculationFinding::DuplicateStep { step_id: *step_id })
            .collect();

        findings.extend(self.unknown.iter().map(|(step_id, depends_on)| {
            CalculationFinding::UnknownDependency {
                step_id: *step_id,
                depends_on: *depends_on,
            }
        }));

        if let Some(step_id) = self.cycle_member() {
            findings.push(CalculationFinding::Cycle { step_id });
        }

        findings
    }
}
