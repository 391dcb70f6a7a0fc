//! Depth-first flattening of a model graph
//!
//! Output is pre-order: a node, then its children in member order. Objects
//! reachable through several paths are emitted once, at their first visit.

use std::collections::HashMap;

use model_types::{ModelGraph, Node};

use crate::error::EvaluationError;

#[derive(Clone, Copy, PartialEq, Eq)]
enum VisitState {
    /// Entered but not yet left; these form the current path from the root
    OnPath,
    Done,
}

enum Step<'a> {
    Enter(&'a str),
    Leave(&'a str),
}

/// Flatten every object reachable from the graph root, root included
///
/// Fails with `MalformedInput` when an object is reachable from itself or when
/// a reference points at an object that is not part of the graph.
pub fn flatten(graph: &ModelGraph) -> Result<Vec<&Node>, EvaluationError> {
    let mut flat = Vec::new();
    let mut state: HashMap<&str, VisitState> = HashMap::new();
    let mut stack = vec![Step::Enter(graph.root_id())];

    while let Some(step) = stack.pop() {
        match step {
            Step::Enter(id) => {
                match state.get(id) {
                    Some(VisitState::Done) => continue,
                    Some(VisitState::OnPath) => {
                        return Err(EvaluationError::MalformedInput(format!(
                            "cycle detected: object '{}' is nested within itself",
                            id
                        )));
                    }
                    None => {}
                }

                let node = graph.get(id).ok_or_else(|| {
                    EvaluationError::MalformedInput(format!(
                        "reference to unknown object '{}'",
                        id
                    ))
                })?;

                state.insert(&node.id, VisitState::OnPath);
                flat.push(node);
                stack.push(Step::Leave(&node.id));
                for child in node.children.iter().rev() {
                    stack.push(Step::Enter(child));
                }
            }
            Step::Leave(id) => {
                state.insert(id, VisitState::Done);
            }
        }
    }

    Ok(flat)
}
