use indexmap::IndexMap;
use tracing::debug;

use crate::core::record::Record;
use crate::core::treemap::Rect;
use crate::error::{ChartError, ChartResult};

/// Key of the synthetic super-root; the only node with no parent.
pub const SUPER_ROOT_KEY: &str = "__root";

/// Key of the fixed grouping point all others records are re-parented to.
pub const OTHERS_ROOT_KEY: &str = "__others";

/// Index of a node inside the tree arena.
///
/// Parent/child links are stored as indices rather than pointers, which keeps
/// the structure acyclic by ownership and makes the bounded ancestor walk a
/// plain index traversal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NodeId(usize);

impl NodeId {
    #[must_use]
    pub const fn index(self) -> usize {
        self.0
    }
}

#[derive(Debug, Clone)]
pub struct TreeNode {
    pub key: String,
    pub parent: Option<NodeId>,
    pub children: Vec<NodeId>,
    pub value: f64,
    /// Populated by layout; `None` until a layout pass ran.
    pub rect: Option<Rect>,
    /// The source record for nodes backed by data; synthesized stubs carry none.
    pub record: Option<Record>,
}

impl TreeNode {
    #[must_use]
    pub fn is_leaf(&self) -> bool {
        self.children.is_empty()
    }
}

/// Single-rooted tree assembled from flat parent-pointer records.
///
/// Rebuilt from scratch on every layout pass; no node survives across passes.
#[derive(Debug, Clone)]
pub struct Tree {
    nodes: Vec<TreeNode>,
    index: IndexMap<String, usize>,
    root: NodeId,
}

impl Tree {
    /// Builds a tree from flat records plus a parent lookup.
    ///
    /// Others records are always attached under [`OTHERS_ROOT_KEY`] regardless
    /// of `parent_of`. Parents referenced but not present as records are
    /// synthesized as zero-value stubs directly under the super-root, as is a
    /// record whose `parent_of` is `None`. After assembly every internal
    /// node's value is the sum of its children's values.
    pub fn stratify<F>(records: &[Record], parent_of: F) -> ChartResult<Self>
    where
        F: Fn(&Record) -> Option<String>,
    {
        let mut index: IndexMap<String, usize> = IndexMap::with_capacity(records.len() + 2);
        let mut nodes: Vec<TreeNode> = Vec::with_capacity(records.len() + 2);

        nodes.push(TreeNode {
            key: SUPER_ROOT_KEY.to_owned(),
            parent: None,
            children: Vec::new(),
            value: 0.0,
            rect: None,
            record: None,
        });
        index.insert(SUPER_ROOT_KEY.to_owned(), 0);

        // Record nodes first; parent keys are resolved after stubs exist.
        let mut parent_keys: Vec<String> = Vec::with_capacity(records.len());
        for record in records {
            let parent_key = if record.is_others() {
                OTHERS_ROOT_KEY.to_owned()
            } else {
                parent_of(record).unwrap_or_else(|| SUPER_ROOT_KEY.to_owned())
            };

            if index.contains_key(&record.key) {
                return Err(ChartError::InvalidData(format!(
                    "duplicate record key '{}' in hierarchy input",
                    record.key
                )));
            }
            index.insert(record.key.clone(), nodes.len());
            nodes.push(TreeNode {
                key: record.key.clone(),
                parent: None,
                children: Vec::new(),
                value: record.value,
                rect: None,
                record: Some(record.clone()),
            });
            parent_keys.push(parent_key);
        }

        // One level of missing ancestors is synthesized, rooted at the super-root.
        for parent_key in &parent_keys {
            if !index.contains_key(parent_key) {
                debug!(parent = %parent_key, "synthesizing stub ancestor");
                index.insert(parent_key.clone(), nodes.len());
                nodes.push(TreeNode {
                    key: parent_key.clone(),
                    parent: Some(NodeId(0)),
                    children: Vec::new(),
                    value: 0.0,
                    rect: None,
                    record: None,
                });
            }
        }

        for (offset, parent_key) in parent_keys.iter().enumerate() {
            let node_index = offset + 1;
            let parent_index = *index.get(parent_key).ok_or_else(|| {
                ChartError::InvalidData(format!("unresolved parent key '{parent_key}'"))
            })?;
            nodes[node_index].parent = Some(NodeId(parent_index));
        }

        let child_links: Vec<(usize, usize)> = nodes
            .iter()
            .enumerate()
            .filter_map(|(idx, node)| node.parent.map(|parent| (parent.0, idx)))
            .collect();
        for (parent, child) in child_links {
            nodes[parent].children.push(NodeId(child));
        }

        let tree = Self {
            nodes,
            index,
            root: NodeId(0),
        };
        tree.check_rooted()?;
        Ok(tree.aggregated())
    }

    /// Verifies every node's ancestor chain terminates at the super-root
    /// within `len` hops.
    fn check_rooted(&self) -> ChartResult<()> {
        let max_hops = self.nodes.len();
        for (idx, node) in self.nodes.iter().enumerate() {
            let mut current = NodeId(idx);
            let mut hops = 0;
            while let Some(parent) = self.nodes[current.0].parent {
                current = parent;
                hops += 1;
                if hops > max_hops {
                    return Err(ChartError::CycleOrMissingRoot {
                        node: node.key.clone(),
                        hops: max_hops,
                    });
                }
            }
            if current != self.root {
                return Err(ChartError::CycleOrMissingRoot {
                    node: node.key.clone(),
                    hops,
                });
            }
        }
        Ok(())
    }

    /// Recomputes internal values as the sum of their children, bottom-up.
    ///
    /// Runs as a single pass after assembly because insertion order is not
    /// leaves-first.
    fn aggregated(mut self) -> Self {
        let order = self.depth_first_order();
        for id in order.into_iter().rev() {
            if self.nodes[id.0].children.is_empty() {
                continue;
            }
            let sum: f64 = self.nodes[id.0]
                .children
                .clone()
                .into_iter()
                .map(|child| self.nodes[child.0].value)
                .sum();
            self.nodes[id.0].value = sum;
        }
        self
    }

    fn depth_first_order(&self) -> Vec<NodeId> {
        let mut order = Vec::with_capacity(self.nodes.len());
        let mut stack = vec![self.root];
        while let Some(id) = stack.pop() {
            order.push(id);
            stack.extend(self.nodes[id.0].children.iter().copied());
        }
        order
    }

    #[must_use]
    pub fn root(&self) -> NodeId {
        self.root
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    #[must_use]
    pub fn node(&self, id: NodeId) -> &TreeNode {
        &self.nodes[id.0]
    }

    pub(crate) fn node_mut(&mut self, id: NodeId) -> &mut TreeNode {
        &mut self.nodes[id.0]
    }

    /// Key lookup via the index built during stratification.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<NodeId> {
        self.index.get(key).copied().map(NodeId)
    }

    /// Leaves eligible for layout: zero/negative-value leaves are excluded
    /// because they cannot be laid out meaningfully.
    #[must_use]
    pub fn layout_leaves(&self) -> Vec<NodeId> {
        self.depth_first_order()
            .into_iter()
            .filter(|id| {
                let node = &self.nodes[id.0];
                node.is_leaf() && node.value > 0.0
            })
            .collect()
    }

    pub(crate) fn children_of(&self, id: NodeId) -> &[NodeId] {
        &self.nodes[id.0].children
    }
}
