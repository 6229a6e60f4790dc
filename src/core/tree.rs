//! Registered command tree
//!
//! The tree is an arena of nodes. Each node keeps its own `name -> child` map,
//! so resolution walks from node to node and names only need to be unique
//! among siblings. A flat index of fully qualified paths backs the collision
//! check at registration time.

use std::collections::HashMap;
use std::rc::Rc;

use tracing::trace;

use crate::core::command::Command;
use crate::core::driver::DriverError;

/// Index of a node inside a [`CommandTree`]
pub type NodeId = usize;

/// A registered command plus what the tree knows about it
#[derive(Debug)]
pub struct Node {
    command: Rc<dyn Command>,
    /// `""` for the root, `/a/b` below it
    path: String,
    /// Direct children in registration order
    children: Vec<NodeId>,
    by_name: HashMap<String, NodeId>,
    /// Width of the longest direct child name, in chars
    longest_sub_command: usize,
}

impl Node {
    /// The command registered at this node
    pub fn command(&self) -> &Rc<dyn Command> {
        &self.command
    }

    /// Fully qualified path of this node
    pub fn path(&self) -> &str {
        &self.path
    }

    /// Direct children, in the order the parent listed them
    pub fn children(&self) -> &[NodeId] {
        &self.children
    }

    /// Padding width used when listing this node's direct children
    ///
    /// Counted in chars rather than bytes, so non-ASCII names line up the
    /// same way `{:<width$}` pads them.
    pub fn longest_sub_command(&self) -> usize {
        self.longest_sub_command
    }

    fn child(&self, name: &str) -> Option<NodeId> {
        self.by_name.get(name).copied()
    }
}

/// An immutable, fully validated command tree
#[derive(Debug)]
pub struct CommandTree {
    nodes: Vec<Node>,
    paths: HashMap<String, NodeId>,
}

impl CommandTree {
    /// Id of the root node
    pub const ROOT: NodeId = 0;

    /// Validate and index the whole tree below `root`
    ///
    /// The tree only exists if every node registered cleanly.
    pub fn build(root: Rc<dyn Command>) -> Result<Self, DriverError> {
        let mut tree = Self {
            nodes: Vec::new(),
            paths: HashMap::new(),
        };

        // the root has no siblings to pad against
        let mut unused = 0;
        tree.register(None, root, &mut unused)?;

        trace!(nodes = tree.nodes.len(), "command tree built");
        Ok(tree)
    }

    fn register(
        &mut self,
        parent: Option<&str>,
        command: Rc<dyn Command>,
        longest_sibling: &mut usize,
    ) -> Result<NodeId, DriverError> {
        let name = command.name().to_string();
        let path = match parent {
            Some(parent_path) => format!("{}/{}", parent_path, name),
            None => name.clone(),
        };

        *longest_sibling = (*longest_sibling).max(name.chars().count());

        if self.paths.contains_key(&path) {
            return Err(DriverError::DuplicatePath { path });
        }

        let id = self.nodes.len();
        self.paths.insert(path.clone(), id);
        self.nodes.push(Node {
            command: Rc::clone(&command),
            path: path.clone(),
            children: Vec::new(),
            by_name: HashMap::new(),
            longest_sub_command: 0,
        });
        trace!(path = %path, "registered command");

        // fresh accumulator per sibling group
        let mut longest_sub_command = 0;
        for sub in command.sub_commands() {
            let child = self.register(Some(&path), Rc::clone(sub), &mut longest_sub_command)?;
            let child_name = self.nodes[child].command.name().to_string();
            let node = &mut self.nodes[id];
            node.children.push(child);
            node.by_name.insert(child_name, child);
        }
        self.nodes[id].longest_sub_command = longest_sub_command;

        Ok(id)
    }

    /// Look up a node by id
    pub fn node(&self, id: NodeId) -> Result<&Node, DriverError> {
        self.nodes
            .get(id)
            .ok_or_else(|| DriverError::Corrupt(format!("no node with id {}", id)))
    }

    /// The root node
    pub fn root(&self) -> Result<&Node, DriverError> {
        self.node(Self::ROOT)
    }

    /// Look up a node by its fully qualified path (`""`, `/a`, `/a/b`)
    pub fn get(&self, path: &str) -> Option<&Node> {
        self.paths.get(path).and_then(|&id| self.nodes.get(id))
    }

    /// Number of registered commands, root included
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Always false for a built tree, which holds at least its root
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Follow `tokens` from the root for as long as each one names a child
    /// of the current node
    ///
    /// Returns the deepest node reached and the tokens left over, starting
    /// with the first one that did not match.
    pub fn resolve<'a>(&self, tokens: &'a [String]) -> Result<(NodeId, &'a [String]), DriverError> {
        let mut current = Self::ROOT;
        let mut consumed = 0;

        for token in tokens {
            match self.node(current)?.child(token) {
                Some(child) => {
                    current = child;
                    consumed += 1;
                }
                None => break,
            }
        }

        // also validates the final id
        let node = self.node(current)?;
        trace!(path = %node.path, remaining = tokens.len() - consumed, "resolved command");

        Ok((current, &tokens[consumed..]))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cmd::{BasicCommand, RootCommand};

    fn leaf(name: &str) -> Rc<dyn Command> {
        Rc::new(BasicCommand::new(name))
    }

    fn args(tokens: &[&str]) -> Vec<String> {
        tokens.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_build_indexes_paths() {
        let root = RootCommand::new("help")
            .sub_command(Rc::new(BasicCommand::new("a").sub_command(leaf("b"))))
            .sub_command(leaf("c"));
        let tree = CommandTree::build(Rc::new(root)).unwrap();

        assert_eq!(tree.len(), 4);
        assert!(tree.get("").is_some());
        assert!(tree.get("/a").is_some());
        assert!(tree.get("/a/b").is_some());
        assert!(tree.get("/c").is_some());
        assert!(tree.get("/b").is_none());
    }

    #[test]
    fn test_duplicate_siblings_rejected() {
        let root = RootCommand::new("").sub_command(leaf("x")).sub_command(leaf("x"));
        let err = CommandTree::build(Rc::new(root)).unwrap_err();
        assert!(matches!(err, DriverError::DuplicatePath { ref path } if path == "/x"));
    }

    #[test]
    fn test_same_name_under_different_parents() {
        let root = RootCommand::new("")
            .sub_command(Rc::new(BasicCommand::new("a").sub_command(leaf("x"))))
            .sub_command(Rc::new(BasicCommand::new("b").sub_command(leaf("x"))));
        assert!(CommandTree::build(Rc::new(root)).is_ok());
    }

    #[test]
    fn test_slash_name_colliding_with_nested_path() {
        let root = RootCommand::new("")
            .sub_command(Rc::new(BasicCommand::new("a").sub_command(leaf("b"))))
            .sub_command(leaf("a/b"));
        let err = CommandTree::build(Rc::new(root)).unwrap_err();
        assert!(matches!(err, DriverError::DuplicatePath { ref path } if path == "/a/b"));
    }

    #[test]
    fn test_longest_sub_command_is_per_parent() {
        let root = RootCommand::new("")
            .sub_command(leaf("foo"))
            .sub_command(Rc::new(
                BasicCommand::new("longerFoo").sub_command(leaf("evenLongerCommandName")),
            ));
        let tree = CommandTree::build(Rc::new(root)).unwrap();

        assert_eq!(tree.root().unwrap().longest_sub_command(), 9);
        assert_eq!(tree.get("/longerFoo").unwrap().longest_sub_command(), 21);
        assert_eq!(tree.get("/foo").unwrap().longest_sub_command(), 0);
    }

    #[test]
    fn test_longest_sub_command_counts_chars() {
        let root = RootCommand::new("").sub_command(leaf("héllo"));
        let tree = CommandTree::build(Rc::new(root)).unwrap();
        assert_eq!(tree.root().unwrap().longest_sub_command(), 5);
    }

    #[test]
    fn test_children_keep_registration_order() {
        let root = RootCommand::new("")
            .sub_command(leaf("zeta"))
            .sub_command(leaf("alpha"))
            .sub_command(leaf("mid"));
        let tree = CommandTree::build(Rc::new(root)).unwrap();

        let names: Vec<String> = tree
            .root()
            .unwrap()
            .children()
            .iter()
            .map(|&id| tree.node(id).unwrap().command().name().to_string())
            .collect();
        assert_eq!(names, ["zeta", "alpha", "mid"]);
    }

    #[test]
    fn test_resolve_greedy_prefix() {
        let root = RootCommand::new("").sub_command(Rc::new(
            BasicCommand::new("a").sub_command(Rc::new(BasicCommand::new("b").sub_command(leaf("d")))),
        ));
        let tree = CommandTree::build(Rc::new(root)).unwrap();

        let tokens = args(&["a", "b", "c", "d"]);
        let (id, rest) = tree.resolve(&tokens).unwrap();
        assert_eq!(tree.node(id).unwrap().path(), "/a/b");
        assert_eq!(rest, ["c", "d"]);
    }

    #[test]
    fn test_resolve_no_tokens_is_root() {
        let tree = CommandTree::build(Rc::new(RootCommand::new(""))).unwrap();
        let (id, rest) = tree.resolve(&[]).unwrap();
        assert_eq!(id, CommandTree::ROOT);
        assert!(rest.is_empty());
    }

    #[test]
    fn test_resolve_is_case_sensitive() {
        let root = RootCommand::new("").sub_command(leaf("foo"));
        let tree = CommandTree::build(Rc::new(root)).unwrap();

        let tokens = args(&["Foo"]);
        let (id, rest) = tree.resolve(&tokens).unwrap();
        assert_eq!(id, CommandTree::ROOT);
        assert_eq!(rest, ["Foo"]);
    }
}
