// File tree module for the lazily expanded directory explorer
//
// Directories are only read when expanded, and collapsing drops the subtree,
// so re-expanding always shows what is on disk now.

pub mod icons;
pub mod lister;
pub mod node;
pub mod tree;
pub mod view;

pub use lister::list_children;
pub use node::{NodeId, NodeState, TreeNode};
pub use tree::FileTree;
pub use view::{FileExplorerEvent, FileTreeView};
