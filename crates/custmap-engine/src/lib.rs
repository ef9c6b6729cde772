// Engine crate - core processing logic (tree construction, collapse, layout)
// This layer sits between scenario records (types) and CLI presentation

pub mod layout;
pub mod scene;
pub mod state;
pub mod tree;

pub use layout::{
    LayoutConfig, Orientation, Placement, Point, hierarchy_children, layout, side_children,
};
pub use layout::fit::{Bounds, FitRequest, FitTransform, Viewport, fit};
pub use scene::{Scene, SceneEdge, SceneNode, compose};
pub use state::{AppState, Classification};
pub use tree::{CollapseState, Node, NodeKey, RawRecord, build, find_node_value, walk};
