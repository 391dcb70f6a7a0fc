//! Building-element categories and their discriminators
//!
//! A node belongs to a category when its `speckle_type` is one of the
//! category's accepted type tags AND its `category` label equals the
//! category's label exactly. The label is what separates categories whose
//! type tags overlap (Revit exports windows and many other families as the
//! same generic instance type).

use model_types::Node;
use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub enum Category {
    Wall,
    Window,
    Roof,
}

/// Discriminators for one category
#[derive(Debug)]
pub struct CategoryProfile {
    pub type_tags: &'static [&'static str],
    pub label: &'static str,
}

static WALL: CategoryProfile = CategoryProfile {
    type_tags: &[
        "Objects.BuiltElements.Wall:Objects.BuiltElements.Revit.RevitWall",
        "Objects.BuiltElements.Wall",
    ],
    label: "Walls",
};

static WINDOW: CategoryProfile = CategoryProfile {
    type_tags: &[
        "Objects.BuiltElements.Revit.FamilyInstance",
        "Objects.BuiltElements.Revit.RevitElement",
    ],
    label: "Windows",
};

static ROOF: CategoryProfile = CategoryProfile {
    type_tags: &[
        "Objects.BuiltElements.Roof:Objects.BuiltElements.Revit.RevitRoof.RevitFootprintRoof",
        "Objects.BuiltElements.Roof:Objects.BuiltElements.Revit.RevitRoof.RevitExtrusionRoof",
        "Objects.BuiltElements.Roof",
    ],
    label: "Roofs",
};

impl Category {
    pub const ALL: [Category; 3] = [Category::Wall, Category::Window, Category::Roof];

    pub fn profile(&self) -> &'static CategoryProfile {
        match self {
            Category::Wall => &WALL,
            Category::Window => &WINDOW,
            Category::Roof => &ROOF,
        }
    }

    /// Category label as it appears on model objects, e.g. "Walls"
    pub fn label(&self) -> &'static str {
        self.profile().label
    }

    /// Check whether a node belongs to this category
    pub fn matches(&self, node: &Node) -> bool {
        let profile = self.profile();
        profile.type_tags.contains(&node.speckle_type.as_str())
            && node.category.as_deref() == Some(profile.label)
    }
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// Classify a node, or `None` when it belongs to no category
pub fn classify(node: &Node) -> Option<Category> {
    Category::ALL.into_iter().find(|category| category.matches(node))
}
