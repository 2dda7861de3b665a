//! Category tree types.

use serde::{Deserialize, Serialize};

/// A catalog category.
///
/// Categories form a tree: the API embeds the immediate `children` and, on
/// single-category fetches, the `parent` used for breadcrumb construction.
/// Cycles are assumed impossible server-side and are not checked here.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Category {
    /// Category ID.
    pub id: String,
    /// Display name.
    pub name: String,
    /// Description shown on the category page.
    #[serde(default)]
    pub description: String,
    /// Parent category ID, absent for root categories.
    #[serde(default)]
    pub parent_id: Option<String>,
    /// Optional category image path.
    #[serde(default)]
    pub image_url: Option<String>,
    /// Whether the category is active.
    #[serde(default = "default_active")]
    pub active: bool,
    /// Immediate subcategories, when embedded by the API.
    #[serde(default)]
    pub children: Vec<Category>,
    /// Embedded parent, when the API includes it.
    #[serde(default)]
    pub parent: Option<Box<Category>>,
    /// Product count, when the listing endpoint includes it.
    #[serde(default)]
    pub product_count: Option<u64>,
}

fn default_active() -> bool {
    true
}

impl Category {
    /// Whether this category has subcategories.
    ///
    /// A category with children renders as a subcategory grid; one without
    /// falls through to its own product listing.
    #[must_use]
    pub fn has_children(&self) -> bool {
        !self.children.is_empty()
    }

    /// Ancestor chain for breadcrumbs, nearest ancestor last.
    ///
    /// Only as deep as the API embedded it; a missing parent silently
    /// shortens the trail.
    #[must_use]
    pub fn ancestors(&self) -> Vec<&Category> {
        let mut trail = Vec::new();
        let mut current = self.parent.as_deref();
        while let Some(parent) = current {
            trail.push(parent);
            current = parent.parent.as_deref();
        }
        trail.reverse();
        trail
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn category(id: &str, name: &str) -> Category {
        Category {
            id: id.to_string(),
            name: name.to_string(),
            description: String::new(),
            parent_id: None,
            image_url: None,
            active: true,
            children: Vec::new(),
            parent: None,
            product_count: None,
        }
    }

    #[test]
    fn has_children_reflects_embedded_list() {
        let mut muebles = category("c1", "Muebles");
        assert!(!muebles.has_children());

        muebles.children.push(category("c2", "Sillas"));
        assert!(muebles.has_children());
    }

    #[test]
    fn ancestors_walks_parent_chain_nearest_last() {
        let mut sillas = category("c3", "Sillas de oficina");
        let mut oficina = category("c2", "Oficina");
        oficina.parent = Some(Box::new(category("c1", "Muebles")));
        sillas.parent = Some(Box::new(oficina));

        let trail: Vec<&str> = sillas.ancestors().iter().map(|c| c.name.as_str()).collect();
        assert_eq!(trail, vec!["Muebles", "Oficina"]);
    }

    #[test]
    fn ancestors_empty_without_parent() {
        let root = category("c1", "Muebles");
        assert!(root.ancestors().is_empty());
    }

    #[test]
    fn decodes_minimal_payload() {
        let json = r#"{"id": "cat-1", "name": "Lámparas"}"#;
        let cat: Category = serde_json::from_str(json).expect("valid category");
        assert_eq!(cat.name, "Lámparas");
        assert!(cat.active);
        assert!(cat.children.is_empty());
        assert!(cat.parent.is_none());
    }

    #[test]
    fn decodes_embedded_parent_and_children() {
        let json = r#"{
            "id": "cat-2",
            "name": "Sillas",
            "parent_id": "cat-1",
            "parent": {"id": "cat-1", "name": "Muebles"},
            "children": [{"id": "cat-3", "name": "Sillas de oficina"}]
        }"#;
        let cat: Category = serde_json::from_str(json).expect("valid category");
        assert_eq!(cat.parent.as_ref().map(|p| p.name.as_str()), Some("Muebles"));
        assert_eq!(cat.children.len(), 1);
    }
}
