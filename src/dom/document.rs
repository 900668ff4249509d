use std::collections::{BTreeSet, HashMap};

/// Delay before an informational banner dismisses itself.
pub const BANNER_DISMISS_MS: u64 = 5000;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BannerKind {
    Error,
    Info,
}

/// A dismissible banner attached to the form. Error banners stay until the
/// user dismisses them; info banners carry a logical deadline after which
/// they are removed. Dismissing a banner that is already gone is a no-op.
#[derive(Debug, Clone)]
pub struct Banner {
    pub id: u64,
    pub kind: BannerKind,
    pub text: String,
    pub dismiss_at_ms: Option<u64>,
}

/// One element in the document stand-in: a control value, text content, a
/// CSS class set, and a visibility flag.
#[derive(Debug, Clone, Default)]
pub struct Node {
    pub value: String,
    pub text: String,
    classes: BTreeSet<String>,
    pub visible: bool,
}

impl Node {
    pub fn has_class(&self, class: &str) -> bool {
        self.classes.contains(class)
    }

    pub fn classes(&self) -> impl Iterator<Item = &str> {
        self.classes.iter().map(|c| c.as_str())
    }
}

/// In-memory stand-in for the form's DOM subtree.
///
/// Every lookup returns `Option`; every mutation against an absent id is a
/// silent no-op. A missing or malformed document therefore yields a
/// degraded, mostly-inert UI rather than a failure.
#[derive(Debug, Clone, Default)]
pub struct Document {
    nodes: HashMap<String, Node>,
    order: Vec<String>,
    markers: Vec<String>,
    banners: Vec<Banner>,
    next_banner_id: u64,
    scrolled_to: Option<String>,
}

impl Document {
    pub fn new() -> Self {
        Document::default()
    }

    // ------------------------------------------------------------------
    // Nodes
    // ------------------------------------------------------------------

    /// Insert a node (visible, empty) and return a mutable handle to it.
    /// Inserting an existing id resets the node.
    pub fn insert_node(&mut self, id: &str) -> &mut Node {
        if !self.nodes.contains_key(id) {
            self.order.push(id.to_string());
        }
        let node = self.nodes.entry(id.to_string()).or_default();
        *node = Node {
            visible: true,
            ..Node::default()
        };
        node
    }

    /// Insert a node carrying a control value. Convenience for fixtures.
    pub fn insert_value_node(&mut self, id: &str, value: &str) {
        self.insert_node(id).value = value.to_string();
    }

    /// Insert a node that starts hidden (summary rows, overlays).
    pub fn insert_hidden_node(&mut self, id: &str) {
        self.insert_node(id).visible = false;
    }

    pub fn node(&self, id: &str) -> Option<&Node> {
        self.nodes.get(id)
    }

    pub fn node_mut(&mut self, id: &str) -> Option<&mut Node> {
        self.nodes.get_mut(id)
    }

    pub fn value(&self, id: &str) -> Option<&str> {
        self.nodes.get(id).map(|n| n.value.as_str())
    }

    pub fn set_value(&mut self, id: &str, value: &str) {
        if let Some(node) = self.nodes.get_mut(id) {
            node.value = value.to_string();
        }
    }

    pub fn text(&self, id: &str) -> Option<&str> {
        self.nodes.get(id).map(|n| n.text.as_str())
    }

    pub fn set_text(&mut self, id: &str, text: &str) {
        if let Some(node) = self.nodes.get_mut(id) {
            node.text = text.to_string();
        }
    }

    pub fn add_class(&mut self, id: &str, class: &str) {
        if let Some(node) = self.nodes.get_mut(id) {
            node.classes.insert(class.to_string());
        }
    }

    pub fn remove_class(&mut self, id: &str, class: &str) {
        if let Some(node) = self.nodes.get_mut(id) {
            node.classes.remove(class);
        }
    }

    /// False when the node is absent.
    pub fn has_class(&self, id: &str, class: &str) -> bool {
        self.nodes.get(id).map_or(false, |n| n.has_class(class))
    }

    pub fn show(&mut self, id: &str) {
        if let Some(node) = self.nodes.get_mut(id) {
            node.visible = true;
        }
    }

    pub fn hide(&mut self, id: &str) {
        if let Some(node) = self.nodes.get_mut(id) {
            node.visible = false;
        }
    }

    /// False when the node is absent.
    pub fn is_visible(&self, id: &str) -> bool {
        self.nodes.get(id).map_or(false, |n| n.visible)
    }

    /// Ids carrying the given class, in document (insertion) order.
    pub fn ids_with_class(&self, class: &str) -> Vec<String> {
        self.order
            .iter()
            .filter(|id| self.has_class(id.as_str(), class))
            .cloned()
            .collect()
    }

    // ------------------------------------------------------------------
    // Hidden form markers (deleted_<section>)
    // ------------------------------------------------------------------

    /// Attach a named hidden marker input to the form. At most one marker
    /// per name is kept.
    pub fn add_marker(&mut self, name: &str) {
        if !self.markers.iter().any(|m| m == name) {
            self.markers.push(name.to_string());
        }
    }

    pub fn remove_marker(&mut self, name: &str) {
        self.markers.retain(|m| m != name);
    }

    pub fn has_marker(&self, name: &str) -> bool {
        self.markers.iter().any(|m| m == name)
    }

    pub fn markers(&self) -> &[String] {
        &self.markers
    }

    // ------------------------------------------------------------------
    // Banners
    // ------------------------------------------------------------------

    /// Prepend a banner to the form (error banners go first).
    pub fn prepend_banner(
        &mut self,
        kind: BannerKind,
        text: &str,
        dismiss_at_ms: Option<u64>,
    ) -> u64 {
        let id = self.alloc_banner_id();
        self.banners.insert(
            0,
            Banner {
                id,
                kind,
                text: text.to_string(),
                dismiss_at_ms,
            },
        );
        id
    }

    /// Append a banner after any existing ones.
    pub fn append_banner(
        &mut self,
        kind: BannerKind,
        text: &str,
        dismiss_at_ms: Option<u64>,
    ) -> u64 {
        let id = self.alloc_banner_id();
        self.banners.push(Banner {
            id,
            kind,
            text: text.to_string(),
            dismiss_at_ms,
        });
        id
    }

    /// Remove a banner by id. No-op when the banner is already gone.
    pub fn dismiss_banner(&mut self, id: u64) {
        self.banners.retain(|b| b.id != id);
    }

    /// Drop banners whose deadline has passed.
    pub fn expire_banners(&mut self, now_ms: u64) {
        self.banners
            .retain(|b| b.dismiss_at_ms.map_or(true, |at| at > now_ms));
    }

    pub fn banners(&self) -> &[Banner] {
        &self.banners
    }

    pub fn banner(&self, id: u64) -> Option<&Banner> {
        self.banners.iter().find(|b| b.id == id)
    }

    fn alloc_banner_id(&mut self) -> u64 {
        self.next_banner_id += 1;
        self.next_banner_id
    }

    // ------------------------------------------------------------------
    // Scrolling
    // ------------------------------------------------------------------

    pub fn scroll_into_view(&mut self, id: &str) {
        if self.nodes.contains_key(id) {
            self.scrolled_to = Some(id.to_string());
        }
    }

    pub fn scrolled_to(&self) -> Option<&str> {
        self.scrolled_to.as_deref()
    }
}
