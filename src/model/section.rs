//! The canonical TOC section type.

use serde::{Deserialize, Serialize};

/// A table-of-contents entry (hierarchical).
///
/// One structural type covers the union of both schema versions rather than
/// a subtype per version: the version-specific layouts are views onto this
/// struct, produced and consumed by [`normalize`](crate::convert::normalize)
/// and [`project`](crate::convert::project). Serde names follow the on-disk
/// spellings, so a parsed v1 document's `url` value lands in
/// [`external_link`](Section::external_link) before `normalize` decides
/// which canonical link it actually denotes.
///
/// Every field is optional; absent fields are skipped when serializing and
/// an empty `children` vector is the same thing as an absent `sections` key.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Section {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,

    /// Path to content local to the book. Serialized as `file`, the v2
    /// spelling; v1 has no equivalent field.
    #[serde(rename = "file", default, skip_serializing_if = "Option::is_none")]
    pub internal_target: Option<String>,

    /// Link to content outside the book. Serialized as `url`, which in v1
    /// documents doubles as the book-local path (see [`is_external`](Section::is_external)).
    #[serde(rename = "url", default, skip_serializing_if = "Option::is_none")]
    pub external_link: Option<String>,

    /// Child entries in document order.
    #[serde(rename = "sections", default, skip_serializing_if = "Vec::is_empty")]
    pub children: Vec<Section>,

    /// Whether the UI shows children expanded by default.
    #[serde(
        rename = "expand_sections",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub expand_children: Option<bool>,

    /// v1-only: this entry is the book's search page.
    #[serde(rename = "search", default, skip_serializing_if = "Option::is_none")]
    pub is_search_entry: Option<bool>,

    /// v1-only: decorative divider entry.
    #[serde(rename = "divider", default, skip_serializing_if = "Option::is_none")]
    pub is_divider: Option<bool>,

    /// This entry is a section header (present in both versions).
    #[serde(rename = "header", default, skip_serializing_if = "Option::is_none")]
    pub is_header: Option<bool>,

    /// v1-only: disambiguates whether the single v1 `url` field denotes an
    /// external link (`true`) or a book-local path (`false`).
    #[serde(rename = "external", default, skip_serializing_if = "Option::is_none")]
    pub is_external: Option<bool>,
}

impl Section {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    pub fn with_internal_target(mut self, path: impl Into<String>) -> Self {
        self.internal_target = Some(path.into());
        self
    }

    pub fn with_external_link(mut self, url: impl Into<String>) -> Self {
        self.external_link = Some(url.into());
        self
    }

    pub fn with_child(mut self, child: Section) -> Self {
        self.children.push(child);
        self
    }

    pub fn with_expand_children(mut self, expand: bool) -> Self {
        self.expand_children = Some(expand);
        self
    }

    pub fn with_search_entry(mut self, search: bool) -> Self {
        self.is_search_entry = Some(search);
        self
    }

    pub fn with_divider(mut self, divider: bool) -> Self {
        self.is_divider = Some(divider);
        self
    }

    pub fn with_header(mut self, header: bool) -> Self {
        self.is_header = Some(header);
        self
    }

    pub fn with_external(mut self, external: bool) -> Self {
        self.is_external = Some(external);
        self
    }

    /// True when this entry has children. Group nodes are projected
    /// differently from leaves; see [`project`](crate::convert::project).
    pub fn is_group(&self) -> bool {
        !self.children.is_empty()
    }

    /// True when this entry has no children.
    pub fn is_leaf(&self) -> bool {
        self.children.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builder_chains() {
        let section = Section::new()
            .with_title("Chapter 1")
            .with_internal_target("ch1.md")
            .with_child(Section::new().with_title("1.1"))
            .with_child(Section::new().with_title("1.2"));

        assert_eq!(section.title.as_deref(), Some("Chapter 1"));
        assert_eq!(section.internal_target.as_deref(), Some("ch1.md"));
        assert_eq!(section.children.len(), 2);
        assert_eq!(section.children[0].title.as_deref(), Some("1.1"));
    }

    #[test]
    fn group_leaf_classification() {
        let leaf = Section::new().with_title("Leaf");
        assert!(leaf.is_leaf());
        assert!(!leaf.is_group());

        let group = leaf.clone().with_child(Section::new());
        assert!(group.is_group());
        assert!(!group.is_leaf());
    }

    #[test]
    fn default_is_fully_absent() {
        let section = Section::default();
        assert_eq!(section.title, None);
        assert_eq!(section.internal_target, None);
        assert_eq!(section.external_link, None);
        assert!(section.children.is_empty());
        assert_eq!(section.expand_children, None);
        assert_eq!(section.is_search_entry, None);
        assert_eq!(section.is_divider, None);
        assert_eq!(section.is_header, None);
        assert_eq!(section.is_external, None);
    }
}
