//! Schema conversion between TOC versions.
//!
//! The two `toc.yml` layouts disagree on field names and semantics: v1
//! stores every link in a single `url` field and disambiguates with an
//! `external` flag, while v2 separates book-local `file` paths from
//! external `url` links. [`normalize`] lifts a version-specific tree into
//! the canonical [`Section`] union and [`project`] lowers it back out.
//!
//! Both directions are pure structural recursions: they build a fresh
//! output tree, never mutate their input, preserve sibling order at every
//! level, and cannot fail. Absent fields stay absent; there is no schema
//! validation. Recursion depth is bounded by the input tree, which the
//! upstream document reader guarantees to be acyclic.
//!
//! One behavior worth calling out: [`project`] retains different field
//! subsets for group nodes (non-empty `children`) than for leaves. Group
//! nodes keep only the title, the primary link, and the children, dropping
//! flags like `header` and `expand_sections` that leaves keep and that are
//! schema-valid for groups too. This asymmetry is long-standing behavior
//! that downstream writers depend on, so it is reproduced exactly and
//! pinned by tests rather than smoothed over.

use crate::model::{Section, Version};

/// Convert a version-specific section, and recursively its subtree, into
/// the canonical representation.
///
/// Every field is either copied or left absent. For v1 input the single
/// `url` slot is split into `internal_target`/`external_link` according to
/// the `external` flag (absent counts as not external); v2 input already
/// keeps the two apart. The v1-only flags `search`, `divider`, and
/// `external` are dropped when normalizing from v2.
pub fn normalize(version: Version, section: &Section) -> Section {
    let children = section
        .children
        .iter()
        .map(|child| normalize(version, child))
        .collect();

    match version {
        Version::V1 => {
            let external = section.is_external.unwrap_or(false);
            Section {
                title: section.title.clone(),
                internal_target: if external {
                    None
                } else {
                    section.external_link.clone()
                },
                external_link: if external {
                    section.external_link.clone()
                } else {
                    None
                },
                children,
                expand_children: section.expand_children,
                is_search_entry: section.is_search_entry,
                is_divider: section.is_divider,
                is_header: section.is_header,
                is_external: section.is_external,
            }
        }
        Version::V2 => Section {
            title: section.title.clone(),
            internal_target: section.internal_target.clone(),
            external_link: section.external_link.clone(),
            children,
            expand_children: section.expand_children,
            is_search_entry: None,
            is_divider: None,
            is_header: section.is_header,
            is_external: None,
        },
    }
}

/// Convert a canonical section, and recursively its subtree, into the
/// version-specific output shape.
///
/// Branches on group vs leaf (see the module docs for why the two branches
/// keep different fields):
///
/// - v1 group: `title`, `url`, `sections` only.
/// - v1 leaf: every canonical field, with the primary link in `url`.
/// - v2 group: `title`, `file`, `sections` only.
/// - v2 leaf: `title`, `file`, `expand_sections`, `header`, plus `url`
///   re-emitted only when the node was explicitly flagged external;
///   `search` and `divider` have no v2 equivalent and are dropped.
pub fn project(version: Version, section: &Section) -> Section {
    let link = primary_link(section);
    let children: Vec<Section> = section
        .children
        .iter()
        .map(|child| project(version, child))
        .collect();

    match (version, section.is_group()) {
        (Version::V1, true) => Section {
            title: section.title.clone(),
            external_link: link,
            children,
            ..Section::default()
        },
        (Version::V1, false) => Section {
            title: section.title.clone(),
            internal_target: None,
            external_link: link,
            children,
            expand_children: section.expand_children,
            is_search_entry: section.is_search_entry,
            is_divider: section.is_divider,
            is_header: section.is_header,
            is_external: section.is_external,
        },
        (Version::V2, true) => Section {
            title: section.title.clone(),
            internal_target: link,
            children,
            ..Section::default()
        },
        (Version::V2, false) => Section {
            title: section.title.clone(),
            internal_target: link,
            external_link: if section.is_external.unwrap_or(false) {
                section.external_link.clone()
            } else {
                None
            },
            children,
            expand_children: section.expand_children,
            is_header: section.is_header,
            ..Section::default()
        },
    }
}

/// Link precedence shared by every projection branch: an external link
/// wins over a book-local target. Both absent stays absent.
fn primary_link(section: &Section) -> Option<String> {
    section
        .external_link
        .clone()
        .or_else(|| section.internal_target.clone())
}
