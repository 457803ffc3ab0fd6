use compact_str::CompactString;
use serde::Serialize;
use url::Url;

use crate::qname::QName;

// ============================================================================
// EDINET Manifest Data Structures
// ============================================================================
//
// The whole graph is a strict tree owned by `Manifest`; nothing here is
// mutated after parsing.

/// Root of a parsed manifest document.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Manifest {
    /// The `manifest/tocComposition` element.
    pub toc_composition: TocComposition,
    /// Instances from the `manifest/list` elements, in document order.
    pub list: Vec<Instance>,
}

/// Table-of-contents layout for the filing.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TocComposition {
    /// `title` children, in document order.
    pub titles: Vec<Title>,
    /// The `item` child.
    pub item: Item,
}

/// A localized display name.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Title {
    /// `xml:lang` attribute value, empty if absent.
    pub lang: CompactString,
    /// Element text content, empty if absent.
    pub value: String,
}

/// A reference to a taxonomy presentation/role, optionally carrying
/// insertion points for nested content.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Item {
    /// `ref` attribute value, empty if absent.
    pub r#ref: CompactString,
    /// `extrole` attribute: the extended link role URI.
    pub extrole: Option<Url>,
    /// `in` attribute value (e.g. "presentation"), empty if absent.
    pub r#in: CompactString,
    /// `start` attribute resolved to a qualified element name.
    pub start: Option<QName>,
    /// `insert` children; `None` when the element has no `insert`
    /// children at all, never `Some` of an empty vector.
    pub inserts: Option<Vec<Insert>>,
}

/// An insertion point grafting a nested item under a named parent element.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Insert {
    /// `parent` attribute resolved to a qualified element name.
    pub parent: Option<QName>,
    /// The mandatory `item` child.
    pub item: Box<Item>,
}

/// One filed document instance.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Instance {
    /// `id` attribute value, empty if absent.
    pub id: CompactString,
    /// `type` attribute value (e.g. "PublicDoc"), empty if absent.
    pub r#type: CompactString,
    /// `preferredFilename` attribute value, empty if absent.
    pub preferred_filename: CompactString,
    /// Text of the `ixbrl` children, in document order; never empty.
    pub inline_xbrl_files: Vec<String>,
}
