//! Recursive descent from the XML tree into the typed manifest graph.
//!
//! Each builder is a pure function from one element node to one entity.
//! The first schema violation aborts the parse; errors raised deep in the
//! recursion propagate to the caller unchanged.

use roxmltree::{Document, Node};
use url::Url;

use crate::model::{Insert, Instance, Item, Manifest, Title, TocComposition};
use crate::names;
use crate::qname::resolve_qname;
use crate::{Error, Result};

impl Manifest {
    /// Parses a manifest from XML text.
    pub fn parse_str(xml: &str) -> Result<Self> {
        let doc = Document::parse(xml).map_err(|e| match e {
            roxmltree::Error::NoRootNode => {
                Error::Parse("XML document has no root element".to_string())
            }
            other => Error::Xml(other),
        })?;
        Self::from_document(&doc)
    }

    /// Builds a manifest from an already-parsed XML document.
    ///
    /// The first `tocComposition` found anywhere under the root is used.
    /// Instances are collected from the `instance` children of every
    /// `list` child of the root, flattened in document order; a missing
    /// or empty `list` is not an error.
    pub fn from_document(doc: &Document) -> Result<Self> {
        let root = doc
            .root()
            .first_element_child()
            .ok_or_else(|| Error::Parse("XML document has no root element".to_string()))?;

        let toc = root
            .descendants()
            .skip(1)
            .find(|n| n.has_tag_name(names::TOC_COMPOSITION))
            .ok_or_else(|| missing("<tocComposition>"))?;
        let toc_composition = build_toc_composition(toc)?;

        let list = root
            .children()
            .filter(|n| n.has_tag_name(names::LIST))
            .flat_map(|l| l.children().filter(|n| n.has_tag_name(names::INSTANCE)))
            .map(build_instance)
            .collect::<Result<Vec<_>>>()?;

        Ok(Self {
            toc_composition,
            list,
        })
    }
}

fn missing(element: &str) -> Error {
    Error::Parse(format!("required element {element} is missing"))
}

/// Concatenated text of every text descendant, in document order.
/// Comments or nested markup inside simple content must not truncate
/// the value.
fn text_content(node: Node) -> String {
    node.descendants()
        .filter(|n| n.is_text())
        .filter_map(|n| n.text())
        .collect()
}

fn build_toc_composition(node: Node) -> Result<TocComposition> {
    let mut titles = Vec::new();
    let mut item = None;

    for child in node.children() {
        if child.has_tag_name(names::TITLE) {
            titles.push(build_title(child));
        } else if child.has_tag_name(names::ITEM) {
            // Last one wins if the document repeats <item>; real EDINET
            // manifests carry exactly one.
            item = Some(build_item(child)?);
        }
    }

    let item = item.ok_or_else(|| missing("<item>"))?;
    Ok(TocComposition { titles, item })
}

fn build_title(node: Node) -> Title {
    Title {
        lang: node.attribute(names::LANG).unwrap_or_default().into(),
        value: text_content(node),
    }
}

fn build_item(node: Node) -> Result<Item> {
    let extrole = match node.attribute("extrole") {
        Some(v) => Some(Url::parse(v).map_err(|e| {
            Error::Parse(format!("invalid extrole attribute value [{v}]: {e}"))
        })?),
        None => None,
    };

    let start = match node.attribute("start") {
        Some(v) => Some(
            resolve_qname(node, v)
                .ok_or_else(|| Error::Parse(format!("invalid start attribute value [{v}]")))?,
        ),
        None => None,
    };

    let inserts = node
        .children()
        .filter(|n| n.has_tag_name(names::INSERT))
        .map(build_insert)
        .collect::<Result<Vec<_>>>()?;

    Ok(Item {
        r#ref: node.attribute("ref").unwrap_or_default().into(),
        extrole,
        r#in: node.attribute("in").unwrap_or_default().into(),
        start,
        inserts: if inserts.is_empty() {
            None
        } else {
            Some(inserts)
        },
    })
}

fn build_insert(node: Node) -> Result<Insert> {
    let parent = match node.attribute("parent") {
        Some(v) => Some(
            resolve_qname(node, v)
                .ok_or_else(|| Error::Parse(format!("invalid parent attribute value [{v}]")))?,
        ),
        None => None,
    };

    let item = node
        .children()
        .find(|n| n.has_tag_name(names::ITEM))
        .ok_or_else(|| missing("<item>"))?;

    Ok(Insert {
        parent,
        item: Box::new(build_item(item)?),
    })
}

fn build_instance(node: Node) -> Result<Instance> {
    let inline_xbrl_files: Vec<String> = node
        .children()
        .filter(|n| n.has_tag_name(names::IXBRL))
        .map(text_content)
        .collect();

    if inline_xbrl_files.is_empty() {
        return Err(missing("<ixbrl>"));
    }

    Ok(Instance {
        id: node.attribute("id").unwrap_or_default().into(),
        r#type: node.attribute("type").unwrap_or_default().into(),
        preferred_filename: node
            .attribute("preferredFilename")
            .unwrap_or_default()
            .into(),
        inline_xbrl_files,
    })
}
