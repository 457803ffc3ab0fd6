//! Fixed catalog of the namespace URIs and qualified names used by the
//! manifest schema.

/// Namespace of the EDINET manifest schema.
pub const MANIFEST_NS: &str = "http://disclosure.edinet-fsa.go.jp/2013/manifest";

/// The standard XML namespace, for `xml:lang`.
pub const XML_NS: &str = "http://www.w3.org/XML/1998/namespace";

pub const TOC_COMPOSITION: (&str, &str) = (MANIFEST_NS, "tocComposition");
pub const TITLE: (&str, &str) = (MANIFEST_NS, "title");
pub const ITEM: (&str, &str) = (MANIFEST_NS, "item");
pub const INSERT: (&str, &str) = (MANIFEST_NS, "insert");
pub const LIST: (&str, &str) = (MANIFEST_NS, "list");
pub const INSTANCE: (&str, &str) = (MANIFEST_NS, "instance");
pub const IXBRL: (&str, &str) = (MANIFEST_NS, "ixbrl");

/// `xml:lang`, the only namespace-qualified attribute in the schema.
pub const LANG: (&str, &str) = (XML_NS, "lang");
