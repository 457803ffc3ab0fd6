//! Qualified names and namespace-prefix resolution.

use std::fmt;

use compact_str::CompactString;
use roxmltree::Node;
use serde::Serialize;

/// A namespace-qualified name. `namespace` is empty for names in no
/// namespace.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct QName {
    pub namespace: CompactString,
    pub local: CompactString,
}

impl QName {
    pub fn new(namespace: &str, local: &str) -> Self {
        Self {
            namespace: namespace.into(),
            local: local.into(),
        }
    }
}

impl fmt::Display for QName {
    /// Clark notation: `{namespace}local`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.namespace.is_empty() {
            write!(f, "{}", self.local)
        } else {
            write!(f, "{{{}}}{}", self.namespace, self.local)
        }
    }
}

/// Resolves an element-name token from an attribute value against the
/// namespace bindings in scope at `node`.
///
/// `prefix:local` resolves through the prefix binding visible at `node`.
/// An unprefixed token takes the namespace of `node` itself, not the
/// default namespace of the document. Returns `None` for empty or
/// whitespace-only tokens, unbound prefixes, and tokens with more than
/// one colon; the caller decides whether that is an error.
pub fn resolve_qname(node: Node, token: &str) -> Option<QName> {
    if token.trim().is_empty() {
        return None;
    }

    let parts: Vec<&str> = token.split(':').collect();
    match parts.len() {
        1 => Some(QName::new(
            node.tag_name().namespace().unwrap_or(""),
            token,
        )),
        2 => {
            let ns = node.lookup_namespace_uri(Some(parts[0]))?;
            Some(QName::new(ns, parts[1]))
        }
        _ => None,
    }
}
