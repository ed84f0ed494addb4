use std::str::FromStr;

use quick_xml::NsReader;
use quick_xml::events::{BytesStart, Event};
use quick_xml::name::ResolveResult;
use rust_decimal::Decimal;

use crate::core::InvoiceError;

/// Prefix to namespace URI table used to resolve lookup paths.
pub(crate) type Bindings = &'static [(&'static str, &'static str)];

/// An XML document loaded fully into memory.
///
/// Elements live in one arena in document order; element 0 is the root.
/// Only elements, attributes and character data are kept. Namespace
/// declarations are resolved while reading and not stored as attributes.
#[derive(Debug)]
pub(crate) struct Document {
    nodes: Vec<Node>,
}

#[derive(Debug)]
struct Node {
    qname: String,
    namespace: String,
    attrs: Vec<(String, String)>,
    text: String,
    parent: Option<usize>,
    children: Vec<usize>,
}

fn xml_err(e: impl std::fmt::Display) -> InvoiceError {
    InvoiceError::Xml(e.to_string())
}

fn namespace_uri(resolved: ResolveResult<'_>) -> Result<String, InvoiceError> {
    match resolved {
        ResolveResult::Bound(ns) => std::str::from_utf8(ns.into_inner())
            .map(str::to_string)
            .map_err(xml_err),
        ResolveResult::Unbound => Ok(String::new()),
        ResolveResult::Unknown(prefix) => Err(InvoiceError::Xml(format!(
            "undeclared namespace prefix `{}`",
            String::from_utf8_lossy(&prefix)
        ))),
    }
}

impl Document {
    pub fn parse(bytes: &[u8]) -> Result<Self, InvoiceError> {
        let bytes = bytes.strip_prefix(b"\xEF\xBB\xBF").unwrap_or(bytes);
        let mut reader = NsReader::from_reader(bytes);
        reader.config_mut().trim_text(true);

        let mut doc = Document { nodes: Vec::new() };
        let mut stack: Vec<usize> = Vec::new();
        let mut buf = Vec::new();

        loop {
            match reader.read_resolved_event_into(&mut buf) {
                Ok((ns, Event::Start(e))) => {
                    let index = doc.open(&e, namespace_uri(ns)?, stack.last().copied())?;
                    stack.push(index);
                }
                Ok((ns, Event::Empty(e))) => {
                    doc.open(&e, namespace_uri(ns)?, stack.last().copied())?;
                }
                Ok((_, Event::End(_))) => {
                    stack.pop();
                }
                Ok((_, Event::Text(e))) => {
                    let text = e.unescape().map_err(xml_err)?;
                    if let Some(&top) = stack.last() {
                        doc.nodes[top].text.push_str(&text);
                    }
                }
                Ok((_, Event::CData(e))) => {
                    let text = std::str::from_utf8(&e).map_err(xml_err)?;
                    if let Some(&top) = stack.last() {
                        doc.nodes[top].text.push_str(text);
                    }
                }
                Ok((_, Event::Eof)) => break,
                Err(e) => {
                    return Err(InvoiceError::Xml(format!(
                        "{e} at byte {}",
                        reader.buffer_position()
                    )));
                }
                _ => {}
            }
            buf.clear();
        }

        if doc.nodes.is_empty() {
            return Err(InvoiceError::Xml("document has no root element".into()));
        }
        if let Some(&open) = stack.last() {
            return Err(InvoiceError::Xml(format!(
                "unexpected end of document inside <{}>",
                doc.nodes[open].qname
            )));
        }
        Ok(doc)
    }

    fn open(
        &mut self,
        start: &BytesStart<'_>,
        namespace: String,
        parent: Option<usize>,
    ) -> Result<usize, InvoiceError> {
        if parent.is_none() && !self.nodes.is_empty() {
            return Err(InvoiceError::Xml("more than one root element".into()));
        }

        let qname = std::str::from_utf8(start.name().as_ref())
            .map_err(xml_err)?
            .to_string();

        let mut attrs = Vec::new();
        for attr in start.attributes() {
            let attr = attr.map_err(xml_err)?;
            if attr.key.as_namespace_binding().is_some() {
                continue;
            }
            let local = std::str::from_utf8(attr.key.local_name().into_inner())
                .map_err(xml_err)?
                .to_string();
            let value = attr.unescape_value().map_err(xml_err)?.into_owned();
            attrs.push((local, value));
        }

        let index = self.nodes.len();
        self.nodes.push(Node {
            qname,
            namespace,
            attrs,
            text: String::new(),
            parent,
            children: Vec::new(),
        });
        if let Some(parent) = parent {
            self.nodes[parent].children.push(index);
        }
        Ok(index)
    }

    /// The document element, with no prefixes bound.
    pub fn root(&self) -> Element<'_> {
        Element {
            doc: self,
            index: 0,
            bindings: &[],
        }
    }
}

/// A handle to one element of a [`Document`].
///
/// Lookup paths are `/`-separated steps of `prefix:LocalName`, resolved
/// against the bindings attached with [`Element::bind`] and matched by
/// namespace URI, so the prefixes used in the source document do not matter.
#[derive(Clone, Copy)]
pub(crate) struct Element<'a> {
    doc: &'a Document,
    index: usize,
    bindings: Bindings,
}

impl<'a> Element<'a> {
    fn node(&self) -> &'a Node {
        &self.doc.nodes[self.index]
    }

    fn at(&self, index: usize) -> Element<'a> {
        Element {
            doc: self.doc,
            index,
            bindings: self.bindings,
        }
    }

    pub fn bind(self, bindings: Bindings) -> Element<'a> {
        Element { bindings, ..self }
    }

    pub fn namespace(&self) -> &'a str {
        &self.node().namespace
    }

    pub fn local_name(&self) -> &'a str {
        let qname = &self.node().qname;
        qname.rsplit(':').next().unwrap_or(qname)
    }

    /// Character data, trimmed.
    pub fn text(&self) -> &'a str {
        self.node().text.trim()
    }

    pub fn attr(&self, name: &str) -> Option<&'a str> {
        self.node()
            .attrs
            .iter()
            .find(|(k, _)| k == name)
            .map(|(_, v)| v.as_str())
    }

    pub fn children(self) -> impl Iterator<Item = Element<'a>> + 'a {
        self.node().children.iter().map(move |&i| self.at(i))
    }

    fn matches(&self, step: &str) -> bool {
        let (prefix, local) = step.split_once(':').unwrap_or(("", step));
        if self.local_name() != local {
            return false;
        }
        if prefix.is_empty() {
            return self.namespace().is_empty();
        }
        self.bindings
            .iter()
            .find(|(p, _)| *p == prefix)
            .is_some_and(|(_, uri)| *uri == self.namespace())
    }

    /// Every element reached by `path`, in document order.
    pub fn find_all(&self, path: &str) -> Vec<Element<'a>> {
        let mut current = vec![*self];
        for step in path.split('/').filter(|s| !s.is_empty()) {
            current = current
                .iter()
                .flat_map(|e| e.children())
                .filter(|c| c.matches(step))
                .collect();
            if current.is_empty() {
                break;
            }
        }
        current
    }

    /// The first element reached by `path`.
    pub fn find(&self, path: &str) -> Option<Element<'a>> {
        self.find_all(path).into_iter().next()
    }

    pub fn exists(&self, path: &str) -> bool {
        self.find(path).is_some()
    }

    /// Trimmed text at `path`, `None` when absent or empty.
    pub fn text_at(&self, path: &str) -> Option<&'a str> {
        self.find(path).map(|e| e.text()).filter(|t| !t.is_empty())
    }

    pub fn string_at(&self, path: &str) -> Option<String> {
        self.text_at(path).map(str::to_string)
    }

    /// Text as a decimal; empty text is zero.
    pub fn decimal(&self) -> Result<Decimal, InvoiceError> {
        let text = self.text();
        if text.is_empty() {
            return Ok(Decimal::ZERO);
        }
        Decimal::from_str(text)
            .or_else(|_| Decimal::from_scientific(text))
            .map_err(|_| InvoiceError::InvalidDecimal {
                value: text.to_string(),
                path: self.xpath(),
            })
    }

    /// Decimal at `path`, `None` when the element is absent.
    pub fn decimal_at(&self, path: &str) -> Result<Option<Decimal>, InvoiceError> {
        self.find(path).map(|e| e.decimal()).transpose()
    }

    /// Decimal at `path`, zero when the element is absent.
    pub fn amount_at(&self, path: &str) -> Result<Decimal, InvoiceError> {
        Ok(self.decimal_at(path)?.unwrap_or_default())
    }

    /// Absolute location of this element with the source's own prefixes,
    /// e.g. `/rsm:CrossIndustryInvoice/rsm:ExchangedDocument/ram:ID`.
    pub fn xpath(&self) -> String {
        let mut names = Vec::new();
        let mut index = Some(self.index);
        while let Some(i) = index {
            let node = &self.doc.nodes[i];
            names.push(node.qname.as_str());
            index = node.parent;
        }
        names.reverse();
        let mut path = String::new();
        for name in names {
            path.push('/');
            path.push_str(name);
        }
        path
    }
}

impl std::fmt::Debug for Element<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Element").field("path", &self.xpath()).finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    const A: &str = "urn:example:a";
    const B: &str = "urn:example:b";
    static BINDINGS: Bindings = &[("a", A), ("b", B)];

    const SAMPLE: &str = r#"<?xml version="1.0" encoding="UTF-8"?>
<x:Root xmlns:x="urn:example:a" xmlns:y="urn:example:b">
  <y:Item code="1">first &amp; only</y:Item>
  <y:Item code="2"><![CDATA[<raw>]]></y:Item>
  <y:Amount>  12.50 </y:Amount>
  <y:Empty/>
  <y:Bad>abc</y:Bad>
  <x:Group xmlns:y="urn:example:a"><y:Inner>rebound</y:Inner></x:Group>
</x:Root>"#;

    fn root(doc: &Document) -> Element<'_> {
        doc.root().bind(BINDINGS)
    }

    #[test]
    fn resolves_by_namespace_not_prefix() {
        let doc = Document::parse(SAMPLE.as_bytes()).unwrap();
        let root = root(&doc);
        assert_eq!(root.namespace(), A);
        assert_eq!(root.local_name(), "Root");
        assert_eq!(root.find_all("b:Item").len(), 2);
        assert!(root.find("a:Item").is_none());
        assert_eq!(root.text_at("a:Group/a:Inner"), Some("rebound"));
        assert!(root.find("a:Group/b:Inner").is_none());
    }

    #[test]
    fn text_attributes_and_cdata() {
        let doc = Document::parse(SAMPLE.as_bytes()).unwrap();
        let items = root(&doc).find_all("b:Item");
        assert_eq!(items[0].text(), "first & only");
        assert_eq!(items[0].attr("code"), Some("1"));
        assert_eq!(items[1].text(), "<raw>");
        assert_eq!(items[1].attr("missing"), None);
    }

    #[test]
    fn decimals() {
        let doc = Document::parse(SAMPLE.as_bytes()).unwrap();
        let root = root(&doc);
        assert_eq!(root.amount_at("b:Amount").unwrap(), dec!(12.50));
        assert_eq!(root.decimal_at("b:Empty").unwrap(), Some(Decimal::ZERO));
        assert_eq!(root.decimal_at("b:Nothing").unwrap(), None);
        match root.decimal_at("b:Bad") {
            Err(InvoiceError::InvalidDecimal { value, path }) => {
                assert_eq!(value, "abc");
                assert_eq!(path, "/x:Root/y:Bad");
            }
            other => panic!("unexpected {other:?}"),
        }
    }

    #[test]
    fn presence_of_empty_elements() {
        let doc = Document::parse(SAMPLE.as_bytes()).unwrap();
        let root = root(&doc);
        assert!(root.exists("b:Empty"));
        assert_eq!(root.text_at("b:Empty"), None);
    }

    #[test]
    fn malformed_documents() {
        assert!(matches!(
            Document::parse(b"<a><b></a>"),
            Err(InvoiceError::Xml(_))
        ));
        assert!(matches!(Document::parse(b""), Err(InvoiceError::Xml(_))));
        assert!(matches!(
            Document::parse(b"<a><b>"),
            Err(InvoiceError::Xml(_))
        ));
        assert!(matches!(
            Document::parse(b"<a/><b/>"),
            Err(InvoiceError::Xml(_))
        ));
    }

    #[test]
    fn undeclared_prefix_is_rejected() {
        match Document::parse(b"<r xmlns=\"urn:example:a\"><z:Item/></r>") {
            Err(InvoiceError::Xml(msg)) => assert!(msg.contains("`z`"), "{msg}"),
            other => panic!("unexpected {other:?}"),
        }
    }

    #[test]
    fn namespace_declarations_are_not_attributes() {
        let doc = Document::parse(SAMPLE.as_bytes()).unwrap();
        let root = root(&doc);
        assert_eq!(root.attr("x"), None);
        assert_eq!(root.attr("y"), None);
        let group = root.find("a:Group").unwrap();
        assert_eq!(group.attr("y"), None);
    }

    #[test]
    fn byte_order_mark_is_skipped() {
        let doc = Document::parse(b"\xEF\xBB\xBF<r xmlns=\"urn:example:a\"/>").unwrap();
        assert_eq!(doc.root().namespace(), A);
    }
}
