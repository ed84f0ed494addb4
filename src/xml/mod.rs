//! XML plumbing shared by the CII and UBL modules: a small read-only
//! element tree with prefix-path lookup, and an indenting writer.

pub(crate) mod dom;
pub(crate) mod writer;

pub(crate) use dom::{Bindings, Document, Element};
pub(crate) use writer::XmlWriter;
