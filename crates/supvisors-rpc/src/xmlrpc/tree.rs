//! Minimal element tree built from the `xml-rs` event stream.

use xml::reader::{ParserConfig, XmlEvent};

use crate::error::CodecError;

/// One XML element with its concatenated text and child elements.
#[derive(Debug, Default)]
pub(super) struct Element {
    pub(super) name: String,
    pub(super) text: String,
    pub(super) children: Vec<Element>,
}

impl Element {
    fn named(name: String) -> Self {
        Self {
            name,
            ..Self::default()
        }
    }

    /// Fails unless this element is called `expected`.
    pub(super) fn expect_name(&self, expected: &'static str) -> Result<(), CodecError> {
        if self.name == expected {
            Ok(())
        } else {
            Err(CodecError::UnexpectedElement {
                expected,
                found: self.name.clone(),
            })
        }
    }

    /// Returns the first child called `child`.
    pub(super) fn child(
        &self,
        child: &'static str,
        parent: &'static str,
    ) -> Result<&Self, CodecError> {
        self.children
            .iter()
            .find(|element| element.name == child)
            .ok_or(CodecError::MissingElement { parent, child })
    }

    /// Iterates over children, failing on any not called `expected`.
    pub(super) fn children_named(
        &self,
        expected: &'static str,
    ) -> impl Iterator<Item = Result<&Self, CodecError>> {
        self.children
            .iter()
            .map(move |element| element.expect_name(expected).map(|()| element))
    }
}

/// Parses `input` into its root element.
pub(super) fn parse_document(input: &str) -> Result<Element, CodecError> {
    let reader = ParserConfig::new()
        .trim_whitespace(false)
        .whitespace_to_characters(true)
        .cdata_to_characters(true)
        .ignore_comments(true)
        .create_reader(input.as_bytes());

    let mut stack: Vec<Element> = Vec::new();
    let mut root: Option<Element> = None;

    for event in reader {
        match event? {
            XmlEvent::StartElement { name, .. } => stack.push(Element::named(name.local_name)),
            XmlEvent::EndElement { .. } => {
                let Some(finished) = stack.pop() else {
                    continue;
                };
                match stack.last_mut() {
                    Some(parent) => parent.children.push(finished),
                    None => root = Some(finished),
                }
            }
            XmlEvent::Characters(text) | XmlEvent::Whitespace(text) | XmlEvent::CData(text) => {
                if let Some(current) = stack.last_mut() {
                    current.text.push_str(&text);
                }
            }
            _ => {}
        }
    }

    root.ok_or(CodecError::MissingElement {
        parent: "document",
        child: "root element",
    })
}
