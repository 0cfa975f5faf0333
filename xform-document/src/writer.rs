//! XML serialization of markup trees.

use quick_xml::Writer;
use quick_xml::events::{BytesDecl, BytesEnd, BytesStart, BytesText, Event};
use xform_survey::Node;

use crate::{DocumentError, XformOptions};

/// Serialize a markup tree as an XML document with a declaration.
pub fn to_xml(document: &Node, options: &XformOptions) -> Result<String, DocumentError> {
    let mut writer = if options.indent > 0 {
        Writer::new_with_indent(Vec::new(), b' ', options.indent)
    } else {
        Writer::new(Vec::new())
    };

    emit(
        &mut writer,
        Event::Decl(BytesDecl::new("1.0", Some("UTF-8"), None)),
    )?;
    write_node(&mut writer, document)?;

    String::from_utf8(writer.into_inner()).map_err(|e| DocumentError::Serialize(e.to_string()))
}

fn write_node(writer: &mut Writer<Vec<u8>>, node: &Node) -> Result<(), DocumentError> {
    match node {
        Node::Text(text) => emit(writer, Event::Text(BytesText::new(text))),
        Node::Element {
            name,
            attributes,
            children,
        } => {
            let mut start = BytesStart::new(name.as_str());
            for (key, value) in attributes {
                start.push_attribute((key.as_str(), value.as_str()));
            }
            if children.is_empty() {
                return emit(writer, Event::Empty(start));
            }
            emit(writer, Event::Start(start))?;
            for child in children {
                write_node(writer, child)?;
            }
            emit(writer, Event::End(BytesEnd::new(name.as_str())))
        }
    }
}

fn emit(writer: &mut Writer<Vec<u8>>, event: Event<'_>) -> Result<(), DocumentError> {
    writer
        .write_event(event)
        .map_err(|e| DocumentError::Serialize(e.to_string()))
}
