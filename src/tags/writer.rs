//! Matroska tags XML serialization.
//!
//! Output layout:
//!
//! ```text
//! <?xml version="1.0"?>
//! <!DOCTYPE Tags SYSTEM "matroskatags.dtd">
//! <Tags>
//!  <!--Movie information-->
//!  <Tag>
//!   <Targets>
//!    <TargetType>50</TargetType>
//!   </Targets>
//!   <Simple>
//!    <Name>TITLE</Name>
//!    <String>Matrix</String>
//!    <TagLanguage>de</TagLanguage>
//!   </Simple>
//!  </Tag>
//! </Tags>
//! ```

use std::io::Write;

use quick_xml::events::{BytesDecl, BytesEnd, BytesStart, BytesText, Event};
use quick_xml::Writer;

use crate::error::{Error, Result};

use super::{Simple, Tag, TagDocument};

const DOCTYPE: &str = r#"Tags SYSTEM "matroskatags.dtd""#;

/// Serialize `doc` into `out`.
pub fn write_xml<W: Write>(doc: &TagDocument, out: W) -> Result<()> {
    let mut writer = Writer::new_with_indent(out, b' ', 1);

    emit(&mut writer, Event::Decl(BytesDecl::new("1.0", None, None)))?;
    emit(&mut writer, Event::DocType(BytesText::from_escaped(DOCTYPE)))?;

    start(&mut writer, "Tags")?;
    for tag in &doc.tags {
        write_tag(&mut writer, tag)?;
    }
    end(&mut writer, "Tags")?;

    let mut out = writer.into_inner();
    out.write_all(b"\n")?;
    out.flush()?;
    Ok(())
}

/// Serialize `doc` into a string.
pub fn to_xml_string(doc: &TagDocument) -> Result<String> {
    let mut buf = Vec::new();
    write_xml(doc, &mut buf)?;
    String::from_utf8(buf).map_err(Error::xml)
}

fn write_tag<W: Write>(writer: &mut Writer<W>, tag: &Tag) -> Result<()> {
    if let Some(comment) = &tag.comment {
        emit(writer, Event::Comment(BytesText::new(comment)))?;
    }

    start(writer, "Tag")?;
    start(writer, "Targets")?;
    text_element(writer, "TargetType", &tag.target.value().to_string())?;
    end(writer, "Targets")?;
    for simple in &tag.simples {
        write_simple(writer, simple)?;
    }
    end(writer, "Tag")
}

fn write_simple<W: Write>(writer: &mut Writer<W>, simple: &Simple) -> Result<()> {
    start(writer, "Simple")?;
    text_element(writer, "Name", &simple.name)?;
    if let Some(value) = &simple.value {
        text_element(writer, "String", value)?;
    }
    if let Some(language) = &simple.language {
        text_element(writer, "TagLanguage", language)?;
    }
    for child in &simple.children {
        write_simple(writer, child)?;
    }
    end(writer, "Simple")
}

fn text_element<W: Write>(writer: &mut Writer<W>, name: &str, text: &str) -> Result<()> {
    // An empty text event would leave the closing tag on its own indented
    // line, adding whitespace content.
    if text.is_empty() {
        return emit(writer, Event::Empty(BytesStart::new(name)));
    }
    start(writer, name)?;
    emit(writer, Event::Text(BytesText::new(text)))?;
    end(writer, name)
}

fn start<W: Write>(writer: &mut Writer<W>, name: &str) -> Result<()> {
    emit(writer, Event::Start(BytesStart::new(name)))
}

fn end<W: Write>(writer: &mut Writer<W>, name: &str) -> Result<()> {
    emit(writer, Event::End(BytesEnd::new(name)))
}

fn emit<W: Write>(writer: &mut Writer<W>, event: Event<'_>) -> Result<()> {
    writer.write_event(event).map_err(Error::xml)
}
