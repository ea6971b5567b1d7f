use crate::alloc_prelude::*;
use core::fmt::Write;

use super::{Document, XmlElement, XmlNode};

pub const XML_HEADER: &str = r#"<?xml version="1.0" encoding="UTF-8"?>"#;

pub const MAPPER_DOCTYPE: &str = r#"<!DOCTYPE mapper PUBLIC "-//mybatis.org//DTD Mapper 3.0//EN" "http://mybatis.org/dtd/mybatis-3-mapper.dtd">"#;

const INDENT: &str = "  ";

impl Document {
    /// Serialize the whole document with header and DOCTYPE
    pub fn to_xml(&self) -> String {
        let mut out = String::new();
        out.push_str(XML_HEADER);
        out.push('\n');
        out.push_str(MAPPER_DOCTYPE);
        out.push('\n');
        write_element(&mut out, &self.to_element(self.root()), 0);
        out
    }
}

impl XmlElement {
    /// Serialize this element alone
    pub fn to_xml(&self) -> String {
        let mut out = String::new();
        write_element(&mut out, self, 0);
        out
    }
}

fn write_element(out: &mut String, element: &XmlElement, depth: usize) {
    let pad = INDENT.repeat(depth);
    out.push_str(&pad);
    out.push('<');
    out.push_str(&element.name);
    for (key, value) in &element.attributes {
        let _ = write!(out, " {}=\"{}\"", key, escape_attribute(value));
    }
    if element.children.is_empty() {
        out.push_str(" />\n");
        return;
    }
    out.push_str(">\n");
    for child in &element.children {
        match child {
            XmlNode::Text(text) => {
                out.push_str(&pad);
                out.push_str(INDENT);
                out.push_str(&escape_text(text));
                out.push('\n');
            }
            XmlNode::Element(e) => write_element(out, e, depth + 1),
        }
    }
    out.push_str(&pad);
    let _ = writeln!(out, "</{}>", element.name);
}

fn escape_text(text: &str) -> String {
    text.replace('&', "&amp;").replace('<', "&lt;")
}

fn escape_attribute(value: &str) -> String {
    value
        .replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('"', "&quot;")
}
