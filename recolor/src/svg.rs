use crate::config::{Config, MalformedPolicy};
use crate::error::IngestError;
use crate::limits;
use crate::model::{Parsed, ShapeDescriptor, ShapeKind, UploadMeta};
use log::{debug, info, warn};
use roxmltree::{Document, Node, ParsingOptions};

const XML_NS: &str = "http://www.w3.org/XML/1998/namespace";
const XLINK_NS: &str = "http://www.w3.org/1999/xlink";

pub fn check_upload_impl(meta: Option<&UploadMeta>) -> Result<(), IngestError> {
    let meta = meta.ok_or(IngestError::NoFileSelected)?;
    if !meta.mime.contains("svg") {
        warn!("rejecting upload '{}' with type '{}'", meta.name, meta.mime);
        return Err(IngestError::NotSvgMimeType { mime: meta.mime.clone() });
    }
    Ok(())
}

pub fn parse_svg_impl(text: &str, config: &Config) -> Result<Parsed, IngestError> {
    if !limits::in_size_bounds(text.len()) {
        return Err(IngestError::TooLarge { len: text.len(), max: limits::MAX_SVG_BYTES });
    }
    let mut opt = ParsingOptions::default();
    opt.allow_dtd = true;
    let doc = match Document::parse_with_options(text, opt) {
        Ok(doc) => doc,
        Err(e) => match config.malformed {
            MalformedPolicy::Reject => return Err(e.into()),
            MalformedPolicy::Empty => {
                warn!("document is not well-formed ({}), loading it as empty", e);
                return Ok(Parsed::default());
            }
        },
    };
    let root = doc.root_element();
    if root.tag_name().name() != "svg" && config.malformed == MalformedPolicy::Reject {
        return Err(IngestError::NotSvg { root: root.tag_name().name().to_string() });
    }

    let mut parsed = Parsed::default();
    for node in doc.descendants().filter(|n| n.is_element()) {
        let Some(kind) = ShapeKind::from_tag(node.tag_name().name()) else { continue };
        let index = parsed.shapes.len();
        if !limits::in_shape_bounds(index + 1) {
            return Err(IngestError::TooManyShapes { max: limits::MAX_SHAPES });
        }
        let id = match node.attribute("id") {
            Some(v) if !v.is_empty() => v.to_string(),
            _ => format!("region-{}", index),
        };
        let fill = match node.attribute("fill") {
            Some(v) if !v.is_empty() => v.to_string(),
            _ => config.default_fill.clone(),
        };
        // Duplicate ids: last one wins in the mapping, both shapes stay in the list.
        if parsed.colors.insert(id.clone(), fill).is_some() {
            debug!("duplicate region id '{}'", id);
        }
        parsed.shapes.push(ShapeDescriptor { id, kind, attributes: copy_attributes(node) });
    }
    info!("ingested {} shapes ({} distinct ids)", parsed.shapes.len(), parsed.colors.len());
    Ok(parsed)
}

fn copy_attributes(node: Node<'_, '_>) -> Vec<(String, String)> {
    node.attributes()
        .filter(|a| {
            let handler = is_event_handler(a.name());
            if handler {
                debug!("dropping '{}' on <{}>", a.name(), node.tag_name().name());
            }
            !handler
        })
        .map(|a| (qualified_name(node, a.namespace(), a.name()), a.value().to_string()))
        .collect()
}

/// `onclick`, `onload` and friends, in any case.
pub(crate) fn is_event_handler(name: &str) -> bool {
    name.get(..2).map_or(false, |p| p.eq_ignore_ascii_case("on"))
}

fn qualified_name(node: Node<'_, '_>, ns: Option<&str>, local: &str) -> String {
    let prefix = match ns {
        None => return local.to_string(),
        Some(XML_NS) => Some("xml"),
        Some(XLINK_NS) => Some("xlink"),
        Some(uri) => node.lookup_prefix(uri),
    };
    match prefix {
        Some(p) if !p.is_empty() => format!("{}:{}", p, local),
        _ => local.to_string(),
    }
}
