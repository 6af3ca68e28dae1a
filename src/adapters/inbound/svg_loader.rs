use std::fs;
use std::path::Path;

use crate::common::{DomainError, DomainResult};
use crate::domains::arena::types::{Circle, Scene};

/// Reads fixture markup back into a `Scene`.
/// The first parsable `<circle>` is the arena, the rest are obstacles in
/// document order. Circles with unparsable numbers are skipped.
pub struct SvgSceneLoader;

impl SvgSceneLoader {
    pub fn load(path: impl AsRef<Path>) -> DomainResult<Scene> {
        let content = fs::read_to_string(path.as_ref())
            .map_err(|e| DomainError::InfrastructureError(format!("{}", e)))?;
        Self::parse(&content)
    }

    pub fn parse(content: &str) -> DomainResult<Scene> {
        let svg_tag = find_tag(content, "<svg", 0)
            .map(|(tag, _)| tag)
            .ok_or_else(|| parse_error("missing <svg> element"))?;
        let width = parse_attr::<u32>(svg_tag, "width")
            .ok_or_else(|| parse_error("missing or invalid svg width"))?;
        let height = parse_attr::<u32>(svg_tag, "height")
            .ok_or_else(|| parse_error("missing or invalid svg height"))?;

        let mut circles = Vec::new();
        let mut pos = 0;
        while let Some((tag, next)) = find_tag(content, "<circle", pos) {
            pos = next;
            let parsed = (
                parse_attr::<f64>(tag, "cx"),
                parse_attr::<f64>(tag, "cy"),
                parse_attr::<f64>(tag, "r"),
            );
            if let (Some(cx), Some(cy), Some(r)) = parsed {
                circles.push(Circle::new(cx, cy, r));
            }
        }

        let mut circles = circles.into_iter();
        let arena = circles.next().ok_or_else(|| parse_error("no circle elements"))?;
        Ok(Scene::new(width, height, arena, circles.collect()))
    }
}

fn parse_error(reason: &str) -> DomainError {
    DomainError::Parse { reason: reason.to_string() }
}

/// Returns the tag text starting at `open` and the offset just past its `>`.
fn find_tag<'a>(content: &'a str, open: &str, from: usize) -> Option<(&'a str, usize)> {
    let start = from + content.get(from..)?.find(open)?;
    let end = start + content[start..].find('>')?;
    Some((&content[start..=end], end + 1))
}

fn attr_value<'a>(tag: &'a str, key: &str) -> Option<&'a str> {
    let needle = format!("{}=\"", key);
    let mut search = 0;
    while let Some(offset) = tag[search..].find(&needle) {
        let at = search + offset;
        let at_boundary = tag[..at].chars().last().map_or(false, char::is_whitespace);
        let value_start = at + needle.len();
        if at_boundary {
            let len = tag[value_start..].find('"')?;
            return Some(&tag[value_start..value_start + len]);
        }
        search = value_start;
    }
    None
}

fn parse_attr<T: std::str::FromStr>(tag: &str, key: &str) -> Option<T> {
    attr_value(tag, key)?.trim().parse().ok()
}
