use tracing::debug;
use url::Url;

use crate::meeting::Link;
use crate::parser::tree::{Anchor, Cell};

const MAP_PHRASE: &str = "map it";
const MAP_TITLE: &str = "Map Link";

/// Map links from the location cell, then document links from the links cell.
pub fn extract(location_cell: &Cell<'_>, links_cell: &Cell<'_>, base: &Url) -> Vec<Link> {
    let mut links = map_links(&location_cell.anchors());
    links.extend(document_links(&links_cell.anchors(), base));
    links
}

/// Map anchors keep their href verbatim; "map it" titles become "Map Link".
pub fn map_links(anchors: &[Anchor]) -> Vec<Link> {
    anchors
        .iter()
        .filter_map(|a| {
            let href = non_empty_href(a)?;
            let mut title = a.text.trim().to_string();
            if title.to_lowercase().contains(MAP_PHRASE) {
                title = MAP_TITLE.to_string();
            }
            Some(Link::new(title, href))
        })
        .collect()
}

/// Document anchors with hrefs made absolute against `base`.
pub fn document_links(anchors: &[Anchor], base: &Url) -> Vec<Link> {
    anchors
        .iter()
        .filter_map(|a| {
            let href = non_empty_href(a)?;
            match resolve(base, href) {
                Some(abs) => Some(Link::new(a.text.trim(), abs)),
                None => {
                    debug!(href, "dropping link that does not resolve");
                    None
                }
            }
        })
        .collect()
}

/// Absolute hrefs pass through untouched; relative ones are joined onto `base`.
pub fn resolve(base: &Url, href: &str) -> Option<String> {
    if Url::parse(href).is_ok() {
        return Some(href.to_string());
    }
    base.join(href).ok().map(String::from)
}

fn non_empty_href(anchor: &Anchor) -> Option<&str> {
    anchor.href.as_deref().filter(|h| !h.trim().is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn anchor(text: &str, href: Option<&str>) -> Anchor {
        Anchor {
            text: text.to_string(),
            href: href.map(str::to_string),
        }
    }

    fn base() -> Url {
        Url::parse("https://meetings.example").unwrap()
    }

    #[test]
    fn resolve_relative_and_absolute() {
        let b = base();
        assert_eq!(
            resolve(&b, "/Public/Agenda/1?m=7").as_deref(),
            Some("https://meetings.example/Public/Agenda/1?m=7")
        );
        assert_eq!(
            resolve(&b, "https://other.example/doc.pdf").as_deref(),
            Some("https://other.example/doc.pdf")
        );
        assert_eq!(
            resolve(&b, "Public/Projector/1").as_deref(),
            Some("https://meetings.example/Public/Projector/1")
        );
    }

    #[test]
    fn map_then_documents() {
        let map = vec![anchor(" map it ", Some("https://maps.example/x"))];
        let docs = vec![
            anchor("Agenda", Some("/Public/Agenda/1?m=7")),
            anchor("Projector", Some("/Public/Projector/1?m=7")),
        ];
        let mut links = map_links(&map);
        links.extend(document_links(&docs, &base()));
        assert_eq!(
            links,
            vec![
                Link::new("Map Link", "https://maps.example/x"),
                Link::new("Agenda", "https://meetings.example/Public/Agenda/1?m=7"),
                Link::new("Projector", "https://meetings.example/Public/Projector/1?m=7"),
            ]
        );
    }

    #[test]
    fn map_phrase_is_case_insensitive() {
        let links = map_links(&[anchor("Map It", Some("https://maps.example/y"))]);
        assert_eq!(links[0].title, "Map Link");
        let links = map_links(&[anchor("Directions", Some("https://maps.example/z"))]);
        assert_eq!(links[0].title, "Directions");
    }

    #[test]
    fn missing_href_dropped_empty_title_kept() {
        let docs = vec![
            anchor("No target", None),
            anchor("Blank", Some("  ")),
            anchor("   ", Some("/Public/Minutes/3")),
        ];
        let links = document_links(&docs, &base());
        assert_eq!(
            links,
            vec![Link::new("", "https://meetings.example/Public/Minutes/3")]
        );
        assert!(map_links(&[anchor("map it", None)]).is_empty());
    }
}
