//! Typed queries over a parsed listing page. Extractors only see [`Row`] and
//! [`Cell`]; nothing past this module touches the concrete tree.

use std::sync::LazyLock;

use scraper::{ElementRef, Html, Selector};

static DIV: LazyLock<Selector> = LazyLock::new(|| Selector::parse("div").unwrap());
static SPAN: LazyLock<Selector> = LazyLock::new(|| Selector::parse("span").unwrap());
static ANCHOR: LazyLock<Selector> = LazyLock::new(|| Selector::parse("a").unwrap());

/// A parsed listing page.
pub struct ListingPage {
    html: Html,
}

impl ListingPage {
    pub fn parse(markup: &str) -> Self {
        ListingPage {
            html: Html::parse_document(markup),
        }
    }

    /// Rows matching `marker`, in document order. Lazy.
    pub fn rows<'a>(&'a self, marker: &'a Selector) -> impl Iterator<Item = Row<'a>> + 'a {
        self.html.select(marker).map(Row)
    }
}

/// One candidate meeting row.
#[derive(Clone, Copy)]
pub struct Row<'a>(ElementRef<'a>);

impl<'a> Row<'a> {
    /// The `index`-th `td` child. A missing cell is an empty [`Cell`].
    pub fn cell(&self, index: usize) -> Cell<'a> {
        let el = self
            .0
            .children()
            .filter_map(ElementRef::wrap)
            .filter(|e| e.value().name() == "td")
            .nth(index);
        Cell(el)
    }

    #[cfg(test)]
    pub fn cell_count(&self) -> usize {
        self.0
            .children()
            .filter_map(ElementRef::wrap)
            .filter(|e| e.value().name() == "td")
            .count()
    }
}

/// A row cell, possibly absent. Every query on an absent cell is empty.
#[derive(Clone, Copy)]
pub struct Cell<'a>(Option<ElementRef<'a>>);

/// An `<a>` element: its visible text (untrimmed) and raw `href`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Anchor {
    pub text: String,
    pub href: Option<String>,
}

impl<'a> Cell<'a> {
    /// First non-blank direct text of a `div` in the cell. Cells without
    /// div text fall back to the first non-blank descendant text node.
    pub fn first_text(&self) -> Option<&'a str> {
        let el = self.0?;
        el.select(&DIV)
            .find_map(|div| direct_texts(div).next())
            .or_else(|| el.text().find(|t| !t.trim().is_empty()))
    }

    /// Full text content of the cell.
    pub fn text(&self) -> String {
        self.0.map(|el| el.text().collect()).unwrap_or_default()
    }

    /// Each non-blank direct text node of every `span` descendant, in
    /// document order. A `<br>` inside a span yields two entries.
    pub fn span_texts(&self) -> Vec<String> {
        let Some(el) = self.0 else {
            return Vec::new();
        };
        el.select(&SPAN)
            .flat_map(direct_texts)
            .map(str::to_string)
            .collect()
    }

    /// Every `a` descendant, in document order.
    pub fn anchors(&self) -> Vec<Anchor> {
        let Some(el) = self.0 else {
            return Vec::new();
        };
        el.select(&ANCHOR)
            .map(|a| Anchor {
                text: a.text().collect(),
                href: a.value().attr("href").map(str::to_string),
            })
            .collect()
    }
}

fn direct_texts<'a>(el: ElementRef<'a>) -> impl Iterator<Item = &'a str> {
    el.children()
        .filter_map(|n| n.value().as_text().map(|t| &**t))
        .filter(|t| !t.trim().is_empty())
}
