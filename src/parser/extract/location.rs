use crate::meeting::Location;
use crate::parser::patterns::normalize_ws;
use crate::parser::tree::Cell;

pub fn extract(cell: &Cell<'_>) -> Location {
    from_lines(&cell.span_texts())
}

/// Name from the first line; address from the next two non-empty lines.
pub fn from_lines(lines: &[String]) -> Location {
    let mut lines = lines.iter().map(|l| normalize_ws(l));
    let name = lines.next().unwrap_or_default();
    let address = lines
        .take(2)
        .filter(|l| !l.is_empty())
        .collect::<Vec<_>>()
        .join(", ");
    Location { name, address }
}
