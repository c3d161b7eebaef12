/// Checks a page selection in the office suite's syntax: items separated by commas,
/// semicolons or spaces, each `N`, `N-M`, `N-` or `-M`, with 1-based page numbers.
/// `N-M` with `N > M` selects the pages in reverse and is accepted.
///
/// An empty selection is valid and stands for every page.
pub fn is_valid_page_ranges(value: &str) -> bool {
    if value.trim().is_empty() {
        return true;
    }

    let tightened = tighten_dashes(value);
    let mut items = tightened
        .split(|c: char| c == ',' || c == ';' || c.is_whitespace())
        .filter(|item| !item.is_empty())
        .peekable();

    items.peek().is_some() && items.all(is_valid_item)
}

/// Drops whitespace around dashes so `1 - 3` reads as one item rather than three.
fn tighten_dashes(value: &str) -> String {
    let mut tightened = String::with_capacity(value.len());
    let mut pending_space = false;

    for c in value.chars() {
        if c.is_whitespace() {
            pending_space = true;
            continue;
        }
        if pending_space && c != '-' && !tightened.ends_with('-') {
            tightened.push(' ');
        }
        pending_space = false;
        tightened.push(c);
    }

    tightened
}

fn is_valid_item(item: &str) -> bool {
    match item.split_once('-') {
        None => parse_page(item).is_some(),
        Some(("", "")) => false,
        Some((start, "")) => parse_page(start).is_some(),
        Some(("", end)) => parse_page(end).is_some(),
        Some((start, end)) => parse_page(start).is_some() && parse_page(end).is_some(),
    }
}

fn parse_page(value: &str) -> Option<u32> {
    if value.is_empty() || !value.chars().all(|c| c.is_ascii_digit()) {
        return None;
    }
    value.parse::<u32>().ok().filter(|page| *page > 0)
}
