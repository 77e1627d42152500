//! Locating the one content table a page carries for an entity.

use scraper::ElementRef;

use crate::parser::tree::{attr, find_first, is_tag, text_content};

/// Class tokens shared by every bordered content box on the site.
pub const CONTENT_TABLE_CLASSES: [&str; 2] = ["TableContent", "InnerBorder"];

/// Heading that precedes the death log on a character page.
pub const DEATHS_MARKER: &str = "Character Deaths";

/// A `table` whose class attribute carries both content-box tokens.
pub fn is_content_table(element: &ElementRef<'_>) -> bool {
    if !is_tag(element, "table") {
        return false;
    }
    let Some(class) = attr(element, "class") else {
        return false;
    };
    CONTENT_TABLE_CLASSES
        .iter()
        .all(|token| class.contains(token))
}

/// First content table in the document.
pub fn content_table<'a>(root: ElementRef<'a>) -> Option<ElementRef<'a>> {
    find_first(root, is_content_table)
}

/// First content table that also holds a `tbody` row group.
///
/// Listing pages nest their data under a row group, while décor boxes
/// sharing the same classes do not.
pub fn listing_table<'a>(root: ElementRef<'a>) -> Option<ElementRef<'a>> {
    find_first(root, |element| {
        is_content_table(element) && find_first(*element, |e| is_tag(e, "tbody")).is_some()
    })
}

/// The table that follows the "Character Deaths" heading, if the page has one.
pub fn deaths_table<'a>(root: ElementRef<'a>) -> Option<ElementRef<'a>> {
    let heading = deepest_containing(root, DEATHS_MARKER)?;
    next_table_after(heading)
}

/// Deepest element whose text contains `marker`.
fn deepest_containing<'a>(root: ElementRef<'a>, marker: &str) -> Option<ElementRef<'a>> {
    if !text_content(root).contains(marker) {
        return None;
    }

    let mut current = root;
    while let Some(child) = current
        .children()
        .filter_map(ElementRef::wrap)
        .find(|child| text_content(*child).contains(marker))
    {
        current = child;
    }
    Some(current)
}

/// Next table in document order after `start`.
///
/// Following siblings are searched first; when they hold no table the walk
/// moves up one level. An enclosing table reached on the way up is the
/// heading's own table.
fn next_table_after<'a>(start: ElementRef<'a>) -> Option<ElementRef<'a>> {
    let mut current = start;
    loop {
        for sibling in current.next_siblings().filter_map(ElementRef::wrap) {
            if let Some(table) = find_first(sibling, |e| is_tag(e, "table")) {
                return Some(table);
            }
        }

        let parent = current.parent().and_then(ElementRef::wrap)?;
        if is_tag(&parent, "table") {
            return Some(parent);
        }
        current = parent;
    }
}
