//! Read-only traversal helpers over a parsed document.
//!
//! Every search is iterative: [`PreOrder`] keeps an explicit stack, so
//! deeply nested legacy markup cannot exhaust the call stack.

use scraper::ElementRef;

/// Depth-first pre-order walk over `root` and all of its descendant elements.
pub struct PreOrder<'a> {
    stack: Vec<ElementRef<'a>>,
}

impl<'a> PreOrder<'a> {
    pub fn new(root: ElementRef<'a>) -> Self {
        Self { stack: vec![root] }
    }
}

impl<'a> Iterator for PreOrder<'a> {
    type Item = ElementRef<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        let element = self.stack.pop()?;
        let start = self.stack.len();
        self.stack
            .extend(element.children().filter_map(ElementRef::wrap));
        // children were pushed in document order; reverse so the first child pops first
        self.stack[start..].reverse();
        Some(element)
    }
}

/// True when the element has the given tag name.
pub fn is_tag(element: &ElementRef<'_>, tag: &str) -> bool {
    element.value().name().eq_ignore_ascii_case(tag)
}

/// First element (including `root`) matching `predicate`, in pre-order.
pub fn find_first<'a, P>(root: ElementRef<'a>, mut predicate: P) -> Option<ElementRef<'a>>
where
    P: FnMut(&ElementRef<'a>) -> bool,
{
    PreOrder::new(root).find(|element| predicate(element))
}

/// All elements (including `root`) with the given tag, in pre-order.
pub fn find_all<'a>(root: ElementRef<'a>, tag: &str) -> Vec<ElementRef<'a>> {
    PreOrder::new(root)
        .filter(|element| is_tag(element, tag))
        .collect()
}

/// First element strictly below `root` with the given tag.
pub fn first_descendant<'a>(root: ElementRef<'a>, tag: &str) -> Option<ElementRef<'a>> {
    PreOrder::new(root).skip(1).find(|element| is_tag(element, tag))
}

/// All descendant text in document order, untrimmed.
pub fn text_content(element: ElementRef<'_>) -> String {
    element.text().collect()
}

/// Text that precedes the first `tag` element below `root`, together with
/// that element. Text inside the matched element is not included.
pub fn text_before<'a>(root: ElementRef<'a>, tag: &str) -> (String, Option<ElementRef<'a>>) {
    let mut text = String::new();

    for node in root.descendants() {
        if let Some(element) = ElementRef::wrap(node) {
            if element != root && is_tag(&element, tag) {
                return (text, Some(element));
            }
        } else if let Some(chunk) = node.value().as_text() {
            text.push_str(chunk);
        }
    }

    (text, None)
}

/// Value of an attribute, if present.
pub fn attr<'a>(element: &ElementRef<'a>, name: &str) -> Option<&'a str> {
    element.value().attr(name)
}
