use scraper::{Html, Node};

use super::matcher::{find_node, is_element};

/// Class token marking the trending list; the live page uses a
/// multi-class attribute (`class="no-bullet trending"`), so this is a
/// substring match rather than an exact one.
const TRENDING_CLASS: &str = "trending";

/// Collect the trending terms from a listing page, in on-page order.
///
/// The terms live in `<ul class="no-bullet trending"><li><a>term</a></li>…`.
/// Returns an empty list when no such container exists.
///
/// Once the container is found the page layout is trusted: an `<li>`
/// without an anchor child, or an anchor without text, means the page
/// format changed and everything after it is unreliable, so collection
/// stops at the items gathered so far.
pub(crate) fn find_trending(doc: &Html) -> Vec<String> {
    let container = match find_node(doc.tree.root(), &is_trending_list) {
        Some(node) => node,
        None => return Vec::new(),
    };

    let mut terms = Vec::new();
    for item in container.children() {
        if !is_element(item.value(), "li") {
            continue;
        }
        let anchor = match item.children().find(|c| is_element(c.value(), "a")) {
            Some(node) => node,
            None => break,
        };
        let text = match anchor.children().find_map(|c| c.value().as_text()) {
            Some(text) => text,
            None => break,
        };
        terms.push(text.to_string());
    }
    terms
}

fn is_trending_list(node: &Node) -> bool {
    node.as_element().map_or(false, |el| {
        el.name() == "ul"
            && el
                .attr("class")
                .map_or(false, |class| class.contains(TRENDING_CLASS))
    })
}
