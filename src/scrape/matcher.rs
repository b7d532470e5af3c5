use ego_tree::NodeRef;
use scraper::Node;

/// True when `node` is an element with the given tag name.
pub(crate) fn is_element(node: &Node, name: &str) -> bool {
    node.as_element().map_or(false, |el| el.name() == name)
}

/// Depth-first search in document order: the node itself, then its
/// children left to right. Returns the first node the predicate accepts.
pub(crate) fn find_node<'a, F>(node: NodeRef<'a, Node>, matches: &F) -> Option<NodeRef<'a, Node>>
where
    F: Fn(&Node) -> bool,
{
    if matches(node.value()) {
        return Some(node);
    }
    node.children().find_map(|child| find_node(child, matches))
}

#[cfg(test)]
mod tests {
    use super::*;
    use scraper::Html;

    #[test]
    fn finds_first_match_in_document_order() {
        let doc = Html::parse_document("<div><p id='a'></p></div><p id='b'></p>");
        let found = find_node(doc.tree.root(), &|n: &Node| is_element(n, "p")).unwrap();
        let id = found.value().as_element().unwrap().attr("id");
        assert_eq!(id, Some("a"));
    }

    #[test]
    fn returns_none_when_nothing_matches() {
        let doc = Html::parse_document("<div><span></span></div>");
        assert!(find_node(doc.tree.root(), &|n: &Node| is_element(n, "table")).is_none());
    }

    #[test]
    fn matches_text_nodes_by_kind() {
        let doc = Html::parse_document("<p>hello</p>");
        let found = find_node(doc.tree.root(), &|n: &Node| n.is_text()).unwrap();
        assert_eq!(&**found.value().as_text().unwrap(), "hello");
    }
}
