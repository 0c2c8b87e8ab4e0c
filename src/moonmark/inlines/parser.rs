use super::nodes::{InlineContent, InlineNode};
use super::tokens::{tokenize, InlineToken};

/// Parse `**strong**` and `*emphasis*` spans from a raw payload.
///
/// Delimiters pair left to right with the nearest closing delimiter. Strong spans are
/// resolved first over the whole payload; emphasis then pairs within each strong span
/// and within the text around them. An emphasis span may enclose a whole strong span
/// but never cuts one in half, so the output always nests. Unmatched delimiters and
/// delimiters with nothing between them stay literal.
pub fn parse_inlines(text: &str) -> InlineContent {
    if text.is_empty() {
        return Vec::new();
    }

    let mut outer: Vec<Piece> = Vec::new();
    // Pieces collected since an unclosed `**`.
    let mut strong: Option<Vec<Piece>> = None;

    for (token, span) in tokenize(text) {
        match token {
            InlineToken::StrongMarker => match strong.take() {
                None => strong = Some(Vec::new()),
                Some(inner) if inner.is_empty() => outer.push(Piece::Text("****".to_string())),
                Some(inner) => outer.push(Piece::Node(InlineNode::Strong(pair_emphasis(inner)))),
            },
            InlineToken::EmphasisMarker => target(&mut outer, &mut strong).push(Piece::Star),
            InlineToken::Text => {
                target(&mut outer, &mut strong).push(Piece::Text(text[span].to_string()))
            }
        }
    }

    if let Some(inner) = strong {
        outer.push(Piece::Text("**".to_string()));
        outer.extend(inner);
    }

    pair_emphasis(outer)
}

/// Intermediate unit between strong and emphasis pairing.
#[derive(Debug, Clone, PartialEq)]
enum Piece {
    Text(String),
    Star,
    Node(InlineNode),
}

fn target<'a>(outer: &'a mut Vec<Piece>, strong: &'a mut Option<Vec<Piece>>) -> &'a mut Vec<Piece> {
    match strong {
        Some(inner) => inner,
        None => outer,
    }
}

fn pair_emphasis(pieces: Vec<Piece>) -> InlineContent {
    let mut root = InlineBuilder::default();
    let mut open: Option<InlineBuilder> = None;

    for piece in pieces {
        match piece {
            Piece::Star => match open.take() {
                None => open = Some(InlineBuilder::default()),
                Some(inner) if inner.is_empty() => root.push_text("**"),
                Some(inner) => root.push_node(InlineNode::Emphasis(inner.finish())),
            },
            Piece::Text(text) => open.as_mut().unwrap_or(&mut root).push_text(&text),
            Piece::Node(node) => open.as_mut().unwrap_or(&mut root).push_node(node),
        }
    }

    if let Some(inner) = open {
        root.push_text("*");
        for node in inner.finish() {
            root.push_node(node);
        }
    }

    root.finish()
}

/// Collects inline nodes, merging adjacent plain text.
#[derive(Default)]
struct InlineBuilder {
    children: InlineContent,
}

impl InlineBuilder {
    fn is_empty(&self) -> bool {
        self.children.is_empty()
    }

    fn push_text(&mut self, text: &str) {
        if text.is_empty() {
            return;
        }
        if let Some(InlineNode::Plain(existing)) = self.children.last_mut() {
            existing.push_str(text);
        } else {
            self.children.push(InlineNode::Plain(text.to_string()));
        }
    }

    fn push_node(&mut self, node: InlineNode) {
        match node {
            InlineNode::Plain(text) => self.push_text(&text),
            other => self.children.push(other),
        }
    }

    fn finish(self) -> InlineContent {
        self.children
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn plain(text: &str) -> InlineNode {
        InlineNode::Plain(text.into())
    }

    #[test]
    fn parses_plain_text() {
        assert_eq!(parse_inlines("hello world"), vec![plain("hello world")]);
    }

    #[test]
    fn empty_input_has_no_nodes() {
        assert!(parse_inlines("").is_empty());
    }

    #[test]
    fn parses_strong_and_emphasis() {
        let nodes = parse_inlines("**mạnh** và *nghiêng*");
        assert_eq!(
            nodes,
            vec![
                InlineNode::Strong(vec![plain("mạnh")]),
                plain(" và "),
                InlineNode::Emphasis(vec![plain("nghiêng")]),
            ]
        );
    }

    #[test]
    fn emphasis_inside_strong() {
        let nodes = parse_inlines("**a *b* c**");
        assert_eq!(
            nodes,
            vec![InlineNode::Strong(vec![
                plain("a "),
                InlineNode::Emphasis(vec![plain("b")]),
                plain(" c"),
            ])]
        );
    }

    #[test]
    fn emphasis_may_enclose_strong() {
        let nodes = parse_inlines("*a **b** c*");
        assert_eq!(
            nodes,
            vec![InlineNode::Emphasis(vec![
                plain("a "),
                InlineNode::Strong(vec![plain("b")]),
                plain(" c"),
            ])]
        );
    }

    #[test]
    fn emphasis_never_cuts_strong() {
        let nodes = parse_inlines("**a *b** c*");
        assert_eq!(
            nodes,
            vec![InlineNode::Strong(vec![plain("a *b")]), plain(" c*")]
        );
    }

    #[test]
    fn nearest_closing_delimiter_wins() {
        let nodes = parse_inlines("**a** b **c**");
        assert_eq!(
            nodes,
            vec![
                InlineNode::Strong(vec![plain("a")]),
                plain(" b "),
                InlineNode::Strong(vec![plain("c")]),
            ]
        );
    }

    #[test]
    fn unmatched_strong_is_literal() {
        assert_eq!(parse_inlines("prefix **text"), vec![plain("prefix **text")]);
    }

    #[test]
    fn unmatched_strong_keeps_inner_emphasis() {
        let nodes = parse_inlines("**a *b* c");
        assert_eq!(
            nodes,
            vec![
                plain("**a "),
                InlineNode::Emphasis(vec![plain("b")]),
                plain(" c")
            ]
        );
    }

    #[test]
    fn unmatched_emphasis_is_literal() {
        assert_eq!(parse_inlines("5 * 3 = 15"), vec![plain("5 * 3 = 15")]);
    }

    #[test]
    fn empty_spans_are_literal() {
        assert_eq!(parse_inlines("a **** b"), vec![plain("a **** b")]);
    }

    #[test]
    fn triple_star_nests_without_crossing() {
        let nodes = parse_inlines("***x***");
        assert_eq!(
            nodes,
            vec![InlineNode::Strong(vec![plain("*x")]), plain("*")]
        );
    }
}
