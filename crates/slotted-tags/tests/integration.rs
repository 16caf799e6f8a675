use slotted_tags::{is_blank, parse, to_markup, ParseNode, Parser, TagDiagnostic};

/// Collects every leading text and markup marker in document order.
fn flatten<'a>(nodes: &[ParseNode<'a>], out: &mut Vec<&'a str>) {
    for node in nodes {
        out.push(node.text);
        if let Some(tag) = &node.tag {
            out.push(tag.open);
            flatten(&tag.children, out);
            out.push(tag.close);
        }
    }
}

#[test]
fn test_flatten_law() {
    let input = "a<i>b<i>c</i>d</i>e";
    let mut pieces = Vec::new();
    flatten(&parse(input), &mut pieces);

    assert_eq!(
        pieces,
        vec!["a", "<i>", "b", "<i>", "c", "</i>", "d", "</i>", "e"]
    );
    assert_eq!(pieces.concat(), input);
}

#[test]
fn test_nested_same_name_depth() {
    let nodes = parse("<i>a<i>b</i>c</i>");
    let outer = &nodes[0];
    assert_eq!(outer.tag_name(), "i");

    let content = outer.children();
    assert_eq!(content.len(), 2);
    assert_eq!(content[0].text, "a");
    assert_eq!(content[0].tag_name(), "i");
    assert_eq!(content[0].children(), &[ParseNode::literal("b")]);
    assert_eq!(content[1], ParseNode::literal("c"));

    assert!(is_blank(&nodes[1..]));
}

#[test]
fn test_unterminated_fallback() {
    assert_eq!(
        parse("<b>never closed"),
        vec![ParseNode::literal("<b>never closed")]
    );
}

#[test]
fn test_realistic_message() {
    let input = "By continuing you accept the <terms>Terms of <b>Service</b></terms> \
                 and <privacy>Privacy Policy</privacy>.";
    let nodes = parse(input);

    let names: Vec<_> = nodes.iter().map(ParseNode::tag_name).collect();
    assert_eq!(names, vec!["terms", "privacy", ""]);
    assert_eq!(nodes[1].text, " and ");
    assert_eq!(nodes[2].text, ".");

    let terms = nodes[0].children();
    assert_eq!(terms[0].text, "Terms of ");
    assert_eq!(terms[0].tag_name(), "b");
    assert_eq!(to_markup(&nodes), input);
}

#[test]
fn test_diagnostics_in_input_order() {
    let parsed = Parser::new().parse_with_diagnostics("<a>1<b>2</a><c>");
    let offsets: Vec<_> = parsed.diagnostics.iter().map(TagDiagnostic::offset).collect();
    assert_eq!(offsets, vec![4, 12]);
    assert_eq!(to_markup(&parsed.nodes), "<a>1<b>2</a><c>");
}
