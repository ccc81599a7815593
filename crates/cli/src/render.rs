use docscope_api::models::InheritanceNode;

/// Render a hierarchy as an indented box-drawing tree, one entity per line.
pub fn render_tree(root: &InheritanceNode) -> String {
    let mut out = String::new();
    out.push_str(&label(root));
    out.push('\n');

    // (node, prefix for its own line, prefix for its children)
    let mut stack: Vec<(&InheritanceNode, String, String)> = Vec::new();
    push_children(&mut stack, root, "");

    while let Some((node, line_prefix, child_prefix)) = stack.pop() {
        out.push_str(&line_prefix);
        out.push_str(&label(node));
        out.push('\n');
        push_children(&mut stack, node, &child_prefix);
    }
    out
}

fn push_children<'a>(
    stack: &mut Vec<(&'a InheritanceNode, String, String)>,
    node: &'a InheritanceNode,
    prefix: &str,
) {
    let last = node.children.len().saturating_sub(1);
    for (i, child) in node.children.iter().enumerate().rev() {
        let (branch, cont) = if i == last {
            ("└── ", "    ")
        } else {
            ("├── ", "│   ")
        };
        stack.push((child, format!("{prefix}{branch}"), format!("{prefix}{cont}")));
    }
}

fn label(node: &InheritanceNode) -> String {
    if node.is_interface() {
        format!("{} (interface)", node.entity)
    } else {
        node.entity.to_string()
    }
}
