use super::tree::TreeBuilder;

#[test]
fn builder_ascends_out_of_completed_subtrees() {
    let mut builder = TreeBuilder::new("root".to_owned());
    builder.open("a".to_owned(), 2);
    builder.leaf("x".to_owned());
    builder.close_completed();
    builder.leaf("y".to_owned());
    builder.close_completed();

    let tree = builder.finish();
    insta::assert_snapshot!(tree.dump(), @r#"
    root
      a
        "x"
        "y"
    "#);
}

#[test]
fn zero_child_node_closes_immediately() {
    let mut builder = TreeBuilder::new("root".to_owned());
    builder.open("a".to_owned(), 2);
    builder.open("b".to_owned(), 0);
    builder.close_completed();
    // back inside `a`, not `b`
    builder.leaf("x".to_owned());
    builder.close_completed();

    let tree = builder.finish();
    insta::assert_snapshot!(tree.dump(), @r#"
    root
      a
        b
        "x"
    "#);
}

#[test]
fn root_is_never_popped() {
    let mut builder = TreeBuilder::new("root".to_owned());
    builder.open("only".to_owned(), 0);
    builder.close_completed();
    builder.close_completed();

    let tree = builder.finish();
    assert_eq!(tree.root(), 0);
    assert_eq!(tree.node(0).children.len(), 1);
}

#[test]
fn trees_serialize_for_dumping() {
    let mut builder = TreeBuilder::new("root".to_owned());
    builder.open("a".to_owned(), 1);
    builder.leaf("x".to_owned());
    builder.close_completed();

    let value = serde_json::to_value(builder.finish()).unwrap();
    assert_eq!(value["root"], 0);
    assert_eq!(value["nodes"][0]["name"], "root");
    assert_eq!(value["nodes"][1]["children"][0]["Leaf"], "x");
}
