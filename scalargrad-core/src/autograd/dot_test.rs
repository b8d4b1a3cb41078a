use crate::value::Value;

#[test]
fn test_dot_leaf_only() {
    let a = Value::new(1.5).with_label("a");
    let dot = a.to_dot();
    assert!(dot.starts_with("digraph computation {"));
    assert!(dot.contains("n0 [shape=record, label=\"{ a | data 1.5000 | grad 0.0000 }\"];"));
    assert!(!dot.contains("_op"));
    assert!(dot.trim_end().ends_with('}'));
}

#[test]
fn test_dot_wires_operands_through_op_node() {
    let a = Value::new(2.0).with_label("a");
    let b = Value::new(-3.0).with_label("b");
    let c = (&a * &b).with_label("c");
    c.backward();

    let dot = c.to_dot();
    assert!(dot.contains("n2_op [label=\"mul\"];"));
    assert!(dot.contains("n2_op -> n2;"));
    assert!(dot.contains("n0 -> n2_op;"));
    assert!(dot.contains("n1 -> n2_op;"));
    assert!(dot.contains("{ c | data -6.0000 | grad 1.0000 }"));
    assert!(dot.contains("{ a | data 2.0000 | grad -3.0000 }"));
}

#[test]
fn test_dot_uses_composite_tags() {
    let a = Value::new(1.0);
    let b = Value::new(4.0);
    let d = &a / &b;
    let dot = d.to_dot();
    assert!(dot.contains("[label=\"div\"]"));
    assert!(dot.contains("[label=\"pow\"]"));
}

#[test]
fn test_dot_escapes_record_characters() {
    let a = Value::new(0.0).with_label("x|y");
    let dot = a.to_dot();
    assert!(dot.contains("x\\|y"));
}
