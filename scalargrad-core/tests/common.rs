use scalargrad_core::Value;

/// Tolerance used for hand-computed reference values.
#[allow(dead_code)]
pub const ACCURACY: f64 = 1e-5;

#[allow(dead_code)]
pub fn init_logger() {
    let _ = env_logger::builder().is_test(true).try_init();
}

// Helper function to create labelled leaves for testing
#[allow(dead_code)]
pub fn leaf(data: f64, label: &str) -> Value {
    Value::new(data).with_label(label)
}

/// Labels of the sorted graph, skipping unlabelled intermediate nodes.
#[allow(dead_code)]
pub fn sorted_labels(root: &Value) -> Vec<String> {
    root.sort().iter().filter_map(Value::label).collect()
}
