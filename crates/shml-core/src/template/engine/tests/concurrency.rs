//! Sharing one parsed template across threads

use super::*;
use serde_json::json;

#[test]
fn test_template_is_send_and_sync() {
    fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<Template>();
}

#[test]
fn test_concurrent_execution_of_shared_template() {
    let mut template = Template::new();
    template.parse("${b}-${a}-${Data|json}");

    std::thread::scope(|scope| {
        let handles: Vec<_> = (0..8)
            .map(|i| {
                let template = &template;
                scope.spawn(move || {
                    let data = json!({"a": i, "b": i * 10, "Data": {"n": i}});
                    let out = template.execute(&data).unwrap();
                    (i, String::from_utf8(out).unwrap())
                })
            })
            .collect();

        for handle in handles {
            let (i, out) = handle.join().unwrap();
            assert_eq!(out, format!("{}-{}-{{\"n\":{}}}", i * 10, i, i));
        }
    });
}

#[test]
fn test_repeated_execution_is_stable() {
    let mut template = Template::new();
    template.parse("${z} ${y} ${x}");
    let data = json!({"x": 1, "y": 2, "z": 3});
    let first = template.execute(&data).unwrap();
    for _ in 0..10 {
        assert_eq!(template.execute(&data).unwrap(), first);
    }
    assert_eq!(first, b"3 2 1");
}
