//! Integration tests for utilkit

use std::fs;
use std::sync::Arc;
use std::time::Duration;
use tempfile::TempDir;
use utilkit::prelude::*;

#[tokio::test]
async fn test_retry_until_file_appears_then_rename() {
    let temp = TempDir::new().unwrap();
    let src = temp.path().join("export.tmp");
    let dst = temp.path().join("export.csv");

    let writer_path = src.clone();
    tokio::spawn(async move {
        tokio::time::sleep(Duration::from_millis(30)).await;
        fs::write(&writer_path, "id,name\n1,a\n").unwrap();
    });

    let config = RetryConfig::builder()
        .max_attempts(50)
        .interval(Duration::from_millis(10))
        .build();
    retry_with(config, || async { rename(&src, &dst, &[]) })
        .await
        .unwrap();

    assert!(!src.exists());
    assert_eq!(fs::read_to_string(&dst).unwrap(), "id,name\n1,a\n");
}

#[tokio::test]
async fn test_retry_exhaustion_reports_fs_error() {
    let temp = TempDir::new().unwrap();
    let missing = temp.path().join("never.txt");
    let dst = temp.path().join("out.txt");

    let config = RetryConfig::builder()
        .max_attempts(2)
        .interval(Duration::from_millis(1))
        .build();
    let err = RetryExecutor::new(config)
        .run_named("move_export", || async { rename(&missing, &dst, &[]) })
        .await
        .unwrap_err();

    assert_eq!(err.attempts(), Some(2));
    assert!(matches!(err.last_error(), Some(FsError::Stat { .. })));
}

#[test]
fn test_yaml_file_to_json() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("theme.yml");
    fs::write(
        &path,
        "name: dark\npalette:\n  1: '#1e1e1e'\n  2: '#d4d4d4'\n",
    )
    .unwrap();

    let json = yaml_str_to_json(&fs::read_to_string(&path).unwrap()).unwrap();
    let first = json["palette"]["1"].as_str().unwrap();
    let rgb = Rgb::from_hex(first).unwrap();

    assert_eq!(json["name"], "dark");
    assert_eq!(rgb, Rgb::new(0x1e, 0x1e, 0x1e));
    assert_eq!(rgb.to_hex(), first);
}

#[tokio::test]
async fn test_stack_shared_between_tasks() {
    let stack = Arc::new(Stack::new());

    let mut handles = Vec::new();
    for task in 0..4 {
        let stack = Arc::clone(&stack);
        handles.push(tokio::spawn(async move {
            for i in 0..25 {
                stack.push(task * 25 + i);
            }
        }));
    }
    for handle in handles {
        handle.await.unwrap();
    }

    assert_eq!(stack.len(), 100);
    let popped: Set<_> = std::iter::from_fn(|| stack.pop()).collect();
    assert_eq!(popped, (0..100).collect::<Set<_>>());
}

#[test]
fn test_set_helpers_agree_with_set_type() {
    let tags_a = ["rust", "go", "zig", "go"];
    let tags_b = ["zig", "c", "rust"];

    let a: Set<_> = tags_a.into_iter().collect();
    let b: Set<_> = tags_b.into_iter().collect();

    assert_eq!(intersect(&tags_a, &tags_b), vec!["zig", "rust"]);
    assert_eq!(a.intersection(&b), Set::from(intersect(&tags_a, &tags_b)));
    assert_eq!(except_right(&tags_a, &tags_b), vec!["go", "go"]);
    assert_eq!(except_left(&tags_a, &tags_b), vec!["c"]);
    assert_eq!(union(&tags_a, &tags_b), a.union(&b).into_vec());
}

#[test]
fn test_duration_and_validators() {
    let uptime = format_duration(Duration::from_secs(3 * 86_400 + 5 * 60));
    assert_eq!(uptime, "3d5m0s");

    let digits: String = uptime.chars().take_while(|c| c.is_ascii_digit()).collect();
    assert!(is_number(&digits));
    assert!(is_letter("d"));
}
