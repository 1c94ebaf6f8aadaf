//! Integration tests for twig

mod harness;

use harness::{TestDir, run_twig};
use twig::JsonNode;

#[test]
fn test_basic_tree_output() {
    let dir = TestDir::new();
    dir.add_file("src/main.rs");
    dir.add_file("src/lib.rs");
    dir.add_file("Cargo.toml");

    let (stdout, _stderr, success) = run_twig(dir.path(), &[]);
    assert!(success, "twig should succeed");
    assert_eq!(
        stdout,
        [".", "├── Cargo.toml", "└── src", "    ├── lib.rs", "    └── main.rs", ""].join("\n")
    );
}

#[test]
fn test_sample_tree_default_format() {
    let dir = TestDir::new();
    dir.sample_tree();

    let (stdout, _stderr, success) = run_twig(dir.path(), &["contents"]);
    assert!(success);
    assert_eq!(
        stdout,
        [
            "contents",
            "├── a",
            "│   ├── a1",
            "│   ├── a2",
            "│   │   └── aa",
            "│   └── a3",
            "├── b",
            "└── c\\ 0",
            "    └── c\\ c",
            "",
        ]
        .join("\n")
    );
}

#[test]
fn test_show_all_flag() {
    let dir = TestDir::new();
    dir.add_file(".hidden");
    dir.add_file("normal");

    let (stdout, _stderr, success) = run_twig(dir.path(), &[]);
    assert!(success);
    assert_eq!(stdout, ".\n└── normal\n");

    let (stdout, _stderr, success) = run_twig(dir.path(), &["-a"]);
    assert!(success);
    assert_eq!(stdout, ".\n├── .hidden\n└── normal\n");
}

#[test]
fn test_depth_limit() {
    let dir = TestDir::new();
    dir.add_file("top.txt");
    dir.add_file("level1/mid.txt");
    dir.add_file("level1/level2/deep.txt");

    let (stdout, _stderr, success) = run_twig(dir.path(), &["-L", "1"]);
    assert!(success);
    assert_eq!(stdout, ".\n├── level1\n└── top.txt\n");

    let (stdout, _stderr, success) = run_twig(dir.path(), &["--level", "2"]);
    assert!(success);
    assert!(stdout.contains("mid.txt"));
    assert!(stdout.contains("level2"));
    assert!(!stdout.contains("deep.txt"), "should not show deep files: {}", stdout);
}

#[test]
fn test_multiple_roots_in_order() {
    let dir = TestDir::new();
    dir.add_file("one/x");
    dir.add_file("two/y");

    let (stdout, _stderr, success) = run_twig(dir.path(), &["two", "one"]);
    assert!(success);
    assert_eq!(stdout, "two\n└── y\none\n└── x\n");
}

#[test]
fn test_missing_root_does_not_stop_others() {
    let dir = TestDir::new();
    dir.add_file("valid/file");

    let (stdout, stderr, success) = run_twig(dir.path(), &["valid", "missing", "valid"]);
    assert!(success, "read failures should not fail the run");
    assert_eq!(
        stdout,
        "valid\n└── file\nmissing [error opening dir]\nvalid\n└── file\n"
    );
    assert!(stderr.contains("cannot read directory"), "should log the failure: {}", stderr);
}

#[test]
fn test_json_output() {
    let dir = TestDir::new();
    dir.sample_tree();

    let (stdout, _stderr, success) = run_twig(dir.path(), &["-J", "contents"]);
    assert!(success, "twig -J should succeed");

    let nodes: Vec<JsonNode> = serde_json::from_str(&stdout).expect("output should be valid JSON");
    assert_eq!(nodes.len(), 1);
    let root = &nodes[0];
    assert_eq!(root.name(), "contents");
    assert!(root.is_dir());
    let names: Vec<_> = root.children().map(JsonNode::name).collect();
    assert_eq!(names, vec!["a", "b", "c 0"]);
}

#[test]
fn test_json_generic_structure() {
    let dir = TestDir::new();
    dir.add_file("d/f");

    let (stdout, _stderr, success) = run_twig(dir.path(), &["--json", "d"]);
    assert!(success);

    let json: serde_json::Value = serde_json::from_str(&stdout).unwrap();
    assert!(json.is_array());
    assert_eq!(json[0]["type"], "directory");
    assert_eq!(json[0]["name"], "d");
    assert_eq!(json[0]["contents"][0]["type"], "file");
    assert_eq!(json[0]["contents"][0]["name"], "f");
}

#[test]
fn test_json_empty_directory() {
    let dir = TestDir::new();
    dir.add_dir("e");

    let (stdout, _stderr, success) = run_twig(dir.path(), &["-J", "e"]);
    assert!(success);
    assert_eq!(
        stdout,
        "[\n  {\"type\":\"directory\",\"name\":\"e\",\"contents\":[\n  ]}\n]\n"
    );
}

#[test]
fn test_vim_output() {
    let dir = TestDir::new();
    dir.add_file("r/d/f");
    dir.add_file("r/g");

    let (stdout, _stderr, success) = run_twig(dir.path(), &["-V", "r"]);
    assert!(success);
    let s = std::path::MAIN_SEPARATOR;
    assert_eq!(
        stdout,
        format!("r{s}..{s}\nr{s}.{s}\nr{s}d{s}{{{{{{\n  r{s}d{s}f}}}}}}\nr{s}g\n")
    );
}

#[test]
fn test_vim_level_one() {
    let dir = TestDir::new();
    dir.add_file("r/d/f");

    let (stdout, _stderr, success) = run_twig(dir.path(), &["--vim", "-L", "1", "r"]);
    assert!(success);
    let s = std::path::MAIN_SEPARATOR;
    assert_eq!(stdout, format!("r{s}..{s}\nr{s}.{s}\nr{s}d{s}\n"));
}

#[test]
fn test_output_is_stable_across_runs() {
    let dir = TestDir::new();
    dir.sample_tree();

    let cases: [&[&str]; 3] = [&["contents"], &["-J", "contents"], &["-V", "contents"]];
    for args in cases {
        let (first, _, _) = run_twig(dir.path(), args);
        let (second, _, _) = run_twig(dir.path(), args);
        assert_eq!(first, second, "args {:?}", args);
    }
}

#[test]
fn test_color_always_paints_directories() {
    let dir = TestDir::new();
    dir.add_file("sub/file");

    let (stdout, _stderr, success) = run_twig(dir.path(), &["--color", "always"]);
    assert!(success);
    assert!(stdout.contains("\x1b["), "should contain ANSI escapes: {:?}", stdout);
    assert!(stdout.contains("file"));

    let (stdout, _stderr, success) = run_twig(dir.path(), &["--color", "always", "-J"]);
    assert!(success);
    assert!(!stdout.contains("\x1b["), "JSON must stay plain: {:?}", stdout);
}
