use std::fs;
use std::path::PathBuf;

use linecmp::{
    compare_files, exit_status, run, CompareOptions, FileAccessError, LineContent,
    LineDifference, Options,
};
use pretty_assertions::assert_eq;
use tempfile::TempDir;

fn fixture(dir: &TempDir, name: &str, contents: &[u8]) -> PathBuf {
    let path = dir.path().join(name);
    fs::write(&path, contents).unwrap();
    path
}

fn pair(a: &str, b: &str) -> (TempDir, PathBuf, PathBuf) {
    let dir = TempDir::new().unwrap();
    let p1 = fixture(&dir, "arq1.txt", a.as_bytes());
    let p2 = fixture(&dir, "arq2.txt", b.as_bytes());
    (dir, p1, p2)
}

fn options(file1: PathBuf, file2: PathBuf, verbose: bool) -> Options {
    Options {
        file1,
        file2,
        compare: CompareOptions::default(),
        verbose,
        quiet: false,
        fail_on_diff: false,
    }
}

fn run_to_string(opts: &Options) -> (bool, String) {
    let mut out = Vec::new();
    let equal = run(opts, &mut out).unwrap();
    (equal, String::from_utf8(out).unwrap())
}

#[test]
fn identical_files() {
    let (_dir, a, b) = pair("a\nb\nc\n", "a\nb\nc\n");
    let c = compare_files(&a, &b, &CompareOptions::default()).unwrap();
    assert!(c.equal());
    assert_eq!(c.lines_read, 3);

    let (equal, out) = run_to_string(&options(a, b, false));
    assert!(equal);
    assert_eq!(out, "Lines read: 3\nThe files are EQUAL!\n");
}

#[test]
fn one_changed_line() {
    let (_dir, a, b) = pair("a\nb\nc\n", "a\nX\nc\n");
    let c = compare_files(&a, &b, &CompareOptions::default()).unwrap();
    assert_eq!(
        c.differences,
        vec![LineDifference {
            position: 2,
            left: LineContent::Text("b".into()),
            right: LineContent::Text("X".into()),
        }]
    );
}

#[test]
fn prefix_file_verbose_report() {
    let (_dir, a, b) = pair("a\nb\n", "a\nb\nc\n");
    let (equal, out) = run_to_string(&options(a, b, true));
    assert!(!equal);
    let expected = format!(
        "Lines read: 3\n\
         The files are DIFFERENT!\n\
         There are 1 differing line(s)!\n\
         {}\n\
         Line 3:\n  File 1: [END OF FILE]\n  File 2: c\n\
         {}\n",
        "=".repeat(80),
        "-".repeat(80)
    );
    assert_eq!(out, expected);
}

#[test]
fn terminator_only_difference() {
    let (_dir, a, b) = pair("a\nb", "a\nb\n");
    let c = compare_files(&a, &b, &CompareOptions::default()).unwrap();
    assert_eq!(c.lines_read, 2);
    assert_eq!(c.differences.len(), 1);
    assert_eq!(c.differences[0].position, 2);
    assert_eq!(c.differences[0].left, c.differences[0].right);
}

#[test]
fn windows_and_classic_mac_line_endings_match_unix() {
    for contents in ["a\r\nb\r\nc\r\n", "a\rb\rc\r"] {
        let (_dir, a, b) = pair(contents, "a\nb\nc\n");
        let (equal, out) = run_to_string(&options(a, b, false));
        assert!(equal, "{contents:?}");
        assert_eq!(out, "Lines read: 3\nThe files are EQUAL!\n");
    }
}

#[test]
fn strict_eol_reports_crlf_lines() {
    let (_dir, a, b) = pair("a\r\nb\n", "a\nb\n");
    let opts = CompareOptions {
        strict_eol: true,
        ..CompareOptions::default()
    };
    let c = compare_files(&a, &b, &opts).unwrap();
    assert_eq!(
        c.differences,
        vec![LineDifference {
            position: 1,
            left: LineContent::Text("a".into()),
            right: LineContent::Text("a".into()),
        }]
    );
}

#[test]
fn quiet_run_prints_nothing_but_keeps_verdict() {
    let (_dir, a, b) = pair("a\nb\n", "a\nX\n");
    let opts = Options {
        quiet: true,
        ..options(a.clone(), b.clone(), false)
    };
    let (equal, out) = run_to_string(&opts);
    assert!(!equal);
    assert!(out.is_empty());

    let opts = Options {
        quiet: true,
        ..options(a.clone(), a, false)
    };
    let (equal, out) = run_to_string(&opts);
    assert!(equal);
    assert!(out.is_empty());
}

#[test]
fn fail_on_diff_sets_exit_status() {
    let (_dir, a, b) = pair("a\n", "b\n");
    let opts = Options {
        fail_on_diff: true,
        ..options(a.clone(), b.clone(), false)
    };
    let (equal, _) = run_to_string(&opts);
    assert!(!equal);
    assert_eq!(exit_status(&opts, equal), 1);

    let (equal, _) = run_to_string(&options(a.clone(), a, false));
    assert_eq!(exit_status(&opts, equal), 0);

    let lenient = options(PathBuf::from("x"), b, false);
    assert_eq!(exit_status(&lenient, false), 0);
}

#[test]
fn nonexistent_path_on_either_side() {
    let (dir, a, _b) = pair("a\n", "a\n");
    let missing = dir.path().join("missing.txt");

    for (left, right) in [(a.clone(), missing.clone()), (missing.clone(), a.clone())] {
        let err = compare_files(&left, &right, &CompareOptions::default()).unwrap_err();
        assert!(matches!(err, FileAccessError::Open { .. }));
        assert_eq!(err.path(), &missing);

        let mut out = Vec::new();
        assert!(run(&options(left, right, true), &mut out).is_err());
        assert!(out.is_empty());
    }
}

#[test]
fn undecodable_file_produces_no_output() {
    let dir = TempDir::new().unwrap();
    let a = fixture(&dir, "a.txt", b"one\ntwo\n");
    let b = fixture(&dir, "b.txt", b"one\nt\xffo\n");

    let mut out = Vec::new();
    let err = run(&options(a, b.clone(), false), &mut out).unwrap_err();
    let access = err.downcast_ref::<FileAccessError>().unwrap();
    assert!(matches!(access, FileAccessError::Decode { line: 2, .. }));
    assert_eq!(access.path(), &b);
    assert!(out.is_empty());
}
