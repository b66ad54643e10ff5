//! Run-level tests: startup validation plus a full manifest pass.
//!
//! These tests drive `RunContext::validate` and `CopyJob::run` with a
//! recording executor, so no mirror process is spawned.

use std::fs;

use csvmirror::context::{RunArgs, RunContext};
use csvmirror::copy::{CopyJob, EntryOutcome};
use csvmirror::io::resolve::PathResolver;
use csvmirror::test_support::{RecordingExecutor, TestTree, test_log};

fn run_args(tree: &TestTree) -> RunArgs {
    RunArgs {
        csv: tree.manifest_path(),
        src: tree.source_root(),
        dest: tree.dest_root(),
        log: tree.log_path(),
    }
}

fn run_once(tree: &TestTree, executor: &RecordingExecutor) -> Vec<EntryOutcome> {
    let resolver = PathResolver::new(tree.path());
    let log = test_log();
    let ctx = RunContext::validate(&run_args(tree), &resolver, &log).expect("validate");
    CopyJob {
        ctx: &ctx,
        resolver: &resolver,
        executor,
        log: &log,
    }
    .run()
    .expect("run")
}

/// Manifest `A/B`, `missing/X`, `C` against a source holding only `A/B` and `C`.
///
/// Expected: two mirror calls in manifest order, one skip, destination folders
/// created, and the log file holding the two outputs in the same order.
#[test]
fn copies_found_folders_and_skips_missing() {
    let tree = TestTree::new(&["A/B", "C"]).expect("tree");
    tree.write_manifest(&["A/B", "missing/X", "C"])
        .expect("manifest");
    let executor = RecordingExecutor::default();

    let outcomes = run_once(&tree, &executor);

    let folders: Vec<&str> = outcomes.iter().map(EntryOutcome::folder).collect();
    assert_eq!(folders, vec!["A/B", "missing/X", "C"]);
    assert!(outcomes[1].is_skipped());

    let src_ab = tree.source_root().join("A").join("B");
    let src_c = tree.source_root().join("C");
    assert_eq!(
        executor.calls(),
        vec![
            (src_ab.clone(), tree.dest_root().join("A").join("B")),
            (src_c.clone(), tree.dest_root().join("C")),
        ]
    );

    assert!(tree.dest_root().join("A").join("B").is_dir());
    assert!(tree.dest_root().join("C").is_dir());
    assert!(!tree.dest_root().join("missing").exists());

    let log = fs::read_to_string(tree.log_path()).expect("read log");
    assert_eq!(
        log,
        format!(
            "{}{}",
            RecordingExecutor::stdout_for(&src_ab),
            RecordingExecutor::stdout_for(&src_c)
        )
    );
}

#[test]
fn every_found_row_is_mirrored_once_in_order() {
    let folders = ["one", "two", "three", "four"];
    let tree = TestTree::new(&folders).expect("tree");
    tree.write_manifest(&folders).expect("manifest");
    let executor = RecordingExecutor::default();

    run_once(&tree, &executor);

    let sources: Vec<_> = executor.calls().into_iter().map(|(src, _)| src).collect();
    let expected: Vec<_> = folders
        .iter()
        .map(|folder| tree.source_root().join(folder))
        .collect();
    assert_eq!(sources, expected);
}

#[test]
fn duplicate_rows_are_processed_twice() {
    let tree = TestTree::new(&["C"]).expect("tree");
    tree.write_manifest(&["C", "C"]).expect("manifest");
    let executor = RecordingExecutor::default();

    let outcomes = run_once(&tree, &executor);

    assert_eq!(executor.calls().len(), 2);
    assert!(matches!(
        outcomes[0],
        EntryOutcome::Copied {
            created_destination: true,
            ..
        }
    ));
    assert!(matches!(
        outcomes[1],
        EntryOutcome::Copied {
            created_destination: false,
            ..
        }
    ));
}

#[test]
fn log_file_accumulates_across_runs() {
    let tree = TestTree::new(&["C"]).expect("tree");
    tree.write_manifest(&["C"]).expect("manifest");
    fs::write(tree.log_path(), "previous run\n").expect("seed log");

    run_once(&tree, &RecordingExecutor::default());
    run_once(&tree, &RecordingExecutor::default());

    let block = RecordingExecutor::stdout_for(&tree.source_root().join("C"));
    let log = fs::read_to_string(tree.log_path()).expect("read log");
    assert_eq!(log, format!("previous run\n{block}{block}"));
}

#[test]
fn all_rows_missing_still_succeeds() {
    let tree = TestTree::new(&[]).expect("tree");
    tree.write_manifest(&["x", "y"]).expect("manifest");
    let executor = RecordingExecutor::default();

    let outcomes = run_once(&tree, &executor);

    assert!(outcomes.iter().all(EntryOutcome::is_skipped));
    assert!(executor.calls().is_empty());
    assert_eq!(fs::read_to_string(tree.log_path()).expect("read log"), "");
}

#[test]
fn malformed_row_aborts_after_earlier_rows() {
    let tree = TestTree::new(&["C"]).expect("tree");
    fs::write(tree.manifest_path(), "C\nbad,row\nC\n").expect("manifest");
    let executor = RecordingExecutor::default();
    let resolver = PathResolver::new(tree.path());
    let log = test_log();
    let ctx = RunContext::validate(&run_args(&tree), &resolver, &log).expect("validate");

    let err = CopyJob {
        ctx: &ctx,
        resolver: &resolver,
        executor: &executor,
        log: &log,
    }
    .run()
    .unwrap_err();

    assert!(format!("{err:#}").contains("expected 1 column"));
    assert_eq!(executor.calls().len(), 1);
}

#[test]
fn empty_row_never_mirrors_the_whole_root() {
    let tree = TestTree::new(&["C"]).expect("tree");
    fs::write(tree.manifest_path(), "C\n\"\"\nC\n").expect("manifest");
    fs::create_dir_all(tree.dest_root()).expect("dest root");
    fs::write(tree.dest_root().join("keep.txt"), "dest only").expect("dest file");
    let executor = RecordingExecutor::default();
    let resolver = PathResolver::new(tree.path());
    let log = test_log();
    let ctx = RunContext::validate(&run_args(&tree), &resolver, &log).expect("validate");

    let err = CopyJob {
        ctx: &ctx,
        resolver: &resolver,
        executor: &executor,
        log: &log,
    }
    .run()
    .unwrap_err();

    assert!(format!("{err:#}").contains("empty folder name"));
    assert_eq!(
        executor.calls(),
        vec![(tree.source_root().join("C"), tree.dest_root().join("C"))]
    );
    assert!(tree.dest_root().join("keep.txt").is_file());
}
