//! Public library surface: driving listings without the binary.

mod common;

use common::TestContext;
use facad::adapters::git::Git2RepositoryAdapter;
use facad::app::commands::execute;
use facad::domain::FacadConfig;
use facad::{AppContext, AppError, Mode, Target};

fn render(ctx: &TestContext, mode: Mode) -> String {
    let app = AppContext::new(Git2RepositoryAdapter::new(), FacadConfig::default(), 80);
    let targets = vec![Target::resolve(ctx.work_dir()).unwrap()];
    let mut out = Vec::new();
    execute(&app, &targets, mode, &mut out).unwrap();
    String::from_utf8(out).unwrap()
}

#[test]
fn every_mode_renders_into_a_writer() {
    let ctx = TestContext::new();
    ctx.write_file("lib.rs", "pub fn x() {}\n");
    ctx.create_dir("nested/deeper");

    let grid = render(&ctx, Mode::Grid);
    assert!(grid.contains("🦀 lib.rs"));

    let long = render(&ctx, Mode::Long);
    assert!(long.lines().next().unwrap().ends_with("📁 (1 subdirs)"));

    let analytics = render(&ctx, Mode::Analytics);
    assert!(analytics.contains("🌳 Max Depth     : 2 levels"));
}

#[test]
fn resolving_a_missing_target_fails() {
    let ctx = TestContext::new();
    let err = Target::resolve(&ctx.work_dir().join("ghost")).unwrap_err();
    assert!(matches!(err, AppError::TargetNotFound(_)));
    assert_eq!(err.kind(), std::io::ErrorKind::NotFound);
}
