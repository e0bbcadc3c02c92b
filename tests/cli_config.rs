mod common;

use common::{GREEN, TestContext, stdout_of};
use predicates::prelude::*;

#[test]
fn emoji_overrides_apply() {
    let ctx = TestContext::new();
    ctx.write_file("sample.foo", "x\n");
    ctx.write_file("Justfile", "build:\n");
    ctx.write_file("main.RS", "fn main() {}\n");
    let config = ctx.write_config(
        r#"
[emoji.extensions]
foo = "🧪"
rs = "⚡"

[emoji.files]
Justfile = "🤖"
"#,
    );

    let output = stdout_of(ctx.cli().env("FACAD_CONFIG", &config));

    assert!(output.contains("🧪 sample.foo"), "output: {}", output);
    assert!(output.contains("🤖 Justfile"), "output: {}", output);
    assert!(output.contains("⚡ main.RS"), "output: {}", output);
}

#[test]
fn max_columns_limits_the_grid() {
    let ctx = TestContext::new();
    ctx.write_file("a.txt", "a");
    ctx.write_file("b.txt", "b");
    ctx.write_file("c.txt", "c");
    let config = ctx.write_config("max_columns = 1\n");

    let output = stdout_of(ctx.cli().env("FACAD_CONFIG", &config));

    assert_eq!(output.lines().count(), 4);
}

#[test]
fn per_directory_columns_override_default() {
    let ctx = TestContext::new();
    for name in ["a.txt", "b.txt", "c.txt", "d.txt"] {
        ctx.write_file(&format!("wide/{}", name), "x");
    }
    let config = ctx.write_config(&format!(
        "max_columns = 1\n[columns]\n\"{}\" = 2\n",
        ctx.work_dir().join("wide").display()
    ));

    let output = stdout_of(ctx.cli().arg("wide").env("FACAD_CONFIG", &config));

    assert_eq!(output.lines().count(), 3);
}

#[test]
fn git_can_be_switched_off() {
    let ctx = TestContext::new();
    ctx.init_git();
    ctx.write_file("new.txt", "x\n");
    let config = ctx.write_config("git = false\n");

    let output = stdout_of(ctx.cli().env("FACAD_CONFIG", &config));

    assert_eq!(output.lines().next(), Some(TestContext::header(ctx.work_dir(), None).as_str()));
    assert!(output.contains("📝 new.txt"));
    assert!(!output.contains(GREEN));
}

#[test]
fn malformed_config_is_reported() {
    let ctx = TestContext::new();
    let config = ctx.write_config("max_columns = \"many\"\n");

    ctx.cli()
        .env("FACAD_CONFIG", &config)
        .assert()
        .code(1)
        .stderr(predicate::str::starts_with("facad: Failed to parse configuration"));
}

#[test]
fn invalid_value_names_the_file() {
    let ctx = TestContext::new();
    let config = ctx.write_config("max_columns = 0\n");

    ctx.cli()
        .env("FACAD_CONFIG", &config)
        .assert()
        .code(1)
        .stderr(predicate::str::contains("facad.toml: max_columns must be at least 1"));
}

#[test]
fn explicit_config_must_exist() {
    let ctx = TestContext::new();

    ctx.cli()
        .env("FACAD_CONFIG", ctx.home().join("absent.toml"))
        .assert()
        .code(1)
        .stderr(predicate::str::starts_with("facad: "));
}

#[cfg(target_os = "linux")]
#[test]
fn default_config_location_is_read() {
    let ctx = TestContext::new();
    ctx.write_file("sample.foo", "x\n");
    let dir = ctx.home().join(".config/facad");
    std::fs::create_dir_all(&dir).unwrap();
    std::fs::write(dir.join("config.toml"), "[emoji.extensions]\nfoo = \"🧪\"\n").unwrap();

    let output = stdout_of(&mut ctx.cli());

    assert!(output.contains("🧪 sample.foo"), "output: {}", output);
}
