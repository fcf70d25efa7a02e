mod common;

use common::TestContext;
use predicates::prelude::*;
use venvgen::{EnvConfig, OsTarget, ScriptFactory};

#[test]
fn generate_defaults_to_windows_dialect_on_stdout() {
    let ctx = TestContext::new();

    ctx.cli()
        .arg("generate")
        .assert()
        .success()
        .stdout(predicate::str::starts_with("@echo off"))
        .stdout(predicate::str::contains("python -m venv .venv"))
        .stdout(predicate::str::contains("call .\\.venv\\Scripts\\activate"))
        .stdout(predicate::str::contains("pip freeze > requirements.txt"))
        .stdout(predicate::str::contains("cmd /k"));
}

#[test]
fn generate_unix_dialect_ignores_keep_open() {
    let ctx = TestContext::new();

    ctx.cli()
        .args([
            "generate",
            "--os",
            "unix",
            "--python",
            "python3",
            "--env-name",
            "env",
            "--dep",
            "requests",
        ])
        .assert()
        .success()
        .stdout(predicate::str::starts_with("#!/bin/bash"))
        .stdout(predicate::str::contains("python3 -m venv env"))
        .stdout(predicate::str::contains("source ./env/bin/activate"))
        .stdout(predicate::str::contains("pip install requests"))
        .stdout(predicate::str::contains("pip freeze > requirements.txt"))
        .stdout(predicate::str::contains("cmd /k").not());
}

#[test]
fn generate_windows_pip_upgrade_ignores_configured_interpreter() {
    let ctx = TestContext::new();

    ctx.cli()
        .args(["generate", "--python", "py"])
        .assert()
        .success()
        .stdout(predicate::str::contains("py -m venv .venv"))
        .stdout(predicate::str::contains("python -m pip install --upgrade pip"));
}

#[test]
fn generate_without_dependencies_emits_no_install_line() {
    let ctx = TestContext::new();

    ctx.cli()
        .arg("generate")
        .assert()
        .success()
        .stdout(predicate::str::contains("Installing dependencies").not());
}

#[test]
fn generate_preserves_dependency_order_and_dedupes() {
    let ctx = TestContext::new();

    ctx.cli()
        .args(["generate", "--dep", "flask", "--dep", "requests", "--dep", "flask"])
        .assert()
        .success()
        .stdout(predicate::str::contains("pip install flask requests\n"));
}

#[test]
fn generate_no_requirements_skips_freeze_step() {
    let ctx = TestContext::new();

    ctx.cli()
        .args(["generate", "--no-requirements"])
        .assert()
        .success()
        .stdout(predicate::str::contains("requirements.txt").not());
}

#[test]
fn generate_no_keep_open_drops_trailing_command() {
    let ctx = TestContext::new();

    ctx.cli()
        .args(["generate", "--no-keep-open"])
        .assert()
        .success()
        .stdout(predicate::str::contains("cmd /k").not());
}

#[test]
fn generate_save_writes_dialect_filename() {
    let ctx = TestContext::new();

    ctx.cli()
        .args(["generate", "--os", "unix", "--save"])
        .assert()
        .success()
        .stdout(predicate::str::contains("✅ Wrote setup_env.sh"));

    let expected =
        ScriptFactory::generate(&EnvConfig { os_target: OsTarget::Unix, ..EnvConfig::default() });
    assert_eq!(ctx.read_file("setup_env.sh"), expected);
    assert!(!ctx.has_file("setup_env.bat"));
}

#[test]
fn generate_save_defaults_to_batch_filename_on_windows_target() {
    let ctx = TestContext::new();

    ctx.cli().args(["generate", "--save"]).assert().success();

    assert!(ctx.has_file("setup_env.bat"));
    assert!(ctx.read_file("setup_env.bat").starts_with("@echo off"));
}

#[test]
fn generate_output_writes_to_explicit_path() {
    let ctx = TestContext::new();

    ctx.cli()
        .args(["generate", "--os", "unix", "--output", "scripts.sh"])
        .assert()
        .success()
        .stdout(predicate::str::contains("✅ Wrote scripts.sh"))
        // Explicit output replaces the default stdout print.
        .stdout(predicate::str::contains("#!/bin/bash").not());

    assert!(ctx.has_file("scripts.sh"));
}

#[test]
fn generate_is_deterministic_across_invocations() {
    let ctx = TestContext::new();
    let args = ["generate", "--os", "unix", "--env-name", "env", "--dep", "numpy"];

    let first = ctx.cli().args(args).assert().success();
    let second = ctx.cli().args(args).assert().success();

    assert_eq!(first.get_output().stdout, second.get_output().stdout);
}

#[test]
fn wizard_refuses_non_interactive_stdin() {
    let ctx = TestContext::new();

    ctx.cli()
        .arg("wizard")
        .write_stdin("")
        .assert()
        .failure()
        .stderr(predicate::str::contains("interactive terminal"));
}
