use assert_cmd::Command;
use predicates::prelude::*;

/// Binary under test with the dispatcher's environment inputs cleared
fn shopctl() -> Command {
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_shopctl"));
    for var in [
        "MODE",
        "SERVICE",
        "ARGS",
        "DOCKER_BIN",
        "GATEWAY_URL",
        "COMPOSE_DEV_FILE",
        "COMPOSE_PROD_FILE",
        "BACKUPS_DIR",
        "RUST_LOG",
    ] {
        cmd.env_remove(var);
    }
    cmd
}

#[test]
fn test_help_command() {
    shopctl()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("Mode-aware compose dispatcher"))
        .stdout(predicate::str::contains("Commands:"))
        .stdout(predicate::str::contains("up"))
        .stdout(predicate::str::contains("logs"))
        .stdout(predicate::str::contains("health"))
        .stdout(predicate::str::contains("clean-volumes"))
        .stdout(predicate::str::contains("type-check"))
        .stdout(predicate::str::contains("backend-logs"));
}

#[test]
fn test_version_command() {
    shopctl()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("shopctl"));
}

#[test]
fn test_version_subcommand() {
    shopctl()
        .arg("version")
        .assert()
        .success()
        .stdout(predicate::str::contains("shopctl"))
        .stdout(predicate::str::contains("Modes:"))
        .stdout(predicate::str::contains("production"));
}

#[test]
fn test_invalid_command() {
    shopctl()
        .arg("invalid")
        .assert()
        .failure()
        .stderr(predicate::str::contains("unrecognized subcommand"));
}

#[test]
fn test_invalid_mode() {
    shopctl()
        .args(["--mode", "staging", "up"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("staging"));
}

#[test]
fn test_up_defaults_to_development() {
    shopctl()
        .args(["--dry-run", "up"])
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "docker compose -f docker-compose.dev.yml up -d",
        ))
        .stdout(predicate::str::contains("docker-compose.prod.yml").not());
}

#[test]
fn test_production_mode_flag_and_env() {
    shopctl()
        .args(["--dry-run", "down", "--mode", "production"])
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "docker compose -f docker-compose.prod.yml down",
        ))
        .stdout(predicate::str::contains("docker-compose.dev.yml").not());

    shopctl()
        .env("MODE", "prod")
        .args(["--dry-run", "build", "backend"])
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "docker compose -f docker-compose.prod.yml build backend",
        ));
}

#[test]
fn test_status_is_ps() {
    shopctl()
        .args(["--dry-run", "status"])
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "docker compose -f docker-compose.dev.yml ps",
        ));
}

#[test]
fn test_args_and_services_forwarded_in_order() {
    shopctl()
        .env("ARGS", "--build --force-recreate")
        .args(["--dry-run", "up", "gateway", "backend"])
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "up -d --build --force-recreate gateway backend",
        ));
}

#[test]
fn test_logs_resolution() {
    shopctl()
        .args(["--dry-run", "logs"])
        .assert()
        .success()
        .stdout(predicate::str::diff(
            "docker compose -f docker-compose.dev.yml logs -f\n",
        ));

    shopctl()
        .env("SERVICE", "gateway")
        .args(["--dry-run", "logs"])
        .assert()
        .success()
        .stdout(predicate::str::contains("logs -f gateway"));

    shopctl()
        .env("SERVICE", "gateway")
        .args(["--dry-run", "logs", "backend"])
        .assert()
        .success()
        .stdout(predicate::str::contains("logs -f backend"))
        .stdout(predicate::str::contains("gateway").not());
}

#[test]
fn test_shell_defaults_to_backend() {
    shopctl()
        .args(["--dry-run", "shell"])
        .assert()
        .success()
        .stdout(predicate::str::contains("exec backend sh"));

    shopctl()
        .args(["--dry-run", "shell", "mongodb"])
        .assert()
        .success()
        .stdout(predicate::str::contains("exec mongodb sh"));
}

#[test]
fn test_aliases_prebind_mode() {
    shopctl()
        .env("MODE", "development")
        .args(["--dry-run", "prod-up"])
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "docker compose -f docker-compose.prod.yml up -d",
        ));

    shopctl()
        .env("MODE", "production")
        .args(["--dry-run", "dev-logs"])
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "docker compose -f docker-compose.dev.yml logs -f",
        ));
}

#[test]
fn test_backend_logs_alias() {
    shopctl()
        .args(["--dry-run", "backend-logs", "--mode", "prod"])
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "docker compose -f docker-compose.prod.yml logs -f backend",
        ));
}

#[test]
fn test_health_never_fails() {
    shopctl()
        .args(["--gateway-url", "http://127.0.0.1:1", "health"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Health Check"))
        .stdout(predicate::str::contains("✗ Gateway"))
        .stdout(predicate::str::contains("✗ Backend (via gateway)"));
}

#[test]
fn test_reset_aborts_on_eof() {
    shopctl()
        .args(["--dry-run", "reset", "--mode", "production"])
        .write_stdin("")
        .assert()
        .code(130)
        .stdout(predicate::str::contains("WARNING"))
        .stdout(predicate::str::contains("production"))
        .stdout(predicate::str::contains("mongosh").not());
}

#[test]
fn test_reset_aborts_on_no() {
    shopctl()
        .args(["--dry-run", "reset"])
        .write_stdin("no\n")
        .assert()
        .code(130)
        .stdout(predicate::str::contains("dropDatabase").not());
}

#[test]
fn test_reset_proceeds_on_enter() {
    shopctl()
        .env("MONGO_DATABASE", "shop")
        .args(["--dry-run", "reset"])
        .write_stdin("\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("mongosh"))
        .stdout(predicate::str::contains("--eval"))
        .stdout(predicate::str::contains("shop"))
        .stdout(predicate::str::contains(".dropDatabase()"));
}

#[test]
fn test_backup_archive_name() {
    let dir = tempfile::tempdir().unwrap();
    let backups = dir.path().join("backups");

    shopctl()
        .arg("--dry-run")
        .arg("--backups-dir")
        .arg(&backups)
        .arg("backup")
        .assert()
        .success()
        .stdout(predicate::str::contains("mongodump"))
        .stdout(predicate::str::is_match(r"mongodb_backup_dev_\d{8}_\d{6}\.archive").unwrap());

    assert!(backups.is_dir());
}

#[cfg(unix)]
#[test]
fn test_backup_log_hides_password() {
    let dir = tempfile::tempdir().unwrap();

    let output = shopctl()
        .env("DOCKER_BIN", "true")
        .env("MONGO_ROOT_PASSWORD", "hunter2-s3cret")
        .arg("--backups-dir")
        .arg(dir.path())
        .arg("backup")
        .output()
        .expect("Failed to execute command");

    assert!(output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stderr.contains("--password=***"), "{stderr}");
    assert!(!stderr.contains("hunter2-s3cret"), "{stderr}");
    assert!(!stdout.contains("hunter2-s3cret"), "{stdout}");
}

#[test]
fn test_dry_run_hides_password() {
    let dir = tempfile::tempdir().unwrap();

    shopctl()
        .env("MONGO_ROOT_PASSWORD", "hunter2-s3cret")
        .arg("--dry-run")
        .arg("--backups-dir")
        .arg(dir.path())
        .arg("backup")
        .assert()
        .success()
        .stdout(predicate::str::contains("--password=***"))
        .stdout(predicate::str::contains("hunter2-s3cret").not())
        .stderr(predicate::str::contains("hunter2-s3cret").not());

    shopctl()
        .env("MONGO_ROOT_PASSWORD", "hunter2-s3cret")
        .args(["--dry-run", "reset"])
        .write_stdin("y\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("mongosh"))
        .stdout(predicate::str::contains("hunter2-s3cret").not());
}

#[test]
fn test_clean_all_sequence() {
    let output = shopctl()
        .args(["--dry-run", "--mode", "production", "clean-all"])
        .output()
        .expect("Failed to execute command");

    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    let lines: Vec<&str> = stdout.lines().filter(|l| l.starts_with("docker")).collect();

    assert_eq!(
        lines,
        vec![
            "docker compose -f docker-compose.dev.yml down -v",
            "docker compose -f docker-compose.prod.yml down -v",
            "docker rmi -f shop-backend:latest",
            "docker rmi -f shop-gateway:latest",
            "docker system prune -f",
        ]
    );
}

#[test]
fn test_clean_covers_both_modes() {
    shopctl()
        .args(["--dry-run", "clean"])
        .assert()
        .success()
        .stdout(predicate::str::contains("docker-compose.dev.yml down"))
        .stdout(predicate::str::contains("docker-compose.prod.yml down"))
        .stdout(predicate::str::contains("-v").not());
}

#[test]
fn test_local_tasks() {
    shopctl()
        .args(["--dry-run", "install"])
        .assert()
        .success()
        .stdout(predicate::str::diff("(cd backend && npm install)\n"));

    shopctl()
        .args(["--dry-run", "type-check", "--mode", "prod"])
        .assert()
        .success()
        .stdout(predicate::str::contains("npm run type-check"))
        .stdout(predicate::str::contains("compose").not());
}

#[test]
fn test_config_prints_profile() {
    shopctl()
        .args(["config", "--mode", "prod"])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"mode\": \"production\""))
        .stdout(predicate::str::contains("\"suffix\": \"prod\""));
}

#[cfg(unix)]
#[test]
fn test_delegated_exit_code_propagates() {
    shopctl()
        .env("DOCKER_BIN", "false")
        .arg("ps")
        .assert()
        .code(1);
}

#[test]
fn test_missing_orchestrator_is_reported() {
    shopctl()
        .env("DOCKER_BIN", "shopctl-no-such-binary")
        .arg("up")
        .assert()
        .failure()
        .stderr(predicate::str::contains("❌ Error"))
        .stderr(predicate::str::contains("shopctl-no-such-binary"));
}
