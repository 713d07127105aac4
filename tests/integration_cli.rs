use std::path::PathBuf;
use std::process::Command;

fn get_cli_binary() -> PathBuf {
    PathBuf::from(env!("CARGO_BIN_EXE_projectile-cli"))
}

fn scenario_path(name: &str) -> PathBuf {
    let mut path = PathBuf::from(env!("CARGO_MANIFEST_DIR"));
    path.push("scenarios");
    path.push(name);
    path
}

#[test]
fn test_cli_trajectory_defaults() {
    let output = Command::new(get_cli_binary())
        .args(&["trajectory"])
        .output()
        .expect("Failed to execute command");

    assert!(output.status.success(), "Command should succeed");
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("TRAJECTORY RESULTS"));
    assert!(stdout.contains("Samples:"));
    assert!(stdout.contains("21"), "Default launch records 21 samples: {}", stdout);
}

#[test]
fn test_cli_output_format_json() {
    let output = Command::new(get_cli_binary())
        .args(&["trajectory", "--velocity-x", "10", "--velocity-y", "10", "--output", "json"])
        .output()
        .expect("Failed to execute command");

    assert!(output.status.success(), "Command should succeed");
    let stdout = String::from_utf8_lossy(&output.stdout);
    let json: serde_json::Value = serde_json::from_str(&stdout).expect("Should be valid JSON");

    let trajectory = json["trajectory"].as_array().expect("trajectory array");
    assert_eq!(trajectory.len(), 21);
    assert_eq!(trajectory[0]["time"], 0.0);
    assert_eq!(trajectory[0]["vx"], 10.0);
    assert_eq!(json["summary"]["sample_count"], 21);
    assert_eq!(json["params"]["physics"]["mass"], 1.0);
}

#[test]
fn test_cli_output_format_csv() {
    let output = Command::new(get_cli_binary())
        .args(&["trajectory", "--drag", "0.05", "--output", "csv"])
        .output()
        .expect("Failed to execute command");

    assert!(output.status.success(), "Command should succeed");
    let stdout = String::from_utf8_lossy(&output.stdout);
    let mut lines = stdout.lines();
    assert_eq!(lines.next(), Some("time,x,y,vx,vy"));
    assert_eq!(lines.next(), Some("0.000,0.0000,0.0000,10.0000,10.0000"));
    assert!(lines.all(|l| l.split(',').count() == 5));
}

#[test]
fn test_cli_output_plot() {
    let output = Command::new(get_cli_binary())
        .args(&["trajectory", "--output", "plot"])
        .output()
        .expect("Failed to execute command");

    assert!(output.status.success(), "Command should succeed");
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("Projectile trajectory"));
    assert!(stdout.contains("X / m"));
    assert!(stdout.contains("Y / m"));
    assert!(stdout.contains('*'));
}

#[test]
fn test_cli_output_plot_json() {
    let output = Command::new(get_cli_binary())
        .args(&["trajectory", "--output", "plot-json"])
        .output()
        .expect("Failed to execute command");

    assert!(output.status.success(), "Command should succeed");
    let json: serde_json::Value =
        serde_json::from_slice(&output.stdout).expect("Should be valid JSON");
    assert_eq!(json["x_label"], "X / m");
    assert_eq!(json["y_label"], "Y / m");
    assert_eq!(json["x"].as_array().map(|a| a.len()), Some(21));
}

#[test]
fn test_cli_scenario_file_with_override() {
    let scenario = scenario_path("light_drag.yaml");
    let output = Command::new(get_cli_binary())
        .args(&["trajectory", "--config"])
        .arg(&scenario)
        .args(&["--mass", "2.0", "--output", "json"])
        .output()
        .expect("Failed to execute command");

    assert!(output.status.success(), "Command should succeed");
    let json: serde_json::Value =
        serde_json::from_slice(&output.stdout).expect("Should be valid JSON");
    assert_eq!(json["params"]["initial_velocity_y"], 25.0);
    assert_eq!(json["params"]["time_step"], 0.05);
    assert_eq!(json["params"]["physics"]["drag_coefficient"], 0.02);
    assert_eq!(json["params"]["physics"]["mass"], 2.0);

    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("Loading scenario"));
}

#[test]
fn test_cli_missing_scenario_file_fails() {
    let output = Command::new(get_cli_binary())
        .args(&["trajectory", "--config", "/nonexistent/scenario.yaml"])
        .output()
        .expect("Failed to execute command");

    assert!(!output.status.success(), "Missing scenario should fail");
}

#[test]
fn test_cli_zero_mass_fails() {
    let output = Command::new(get_cli_binary())
        .args(&["trajectory", "--mass", "0"])
        .output()
        .expect("Failed to execute command");

    assert!(!output.status.success(), "Zero mass should be rejected");
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("mass"), "Should name the bad parameter: {}", stderr);
}

#[test]
fn test_cli_downward_launch_is_empty() {
    let output = Command::new(get_cli_binary())
        .args(&["trajectory", "--velocity-y", "-3", "--output", "csv"])
        .output()
        .expect("Failed to execute command");

    assert!(output.status.success(), "Grounded launch is not an error");
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert_eq!(stdout.trim(), "time,x,y,vx,vy");
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("never leaves the ground"));
}

#[test]
fn test_cli_help() {
    let output = Command::new(get_cli_binary())
        .args(&["--help"])
        .output()
        .expect("Failed to execute command");

    assert!(output.status.success(), "Help command should succeed");
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("trajectory"), "Should list trajectory command");
    assert!(stdout.contains("info"), "Should list info command");
}

#[test]
fn test_cli_info() {
    let output = Command::new(get_cli_binary())
        .args(&["info"])
        .output()
        .expect("Failed to execute command");

    assert!(output.status.success());
    assert!(String::from_utf8_lossy(&output.stdout).contains("PROJECTILE ENGINE"));
}

#[test]
fn test_cli_invalid_command() {
    let output = Command::new(get_cli_binary())
        .args(&["invalid-command"])
        .output()
        .expect("Failed to execute command");

    assert!(!output.status.success(), "Invalid command should fail");
}
