use std::fs;
use tempfile::tempdir;

fn run_with_config(file_name: &str, contents: &str) -> std::process::Output {
    let dir = tempdir().unwrap();
    let config_path = dir.path().join(file_name);
    fs::write(&config_path, contents).unwrap();

    std::process::Command::new(env!("CARGO_BIN_EXE_seolens"))
        .current_dir(dir.path())
        .arg("ftp://example.com")
        .arg("--config")
        .arg(config_path.to_str().unwrap())
        .output()
        .expect("Failed to execute command")
}

#[test]
fn test_cli_with_valid_configs_reaches_url_validation() {
    let cases = [
        ("config.json", r#"{"output": "json", "timeout": 10}"#),
        ("config.toml", "output = \"json\"\ntimeout = 10\n"),
        ("config.yaml", "output: json\ntimeout: 10\n"),
        ("config.yml", "max_redirects: 2\n"),
    ];

    for (file_name, contents) in cases {
        let output = run_with_config(file_name, contents);
        let stderr = String::from_utf8_lossy(&output.stderr);

        assert!(!output.status.success(), "{} should fail on the URL", file_name);
        assert!(
            stderr.contains("Only HTTP and HTTPS URLs are allowed"),
            "{}: config should load before URL validation, got: {}",
            file_name,
            stderr
        );
    }
}

#[test]
fn test_cli_with_invalid_config_format() {
    let output = run_with_config("config.txt", "invalid content");
    let stderr = String::from_utf8_lossy(&output.stderr);

    assert!(!output.status.success());
    assert!(stderr.contains("Unsupported config file format"), "{}", stderr);
}

#[test]
fn test_cli_with_malformed_json_config() {
    let output = run_with_config("config.json", "{ not json");
    let stderr = String::from_utf8_lossy(&output.stderr);

    assert!(!output.status.success());
    assert!(stderr.contains("Failed to parse JSON config"), "{}", stderr);
}

#[test]
fn test_cli_with_invalid_output_in_config() {
    let output = run_with_config("config.toml", "output = \"xml\"\n");
    let stderr = String::from_utf8_lossy(&output.stderr);

    assert!(!output.status.success());
    assert!(stderr.contains("Unsupported output format"), "{}", stderr);
}
