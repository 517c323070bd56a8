//! 配置文件读写测试

use spotmicro_sdk::prelude::*;
use tempfile::TempDir;

#[test]
fn test_save_and_load() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("robot.toml");

    let mut config = RobotConfig::default();
    config.front_left.shoulder.offset = 3.0;
    config.rear_right.wrist.offset = -7.5;
    config.save(&path).unwrap();

    let loaded = RobotConfig::load(&path).unwrap();
    assert_eq!(loaded, config);
}

#[test]
fn test_load_missing_file() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("missing.toml");

    match RobotConfig::load(&path) {
        Err(SdkError::Io { path: reported, .. }) => assert_eq!(reported, path),
        other => panic!("unexpected result: {:?}", other),
    }
}

#[test]
fn test_save_refuses_invalid_config() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("robot.toml");

    let mut config = RobotConfig::default();
    config.front_right.arm.channel = config.front_right.shoulder.channel;

    assert!(matches!(
        config.save(&path),
        Err(SdkError::DuplicateChannel { .. })
    ));
    assert!(!path.exists());
}

#[test]
fn test_load_handwritten_file() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("robot.toml");

    let mut text = String::new();
    for (leg, first) in [
        ("front_left", 0),
        ("front_right", 3),
        ("rear_left", 6),
        ("rear_right", 9),
    ] {
        for (i, role) in ["shoulder", "arm", "wrist"].iter().enumerate() {
            text.push_str(&format!("[{}.{}]\nchannel = {}\n", leg, role, first + i));
            if leg.ends_with("right") {
                text.push_str("rotation_limit = 270\n");
            }
        }
    }
    std::fs::write(&path, text).unwrap();

    let loaded = RobotConfig::load(&path).unwrap();
    assert_eq!(loaded, RobotConfig::default());
}
