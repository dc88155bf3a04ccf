use super::*;
use std::fs;

#[test]
fn test_missing_files_give_empty_config() {
    let dir = tempfile::tempdir().unwrap();
    let launch = extract_launch_config(dir.path()).unwrap();
    assert_eq!(launch, LaunchConfig::empty(dir.path()));
    assert_eq!(launch.start_command, "");
    assert!(launch.dosbox_conf.is_empty());
    assert_eq!(launch.game_path, dir.path());
}

#[test]
fn test_reads_conf_and_batch() {
    let dir = tempfile::tempdir().unwrap();
    fs::write(
        dir.path().join(DOSBOX_CONF),
        "[sdl]\nfullscreen=false\n[cpu]\ncycles=fixed 3000\n",
    )
    .unwrap();
    fs::write(
        dir.path().join(DOSBOX_BAT),
        "@echo off\r\nmount c .\r\nc:\r\ncd KEEN\r\n",
    )
    .unwrap();

    let launch = prepare_launch(dir.path()).unwrap();
    assert_eq!(launch.start_command, "c:");
    assert_eq!(launch.dosbox_conf.get("cpu", "cycles"), Some("fixed 3000"));
    assert_eq!(launch.dosbox_conf.get("sdl", "fullscreen"), Some("false"));
}

#[test]
fn test_conf_only() {
    let dir = tempfile::tempdir().unwrap();
    fs::write(dir.path().join(DOSBOX_CONF), "[dosbox]\nmachine=svga_s3\n").unwrap();

    let launch = extract_launch_config(dir.path()).unwrap();
    assert_eq!(launch.start_command, "");
    assert_eq!(launch.dosbox_conf.get("dosbox", "machine"), Some("svga_s3"));
}

#[test]
fn test_batch_without_command() {
    let dir = tempfile::tempdir().unwrap();
    fs::write(dir.path().join(DOSBOX_BAT), "@echo off\nREM nothing to run\n").unwrap();

    let launch = extract_launch_config(dir.path()).unwrap();
    assert_eq!(launch.start_command, "");
}

#[test]
fn test_non_utf8_batch_is_decoded_lossily() {
    let dir = tempfile::tempdir().unwrap();
    // 0x82 is "é" in code page 437
    fs::write(dir.path().join(DOSBOX_BAT), b"@echo off\nCAF\x82.EXE\n").unwrap();

    let launch = extract_launch_config(dir.path()).unwrap();
    assert!(launch.start_command.starts_with("CAF"));
    assert!(launch.start_command.ends_with(".EXE"));
}

#[test]
fn test_unreadable_conf_is_an_error() {
    let dir = tempfile::tempdir().unwrap();
    fs::create_dir(dir.path().join(DOSBOX_CONF)).unwrap();

    let result = extract_launch_config(dir.path());
    assert!(matches!(result, Err(LauncherError::LaunchFile { .. })));
}
