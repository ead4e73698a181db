use sc4_cpu_priority::common::{Settings, logging};
use std::fs;

#[test]
fn test_second_init_keeps_live_log() {
    let dir = tempfile::tempdir().unwrap();
    let settings = Settings::default();

    let path = logging::init_file(&settings, dir.path()).unwrap();
    log::error!("first line");

    assert!(logging::init_file(&settings, dir.path()).is_err());
    log::error!("second line");
    log::logger().flush();

    let contents = fs::read_to_string(&path).unwrap();
    let lines: Vec<&str> = contents.lines().collect();

    assert_eq!(lines.len(), 3, "unexpected log: {contents}");
    assert_eq!(lines[0], settings.log_header);
    assert!(lines[1].ends_with("ERROR first line"));
    assert!(lines[2].ends_with("ERROR second line"));
}
