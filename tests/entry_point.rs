use sc4_cpu_priority::common::{Settings, module_path};
use sc4_cpu_priority::runner::ffi::{cpu_priority_director_id, cpu_priority_on_start};
use std::fs;

// The hook installs the process-wide logger, so this binary holds one test.
#[test]
fn test_on_start_export_always_succeeds() {
    assert_eq!(cpu_priority_director_id(), 0x04E4_C618);

    // No -CPUPriority switch among the test runner's arguments.
    assert!(cpu_priority_on_start());
    // A second run cannot install a logger and must still not fail the host.
    assert!(cpu_priority_on_start());

    let settings = Settings::default();
    let path = settings.log_file_path(&module_path::module_folder().unwrap());
    let contents = fs::read_to_string(&path).unwrap();

    assert_eq!(contents.lines().next(), Some(settings.log_header.as_str()));
}
