use std::fs;
use log::{debug, error, info, warn};
use stamped_log::{setup_logging, LoggingConfig, SetupError};

// The `log` facade can only be installed once per process, so this binary holds a single test.
#[test]
fn installed_logger_receives_facade_records() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("global.log");
    let config = LoggingConfig { debug: false, quiet: false, logfile: Some(path.clone()) };

    setup_logging(&config).unwrap();

    debug!("not at the default threshold");
    info!("agent started");
    warn!("E! explicit marker wins");
    error!("output {} failed", "file");
    log::logger().flush();

    let text = fs::read_to_string(&path).unwrap();
    let lines = text.lines().map(|line| &line[20..]).collect::<Vec<_>>();
    assert_eq!(lines, [" I! agent started", " E! explicit marker wins", " E! output file failed"]);

    let again = setup_logging(&config);
    assert!(matches!(again, Err(SetupError::AlreadyInstalled(_))));
}
