mod allowlist;

/// Routes `log` output through the test harness; safe to call from every test.
pub(crate) fn init_logger() {
    let _ = env_logger::builder().is_test(true).try_init();
}
