use std::sync::Once;

static INIT: Once = Once::new();

// Routes `log` output through env_logger (RUST_LOG=debug) while testing.
#[allow(dead_code)]
pub fn init_logger() {
    INIT.call_once(|| {
        let _ = env_logger::builder().is_test(true).try_init();
    });
}
