use wasm_bindgen::JsValue;
use web_sys::console;

/// `log` backend writing to the browser devtools console.
pub struct Console {
    level: log::LevelFilter,
}

impl Console {
    /// Installs the logger once per page.
    pub fn install(level: log::LevelFilter) -> anyhow::Result<()> {
        log::set_boxed_logger(Box::new(Self { level }))
            .map(|()| log::set_max_level(level))
            .map_err(|e| anyhow::anyhow!("logger already installed: {}", e))
    }
}

impl log::Log for Console {
    fn enabled(&self, metadata: &log::Metadata) -> bool {
        metadata.level() <= self.level
    }
    fn log(&self, record: &log::Record) {
        if !self.enabled(record.metadata()) {
            return;
        }
        let line = JsValue::from_str(&format!(
            "[{}] {}: {}",
            record.level(),
            record.target(),
            record.args()
        ));
        match record.level() {
            log::Level::Error => console::error_1(&line),
            log::Level::Warn => console::warn_1(&line),
            log::Level::Info => console::info_1(&line),
            log::Level::Debug => console::log_1(&line),
            log::Level::Trace => console::debug_1(&line),
        }
    }
    fn flush(&self) {}
}
