// Saída de log no formato "info string ..." das interfaces de motor.

use log::{Level, LevelFilter, Log, Metadata, Record};
use std::sync::atomic::{AtomicBool, Ordering};

/// Registos de debug e trace ligados
static VERBOSE_LOGGING: AtomicBool = AtomicBool::new(false);

static LOGGER: InfoLogger = InfoLogger;

struct InfoLogger;

impl InfoLogger {
    fn level(&self) -> Level {
        if is_verbose() { Level::Trace } else { Level::Info }
    }
}

impl Log for InfoLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= self.level()
    }

    fn log(&self, record: &Record) {
        if self.enabled(record.metadata()) {
            println!("info string {}", record.args());
        }
    }

    fn flush(&self) {}
}

pub fn set_verbose(verbose: bool) {
    VERBOSE_LOGGING.store(verbose, Ordering::Relaxed);
    log::set_max_level(if verbose { LevelFilter::Trace } else { LevelFilter::Info });
}

pub fn is_verbose() -> bool {
    VERBOSE_LOGGING.load(Ordering::Relaxed)
}

/// Instala o logger global. `verbose` ativa registos de debug e trace.
/// Chamadas repetidas só mudam o nível.
pub fn init(verbose: bool) {
    let _ = log::set_logger(&LOGGER);
    set_verbose(verbose);
}
