// src/logger.rs

//! `log` sink that writes records to one USART
//!
//! The logger owns the [`UartPorts`] it writes through, so application code
//! reaches the other ports via [`UartLogger::with_ports`]. Lines look like
//! `[INFO target] message` and end in CR LF.

use crate::console::print_to;
use crate::uart::{PortId, UartPorts, UsartHardware};
use core::fmt;
use log::{LevelFilter, Log, Metadata, Record, SetLoggerError};
use spin::Mutex;

pub struct UartLogger<B> {
    ports: Mutex<Option<UartPorts<B>>>,
    port: PortId,
    level: LevelFilter,
}

impl<B> UartLogger<B> {
    /// Logger with nothing attached yet; records are dropped until
    /// [`attach`](Self::attach) hands it the ports.
    pub const fn new(port: PortId, level: LevelFilter) -> Self {
        Self {
            ports: Mutex::new(None),
            port,
            level,
        }
    }

    /// Take ownership of `ports`, returning any previously attached set.
    pub fn attach(&self, ports: UartPorts<B>) -> Option<UartPorts<B>> {
        self.ports.lock().replace(ports)
    }

    pub fn detach(&self) -> Option<UartPorts<B>> {
        self.ports.lock().take()
    }

    /// Run `f` with the attached ports. `None` when nothing is attached.
    ///
    /// Logging from inside `f` deadlocks.
    pub fn with_ports<R>(&self, f: impl FnOnce(&mut UartPorts<B>) -> R) -> Option<R> {
        self.ports.lock().as_mut().map(f)
    }

    pub fn port(&self) -> PortId {
        self.port
    }

    pub fn level(&self) -> LevelFilter {
        self.level
    }
}

impl<B: UsartHardware + Send + 'static> UartLogger<B> {
    /// Register as the global logger and raise the max level to ours.
    #[cfg(target_has_atomic = "ptr")]
    pub fn install(&'static self) -> Result<(), SetLoggerError> {
        log::set_logger(self)?;
        log::set_max_level(self.level);
        Ok(())
    }

    /// Register as the global logger and raise the max level to ours.
    ///
    /// # Safety
    ///
    /// Targets without pointer-width compare-exchange (AVR) cannot register
    /// atomically. Call once, before interrupts are enabled and before
    /// anything logs.
    #[cfg(not(target_has_atomic = "ptr"))]
    pub unsafe fn install(&'static self) -> Result<(), SetLoggerError> {
        // SAFETY: the caller guarantees no concurrent logger access.
        unsafe {
            log::set_logger_racy(self)?;
            log::set_max_level_racy(self.level);
        }
        Ok(())
    }
}

impl<B> fmt::Debug for UartLogger<B> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("UartLogger")
            .field("port", &self.port)
            .field("level", &self.level)
            .finish_non_exhaustive()
    }
}

impl<B: UsartHardware + Send> Log for UartLogger<B> {
    fn enabled(&self, metadata: &Metadata<'_>) -> bool {
        metadata.level() <= self.level
    }

    fn log(&self, record: &Record<'_>) {
        if !self.enabled(record.metadata()) {
            return;
        }

        let mut guard = self.ports.lock();
        if let Some(ports) = guard.as_mut() {
            print_to(
                ports.port_mut(self.port),
                format_args!(
                    "[{level} {target}] {message}\n",
                    level = record.level(),
                    target = record.target(),
                    message = record.args(),
                ),
            );
        }
    }

    fn flush(&self) {}
}
