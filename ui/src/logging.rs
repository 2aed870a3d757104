//! `tracing` subscriber setup.
//!
//! Natively events go to stderr. In the browser each formatted line is handed
//! to `console.log`/`console.warn`/`console.error`, without timestamps (the
//! devtools console stamps them already, and `SystemTime` is unavailable).

use tracing::Level;

/// Install the global subscriber. Later calls are ignored.
pub fn init(level: Level) {
    let builder = tracing_subscriber::fmt()
        .with_max_level(level)
        .with_target(false)
        .with_ansi(false);

    #[cfg(target_arch = "wasm32")]
    let result = builder
        .without_time()
        .with_writer(console::ConsoleMakeWriter)
        .try_init();

    #[cfg(not(target_arch = "wasm32"))]
    let result = builder.with_writer(std::io::stderr).try_init();

    if result.is_err() {
        tracing::debug!("tracing subscriber already installed");
    }
}

/// Devtools console method an event is routed to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(not(target_arch = "wasm32"), allow(dead_code))]
enum Channel {
    Error,
    Warn,
    Log,
}

#[cfg_attr(not(target_arch = "wasm32"), allow(dead_code))]
fn channel(level: &Level) -> Channel {
    if *level == Level::ERROR {
        Channel::Error
    } else if *level == Level::WARN {
        Channel::Warn
    } else {
        Channel::Log
    }
}

#[cfg(target_arch = "wasm32")]
mod console {
    use std::io::{self, Write};

    use tracing::Metadata;
    use tracing_subscriber::fmt::MakeWriter;

    use super::{channel, Channel};

    pub struct ConsoleMakeWriter;

    impl<'a> MakeWriter<'a> for ConsoleMakeWriter {
        type Writer = ConsoleWriter;

        fn make_writer(&'a self) -> Self::Writer {
            ConsoleWriter::new(Channel::Log)
        }

        fn make_writer_for(&'a self, meta: &Metadata<'_>) -> Self::Writer {
            ConsoleWriter::new(channel(meta.level()))
        }
    }

    /// Buffers one formatted event and forwards it to the devtools console on drop.
    pub struct ConsoleWriter {
        channel: Channel,
        buf: Vec<u8>,
    }

    impl ConsoleWriter {
        fn new(channel: Channel) -> Self {
            Self {
                channel,
                buf: Vec::new(),
            }
        }
    }

    impl Write for ConsoleWriter {
        fn write(&mut self, bytes: &[u8]) -> io::Result<usize> {
            self.buf.extend_from_slice(bytes);
            Ok(bytes.len())
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    impl Drop for ConsoleWriter {
        fn drop(&mut self) {
            let line = String::from_utf8_lossy(&self.buf);
            let line = line.trim_end();
            if line.is_empty() {
                return;
            }
            let value = wasm_bindgen::JsValue::from_str(line);
            match self.channel {
                Channel::Error => web_sys::console::error_1(&value),
                Channel::Warn => web_sys::console::warn_1(&value),
                Channel::Log => web_sys::console::log_1(&value),
            }
        }
    }

}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn init_is_repeatable() {
        init(Level::DEBUG);
        init(Level::INFO);
        tracing::info!("still logging");
    }

    #[test]
    fn console_channel_follows_event_level_only() {
        assert_eq!(channel(&Level::ERROR), Channel::Error);
        assert_eq!(channel(&Level::WARN), Channel::Warn);
        assert_eq!(channel(&Level::INFO), Channel::Log);
        assert_eq!(channel(&Level::DEBUG), Channel::Log);
        assert_eq!(channel(&Level::TRACE), Channel::Log);
    }
}
