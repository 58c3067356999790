use std::fmt::Debug;
use std::fs::{File, OpenOptions};
use std::path::Path;
use std::sync::Mutex;

use colored::*;
use efa_deploy_common::{PRINT_TARGET, SUCCESS_TARGET};
use tracing::field::{Field, Visit};
use tracing::{Event, Level, Subscriber};
use tracing_subscriber::filter::{EnvFilter, filter_fn};
use tracing_subscriber::fmt::FormatEvent;
use tracing_subscriber::fmt::format::{self, Writer};
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::registry::LookupSpan;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{Layer, fmt};

use crate::terminal::spinner::SpinnerWriter;

/// Terminal formatter: a colored symbol per level, then the message.
///
/// Events on the print target carry pre-styled text and are written as is.
pub struct DeployFormatter;

impl<S, N> FormatEvent<S, N> for DeployFormatter
where
    S: Subscriber + for<'a> LookupSpan<'a>,
    N: for<'a> format::FormatFields<'a> + 'static,
{
    fn format_event(
        &self,
        ctx: &tracing_subscriber::fmt::FmtContext<'_, S, N>,
        mut writer: Writer<'_>,
        event: &Event<'_>,
    ) -> std::fmt::Result {
        let meta = event.metadata();

        if meta.target() == PRINT_TARGET {
            let mut raw = RawMessage::default();
            event.record(&mut raw);
            return writeln!(writer, "{}", raw.0.unwrap_or_default());
        }

        let (symbol, color_func): (&str, fn(ColoredString) -> ColoredString) =
            match (*meta.level(), meta.target()) {
                (Level::INFO, SUCCESS_TARGET) => ("[✓]", |s| s.green().bold()),
                (Level::TRACE, _) => ("[ ]", |s| s.dimmed()),
                (Level::DEBUG, _) => ("[?]", |s| s.blue()),
                (Level::INFO, _) => ("[+]", |s| s.green().bold()),
                (Level::WARN, _) => ("[*]", |s| s.yellow().bold()),
                (Level::ERROR, _) => ("[-]", |s| s.red().bold()),
            };

        write!(writer, "{} ", color_func(symbol.into()))?;

        ctx.field_format().format_fields(writer.by_ref(), event)?;

        writeln!(writer)
    }
}

#[derive(Default)]
struct RawMessage(Option<String>);

impl Visit for RawMessage {
    fn record_str(&mut self, field: &Field, value: &str) {
        if field.name() == "raw_msg" {
            self.0 = Some(value.to_string());
        }
    }

    fn record_debug(&mut self, field: &Field, value: &dyn Debug) {
        if field.name() == "raw_msg" && self.0.is_none() {
            self.0 = Some(format!("{:?}", value));
        }
    }
}

/// Installs the terminal layer and, if the file can be opened, the debug
/// log file layer. Returns the reason the log file was skipped, if any.
pub fn init_logging(log_file: &Path) -> Option<std::io::Error> {
    let (file, skipped) = match open_log_file(log_file) {
        Ok(handle) => (Some(file_layer(handle)), None),
        Err(err) => (None, Some(err)),
    };

    tracing_subscriber::registry()
        .with(console_layer())
        .with(file)
        .init();

    skipped
}

fn open_log_file(log_file: &Path) -> std::io::Result<File> {
    OpenOptions::new().create(true).append(true).open(log_file)
}

fn console_layer<S>() -> impl Layer<S> + Send + Sync + 'static
where
    S: Subscriber + for<'a> LookupSpan<'a>,
{
    fmt::layer()
        .event_format(DeployFormatter)
        .with_writer(|| SpinnerWriter)
        .with_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
}

/// Everything up to debug, switch transcripts included, minus raw terminal
/// output.
fn file_layer<S>(handle: File) -> impl Layer<S> + Send + Sync + 'static
where
    S: Subscriber + for<'a> LookupSpan<'a>,
{
    fmt::layer()
        .with_ansi(false)
        .with_target(true)
        .with_writer(Mutex::new(handle))
        .with_filter(filter_fn(|meta| {
            meta.target() != PRINT_TARGET && *meta.level() <= Level::DEBUG
        }))
}
