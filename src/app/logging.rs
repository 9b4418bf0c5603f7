use std::{
    fs::OpenOptions,
    io::{BufWriter, Write},
    path::{Path, PathBuf},
    sync::mpsc,
    thread,
};

use chrono::Local;
use colored::Colorize;
use log::{Level, LevelFilter, Metadata, Record};
use thiserror::Error;
use tokio::fs;

#[derive(Debug, Error)]
pub enum LoggingError {
    #[error("failed to spawn log writer thread")]
    SpawnWriter {
        #[source]
        source: std::io::Error,
    },
}

#[derive(Debug)]
struct AsyncLogEvent {
    timestamp: String,
    level: Level,
    message: String,
}

#[derive(Debug)]
enum LogCommand {
    Write(AsyncLogEvent),
    Flush(mpsc::SyncSender<()>),
}

#[derive(Debug)]
struct AsyncLogger {
    level_filter: LevelFilter,
    sender: mpsc::Sender<LogCommand>,
}

impl AsyncLogger {
    const fn new(level_filter: LevelFilter, sender: mpsc::Sender<LogCommand>) -> Self {
        Self {
            level_filter,
            sender,
        }
    }
}

#[derive(Debug)]
struct LogWriter {
    receiver: mpsc::Receiver<LogCommand>,
    log_path: Option<PathBuf>,
}

impl LogWriter {
    const fn new(receiver: mpsc::Receiver<LogCommand>, log_path: Option<PathBuf>) -> Self {
        Self { receiver, log_path }
    }

    fn run(self) {
        let mut file_writer = self.log_path.as_ref().and_then(|log_path| {
            match OpenOptions::new().create(true).append(true).open(log_path) {
                Ok(file) => Some(BufWriter::new(file)),
                Err(error) => {
                    eprintln!(
                        "Failed to open log file '{}': {}",
                        log_path.display(),
                        error
                    );
                    None
                }
            }
        });

        let stdout = std::io::stdout();
        let mut stdout_lock = stdout.lock();

        while let Ok(command) = self.receiver.recv() {
            let event = match command {
                LogCommand::Write(event) => event,
                LogCommand::Flush(ack) => {
                    if let Err(error) = stdout_lock.flush() {
                        eprintln!("Failed to flush stdout: {}", error);
                    }
                    // The flushing side may have stopped waiting.
                    let _ack_result = ack.send(());
                    continue;
                }
            };

            let console_level = colored_level(event.level);
            let file_level = plain_level(event.level);

            if let Err(error) = writeln!(
                stdout_lock,
                "{} [ {} ] > {}",
                event.timestamp, console_level, event.message
            ) {
                eprintln!("Failed to write log line to stdout: {}", error);
            }

            if let Some(writer) = file_writer.as_mut() {
                if let Err(error) = writeln!(
                    writer,
                    "{} [ {} ] > {}",
                    event.timestamp, file_level, event.message
                ) {
                    eprintln!("Failed to write log line to file: {}", error);
                    file_writer = None;
                    continue;
                }

                if let Err(error) = writer.flush() {
                    eprintln!("Failed to flush log file writer: {}", error);
                    file_writer = None;
                }
            }
        }
    }
}

impl log::Log for AsyncLogger {
    fn enabled(&self, metadata: &Metadata<'_>) -> bool {
        metadata.level() <= self.level_filter
    }

    fn log(&self, record: &Record<'_>) {
        if !self.enabled(record.metadata()) {
            return;
        }

        let event = AsyncLogEvent {
            timestamp: Local::now().format("%Y-%m-%d %H:%M:%S.%3f").to_string(),
            level: record.level(),
            message: format!("{}", record.args()),
        };

        if let Err(_error) = self.sender.send(LogCommand::Write(event)) {
            // Logger channel is down; avoid recursive logging.
        }
    }

    // Blocks until the writer thread has drained everything queued before this call.
    fn flush(&self) {
        let (ack_sender, ack_receiver) = mpsc::sync_channel::<()>(1);
        if self.sender.send(LogCommand::Flush(ack_sender)).is_ok() {
            let _ack = ack_receiver.recv();
        }
    }
}

pub async fn init_logging(
    level_filter: LevelFilter,
    log_file_path: Option<&Path>,
) -> Result<(), LoggingError> {
    let (sender, receiver) = mpsc::channel::<LogCommand>();
    let writer = LogWriter::new(receiver, prepare_log_file(log_file_path).await);

    thread::Builder::new()
        .name("netdisable-log".to_owned())
        .spawn(move || {
            writer.run();
        })
        .map_err(|source| LoggingError::SpawnWriter { source })?;

    let logger = AsyncLogger::new(level_filter, sender);
    if let Err(_error) = log::set_boxed_logger(Box::new(logger)) {
        // Logger may already be initialized in process lifecycle.
        log::set_max_level(level_filter);
        return Ok(());
    }

    log::set_max_level(level_filter);
    Ok(())
}

// None when file logging is off or its directory cannot be created; the run
// then logs to stdout only.
async fn prepare_log_file(log_file_path: Option<&Path>) -> Option<PathBuf> {
    let log_file_path = log_file_path?;
    let log_dir = log_file_path
        .parent()
        .filter(|log_dir| !log_dir.as_os_str().is_empty());

    if let Some(log_dir) = log_dir {
        if let Err(error) = fs::create_dir_all(log_dir).await {
            eprintln!(
                "Failed to create log directory '{}': {}; logging to stdout only",
                log_dir.display(),
                error
            );
            return None;
        }
    }

    Some(log_file_path.to_path_buf())
}

fn colored_level(level: Level) -> String {
    match level {
        Level::Info => "+".green().to_string(),
        Level::Error => "-".red().to_string(),
        Level::Warn => "!".yellow().to_string(),
        Level::Debug => "*".blue().to_string(),
        Level::Trace => "~".purple().to_string(),
    }
}

const fn plain_level(level: Level) -> &'static str {
    match level {
        Level::Info => "+",
        Level::Error => "-",
        Level::Warn => "!",
        Level::Debug => "*",
        Level::Trace => "~",
    }
}
