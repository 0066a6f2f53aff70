use chrono::{format::DelayedFormat, Local};
use crossbeam_channel::{unbounded, Sender};
use once_cell::sync::Lazy;
use std::{
    fmt::Write as _,
    fs::{self, OpenOptions},
    io::{BufWriter, Write},
    path::{Path, PathBuf},
    thread,
};

static LOGGER: Lazy<Logger> = Lazy::new(|| Logger::new("default"));

/// 每個等級各自一條寫檔線程，檔名為 `log/<日期>_<名稱>_<等級>.log`
pub struct Logger {
    info_writer: Option<Sender<String>>,
    warn_writer: Option<Sender<String>>,
    error_writer: Option<Sender<String>>,
    debug_writer: Option<Sender<String>>,
}

impl Logger {
    pub fn new(log_name: &str) -> Self {
        Logger {
            info_writer: Self::create_writer(&format!("{}_info", log_name)),
            warn_writer: Self::create_writer(&format!("{}_warn", log_name)),
            error_writer: Self::create_writer(&format!("{}_error", log_name)),
            debug_writer: Self::create_writer(&format!("{}_debug", log_name)),
        }
    }

    pub fn info(&self, log: String) {
        Self::send(log, &self.info_writer);
    }

    pub fn warn(&self, log: String) {
        Self::send(log, &self.warn_writer);
    }

    pub fn error(&self, log: String) {
        Self::send(log, &self.error_writer);
    }

    pub fn debug(&self, log: String) {
        Self::send(log, &self.debug_writer);
    }

    fn send(msg: String, writer: &Option<Sender<String>>) {
        match writer {
            Some(w) => {
                if let Err(why) = w.send(msg) {
                    error_console(why.to_string());
                }
            }
            // 無法建立日誌檔時改寫到 console
            None => info_console(msg),
        }
    }

    fn create_writer(log_name: &str) -> Option<Sender<String>> {
        let log_path = match Self::get_log_path(log_name) {
            Some(p) => p,
            None => {
                error_console(format!("Failed to create log directory for {}", log_name));
                return None;
            }
        };

        let file = match OpenOptions::new().create(true).append(true).open(&log_path) {
            Ok(f) => f,
            Err(why) => {
                error_console(format!(
                    "Failed to open log file {:?} because {:?}",
                    log_path, why
                ));
                return None;
            }
        };

        let (tx, rx) = unbounded::<String>();

        // 寫入檔案的操作使用另一個線程處理
        thread::spawn(move || {
            let mut writer = BufWriter::new(file);
            let mut line = String::with_capacity(2048);

            for received in &rx {
                if writeln!(
                    &mut line,
                    "{} {}",
                    Local::now().format("%F %X%.6f"),
                    received
                )
                .is_err()
                {
                    continue;
                }

                if rx.is_empty() || line.len() >= 2048 {
                    if let Err(why) = writer.write_all(line.as_bytes()) {
                        error_console(format!(
                            "Failed to write to log file. because:{:#?}\r\nmsg:{}",
                            why, line
                        ));
                    }

                    if let Err(why) = writer.flush() {
                        error_console(format!("Failed to flush log file. because:{:#?}", why));
                    }

                    line.clear();
                }
            }
        });

        Some(tx)
    }

    fn get_log_path(name: &str) -> Option<PathBuf> {
        let path = Path::new("log");

        if !path.exists() {
            fs::create_dir_all(path).ok()?;
        }

        let mut log_path = PathBuf::from(path);
        log_path.push(format!("{}_{}.log", Local::now().format("%Y-%m-%d"), name));

        Some(log_path)
    }
}

pub fn info_file_async(log: String) {
    LOGGER.info(log);
}

pub fn warn_file_async(log: String) {
    LOGGER.warn(log);
}

pub fn error_file_async(log: String) {
    LOGGER.error(log);
}

pub fn debug_file_async(log: String) {
    LOGGER.debug(log);
}

pub fn info_console(log: String) {
    println!(
        "{} Info {}",
        Local::now().format("%Y-%m-%d %H:%M:%S.%3f"),
        log
    );
}

pub fn error_console(log: String) {
    println!(
        "{} Error {}",
        DelayedFormat::to_string(&Local::now().format("%Y-%m-%d %H:%M:%S.%3f")),
        log
    );
}
