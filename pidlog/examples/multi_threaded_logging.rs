use std::sync::{Arc, mpsc::channel};

use pidlog::{Logger, Severity, log_entering, log_leaving, log_perror_io, log_printf};

fn handle_message(logger: &Logger, worker: usize, message: &str) -> usize {
    log_entering!(logger, "{worker}, {message:?}");
    log_printf!(logger, Severity::Warning, "MESSAGE RECEIVED: {message}").unwrap();
    let len = message.len();
    log_leaving!(logger, "{len}");
    len
}

fn main() {
    // one log file shared by every thread, each line stamped with the pid
    let logger = Arc::new(Logger::open_file("/tmp/pidlog_threads.log", false).unwrap());
    log_printf!(logger, Severity::Info, "Hello, world!").unwrap();

    let (handles, senders): (Vec<_>, Vec<_>) = (0..5)
        .map(|i| {
            let (sender, receiver) = channel::<&'static str>();
            let logger = Arc::clone(&logger);
            (
                std::thread::spawn(move || {
                    for message in receiver {
                        handle_message(&logger, i, message);
                    }
                }),
                sender,
            )
        })
        .unzip();
    for sender in senders {
        sender.send("Hello, world!").unwrap();
    }
    for handle in handles {
        handle.join().unwrap();
    }
    if let Err(err) = std::fs::metadata("/nonexistent/pidlog") {
        log_perror_io!(logger, Severity::Error, "stat(/nonexistent/pidlog)", &err).unwrap();
    }

    let logger = Arc::into_inner(logger).unwrap();
    logger.close().unwrap();
    let content = std::fs::read_to_string("/tmp/pidlog_threads.log").unwrap();
    println!("{} lines written to /tmp/pidlog_threads.log:\n{content}", content.lines().count());
}
