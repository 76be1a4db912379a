#![allow(dead_code)]

use std::{
    io::{self, Write},
    sync::{Arc, Mutex},
};

use regex::Regex;

/// In-memory stream whose contents stay readable after the logger took it.
#[derive(Clone, Default)]
pub struct SharedBuffer(Arc<Mutex<Vec<u8>>>);

impl SharedBuffer {
    pub fn contents(&self) -> String {
        String::from_utf8(self.0.lock().unwrap().clone()).unwrap()
    }
}

impl Write for SharedBuffer {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.0.lock().unwrap().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

/// Captures: seconds, microseconds, pid, tag, file, line, function, message.
pub fn line_regex() -> Regex {
    Regex::new(r"^(\d+)\.(\d{6}): (\d{5,}): \[(PAN|ERR|WRN|INF|TRC|DBG)\] (.+?):(\d+): in (.+?)\(\): (.*)$")
        .unwrap()
}
