/// Name of the enclosing function.
///
/// Inside a closure this is the name of the function defining the closure.
#[macro_export]
macro_rules! function {
    () => {{
        fn f() {}
        fn type_name_of<T>(_: T) -> &'static str {
            ::std::any::type_name::<T>()
        }
        $crate::short_function_name(type_name_of(f))
    }};
}

/// Writes one formatted line at `level`. Returns `pidlog::Result<()>`.
///
/// ```rust
/// use pidlog::{Logger, Severity, log_printf};
///
/// let logger = Logger::open(Vec::new());
/// log_printf!(logger, Severity::Info, "listening on port {}", 8080).unwrap();
/// ```
#[macro_export]
macro_rules! log_printf {
    ($logger:expr, $level:expr, $($arg:tt)+) => {
        $logger.printf_at(
            ::std::file!(),
            ::std::line!(),
            $crate::function!(),
            $level,
            ::std::format_args!($($arg)+),
        )
    };
}

/// Writes `"<msg>: <description of err>"` at `level`. Aborts if `err` is zero.
#[macro_export]
macro_rules! log_perror {
    ($logger:expr, $level:expr, $msg:expr, $err:expr) => {
        $logger.perror_at(
            ::std::file!(),
            ::std::line!(),
            $crate::function!(),
            $level,
            $msg,
            $err,
        )
    };
}

/// Like `log_perror!`, for a `std::io::Error`.
#[macro_export]
macro_rules! log_perror_io {
    ($logger:expr, $level:expr, $msg:expr, $err:expr) => {
        $logger.perror_io_at(
            ::std::file!(),
            ::std::line!(),
            $crate::function!(),
            $level,
            $msg,
            $err,
        )
    };
}

/// Writes a critical line and aborts the process.
#[macro_export]
macro_rules! log_abort {
    ($logger:expr, $msg:expr) => {
        $logger.abort_at(::std::file!(), ::std::line!(), $crate::function!(), $msg)
    };
}

#[macro_export]
macro_rules! log_panic {
    ($logger:expr) => {
        $crate::log_abort!($logger, "*** panic, unrecoverable error")
    };
}

#[macro_export]
macro_rules! log_bug {
    ($logger:expr) => {
        $crate::log_abort!($logger, "*** oops, a bug!")
    };
}

/// Reports a bug at critical severity without aborting.
#[macro_export]
macro_rules! log_bug_nopanic {
    ($logger:expr) => {{
        let _ = $crate::log_printf!(
            $logger,
            $crate::Severity::Critical,
            "*** oops, a bug! don't panic..."
        );
    }};
}

/// Aborts the process if `cond` is false.
#[macro_export]
macro_rules! log_assert {
    ($logger:expr, $cond:expr) => {
        if !($cond) {
            $crate::log_abort!($logger, "*** Assertion error");
        }
    };
}

/// Traces entry into the enclosing function, optionally with its arguments.
///
/// ```rust
/// use pidlog::{Logger, log_entering};
///
/// fn resize(logger: &Logger, width: u32, height: u32) {
///     log_entering!(logger, "{width}, {height}");
/// }
/// # resize(&Logger::open(Vec::new()), 80, 24);
/// ```
#[macro_export]
macro_rules! log_entering {
    ($logger:expr) => {{
        let function = $crate::function!();
        let _ = $crate::log_printf!($logger, $crate::Severity::Debug, "entering {}()", function);
    }};
    ($logger:expr, $($arg:tt)+) => {{
        let function = $crate::function!();
        let _ = $crate::log_printf!(
            $logger,
            $crate::Severity::Debug,
            "entering {}({})",
            function,
            ::std::format_args!($($arg)+)
        );
    }};
}

/// Traces exit from the enclosing function, optionally with its return value.
#[macro_export]
macro_rules! log_leaving {
    ($logger:expr) => {{
        let function = $crate::function!();
        let _ = $crate::log_printf!($logger, $crate::Severity::Debug, "leaving {}()", function);
    }};
    ($logger:expr, $($arg:tt)+) => {{
        let function = $crate::function!();
        let _ = $crate::log_printf!(
            $logger,
            $crate::Severity::Debug,
            "leaving {}() = {}",
            function,
            ::std::format_args!($($arg)+)
        );
    }};
}

/// Traces exit with an error code, described when nonzero.
///
/// Negative codes (`-EINVAL` style) are described by their absolute value.
#[macro_export]
macro_rules! log_leaving_err {
    ($logger:expr, $err:expr) => {{
        let err: i32 = $err;
        if err != 0 {
            $crate::log_leaving!(
                $logger,
                "{} ({})",
                err,
                $crate::error_description(err.wrapping_abs())
            );
        } else {
            $crate::log_leaving!($logger, "{}", err);
        }
    }};
}

#[macro_export]
macro_rules! log_unexpected {
    ($logger:expr) => {{
        let _ = $crate::log_printf!($logger, $crate::Severity::Error, "unexpected condition");
    }};
}
