//! Caller-facing macros: one per severity, each capturing the call site
//! automatically and routing through the global facade.
//!
//! Every macro expands to an `io::Result<()>` so the append failure
//! surfaces at the call site; callers `?` it or discard it explicitly.
//! The level is checked before the message is formatted, so a suppressed
//! call does not allocate.

/// Resolves the fully qualified path of the enclosing function.
///
/// Declares a probe function inside the caller's scope and reads its type
/// name, so the result carries the caller's module path (and a
/// `::{{closure}}` suffix when invoked inside a closure).
#[macro_export]
macro_rules! function_path {
    () => {{
        fn probe() {}
        fn name_of<T>(_: T) -> &'static str {
            ::std::any::type_name::<T>()
        }
        let name = name_of(probe);
        name.strip_suffix("::probe").unwrap_or(name)
    }};
}

/// Captures the current source location as a [`crate::logger::CallSite`].
#[macro_export]
macro_rules! callsite {
    () => {
        $crate::logger::CallSite {
            file: file!(),
            function: $crate::function_path!(),
            line: line!(),
        }
    };
}

#[macro_export]
macro_rules! trace {
    () => {
        $crate::logger::trace("", $crate::callsite!())
    };
    ($($arg:tt)+) => {{
        if $crate::logger::enabled($crate::logger::LogLevel::Trace) {
            $crate::logger::trace(&format!($($arg)+), $crate::callsite!())
        } else {
            ::std::io::Result::Ok(())
        }
    }};
}

#[macro_export]
macro_rules! debug {
    () => {
        $crate::logger::debug("", $crate::callsite!())
    };
    ($($arg:tt)+) => {{
        if $crate::logger::enabled($crate::logger::LogLevel::Debug) {
            $crate::logger::debug(&format!($($arg)+), $crate::callsite!())
        } else {
            ::std::io::Result::Ok(())
        }
    }};
}

#[macro_export]
macro_rules! info {
    () => {
        $crate::logger::info("", $crate::callsite!())
    };
    ($($arg:tt)+) => {{
        if $crate::logger::enabled($crate::logger::LogLevel::Info) {
            $crate::logger::info(&format!($($arg)+), $crate::callsite!())
        } else {
            ::std::io::Result::Ok(())
        }
    }};
}

#[macro_export]
macro_rules! warn {
    () => {
        $crate::logger::warn("", $crate::callsite!())
    };
    ($($arg:tt)+) => {{
        if $crate::logger::enabled($crate::logger::LogLevel::Warn) {
            $crate::logger::warn(&format!($($arg)+), $crate::callsite!())
        } else {
            ::std::io::Result::Ok(())
        }
    }};
}

#[macro_export]
macro_rules! error {
    () => {
        $crate::logger::error("", $crate::callsite!())
    };
    ($($arg:tt)+) => {{
        if $crate::logger::enabled($crate::logger::LogLevel::Error) {
            $crate::logger::error(&format!($($arg)+), $crate::callsite!())
        } else {
            ::std::io::Result::Ok(())
        }
    }};
}

#[macro_export]
macro_rules! fatal {
    () => {
        $crate::logger::fatal("", $crate::callsite!())
    };
    ($($arg:tt)+) => {{
        if $crate::logger::enabled($crate::logger::LogLevel::Fatal) {
            $crate::logger::fatal(&format!($($arg)+), $crate::callsite!())
        } else {
            ::std::io::Result::Ok(())
        }
    }};
}
