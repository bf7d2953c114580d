/// Writes a line to `$dest`; if the stream is gone the enclosing function
/// returns [`crate::exit_code::ERROR`].
macro_rules! write_or_exit {
    ($dest:expr, $($arg:tt)*) => {
        if writeln!($dest, $($arg)*).is_err() {
            return $crate::exit_code::ERROR;
        }
    };
}

pub(crate) use write_or_exit;
