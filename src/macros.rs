/// Add line of Go to output, with one tab per nesting level and a newline,
/// using format! syntax.
macro_rules! push_line {
    ($state:expr, $fmt:expr) => {
        (writeln!(&mut $state.output, concat!("{}", $fmt),
               "\t".repeat($state.level))).unwrap()
    };
    ($state:expr, $fmt:expr, $($arg:tt)*) => {
        (writeln!(&mut $state.output, concat!("{}", $fmt),
               "\t".repeat($state.level),
               $($arg)*)).unwrap()
    };
}
