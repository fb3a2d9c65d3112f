fn main() {
    if let Err(err) = textproc::run() {
        eprintln!("{}", textproc::format_error(&err));
        std::process::exit(1);
    }
}
