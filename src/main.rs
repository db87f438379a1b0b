fn main() {
    if let Err(err) = orders_rollup::run() {
        eprintln!("error: {err}");
        std::process::exit(1);
    }
}
