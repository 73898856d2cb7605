fn main() {
    if let Err(e) = polyteos_rs::adapters::run() {
        eprintln!("{}", e);
        std::process::exit(1);
    }
}
