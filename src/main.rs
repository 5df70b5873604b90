fn main() {
    if let Err(e) = pitchkit::app::cli::run() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
