fn main() {
    if let Err(e) = grid_cli::run() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
