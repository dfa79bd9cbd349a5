fn main() {
    if let Err(e) = npeek_cli::run_cli() {
        eprintln!("npeek: {e}");
        std::process::exit(1);
    }
}
