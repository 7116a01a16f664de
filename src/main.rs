fn main() {
    if let Err(err) = fleetdiag::run() {
        eprintln!("error: {err}");
        std::process::exit(1);
    }
}
