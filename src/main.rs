fn main() {
    if let Err(err) = dirtree_renderer::run() {
        eprintln!("error: {err:#}");
        std::process::exit(1);
    }
}
