use loginradius_rs::cli::run_cli;
use loginradius_rs::display::print_error;

#[tokio::main]
async fn main() {
    if let Err(e) = run_cli().await {
        print_error(&e.to_string());
        std::process::exit(1);
    }
}
