#[tokio::main]
async fn main() {
    if let Err(e) = clinic_console_lib::run().await {
        eprintln!("{e}");
        std::process::exit(1);
    }
}
