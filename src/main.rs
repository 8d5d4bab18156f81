#[tokio::main]
async fn main() {
    if let Err(e) = pokebot::run().await {
        eprintln!("pokebot exited with error: {}", e);
        std::process::exit(1);
    }
}
