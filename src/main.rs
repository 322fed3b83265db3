#[tokio::main]
async fn main() {
    if let Err(e) = rsvp_backend::run().await {
        eprintln!("rsvp-backend failed: {}", e);
        std::process::exit(1);
    }
}
