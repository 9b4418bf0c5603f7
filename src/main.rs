#[tokio::main(flavor = "current_thread")]
async fn main() {
    netdisable::app::bootstrap::run().await;
}
