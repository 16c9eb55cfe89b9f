#[tokio::main]
async fn main() {
  if let Err(e) = cycle_planner::run().await {
    tracing::error!(error = %e, "cycle planner failed");
    std::process::exit(1);
  }
}
