use dense_apsp::web::server::{start_server_with_config, ServerConfig};
use std::env;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize logging
    env_logger::init();

    // Parse command line arguments
    let args: Vec<String> = env::args().collect();
    let port = if args.len() > 1 {
        args[1].parse().unwrap_or(3005)
    } else {
        3005
    };

    let config = ServerConfig {
        port,
        ..Default::default()
    };

    println!("🔧 Starting Dense APSP server...");
    println!("   📡 Port: {}", config.port);
    println!("   📁 Static files: {}", config.static_dir);
    println!("   🌐 CORS enabled: {}", config.enable_cors);

    start_server_with_config(config).await?;

    Ok(())
}
