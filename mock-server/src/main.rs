use log::{info, LevelFilter};
use simplelog::{Config, TermLogger, TerminalMode};
use std::{env, net::SocketAddr, path::PathBuf, str::FromStr, sync::Arc};
use warp::Filter;

use puppy_bowl_mock_server::{api, Store};

#[tokio::main]
async fn main() {
    TermLogger::init(LevelFilter::Debug, Config::default(), TerminalMode::Mixed)
        .expect("failed to initialize the terminal logger");

    let fallback = || "127.0.0.1:9001".to_string();
    let address = env::args().nth(1).unwrap_or_else(fallback);
    let address = SocketAddr::from_str(&address).expect("invalid IP address provided");
    let static_dir = env::args().nth(2).map(PathBuf::from);

    let store = Arc::new(Store::with_demo_roster());
    let api = api(store);

    info!("serving the roster API on http://{address}/api/<cohort>/players");
    match static_dir {
        Some(static_dir) => {
            info!("serving static files from {}", static_dir.display());
            warp::serve(warp::fs::dir(static_dir).or(api)).run(address).await;
        }
        None => warp::serve(api).run(address).await,
    }
}
