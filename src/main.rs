use log::debug;
use std::env;
use std::process::ExitCode;

use samba_requests::{from_env, RequestOptions, SambaError};

async fn run() -> Result<(), SambaError> {
    // Get the path from command-line arguments
    let path = env::args()
        .nth(1)
        .ok_or_else(|| SambaError::Usage("samba-requests <path>".to_string()))?;

    let requests = from_env()?;
    debug!("Using backend {}", requests.base_url());

    let body: serde_json::Value = requests.get(RequestOptions::new(path)).await?;
    println!("{}", serde_json::to_string_pretty(&body)?);

    Ok(())
}

#[tokio::main]
async fn main() -> ExitCode {
    env_logger::init();

    match run().await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("{}", e);
            ExitCode::FAILURE
        }
    }
}
