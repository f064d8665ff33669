use std::path::PathBuf;

use clap::{Parser, Subcommand};
use serde_json::Value;

#[derive(Parser)]
#[command(name = "probe-cli")]
#[command(about = "Run ingress probes against a deployed backend", long_about = None)]
struct Cli {
    #[arg(short, long, default_value = "http://localhost:8001")]
    url: String,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Fetch the root greeting/dashboard
    Status,
    /// Request a session cookie and report what came back
    SetCookie,
    /// Check whether the load balancer injected a route cookie
    CheckSession,
    /// Probe CORS propagation (GET with an Origin header)
    Cors {
        /// Origin header to send
        #[arg(long, default_value = "https://probe.test")]
        origin: String,
    },
    /// List the security headers to verify on responses
    SecurityHeaders,
    /// Hold the request open for N seconds to exercise proxy timeouts
    Timeout {
        #[arg(short, long, default_value_t = 5)]
        seconds: u64,
    },
    /// Upload a file and echo its metadata
    Upload { file: PathBuf },
    /// Show the request metadata the backend observed
    Info,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    let client = reqwest::Client::new();

    match cli.command {
        Commands::Status => {
            let res = client.get(&cli.url).send().await?;
            print_response(res).await?;
        }
        Commands::SetCookie => {
            let res = client.get(format!("{}/set-cookie", cli.url)).send().await?;
            if let Some(cookie) = res.headers().get("set-cookie") {
                println!("Set-Cookie: {}", cookie.to_str().unwrap_or("<binary>"));
            } else {
                println!("No Set-Cookie header on response");
            }
            print_response(res).await?;
        }
        Commands::CheckSession => {
            let res = client
                .get(format!("{}/check-session", cli.url))
                .send()
                .await?;
            print_response(res).await?;
        }
        Commands::Cors { origin } => {
            let res = client
                .get(format!("{}/cors-test", cli.url))
                .header("Origin", origin)
                .send()
                .await?;
            for header in ["access-control-allow-origin", "access-control-allow-methods"] {
                match res.headers().get(header) {
                    Some(v) => println!("{}: {}", header, v.to_str().unwrap_or("<binary>")),
                    None => println!("{}: (not injected)", header),
                }
            }
            print_response(res).await?;
        }
        Commands::SecurityHeaders => {
            let res = client
                .get(format!("{}/security-headers", cli.url))
                .send()
                .await?;
            print_response(res).await?;
        }
        Commands::Timeout { seconds } => {
            let res = client
                .get(format!("{}/timeout-test?seconds={}", cli.url, seconds))
                .timeout(std::time::Duration::from_secs(seconds + 30))
                .send()
                .await?;
            print_response(res).await?;
        }
        Commands::Upload { file } => {
            let bytes = tokio::fs::read(&file).await?;
            let filename = file
                .file_name()
                .map(|n| n.to_string_lossy().into_owned())
                .unwrap_or_else(|| "upload.bin".to_string());
            let part = reqwest::multipart::Part::bytes(bytes).file_name(filename);
            let form = reqwest::multipart::Form::new().part("file", part);
            let res = client
                .post(format!("{}/upload", cli.url))
                .multipart(form)
                .send()
                .await?;
            print_response(res).await?;
        }
        Commands::Info => {
            let res = client
                .get(format!("{}/request-info", cli.url))
                .send()
                .await?;
            print_response(res).await?;
        }
    }

    Ok(())
}

async fn print_response(res: reqwest::Response) -> Result<(), Box<dyn std::error::Error>> {
    let status = res.status();
    if !status.is_success() {
        eprintln!("Error: backend returned status {}", status);
        if let Ok(text) = res.text().await {
            eprintln!("Response: {}", text);
        }
        return Ok(());
    }

    let text = res.text().await?;
    match serde_json::from_str::<Value>(&text) {
        Ok(json) => println!("{}", serde_json::to_string_pretty(&json)?),
        Err(_) => println!("{}", text),
    }
    Ok(())
}
