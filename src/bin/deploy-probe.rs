use std::process::ExitCode;

use clap::Parser;
use serde_json::Value;

#[derive(Parser)]
#[command(name = "deploy-probe")]
#[command(about = "Query a deploy-info server and verify the reported deployment", long_about = None)]
struct Cli {
    #[arg(short, long, default_value = "http://localhost:3000")]
    url: String,

    /// Request path (and query) to hit
    #[arg(short, long, default_value = "/")]
    path: String,

    /// Fail unless the server reports this deployment ID
    #[arg(long)]
    expect_deployment: Option<String>,

    /// Fail unless the server reports this version
    #[arg(long)]
    expect_version: Option<String>,
}

#[tokio::main]
async fn main() -> Result<ExitCode, Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    let client = reqwest::Client::new();

    let url = endpoint_url(&cli.url, &cli.path);
    let res = client.get(&url).send().await?;

    let status = res.status();
    if !status.is_success() {
        eprintln!("Error: {} returned status {}", url, status);
        if let Ok(text) = res.text().await {
            eprintln!("Response: {}", text);
        }
        return Ok(ExitCode::FAILURE);
    }

    let json: Value = res.json().await?;
    println!("{}", serde_json::to_string_pretty(&json)?);

    let mut ok = true;
    ok &= check(&json, "deploymentId", cli.expect_deployment.as_deref());
    ok &= check(&json, "version", cli.expect_version.as_deref());

    Ok(if ok { ExitCode::SUCCESS } else { ExitCode::FAILURE })
}

/// Join the base URL and request path with exactly one slash between them.
fn endpoint_url(base: &str, path: &str) -> String {
    format!(
        "{}/{}",
        base.trim_end_matches('/'),
        path.trim_start_matches('/')
    )
}

/// Whether `field` matches the expectation, if there is one.
fn check(json: &Value, field: &str, expected: Option<&str>) -> bool {
    let Some(expected) = expected else {
        return true;
    };
    match json.get(field).and_then(Value::as_str) {
        Some(actual) if actual == expected => true,
        actual => {
            eprintln!("Mismatch: {} is {:?}, expected {:?}", field, actual, expected);
            false
        }
    }
}
