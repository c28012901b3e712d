use clap::{Parser, Subcommand};
use serde_json::{Map, Value};

#[derive(Parser)]
#[command(name = "issues-cli")]
#[command(about = "Management CLI for the Issue Tracker API", long_about = None)]
struct Cli {
    #[arg(short, long, default_value = "http://localhost:8080")]
    url: String,

    #[arg(short, long, default_value = "apitest")]
    project: String,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List issues, optionally filtered by field=value pairs
    List {
        #[arg(value_parser = parse_pair)]
        filters: Vec<(String, String)>,
    },
    /// Create a new issue
    Create {
        #[arg(long)]
        title: String,
        #[arg(long)]
        text: String,
        #[arg(long)]
        created_by: String,
        #[arg(long, default_value = "")]
        assigned_to: String,
        #[arg(long, default_value = "")]
        status_text: String,
    },
    /// Update fields on an existing issue
    Update {
        id: String,
        #[arg(value_parser = parse_pair)]
        fields: Vec<(String, String)>,
        /// Mark the issue open
        #[arg(long)]
        open: bool,
    },
    /// Delete an issue by id
    Delete { id: String },
}

fn parse_pair(s: &str) -> Result<(String, String), String> {
    s.split_once('=')
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .ok_or_else(|| format!("expected field=value, got '{}'", s))
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    let client = reqwest::Client::new();
    let endpoint = format!("{}/api/issues/{}", cli.url, cli.project);

    match cli.command {
        Commands::List { filters } => {
            let res = client.get(&endpoint).query(&filters).send().await?;
            print_response(res).await?;
        }
        Commands::Create {
            title,
            text,
            created_by,
            assigned_to,
            status_text,
        } => {
            let body = serde_json::json!({
                "issue_title": title,
                "issue_text": text,
                "created_by": created_by,
                "assigned_to": assigned_to,
                "status_text": status_text,
            });
            let res = client.post(&endpoint).json(&body).send().await?;
            print_response(res).await?;
        }
        Commands::Update { id, fields, open } => {
            let mut body = Map::new();
            body.insert("_id".to_string(), Value::String(id));
            for (key, value) in fields {
                body.insert(key, Value::String(value));
            }
            if open {
                body.insert("open".to_string(), Value::Bool(true));
            }
            let res = client.put(&endpoint).json(&body).send().await?;
            print_response(res).await?;
        }
        Commands::Delete { id } => {
            let body = serde_json::json!({ "_id": id });
            let res = client.delete(&endpoint).json(&body).send().await?;
            print_response(res).await?;
        }
    }

    Ok(())
}

async fn print_response(res: reqwest::Response) -> Result<(), Box<dyn std::error::Error>> {
    let status = res.status();
    if !status.is_success() {
        eprintln!("Error: API returned status {}", status);
        if let Ok(text) = res.text().await {
            eprintln!("Response: {}", text);
        }
        return Ok(());
    }

    let json: Value = res.json().await?;
    println!("{}", serde_json::to_string_pretty(&json)?);
    Ok(())
}
