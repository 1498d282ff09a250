use std::env::{args, var};
use std::process::exit;

use percolate::{Client, Config, Error};
use serde_json::Value;

fn print(value: &Value) {
    match serde_json::to_string_pretty(value) {
        Ok(text) => println!("{}", text),
        Err(_) => println!("{}", value),
    }
}

fn run(user_id: &str, limit: Option<&str>) -> Result<(), Error> {
    let api_key = var("PERCOLATE_API_KEY").unwrap_or_default();
    let mut config = Config::new();
    if let Ok(base_url) = var("PERCOLATE_BASE_URL") {
        config = config.base_url(base_url);
    }
    let client = Client::with_config(api_key, config)?;

    print(&client.get_user(user_id)?);
    if let Some(limit) = limit {
        print(&client.get_user_posts(user_id, limit)?);
    }
    Ok(())
}

fn main() {
    env_logger::init();

    let args: Vec<_> = args().skip(1).take(2).collect();
    let user_id = match args.first() {
        Some(user_id) => user_id,
        None => {
            eprintln!("usage: fetch_user <user-id> [limit]");
            exit(2);
        }
    };

    if let Err(err) = run(user_id, args.get(1).map(String::as_str)) {
        eprintln!("Error occurred: {}", err);
        exit(1);
    }
}
