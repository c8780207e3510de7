// src/cli/input.rs
use std::io::{self, Write};

use anyhow::Result;
use colored::Colorize;

pub fn get_user_id(saved: Option<&str>) -> Result<String> {
    match saved {
        Some(saved) => print!(
            "{}",
            format!("➡️  Enter your User ID [{}]: ", saved).blue().bold()
        ),
        None => print!("{}", "➡️  Enter your User ID: ".blue().bold()),
    }
    io::stdout().flush()?;

    let mut user_id = String::new();
    io::stdin().read_line(&mut user_id)?;
    let user_id = user_id.trim();

    if user_id.is_empty() {
        if let Some(saved) = saved {
            return Ok(saved.to_string());
        }
    }
    Ok(user_id.to_string())
}
