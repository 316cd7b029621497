// ABOUTME: CLI routes command - print the path table

use anyhow::Result;
use serde::Serialize;

use super::OutputFormat;
use crate::router::Route;

#[derive(Debug, Clone, Serialize)]
pub struct RouteInfo {
    pub path: String,
    pub destination: &'static str,
    pub sidebar: bool,
}

pub fn route_table() -> Vec<RouteInfo> {
    Route::known()
        .into_iter()
        .map(|route| RouteInfo {
            path: route.path().to_string(),
            destination: route.title(),
            sidebar: route.shows_sidebar(),
        })
        .collect()
}

pub fn execute(format: OutputFormat) -> Result<()> {
    let routes = route_table();
    match format {
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&routes)?),
        OutputFormat::Text => {
            println!("{:<22} DESTINATION", "PATH");
            println!("{}", "-".repeat(50));
            for route in &routes {
                println!("{:<22} {}", route.path, route.destination);
            }
            println!("{:<22} {}", "(any other path)", Route::NotFound(String::new()).title());
        }
    }
    Ok(())
}
