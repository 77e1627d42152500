use serde::Serialize;

use crate::app::{AppContext, Result};
use crate::domain::Scraped;
use crate::fetcher::PowerGamersQuery;

fn print_json<T: Serialize>(scraped: &Scraped<T>) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(scraped)?);
    if !scraped.is_complete() {
        eprintln!("warning: {} rows could not be decoded", scraped.dropped_rows);
    }
    Ok(())
}

pub async fn character(ctx: &AppContext, name: &str) -> Result<()> {
    let scraped = ctx.scraper.character(name).await?;
    print_json(&scraped)
}

pub async fn guild(ctx: &AppContext, id: u32) -> Result<()> {
    let scraped = ctx.scraper.guild(id).await?;
    print_json(&scraped)?;
    eprintln!(
        "{} of {} members online",
        scraped.data.online_count(),
        scraped.data.members.len()
    );
    Ok(())
}

pub async fn power_gamers(ctx: &AppContext, query: &PowerGamersQuery) -> Result<()> {
    let scraped = ctx.scraper.power_gamers(query).await?;
    print_json(&scraped)
}

pub async fn insomniacs(ctx: &AppContext, all_pages: bool) -> Result<()> {
    let scraped = ctx.scraper.insomniacs(all_pages).await?;
    print_json(&scraped)
}

pub async fn who_is_online(ctx: &AppContext, order: &str) -> Result<()> {
    let scraped = ctx.scraper.who_is_online(order).await?;
    print_json(&scraped)
}
