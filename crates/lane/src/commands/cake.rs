//! Cake command: blow out candles, collect wishes.

use anyhow::Result;
use colored::Colorize;
use lane_core::celebration::{BirthdayCake, ConfettiBurst, ConfettiKind, WISH_DISPLAY};

use crate::config::Config;

/// Blow out up to `count` candles in order.
pub async fn execute(count: usize, config: &Config) -> Result<()> {
    let celebration = &config.timeline.celebration;
    let mut cake = BirthdayCake::new(celebration.candles);
    let mut wishes = Vec::new();

    for id in 0..count.min(celebration.candles) {
        if let Some(wish) = cake.blow_out(id) {
            wishes.push(wish);
        }
    }

    println!("🎂 {}", candle_row(&cake));
    println!(
        "  {} lit, {} blown out",
        cake.lit_count().to_string().yellow(),
        cake.blown_out_count().to_string().dimmed()
    );

    for wish in &wishes {
        println!();
        println!("  {}", wish.magenta().bold());
    }

    if cake.lit_count() == 0 {
        let burst = ConfettiBurst::start(ConfettiKind::Welcome, celebration.confetti_duration());
        println!();
        println!("  🎉 {} confetti!", burst.particle_count());
    }

    if !wishes.is_empty() {
        tokio::time::sleep(WISH_DISPLAY).await;
    }

    Ok(())
}

fn candle_row(cake: &BirthdayCake) -> String {
    cake.candles()
        .iter()
        .map(|c| if c.is_lit { "🕯" } else { "·" })
        .collect()
}
