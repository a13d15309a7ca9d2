//! Wohnwert: apartment price estimation CLI
//!
//! This is the main entrypoint that dispatches between single-price
//! estimation and the influence-chart sweep mode.

use anyhow::Result;
use clap::Parser;
use std::time::Instant;
use wohnwert::sweep::ROOM_SWEEP_AREA;
use wohnwert::{estimate_price, known_towns, location_factor, sweep_prices, viz, Args, SweepFeature};

fn main() -> Result<()> {
    // Parse command-line arguments
    let args = Args::parse();

    if args.verbose {
        println!("Wohnwert - Apartment Price Estimation");
        println!("=====================================\n");
    }

    // Check if in sweep mode
    if let Some(feature) = args.sweep_feature()? {
        run_sweep_mode(&args, feature)?;
    } else {
        run_estimate_mode(&args);
    }

    Ok(())
}

/// Estimate a single price from the provided inputs
fn run_estimate_mode(args: &Args) {
    println!("=== Price Estimation ===");
    println!(
        "Input: rooms={}, area={} qm, town={}",
        args.rooms, args.area, args.town
    );

    let price = estimate_price(args.rooms, args.area, &args.town);

    if args.verbose {
        let factor = location_factor(&args.town);
        if known_towns().any(|known| known == args.town) {
            println!("\nLocation factor for {}: {}", args.town, factor);
        } else {
            println!(
                "\nTown '{}' has no table entry, using the neutral factor {}",
                args.town, factor
            );
        }
    }

    println!("\n✓ Predicted price: {:.2}", price);
}

/// Run a sensitivity sweep and render the influence chart
fn run_sweep_mode(args: &Args, feature: SweepFeature) -> Result<()> {
    println!("=== Influence Sweep ===");
    match feature {
        SweepFeature::Area => println!(
            "Sweeping area over [30, 150] qm (fixed: rooms={}, town={})",
            args.rooms, args.town
        ),
        SweepFeature::Rooms => println!(
            "Sweeping rooms over 1..=5 (fixed: area={} qm, town={})",
            ROOM_SWEEP_AREA, args.town
        ),
    }

    let start_time = Instant::now();

    let result = sweep_prices(feature, args.rooms, &args.town);
    viz::print_sweep_summary(feature, &result);

    if args.verbose {
        println!("\nRendering chart to: {}", args.output);
    }
    viz::create_influence_chart(feature, &result, &args.output, None)?;

    let elapsed = start_time.elapsed();
    println!("\n✓ Sweep complete");
    println!("  Processing time: {:.2}s", elapsed.as_secs_f64());

    Ok(())
}
