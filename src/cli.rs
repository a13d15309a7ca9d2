//! Command-line interface definitions and argument parsing

use clap::Parser;

use crate::sweep::SweepFeature;

/// Apartment price estimation CLI with single-feature influence charts
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// Number of rooms
    #[arg(short, long, default_value = "3")]
    pub rooms: f64,

    /// Floor area in square meters
    #[arg(short, long, default_value = "100")]
    pub area: f64,

    /// Town name; known towns are Zürich, Kloten, Uster and Illnau-Effretikon,
    /// anything else falls back to the neutral location factor
    #[arg(short, long, default_value = "Zürich")]
    pub town: String,

    /// Sweep mode: chart how one feature influences the price
    /// Example: --sweep area (or --sweep rooms)
    #[arg(short, long)]
    pub sweep: Option<String>,

    /// Output path for the influence chart (sweep mode only)
    #[arg(short, long, default_value = "influence_plot.png")]
    pub output: String,

    /// Enable verbose output
    #[arg(short, long)]
    pub verbose: bool,
}

impl Args {
    /// Parse the swept feature from the sweep flag
    ///
    /// Returns `None` when no sweep was requested, and an error for feature
    /// names other than "area" or "rooms".
    pub fn sweep_feature(&self) -> crate::Result<Option<SweepFeature>> {
        self.sweep.as_deref().map(SweepFeature::parse).transpose()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn base_args() -> Args {
        Args {
            rooms: 3.0,
            area: 100.0,
            town: "Zürich".to_string(),
            sweep: None,
            output: "influence_plot.png".to_string(),
            verbose: false,
        }
    }

    #[test]
    fn test_sweep_feature() {
        let mut args = base_args();

        let result = args.sweep_feature().unwrap();
        assert_eq!(result, None);

        args.sweep = Some("area".to_string());
        let result = args.sweep_feature().unwrap();
        assert_eq!(result, Some(SweepFeature::Area));

        args.sweep = Some("rooms".to_string());
        let result = args.sweep_feature().unwrap();
        assert_eq!(result, Some(SweepFeature::Rooms));

        args.sweep = Some("height".to_string());
        assert!(args.sweep_feature().is_err());
    }

    #[test]
    fn test_default_arguments() {
        let args = Args::parse_from(["wohnwert"]);
        assert_eq!(args.rooms, 3.0);
        assert_eq!(args.area, 100.0);
        assert_eq!(args.town, "Zürich");
        assert_eq!(args.sweep, None);
        assert_eq!(args.output, "influence_plot.png");
        assert!(!args.verbose);
    }
}
