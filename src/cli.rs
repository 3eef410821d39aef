use clap::Parser;

/// Multi-sheet photo renamer: matches catalog rows to product photos by
/// attribute columns and renames each match to `<EAN>-<n>.jpg`.
#[derive(Parser)]
#[command(name = "msafr")]
#[command(about = "Rename product photos from multi-sheet Excel catalogs", long_about = None)]
pub struct Cli {
    /// Season identifier, e.g. pe25 (builds the working directory paths)
    pub season: String,

    /// Brand name, selects the attribute columns to match
    pub brand: String,

    /// Skip the JPEG recompression pre-pass
    #[arg(long)]
    pub no_optimize: bool,

    /// Size threshold in MB above which images are recompressed
    #[arg(long, default_value = "1.0")]
    pub max_size_mb: f64,

    /// JPEG quality for recompression (0-100)
    #[arg(long, default_value = "85")]
    pub jpeg_quality: u8,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_positional_args() {
        let cli = Cli::parse_from(["msafr", "pe25", "liujo"]);
        assert_eq!(cli.season, "pe25");
        assert_eq!(cli.brand, "liujo");
        assert!(!cli.no_optimize);
        assert_eq!(cli.max_size_mb, 1.0);
        assert_eq!(cli.jpeg_quality, 85);
    }

    #[test]
    fn test_optimizer_flags() {
        let cli = Cli::parse_from([
            "msafr",
            "ai24",
            "furla",
            "--no-optimize",
            "--max-size-mb",
            "2.5",
            "--jpeg-quality",
            "70",
        ]);
        assert!(cli.no_optimize);
        assert_eq!(cli.max_size_mb, 2.5);
        assert_eq!(cli.jpeg_quality, 70);
    }

    #[test]
    fn test_missing_args_rejected() {
        assert!(Cli::try_parse_from(["msafr", "pe25"]).is_err());
        assert!(Cli::try_parse_from(["msafr"]).is_err());
    }
}
