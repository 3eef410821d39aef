use clap::Parser;
use msafr::cli::Cli;
use msafr::error::{RenamerError, Result};
use msafr::optimizer::OptimizeSettings;
use msafr::run::{self, RunPaths};
use msafr::schema;

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Brand validation happens before any filesystem access
    let Some(schema) = schema::for_brand(&cli.brand) else {
        return Err(RenamerError::UnknownBrand {
            name: cli.brand,
            available: schema::available_brands(),
        });
    };

    println!("📸 msafr - {} / {}\n", cli.season, schema.brand);

    let optimize = if cli.no_optimize {
        None
    } else {
        Some(OptimizeSettings {
            max_size_mb: cli.max_size_mb,
            jpeg_quality: cli.jpeg_quality,
        })
    };

    let paths = RunPaths::new(&cli.season, &cli.brand);
    run::run(&paths, schema, optimize)?;

    println!("\n✅ Done");
    Ok(())
}
