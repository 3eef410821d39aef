//! Pre-pass recompression of oversized JPEGs through the external
//! `jpegoptim` tool.
//!
//! Purely advisory: matching and renaming never depend on this step, and any
//! failure here is logged and ignored.

use std::path::Path;
use std::process::Command;

const BYTES_PER_MB: f64 = 1024.0 * 1024.0;

/// Runtime settings for the optimizer pre-pass.
#[derive(Debug, Clone, Copy)]
pub struct OptimizeSettings {
    /// Files at or below this size are left alone.
    pub max_size_mb: f64,
    /// JPEG quality handed to `jpegoptim --max`.
    pub jpeg_quality: u8,
}

impl Default for OptimizeSettings {
    fn default() -> Self {
        Self {
            max_size_mb: 1.0,
            jpeg_quality: 85,
        }
    }
}

/// Folder-level outcome of the pre-pass.
#[derive(Debug, Default)]
pub struct OptimizeSummary {
    pub total_images: usize,
    pub optimized: usize,
    pub saved_mb: f64,
}

enum FileOutcome {
    /// Size before and after, in MB.
    Optimized(f64, f64),
    Skipped,
    Failed(String),
}

fn optimize_file(path: &Path, settings: &OptimizeSettings) -> FileOutcome {
    let Ok(meta) = std::fs::metadata(path) else {
        return FileOutcome::Skipped;
    };
    let size_mb = meta.len() as f64 / BYTES_PER_MB;
    if size_mb <= settings.max_size_mb {
        return FileOutcome::Skipped;
    }

    let output = Command::new("jpegoptim")
        .arg(format!("--max={}", settings.jpeg_quality))
        .arg("--strip-all")
        .arg(path)
        .output();

    match output {
        Ok(output) if output.status.success() => {
            let new_size_mb = std::fs::metadata(path)
                .map(|m| m.len() as f64 / BYTES_PER_MB)
                .unwrap_or(size_mb);
            FileOutcome::Optimized(size_mb, new_size_mb)
        }
        Ok(output) => FileOutcome::Failed(String::from_utf8_lossy(&output.stderr).to_string()),
        Err(e) => FileOutcome::Failed(e.to_string()),
    }
}

/// Offer every oversized JPEG in `names` under `folder` to the external
/// tool. Per-file errors are logged and never abort the pass.
pub fn optimize_folder(
    folder: &Path,
    names: &[String],
    settings: &OptimizeSettings,
) -> OptimizeSummary {
    println!("Optimizing images in {}...", folder.display());

    let mut summary = OptimizeSummary::default();

    for name in names {
        summary.total_images += 1;

        match optimize_file(&folder.join(name), settings) {
            FileOutcome::Optimized(before, after) => {
                summary.optimized += 1;
                summary.saved_mb += before - after;
                let reduction = (before - after) / before * 100.0;
                println!(
                    "Optimized: {} - from {:.2}MB to {:.2}MB ({:.1}% reduction)",
                    name, before, after, reduction
                );
            }
            FileOutcome::Skipped => {}
            FileOutcome::Failed(reason) => {
                println!("Error optimizing {}: {}", name, reason.trim());
            }
        }
    }

    println!("\nOptimization summary:");
    println!("  Total images: {}", summary.total_images);
    println!("  Optimized: {}", summary.optimized);
    println!("  Space saved: {:.2}MB", summary.saved_mb);

    summary
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs::File;
    use std::io::Write;
    use tempfile::tempdir;

    #[test]
    fn test_default_settings() {
        let settings = OptimizeSettings::default();
        assert_eq!(settings.max_size_mb, 1.0);
        assert_eq!(settings.jpeg_quality, 85);
    }

    #[test]
    fn test_small_files_are_skipped() {
        let dir = tempdir().unwrap();
        let mut f = File::create(dir.path().join("small.jpg")).unwrap();
        f.write_all(b"tiny").unwrap();

        let settings = OptimizeSettings::default();
        let summary = optimize_folder(dir.path(), &["small.jpg".to_string()], &settings);

        assert_eq!(summary.total_images, 1);
        assert_eq!(summary.optimized, 0);
        assert_eq!(summary.saved_mb, 0.0);
    }

    #[test]
    fn test_missing_file_does_not_abort_the_pass() {
        let dir = tempdir().unwrap();
        let settings = OptimizeSettings::default();
        let summary = optimize_folder(dir.path(), &["ghost.jpg".to_string()], &settings);

        assert_eq!(summary.total_images, 1);
        assert_eq!(summary.optimized, 0);
    }
}
