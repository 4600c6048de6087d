//! Generate the static export

use anyhow::Result;
use std::path::Path;

use crate::generator::Generator;
use crate::Site;

/// Generate into the configured public directory
pub fn run(site: &Site) -> Result<()> {
    run_into(site, &site.public_dir)
}

/// Generate into an explicit output directory
pub fn run_into(site: &Site, out: &Path) -> Result<()> {
    let start = std::time::Instant::now();

    tracing::info!("Loading content from {:?}", site.content_dir);
    if !site.content_dir.exists() {
        tracing::warn!(
            "Content directory {:?} does not exist, exporting defaults",
            site.content_dir
        );
    }

    let stats = Generator::new(site).generate_into(out)?;

    let duration = start.elapsed();
    tracing::info!(
        "Exported {} files to {:?} in {:.2}s",
        stats.files,
        out,
        duration.as_secs_f64()
    );

    Ok(())
}
