//! Arena Layout CLI
//!
//! Detects the arena boundary from a screenshot, lays out the raid and
//! prints the resulting setup as JSON.
//!
//! ```text
//! arena_layout --image arena.png --roster raid.csv > setup.json
//! arena_layout --setup setup.json --roster bench.txt --default-role ranged
//! ```

use std::path::PathBuf;

use clap::Parser;
use raid_layout_engine::boundary::{BoundaryOrigin, ImageBorderSampler, resolve_boundary};
use raid_layout_engine::layout::{LayoutConfig, Role};
use raid_layout_engine::raid::{ImportFormat, LayoutSession};
use raid_layout_engine::util::init_logger;

#[derive(Parser)]
#[command(name = "arena_layout", version, about = "Lay out raid positions inside an arena")]
struct Cli {
    /// Arena screenshot with a light-colored border (PNG or JPEG)
    #[arg(long)]
    image: Option<PathBuf>,
    /// Layout config JSON; defaults are used when omitted
    #[arg(long)]
    config: Option<PathBuf>,
    /// Saved setup JSON (as printed by this tool) to restore before anything else
    #[arg(long)]
    setup: Option<PathBuf>,
    /// Roster file with one `name, role` per line; raiders are auto-assigned
    #[arg(long)]
    roster: Option<PathBuf>,
    /// Read the roster as bare names, all with this role (tank, healer, melee, ranged)
    #[arg(long, value_name = "ROLE")]
    default_role: Option<Role>,
    /// Log debug details to stderr
    #[arg(long, short)]
    verbose: bool,
}

impl Cli {
    fn import_format(&self) -> ImportFormat {
        match self.default_role {
            Some(role) => ImportFormat::NamesOnly(role),
            None => ImportFormat::Csv,
        }
    }
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    init_logger(if cli.verbose {
        log::LevelFilter::Debug
    } else {
        log::LevelFilter::Info
    });

    let config = match &cli.config {
        Some(path) => LayoutConfig::load(path)?,
        None => LayoutConfig::default(),
    };
    let mut session = match &cli.setup {
        Some(path) => {
            let session = LayoutSession::from_json(config, &std::fs::read_to_string(path)?)?;
            log::info!(
                "restored setup from {}: {} raiders",
                path.display(),
                session.roster().len()
            );
            session
        }
        None => LayoutSession::new(config),
    };

    if let Some(path) = &cli.image {
        let opened = ImageBorderSampler::open(path)
            .map(|sampler| sampler.with_canvas_size(session.config().canvas_size));
        let origin = match opened {
            Ok(sampler) => session.load_image(&sampler),
            Err(e) => {
                let fallback = resolve_boundary(
                    Err(e),
                    BoundaryOrigin::Detected,
                    &session.config().fallback_ellipse,
                );
                let origin = fallback.origin;
                session.set_boundary(fallback);
                origin
            }
        };
        log::info!(
            "boundary from {}: {:?} ({} vertices)",
            path.display(),
            origin,
            session.polygon().map_or(0, |p| p.len())
        );
    }

    if let Some(path) = &cli.roster {
        let text = std::fs::read_to_string(path)?;
        let report = session.import_raiders(&text, cli.import_format());
        let seated = session.auto_assign();
        log::info!(
            "roster: {} imported, {} skipped, {} seated",
            report.imported,
            report.skipped.len(),
            seated
        );
    }

    let layout = session.layout();
    log::info!(
        "{} slots, max radius {:.0} yd, {} fallback placements",
        layout.slots.len(),
        layout.max_radius_yards,
        layout.fallback_count()
    );

    println!("{}", session.export_json()?);
    Ok(())
}
