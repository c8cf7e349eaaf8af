use std::sync::Arc;

use rustair::audio::SilenceGenerator;
use rustair::audio::constants::{VOLUME_MIN, VOLUME_MUTED};
use rustair::common::{VersionInfo, logger};
use rustair::configs::Config;
use tracing::{info, warn};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let (config, load_error) = match Config::load() {
        Ok(config) => (config, None),
        Err(e) => (Config::default(), Some(e)),
    };

    logger::init(&config);
    info!("rustair {}", VersionInfo::default().version_string());
    if let Some(e) = load_error {
        warn!("Falling back to default configuration: {}", e);
    }

    let profile = config.volume.profile;
    let range = config.volume.range()?;
    info!(
        "Volume profile {:?}, device range {} to {} (0.01 dB)",
        profile, range.max_db, range.min_db
    );
    for step in 0..=((-VOLUME_MIN) as i32) {
        let vol = -(step as f64);
        info!("  volume {:>6.1} -> {:>9.2}", vol, profile.attenuation(vol, range));
    }
    info!("  muted        -> {:>9.2}", profile.attenuation(VOLUME_MUTED, range));

    let format = config.output.concrete_format()?;
    let frames = config.output.frames_per_buffer;
    let source = Arc::new(config.dither.build_source());
    let mut silence = SilenceGenerator::new(source, format, config.output.dither);

    let mut buffer = vec![0u8; silence.buffer_len(frames)];
    let written = silence.fill(&mut buffer, frames);
    info!(
        "Generated {} frames of {} silence ({} bytes, dither {}), continuation {:#018x}",
        frames,
        format,
        written,
        if config.output.dither { "on" } else { "off" },
        silence.continuation()
    );

    Ok(())
}
