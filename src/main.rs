use log::{error, info, warn};
use crate::config::Config;
use crate::errors::ParasolError;
use crate::manager_sun::Sun;

mod config;
mod errors;
mod hsa;
mod initialization;
mod layout;
mod manager_sun;
mod models;
mod render;
mod report;
mod sampling;
mod schematic;
mod visibility;

fn main() {
    let config = match initialization::init() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("{}", e);
            return;
        }
    };

    if let Err(e) = run(&config) {
        error!("{}", e);
        eprintln!("{}", e);
    }
}

/// Runs the whole pipeline once, sampling, aggregation, layout and output.
/// Everything is recomputed from the configuration, there is no state
/// carried between runs.
///
/// # Arguments
///
/// * 'config' - the loaded configuration
fn run(config: &Config) -> Result<(), ParasolError> {
    let cutoff = visibility::cutoff_altitude(
        config.obstruction.building_height, config.obstruction.street_width);
    info!("visibility cutoff {:.2} degrees, {:.1} m building across a {:.1} m street",
          cutoff, config.obstruction.building_height, config.obstruction.street_width);

    let sun = Sun::new(config.geo_ref.lat, config.geo_ref.long, config.geo_ref.utc_offset());
    let samples = sampling::collect_samples(&sun, config.facade.orientation, cutoff)?;
    info!("{} solar samples retained", samples.len());

    let design_hsa = hsa::design_hsa(&samples)?;
    let fin_layout = layout::solve(
        design_hsa, config.fin.depth, config.fin.thickness, config.window.width);
    info!("facade {}: design hsa {:.1} degrees, {}",
          config.facade.orientation, design_hsa, fin_layout);

    let schematic = schematic::build(
        config.facade.orientation, config.window.width,
        config.fin.thickness, config.fin.depth, &fin_layout, design_hsa);
    if schematic.fins_drawn < fin_layout.count {
        warn!("{} of {} fins fall outside the drawn window span",
              fin_layout.count - schematic.fins_drawn, fin_layout.count);
    }

    render::save_schematic(&config.files.schematic_file, &schematic)?;
    info!("schematic written to {}", config.files.schematic_file);

    report::save_samples(&config.files.samples_file, &samples, design_hsa, &fin_layout)?;
    info!("sample report written to {}", config.files.samples_file);

    report::print_summary(design_hsa, &fin_layout);
    report::print_sample_table(&samples);

    Ok(())
}

#[cfg(test)]
mod tests {
    use chrono::FixedOffset;
    use crate::config::Orientation;
    use crate::manager_sun::Sun;
    use crate::{hsa, layout, sampling, visibility};

    #[test]
    fn pipeline_is_a_pure_function_of_its_inputs() {
        let run_once = || {
            let cutoff = visibility::cutoff_altitude(6.0, 6.0);
            let sun = Sun::new(19.3809, -99.1931, FixedOffset::east_opt(-6 * 3600).unwrap());
            let samples = sampling::collect_samples(&sun, Orientation::West, cutoff).unwrap();
            let design_hsa = hsa::design_hsa(&samples).unwrap();
            let fin_layout = layout::solve(design_hsa, 0.4, 0.06, 1.5);

            (design_hsa, fin_layout.spacing, fin_layout.count, samples.len())
        };

        assert_eq!(run_once(), run_once());
    }
}
