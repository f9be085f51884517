use anyhow::Context;
use holiday_grid::utils::logging::{create_main_progress_bar, finish_progress_bar};
use holiday_grid::{PipelineConfig, generate_holidays};
use log::info;

/// Countries processed when none are given on the command line
const DEFAULT_COUNTRIES: [&str; 2] = ["es", "fr"];

fn main() -> anyhow::Result<()> {
    // Setup logging
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let args: Vec<String> = std::env::args().skip(1).collect();
    let countries: Vec<&str> = if args.is_empty() {
        DEFAULT_COUNTRIES.to_vec()
    } else {
        args.iter().map(String::as_str).collect()
    };

    let config = PipelineConfig::default();
    info!("{config}");

    let pb = create_main_progress_bar(countries.len() as u64, Some("Generating holiday tables"));
    for country in countries {
        pb.set_message(format!("Generating {country}"));
        let summary = generate_holidays(country, &config)
            .with_context(|| format!("Failed to generate holidays for {country}"))?;
        info!("{summary}");
        pb.inc(1);
    }
    finish_progress_bar(&pb, Some("Done"));

    Ok(())
}
