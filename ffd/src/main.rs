use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use clap::Parser as ClapParser;
use cutsheet::io::export;
use cutsheet::io::import::Importer;
use cutsheet::io::svg::sheet_to_svg;
use ffd::config::FFDConfig;
use ffd::io::cli::Cli;
use ffd::io::output::FFDOutput;
use ffd::{EPOCH, io};
use log::{info, warn};

fn main() -> Result<()> {
    let args = Cli::parse();
    io::init_logger(args.log_level)?;

    let config = match args.config_file {
        None => {
            warn!("[MAIN] No config file provided, use --config-file to provide a custom config");
            FFDConfig::default()
        }
        Some(config_file) => io::read_config(&config_file)?,
    };

    info!("Successfully parsed FFDConfig: {config:?}");

    let input_file_stem = args
        .input_file
        .file_stem()
        .and_then(|s| s.to_str())
        .context("input file has no valid file name")?;

    if !args.solution_folder.exists() {
        fs::create_dir_all(&args.solution_folder).context(format!(
            "could not create solution folder: {:?}",
            args.solution_folder
        ))?;
    }

    let ext_instance = io::read_instance(args.input_file.as_path())?;
    let importer = Importer::new(config.material_filter.clone());
    let (pieces, catalog) = importer.import_instance(&ext_instance)?;
    info!(
        "[MAIN] instance {:?} contains {} pieces",
        ext_instance.name,
        pieces.len()
    );

    let start = EPOCH.elapsed();
    let result = ffd::pack_with_catalog(&pieces, &catalog);
    let run_time_sec = (EPOCH.elapsed() - start).as_secs_f64();

    for diagnostic in result.diagnostics.iter() {
        warn!("[MAIN] {diagnostic}");
    }

    {
        let output = FFDOutput {
            instance: ext_instance,
            solution: export::export(&result),
            config: config.clone(),
            run_time_sec,
        };

        let solution_path = args.solution_folder.join(format!("sol_{input_file_stem}.json"));

        io::write_json(&output, Path::new(&solution_path))?;
    }

    if config.write_svg {
        for layout in result.layouts.values() {
            for sheet in layout.sheets.iter() {
                let file_stem = export::sheet_file_stem(&layout.material, sheet.index);
                let svg_path = args.solution_folder.join(format!("{file_stem}.svg"));
                let svg = sheet_to_svg(sheet, &layout.material, &layout.stock, config.svg_draw_options);

                io::write_svg(&svg, Path::new(&svg_path))?;
            }
        }
    }

    Ok(())
}
