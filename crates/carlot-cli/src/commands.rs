use anyhow::{Context, Result};
use comfy_table::{Attribute, Cell, Color, ContentArrangement, Table};
use comfy_table::modifiers::UTF8_ROUND_CORNERS;
use comfy_table::presets::UTF8_FULL_CONDENSED;

use carlot_model::{CitySource, PredictionRequest, SourceConfig};
use carlot_predict::{PriceModel, predict_price};

use crate::cli::{BuildArgs, PredictArgs};
use carlot_cli::pipeline::{BuildOptions, run_build as run_pipeline};
use carlot_cli::types::BuildOutcome;

pub fn run_build(args: &BuildArgs) -> Result<BuildOutcome> {
    let mut config = SourceConfig::with_default_cities(&args.data_dir);
    if let Some(path) = &args.cities_file {
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("read cities file {}", path.display()))?;
        let cities: Vec<CitySource> = serde_json::from_str(&text)
            .with_context(|| format!("parse cities file {}", path.display()))?;
        config.cities = cities;
    }
    let options = BuildOptions {
        output_dir: args.output_dir.clone().unwrap_or_else(|| args.data_dir.clone()),
        encode: args.encode,
    };
    run_pipeline(&config, &options)
}

pub fn run_predict(args: &PredictArgs) -> Result<()> {
    let model = PriceModel::load(&args.model)?;
    let request = PredictionRequest {
        km_driven: args.km_driven,
        manufacturing_year: args.manufacturing_year,
        seats: args.seats,
        fuel_type: args.fuel_type.clone(),
        body_type: args.body_type.clone(),
        owner: args.owner.clone(),
        transmission: args.transmission.clone(),
        city: args.city.clone(),
    };
    let response = predict_price(&model, &request)?;
    for unknown in &response.unknown_categories {
        eprintln!(
            "warning: {} {:?} is outside the model vocabulary; its flags are all zero",
            unknown.field, unknown.value
        );
    }
    println!("Estimated price: ₹{:.2}", response.price);
    Ok(())
}

pub fn run_cities() -> Result<()> {
    let config = SourceConfig::with_default_cities(".");
    let mut table = Table::new();
    table.set_header(vec![
        Cell::new("City").fg(Color::Cyan).add_attribute(Attribute::Bold),
        Cell::new("Expected file")
            .fg(Color::Cyan)
            .add_attribute(Attribute::Bold),
    ]);
    table
        .load_preset(UTF8_FULL_CONDENSED)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic);
    for city in &config.cities {
        table.add_row(vec![city.label.clone(), city.filename.clone()]);
    }
    println!("{table}");
    Ok(())
}
