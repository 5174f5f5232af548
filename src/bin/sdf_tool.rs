use sdf_field::config::{load_config, SdfToolConfig};
use sdf_field::image::io::{load_grayscale_image, save_distance_field, write_json_file};
use sdf_field::image::{ImageF32, ImageU8};
use sdf_field::transform::{compute_distance_field, EngineKind};
use serde::Serialize;
use std::env;
use std::path::Path;
use std::time::Instant;

fn main() {
    if let Err(err) = run() {
        eprintln!("Error: {err}");
        std::process::exit(1);
    }
}

fn run() -> Result<(), String> {
    let config_path = env::args().nth(1).ok_or_else(usage)?;
    let config: SdfToolConfig = load_config(Path::new(&config_path))?;

    let gray = load_grayscale_image(&config.input)?;
    let width = gray.width();
    let height = gray.height();

    // Threshold to a binary mask before the core runs.
    let threshold = config.mask.threshold;
    let mask_data: Vec<u8> = gray
        .data()
        .iter()
        .map(|&v| if v > threshold { 255 } else { 0 })
        .collect();
    let mask = ImageU8 {
        w: width,
        h: height,
        stride: width,
        data: &mask_data,
    };

    let mut field = ImageF32::new(width, height);
    let t0 = Instant::now();
    compute_distance_field(mask, &mut field, config.transform.engine);
    let elapsed_ms = t0.elapsed().as_secs_f64() * 1e3;

    save_distance_field(&field, &config.output.distance_image, config.transform.spread)?;

    let summary = FieldSummary::new(&field, config.transform.engine, threshold, elapsed_ms);
    if let Some(path) = &config.output.summary_json {
        write_json_file(path, &summary)?;
    }

    println!(
        "Saved {}x{} distance field to {} ({} in {:.3} ms)",
        width,
        height,
        config.output.distance_image.display(),
        config.transform.engine,
        elapsed_ms
    );

    Ok(())
}

fn usage() -> String {
    "Usage: sdf_tool <config.json>".to_string()
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct FieldSummary {
    width: usize,
    height: usize,
    engine: EngineKind,
    mask_threshold: u8,
    min_distance: Option<f32>,
    max_distance: Option<f32>,
    infinite_pixels: usize,
    elapsed_ms: f64,
}

impl FieldSummary {
    fn new(field: &ImageF32, engine: EngineKind, mask_threshold: u8, elapsed_ms: f64) -> Self {
        let mut min_distance = None;
        let mut max_distance = None;
        let mut infinite_pixels = 0usize;
        for &v in &field.data {
            if v.is_infinite() {
                infinite_pixels += 1;
                continue;
            }
            min_distance = Some(min_distance.map_or(v, |m: f32| m.min(v)));
            max_distance = Some(max_distance.map_or(v, |m: f32| m.max(v)));
        }
        Self {
            width: field.w,
            height: field.h,
            engine,
            mask_threshold,
            min_distance,
            max_distance,
            infinite_pixels,
            elapsed_ms,
        }
    }
}
