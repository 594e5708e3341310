// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Subcommand implementations. Reports go to `out` as JSON.

use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::Serialize;

use hullmass_core::write_obj;
use hullmass_geometry::{distance_between_points, scale_factor, Point3};
use hullmass_processing::{measure_assembly, measure_perimeters_with_tolerance, PartHandle};
use hullmass_topology::{build_adjacency_with_tolerance, BendAngleField};

use crate::cli::{Cli, Commands};
use crate::config::Config;
use crate::error::CliError;
use crate::loader::{load_document, load_overrides, load_parts};

#[derive(Debug, Serialize)]
struct PartBend {
    handle: PartHandle,
    #[serde(flatten)]
    field: BendAngleField,
}

#[derive(Debug, Serialize)]
struct DistanceReport {
    distance: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    target: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    scale_factor: Option<f64>,
}

#[derive(Debug, Serialize)]
struct ScaleReport {
    measured: f64,
    target: f64,
    scale_factor: f64,
    output: PathBuf,
}

fn emit<T: Serialize>(out: &mut dyn Write, value: &T, compact: bool) -> Result<()> {
    if compact {
        serde_json::to_writer(&mut *out, value)?;
    } else {
        serde_json::to_writer_pretty(&mut *out, value)?;
    }
    writeln!(out)?;
    Ok(())
}

/// Runs the parsed command line.
pub fn run(cli: Cli, config: Config, out: &mut dyn Write) -> Result<()> {
    let compact = cli.compact;
    match cli.command {
        Commands::Mass {
            paths,
            density,
            thickness,
            overrides,
        } => {
            let config = config.with_material(density, thickness);
            let overrides = overrides.as_deref().map(load_overrides).transpose()?;
            mass(&paths, &config, overrides.as_ref(), compact, out)
        }
        Commands::Bend { path, part } => bend(&path, part.as_deref(), &config, compact, out),
        Commands::Perimeter { paths } => perimeter(&paths, &config, compact, out),
        Commands::Distance { from, to, target } => distance(&from, &to, target, compact, out),
        Commands::Scale {
            input,
            from,
            to,
            target,
            output,
        } => scale(&input, &from, &to, target, &output, compact, out),
    }
}

fn mass(
    paths: &[PathBuf],
    config: &Config,
    overrides: Option<&hullmass_processing::MaterialOverrides>,
    compact: bool,
    out: &mut dyn Write,
) -> Result<()> {
    let base = config.part_properties().context("invalid material settings")?;
    let parts = load_parts(paths, base, overrides)?;
    tracing::info!(parts = parts.len(), "Measuring assembly");

    let report = measure_assembly(&parts);
    emit(out, &report, compact)?;

    if report.is_degenerate() {
        return Err(CliError::DegenerateAssembly.into());
    }
    Ok(())
}

fn bend(
    path: &Path,
    only: Option<&str>,
    config: &Config,
    compact: bool,
    out: &mut dyn Write,
) -> Result<()> {
    let base = config.part_properties()?;
    let parts = load_parts(&[path.to_path_buf()], base, None)?;

    let selected: Vec<_> = match only {
        Some(name) => {
            let part = parts
                .iter()
                .find(|p| p.handle.as_str() == name)
                .ok_or_else(|| CliError::UnknownPart(name.to_string()))?;
            vec![part]
        }
        None => parts.iter().collect(),
    };

    let mut fields = Vec::with_capacity(selected.len());
    for part in selected {
        let graph = build_adjacency_with_tolerance(&part.mesh, config.weld_tolerance)?;
        let field = BendAngleField::from_adjacency(&graph);
        tracing::info!(
            part = %part.handle,
            faces = field.len(),
            min_angle = field.min_max_angle,
            max_angle = field.max_max_angle,
            "Computed bend field"
        );
        fields.push(PartBend {
            handle: part.handle.clone(),
            field,
        });
    }

    emit(out, &fields, compact)
}

fn perimeter(paths: &[PathBuf], config: &Config, compact: bool, out: &mut dyn Write) -> Result<()> {
    let base = config.part_properties()?;
    let parts = load_parts(paths, base, None)?;

    let report = match measure_perimeters_with_tolerance(&parts, config.weld_tolerance) {
        Ok(report) => report,
        Err(e) if e.is_malformed_boundary() => return Err(CliError::MalformedBoundary(e).into()),
        Err(e) => return Err(e.into()),
    };
    emit(out, &report, compact)
}

fn distance(
    from: &Point3<f64>,
    to: &Point3<f64>,
    target: Option<f64>,
    compact: bool,
    out: &mut dyn Write,
) -> Result<()> {
    let distance = distance_between_points(from, to);
    let factor = target.map(|t| scale_factor(distance, t)).transpose();

    let report = DistanceReport {
        distance,
        target,
        scale_factor: factor.as_ref().ok().copied().flatten(),
    };
    emit(out, &report, compact)?;

    factor.map_err(CliError::InvalidScale)?;
    Ok(())
}

fn scale(
    input: &Path,
    from: &Point3<f64>,
    to: &Point3<f64>,
    target: f64,
    output: &Path,
    compact: bool,
    out: &mut dyn Write,
) -> Result<()> {
    let mut doc = load_document(input)?;
    let measured = distance_between_points(from, to);
    let factor = scale_factor(measured, target).map_err(CliError::InvalidScale)?;

    doc.scale(factor);
    fs::write(output, write_obj(&doc))
        .with_context(|| format!("cannot write {}", output.display()))?;
    tracing::info!(
        input = %input.display(),
        output = %output.display(),
        factor,
        "Rescaled assembly"
    );

    emit(
        out,
        &ScaleReport {
            measured,
            target,
            scale_factor: factor,
            output: output.to_path_buf(),
        },
        compact,
    )
}
