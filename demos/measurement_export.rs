//! Measurement table export demo
//!
//! Builds a measurement table for the unit square through the command
//! registry and prints the CSV handoff a host viewer would export, then
//! resumes a fresh session from that table.

use surfanno_annotation::{AnnotationSession, CommandArgs, CommandRegistry};
use surfanno_core::{unit_square, Point3f, Stroke};
use surfanno_measure::{Curvature, FnKernel, Measurement, Quality, ScalarFieldKernel};

fn demo_kernel() -> impl ScalarFieldKernel {
    FnKernel(|surface: &surfanno_core::Surface, measurement: &Measurement| {
        // Stand-in scalar fields, one recognizable constant per algorithm.
        let value = measurement.algorithm_name().len() as f64;
        Ok(vec![value; surface.vertex_count()])
    })
}

fn main() -> anyhow::Result<()> {
    env_logger::init();

    let surface = unit_square();
    let kernel = demo_kernel();
    let registry = CommandRegistry::with_default_commands();

    println!("registered menu entries:");
    for entry in registry.entries() {
        println!("  [{}] {}", entry.id, entry.menu);
    }

    let mut session = AnnotationSession::new();
    session.bind(&surface);

    registry.invoke(
        "paint",
        &mut session,
        &surface,
        &kernel,
        CommandArgs::Paint {
            stroke: Stroke::circle(Point3f::new(0.0, 0.0, 0.0), 0.5),
            label: 5,
        },
    )?;

    registry.invoke(
        "measure",
        &mut session,
        &surface,
        &kernel,
        CommandArgs::Measure {
            measurements: vec![
                Quality::MinAngle.into(),
                Quality::MaxAngle.into(),
                Quality::Area.into(),
                Curvature::Gauss.into(),
            ],
        },
    )?;

    let table = session.table().expect("measure created a table");
    log::info!("table has {} columns", table.len());
    println!("\nCSV handoff:\n{}", table.to_csv_string());

    // Round-trip: a new session picks the labels back up from the table.
    let mut resumed = AnnotationSession::new();
    resumed.bind(&surface);
    resumed.resume_from_table(table.clone())?;
    println!(
        "resumed labels: {:?}",
        resumed.label_field().expect("bound").get()
    );
    Ok(())
}
