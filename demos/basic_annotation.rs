//! Basic annotation demo
//!
//! Walks the annotation session through its whole lifecycle on a small
//! sphere surface: bind, paint with circle and freehand brushes, select a
//! table row, deselect.

use surfanno_annotation::{AnnotationSession, SessionState};
use surfanno_core::{uv_sphere, Point3f, Stroke};
use surfanno_measure::{FnKernel, Measurement, Quality, ScalarFieldKernel};

fn demo_kernel() -> impl ScalarFieldKernel {
    // Stand-in for an external geometry library: vertex height as the field.
    FnKernel(|surface: &surfanno_core::Surface, _: &Measurement| {
        Ok(surface.vertices.iter().map(|v| f64::from(v.z)).collect())
    })
}

fn main() -> anyhow::Result<()> {
    env_logger::init();

    let sphere = uv_sphere(8, 16, 10.0);
    log::info!(
        "sphere surface: {} vertices, {} faces",
        sphere.vertex_count(),
        sphere.face_count()
    );

    let mut session = AnnotationSession::new();
    session.bind(&sphere);
    println!("session state after bind: {:?}", session.state());

    // Paint the north-pole cap with label 1.
    let cap = Stroke::circle(Point3f::new(0.0, 0.0, 10.0), 4.0);
    let affected = session.on_paint(&sphere, &cap, 1)?;
    println!("circle brush painted {} vertices with label 1", affected.len());

    // A freehand stroke around the equator with label 2.
    let equator = Stroke::freehand(
        vec![
            Point3f::new(10.0, 0.0, 0.0),
            Point3f::new(0.0, 10.0, 0.0),
            Point3f::new(-10.0, 0.0, 0.0),
        ],
        2.0,
    );
    let affected = session.on_erase(&sphere, &equator)?;
    let affected_paint = session.on_paint(&sphere, &equator, 2)?;
    assert_eq!(affected, affected_paint);
    println!("freehand brush painted {} vertices with label 2", affected_paint.len());

    session.measure(&sphere, &demo_kernel(), &[Measurement::from(Quality::Area)])?;
    assert_eq!(session.state(), SessionState::Measured);

    let vertex = session.on_row_select(0)?;
    println!("row 0 highlights vertex {}", vertex);

    let field = session.label_field().expect("bound session has a field");
    println!(
        "labeled vertices: {} (label 1: {}, label 2: {})",
        field.labeled_vertices().len(),
        field.count_of(1),
        field.count_of(2)
    );

    session.deselect();
    println!("session state after deselect: {:?}", session.state());
    Ok(())
}
