use std::{env, error::Error, fmt::Write, fs};

use log::info;
use lumiere::{trace_ray, Point, Trace, TraceState};
use lumiere_random::{
    rand::{rngs::StdRng, SeedableRng},
    random_scene, Canvas, Random,
};
use lumiere_setup::{Config, Editor, Response};

mod script;

const USAGE: &str = "\
usage:
    lumiere_cli run <script> [max_reflections]
    lumiere_cli random [num_segments] [num_rays] [seed]";

/// `<color>: (x, y) -> (x, y) -> ... [state]`
fn format_trace(label: &str, trace: &Trace<f64>) -> String {
    let mut line = format!("{label}:");

    for (i, p) in trace.points.iter().enumerate() {
        let sep = if i == 0 { " " } else { " -> " };
        let _ = write!(line, "{sep}{}", format_point(p));
    }

    let state = match trace.end {
        TraceState::Terminated => "terminated",
        TraceState::Bounded => "bounded",
        TraceState::Advancing => "advancing",
    };
    let _ = write!(line, " [{state}]");

    line
}

fn format_point(p: &Point<f64>) -> String {
    format!("({:.2}, {:.2})", p.x, p.y)
}

fn run_script(path: &str, max_reflections: Option<usize>) -> Result<(), Box<dyn Error>> {
    let inputs = script::parse(&fs::read_to_string(path)?)?;

    let mut config = Config::<f64>::default();
    if let Some(max) = max_reflections {
        config = config.with_max_reflections(max);
    }

    let mut editor = Editor::new(config)?;

    for input in inputs {
        match editor.handle(input) {
            Response::Traced(traces) => {
                for (color, trace) in &traces {
                    println!("{}", format_trace(color.name, trace));
                }
            }
            Response::Finished => break,
            response => info!("{response:?}"),
        }
    }

    if !editor.is_finished() {
        info!("script ended before tracing");
    }

    Ok(())
}

fn run_random(
    num_segments: usize,
    num_rays: usize,
    seed: Option<u64>,
) -> Result<(), Box<dyn Error>> {
    let mut rng = match seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };

    let config = Config::<f64>::default();
    let canvas: Canvas = [config.width, config.height].into();

    let scene = random_scene(&mut rng, &canvas, num_segments);
    info!("generated {} segments", scene.interior().len());

    for i in 0..num_rays {
        let ray = lumiere::Ray::<f64>::random(&mut rng, &canvas);
        let trace = trace_ray(ray, &scene, config.max_reflections);
        println!("{}", format_trace(&format!("ray {i}"), &trace));
    }

    Ok(())
}

fn main() -> Result<(), Box<dyn Error>> {
    env_logger::init();

    let mut args = env::args().skip(1);

    match args.next().as_deref() {
        Some("run") => {
            let path = args.next().ok_or(USAGE)?;
            let max_reflections = args
                .next()
                .map(|arg| arg.parse())
                .transpose()
                .map_err(|_| "max_reflections must be a positive integer")?;

            run_script(&path, max_reflections)
        }
        Some("random") => {
            let num_segments = args.next().and_then(|arg| arg.parse().ok()).unwrap_or(12);
            let num_rays = args.next().and_then(|arg| arg.parse().ok()).unwrap_or(3);
            let seed = args.next().and_then(|arg| arg.parse().ok());

            run_random(num_segments, num_rays, seed)
        }
        _ => Err(USAGE.into()),
    }
}
