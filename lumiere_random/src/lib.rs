use lumiere::{nalgebra::Unit, Point, Ray, Scene, Segment, Vector};

use core::iter;
pub use rand;

/// A canvas' width and height.
pub type Canvas = Vector<f64>;

pub trait Random: Sized {
    /// Generate a random value fitting in `canvas`, using the provided `rng`
    ///
    /// This method must not fail. If creating a value is faillible, keep trying until success
    fn random(rng: &mut (impl rand::Rng + ?Sized), canvas: &Canvas) -> Self;
}

impl Random for Segment<f64> {
    fn random(rng: &mut (impl rand::Rng + ?Sized), canvas: &Canvas) -> Self {
        loop {
            let (start, end) = (rand_point(rng, canvas), rand_point(rng, canvas));
            if let Ok(segment) = Segment::try_new(start, end) {
                break segment;
            }
        }
    }
}

impl Random for Ray<f64> {
    /// A ray strictly inside `canvas`, going anywhere.
    fn random(rng: &mut (impl rand::Rng + ?Sized), canvas: &Canvas) -> Self {
        let dir = loop {
            if let Some(v) = Unit::try_new(rand_vect(rng, 1.0), f64::EPSILON * 8.0) {
                break v;
            }
        };

        Self::new_unit_dir(rand_point(rng, canvas), dir)
    }
}

/// A point strictly inside `canvas`, barring an unlucky roll of exactly zero.
pub fn rand_point(rng: &mut (impl rand::Rng + ?Sized), canvas: &Canvas) -> Point<f64> {
    Point::from_fn(|i, _| rng.gen::<f64>() * canvas[i])
}

pub fn rand_vect(rng: &mut (impl rand::Rng + ?Sized), max_coord_mag: f64) -> Vector<f64> {
    // the rng generates floats in 0.0..1.0, scale and translate the range accordingly
    Vector::from_fn(|_, _| (rng.gen::<f64>() - 0.5) * (max_coord_mag.abs() * 2.0))
}

/// The walls of `canvas`, with `num_segments` random segments inside.
///
/// # Panics
///
/// if `canvas` has no area
pub fn random_scene(
    rng: &mut (impl rand::Rng + ?Sized),
    canvas: &Canvas,
    num_segments: usize,
) -> Scene<f64> {
    let mut scene = Scene::new(canvas.x, canvas.y).expect("canvas must have an area");

    iter::repeat_with(|| Segment::<f64>::random(rng, canvas))
        .take(num_segments)
        .for_each(|segment| {
            scene.push(segment);
        });

    scene
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use lumiere::{trace_ray, vector, Mirror, TraceState};
    use rand::{rngs::StdRng, SeedableRng};

    fn canvas() -> Canvas {
        Vector::new(800.0, 600.0)
    }

    fn rng() -> StdRng {
        StdRng::seed_from_u64(0x6c75_6d69)
    }

    #[test]
    fn test_unit_vectors() {
        let mut rng = rng();

        for _ in 0..1000 {
            let a = rand_point(&mut rng, &canvas());
            let b = rand_point(&mut rng, &canvas());
            let u = vector::unit(&a, &b).unwrap().into_inner();

            assert_relative_eq!(u.norm(), 1.0, epsilon = 1e-12);
            let d = b - a;
            assert_relative_eq!(d.perp(&u) / d.norm(), 0.0, epsilon = 1e-9);
            assert!(d.dot(&u) > 0.0);
        }
    }

    #[test]
    fn test_reflection_is_an_isometry() {
        let mut rng = rng();

        for _ in 0..1000 {
            let line = Segment::<f64>::random(&mut rng, &canvas());
            let d = rand_vect(&mut rng, 50.0);

            assert_relative_eq!(
                vector::reflect(&d, line.dir()).norm(),
                d.norm(),
                max_relative = 1e-12
            );
        }
    }

    #[test]
    fn test_last_segment_is_never_hit() {
        let mut rng = rng();

        for _ in 0..1000 {
            let segment = Segment::<f64>::random(&mut rng, &canvas());
            let mut ray = Ray::<f64>::random(&mut rng, &canvas());
            ray.last = Some(7);

            assert_eq!(lumiere::intersection(&ray, &segment, 7), None);
        }
    }

    #[test]
    fn test_rays_stay_inside_walls() {
        let mut rng = rng();
        let scene = Scene::new(canvas().x, canvas().y).unwrap();

        for _ in 0..500 {
            let ray = Ray::<f64>::random(&mut rng, &canvas());

            let hit = scene.closest_intersection(&ray).expect("walls always get hit");
            assert!(hit.index < Scene::<f64>::NUM_WALLS);

            let trace = trace_ray(ray, &scene, 8);
            assert_eq!(trace.end, TraceState::Bounded);
            for p in &trace.points {
                assert!((0.0..=800.0).contains(&p.x));
                assert!((0.0..=600.0).contains(&p.y));
            }
        }
    }

    #[test]
    fn test_path_length_bound() {
        let mut rng = rng();

        for max in 0..50 {
            let scene = random_scene(&mut rng, &canvas(), 12);
            let ray = Ray::<f64>::random(&mut rng, &canvas());

            assert!(trace_ray(ray, &scene, max).points.len() <= max + 2);
        }
    }

    #[test]
    fn test_random_scene() {
        let scene = random_scene(&mut rng(), &canvas(), 5);

        assert_eq!(scene.len(), 9);
        assert_eq!(scene.interior().len(), 5);
        for segment in scene.interior() {
            assert!(segment.length() > 0.0);
        }
    }
}
