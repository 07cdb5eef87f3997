//! Direction-marching ray tracer for enclosed mirror scenes.
//!
//! Used where the light's entry direction is known rather than its
//! destination (the tube lesson). The ray advances to the nearest mirror
//! ahead, turns by the reflection law, and otherwise runs on to the wall.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::bounds::Bounds;
use crate::mirror::Segment;
use crate::trace::{RayPath, MAX_REFLECTIONS};

/// Hits closer than this to the current origin are ignored.
const MIN_TRAVEL: f32 = 1e-3;

/// Why a marched ray stopped.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Termination {
    /// The ray left through the wall rectangle.
    Wall,
    /// The ray reached a mirror after its last allowed bounce.
    ReflectionLimit,
    /// The ray had no direction to travel in.
    Stalled,
}

/// A ray traced through a set of mirrors.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MarchedRay {
    /// Vertices from the start point to where the ray stopped.
    pub path: RayPath,
    /// Indices into the mirror slice, in the order they were struck.
    pub mirrors_hit: Vec<usize>,
    /// Why tracing stopped.
    pub termination: Termination,
}

impl MarchedRay {
    /// Number of reflections.
    pub fn reflection_count(&self) -> usize {
        self.mirrors_hit.len()
    }

    /// Images of `object` after each reflection, mirrored across the struck
    /// mirrors' lines in order.
    pub fn images(&self, object: Vec2, mirrors: &[Segment]) -> Vec<Vec2> {
        self.mirrors_hit
            .iter()
            .scan(object, |image, &i| {
                *image = mirrors[i].reflect_point(*image);
                Some(*image)
            })
            .collect()
    }

    /// Direction of the final leg.
    pub fn exit_direction(&self) -> Option<Vec2> {
        let points = self.path.points();
        let n = points.len();
        (n >= 2).then(|| (points[n - 1] - points[n - 2]).normalize_or_zero())
    }
}

/// Marches a ray from `start` along `direction` through `mirrors`.
///
/// Each step finds the nearest mirror in front of the ray, skipping the one
/// just reflected from. With no mirror ahead the ray continues to the edge of
/// `walls`. A ray makes at most one reflection per mirror present, and never
/// more than [`MAX_REFLECTIONS`], so its path has at most one segment more
/// than there are mirrors.
pub fn march(start: Vec2, direction: Vec2, mirrors: &[Segment], walls: &Bounds) -> MarchedRay {
    let limit = mirrors.len().min(MAX_REFLECTIONS);
    let mut path = RayPath::new(start);
    let mut mirrors_hit = Vec::new();
    let mut origin = start;
    let mut dir = direction.normalize_or_zero();
    let mut last: Option<usize> = None;

    loop {
        let Some(reach) = walls.exit_distance(origin, dir) else {
            return MarchedRay {
                path,
                mirrors_hit,
                termination: Termination::Stalled,
            };
        };
        let far = origin + dir * reach;

        let nearest = mirrors
            .iter()
            .enumerate()
            .filter(|(i, _)| Some(*i) != last)
            .filter_map(|(i, m)| m.intersect(origin, far).map(|p| (i, p)))
            .filter(|(_, p)| p.distance(origin) > MIN_TRAVEL)
            .min_by(|(_, a), (_, b)| a.distance(origin).total_cmp(&b.distance(origin)));

        match nearest {
            Some((i, hit)) if mirrors_hit.len() < limit => {
                path.push(hit);
                mirrors_hit.push(i);
                dir = mirrors[i].reflect_direction(dir).normalize_or_zero();
                origin = hit;
                last = Some(i);
            }
            Some((_, hit)) => {
                path.push(hit);
                log::debug!("ray stopped at reflection limit after {} bounces", mirrors_hit.len());
                return MarchedRay {
                    path,
                    mirrors_hit,
                    termination: Termination::ReflectionLimit,
                };
            }
            None => {
                path.push(far);
                return MarchedRay {
                    path,
                    mirrors_hit,
                    termination: Termination::Wall,
                };
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn close(a: Vec2, b: Vec2) -> bool {
        (a - b).length() < 1e-2
    }

    fn walls() -> Bounds {
        Bounds::from_ranges((70.0, 260.0), (20.0, 280.0))
    }

    #[test]
    fn test_no_mirrors_runs_to_wall() {
        let ray = march(Vec2::new(70.0, 40.0), Vec2::X, &[], &walls());
        assert_eq!(ray.termination, Termination::Wall);
        assert_eq!(ray.path.segment_count(), 1);
        assert!(close(ray.path.end().unwrap(), Vec2::new(260.0, 40.0)));
    }

    #[test]
    fn test_parallel_mirror_is_missed() {
        let flat = Segment::new(Vec2::new(180.0, 30.0), Vec2::new(250.0, 30.0));
        let ray = march(Vec2::new(70.0, 40.0), Vec2::X, &[flat], &walls());
        assert_eq!(ray.reflection_count(), 0);
        assert!(close(ray.path.end().unwrap(), Vec2::new(260.0, 40.0)));
    }

    #[test]
    fn test_vertical_mirror_sends_light_back() {
        let wall_mirror = Segment::new(Vec2::new(250.0, 30.0), Vec2::new(250.0, 90.0));
        let ray = march(Vec2::new(70.0, 40.0), Vec2::X, &[wall_mirror], &walls());
        assert_eq!(ray.reflection_count(), 1);
        assert!(close(ray.path.points()[1], Vec2::new(250.0, 40.0)));
        assert!(close(ray.path.end().unwrap(), Vec2::new(70.0, 40.0)));
    }

    #[test]
    fn test_periscope() {
        let top = Segment::new(Vec2::new(190.0, 30.0), Vec2::new(250.0, 90.0));
        let bottom = Segment::new(Vec2::new(190.0, 270.0), Vec2::new(250.0, 210.0));
        let ray = march(Vec2::new(70.0, 40.0), Vec2::X, &[top, bottom], &walls());
        assert_eq!(ray.mirrors_hit, vec![0, 1]);
        assert_eq!(ray.path.segment_count(), 3);
        assert!(close(ray.path.points()[1], Vec2::new(200.0, 40.0)));
        assert!(close(ray.path.points()[2], Vec2::new(200.0, 260.0)));
        assert!(close(ray.path.end().unwrap(), Vec2::new(70.0, 260.0)));
        assert!(close(ray.exit_direction().unwrap(), Vec2::NEG_X));
    }

    #[test]
    fn test_two_mirrors_give_at_most_three_segments() {
        // Down off the diagonal, up off the floor mirror, stopped back at the diagonal.
        let top = Segment::new(Vec2::new(190.0, 30.0), Vec2::new(250.0, 90.0));
        let floor = Segment::new(Vec2::new(180.0, 270.0), Vec2::new(250.0, 270.0));
        let ray = march(Vec2::new(70.0, 40.0), Vec2::X, &[top, floor], &walls());
        assert_eq!(ray.mirrors_hit, vec![0, 1]);
        assert_eq!(ray.termination, Termination::ReflectionLimit);
        assert_eq!(ray.path.segment_count(), 3);
        assert!(close(ray.path.points()[2], Vec2::new(200.0, 270.0)));
        assert!(close(ray.path.end().unwrap(), Vec2::new(200.0, 40.0)));
    }

    #[test]
    fn test_reflections_never_exceed_cap() {
        let mirrors = [
            Segment::new(Vec2::new(250.0, 30.0), Vec2::new(250.0, 90.0)),
            Segment::new(Vec2::new(80.0, 30.0), Vec2::new(80.0, 90.0)),
            Segment::new(Vec2::new(240.0, 30.0), Vec2::new(240.0, 90.0)),
            Segment::new(Vec2::new(90.0, 30.0), Vec2::new(90.0, 90.0)),
        ];
        let ray = march(Vec2::new(150.0, 40.0), Vec2::X, &mirrors, &walls());
        assert_eq!(ray.reflection_count(), MAX_REFLECTIONS);
        assert_eq!(ray.termination, Termination::ReflectionLimit);
        assert_eq!(ray.path.segment_count(), MAX_REFLECTIONS + 1);
    }

    #[test]
    fn test_images_follow_struck_mirrors() {
        let top = Segment::new(Vec2::new(190.0, 30.0), Vec2::new(250.0, 90.0));
        let bottom = Segment::new(Vec2::new(190.0, 270.0), Vec2::new(250.0, 210.0));
        let mirrors = [top, bottom];
        let ray = march(Vec2::new(70.0, 40.0), Vec2::X, &mirrors, &walls());
        let images = ray.images(Vec2::new(70.0, 40.0), &mirrors);
        assert_eq!(images.len(), 2);
        assert!(close(images[0], Vec2::new(200.0, -90.0)));
        assert!(close(images[1], Vec2::new(550.0, 260.0)));
    }

    #[test]
    fn test_zero_direction_stalls() {
        let ray = march(Vec2::new(100.0, 100.0), Vec2::ZERO, &[], &walls());
        assert_eq!(ray.termination, Termination::Stalled);
        assert_eq!(ray.path.segment_count(), 0);
    }
}
