//! Reine Geometrie-Funktionen für Kabel-Spans.
//!
//! Alle Funktionen arbeiten auf Weltkoordinaten (+Z = oben) und sind frei von
//! App-State. Die Span-Berechnung läuft in drei Schritten:
//! Punkte interpolieren → Durchhang anwenden → Tangenten ableiten.

use glam::{Vec2, Vec3};

/// Interpoliert `segment_count + 1` Punkte linear von `start` nach `end`.
///
/// Die Endpunkte sind immer enthalten, die Abstände sind gleichmäßig.
pub fn span_points(start: Vec3, end: Vec3, segment_count: u32) -> Vec<Vec3> {
    let n = segment_count.max(1);
    (0..=n)
        .map(|i| start + (end - start) * (i as f32 / n as f32))
        .collect()
}

/// Senkt die inneren Punkte eines Spans für den Kabel-Durchhang ab.
///
/// Die Absenkung steigt linear von den Endpunkten zur Mitte: mit
/// `half = n / 2` (Ganzzahldivision) und `step = sag / half` werden Punkt `i`
/// und Punkt `n - 1 - i` um `step * i` abgesenkt. Bei ungerader Punktzahl
/// bekommt der Mittelpunkt den vollen `sag`. Endpunkte bleiben unverändert.
pub fn apply_sag(points: &mut [Vec3], sag: f32) {
    let n = points.len();
    if sag <= 0.0 || n < 3 {
        return;
    }

    let half = n / 2;
    let step = sag / half as f32;

    for i in 1..half {
        let drop = step * i as f32;
        points[i].z -= drop;
        points[n - 1 - i].z -= drop;
    }

    if n % 2 != 0 {
        points[half].z -= sag;
    }
}

/// Berechnet Tangenten per zentraler Differenz (`(p[i+1] - p[i-1]) / 2`).
///
/// An den Enden wird die einseitige Differenz verwendet. Für weniger als
/// zwei Punkte sind die Tangenten Null.
pub fn span_tangents(points: &[Vec3]) -> Vec<Vec3> {
    let n = points.len();
    if n < 2 {
        return vec![Vec3::ZERO; n];
    }

    (0..n)
        .map(|i| {
            if i == 0 {
                points[1] - points[0]
            } else if i == n - 1 {
                points[n - 1] - points[n - 2]
            } else {
                (points[i + 1] - points[i - 1]) * 0.5
            }
        })
        .collect()
}

/// Summiert die Länge des Polygonzugs über alle Punktpaare.
pub fn polyline_length(points: &[Vec3]) -> f32 {
    points
        .windows(2)
        .map(|pair| (pair[1] - pair[0]).length())
        .sum()
}

/// Kürzeste Distanz von `query` zum Polygonzug, projiziert auf die XY-Ebene.
///
/// Wird für das Picken von Kabeln im Top-Down-Viewport verwendet.
pub fn distance_to_polyline_xy(query: Vec2, points: &[Vec3]) -> f32 {
    let mut best = f32::INFINITY;

    for pair in points.windows(2) {
        let a = Vec2::new(pair[0].x, pair[0].y);
        let b = Vec2::new(pair[1].x, pair[1].y);
        let ab = b - a;
        let len_sq = ab.length_squared();

        let closest = if len_sq <= f32::EPSILON {
            a
        } else {
            let t = ((query - a).dot(ab) / len_sq).clamp(0.0, 1.0);
            a + ab * t
        };

        best = best.min((query - closest).length());
    }

    if points.len() == 1 {
        best = (query - Vec2::new(points[0].x, points[0].y)).length();
    }

    best
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn span_points_are_evenly_spaced() {
        let points = span_points(Vec3::ZERO, Vec3::new(40.0, 0.0, 0.0), 4);

        assert_eq!(points.len(), 5);
        for (i, expected_x) in [0.0f32, 10.0, 20.0, 30.0, 40.0].into_iter().enumerate() {
            assert_relative_eq!(points[i].x, expected_x);
            assert_relative_eq!(points[i].y, 0.0);
            assert_relative_eq!(points[i].z, 0.0);
        }
    }

    #[test]
    fn span_points_include_exact_endpoints() {
        let start = Vec3::new(-3.5, 12.0, 7.0);
        let end = Vec3::new(80.0, -4.0, 9.5);
        let points = span_points(start, end, 7);

        assert_eq!(points.len(), 8);
        assert_eq!(points[0], start);
        assert_eq!(points[7], end);
    }

    #[test]
    fn single_segment_has_only_endpoints() {
        let points = span_points(Vec3::ZERO, Vec3::new(10.0, 0.0, 5.0), 1);
        assert_eq!(points.len(), 2);
        assert_eq!(points[0], Vec3::ZERO);
        assert_eq!(points[1], Vec3::new(10.0, 0.0, 5.0));
    }

    #[test]
    fn sag_lowers_center_by_full_amount() {
        let mut points = span_points(Vec3::ZERO, Vec3::new(40.0, 0.0, 0.0), 4);
        apply_sag(&mut points, 8.0);

        // 5 Punkte: Mitte voll abgesenkt, Nachbarn um die halbe Stufe
        assert_relative_eq!(points[0].z, 0.0);
        assert_relative_eq!(points[1].z, -4.0);
        assert_relative_eq!(points[2].z, -8.0);
        assert_relative_eq!(points[3].z, -4.0);
        assert_relative_eq!(points[4].z, 0.0);
    }

    #[test]
    fn sag_never_moves_endpoints() {
        let start = Vec3::new(0.0, 0.0, 18.0);
        let end = Vec3::new(60.0, 10.0, 22.0);
        let mut points = span_points(start, end, 12);
        apply_sag(&mut points, 15.0);

        assert_eq!(points[0], start);
        assert_eq!(points[12], end);
    }

    #[test]
    fn sag_is_symmetric_and_monotonic_towards_center() {
        let mut points = span_points(Vec3::ZERO, Vec3::new(100.0, 0.0, 0.0), 10);
        let original = points.clone();
        apply_sag(&mut points, 6.0);

        let n = points.len();
        for i in 0..n {
            let drop_left = original[i].z - points[i].z;
            let drop_right = original[n - 1 - i].z - points[n - 1 - i].z;
            assert_relative_eq!(drop_left, drop_right);
        }
        for i in 1..n / 2 {
            let prev = original[i - 1].z - points[i - 1].z;
            let cur = original[i].z - points[i].z;
            assert!(cur >= prev);
        }
    }

    #[test]
    fn zero_sag_changes_nothing() {
        let mut points = span_points(Vec3::ZERO, Vec3::new(40.0, 0.0, 0.0), 4);
        let original = points.clone();
        apply_sag(&mut points, 0.0);
        assert_eq!(points, original);

        apply_sag(&mut points, -5.0);
        assert_eq!(points, original);
    }

    #[test]
    fn sag_on_single_segment_is_a_noop() {
        let mut points = span_points(Vec3::ZERO, Vec3::new(10.0, 0.0, 0.0), 1);
        let original = points.clone();
        apply_sag(&mut points, 20.0);
        assert_eq!(points, original);
    }

    #[test]
    fn even_point_count_has_flat_center_pair() {
        // n=4 Punkte (N=3): die beiden Mittelpunkte hängen gleich tief
        let mut points = span_points(Vec3::ZERO, Vec3::new(30.0, 0.0, 0.0), 3);
        apply_sag(&mut points, 6.0);

        assert_relative_eq!(points[1].z, -3.0);
        assert_relative_eq!(points[2].z, -3.0);
    }

    #[test]
    fn tangents_use_central_difference() {
        let points = vec![
            Vec3::new(0.0, 0.0, 0.0),
            Vec3::new(10.0, 0.0, -4.0),
            Vec3::new(20.0, 0.0, 0.0),
        ];
        let tangents = span_tangents(&points);

        assert_eq!(tangents[0], Vec3::new(10.0, 0.0, -4.0));
        assert_eq!(tangents[1], Vec3::new(10.0, 0.0, 0.0));
        assert_eq!(tangents[2], Vec3::new(10.0, 0.0, 4.0));
    }

    #[test]
    fn polyline_length_sums_segments() {
        let points = vec![
            Vec3::ZERO,
            Vec3::new(3.0, 4.0, 0.0),
            Vec3::new(3.0, 4.0, 2.0),
        ];
        assert_relative_eq!(polyline_length(&points), 7.0);
    }

    #[test]
    fn distance_to_polyline_projects_onto_segments() {
        let points = vec![Vec3::ZERO, Vec3::new(10.0, 0.0, -5.0)];

        // Punkt seitlich über der Segmentmitte: Z wird ignoriert
        assert_relative_eq!(
            distance_to_polyline_xy(Vec2::new(5.0, 3.0), &points),
            3.0
        );
        // Punkt hinter dem Endpunkt: Distanz zum Endpunkt selbst
        assert_relative_eq!(
            distance_to_polyline_xy(Vec2::new(14.0, 0.0), &points),
            4.0
        );
    }
}
