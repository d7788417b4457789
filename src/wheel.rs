use std::f64::consts::{FRAC_PI_2, TAU};

use crate::names::ellipsize;

// Top of the wheel; slices run from angle 0 clockwise on a y-down screen.
pub const POINTER_ANGLE: f64 = -FRAC_PI_2;

pub const LABEL_RADIUS_RATIO: f64 = 0.62;

pub const LABEL_MAX_CHARS: usize = 16;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Slice {
    pub index: usize,
    pub start: f64,
    pub end: f64,
}

impl Slice {
    pub fn width(&self) -> f64 {
        self.end - self.start
    }

    pub fn mid(&self) -> f64 {
        self.start + self.width() / 2.0
    }
}

pub fn slice_width(count: usize) -> f64 {
    TAU / count.max(1) as f64
}

pub fn slices(count: usize) -> Vec<Slice> {
    let width = slice_width(count);
    (0..count)
        .map(|index| Slice {
            index,
            start: index as f64 * width,
            end: if index + 1 == count {
                TAU
            } else {
                (index + 1) as f64 * width
            },
        })
        .collect()
}

pub fn pointer_angle(rotation: f64) -> f64 {
    let angle = (POINTER_ANGLE - rotation).rem_euclid(TAU);
    // rem_euclid may round up to exactly TAU for tiny negative inputs.
    if angle >= TAU {
        angle - TAU
    } else {
        angle
    }
}

// `wheel_angle` must already lie in [0, 2π). Shared by winner lookup and highlight.
pub fn slice_at(count: usize, wheel_angle: f64) -> Option<usize> {
    if count == 0 {
        return None;
    }
    let raw = (wheel_angle / slice_width(count)).floor();
    let clamped = raw.clamp(0.0, (count - 1) as f64);
    Some(clamped as usize)
}

pub fn winner_index<S: AsRef<str>>(clean_names: &[S], rotation: f64) -> Option<usize> {
    slice_at(clean_names.len(), pointer_angle(rotation))
}

pub fn highlighted_slice(count: usize, rotation: f64) -> Option<usize> {
    slice_at(count, pointer_angle(rotation))
}

pub fn slice_hue(index: usize, count: usize) -> u32 {
    ((index as f64 / count.max(1) as f64) * 360.0).round() as u32
}

pub fn label_font_size(count: usize) -> f64 {
    (44.0 - count as f64 * 1.2).clamp(18.0, 40.0)
}

#[derive(Debug, Clone, PartialEq)]
pub struct SlicePath {
    pub index: usize,
    pub hue: u32,
    pub from: (f64, f64),
    pub to: (f64, f64),
    pub large_arc: bool,
    pub label: String,
    pub label_angle_deg: f64,
    pub label_offset: f64,
}

impl SlicePath {
    pub fn svg_d(&self, radius: f64) -> String {
        format!(
            "M 0 0 L {:.3} {:.3} A {r:.3} {r:.3} 0 {} 1 {:.3} {:.3} Z",
            self.from.0,
            self.from.1,
            u8::from(self.large_arc),
            self.to.0,
            self.to.1,
            r = radius,
        )
    }
}

pub fn slice_paths<S: AsRef<str>>(clean_names: &[S], radius: f64) -> Vec<SlicePath> {
    let count = clean_names.len();
    slices(count)
        .into_iter()
        .zip(clean_names)
        .map(|(slice, name)| SlicePath {
            index: slice.index,
            hue: slice_hue(slice.index, count),
            from: polar(radius, slice.start),
            to: polar(radius, slice.end),
            large_arc: slice.width() > std::f64::consts::PI,
            label: ellipsize(name.as_ref(), LABEL_MAX_CHARS),
            label_angle_deg: slice.mid().to_degrees(),
            label_offset: radius * LABEL_RADIUS_RATIO,
        })
        .collect()
}

fn polar(radius: f64, angle: f64) -> (f64, f64) {
    (radius * angle.cos(), radius * angle.sin())
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use std::f64::consts::PI;

    const EPS: f64 = 1e-9;

    fn names(count: usize) -> Vec<String> {
        (0..count).map(|i| format!("n{i}")).collect()
    }

    // Distance from `angle` to the nearest slice boundary.
    fn boundary_distance(count: usize, angle: f64) -> f64 {
        let width = slice_width(count);
        let offset = angle % width;
        offset.min(width - offset)
    }

    #[test]
    fn four_names_at_rest_pick_the_last() {
        let wheel = ["A", "B", "C", "D"];
        let cut = slices(4);
        assert!((cut[0].start - 0.0).abs() < EPS);
        assert!((cut[0].end - FRAC_PI_2).abs() < EPS);
        assert!((pointer_angle(0.0) - 3.0 * FRAC_PI_2).abs() < EPS);
        let winner = winner_index(&wheel, 0.0).unwrap();
        assert_eq!(winner, 3);
        assert_eq!(wheel[winner], "D");
    }

    #[test]
    fn quarter_turns_walk_backwards_through_slices() {
        let wheel = names(4);
        // A small nudge keeps the pointer off the exact boundary.
        let nudge = 0.1;
        assert_eq!(winner_index(&wheel, nudge), Some(2));
        assert_eq!(winner_index(&wheel, FRAC_PI_2 + nudge), Some(1));
        assert_eq!(winner_index(&wheel, PI + nudge), Some(0));
        assert_eq!(winner_index(&wheel, 3.0 * FRAC_PI_2 + nudge), Some(3));
    }

    #[test]
    fn empty_wheel_has_no_winner() {
        let wheel: Vec<String> = Vec::new();
        assert_eq!(winner_index(&wheel, 1.234), None);
        assert!(slices(0).is_empty());
        assert!(slice_paths(&wheel, 100.0).is_empty());
    }

    #[test]
    fn single_name_always_wins() {
        let wheel = ["solo"];
        for step in 0..50 {
            assert_eq!(winner_index(&wheel, step as f64 * 0.77 - 10.0), Some(0));
        }
        assert!(slice_paths(&wheel, 10.0)[0].large_arc);
    }

    #[test]
    fn pointer_angle_stays_in_range_at_boundaries() {
        for rotation in [-FRAC_PI_2, -FRAC_PI_2 - 1e-17, 3.0 * FRAC_PI_2, 1e6, -1e6] {
            let angle = pointer_angle(rotation);
            assert!((0.0..TAU).contains(&angle), "{rotation} -> {angle}");
        }
    }

    #[test]
    fn slice_palette_and_font_size() {
        assert_eq!(slice_hue(0, 4), 0);
        assert_eq!(slice_hue(1, 4), 90);
        assert_eq!(slice_hue(2, 3), 240);
        assert_eq!(label_font_size(2), 40.0);
        assert_eq!(label_font_size(10), 32.0);
        assert_eq!(label_font_size(40), 18.0);
    }

    #[test]
    fn slice_path_svg_uses_arc_endpoints() {
        let paths = slice_paths(&["A", "B", "C", "D"], 100.0);
        assert_eq!(paths.len(), 4);
        assert_eq!(
            paths[0].svg_d(100.0),
            "M 0 0 L 100.000 0.000 A 100.000 100.000 0 0 1 0.000 100.000 Z"
        );
        assert!((paths[0].label_angle_deg - 45.0).abs() < EPS);
        assert!((paths[0].label_offset - 62.0).abs() < EPS);
    }

    #[test]
    fn long_labels_are_ellipsized() {
        let paths = slice_paths(&["Maximilian Alexander", "Bo"], 50.0);
        assert_eq!(paths[0].label.chars().count(), LABEL_MAX_CHARS);
        assert!(paths[0].label.ends_with('…'));
        assert_eq!(paths[1].label, "Bo");
    }

    #[test]
    fn drawn_slice_under_pointer_is_the_winner() {
        // Rotate every drawn slice into screen space and check that the one
        // covering the pointer is the one reported as the winner.
        for count in 4..=12 {
            let wheel = names(count);
            for step in 0..500 {
                let rotation = step as f64 * 0.137 - 20.0;
                let angle = pointer_angle(rotation);
                if boundary_distance(count, angle) < 1e-6 {
                    continue;
                }
                let under_pointer: Vec<usize> = slices(count)
                    .iter()
                    .filter(|slice| {
                        let into = (POINTER_ANGLE - slice.start - rotation).rem_euclid(TAU);
                        into < slice.width()
                    })
                    .map(|slice| slice.index)
                    .collect();
                assert_eq!(under_pointer.len(), 1, "count {count} rotation {rotation}");
                assert_eq!(winner_index(&wheel, rotation), Some(under_pointer[0]));
                assert_eq!(highlighted_slice(count, rotation), Some(under_pointer[0]));
            }
        }
    }

    proptest! {
        #[test]
        fn winner_is_always_in_range(count in 1usize..64, rotation in -1.0e6f64..1.0e6) {
            let wheel = names(count);
            let winner = winner_index(&wheel, rotation).unwrap();
            prop_assert!(winner < count);
        }

        #[test]
        fn slices_tile_the_circle(count in 1usize..128) {
            let cut = slices(count);
            prop_assert_eq!(cut.len(), count);
            prop_assert!(cut[0].start.abs() < EPS);
            for pair in cut.windows(2) {
                prop_assert!((pair[0].end - pair[1].start).abs() < EPS);
                prop_assert!(pair[0].width() > 0.0);
            }
            let total: f64 = cut.iter().map(Slice::width).sum();
            prop_assert!((total - TAU).abs() < 1e-9);
        }

        #[test]
        fn full_turns_do_not_change_the_winner(
            count in 1usize..40,
            rotation in -1000.0f64..1000.0,
            turns in -50i32..50,
        ) {
            let angle = pointer_angle(rotation);
            prop_assume!(boundary_distance(count, angle) > 1e-6);
            let wheel = names(count);
            let shifted = rotation + TAU * f64::from(turns);
            prop_assert_eq!(winner_index(&wheel, rotation), winner_index(&wheel, shifted));
        }

        #[test]
        fn resolution_is_deterministic(count in 1usize..40, rotation in -1.0e4f64..1.0e4) {
            let wheel = names(count);
            prop_assert_eq!(winner_index(&wheel, rotation), winner_index(&wheel, rotation));
        }
    }
}
