//! Tests for per-category line group construction

#[cfg(test)]
mod tests {
    use linegrain::GenerationError;
    use linegrain::algorithm::builder::{LineCategory, LineGroup, LineSetBuilder};
    use linegrain::algorithm::parameters::{GenerationParameters, LayoutMode};
    use linegrain::math::random::{SequenceSource, StdRandomSource};
    use linegrain::spatial::segment::{LineSegment, Orientation};
    use std::collections::HashSet;

    fn static_params() -> GenerationParameters {
        GenerationParameters {
            animate: false,
            line_colors: vec!["#ce8e3b".to_string()],
            ..GenerationParameters::default()
        }
    }

    fn build_seeded(params: &GenerationParameters, seed: u64) -> Vec<LineGroup> {
        let mut rng = StdRandomSource::seeded(seed);
        LineSetBuilder::new(params, &mut rng)
            .build_all()
            .unwrap_or_default()
    }

    // Tests a full horizontal group against hand-computed draws
    #[test]
    fn test_full_horizontal_group_from_fixed_draws() {
        let params = static_params();
        let mut rng = SequenceSource::new(vec![0.5]);
        let group = LineSetBuilder::new(&params, &mut rng).build_group(LineCategory::FullHorizontal);

        let Ok(group) = group else {
            unreachable!("palette is not empty");
        };
        // opacity = 0.05 + sqrt(0.5 * 0.9 * 0.6), so one segment
        assert!((group.opacity - (0.05 + 0.27_f64.sqrt())).abs() < 1e-12);
        assert_eq!(group.segments, vec![LineSegment::horizontal(200, 200, 201)]);
        assert_eq!(group.color, "#ce8e3b");
        assert!(group.animation.is_none());
        // 1 - sqrt(-2 ln 0.5) * sqrt(0.5)
        let expected_stroke = 1.0 - (-2.0 * 0.5_f64.ln()).sqrt() * 0.5_f64.sqrt();
        assert!((group.stroke_width - expected_stroke).abs() < 1e-12);
    }

    // Tests vertical edge segments hug the top and bottom borders
    #[test]
    fn test_vertical_edge_group_from_fixed_draws() {
        let params = static_params();
        let mut rng = SequenceSource::new(vec![0.5]);
        let group = LineSetBuilder::new(&params, &mut rng).build_group(LineCategory::VerticalEdge);

        let Ok(group) = group else {
            unreachable!("palette is not empty");
        };
        assert_eq!(
            group.segments,
            vec![
                LineSegment::vertical(0, 50, 201),
                LineSegment::vertical(350, 400, 201),
            ]
        );
    }

    // Tests horizontal edge segments hug the left and right borders and share a row
    #[test]
    fn test_horizontal_edge_group_shape() {
        let params = static_params();
        let mut rng = StdRandomSource::seeded(8);
        let mut builder = LineSetBuilder::new(&params, &mut rng);
        let groups = builder
            .build_category(LineCategory::HorizontalEdge, 20)
            .unwrap_or_default();

        assert_eq!(groups.len(), 20);
        for group in &groups {
            for pair in group.segments.chunks(2) {
                let [left, right] = pair else {
                    unreachable!("edge segments come in pairs");
                };
                match (*left, *right) {
                    (
                        LineSegment::Horizontal {
                            x_start: 0,
                            x_end: left_end,
                            y: left_y,
                        },
                        LineSegment::Horizontal {
                            x_start: right_start,
                            x_end: 400,
                            y: right_y,
                        },
                    ) => {
                        assert!(left_end <= 100);
                        assert!(right_start >= 300);
                        assert_eq!(left_y, right_y);
                    }
                    other => unreachable!("unexpected edge pair {other:?}"),
                }
            }
        }
    }

    // Tests faint groups carry more overlapping segments than opaque ones
    #[test]
    fn test_segment_count_tracks_opacity() {
        let faint = GenerationParameters {
            avg_opacity: 0.05,
            ..static_params()
        };
        let mut zeros = SequenceSource::new(vec![0.0]);
        let faint_group = LineSetBuilder::new(&faint, &mut zeros)
            .build_group(LineCategory::FullVertical)
            .map(|group| group.segments.len());
        assert!(faint_group.is_ok_and(|count| count >= 19));

        let opaque = GenerationParameters {
            avg_opacity: 0.95,
            ..static_params()
        };
        let mut high = SequenceSource::new(vec![0.99]);
        let opaque_group = LineSetBuilder::new(&opaque, &mut high)
            .build_group(LineCategory::FullVertical)
            .map(|group| group.segments.len());
        assert!(opaque_group.is_ok_and(|count| count == 1));
    }

    // Tests containment, stroke floor, opacity bounds and color sourcing over many seeds
    #[test]
    fn test_group_invariants() {
        let params = GenerationParameters {
            width: 320,
            height: 180,
            avg_stroke_width: 0.05,
            layout: LayoutMode::Split,
            ..GenerationParameters::default()
        };

        for seed in 0..20 {
            let groups = build_seeded(&params, seed);
            assert_eq!(groups.len(), 30);

            for group in &groups {
                assert!(!group.segments.is_empty());
                assert!(group.stroke_width >= 0.1);
                assert!((0.05..=0.95).contains(&group.opacity));
                assert!(params.line_colors.contains(&group.color));
                for segment in &group.segments {
                    assert!(segment.fits_canvas(320, 180), "{segment:?} escapes canvas");
                    assert_eq!(segment.orientation(), group.orientation());
                }
            }
        }
    }

    // Tests groups come out in paint order by category
    #[test]
    fn test_paint_order() {
        let params = GenerationParameters {
            layout: LayoutMode::Split,
            ..static_params()
        };
        let categories: Vec<LineCategory> = build_seeded(&params, 1)
            .iter()
            .map(|group| group.category)
            .collect();

        let mut expected = vec![LineCategory::FullHorizontal; 9];
        expected.extend([LineCategory::HorizontalEdge; 3]);
        expected.extend([LineCategory::VerticalEdge; 6]);
        expected.extend([LineCategory::FullVertical; 12]);
        assert_eq!(categories, expected);
    }

    // Tests animation classes are unique per orientation and timings are in range
    #[test]
    fn test_animation_classes_and_timing() {
        let groups = build_seeded(&GenerationParameters::default(), 4);
        let mut classes = HashSet::new();

        for group in &groups {
            let Some(animation) = &group.animation else {
                unreachable!("default parameters are animated");
            };
            let prefix = match group.orientation() {
                Orientation::Horizontal => "horizontal_line_",
                Orientation::Vertical => "vertical_line_",
            };
            assert!(animation.class_name.starts_with(prefix));
            assert!(classes.insert(animation.class_name.clone()));
            assert!((3.0..=6.0).contains(&animation.duration_seconds));
            assert!((0.0..=0.8).contains(&animation.delay_seconds));
        }

        assert!(classes.contains("horizontal_line_11"));
        assert!(classes.contains("vertical_line_17"));
        assert!(!classes.contains("vertical_line_18"));
    }

    // Tests an empty palette fails instead of panicking
    #[test]
    fn test_empty_palette_is_rejected() {
        let params = GenerationParameters {
            line_colors: Vec::new(),
            ..static_params()
        };
        let mut rng = StdRandomSource::seeded(0);
        let result = LineSetBuilder::new(&params, &mut rng).build_group(LineCategory::FullHorizontal);
        assert!(matches!(
            result,
            Err(GenerationError::InvalidParameters {
                parameter: "line_colors",
                ..
            })
        ));
    }

    // Tests category metadata
    #[test]
    fn test_category_properties() {
        assert_eq!(
            LineCategory::HorizontalEdge.orientation(),
            Orientation::Horizontal
        );
        assert_eq!(LineCategory::VerticalEdge.orientation(), Orientation::Vertical);
        assert!((LineCategory::FullHorizontal.stroke_scale() - 1.0).abs() < f64::EPSILON);
        assert!((LineCategory::FullVertical.stroke_scale() - 0.63).abs() < f64::EPSILON);
    }
}
