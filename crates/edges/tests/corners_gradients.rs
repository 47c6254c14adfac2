//! Tests for corner masks, gradient axes and inset builders.

use edges::{
    Corners, EdgesError, GradientAxis, GradientStop, Insets, LayoutDirection, LinearGradient,
    PhysicalCorners, ResolvedBox, UnitPoint,
};

// ============================================================================
// CORNERS
// ============================================================================

#[test]
fn test_grouped_corner_constants() {
    assert_eq!(Corners::TOP, Corners::TOP_LEADING | Corners::TOP_TRAILING);
    assert_eq!(Corners::LEADING, Corners::TOP_LEADING | Corners::BOTTOM_LEADING);
    assert_eq!(Corners::ALL, Corners::all());
}

#[test]
fn test_union_of_masks() {
    let mask = Corners::union_of([Corners::TOP_LEADING, Corners::TRAILING]);
    assert_eq!(
        mask,
        Corners::TOP_LEADING | Corners::TOP_TRAILING | Corners::BOTTOM_TRAILING
    );
    assert_eq!(Corners::union_of([]), Corners::empty());
}

#[test]
fn test_parse_corner_list() {
    assert_eq!(
        Corners::parse("top-leading | bottom").unwrap(),
        Corners::TOP_LEADING | Corners::BOTTOM
    );
    assert_eq!(Corners::parse("ALL").unwrap(), Corners::ALL);
    assert_eq!(Corners::parse("none").unwrap(), Corners::empty());
}

#[test]
fn test_parse_every_single_corner_name() {
    let cases = [
        ("top-leading", Corners::TOP_LEADING),
        ("top-trailing", Corners::TOP_TRAILING),
        ("bottom-leading", Corners::BOTTOM_LEADING),
        ("Bottom-Trailing", Corners::BOTTOM_TRAILING),
    ];
    for (name, expected) in cases {
        assert_eq!(Corners::parse(name).unwrap(), expected, "{}", name);
    }

    let mask = Corners::parse("top-leading|top-trailing|bottom-leading|bottom-trailing").unwrap();
    assert_eq!(mask, Corners::ALL);
}

#[test]
fn test_parse_rejects_flag_constant_names() {
    assert_eq!(
        Corners::parse("TOP_LEADING"),
        Err(EdgesError::UnknownCorner("TOP_LEADING".to_string()))
    );
}

#[test]
fn test_parse_corner_errors() {
    assert_eq!(
        Corners::parse("top | middle"),
        Err(EdgesError::UnknownCorner("middle".to_string()))
    );
    assert!(matches!(
        Corners::parse("top ||"),
        Err(EdgesError::InvalidSyntax(_))
    ));
}

#[test]
fn test_corners_to_physical() {
    let mask = Corners::TOP_LEADING | Corners::BOTTOM_TRAILING;

    assert_eq!(
        mask.to_physical(LayoutDirection::LeftToRight),
        PhysicalCorners::TOP_LEFT | PhysicalCorners::BOTTOM_RIGHT
    );
    assert_eq!(
        mask.to_physical(LayoutDirection::RightToLeft),
        PhysicalCorners::TOP_RIGHT | PhysicalCorners::BOTTOM_LEFT
    );
}

// ============================================================================
// GRADIENTS
// ============================================================================

#[test]
fn test_axis_endpoints() {
    assert_eq!(
        GradientAxis::Vertical.endpoints(),
        (UnitPoint::TOP, UnitPoint::BOTTOM)
    );
    assert_eq!(
        GradientAxis::Horizontal.endpoints(),
        (UnitPoint::LEADING, UnitPoint::TRAILING)
    );
    assert_eq!(
        GradientAxis::Diagonal.endpoints(),
        (UnitPoint::TOP_LEADING, UnitPoint::BOTTOM_TRAILING)
    );
    assert_eq!(
        GradientAxis::AntiDiagonal.endpoints(),
        (UnitPoint::BOTTOM_LEADING, UnitPoint::TOP_TRAILING)
    );
}

#[test]
fn test_evenly_spaced_stops() {
    let gradient = LinearGradient::evenly_spaced(GradientAxis::Horizontal, ["red", "green", "blue"]);

    let locations: Vec<f64> = gradient.stops.iter().map(|s| s.location).collect();
    assert_eq!(locations, vec![0.0, 0.5, 1.0]);
    assert_eq!(gradient.stops[2].color, "blue");
    assert_eq!(gradient.start_point(), UnitPoint::LEADING);
    assert_eq!(gradient.end_point(), UnitPoint::TRAILING);
}

#[test]
fn test_evenly_spaced_edge_cases() {
    let single = LinearGradient::evenly_spaced(GradientAxis::Vertical, [7u32]);
    assert_eq!(
        single.stops,
        vec![GradientStop {
            location: 0.0,
            color: 7
        }]
    );

    let empty = LinearGradient::<u32>::evenly_spaced(GradientAxis::Vertical, []);
    assert!(empty.stops.is_empty());
}

// ============================================================================
// INSETS
// ============================================================================

#[test]
fn test_insets_symmetric() {
    let insets = Insets::symmetric(2.0, 6.0);
    assert_eq!((insets.top, insets.bottom), (2.0, 2.0));
    assert_eq!((insets.leading, insets.trailing), (6.0, 6.0));
}

#[test]
fn test_insets_plain_fold_differs_from_resolution() {
    // Setters apply in call order, so the later vertical write wins.
    let insets = Insets::zero().with_top(5.0).with_vertical(1.0);
    assert_eq!(insets.top, 1.0);

    let resolved: ResolvedBox = insets.into();
    assert_eq!(Insets::from(resolved), insets);
}
