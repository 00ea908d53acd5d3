use trustboard::{
    classify, color_from_score, color_of, score_label, DisplayColor, TrustBadge, TrustTier,
};

#[test]
fn high_band_classifies_green() {
    for s in [70.0, 75.5, 88.0, 100.0, 150.0] {
        assert_eq!(classify(Some(s)), TrustTier::High, "score {s}");
        assert_eq!(color_from_score(Some(s)), DisplayColor::Green);
    }
}

#[test]
fn medium_band_classifies_yellow() {
    for s in [40.0, 41.0, 55.0, 69.999] {
        assert_eq!(classify(Some(s)), TrustTier::Medium, "score {s}");
        assert_eq!(color_from_score(Some(s)), DisplayColor::Yellow);
    }
}

#[test]
fn low_band_classifies_red() {
    for s in [0.0, 0.001, 25.0, 39.999] {
        assert_eq!(classify(Some(s)), TrustTier::Low, "score {s}");
        assert_eq!(color_from_score(Some(s)), DisplayColor::Red);
    }
}

#[test]
fn negative_scores_classify_gray() {
    for s in [-0.001, -5.0, -100.0] {
        assert_eq!(classify(Some(s)), TrustTier::Unknown, "score {s}");
        assert_eq!(color_from_score(Some(s)), DisplayColor::Gray);
    }
}

#[test]
fn absent_score_classifies_gray() {
    assert_eq!(classify(None), TrustTier::Unknown);
    assert_eq!(color_from_score(None), DisplayColor::Gray);
}

#[test]
fn boundaries_are_exact() {
    assert_eq!(classify(Some(70.0)), TrustTier::High);
    assert_eq!(classify(Some(69.999)), TrustTier::Medium);
    assert_eq!(classify(Some(40.0)), TrustTier::Medium);
    assert_eq!(classify(Some(39.999)), TrustTier::Low);
    assert_eq!(classify(Some(0.0)), TrustTier::Low);
}

#[test]
fn convenience_mapping_agrees_with_composition() {
    let samples = [
        None,
        Some(-5.0),
        Some(0.0),
        Some(39.999),
        Some(40.0),
        Some(62.0),
        Some(69.999),
        Some(70.0),
        Some(88.0),
    ];
    for s in samples {
        assert_eq!(color_from_score(s), color_of(classify(s)), "score {s:?}");
    }
}

#[test]
fn scenario_score_88() {
    let badge = TrustBadge::for_score(Some(88.0));
    assert_eq!(badge.tier, TrustTier::High);
    assert_eq!(badge.color, DisplayColor::Green);
    assert_eq!(badge.label, "88%");
}

#[test]
fn scenario_absent_score() {
    let badge = TrustBadge::for_score(None);
    assert_eq!(badge.tier, TrustTier::Unknown);
    assert_eq!(badge.color, DisplayColor::Gray);
    assert_eq!(badge.label, "Unknown");
}

#[test]
fn scenario_negative_score() {
    assert_eq!(classify(Some(-5.0)), TrustTier::Unknown);
    assert_eq!(color_from_score(Some(-5.0)), DisplayColor::Gray);
}

#[test]
fn scenario_lower_bound_of_medium() {
    assert_eq!(classify(Some(40.0)), TrustTier::Medium);
    assert_eq!(color_from_score(Some(40.0)), DisplayColor::Yellow);
    assert_eq!(score_label(Some(40.0)), "40%");
}
