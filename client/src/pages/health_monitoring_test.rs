use super::*;

#[test]
fn trend_glyph_maps_direction() {
    assert_eq!(trend_glyph(Trend::Up), (IconKind::TrendUp, Tone::Positive));
    assert_eq!(trend_glyph(Trend::Down), (IconKind::TrendDown, Tone::Critical));
    assert_eq!(trend_glyph(Trend::Neutral), (IconKind::Activity, Tone::Neutral));
}

#[test]
fn momentum_tone_colours_direction_of_travel() {
    assert_eq!(momentum_tone(Momentum::Improving), Tone::Positive);
    assert_eq!(momentum_tone(Momentum::Stable), Tone::Neutral);
    assert_eq!(momentum_tone(Momentum::Declining), Tone::Critical);
}

#[test]
fn compliance_tracks_render_published_percentages() {
    let rendered: Vec<_> = mock::compliance_tracks()
        .iter()
        .map(|t| {
            let pct = ratio_pct(t.met, t.total);
            (pct, compliance_tone(pct))
        })
        .collect();
    assert_eq!(rendered, [(92, Tone::Positive), (100, Tone::Positive), (75, Tone::Caution)]);
}

#[test]
fn monitored_loans_are_first_four() {
    let names: Vec<_> = mock::loans().iter().take(MONITORED_LOANS).map(|l| l.borrower).collect();
    assert_eq!(names[0], "TechCorp Industries Ltd.");
    assert_eq!(names[3], "Manufacturing Dynamics Corp.");
}

#[test]
fn early_warning_bars_cap_at_full() {
    let fills: Vec<_> = mock::early_warnings()
        .iter()
        .map(|w| threshold_fill_pct(w.current, w.threshold).round())
        .collect();
    assert_eq!(fills, [88.0, 96.0, 100.0, 100.0]);
}
