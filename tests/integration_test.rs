use anyhow::Result;
use rloupe::{
    parse_plain_text, resolve, Document, HostEvent, LayoutHost, Magnifier, MagnifierConfig, MonospaceLayout,
    NodeId, OverlayPhase, PointerTarget, TimerState,
};
use std::time::{Duration, Instant};

fn enter(node: NodeId) -> HostEvent {
    HostEvent::PointerEnter { target: PointerTarget::Node(node) }
}

fn leave_to(node: Option<NodeId>) -> HostEvent {
    HostEvent::PointerLeave { moved_to: node.map(PointerTarget::Node) }
}

fn words_of(doc: &Document, units: &[NodeId]) -> Vec<String> {
    units.iter().map(|&u| doc.text_content(u)).collect()
}

fn page(text: &str) -> Result<(Document, MonospaceLayout)> {
    let doc = parse_plain_text(text)?;
    let layout = MonospaceLayout::new(&doc, 100);
    Ok((doc, layout))
}

#[test]
fn test_fox_scenario() -> Result<()> {
    let (doc, layout) = page("The quick brown fox jumps over")?;
    let words = doc.words();
    assert_eq!(words.len(), 6);

    let (mut magnifier, _) = Magnifier::init(MagnifierConfig::default());
    magnifier.dispatch(&doc, &layout, enter(words[3]), Instant::now());

    let window = resolve(&doc, words[3], 2, 2);
    assert_eq!(words_of(&doc, window.units()), vec!["quick", "brown", "fox", "jumps", "over"]);
    assert_eq!(magnifier.overlay().state().text(), "quick brown fox jumps over");
    assert_eq!(magnifier.overlay().phase(), OverlayPhase::Visible);
    Ok(())
}

#[test]
fn test_first_word_scenario() -> Result<()> {
    let (doc, _) = page("The quick brown fox jumps over")?;
    let words = doc.words();

    let window = resolve(&doc, words[0], 2, 2);
    assert_eq!(words_of(&doc, window.units()), vec!["The", "quick", "brown"]);
    assert_eq!(window.before_count(), 0);
    assert_eq!(window.after_count(), 2);
    Ok(())
}

#[test]
fn test_window_bounds_hold_for_every_word() -> Result<()> {
    let (doc, _) = page("a b c\n\nd *e f* g h\n\ni j k l m n o p")?;
    for (before, after) in [(0, 0), (1, 3), (2, 2), (5, 0)] {
        for unit in doc.words() {
            let window = resolve(&doc, unit, before, after);
            assert!(window.len() >= 1);
            assert!(window.len() <= before + 1 + after);
            assert!(window.contains(unit));
        }
    }
    Ok(())
}

#[test]
fn test_boundary_truncation() -> Result<()> {
    let (doc, _) = page("alpha beta gamma delta")?;
    let words = doc.words();

    let first = resolve(&doc, words[0], 10, 1);
    assert_eq!(first.before_count(), 0);
    let last = resolve(&doc, words[3], 1, 10);
    assert_eq!(last.after_count(), 0);
    Ok(())
}

#[test]
fn test_whitespace_transparency() -> Result<()> {
    let (tight, tight_layout) = page("one two three four five")?;
    let (loose, loose_layout) = page("one   two \t three    four  five")?;

    let tight_window = resolve(&tight, tight.words()[2], 2, 2);
    let loose_window = resolve(&loose, loose.words()[2], 2, 2);
    assert_eq!(words_of(&tight, tight_window.units()), words_of(&loose, loose_window.units()));

    let (mut a, _) = Magnifier::init(MagnifierConfig::default());
    let (mut b, _) = Magnifier::init(MagnifierConfig::default());
    a.dispatch(&tight, &tight_layout, enter(tight.words()[2]), Instant::now());
    b.dispatch(&loose, &loose_layout, enter(loose.words()[2]), Instant::now());
    assert_eq!(a.overlay().state().text(), "one two three four five");
    assert_eq!(b.overlay().state().text(), "one   two \t three    four  five");
    Ok(())
}

#[test]
fn test_repeated_enter_runs_one_cycle() -> Result<()> {
    let (doc, layout) = page("one two three")?;
    let (mut magnifier, _) = Magnifier::init(MagnifierConfig::default());
    let now = Instant::now();

    for _ in 0..5 {
        magnifier.dispatch(&doc, &layout, enter(doc.words()[1]), now);
    }
    assert_eq!(magnifier.resolve_count(), 1);
    assert_eq!(magnifier.overlay().state().revision(), 1);
    Ok(())
}

#[test]
fn test_flicker_suppression() -> Result<()> {
    let (doc, layout) = page("one two three four")?;
    let words = doc.words();
    let (mut magnifier, _) = Magnifier::init(MagnifierConfig::default());
    let start = Instant::now();

    magnifier.dispatch(&doc, &layout, enter(words[0]), start);
    magnifier.dispatch(&doc, &layout, leave_to(Some(words[1])), start + Duration::from_millis(10));
    magnifier.dispatch(&doc, &layout, enter(words[1]), start + Duration::from_millis(10));

    assert_eq!(magnifier.overlay().timer_state(), TimerState::Idle);
    assert!(!magnifier.poll(&doc, start + Duration::from_millis(60)));
    assert_eq!(magnifier.overlay().phase(), OverlayPhase::Visible);
    assert_eq!(magnifier.overlay().state().text(), "one two three four");
    assert_eq!(magnifier.overlay().hide_count(), 0);
    Ok(())
}

#[test]
fn test_hide_on_disengage_exactly_once() -> Result<()> {
    let (doc, layout) = page("one two three")?;
    let words = doc.words();
    let (mut magnifier, _) = Magnifier::init(MagnifierConfig::default());
    let start = Instant::now();

    magnifier.dispatch(&doc, &layout, enter(words[2]), start);
    magnifier.dispatch(&doc, &layout, leave_to(None), start);

    assert!(!magnifier.poll(&doc, start + Duration::from_millis(20)));
    assert!(magnifier.poll(&doc, start + Duration::from_millis(55)));
    assert!(!magnifier.poll(&doc, start + Duration::from_millis(200)));
    assert_eq!(magnifier.overlay().phase(), OverlayPhase::Hidden);
    assert_eq!(magnifier.overlay().hide_count(), 1);
    Ok(())
}

#[test]
fn test_scroll_hides_without_timer() -> Result<()> {
    let (doc, mut layout) = page("one two three")?;
    let words = doc.words();
    let (mut magnifier, _) = Magnifier::init(MagnifierConfig::default());
    let now = Instant::now();

    magnifier.dispatch(&doc, &layout, enter(words[1]), now);
    layout.set_scroll_offset(egui::vec2(0.0, 30.0));
    magnifier.dispatch(&doc, &layout, HostEvent::Scroll, now);

    assert_eq!(magnifier.overlay().phase(), OverlayPhase::Hidden);
    assert_eq!(magnifier.next_deadline(), None);
    assert_eq!(magnifier.overlay().hide_count(), 1);
    Ok(())
}

#[test]
fn test_overlay_placement_is_page_relative() -> Result<()> {
    let (doc, mut layout) = page("one two three four five six seven")?;
    let words = doc.words();
    layout.set_scroll_offset(egui::vec2(0.0, 40.0));
    let (mut magnifier, _) = Magnifier::init(MagnifierConfig::default());

    magnifier.dispatch(&doc, &layout, enter(words[3]), Instant::now());
    let state = magnifier.overlay().state();
    let viewport_rect = layout.range_rect(&doc, words[1], words[5]).expect("measurable phrase");
    assert_eq!(state.position(), viewport_rect.min + egui::vec2(0.0, 40.0));
    assert!(state.awaiting_measure());

    assert!(magnifier.overlay_rendered(egui::vec2(40.0, 16.0)));
    let center = state_center(&magnifier);
    let anchor = magnifier.overlay().state().anchor().center();
    assert_eq!(center, anchor);
    Ok(())
}

fn state_center(magnifier: &Magnifier) -> egui::Pos2 {
    let state = magnifier.overlay().state();
    let size = state.size().unwrap_or_default();
    state.position() + size / 2.0
}

#[test]
fn test_emphasis_breaks_phrase() -> Result<()> {
    let (doc, _) = page("plain words *loud* more words")?;
    let words = doc.words();
    let more = words
        .iter()
        .copied()
        .find(|&w| doc.text_content(w) == "more")
        .expect("word present");

    let window = resolve(&doc, more, 2, 2);
    assert_eq!(words_of(&doc, window.units()), vec!["more", "words"]);
    Ok(())
}

#[test]
fn test_same_word_shows_again_after_hide() -> Result<()> {
    let (doc, layout) = page("one two three")?;
    let words = doc.words();
    let (mut magnifier, _) = Magnifier::init(MagnifierConfig::default());
    let start = Instant::now();

    magnifier.dispatch(&doc, &layout, enter(words[0]), start);
    magnifier.dispatch(&doc, &layout, leave_to(None), start);
    assert!(magnifier.poll(&doc, start + Duration::from_millis(60)));

    magnifier.dispatch(&doc, &layout, enter(words[0]), start + Duration::from_millis(80));
    assert_eq!(magnifier.overlay().phase(), OverlayPhase::Visible);
    assert_eq!(magnifier.overlay().state().text(), "one two three");
    assert_eq!(magnifier.resolve_count(), 2);
    Ok(())
}
