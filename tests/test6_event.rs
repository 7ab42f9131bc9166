mod common;

use common::assert_close;
use rusty_golf_wagers::model::{
    CourseCatalog, CourseLookup, EventSnapshot, GolferId, Profile, WagerConfig,
};
use rusty_golf_wagers::{RoundContext, WagerError, settle_event};

fn load() -> Result<(EventSnapshot, Vec<Profile>, CourseCatalog), Box<dyn std::error::Error>> {
    let event = EventSnapshot::from_json(include_str!("test6_event.json"))?;
    let profiles: Vec<Profile> = serde_json::from_str(include_str!("test6_profiles.json"))?;
    let courses = CourseCatalog::from_json(include_str!("test6_courses.json"))?;
    Ok((event, profiles, courses))
}

#[test]
fn fixtures_parse() -> Result<(), Box<dyn std::error::Error>> {
    let (event, _, courses) = load()?;
    assert_eq!(event.golfers.len(), 4);
    assert_eq!(event.wagers.len(), 4);
    assert!(matches!(event.wagers[0], WagerConfig::Nassau(_)));
    assert_eq!(event.golfer_ids()[3], GolferId::guest("Dan"));

    let blue = courses.tee("palmer-hills", Some("blue")).ok_or("blue tee")?;
    assert_close(blue.course_rating, 72.0);
    let default = courses.tee("palmer-hills", None).ok_or("default tee")?;
    assert_eq!(default.name, "White");
    assert!(courses.tee("palmer-hills", Some("Gold")).is_none());
    Ok(())
}

#[test]
fn context_resolves_handicaps_and_names() -> Result<(), Box<dyn std::error::Error>> {
    let (event, profiles, courses) = load()?;
    let ctx = RoundContext::build(&event, &profiles, &courses);

    let alice = ctx.get(&GolferId::profile("p1")).ok_or("alice")?;
    assert_eq!(alice.display_name, "Alice");
    assert_eq!(alice.course_handicap, Some(10));
    assert_eq!(alice.strokes.iter().sum::<i32>(), 10);
    // hole 3 is the hardest hole
    assert_eq!(alice.strokes[2], 1);
    assert_eq!(alice.net[2], Some(2));

    // blue plays two shots harder than the white reference tee
    let bob = ctx.get(&GolferId::profile("p2")).ok_or("bob")?;
    assert_eq!(bob.course_handicap, Some(7));

    // override wins over the profile index
    let cara = ctx.get(&GolferId::profile("p3")).ok_or("cara")?;
    assert_eq!(cara.handicap_index, Some(0.0));
    assert_eq!(cara.course_handicap, Some(0));

    let dan = ctx.get(&GolferId::guest("Dan")).ok_or("dan")?;
    assert_eq!(dan.display_name, "Dan");
    assert_eq!(dan.course_handicap, None);
    assert_eq!(dan.gross[17], None);
    assert_eq!(dan.net[17], None);
    assert_eq!(ctx.hole_par(4), Some(5));
    Ok(())
}

#[test]
fn full_event_settles() -> Result<(), Box<dyn std::error::Error>> {
    let (event, profiles, courses) = load()?;
    let (results, settlement) = settle_event(&event, &profiles, &courses);

    let alice = GolferId::profile("p1");
    let bob = GolferId::profile("p2");
    let cara = GolferId::profile("p3");
    let dan = GolferId::guest("Dan");

    let nassau = &results.nassau[0];
    assert!(!nassau.winnings_by_golfer.contains_key(&cara));
    assert_eq!(nassau.segments[0].winners.len(), 2);
    assert_close(nassau.winnings_by_golfer[&alice], 37.5);
    assert_close(nassau.winnings_by_golfer[&dan], 7.5);

    let skins = &results.skins[0];
    assert_eq!(skins.winning_holes_by_golfer[&cara], vec![3]);
    assert_close(skins.winnings_by_golfer[&cara], 8.0);

    assert_close(results.pinky[0].owings_by_golfer[&bob], -2.0);
    assert_close(results.greenie[0].owings_by_golfer[&alice], 3.0);

    assert_close(settlement.total_by_golfer[&alice], 41.5);
    assert_close(settlement.total_by_golfer[&bob], -5.0);
    assert_close(settlement.total_by_golfer[&cara], 8.0);
    assert_close(settlement.total_by_golfer[&dan], 8.5);
    assert_close(settlement.net_by_golfer[&alice], 24.5);
    assert_close(settlement.net_by_golfer.values().sum::<f64>(), 0.0);

    let again = settle_event(&event, &profiles, &courses);
    assert_eq!(again, (results, settlement));
    Ok(())
}

#[test]
fn results_serialize_for_display() -> Result<(), Box<dyn std::error::Error>> {
    let (event, profiles, courses) = load()?;
    let (results, settlement) = settle_event(&event, &profiles, &courses);
    let json = serde_json::to_value(&settlement)?;
    assert_eq!(json["total_by_golfer"]["guest:Dan"], serde_json::json!(8.5));
    let json = serde_json::to_value(&results)?;
    assert_eq!(json["nassau"][0]["segments"][0]["segment"], "front");
    assert_eq!(json["skins"][0]["hole_results"][2]["winners"][0], "p3");
    Ok(())
}

#[test]
fn inconsistent_snapshots_are_rejected() {
    let unknown_card = r#"{
        "golfers": [{"identity": {"kind": "guest", "name": "Ann"}}],
        "scorecards": [{"golfer": {"kind": "guest", "name": "Bo"}, "holes": []}]
    }"#;
    assert!(matches!(
        EventSnapshot::from_json(unknown_card),
        Err(WagerError::InvalidEvent(_))
    ));

    let duplicate = r#"{
        "golfers": [
            {"identity": {"kind": "profile", "profile_id": "p1"}},
            {"identity": {"kind": "profile", "profile_id": "p1"}}
        ]
    }"#;
    assert!(matches!(
        EventSnapshot::from_json(duplicate),
        Err(WagerError::InvalidEvent(_))
    ));

    let bad_hole = r#"{
        "golfers": [{"identity": {"kind": "guest", "name": "Ann"}}],
        "scorecards": [{"golfer": {"kind": "guest", "name": "Ann"}, "holes": [{"hole": 19, "strokes": 4}]}]
    }"#;
    assert!(EventSnapshot::from_json(bad_hole).is_err());

    let stranger_on_team = r#"{
        "golfers": [{"identity": {"kind": "guest", "name": "Ann"}}],
        "wagers": [{"game": "nassau", "fee": 1, "teams": [
            {"name": "A", "members": [{"kind": "guest", "name": "Ann"}]},
            {"name": "B", "members": [{"kind": "guest", "name": "Zed"}]}
        ]}]
    }"#;
    assert!(EventSnapshot::from_json(stranger_on_team).is_err());

    let reserved_prefix = r#"{
        "golfers": [
            {"identity": {"kind": "profile", "profile_id": "guest:Bob"}},
            {"identity": {"kind": "guest", "name": "Ann"}}
        ]
    }"#;
    assert!(matches!(
        EventSnapshot::from_json(reserved_prefix),
        Err(WagerError::InvalidEvent(_))
    ));

    assert!(matches!(
        EventSnapshot::from_json("{ not json"),
        Err(WagerError::Parse(_))
    ));
}

#[test]
fn repeated_stroke_index_is_rejected() {
    let courses = r#"[{"id": "c", "tees": [{"name": "W", "par": 72, "course_rating": 70.0,
        "slope_rating": 113.0, "holes": [
            {"number": 1, "par": 4, "stroke_index": 1},
            {"number": 2, "par": 4, "stroke_index": 1}
        ]}]}]"#;
    assert!(matches!(
        CourseCatalog::from_json(courses),
        Err(WagerError::InvalidCourse(_))
    ));
}

#[test]
fn segment_fee_aliases() -> Result<(), Box<dyn std::error::Error>> {
    let json = r#"{
        "golfers": [{"identity": {"kind": "guest", "name": "Ann"}}],
        "wagers": [{"game": "nassau", "segment_fees": {"out": 1, "in": 2, "total": 4}, "net": true}]
    }"#;
    let event = EventSnapshot::from_json(json)?;
    let WagerConfig::Nassau(config) = &event.wagers[0] else {
        return Err("expected a nassau".into());
    };
    assert_close(config.segment_fee(rusty_golf_wagers::model::Segment::Back), 2.0);
    assert!(config.net);
    Ok(())
}
