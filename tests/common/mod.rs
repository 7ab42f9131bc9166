#![allow(dead_code)]

use rusty_golf_wagers::model::{
    Course, CourseCatalog, CourseTee, EventSnapshot, GamePreference, Golfer, GolferId,
    GolferIdentity, HoleInfo, HoleScore, Scorecard, WagerConfig,
};
use rusty_golf_wagers::RoundContext;

pub const PARS: [i32; 18] = [4, 4, 3, 5, 4, 4, 3, 4, 5, 4, 4, 3, 5, 4, 4, 3, 4, 5];
pub const STROKE_INDEXES: [u8; 18] = [7, 15, 1, 11, 3, 17, 9, 13, 5, 8, 16, 2, 12, 4, 18, 10, 14, 6];

pub fn player(profile_id: &str) -> Golfer {
    Golfer {
        identity: GolferIdentity::Profile {
            profile_id: profile_id.to_string(),
        },
        handicap_override: None,
        tee: None,
        group_id: None,
        games: GamePreference::All,
    }
}

pub fn guest(name: &str) -> Golfer {
    Golfer {
        identity: GolferIdentity::Guest {
            name: name.to_string(),
        },
        ..player("unused")
    }
}

pub fn with_games(mut golfer: Golfer, games: GamePreference) -> Golfer {
    golfer.games = games;
    golfer
}

pub fn with_index(mut golfer: Golfer, index: f64) -> Golfer {
    golfer.handicap_override = Some(index);
    golfer
}

pub fn with_group(mut golfer: Golfer, group: &str) -> Golfer {
    golfer.group_id = Some(group.to_string());
    golfer
}

pub fn id(golfer: &Golfer) -> GolferId {
    golfer.id()
}

/// Scorecard from per-hole strokes; `None` is an unplayed hole.
pub fn card(golfer: &Golfer, strokes: [Option<i32>; 18]) -> Scorecard {
    Scorecard {
        golfer: golfer.identity.clone(),
        holes: strokes
            .iter()
            .enumerate()
            .map(|(idx, &s)| HoleScore {
                hole: u8::try_from(idx + 1).expect("hole fits in u8"),
                strokes: s,
            })
            .collect(),
        pinkies: 0,
        greenies: 0,
    }
}

pub fn flat_card(golfer: &Golfer, strokes: i32) -> Scorecard {
    card(golfer, [Some(strokes); 18])
}

/// Every hole played in `front` strokes on 1-9 and `back` on 10-18.
pub fn split_card(golfer: &Golfer, front: i32, back: i32) -> Scorecard {
    let mut strokes = [Some(front); 18];
    for slot in &mut strokes[9..] {
        *slot = Some(back);
    }
    card(golfer, strokes)
}

pub fn event(golfers: Vec<Golfer>, scorecards: Vec<Scorecard>, wagers: Vec<WagerConfig>) -> EventSnapshot {
    EventSnapshot {
        event_id: Some(1),
        name: "test round".to_string(),
        course_id: None,
        reference_tee: None,
        golfers,
        scorecards,
        wagers,
    }
}

pub fn tee(name: &str, course_rating: f64, slope_rating: f64) -> CourseTee {
    CourseTee {
        name: name.to_string(),
        par: PARS.iter().sum(),
        course_rating,
        slope_rating,
        holes: (0..18)
            .map(|idx| HoleInfo {
                number: u8::try_from(idx + 1).expect("hole fits in u8"),
                par: PARS[idx],
                stroke_index: Some(STROKE_INDEXES[idx]),
            })
            .collect(),
    }
}

pub fn catalog() -> CourseCatalog {
    CourseCatalog::new(vec![Course {
        id: "test-course".to_string(),
        name: "Test Course".to_string(),
        tees: vec![tee("White", 72.0, 113.0), tee("Blue", 73.0, 125.0)],
    }])
    .expect("test course is valid")
}

/// Context without any course data.
pub fn context(event: &EventSnapshot) -> RoundContext {
    RoundContext::build(event, &[], &CourseCatalog::default())
}

/// Context on the test course, normalized to the White tee.
pub fn course_context(event: &mut EventSnapshot) -> RoundContext {
    event.course_id = Some("test-course".to_string());
    event.reference_tee = Some("White".to_string());
    RoundContext::build(event, &[], &catalog())
}

pub fn assert_close(actual: f64, expected: f64) {
    assert!(
        (actual - expected).abs() < 1e-9,
        "expected {expected}, got {actual}"
    );
}
