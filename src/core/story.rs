//! Narrative milestones unlocked by lifetime life force.

/// One-time narrative message gated on lifetime life force.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StoryBeat {
    pub threshold: f64,
    pub message: &'static str,
}

/// Milestones in ascending threshold order.
pub const STORY: [StoryBeat; 8] = [
    StoryBeat {
        threshold: 10.0,
        message: "A faint light reaches you... you have woken as a seed.",
    },
    StoryBeat {
        threshold: 100.0,
        message: "Your roots creep outward. You can hear the earth's heartbeat.",
    },
    StoryBeat {
        threshold: 1000.0,
        message: "You reach the deeper strata. Mana pulses through the stone.",
    },
    StoryBeat {
        threshold: 2500.0,
        message: "Something stirs in the abyss below. It has noticed your light.",
    },
    StoryBeat {
        threshold: 10_000.0,
        message: "Your canopy breaks the surface. The wind carries your name.",
    },
    StoryBeat {
        threshold: 50_000.0,
        message: "Forests answer when you call. You are no longer a single tree.",
    },
    StoryBeat {
        threshold: 250_000.0,
        message: "The old roots of the world recognise you as kin.",
    },
    StoryBeat {
        threshold: 1_000_000.0,
        message: "You are the Deep Root. Every living thing drinks from you.",
    },
];

/// Works out which milestones `total_life_force` has crossed starting at
/// `story_index`.
///
/// Returns the new cursor and the crossed messages in ascending threshold
/// order. Stops at the first threshold not yet reached, so a large jump still
/// fires every skipped beat exactly once.
pub fn next_unlocks(
    total_life_force: f64,
    story_index: usize,
    beats: &[StoryBeat],
) -> (usize, Vec<&'static str>) {
    let mut index = story_index;
    let mut messages = Vec::new();
    while let Some(beat) = beats.get(index) {
        if total_life_force < beat.threshold {
            break;
        }
        messages.push(beat.message);
        index += 1;
    }
    (index, messages)
}
