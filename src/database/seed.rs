use crate::models::Activity;

// (name, description, schedule, max_participants)
const SEED_ACTIVITIES: &[(&str, &str, &str, u32)] = &[
    (
        "Basketball Team",
        "Join the school basketball team and compete in local leagues",
        "Mondays and Thursdays, 4:00 PM - 6:00 PM",
        15,
    ),
    (
        "Soccer Club",
        "Practice soccer skills and play friendly matches",
        "Wednesdays, 3:30 PM - 5:30 PM",
        18,
    ),
    (
        "Art Club",
        "Explore painting, drawing, and other visual arts",
        "Tuesdays, 3:30 PM - 5:00 PM",
        16,
    ),
    (
        "Drama Society",
        "Participate in theater productions and acting workshops",
        "Fridays, 4:00 PM - 6:00 PM",
        20,
    ),
    (
        "Math Olympiad",
        "Prepare for math competitions and solve challenging problems",
        "Thursdays, 3:30 PM - 5:00 PM",
        25,
    ),
    (
        "Science Club",
        "Conduct experiments and explore scientific concepts",
        "Wednesdays, 4:00 PM - 5:30 PM",
        20,
    ),
    (
        "Volleyball Team",
        "Practice volleyball skills and compete in inter-school tournaments",
        "Tuesdays and Fridays, 4:00 PM - 5:30 PM",
        14,
    ),
    (
        "Track and Field",
        "Train for running, jumping, and throwing events",
        "Mondays and Wednesdays, 3:30 PM - 5:00 PM",
        25,
    ),
    (
        "Photography Club",
        "Learn photography techniques and participate in photo walks",
        "Thursdays, 4:00 PM - 5:30 PM",
        12,
    ),
    (
        "Music Ensemble",
        "Join a group to play instruments and perform at school events",
        "Wednesdays, 3:30 PM - 5:00 PM",
        20,
    ),
    (
        "Debate Club",
        "Develop public speaking and argumentation skills through debates",
        "Fridays, 3:30 PM - 5:00 PM",
        15,
    ),
    (
        "Book Club",
        "Read and discuss books from various genres",
        "Mondays, 4:00 PM - 5:00 PM",
        18,
    ),
];

/// The fixed activity set the directory starts with. Every activity begins
/// with no participants.
pub fn seed_activities() -> Vec<Activity> {
    SEED_ACTIVITIES
        .iter()
        .map(|(name, description, schedule, max)| {
            Activity::new(*name, *description, *schedule, *max)
        })
        .collect()
}
