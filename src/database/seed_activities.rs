use crate::database::activity_catalog_repo::{ActivityCatalog, NewActivity};
use crate::error::Result;

pub const SEED_ACTIVITIES: &[NewActivity<'static>] = &[
    NewActivity {
        name: "Chess Club",
        description: "Learn strategies and compete in chess tournaments",
        schedule: "Fridays, 3:30 PM - 5:00 PM",
        max_participants: 12,
        participants: &["michael@mergington.edu", "daniel@mergington.edu"],
    },
    NewActivity {
        name: "Programming Class",
        description: "Learn programming fundamentals and build software projects",
        schedule: "Tuesdays and Thursdays, 3:30 PM - 4:30 PM",
        max_participants: 20,
        participants: &["emma@mergington.edu", "sophia@mergington.edu"],
    },
    NewActivity {
        name: "Gym Class",
        description: "Physical education and sports activities",
        schedule: "Mondays, Wednesdays, Fridays, 2:00 PM - 3:00 PM",
        max_participants: 30,
        participants: &["john@mergington.edu", "olivia@mergington.edu"],
    },
    // Sports
    NewActivity {
        name: "Soccer Team",
        description: "Join the school soccer team and compete in tournaments",
        schedule: "Tuesdays and Thursdays, 4:00 PM - 5:30 PM",
        max_participants: 22,
        participants: &[],
    },
    NewActivity {
        name: "Basketball Club",
        description: "Practice basketball and participate in friendly matches",
        schedule: "Wednesdays, 3:00 PM - 4:30 PM",
        max_participants: 15,
        participants: &[],
    },
    // Arts
    NewActivity {
        name: "Drama Club",
        description: "Explore acting and participate in school plays",
        schedule: "Mondays, 4:00 PM - 5:30 PM",
        max_participants: 20,
        participants: &[],
    },
    NewActivity {
        name: "Painting Workshop",
        description: "Learn painting techniques and create your own artwork",
        schedule: "Thursdays, 3:30 PM - 5:00 PM",
        max_participants: 15,
        participants: &[],
    },
    // Academic
    NewActivity {
        name: "Math Club",
        description: "Solve challenging math problems and prepare for competitions",
        schedule: "Fridays, 3:30 PM - 5:00 PM",
        max_participants: 10,
        participants: &[],
    },
    NewActivity {
        name: "Debate Team",
        description: "Develop public speaking skills and participate in debates",
        schedule: "Tuesdays, 4:00 PM - 5:30 PM",
        max_participants: 12,
        participants: &[],
    },
];

pub fn seeded_catalog() -> Result<ActivityCatalog> {
    ActivityCatalog::new(SEED_ACTIVITIES.iter().copied())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn seed_builds_a_valid_catalog() {
        let catalog = seeded_catalog().unwrap();
        assert_eq!(catalog.len(), SEED_ACTIVITIES.len());

        let chess = catalog.find("Chess Club").unwrap().snapshot().unwrap();
        assert_eq!(chess.max_participants, 12);
        assert_eq!(
            chess.participants,
            vec!["michael@mergington.edu", "daniel@mergington.edu"]
        );
    }
}
