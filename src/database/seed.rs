use indexmap::IndexMap;

use super::Store;
use crate::models::{ActivityRow, StudentRow};

// (name, description, schedule, max_participants, participants)
const SEED_ACTIVITIES: &[(&str, &str, &str, i64, &[&str])] = &[
    (
        "Chess Club",
        "Learn strategies and compete in chess tournaments",
        "Fridays, 3:30 PM - 5:00 PM",
        12,
        &["michael@mergington.edu", "daniel@mergington.edu"],
    ),
    (
        "Programming Class",
        "Learn programming fundamentals and build software projects",
        "Tuesdays and Thursdays, 3:30 PM - 4:30 PM",
        20,
        &["emma@mergington.edu", "sophia@mergington.edu"],
    ),
    (
        "Gym Class",
        "Physical education and sports activities",
        "Mondays, Wednesdays, Fridays, 2:00 PM - 3:00 PM",
        30,
        &["john@mergington.edu", "olivia@mergington.edu"],
    ),
    (
        "Soccer Team",
        "Join the school soccer team and compete in matches",
        "Tuesdays and Thursdays, 4:00 PM - 5:30 PM",
        22,
        &["liam@mergington.edu", "noah@mergington.edu"],
    ),
    (
        "Basketball Team",
        "Practice and play basketball with the school team",
        "Wednesdays and Fridays, 3:30 PM - 5:00 PM",
        15,
        &["ava@mergington.edu", "mia@mergington.edu"],
    ),
    (
        "Art Club",
        "Explore your creativity through painting and drawing",
        "Thursdays, 3:30 PM - 5:00 PM",
        15,
        &["amelia@mergington.edu", "harper@mergington.edu"],
    ),
    (
        "Drama Club",
        "Act, direct, and produce plays and performances",
        "Mondays and Wednesdays, 4:00 PM - 5:30 PM",
        20,
        &["ella@mergington.edu", "scarlett@mergington.edu"],
    ),
    (
        "Math Club",
        "Solve challenging problems and participate in math competitions",
        "Tuesdays, 3:30 PM - 4:30 PM",
        10,
        &["james@mergington.edu", "benjamin@mergington.edu"],
    ),
    (
        "Debate Team",
        "Develop public speaking and argumentation skills",
        "Fridays, 4:00 PM - 5:30 PM",
        12,
        &["charlotte@mergington.edu", "henry@mergington.edu"],
    ),
];

// (email, name, grade)
const SEED_STUDENTS: &[(&str, &str, &str)] = &[
    ("michael@mergington.edu", "Michael Smith", "10"),
    ("daniel@mergington.edu", "Daniel Johnson", "11"),
    ("emma@mergington.edu", "Emma Wilson", "9"),
    ("sophia@mergington.edu", "Sophia Brown", "10"),
    ("john@mergington.edu", "John Davis", "12"),
    ("olivia@mergington.edu", "Olivia Martinez", "11"),
    ("liam@mergington.edu", "Liam Anderson", "10"),
    ("noah@mergington.edu", "Noah Taylor", "9"),
    ("ava@mergington.edu", "Ava Thomas", "11"),
    ("mia@mergington.edu", "Mia Jackson", "10"),
    ("amelia@mergington.edu", "Amelia White", "12"),
    ("harper@mergington.edu", "Harper Harris", "9"),
    ("ella@mergington.edu", "Ella Martin", "11"),
    ("scarlett@mergington.edu", "Scarlett Thompson", "10"),
    ("james@mergington.edu", "James Garcia", "12"),
    ("benjamin@mergington.edu", "Benjamin Rodriguez", "11"),
    ("charlotte@mergington.edu", "Charlotte Lee", "9"),
    ("henry@mergington.edu", "Henry Walker", "10"),
];

pub fn seed_activities() -> IndexMap<String, ActivityRow> {
    SEED_ACTIVITIES
        .iter()
        .map(|(name, description, schedule, max_participants, participants)| {
            (
                name.to_string(),
                ActivityRow {
                    description: description.to_string(),
                    schedule: schedule.to_string(),
                    max_participants: *max_participants,
                    participants: participants.iter().map(|p| p.to_string()).collect(),
                },
            )
        })
        .collect()
}

pub fn seed_students() -> IndexMap<String, StudentRow> {
    SEED_STUDENTS
        .iter()
        .map(|(email, name, grade)| {
            (
                email.to_string(),
                StudentRow {
                    name: name.to_string(),
                    email: email.to_string(),
                    grade: grade.to_string(),
                },
            )
        })
        .collect()
}

pub fn seed_store() -> Store {
    Store::new(seed_activities(), seed_students())
}
