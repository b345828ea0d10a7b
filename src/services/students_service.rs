use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use crate::database::{activities_repo, students_repo, SharedStore};
use crate::error::{ApiError, Result};
use crate::models::{StudentRow, StudentUpdate};

#[derive(Debug, Deserialize, Default)]
pub struct StudentsQuery {
    pub search: Option<String>,
    pub grade: Option<String>,
}

/// Reduced activity record shown on a student's profile.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StudentActivityView {
    pub name: String,
    pub description: String,
    pub schedule: String,
}

fn non_empty(value: Option<&str>) -> Option<&str> {
    value.filter(|v| !v.is_empty())
}

fn matches_search(student: &StudentRow, needle_lower: &str) -> bool {
    student.name.to_lowercase().contains(needle_lower)
        || student.email.to_lowercase().contains(needle_lower)
}

/// Students in store order, narrowed by a case-insensitive `search` over name
/// or email and an exact `grade` match. Empty parameters do not filter.
pub fn list_students(store: &SharedStore, query: &StudentsQuery) -> IndexMap<String, StudentRow> {
    let search = non_empty(query.search.as_deref()).map(str::to_lowercase);
    let grade = non_empty(query.grade.as_deref());

    let store = store.read();
    students_repo::list_students(&store)
        .iter()
        .filter(|(_, s)| search.as_deref().map_or(true, |q| matches_search(s, q)))
        .filter(|(_, s)| grade.map_or(true, |g| s.grade == g))
        .map(|(email, s)| (email.clone(), s.clone()))
        .collect()
}

pub fn create_student(store: &SharedStore, student: StudentRow) -> Result<StudentRow> {
    let mut store = store.write();

    if students_repo::student_exists(&store, &student.email) {
        warn!(email = %student.email, "duplicate student rejected");
        return Err(ApiError::conflict("Student with this email already exists"));
    }

    students_repo::insert_student(&mut store, student.clone());
    info!(email = %student.email, grade = %student.grade, "student created");
    Ok(student)
}

pub fn get_student(store: &SharedStore, email: &str) -> Result<StudentRow> {
    students_repo::find_student(&store.read(), email)
        .cloned()
        .ok_or_else(|| ApiError::not_found("Student not found"))
}

/// Applies a partial update. A changed email re-keys the record and rewrites
/// the address in every activity; each renamed participant moves to the end
/// of that activity's list.
pub fn update_student(
    store: &SharedStore,
    email: &str,
    update: StudentUpdate,
) -> Result<StudentRow> {
    let mut store = store.write();

    if !students_repo::student_exists(&store, email) {
        return Err(ApiError::not_found("Student not found"));
    }
    let new_email = update.email.as_deref().filter(|new| *new != email);
    if let Some(new_email) = new_email {
        if students_repo::student_exists(&store, new_email) {
            warn!(email = %email, new_email = %new_email, "email change onto existing student rejected");
            return Err(ApiError::conflict("Email already in use by another student"));
        }
    }

    students_repo::update_student_fields(
        &mut store,
        email,
        update.name.as_deref(),
        update.grade.as_deref(),
    );

    let key = match new_email {
        Some(new_email) => {
            students_repo::rekey_student(&mut store, email, new_email);
            let touched = activities_repo::replace_participant_everywhere(&mut store, email, new_email);
            info!(email = %email, new_email = %new_email, activities = touched, "student email changed");
            new_email
        }
        None => email,
    };
    info!(email = %key, "student updated");

    students_repo::find_student(&store, key)
        .cloned()
        .ok_or_else(|| ApiError::not_found("Student not found"))
}

pub fn delete_student(store: &SharedStore, email: &str) -> Result<()> {
    let mut store = store.write();

    if !students_repo::student_exists(&store, email) {
        return Err(ApiError::not_found("Student not found"));
    }

    let touched = activities_repo::remove_participant_everywhere(&mut store, email);
    students_repo::delete_student(&mut store, email);
    info!(email = %email, activities = touched, "student deleted");
    Ok(())
}

pub fn list_student_activities(store: &SharedStore, email: &str) -> Result<Vec<StudentActivityView>> {
    let store = store.read();

    if !students_repo::student_exists(&store, email) {
        return Err(ApiError::not_found("Student not found"));
    }

    let views = activities_repo::list_for_participant(&store, email)
        .into_iter()
        .map(|(name, activity)| StudentActivityView {
            name: name.clone(),
            description: activity.description.clone(),
            schedule: activity.schedule.clone(),
        })
        .collect();
    Ok(views)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::database::Store;
    use crate::services::activities_service;

    fn seeded() -> SharedStore {
        Store::seeded().into_shared()
    }

    fn query(search: Option<&str>, grade: Option<&str>) -> StudentsQuery {
        StudentsQuery {
            search: search.map(str::to_string),
            grade: grade.map(str::to_string),
        }
    }

    #[test]
    fn test_list_without_filters_returns_everyone() {
        let store = seeded();
        assert_eq!(list_students(&store, &StudentsQuery::default()).len(), 18);
        assert_eq!(list_students(&store, &query(Some(""), Some(""))).len(), 18);
    }

    #[test]
    fn test_search_is_case_insensitive_over_name_and_email() {
        let store = seeded();
        let by_name = list_students(&store, &query(Some("SMITH"), None));
        assert_eq!(
            by_name.keys().collect::<Vec<_>>(),
            vec!["michael@mergington.edu"]
        );

        let by_email = list_students(&store, &query(Some("Henry@"), None));
        assert_eq!(
            by_email.keys().collect::<Vec<_>>(),
            vec!["henry@mergington.edu"]
        );
    }

    #[test]
    fn test_grade_filter_is_exact() {
        let store = seeded();
        let ninth = list_students(&store, &query(None, Some("9")));
        assert_eq!(ninth.len(), 4);
        assert!(ninth.values().all(|s| s.grade == "9"));
        assert!(list_students(&store, &query(None, Some("09"))).is_empty());
    }

    #[test]
    fn test_search_and_grade_intersect() {
        let store = seeded();
        let both = list_students(&store, &query(Some("mi"), Some("10")));
        assert_eq!(
            both.keys().collect::<Vec<_>>(),
            vec!["michael@mergington.edu", "mia@mergington.edu"]
        );
    }

    #[test]
    fn test_create_duplicate_leaves_store_unchanged() {
        let store = seeded();
        let dup = StudentRow {
            name: "Imposter".to_string(),
            email: "michael@mergington.edu".to_string(),
            grade: "12".to_string(),
        };
        let err = create_student(&store, dup).unwrap_err();
        assert_eq!(err.to_string(), "Student with this email already exists");
        assert_eq!(
            get_student(&store, "michael@mergington.edu").expect("seeded").name,
            "Michael Smith"
        );
        assert_eq!(list_students(&store, &StudentsQuery::default()).len(), 18);
    }

    #[test]
    fn test_create_then_get() {
        let store = seeded();
        let new = StudentRow {
            name: "Zoe Park".to_string(),
            email: "zoe@mergington.edu".to_string(),
            grade: "9".to_string(),
        };
        assert_eq!(create_student(&store, new.clone()).expect("created"), new);
        assert_eq!(get_student(&store, "zoe@mergington.edu").expect("found"), new);
    }

    #[test]
    fn test_get_unknown_student() {
        let store = seeded();
        let err = get_student(&store, "nobody@mergington.edu").unwrap_err();
        assert!(matches!(err, ApiError::NotFound(_)));
    }

    #[test]
    fn test_update_name_and_grade_in_place() {
        let store = seeded();
        let update = StudentUpdate {
            name: Some("Mike Smith".to_string()),
            grade: Some("11".to_string()),
            ..StudentUpdate::default()
        };
        let updated = update_student(&store, "michael@mergington.edu", update).expect("updated");
        assert_eq!(updated.name, "Mike Smith");
        assert_eq!(updated.grade, "11");
        assert_eq!(updated.email, "michael@mergington.edu");
    }

    #[test]
    fn test_update_same_email_is_not_a_rename() {
        let store = seeded();
        let update = StudentUpdate {
            email: Some("michael@mergington.edu".to_string()),
            ..StudentUpdate::default()
        };
        update_student(&store, "michael@mergington.edu", update).expect("updated");
        let keys: Vec<String> = list_students(&store, &StudentsQuery::default())
            .into_keys()
            .collect();
        assert_eq!(keys[0], "michael@mergington.edu");
    }

    #[test]
    fn test_rename_rewrites_key_and_participation() {
        let store = seeded();
        let update = StudentUpdate {
            email: Some("mike@mergington.edu".to_string()),
            ..StudentUpdate::default()
        };
        let updated = update_student(&store, "michael@mergington.edu", update).expect("renamed");
        assert_eq!(updated.email, "mike@mergington.edu");
        assert_eq!(updated.name, "Michael Smith");
        assert_eq!(updated.grade, "10");

        assert!(matches!(
            get_student(&store, "michael@mergington.edu"),
            Err(ApiError::NotFound(_))
        ));
        assert_eq!(get_student(&store, "mike@mergington.edu").expect("found"), updated);

        let activities = activities_service::list_activities(&store);
        assert_eq!(
            activities["Chess Club"].participants,
            vec!["daniel@mergington.edu", "mike@mergington.edu"]
        );
    }

    #[test]
    fn test_rename_onto_unregistered_participant_does_not_duplicate() {
        let store = seeded();
        activities_service::signup(&store, "Chess Club", "zoe@mergington.edu").expect("signup");
        let update = StudentUpdate {
            email: Some("zoe@mergington.edu".to_string()),
            ..StudentUpdate::default()
        };
        update_student(&store, "michael@mergington.edu", update).expect("renamed");

        let activities = activities_service::list_activities(&store);
        assert_eq!(
            activities["Chess Club"].participants,
            vec!["daniel@mergington.edu", "zoe@mergington.edu"]
        );

        activities_service::unregister(&store, "Chess Club", "zoe@mergington.edu")
            .expect("unregister");
        let activities = activities_service::list_activities(&store);
        assert_eq!(
            activities["Chess Club"].participants,
            vec!["daniel@mergington.edu"]
        );
    }

    #[test]
    fn test_rename_onto_existing_email_changes_nothing() {
        let store = seeded();
        let update = StudentUpdate {
            name: Some("Changed".to_string()),
            email: Some("daniel@mergington.edu".to_string()),
            grade: None,
        };
        let err = update_student(&store, "michael@mergington.edu", update).unwrap_err();
        assert_eq!(err.to_string(), "Email already in use by another student");
        assert_eq!(
            get_student(&store, "michael@mergington.edu").expect("kept").name,
            "Michael Smith"
        );
    }

    #[test]
    fn test_update_unknown_student() {
        let store = seeded();
        let err = update_student(&store, "ghost@mergington.edu", StudentUpdate::default())
            .unwrap_err();
        assert!(matches!(err, ApiError::NotFound(_)));
    }

    #[test]
    fn test_delete_cascades_into_activities() {
        let store = seeded();
        delete_student(&store, "michael@mergington.edu").expect("deleted");
        let activities = activities_service::list_activities(&store);
        assert_eq!(
            activities["Chess Club"].participants,
            vec!["daniel@mergington.edu"]
        );
        assert!(matches!(
            get_student(&store, "michael@mergington.edu"),
            Err(ApiError::NotFound(_))
        ));
        assert!(matches!(
            delete_student(&store, "michael@mergington.edu"),
            Err(ApiError::NotFound(_))
        ));
    }

    #[test]
    fn test_student_activities_for_seeded_student() {
        let store = seeded();
        let activities = list_student_activities(&store, "michael@mergington.edu").expect("ok");
        assert_eq!(
            activities,
            vec![StudentActivityView {
                name: "Chess Club".to_string(),
                description: "Learn strategies and compete in chess tournaments".to_string(),
                schedule: "Fridays, 3:30 PM - 5:00 PM".to_string(),
            }]
        );
    }

    #[test]
    fn test_student_activities_unknown_student() {
        let store = seeded();
        assert!(matches!(
            list_student_activities(&store, "ghost@mergington.edu"),
            Err(ApiError::NotFound(_))
        ));
    }
}
