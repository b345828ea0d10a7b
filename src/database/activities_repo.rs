use indexmap::IndexMap;

use super::Store;
use crate::models::ActivityRow;

pub fn list_activities(store: &Store) -> &IndexMap<String, ActivityRow> {
    &store.activities
}

pub fn find_activity<'a>(store: &'a Store, name: &str) -> Option<&'a ActivityRow> {
    store.activities.get(name)
}

/// Appends `email` to the activity's participants. Returns the number of
/// activities changed (0 when the activity does not exist).
pub fn append_participant(store: &mut Store, activity_name: &str, email: &str) -> u64 {
    match store.activities.get_mut(activity_name) {
        Some(activity) => {
            activity.participants.push(email.to_string());
            1
        }
        None => 0,
    }
}

/// Removes the first occurrence of `email` from the activity's participants.
pub fn remove_participant(store: &mut Store, activity_name: &str, email: &str) -> u64 {
    let Some(activity) = store.activities.get_mut(activity_name) else {
        return 0;
    };
    match activity.participants.iter().position(|p| p == email) {
        Some(idx) => {
            activity.participants.remove(idx);
            1
        }
        None => 0,
    }
}

/// Drops `email` from every activity that lists it.
pub fn remove_participant_everywhere(store: &mut Store, email: &str) -> u64 {
    let mut touched = 0;
    for activity in store.activities.values_mut() {
        if let Some(idx) = activity.participants.iter().position(|p| p == email) {
            activity.participants.remove(idx);
            touched += 1;
        }
    }
    touched
}

/// Rewrites `old_email` to `new_email` in every activity that lists it. The
/// new entry goes to the end of the sequence, not the old position. An
/// activity that already lists `new_email` only loses `old_email`.
pub fn replace_participant_everywhere(store: &mut Store, old_email: &str, new_email: &str) -> u64 {
    let mut touched = 0;
    for activity in store.activities.values_mut() {
        if let Some(idx) = activity.participants.iter().position(|p| p == old_email) {
            activity.participants.remove(idx);
            if !activity.has_participant(new_email) {
                activity.participants.push(new_email.to_string());
            }
            touched += 1;
        }
    }
    touched
}

pub fn list_for_participant<'a>(
    store: &'a Store,
    email: &str,
) -> Vec<(&'a String, &'a ActivityRow)> {
    store
        .activities
        .iter()
        .filter(|(_, activity)| activity.has_participant(email))
        .collect()
}

pub fn count_for_participant(store: &Store, email: &str) -> usize {
    store
        .activities
        .values()
        .filter(|activity| activity.has_participant(email))
        .count()
}
