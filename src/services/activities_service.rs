use indexmap::IndexMap;
use tracing::{info, warn};

use crate::database::{activities_repo, SharedStore};
use crate::error::{ApiError, Result};
use crate::models::ActivityRow;

pub fn list_activities(store: &SharedStore) -> IndexMap<String, ActivityRow> {
    activities_repo::list_activities(&store.read()).clone()
}

/// Signs `email` up for `activity_name`. Capacity is not checked.
pub fn signup(store: &SharedStore, activity_name: &str, email: &str) -> Result<String> {
    let mut store = store.write();

    let Some(activity) = activities_repo::find_activity(&store, activity_name) else {
        warn!(activity = %activity_name, "signup for unknown activity");
        return Err(ApiError::not_found("Activity not found"));
    };
    if activity.has_participant(email) {
        warn!(activity = %activity_name, email = %email, "duplicate signup rejected");
        return Err(ApiError::conflict("Student is already signed up"));
    }

    activities_repo::append_participant(&mut store, activity_name, email);
    info!(activity = %activity_name, email = %email, "participant signed up");
    Ok(format!("Signed up {} for {}", email, activity_name))
}

pub fn unregister(store: &SharedStore, activity_name: &str, email: &str) -> Result<String> {
    let mut store = store.write();

    let Some(activity) = activities_repo::find_activity(&store, activity_name) else {
        warn!(activity = %activity_name, "unregister from unknown activity");
        return Err(ApiError::not_found("Activity not found"));
    };
    if !activity.has_participant(email) {
        warn!(activity = %activity_name, email = %email, "unregister of non-participant rejected");
        return Err(ApiError::conflict(
            "Student is not signed up for this activity",
        ));
    }

    activities_repo::remove_participant(&mut store, activity_name, email);
    info!(activity = %activity_name, email = %email, "participant unregistered");
    Ok(format!("Unregistered {} from {}", email, activity_name))
}
