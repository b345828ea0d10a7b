use indexmap::IndexMap;

use super::Store;
use crate::models::StudentRow;

pub fn list_students(store: &Store) -> &IndexMap<String, StudentRow> {
    &store.students
}

pub fn find_student<'a>(store: &'a Store, email: &str) -> Option<&'a StudentRow> {
    store.students.get(email)
}

pub fn student_exists(store: &Store, email: &str) -> bool {
    store.students.contains_key(email)
}

/// Inserts the record under its email. Returns 0 if the key was already taken
/// (the existing record is kept).
pub fn insert_student(store: &mut Store, student: StudentRow) -> u64 {
    if store.students.contains_key(&student.email) {
        return 0;
    }
    store.students.insert(student.email.clone(), student);
    1
}

pub fn update_student_fields(
    store: &mut Store,
    email: &str,
    name: Option<&str>,
    grade: Option<&str>,
) -> u64 {
    let Some(student) = store.students.get_mut(email) else {
        return 0;
    };
    if let Some(name) = name {
        student.name = name.to_string();
    }
    if let Some(grade) = grade {
        student.grade = grade.to_string();
    }
    1
}

/// Moves the record from `old_email` to `new_email`, updating its email field.
/// The record is re-inserted at the end of the iteration order.
pub fn rekey_student(store: &mut Store, old_email: &str, new_email: &str) -> u64 {
    if store.students.contains_key(new_email) {
        return 0;
    }
    let Some(mut student) = store.students.shift_remove(old_email) else {
        return 0;
    };
    student.email = new_email.to_string();
    store.students.insert(new_email.to_string(), student);
    1
}

pub fn delete_student(store: &mut Store, email: &str) -> u64 {
    match store.students.shift_remove(email) {
        Some(_) => 1,
        None => 0,
    }
}
