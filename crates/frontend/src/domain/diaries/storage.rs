//! Diary records persisted as one JSON array in local storage.

use chrono::Utc;
use contracts::domain::diary::{Diary, DiaryDraft};

use crate::shared::storage::{self, StorageError};

pub const DIARIES_KEY: &str = "diaries";

pub fn load_all() -> Result<Vec<Diary>, StorageError> {
    Ok(storage::get_json::<Vec<Diary>>(DIARIES_KEY)?.unwrap_or_default())
}

pub fn find(id: i64) -> Result<Diary, StorageError> {
    load_all()?
        .into_iter()
        .find(|d| d.id == id)
        .ok_or(StorageError::NotFound(id))
}

/// Store a validated draft under the next free id.
pub fn insert(draft: DiaryDraft) -> Result<Diary, StorageError> {
    let mut diaries = load_all()?;
    let diary = draft.into_diary(next_id(&diaries), Utc::now());
    diaries.push(diary.clone());
    storage::set_json(DIARIES_KEY, &diaries)?;
    log::info!("diary {} stored", diary.id);
    Ok(diary)
}

pub fn delete(id: i64) -> Result<(), StorageError> {
    let mut diaries = load_all()?;
    remove_by_id(&mut diaries, id)?;
    storage::set_json(DIARIES_KEY, &diaries)?;
    log::info!("diary {id} deleted");
    Ok(())
}

/// Largest id + 1, starting at 1.
fn next_id(diaries: &[Diary]) -> i64 {
    diaries.iter().map(|d| d.id).max().map_or(1, |max| max + 1)
}

fn remove_by_id(diaries: &mut Vec<Diary>, id: i64) -> Result<Diary, StorageError> {
    let index = diaries
        .iter()
        .position(|d| d.id == id)
        .ok_or(StorageError::NotFound(id))?;
    Ok(diaries.remove(index))
}

#[cfg(test)]
mod tests {
    use super::*;
    use contracts::domain::diary::Emotion;

    fn diary(id: i64) -> Diary {
        DiaryDraft {
            title: format!("day {id}"),
            content: "text".into(),
            emotion: Emotion::Happy,
        }
        .into_diary(id, Utc::now())
    }

    #[test]
    fn test_next_id_starts_at_one() {
        assert_eq!(next_id(&[]), 1);
    }

    #[test]
    fn test_next_id_uses_max_not_len() {
        let diaries = vec![diary(1), diary(7), diary(3)];
        assert_eq!(next_id(&diaries), 8);
    }

    #[test]
    fn test_remove_by_id() {
        let mut diaries = vec![diary(1), diary(2), diary(3)];
        let removed = remove_by_id(&mut diaries, 2).unwrap();
        assert_eq!(removed.id, 2);
        assert_eq!(diaries.iter().map(|d| d.id).collect::<Vec<_>>(), vec![1, 3]);
    }

    #[test]
    fn test_remove_missing_id() {
        let mut diaries = vec![diary(1)];
        assert!(matches!(
            remove_by_id(&mut diaries, 9),
            Err(StorageError::NotFound(9))
        ));
        assert_eq!(diaries.len(), 1);
    }
}
