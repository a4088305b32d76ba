use std::io::ErrorKind;

use crate::app::models::api_error::ApiError;

use super::{errors::DraftsApiError, models::draft::Draft, store::DraftStore};

/// Corrupted slot contents are removed and treated as no draft.
pub async fn load_draft(store: &DraftStore) -> Result<Option<Draft>, ApiError> {
    let path = store.slot_path();

    let text = match tokio::fs::read_to_string(&path).await {
        Ok(text) => text,
        Err(e) if e.kind() == ErrorKind::NotFound => return Ok(None),
        Err(e) => {
            tracing::error!(%e, path = %path.display());
            return Err(DraftsApiError::ReadFailed.value());
        }
    };

    match serde_json::from_str::<Draft>(&text) {
        Ok(draft) => Ok(Some(draft)),
        Err(e) => {
            tracing::warn!(%e, path = %path.display(), "discarding corrupted draft");
            if let Err(e) = tokio::fs::remove_file(&path).await {
                tracing::warn!(%e, "failed to remove corrupted draft");
            }
            Ok(None)
        }
    }
}

pub async fn get_draft(store: &DraftStore) -> Result<Draft, ApiError> {
    Ok(load_draft(store).await?.unwrap_or_default())
}

pub async fn save_draft(draft: &Draft, store: &DraftStore) -> Result<Draft, ApiError> {
    if let Err(e) = tokio::fs::create_dir_all(&store.dir).await {
        tracing::error!(%e, dir = %store.dir.display());
        return Err(DraftsApiError::WriteFailed.value());
    }

    let json = match serde_json::to_string(draft) {
        Ok(json) => json,
        Err(e) => {
            tracing::error!(%e);
            return Err(DraftsApiError::WriteFailed.value());
        }
    };

    match tokio::fs::write(store.slot_path(), json).await {
        Ok(_) => Ok(draft.clone()),
        Err(e) => {
            tracing::error!(%e);
            Err(DraftsApiError::WriteFailed.value())
        }
    }
}

pub async fn clear_draft(store: &DraftStore) -> Result<(), ApiError> {
    match tokio::fs::remove_file(store.slot_path()).await {
        Ok(_) => Ok(()),
        Err(e) if e.kind() == ErrorKind::NotFound => Ok(()),
        Err(e) => {
            tracing::error!(%e);
            Err(DraftsApiError::DeleteFailed.value())
        }
    }
}
