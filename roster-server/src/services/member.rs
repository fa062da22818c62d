//! Member Service
//!
//! Every mutation runs inside one store transaction: load, mutate in memory,
//! photo I/O, save. A `NotFound` drops the transaction so nothing is written.

use shared::{Member, MemberFields};

use super::{PhotoInput, PhotoManager};
use crate::store::DocumentStore;
use crate::utils::{AppError, AppResult};

#[derive(Clone, Debug)]
pub struct MemberService {
    store: DocumentStore,
    photos: PhotoManager,
}

impl MemberService {
    pub fn new(store: DocumentStore, photos: PhotoManager) -> Self {
        Self { store, photos }
    }

    /// All members in storage order
    pub async fn list(&self) -> AppResult<Vec<Member>> {
        Ok(self.store.load().await?.members)
    }

    pub async fn create(
        &self,
        fields: MemberFields,
        photo: Option<PhotoInput>,
    ) -> AppResult<Member> {
        let mut tx = self.store.begin().await?;

        let photo_path = match &photo {
            Some(input) => Some(self.photos.store_input(input).await?),
            None => None,
        };

        let member = Member::new(shared::util::new_id(), fields, photo_path);
        tx.document_mut().members.push(member.clone());
        tx.commit().await?;

        tracing::info!(member_id = %member.id, name = %member.name, "Member created");
        Ok(member)
    }

    /// Fill-if-present merge; a new photo replaces (and deletes) the old one
    pub async fn update(
        &self,
        id: &str,
        fields: MemberFields,
        photo: Option<PhotoInput>,
    ) -> AppResult<Member> {
        let mut tx = self.store.begin().await?;

        let old_photo = tx
            .document()
            .find(id)
            .ok_or_else(|| AppError::not_found(id))?
            .photo
            .clone();

        let new_photo = match &photo {
            Some(input) => {
                // Reject a bad upload before the old photo is gone
                let decoded = self.photos.decode(input)?;
                if let Some(old) = &old_photo {
                    self.photos.remove(old).await;
                }
                Some(self.photos.store_decoded(&decoded).await?)
            }
            None => old_photo,
        };

        let member = tx
            .document_mut()
            .find_mut(id)
            .ok_or_else(|| AppError::not_found(id))?;
        member.merge(fields);
        member.photo = new_photo;
        let updated = member.clone();

        tx.commit().await?;

        tracing::info!(member_id = %updated.id, "Member updated");
        Ok(updated)
    }

    /// Removes the member and its photo file
    pub async fn delete(&self, id: &str) -> AppResult<()> {
        let mut tx = self.store.begin().await?;

        let member = tx
            .document_mut()
            .remove(id)
            .ok_or_else(|| AppError::not_found(id))?;

        if let Some(photo) = &member.photo {
            self.photos.remove(photo).await;
        }

        tx.commit().await?;

        tracing::info!(member_id = %id, "Member deleted");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::photo::UPLOADS_PREFIX;
    use base64::Engine;
    use base64::engine::general_purpose::STANDARD;
    use std::path::Path;

    async fn service(root: &Path) -> MemberService {
        let store = DocumentStore::open(root.join("data.json")).await.unwrap();
        let photos = PhotoManager::new(root.join("uploads"), 1024 * 1024);
        photos.initialize().await.unwrap();
        MemberService::new(store, photos)
    }

    fn rex() -> MemberFields {
        MemberFields {
            name: Some("Rex".to_string()),
            description: Some("d".to_string()),
            specialty: Some("s".to_string()),
            weak_point: Some("w".to_string()),
        }
    }

    fn data_uri(bytes: &[u8]) -> PhotoInput {
        PhotoInput::DataUri(format!("data:image/jpeg;base64,{}", STANDARD.encode(bytes)))
    }

    fn photo_file(root: &Path, photo: &str) -> std::path::PathBuf {
        root.join("uploads")
            .join(photo.strip_prefix(UPLOADS_PREFIX).unwrap())
    }

    #[tokio::test]
    async fn test_create_without_photo() {
        let tmp = tempfile::tempdir().unwrap();
        let members = service(tmp.path()).await;

        let created = members.create(rex(), None).await.unwrap();
        assert!(!created.id.is_empty());
        assert_eq!(created.name, "Rex");
        assert!(created.photo.is_none());
        assert!(created.past_records.is_empty());

        let listed = members.list().await.unwrap();
        assert_eq!(listed, vec![created]);
    }

    #[tokio::test]
    async fn test_create_with_photo_writes_file() {
        let tmp = tempfile::tempdir().unwrap();
        let members = service(tmp.path()).await;

        let created = members
            .create(rex(), Some(data_uri(b"jpeg-bytes")))
            .await
            .unwrap();
        let photo = created.photo.unwrap();
        assert_eq!(std::fs::read(photo_file(tmp.path(), &photo)).unwrap(), b"jpeg-bytes");
    }

    #[tokio::test]
    async fn test_update_merges_present_fields_only() {
        let tmp = tempfile::tempdir().unwrap();
        let members = service(tmp.path()).await;

        let created = members
            .create(rex(), Some(data_uri(b"one")))
            .await
            .unwrap();
        let updated = members
            .update(&created.id, MemberFields::named("Max"), None)
            .await
            .unwrap();

        assert_eq!(updated.name, "Max");
        assert_eq!(updated.description, "d");
        assert_eq!(updated.specialty, "s");
        assert_eq!(updated.weak_point, "w");
        assert_eq!(updated.photo, created.photo);
        assert_eq!(members.list().await.unwrap(), vec![updated]);
    }

    #[tokio::test]
    async fn test_update_replaces_photo() {
        let tmp = tempfile::tempdir().unwrap();
        let members = service(tmp.path()).await;

        let created = members
            .create(rex(), Some(data_uri(b"old")))
            .await
            .unwrap();
        let old_photo = created.photo.clone().unwrap();

        let updated = members
            .update(&created.id, MemberFields::default(), Some(data_uri(b"new")))
            .await
            .unwrap();
        let new_photo = updated.photo.unwrap();

        assert_ne!(old_photo, new_photo);
        assert!(!photo_file(tmp.path(), &old_photo).exists());
        assert_eq!(std::fs::read(photo_file(tmp.path(), &new_photo)).unwrap(), b"new");
    }

    #[tokio::test]
    async fn test_update_with_bad_photo_keeps_old_one() {
        let tmp = tempfile::tempdir().unwrap();
        let members = service(tmp.path()).await;

        let created = members
            .create(rex(), Some(data_uri(b"keep")))
            .await
            .unwrap();
        let photo = created.photo.clone().unwrap();

        let result = members
            .update(
                &created.id,
                MemberFields::named("X"),
                Some(PhotoInput::DataUri("data:image/png;base64,@@@".to_string())),
            )
            .await;
        assert!(matches!(result, Err(AppError::Upload(_))));
        assert!(photo_file(tmp.path(), &photo).exists());
        assert_eq!(members.list().await.unwrap(), vec![created]);
    }

    #[tokio::test]
    async fn test_update_unknown_member_leaves_document_unchanged() {
        let tmp = tempfile::tempdir().unwrap();
        let members = service(tmp.path()).await;

        let created = members.create(rex(), None).await.unwrap();
        let before = members.list().await.unwrap();

        let result = members
            .update("nope", MemberFields::named("X"), Some(data_uri(b"x")))
            .await;
        assert!(matches!(result, Err(AppError::NotFound(_))));
        assert_eq!(members.list().await.unwrap(), before);
        assert_eq!(before, vec![created]);
        // No photo was written for the failed update
        assert_eq!(std::fs::read_dir(tmp.path().join("uploads")).unwrap().count(), 0);
    }

    #[tokio::test]
    async fn test_delete_removes_member_and_photo() {
        let tmp = tempfile::tempdir().unwrap();
        let members = service(tmp.path()).await;

        let keep = members.create(MemberFields::named("Keep"), None).await.unwrap();
        let gone = members
            .create(rex(), Some(data_uri(b"bye")))
            .await
            .unwrap();
        let photo = gone.photo.clone().unwrap();

        members.delete(&gone.id).await.unwrap();

        assert!(!photo_file(tmp.path(), &photo).exists());
        assert_eq!(members.list().await.unwrap(), vec![keep]);

        assert!(matches!(
            members.delete(&gone.id).await,
            Err(AppError::NotFound(_))
        ));
    }

    #[tokio::test]
    async fn test_delete_tolerates_missing_photo_file() {
        let tmp = tempfile::tempdir().unwrap();
        let members = service(tmp.path()).await;

        let created = members
            .create(rex(), Some(data_uri(b"x")))
            .await
            .unwrap();
        std::fs::remove_file(photo_file(tmp.path(), created.photo.as_deref().unwrap())).unwrap();

        members.delete(&created.id).await.unwrap();
        assert!(members.list().await.unwrap().is_empty());
    }
}
