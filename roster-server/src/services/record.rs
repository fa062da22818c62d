//! Record Service

use shared::{Record, RecordCreate};

use crate::store::DocumentStore;
use crate::utils::time::parse_record_date;
use crate::utils::{AppError, AppResult};

#[derive(Clone, Debug)]
pub struct RecordService {
    store: DocumentStore,
}

impl RecordService {
    pub fn new(store: DocumentStore) -> Self {
        Self { store }
    }

    /// Append a record to the member's history
    ///
    /// `date` defaults to now when absent or blank.
    pub async fn append(&self, member_id: &str, payload: RecordCreate) -> AppResult<Record> {
        let date = match payload.date.as_deref().filter(|d| !d.trim().is_empty()) {
            Some(date) => parse_record_date(date)?,
            None => shared::util::now_iso(),
        };

        let mut tx = self.store.begin().await?;
        let member = tx
            .document_mut()
            .find_mut(member_id)
            .ok_or_else(|| AppError::not_found(member_id))?;

        let record = Record {
            id: shared::util::new_id(),
            title: payload.title,
            description: payload.description,
            date,
        };
        member.past_records.push(record.clone());
        tx.commit().await?;

        tracing::info!(member_id = %member_id, record_id = %record.id, "Record appended");
        Ok(record)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::{MemberService, PhotoManager};
    use shared::MemberFields;

    async fn services(root: &std::path::Path) -> (MemberService, RecordService) {
        let store = DocumentStore::open(root.join("data.json")).await.unwrap();
        let photos = PhotoManager::new(root.join("uploads"), 1024);
        (
            MemberService::new(store.clone(), photos),
            RecordService::new(store),
        )
    }

    fn payload(title: &str, date: Option<&str>) -> RecordCreate {
        RecordCreate {
            title: title.to_string(),
            description: "desc".to_string(),
            date: date.map(str::to_string),
        }
    }

    #[tokio::test]
    async fn test_append_record_scenario() {
        let tmp = tempfile::tempdir().unwrap();
        let (members, records) = services(tmp.path()).await;

        let rex = members
            .create(
                MemberFields {
                    name: Some("Rex".into()),
                    description: Some("d".into()),
                    specialty: Some("s".into()),
                    weak_point: Some("w".into()),
                },
                None,
            )
            .await
            .unwrap();

        let record = records
            .append(&rex.id, payload("Match 1", Some("2024-01-01")))
            .await
            .unwrap();
        assert_eq!(record.title, "Match 1");
        assert_eq!(record.description, "desc");
        assert_eq!(record.date, "2024-01-01");

        let listed = members.list().await.unwrap();
        assert_eq!(listed.len(), 1);
        assert_eq!(listed[0].past_records, vec![record]);
    }

    #[tokio::test]
    async fn test_append_keeps_insertion_order() {
        let tmp = tempfile::tempdir().unwrap();
        let (members, records) = services(tmp.path()).await;
        let m = members.create(MemberFields::named("A"), None).await.unwrap();

        records
            .append(&m.id, payload("later", Some("2024-06-01")))
            .await
            .unwrap();
        records
            .append(&m.id, payload("earlier", Some("2023-01-01")))
            .await
            .unwrap();

        let titles: Vec<_> = members.list().await.unwrap()[0]
            .past_records
            .iter()
            .map(|r| r.title.clone())
            .collect();
        assert_eq!(titles, vec!["later", "earlier"]);
    }

    #[tokio::test]
    async fn test_append_defaults_date_to_now() {
        let tmp = tempfile::tempdir().unwrap();
        let (members, records) = services(tmp.path()).await;
        let m = members.create(MemberFields::named("A"), None).await.unwrap();

        let record = records.append(&m.id, payload("t", None)).await.unwrap();
        assert!(chrono::DateTime::parse_from_rfc3339(&record.date).is_ok());
    }

    #[tokio::test]
    async fn test_append_blank_date_defaults_to_now() {
        let tmp = tempfile::tempdir().unwrap();
        let (members, records) = services(tmp.path()).await;
        let m = members.create(MemberFields::named("A"), None).await.unwrap();

        let record = records.append(&m.id, payload("t", Some("   "))).await.unwrap();
        assert!(chrono::DateTime::parse_from_rfc3339(&record.date).is_ok());
    }

    #[tokio::test]
    async fn test_append_to_unknown_member() {
        let tmp = tempfile::tempdir().unwrap();
        let (members, records) = services(tmp.path()).await;
        members.create(MemberFields::named("A"), None).await.unwrap();
        let before = members.list().await.unwrap();

        let result = records.append("missing", payload("t", None)).await;
        assert!(matches!(result, Err(AppError::NotFound(_))));
        assert_eq!(members.list().await.unwrap(), before);
    }

    #[tokio::test]
    async fn test_append_rejects_bad_date() {
        let tmp = tempfile::tempdir().unwrap();
        let (members, records) = services(tmp.path()).await;
        let m = members.create(MemberFields::named("A"), None).await.unwrap();

        let result = records.append(&m.id, payload("t", Some("someday"))).await;
        assert!(matches!(result, Err(AppError::Validation(_))));
        assert!(members.list().await.unwrap()[0].past_records.is_empty());
    }
}
