//! Cliente HTTP do armazenamento remoto de documentos.
//!
//! Cada usuário possui coleções próprias, endereçadas por um
//! identificador opaco: `/v1/apps/{app}/users/{user}/{coleção}`.
//! O servidor atribui o timestamp de criação; o cliente atribui o id
//! do documento. Falhas de persistência nunca derrubam uma sessão —
//! o chamador as exibe como aviso transitório.

use reqwest::Client;
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::time::Duration;
use uuid::Uuid;

use super::error::StoreError;
use super::types::{
    sort_newest_first, InterviewRecord, ListResponse, SaveAck, SavedDocument, StarRecord,
};

/// Coleção de entrevistas salvas.
pub const INTERVIEWS: &str = "interviews";
/// Coleção de respostas STAR salvas.
pub const STAR_ANSWERS: &str = "star_answers";

/// Corpo enviado em um save: id do cliente + campos do registro.
#[derive(Serialize)]
struct SaveRequest<'a, T: Serialize> {
    id: &'a str,
    #[serde(flatten)]
    record: &'a T,
}

pub struct StoreClient {
    client: Client,
    base_url: String,
    app_id: String,
    user_id: String,
}

impl StoreClient {
    pub fn new(base_url: String, app_id: String, user_id: String) -> Self {
        let client = Client::builder()
            .connect_timeout(Duration::from_secs(10))
            .timeout(Duration::from_secs(30))
            .build()
            .expect("failed to build HTTP client");
        Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
            app_id,
            user_id,
        }
    }

    fn collection_url(&self, collection: &str) -> String {
        format!(
            "{}/v1/apps/{}/users/{}/{collection}",
            self.base_url, self.app_id, self.user_id
        )
    }

    /// Persiste um registro na coleção. O servidor responde com o id e
    /// o timestamp que atribuiu ao documento.
    pub async fn save<T: Serialize>(
        &self,
        collection: &str,
        record: &T,
    ) -> Result<SaveAck, StoreError> {
        let id = Uuid::new_v4().to_string();
        let body = SaveRequest { id: &id, record };
        let response = self
            .client
            .post(self.collection_url(collection))
            .json(&body)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let message = response
                .text()
                .await
                .unwrap_or_else(|_| "unknown error".to_string());
            return Err(StoreError::ApiError {
                status: status.as_u16(),
                message,
            });
        }

        let body = response.text().await?;
        serde_json::from_str::<SaveAck>(&body).map_err(|e| StoreError::ParseError(e.to_string()))
    }

    /// Lista os documentos da coleção, mais recentes primeiro.
    pub async fn list<T: DeserializeOwned>(
        &self,
        collection: &str,
    ) -> Result<Vec<SavedDocument<T>>, StoreError> {
        let response = self
            .client
            .get(self.collection_url(collection))
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let message = response
                .text()
                .await
                .unwrap_or_else(|_| "unknown error".to_string());
            return Err(StoreError::ApiError {
                status: status.as_u16(),
                message,
            });
        }

        let body = response.text().await?;
        let list = serde_json::from_str::<ListResponse<T>>(&body)
            .map_err(|e| StoreError::ParseError(e.to_string()))?;
        let mut documents = list.documents;
        sort_newest_first(&mut documents);
        Ok(documents)
    }

    pub async fn save_interview(&self, record: &InterviewRecord) -> Result<SaveAck, StoreError> {
        self.save(INTERVIEWS, record).await
    }

    pub async fn list_interviews(&self) -> Result<Vec<SavedDocument<InterviewRecord>>, StoreError> {
        self.list(INTERVIEWS).await
    }

    pub async fn save_star_answer(&self, record: &StarRecord) -> Result<SaveAck, StoreError> {
        self.save(STAR_ANSWERS, record).await
    }

    pub async fn list_star_answers(&self) -> Result<Vec<SavedDocument<StarRecord>>, StoreError> {
        self.list(STAR_ANSWERS).await
    }
}
