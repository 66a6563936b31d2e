//! Directory collaborators — profession and club option fetching.

use async_trait::async_trait;

use crate::catalog::{DirectoryRecord, OptionSources};
use crate::error::DirectoryError;

/// Read-side collaborator for option data.
#[async_trait]
pub trait Directory: Send + Sync {
    /// Profession records in display order.
    async fn fetch_professions(&self) -> Result<Vec<DirectoryRecord>, DirectoryError>;
    /// Club records in display order.
    async fn fetch_clubs(&self) -> Result<Vec<DirectoryRecord>, DirectoryError>;
}

/// Fetch option data once at startup and freeze it into [`OptionSources`].
///
/// Professions are required — the profession select cannot render without
/// them. Clubs are optional: a failed fetch falls back to the built-in
/// roster with a warning.
pub async fn load_option_sources(directory: &dyn Directory) -> Result<OptionSources, DirectoryError> {
    let professions = directory.fetch_professions().await?;
    let clubs = match directory.fetch_clubs().await {
        Ok(clubs) => clubs,
        Err(e) => {
            tracing::warn!("Club fetch failed, using built-in roster: {}", e);
            Vec::new()
        }
    };
    tracing::info!(
        professions = professions.len(),
        clubs = clubs.len(),
        "Loaded directory options"
    );
    Ok(OptionSources::new(professions, clubs))
}

/// JSON client for the platform directory API.
pub struct HttpDirectory {
    base_url: String,
    client: reqwest::Client,
}

impl HttpDirectory {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            client: reqwest::Client::new(),
        }
    }

    fn api_url(&self, path: &str) -> String {
        format!("{}/api/{path}", self.base_url.trim_end_matches('/'))
    }

    async fn fetch_records(&self, path: &str) -> Result<Vec<DirectoryRecord>, DirectoryError> {
        let endpoint = self.api_url(path);
        let response = self
            .client
            .get(&endpoint)
            .send()
            .await
            .map_err(|e| DirectoryError::RequestFailed {
                endpoint: endpoint.clone(),
                reason: e.to_string(),
            })?;

        if !response.status().is_success() {
            return Err(DirectoryError::InvalidResponse {
                endpoint,
                reason: format!("status {}", response.status()),
            });
        }
        response
            .json()
            .await
            .map_err(|e| DirectoryError::InvalidResponse {
                endpoint,
                reason: e.to_string(),
            })
    }
}

#[async_trait]
impl Directory for HttpDirectory {
    async fn fetch_professions(&self) -> Result<Vec<DirectoryRecord>, DirectoryError> {
        self.fetch_records("professions").await
    }

    async fn fetch_clubs(&self) -> Result<Vec<DirectoryRecord>, DirectoryError> {
        self.fetch_records("clubs").await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct StubDirectory {
        professions: Result<Vec<DirectoryRecord>, ()>,
        clubs: Result<Vec<DirectoryRecord>, ()>,
    }

    #[async_trait]
    impl Directory for StubDirectory {
        async fn fetch_professions(&self) -> Result<Vec<DirectoryRecord>, DirectoryError> {
            self.professions
                .clone()
                .map_err(|_| DirectoryError::RequestFailed {
                    endpoint: "professions".into(),
                    reason: "down".into(),
                })
        }

        async fn fetch_clubs(&self) -> Result<Vec<DirectoryRecord>, DirectoryError> {
            self.clubs.clone().map_err(|_| DirectoryError::RequestFailed {
                endpoint: "clubs".into(),
                reason: "down".into(),
            })
        }
    }

    fn record(id: &str, name: &str) -> DirectoryRecord {
        DirectoryRecord {
            id: id.into(),
            name: name.into(),
        }
    }

    #[tokio::test]
    async fn loads_both_lists_in_fetch_order() {
        let directory = StubDirectory {
            professions: Ok(vec![record("p1", "Teacher"), record("p2", "Engineer")]),
            clubs: Ok(vec![record("c1", "Local FC")]),
        };
        let sources = load_option_sources(&directory).await.unwrap();
        assert_eq!(sources.profession_options(), vec!["Teacher", "Engineer"]);
        assert_eq!(sources.club_options(), vec!["Local FC"]);
    }

    #[tokio::test]
    async fn club_failure_falls_back_to_roster() {
        let directory = StubDirectory {
            professions: Ok(vec![record("p1", "Teacher")]),
            clubs: Err(()),
        };
        let sources = load_option_sources(&directory).await.unwrap();
        assert!(sources.club_options().contains(&"Simba SC".to_string()));
    }

    #[tokio::test]
    async fn profession_failure_propagates() {
        let directory = StubDirectory {
            professions: Err(()),
            clubs: Ok(Vec::new()),
        };
        assert!(load_option_sources(&directory).await.is_err());
    }
}
