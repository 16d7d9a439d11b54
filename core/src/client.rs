//! Catalog client: request building, response parsing, and the accessors
//! that tie the two together through a [`Transport`].
//!
//! # Design
//! `Client` holds only a base URL, a user agent and its transport, and
//! carries no mutable state between calls. Each fetch is split into
//! `build_catalog_request`, which produces an `HttpRequest`, and
//! `parse_catalog`, which consumes an `HttpResponse`. Both halves are pure;
//! `get_catalog` and the per-catalog accessors run them around a single
//! transport round-trip. Nothing is retried or cached.

use std::fmt;
use std::time::Duration;

use crate::catalog::{Catalog, CatalogKind, ScryfallError};
use crate::config::ClientBuilder;
use crate::error::ApiError;
use crate::http::{HttpRequest, HttpResponse};
use crate::transport::{Transport, UreqTransport};

/// Client for the `/catalog/*` endpoints.
///
/// Immutable once built. It can be shared across threads whenever its
/// transport can, and independent calls may run concurrently.
#[derive(Clone)]
pub struct Client<T = UreqTransport> {
    base_url: String,
    user_agent: String,
    transport: T,
}

impl Client<UreqTransport> {
    /// A client for the production API with default settings.
    pub fn new() -> Result<Self, ApiError> {
        ClientBuilder::new().build()
    }

    pub fn builder() -> ClientBuilder {
        ClientBuilder::new()
    }
}

impl<T> Client<T> {
    /// `base_url` must already be validated and free of trailing slashes.
    pub(crate) fn from_parts(base_url: String, user_agent: String, transport: T) -> Self {
        Self {
            base_url,
            user_agent,
            transport,
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn user_agent(&self) -> &str {
        &self.user_agent
    }

    pub fn transport(&self) -> &T {
        &self.transport
    }

    pub fn build_catalog_request(&self, kind: CatalogKind) -> HttpRequest {
        HttpRequest {
            url: format!("{}/catalog/{}", self.base_url, kind.path_segment()),
            headers: vec![
                ("Accept".to_string(), "application/json".to_string()),
                ("User-Agent".to_string(), self.user_agent.clone()),
            ],
            timeout: None,
        }
    }

    pub fn parse_catalog(&self, response: HttpResponse) -> Result<Catalog, ApiError> {
        check_status(&response)?;
        let catalog: Catalog = serde_json::from_str(&response.body)
            .map_err(|e| ApiError::DeserializationError(e.to_string()))?;

        if !catalog.is_consistent() {
            tracing::warn!(
                uri = %catalog.uri,
                total_values = catalog.total_values,
                received = catalog.data.len(),
                "catalog count does not match entries received"
            );
        }
        Ok(catalog)
    }
}

impl<T: Transport> Client<T> {
    /// Fetch any catalog by kind.
    pub fn get_catalog(&self, kind: CatalogKind) -> Result<Catalog, ApiError> {
        self.fetch(kind, self.build_catalog_request(kind))
    }

    /// Fetch a catalog, abandoning the request once `timeout` elapses. The
    /// deadline applies to this call only and takes precedence over the
    /// client-wide timeout.
    pub fn get_catalog_with_timeout(
        &self,
        kind: CatalogKind,
        timeout: Duration,
    ) -> Result<Catalog, ApiError> {
        let mut request = self.build_catalog_request(kind);
        request.timeout = Some(timeout);
        self.fetch(kind, request)
    }

    fn fetch(&self, kind: CatalogKind, request: HttpRequest) -> Result<Catalog, ApiError> {
        tracing::debug!(url = %request.url, timeout = ?request.timeout, "fetching catalog");

        let response = self.transport.execute(request)?;
        tracing::debug!(catalog = %kind, status = response.status, "catalog response");

        self.parse_catalog(response)
    }

    pub fn get_card_names_catalog(&self) -> Result<Catalog, ApiError> {
        self.get_catalog(CatalogKind::CardNames)
    }

    pub fn get_artist_names_catalog(&self) -> Result<Catalog, ApiError> {
        self.get_catalog(CatalogKind::ArtistNames)
    }

    pub fn get_word_bank_catalog(&self) -> Result<Catalog, ApiError> {
        self.get_catalog(CatalogKind::WordBank)
    }

    pub fn get_supertypes_catalog(&self) -> Result<Catalog, ApiError> {
        self.get_catalog(CatalogKind::Supertypes)
    }

    pub fn get_card_types_catalog(&self) -> Result<Catalog, ApiError> {
        self.get_catalog(CatalogKind::CardTypes)
    }

    pub fn get_artifact_types_catalog(&self) -> Result<Catalog, ApiError> {
        self.get_catalog(CatalogKind::ArtifactTypes)
    }

    pub fn get_battle_types_catalog(&self) -> Result<Catalog, ApiError> {
        self.get_catalog(CatalogKind::BattleTypes)
    }

    pub fn get_creature_types_catalog(&self) -> Result<Catalog, ApiError> {
        self.get_catalog(CatalogKind::CreatureTypes)
    }

    pub fn get_enchantment_types_catalog(&self) -> Result<Catalog, ApiError> {
        self.get_catalog(CatalogKind::EnchantmentTypes)
    }

    pub fn get_land_types_catalog(&self) -> Result<Catalog, ApiError> {
        self.get_catalog(CatalogKind::LandTypes)
    }

    pub fn get_planeswalker_types_catalog(&self) -> Result<Catalog, ApiError> {
        self.get_catalog(CatalogKind::PlaneswalkerTypes)
    }

    pub fn get_spell_types_catalog(&self) -> Result<Catalog, ApiError> {
        self.get_catalog(CatalogKind::SpellTypes)
    }

    pub fn get_powers_catalog(&self) -> Result<Catalog, ApiError> {
        self.get_catalog(CatalogKind::Powers)
    }

    pub fn get_toughnesses_catalog(&self) -> Result<Catalog, ApiError> {
        self.get_catalog(CatalogKind::Toughnesses)
    }

    pub fn get_loyalties_catalog(&self) -> Result<Catalog, ApiError> {
        self.get_catalog(CatalogKind::Loyalties)
    }

    pub fn get_watermarks_catalog(&self) -> Result<Catalog, ApiError> {
        self.get_catalog(CatalogKind::Watermarks)
    }

    pub fn get_keyword_abilities_catalog(&self) -> Result<Catalog, ApiError> {
        self.get_catalog(CatalogKind::KeywordAbilities)
    }

    pub fn get_keyword_actions_catalog(&self) -> Result<Catalog, ApiError> {
        self.get_catalog(CatalogKind::KeywordActions)
    }

    pub fn get_ability_words_catalog(&self) -> Result<Catalog, ApiError> {
        self.get_catalog(CatalogKind::AbilityWords)
    }

    pub fn get_flavor_words_catalog(&self) -> Result<Catalog, ApiError> {
        self.get_catalog(CatalogKind::FlavorWords)
    }
}

impl<T> fmt::Debug for Client<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Client")
            .field("base_url", &self.base_url)
            .field("user_agent", &self.user_agent)
            .finish_non_exhaustive()
    }
}

/// Map non-success statuses to the matching `ApiError` variant, preferring
/// the server's own error object when the body carries one.
fn check_status(response: &HttpResponse) -> Result<(), ApiError> {
    if response.is_success() {
        return Ok(());
    }
    if let Ok(err) = serde_json::from_str::<ScryfallError>(&response.body) {
        return Err(ApiError::Scryfall(err));
    }
    if response.status == 404 {
        return Err(ApiError::NotFound);
    }
    Err(ApiError::HttpError {
        status: response.status,
        body: response.body.clone(),
    })
}
