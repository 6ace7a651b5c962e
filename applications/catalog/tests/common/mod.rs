//! Common test utilities and fixtures
#![allow(dead_code)]

use async_trait::async_trait;
use serde_json::{Map, Value};
use setlist_catalog::CatalogState;
use setlist_core::{
    error::{CatalogError, Result},
    storage::{Collection, DocumentStore, Filter},
    traits::FileStore,
    types::{DocumentId, MusicTrack, PlaylistFields, TrackFields},
};
use setlist_storage::MemoryDocumentStore;
use std::collections::HashSet;
use std::sync::{
    atomic::{AtomicBool, AtomicUsize, Ordering},
    Arc, Mutex,
};

/// In-memory document store that counts calls and can fail record deletes
#[derive(Default)]
pub struct ProbeStore {
    pub inner: MemoryDocumentStore,
    pub calls: AtomicUsize,
    pub fail_deletes: AtomicBool,
}

impl ProbeStore {
    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    fn touch(&self) {
        self.calls.fetch_add(1, Ordering::SeqCst);
    }
}

#[async_trait]
impl DocumentStore for ProbeStore {
    async fn insert_one(&self, collection: Collection, id: DocumentId, document: Value) -> Result<()> {
        self.touch();
        self.inner.insert_one(collection, id, document).await
    }

    async fn find_by_id(&self, collection: Collection, id: DocumentId) -> Result<Option<Value>> {
        self.touch();
        self.inner.find_by_id(collection, id).await
    }

    async fn find(&self, collection: Collection, filter: &Filter) -> Result<Vec<Value>> {
        self.touch();
        self.inner.find(collection, filter).await
    }

    async fn update_by_id(
        &self,
        collection: Collection,
        id: DocumentId,
        fields: Map<String, Value>,
    ) -> Result<bool> {
        self.touch();
        self.inner.update_by_id(collection, id, fields).await
    }

    async fn delete_by_id(&self, collection: Collection, id: DocumentId) -> Result<bool> {
        self.touch();
        if self.fail_deletes.load(Ordering::SeqCst) {
            return Err(CatalogError::internal("simulated store outage"));
        }
        self.inner.delete_by_id(collection, id).await
    }

    async fn find_by_ids(&self, collection: Collection, ids: &[DocumentId]) -> Result<Vec<Value>> {
        self.touch();
        self.inner.find_by_ids(collection, ids).await
    }
}

/// File store that keeps links in memory and can fail deletes
#[derive(Default)]
pub struct ProbeFileStore {
    pub files: Mutex<HashSet<String>>,
    pub fail_deletes: AtomicBool,
}

impl ProbeFileStore {
    pub fn contains(&self, link: &str) -> bool {
        self.files.lock().unwrap().contains(link)
    }
}

#[async_trait]
impl FileStore for ProbeFileStore {
    async fn save(&self, _bytes: &[u8], name: &str) -> Result<String> {
        let link = format!("files/{name}");
        self.files.lock().unwrap().insert(link.clone());
        Ok(link)
    }

    async fn delete(&self, link: &str) -> Result<()> {
        if self.fail_deletes.load(Ordering::SeqCst) {
            return Err(CatalogError::storage("simulated disk failure"));
        }
        if self.files.lock().unwrap().remove(link) {
            Ok(())
        } else {
            Err(CatalogError::storage(format!("no such file: {link}")))
        }
    }
}

/// Catalog wired over probe collaborators
pub struct TestCatalog {
    pub state: CatalogState,
    pub documents: Arc<ProbeStore>,
    pub files: Arc<ProbeFileStore>,
}

impl TestCatalog {
    pub fn new() -> Self {
        let documents = Arc::new(ProbeStore::default());
        let files = Arc::new(ProbeFileStore::default());
        let state = CatalogState::new(documents.clone(), files.clone());
        Self {
            state,
            documents,
            files,
        }
    }

    /// Upload a file and create a track pointing at it
    pub async fn track(&self, title: &str) -> MusicTrack {
        let link = self
            .state
            .tracks
            .upload(b"fake audio data", &format!("{title}.mp3"))
            .await
            .expect("upload");
        let mut fields = fixtures::track_fields(title);
        fields.link = link;
        self.state.tracks.create(fields).await.expect("create track")
    }
}

pub mod fixtures {
    use super::*;

    pub fn track_fields(title: &str) -> TrackFields {
        TrackFields {
            title: title.to_string(),
            artist: "Nightbus".to_string(),
            album: "Late Shifts".to_string(),
            genre: "lo-fi".to_string(),
            year: 2021,
            duration: 184,
            link: format!("files/{title}.mp3"),
        }
    }

    pub fn playlist_fields(title: &str, track_ids: Option<Vec<String>>) -> PlaylistFields {
        PlaylistFields {
            title: title.to_string(),
            description: format!("{title} description"),
            genre: "lo-fi".to_string(),
            track_ids,
        }
    }

    pub fn ids_of(tracks: &[&MusicTrack]) -> Vec<String> {
        tracks.iter().map(|t| t.id.to_string()).collect()
    }
}
