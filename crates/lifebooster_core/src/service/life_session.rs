//! Single-writer container for the live document.
//!
//! # Responsibility
//! - Load (or create) the document once at startup.
//! - Swap in each successful reducer result and persist it.
//!
//! # Invariants
//! - A rejected reducer leaves the held document untouched.
//! - Persistence is fire-and-forget: save failures are logged and never
//!   returned, so the in-memory document stays authoritative.

use crate::locale::{generate_user_id, Environment};
use crate::model::document::Document;
use crate::model::ids::DayBucket;
use crate::reducer::profile::{factory_reset, touch_last_active};
use crate::reducer::ReduceResult;
use crate::store::{DocumentStore, LoadOutcome, UpgradeContext};
use chrono::{Local, Utc};
use log::{info, warn};

pub struct LifeSession<S: DocumentStore> {
    store: S,
    environment: Environment,
    document: Document,
}

impl<S: DocumentStore> LifeSession<S> {
    /// Loads the stored document, or builds a first-run one when the slot is
    /// empty or corrupt, and writes it back.
    ///
    /// When the slot cannot be read at all the session starts from a fresh
    /// document but leaves the slot untouched.
    pub fn open(store: S, environment: Environment) -> Self {
        let now = Utc::now();
        let ctx = UpgradeContext {
            now,
            environment: &environment,
        };
        let outcome = store.load_outcome(&ctx);
        let write_back = !matches!(outcome, LoadOutcome::Unreadable);
        let document = match outcome {
            LoadOutcome::Loaded(document) => touch_last_active(&document, now),
            LoadOutcome::Empty | LoadOutcome::Corrupt | LoadOutcome::Unreadable => {
                info!("event=session_open module=service status=fresh write_back={write_back}");
                Document::initial(now, environment.detect_currency(), generate_user_id())
            }
        };

        let session = Self {
            store,
            environment,
            document,
        };
        if write_back {
            session.persist();
        }
        session
    }

    pub fn document(&self) -> &Document {
        &self.document
    }

    pub fn environment(&self) -> &Environment {
        &self.environment
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    /// Current local calendar day.
    pub fn today(&self) -> DayBucket {
        Local::now().date_naive()
    }

    /// Runs `reducer` against the current document.
    ///
    /// On success the result replaces the held document and is saved.
    ///
    /// # Errors
    /// - Whatever the reducer rejects with; the document is unchanged.
    pub fn apply<F>(&mut self, reducer: F) -> ReduceResult<&Document>
    where
        F: FnOnce(&Document) -> ReduceResult<Document>,
    {
        match reducer(&self.document) {
            Ok(next) => {
                self.document = next;
                info!("event=doc_apply module=service status=ok");
                self.persist();
                Ok(&self.document)
            }
            Err(err) => {
                warn!("event=doc_apply module=service status=rejected error={err}");
                Err(err)
            }
        }
    }

    /// Same as [`Self::apply`] for reducers that cannot fail.
    pub fn update<F>(&mut self, reducer: F) -> &Document
    where
        F: FnOnce(&Document) -> Document,
    {
        self.document = reducer(&self.document);
        info!("event=doc_apply module=service status=ok");
        self.persist();
        &self.document
    }

    /// Clears the slot and starts over with a fresh first-run document.
    pub fn factory_reset(&mut self) -> &Document {
        if let Err(err) = self.store.clear() {
            warn!("event=doc_clear module=service status=error error={err}");
        }
        self.document = factory_reset(&self.environment, Utc::now());
        info!("event=factory_reset module=service status=ok");
        self.persist();
        &self.document
    }

    fn persist(&self) {
        if let Err(err) = self.store.save(&self.document) {
            warn!("event=doc_save module=service status=error error={err}");
        }
    }
}
