use super::CatalogEvent;
use crate::query_cache::FetchTicket;

use std::sync::Arc;
use tokio::sync::mpsc::UnboundedSender;
use tripane_catalog::Catalog;
use tripane_core::{CandidateId, ExecuteRequest, PaneIndex, QueryKey};

pub(super) fn spawn_fetch(catalog: Arc<dyn Catalog>, ticket: FetchTicket, tx: UnboundedSender<CatalogEvent>) {
    tokio::spawn(async move {
        let result = match &ticket.key {
            QueryKey::Children(parent) => catalog.list_children(parent).await,
            QueryKey::Actions(item) => catalog.list_actions(item).await,
            QueryKey::Indirects { item, action } => catalog.list_indirects(item, action).await,
        };

        if let Err(e) = &result {
            tracing::warn!(key = %ticket.key, error = %e, "fetch failed");
        }
        let result = result.map_err(|e| e.to_string());
        if tx.send(CatalogEvent::Fetched { ticket, result }).is_err() {
            tracing::debug!("runtime gone, dropping fetch result");
        }
    });
}

pub(super) fn spawn_parent_lookup(
    catalog: Arc<dyn Catalog>, pane: PaneIndex, child: CandidateId, tx: UnboundedSender<CatalogEvent>,
) {
    tokio::spawn(async move {
        let result = catalog.parent_of(&child).await.map_err(|e| e.to_string());
        if tx.send(CatalogEvent::ParentResolved { pane, child, result }).is_err() {
            tracing::debug!("runtime gone, dropping parent lookup");
        }
    });
}

pub(super) fn spawn_execute(catalog: Arc<dyn Catalog>, request: ExecuteRequest, tx: UnboundedSender<CatalogEvent>) {
    tokio::spawn(async move {
        let result = catalog.execute(&request).await.map_err(|e| e.to_string());
        if tx.send(CatalogEvent::Executed { request, result }).is_err() {
            tracing::debug!("runtime gone, dropping execute result");
        }
    });
}
