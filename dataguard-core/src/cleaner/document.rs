//! PDF metadata removal.
//!
//! Drops the trailer's document information dictionary and the XMP `/Metadata` streams
//! attached to the catalog and to each page, then prunes whatever became unreachable.

use log::debug;
use lopdf::{Document, Object, ObjectId};

use crate::errors::CleanError;

const KIND: &str = "PDF";

fn strip_metadata_entry(doc: &mut Document, id: ObjectId) -> bool {
    match doc.get_object_mut(id).and_then(Object::as_dict_mut) {
        Ok(dict) => dict.remove(b"Metadata").is_some(),
        Err(_) => false,
    }
}

pub(super) fn clean_pdf(bytes: &[u8]) -> Result<Vec<u8>, CleanError> {
    let mut doc = Document::load_mem(bytes).map_err(|e| CleanError::malformed(KIND, e))?;

    let had_info = doc.trailer.remove(b"Info").is_some();

    let mut stripped_streams = 0;
    if let Ok(root_id) = doc.trailer.get(b"Root").and_then(Object::as_reference) {
        if strip_metadata_entry(&mut doc, root_id) {
            stripped_streams += 1;
        }
    }
    let page_ids: Vec<ObjectId> = doc.get_pages().into_values().collect();
    for page_id in page_ids {
        if strip_metadata_entry(&mut doc, page_id) {
            stripped_streams += 1;
        }
    }

    let pruned = doc.prune_objects();
    debug!(
        "PDF cleaned: info dictionary removed: {}, metadata streams removed: {}, objects pruned: {}",
        had_info,
        stripped_streams,
        pruned.len()
    );

    let mut out = Vec::new();
    doc.save_to(&mut out).map_err(|e| CleanError::malformed(KIND, e))?;
    Ok(out)
}
