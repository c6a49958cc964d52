//! Stable occurrence identifiers.

use std::collections::HashMap;

use lunical_occurrence::Occurrence;
use uuid::Uuid;

/// Namespace for name-based occurrence UUIDs.
const UID_NAMESPACE: Uuid = Uuid::from_u128(0x6c75_6e69_6361_4c00_8000_0000_0000_0001);

/// Suffix appended to every UID.
pub const UID_DOMAIN: &str = "lunical";

fn occurrence_uuid(occurrence: &Occurrence<'_>) -> Uuid {
    let name = format!(
        "{}\u{1f}{}",
        occurrence.event().identity_key(),
        occurrence.solar_date()
    );
    Uuid::new_v5(&UID_NAMESPACE, name.as_bytes())
}

/// Returns the UID of an occurrence.
///
/// Derived only from the event's identity and the solar date, so the same
/// event on the same day always gets the same UID and re-importing a
/// regenerated file updates entries instead of duplicating them.
pub fn occurrence_uid(occurrence: &Occurrence<'_>) -> String {
    format!("{}@{UID_DOMAIN}", occurrence_uuid(occurrence))
}

/// Hands out UIDs that are unique within one document.
///
/// The first occurrence of an identity on a date gets [`occurrence_uid`];
/// later ones with the same identity and date get `-2`, `-3`, ... in the
/// order they are allocated.
#[derive(Debug, Default)]
pub(crate) struct UidAllocator {
    seen: HashMap<Uuid, u32>,
}

impl UidAllocator {
    pub(crate) fn allocate(&mut self, occurrence: &Occurrence<'_>) -> String {
        let uuid = occurrence_uuid(occurrence);
        let count = self.seen.entry(uuid).or_insert(0);
        *count += 1;
        match *count {
            1 => format!("{uuid}@{UID_DOMAIN}"),
            n => format!("{uuid}-{n}@{UID_DOMAIN}"),
        }
    }
}
