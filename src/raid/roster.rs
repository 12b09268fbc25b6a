//! Raid Roster
//!
//! Up to 25 named raiders with roles. Supports single adds and bulk import
//! from pasted text (`name, role` per line, or bare names with a default
//! role).

use serde::{Deserialize, Serialize};

use crate::layout::{OccupantId, Role};

/// Raiders are the occupants of layout slots.
pub type RaiderId = OccupantId;

/// Default roster capacity.
pub const MAX_RAIDERS: usize = 25;

// ============================================================================
// TYPES
// ============================================================================

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Raider {
    pub id: RaiderId,
    pub name: String,
    pub role: Role,
    /// Id of the slot this raider occupies, if any.
    pub slot: Option<u32>,
}

/// Line format for [`Roster::bulk_import`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ImportFormat {
    /// `name, role` on each line (also what the raid addon exports).
    Csv,
    /// One name per line, all given the same role.
    NamesOnly(Role),
}

/// Outcome of a bulk import.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ImportReport {
    pub imported: usize,
    /// Lines that were rejected, verbatim.
    pub skipped: Vec<String>,
}

/// Errors from roster and assignment operations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RosterError {
    EmptyName,
    RosterFull(usize),
    UnknownRaider(RaiderId),
    UnknownSlot(u32),
    DuplicateRaider(RaiderId),
}

impl std::fmt::Display for RosterError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RosterError::EmptyName => write!(f, "raider name is empty"),
            RosterError::RosterFull(max) => write!(f, "roster is full ({max} raiders)"),
            RosterError::UnknownRaider(id) => write!(f, "no raider with id {id}"),
            RosterError::UnknownSlot(id) => write!(f, "no slot with id {id}"),
            RosterError::DuplicateRaider(id) => write!(f, "raider id {id} appears twice"),
        }
    }
}

impl std::error::Error for RosterError {}

// ============================================================================
// ROSTER
// ============================================================================

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Roster {
    raiders: Vec<Raider>,
    next_id: u32,
    capacity: usize,
}

impl Roster {
    pub fn new() -> Self {
        Self::with_capacity(MAX_RAIDERS)
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            raiders: Vec::new(),
            next_id: 1,
            capacity,
        }
    }

    /// Rebuild a roster from saved raiders, keeping their ids. Slot links are
    /// dropped; the caller re-seats raiders against its own layout.
    pub fn restore(raiders: Vec<Raider>) -> Result<Self, RosterError> {
        let mut roster = Self::new();
        for mut raider in raiders {
            raider.name = raider.name.trim().to_string();
            if raider.name.is_empty() {
                return Err(RosterError::EmptyName);
            }
            if roster.is_full() {
                return Err(RosterError::RosterFull(roster.capacity));
            }
            if roster.get(raider.id).is_some() {
                return Err(RosterError::DuplicateRaider(raider.id));
            }
            raider.slot = None;
            roster.next_id = roster.next_id.max(raider.id.0 + 1);
            roster.raiders.push(raider);
        }
        Ok(roster)
    }

    pub fn len(&self) -> usize {
        self.raiders.len()
    }

    pub fn is_empty(&self) -> bool {
        self.raiders.is_empty()
    }

    pub fn is_full(&self) -> bool {
        self.raiders.len() >= self.capacity
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn iter(&self) -> impl Iterator<Item = &Raider> {
        self.raiders.iter()
    }

    pub fn raiders(&self) -> &[Raider] {
        &self.raiders
    }

    pub fn get(&self, id: RaiderId) -> Option<&Raider> {
        self.raiders.iter().find(|r| r.id == id)
    }

    pub fn get_mut(&mut self, id: RaiderId) -> Option<&mut Raider> {
        self.raiders.iter_mut().find(|r| r.id == id)
    }

    pub fn count_role(&self, role: Role) -> usize {
        self.raiders.iter().filter(|r| r.role == role).count()
    }

    /// Add a raider. The name is trimmed and must not be empty.
    pub fn add(&mut self, name: &str, role: Role) -> Result<RaiderId, RosterError> {
        let name = name.trim();
        if name.is_empty() {
            return Err(RosterError::EmptyName);
        }
        if self.is_full() {
            return Err(RosterError::RosterFull(self.capacity));
        }

        let id = OccupantId(self.next_id);
        self.next_id += 1;
        self.raiders.push(Raider {
            id,
            name: name.to_string(),
            role,
            slot: None,
        });
        Ok(id)
    }

    pub fn remove(&mut self, id: RaiderId) -> Result<Raider, RosterError> {
        let index = self
            .raiders
            .iter()
            .position(|r| r.id == id)
            .ok_or(RosterError::UnknownRaider(id))?;
        Ok(self.raiders.remove(index))
    }

    /// Drop every raider. Ids keep counting up.
    pub fn clear(&mut self) {
        self.raiders.clear();
    }

    pub(crate) fn clear_slots(&mut self) {
        for raider in &mut self.raiders {
            raider.slot = None;
        }
    }

    /// Import raiders from pasted text, one per line. Blank lines are
    /// ignored; malformed lines, unknown roles and overflow past capacity
    /// are skipped and reported.
    pub fn bulk_import(&mut self, text: &str, format: ImportFormat) -> ImportReport {
        let mut report = ImportReport::default();

        for line in text.lines() {
            let trimmed = line.trim();
            if trimmed.is_empty() {
                continue;
            }

            let parsed = match format {
                ImportFormat::NamesOnly(role) => Some((trimmed, role)),
                ImportFormat::Csv => parse_csv_line(trimmed),
            };
            let Some((name, role)) = parsed else {
                log::warn!("skipping invalid roster line: {trimmed}");
                report.skipped.push(trimmed.to_string());
                continue;
            };

            match self.add(name, role) {
                Ok(_) => report.imported += 1,
                Err(e) => {
                    log::warn!("skipping roster line {trimmed:?}: {e}");
                    report.skipped.push(trimmed.to_string());
                }
            }
        }

        log::debug!(
            "imported {} raiders, skipped {}",
            report.imported,
            report.skipped.len()
        );
        report
    }
}

impl Default for Roster {
    fn default() -> Self {
        Self::new()
    }
}

/// `name, role` with exactly two comma-separated fields.
fn parse_csv_line(line: &str) -> Option<(&str, Role)> {
    let mut parts = line.split(',');
    let name = parts.next()?.trim();
    let role = parts.next()?.parse::<Role>().ok()?;
    if parts.next().is_some() {
        return None;
    }
    Some((name, role))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_add_assigns_sequential_ids() {
        let mut roster = Roster::new();
        let a = roster.add("Thrall", Role::Tank).expect("add");
        let b = roster.add("  Jaina ", Role::Ranged).expect("add");
        assert_eq!(a, OccupantId(1));
        assert_eq!(b, OccupantId(2));
        assert_eq!(roster.get(b).map(|r| r.name.as_str()), Some("Jaina"));
    }

    #[test]
    fn test_add_rejects_blank_and_overflow() {
        let mut roster = Roster::with_capacity(1);
        assert_eq!(roster.add("   ", Role::Melee), Err(RosterError::EmptyName));
        roster.add("One", Role::Melee).expect("add");
        assert_eq!(roster.add("Two", Role::Melee), Err(RosterError::RosterFull(1)));
    }

    #[test]
    fn test_remove_unknown() {
        let mut roster = Roster::new();
        assert_eq!(
            roster.remove(OccupantId(9)),
            Err(RosterError::UnknownRaider(OccupantId(9)))
        );
    }

    #[test]
    fn test_csv_import() {
        let mut roster = Roster::new();
        let text = "Garrosh, Tank\n\nAnduin,healer\nbad line\nValeera, rogue\nA,melee,extra\nRexxar, RANGED\n";
        let report = roster.bulk_import(text, ImportFormat::Csv);
        assert_eq!(report.imported, 3);
        assert_eq!(
            report.skipped,
            vec!["bad line".to_string(), "Valeera, rogue".to_string(), "A,melee,extra".to_string()]
        );
        assert_eq!(roster.count_role(Role::Tank), 1);
        assert_eq!(roster.count_role(Role::Healer), 1);
        assert_eq!(roster.count_role(Role::Ranged), 1);
    }

    #[test]
    fn test_names_only_import_respects_capacity() {
        let mut roster = Roster::with_capacity(2);
        let report = roster.bulk_import("a\nb\nc", ImportFormat::NamesOnly(Role::Ranged));
        assert_eq!(report.imported, 2);
        assert_eq!(report.skipped, vec!["c".to_string()]);
        assert!(roster.is_full());
    }

    #[test]
    fn test_restore_keeps_ids_and_continues_numbering() {
        let saved = vec![
            Raider { id: OccupantId(4), name: "Velen".into(), role: Role::Healer, slot: Some(9) },
            Raider { id: OccupantId(2), name: "Tyrande".into(), role: Role::Ranged, slot: None },
        ];
        let mut roster = Roster::restore(saved).expect("restore");
        assert_eq!(roster.len(), 2);
        assert_eq!(roster.get(OccupantId(4)).and_then(|r| r.slot), None);
        assert_eq!(roster.add("Maiev", Role::Melee), Ok(OccupantId(5)));
    }

    #[test]
    fn test_restore_rejects_duplicate_ids() {
        let raider = Raider {
            id: OccupantId(1),
            name: "Illidan".into(),
            role: Role::Melee,
            slot: None,
        };
        assert_eq!(
            Roster::restore(vec![raider.clone(), raider]),
            Err(RosterError::DuplicateRaider(OccupantId(1)))
        );
    }

    #[test]
    fn test_csv_empty_name_skipped() {
        let mut roster = Roster::new();
        let report = roster.bulk_import(" , melee", ImportFormat::Csv);
        assert_eq!(report.imported, 0);
        assert_eq!(report.skipped.len(), 1);
    }
}
