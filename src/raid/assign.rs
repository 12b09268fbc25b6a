//! Slot Assignment
//!
//! Role-based auto assignment and id-based carry-over between layouts.

use std::collections::{HashMap, HashSet, VecDeque};

use super::roster::{RaiderId, Roster};
use crate::layout::{Role, Slot};

/// Clear every slot occupant and every raider's slot.
pub fn clear_assignments(roster: &mut Roster, slots: &mut [Slot]) {
    for slot in slots.iter_mut() {
        slot.assigned = None;
    }
    roster.clear_slots();
}

/// Put `raider` into slot `slot_index`, both sides updated.
fn seat(roster: &mut Roster, slots: &mut [Slot], raider: RaiderId, slot_index: usize) {
    let slot = &mut slots[slot_index];
    slot.assigned = Some(raider);
    let slot_id = slot.id;
    if let Some(r) = roster.get_mut(raider) {
        r.slot = Some(slot_id);
    }
}

/// Assign raiders to slots by role, replacing any previous assignment.
///
/// Order: melee DPS, then tanks, into melee slots first; then ranged DPS
/// and healers into ranged slots first. Each group spills over into the
/// other pool when its preferred pool runs out. Within a pool, slots are
/// taken in id order. Returns the number of raiders seated.
pub fn auto_assign(roster: &mut Roster, slots: &mut [Slot]) -> usize {
    clear_assignments(roster, slots);

    let mut melee_pool: VecDeque<usize> = VecDeque::new();
    let mut ranged_pool: VecDeque<usize> = VecDeque::new();
    for (index, slot) in slots.iter().enumerate() {
        match slot.preferred_role {
            Role::Melee => melee_pool.push_back(index),
            _ => ranged_pool.push_back(index),
        }
    }

    let by_role = |role: Role| -> Vec<RaiderId> {
        roster.iter().filter(|r| r.role == role).map(|r| r.id).collect()
    };
    let close_range: Vec<RaiderId> = [by_role(Role::Melee), by_role(Role::Tank)].concat();
    let long_range: Vec<RaiderId> = [by_role(Role::Ranged), by_role(Role::Healer)].concat();

    let mut seated = 0;
    for raider in close_range {
        if let Some(index) = melee_pool.pop_front().or_else(|| ranged_pool.pop_front()) {
            seat(roster, slots, raider, index);
            seated += 1;
        }
    }
    for raider in long_range {
        if let Some(index) = ranged_pool.pop_front().or_else(|| melee_pool.pop_front()) {
            seat(roster, slots, raider, index);
            seated += 1;
        }
    }

    log::debug!("auto-assigned {seated} of {} raiders", roster.len());
    seated
}

/// Copy occupants from `previous` onto `next` by slot id and resync the
/// roster so every raider points at the slot it now holds (or none, if its
/// slot id no longer exists). Unknown raiders are dropped and a raider listed
/// in several slots keeps only the first. Returns the number of carried
/// occupants.
pub fn carry_over(previous: &[Slot], next: &mut [Slot], roster: &mut Roster) -> usize {
    let occupants: HashMap<u32, RaiderId> = previous
        .iter()
        .filter_map(|s| s.assigned.map(|raider| (s.id, raider)))
        .collect();

    roster.clear_slots();
    let mut seated: HashSet<RaiderId> = HashSet::new();
    let mut carried = 0;
    for slot in next.iter_mut() {
        slot.assigned = occupants
            .get(&slot.id)
            .copied()
            .filter(|raider| roster.get(*raider).is_some() && seated.insert(*raider));
        if let Some(raider) = slot.assigned {
            if let Some(r) = roster.get_mut(raider) {
                r.slot = Some(slot.id);
            }
            carried += 1;
        }
    }
    carried
}
