//! Update side: validate and apply schedule replacements
//!
//! A batch is all-or-nothing. Under one write acquisition the whole
//! envelope is resolved first; only when every station, direction and
//! line checks out are the times replaced. The first invalid element
//! fails the call and leaves the system untouched.

use crate::error::{Result, TransitError};
use crate::model::{direction_slot, StationIndex, System, Update};

use super::Engine;

/// A line update that passed validation
struct ResolvedUpdate<'a> {
    /// Position of the station in `System::stops`
    position: usize,
    slot: usize,
    line_id: &'a str,
    times: &'a [i64],
}

impl Engine {
    /// Apply an update envelope atomically
    ///
    /// Returns the number of lines whose times were replaced.
    pub fn apply_updates(&self, update: &Update) -> Result<usize> {
        let index = self.store.index();

        let result = self.store.write(|system| -> Result<usize> {
            let resolved = resolve(system, index, update)?;

            for target in &resolved {
                let station = &mut system.stops[target.position];
                if let Some(line) = station.line_mut(target.slot, target.line_id) {
                    line.times = target.times.to_vec();
                }
            }

            Ok(resolved.len())
        });

        match &result {
            Ok(lines) => tracing::debug!(
                "Applied update to {} lines across {} stations",
                lines,
                update.stops.len()
            ),
            Err(e) => tracing::warn!("Rejected update: {}", e),
        }

        result
    }
}

/// Validate every element of the envelope in order
///
/// Station first, then per line the direction index, then the line id.
fn resolve<'a>(
    system: &System,
    index: &StationIndex,
    update: &'a Update,
) -> Result<Vec<ResolvedUpdate<'a>>> {
    let mut resolved = Vec::with_capacity(update.line_update_count());

    for station_update in &update.stops {
        let position = index
            .position(&station_update.station_id)
            .ok_or(TransitError::InvalidStation)?;
        let station = &system.stops[position];

        for line_update in &station_update.lines {
            let slot = direction_slot(line_update.index)?;

            if station.line(slot, &line_update.line_id).is_none() {
                return Err(TransitError::InvalidLine);
            }

            resolved.push(ResolvedUpdate {
                position,
                slot,
                line_id: &line_update.line_id,
                times: &line_update.times,
            });
        }
    }

    Ok(resolved)
}
