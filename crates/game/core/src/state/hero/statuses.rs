//! Status bookkeeping and tick dispatch.

use std::collections::VecDeque;

use crate::env::Env;
use crate::state::error::StatusError;
use crate::state::status::{Status, StatusTick, UpdateType};

use super::Hero;

impl Hero {
    pub fn statuses(&self) -> &[Status] {
        &self.statuses
    }

    pub fn status(&self, name: &str) -> Option<&Status> {
        self.statuses.iter().find(|status| status.name() == name)
    }

    pub fn has_status(&self, name: &str) -> bool {
        self.status(name).is_some()
    }

    /// Attaches a status. Names are unique per hero; a second status with the
    /// same name is rejected and the list is left unchanged.
    pub fn add_status(&mut self, status: Status, env: &mut Env) -> Result<(), StatusError> {
        if self.has_status(status.name()) {
            return Err(self.report(StatusError::Duplicate(status.name().to_owned()), env));
        }
        tracing::debug!(id = %self.id, status = status.name(), "status added");
        self.statuses.push(status);
        Ok(())
    }

    /// Detaches `status` (matched by name). Returns whether anything was removed.
    pub fn remove_status(&mut self, status: &Status) -> bool {
        self.remove_status_named(status.name())
    }

    pub fn remove_status_named(&mut self, name: &str) -> bool {
        match self.statuses.iter().position(|status| status.name() == name) {
            Some(index) => {
                self.statuses.remove(index);
                self.status_queue.retain(|queued| queued != name);
                true
            }
            None => false,
        }
    }

    /// Runs one update for every status of the given phase, in list order.
    ///
    /// The matching statuses are fixed when the pass starts: statuses added by
    /// a behavior wait for the next pass, and statuses a behavior removes are
    /// skipped. Only the status being updated is detached while its behavior
    /// runs; every other status stays visible to `has_status`,
    /// `add_status` and `remove_status`.
    ///
    /// Statuses that report [`StatusTick::Expired`] are removed. Returns the
    /// number of updates dispatched.
    pub fn update_statuses(&mut self, update_type: UpdateType, env: &mut Env) -> usize {
        let due: VecDeque<String> = self
            .statuses
            .iter()
            .filter(|status| status.update_type() == update_type)
            .map(|status| status.name().to_owned())
            .collect();
        let outer = std::mem::replace(&mut self.status_queue, due);
        let mut dispatched = 0;

        while let Some(name) = self.status_queue.pop_front() {
            let Some(index) = self.statuses.iter().position(|status| status.name() == name)
            else {
                continue;
            };
            let mut status = self.statuses.remove(index);
            dispatched += 1;

            if status.tick(self, env) == StatusTick::Expired {
                tracing::debug!(id = %self.id, status = status.name(), "status expired");
                continue;
            }
            if self.has_status(status.name()) {
                tracing::debug!(id = %self.id, status = status.name(), "status replaced during update");
                continue;
            }
            let index = index.min(self.statuses.len());
            self.statuses.insert(index, status);
        }

        self.status_queue = outer;
        tracing::trace!(id = %self.id, %update_type, dispatched, "statuses updated");
        dispatched
    }
}
