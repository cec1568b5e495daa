//! Weighted round-robin load balancing strategy.
//!
//! Implements the LVS weighted round-robin schedule
//! (<http://kb.linuxvirtualserver.org/wiki/Weighted_Round-Robin_Scheduling>).
//! A threshold starts at the maximum weight and drops by the gcd of all
//! weights on every sweep through the server list; a server is picked when
//! its weight reaches the threshold. Over one cycle each server is returned
//! `weight / gcd` times and weight-0 servers are never returned.

use std::collections::HashMap;
use std::sync::{Mutex, PoisonError};

use axum::body::Body;
use axum::http::Request;
use url::Url;

use crate::load_balancer::backend::{Backend, BackendError};

/// A server and its validated weight.
#[derive(Debug, Clone, PartialEq, Eq)]
struct Server {
    url: Url,
    weight: u64,
}

/// Schedule position. Only mutated under the lock.
#[derive(Debug, Default)]
struct Schedule {
    /// Last returned position, `None` before the first call.
    index: Option<usize>,
    current_weight: u64,
}

/// Weighted round-robin selector.
///
/// The server list, `max_weight` and `weight_gcd` are fixed at construction;
/// only the schedule position changes, and it is guarded by a mutex held for
/// the whole of one selection.
#[derive(Debug)]
pub struct WeightedRoundRobin {
    servers: Vec<Server>,
    schedule: Mutex<Schedule>,
    max_weight: u64,
    weight_gcd: u64,
}

impl WeightedRoundRobin {
    /// Build a selector from a URL to weight mapping.
    ///
    /// Servers are ordered by URL so equal mappings yield equal schedules.
    pub fn new(servers: HashMap<Url, i64>) -> Result<Self, BackendError> {
        let mut servers: Vec<(Url, i64)> = servers.into_iter().collect();
        servers.sort_by(|(a, _), (b, _)| a.as_str().cmp(b.as_str()));
        Self::from_weights(servers)
    }

    /// Build a selector that sweeps the servers in the given order.
    pub fn from_weights<I>(servers: I) -> Result<Self, BackendError>
    where
        I: IntoIterator<Item = (Url, i64)>,
    {
        let mut ingested = Vec::new();
        let mut max_weight: u64 = 0;
        let mut weight_gcd = None;

        for (url, weight) in servers {
            let weight = match u64::try_from(weight) {
                Ok(w) => w,
                Err(_) => {
                    tracing::warn!(server = %url, weight, "Rejected server with negative weight");
                    return Err(BackendError::NegativeWeight { url, weight });
                }
            };

            max_weight = max_weight.max(weight);
            weight_gcd = Some(match weight_gcd {
                None => weight,
                Some(g) => gcd(g, weight),
            });
            ingested.push(Server { url, weight });
        }

        if ingested.is_empty() {
            return Err(BackendError::EmptyServerSet);
        }
        if max_weight == 0 {
            tracing::warn!(servers = ingested.len(), "Rejected server set with only zero weights");
            return Err(BackendError::AllZeroWeights);
        }
        // max_weight > 0 implies the fold saw a non-zero weight, so gcd > 0.
        let weight_gcd = weight_gcd.unwrap_or(max_weight);

        tracing::debug!(
            servers = ingested.len(),
            max_weight,
            weight_gcd,
            "Weighted round-robin backend created"
        );

        Ok(Self {
            servers: ingested,
            schedule: Mutex::new(Schedule::default()),
            max_weight,
            weight_gcd,
        })
    }

    /// Number of servers, including weight-0 ones.
    pub fn len(&self) -> usize {
        self.servers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.servers.is_empty()
    }

    pub fn max_weight(&self) -> u64 {
        self.max_weight
    }

    pub fn weight_gcd(&self) -> u64 {
        self.weight_gcd
    }

    /// Servers in sweep order with their weights.
    pub fn servers(&self) -> impl Iterator<Item = (&Url, u64)> + '_ {
        self.servers.iter().map(|s| (&s.url, s.weight))
    }

    /// Number of selections in one full cycle of the schedule, or `None`
    /// if it does not fit in a `u64`.
    pub fn cycle_len(&self) -> Option<u64> {
        self.servers
            .iter()
            .try_fold(0u64, |total, s| total.checked_add(s.weight / self.weight_gcd))
    }

    fn next_server(&self) -> &Server {
        // The schedule is only written through plain assignments, so a
        // poisoned lock still guards a consistent state.
        let mut schedule = self.schedule.lock().unwrap_or_else(PoisonError::into_inner);
        let len = self.servers.len();

        loop {
            let index = match schedule.index {
                Some(i) => (i + 1) % len,
                None => 0,
            };
            schedule.index = Some(index);

            if index == 0 {
                schedule.current_weight = if schedule.current_weight <= self.weight_gcd {
                    self.max_weight
                } else {
                    schedule.current_weight - self.weight_gcd
                };
            }

            let server = &self.servers[index];
            if server.weight >= schedule.current_weight {
                return server;
            }
        }
    }
}

impl Backend for WeightedRoundRobin {
    fn get_server(&self, _req: &Request<Body>) -> &Url {
        &self.next_server().url
    }
}

fn gcd(mut a: u64, mut b: u64) -> u64 {
    while b != 0 {
        (a, b) = (b, a % b);
    }
    a
}
