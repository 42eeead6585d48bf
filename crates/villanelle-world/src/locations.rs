use std::collections::{BTreeMap, BTreeSet, VecDeque};

use crate::error::{NavError, Result};

/// Undirected adjacency graph of named locations.
///
/// Neighbor lists keep insertion order and are not deduplicated; breadth-first search visits
/// neighbors in that order, which makes next-hop answers deterministic.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct LocationGraph {
    adjacency: BTreeMap<String, Vec<String>>,
}

impl LocationGraph {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers `name` and links it both ways with every entry of `adjacent`.
    pub fn add_location<S: AsRef<str>>(&mut self, name: &str, adjacent: &[S]) {
        let entry = self.adjacency.entry(name.to_owned()).or_default();
        entry.extend(adjacent.iter().map(|n| n.as_ref().to_owned()));

        for neighbor in adjacent {
            self.adjacency
                .entry(neighbor.as_ref().to_owned())
                .or_default()
                .push(name.to_owned());
        }
    }

    pub fn contains(&self, name: &str) -> bool {
        self.adjacency.contains_key(name)
    }

    pub fn locations(&self) -> impl Iterator<Item = &str> + '_ {
        self.adjacency.keys().map(String::as_str)
    }

    pub fn neighbors(&self, name: &str) -> &[String] {
        self.adjacency.get(name).map(Vec::as_slice).unwrap_or(&[])
    }

    pub fn are_adjacent(&self, a: &str, b: &str) -> bool {
        if !self.contains(a) || !self.contains(b) {
            tracing::debug!(a, b, "adjacency query on unknown location");
            return false;
        }
        self.neighbors(a).iter().any(|n| n == b)
    }

    /// Breadth-first shortest path, both endpoints included.
    pub fn shortest_path(&self, start: &str, destination: &str) -> Result<Vec<String>> {
        if start == destination {
            return Ok(vec![start.to_owned()]);
        }
        for name in [start, destination] {
            if !self.contains(name) {
                tracing::debug!(location = name, "pathfinding on unknown location");
                return Err(NavError::UnknownLocation(name.to_owned()));
            }
        }

        let mut came_from: BTreeMap<&str, &str> = BTreeMap::new();
        let mut visited: BTreeSet<&str> = BTreeSet::from([start]);
        let mut open: VecDeque<&str> = VecDeque::from([start]);

        while let Some(current) = open.pop_front() {
            if current == destination {
                break;
            }
            for neighbor in self.neighbors(current) {
                if visited.insert(neighbor.as_str()) {
                    came_from.insert(neighbor.as_str(), current);
                    open.push_back(neighbor.as_str());
                }
            }
        }

        if !came_from.contains_key(destination) {
            tracing::warn!(start, destination, "destination unreachable");
            return Err(NavError::Unreachable {
                start: start.to_owned(),
                destination: destination.to_owned(),
            });
        }

        let mut path = vec![destination.to_owned()];
        let mut current = destination;
        while let Some(&prev) = came_from.get(current) {
            path.push(prev.to_owned());
            current = prev;
        }
        path.reverse();
        Ok(path)
    }

    /// The single hop to take from `start` toward `destination`; `start` itself when they match.
    pub fn next_location(&self, start: &str, destination: &str) -> Result<String> {
        let mut path = self.shortest_path(start, destination)?;
        if path.len() == 1 {
            return Ok(path.swap_remove(0));
        }
        Ok(path.swap_remove(1))
    }
}
